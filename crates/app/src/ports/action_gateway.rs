//! Action gateway port — sends server action requests to the backend.

use std::future::Future;

use pyropanel_domain::action::{ActionRequest, ActionResponse};

/// Why an action request failed.
///
/// All variants are shown to the user as the same generic failure; the
/// distinction only reaches the developer log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend answered HTTP {status}")]
    Status {
        status: u16,
        /// Error text from the response body, when the backend sent one.
        detail: Option<String>,
    },
    /// A 2xx response whose body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Performs one HTTP call per [`ActionRequest`].
///
/// Implementations must treat every non-2xx status as
/// [`ActionError::Status`], whatever the body says.
pub trait ActionGateway {
    /// `POST {"action": ...}` to the request's endpoint.
    fn send(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ActionError>>;
}

impl<T: ActionGateway> ActionGateway for std::rc::Rc<T> {
    fn send(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ActionError>> {
        (**self).send(request)
    }
}
