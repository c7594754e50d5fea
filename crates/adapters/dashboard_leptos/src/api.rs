//! HTTP client for server actions, wrapping `gloo-net`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use pyropanel_app::ports::{ActionError, ActionGateway};
use pyropanel_domain::action::{ActionRequest, ActionResponse};
use serde::Deserialize;

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Error text of a non-2xx body: `detail`, else `error`, when it is a string.
fn error_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    body.detail.or(body.error)
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ActionError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let detail = resp.text().await.ok().as_deref().and_then(error_detail);
    Err(ActionError::Status { status, detail })
}

/// Sends server actions to `{base_path}/servers/{id}/action`.
#[derive(Debug, Clone)]
pub struct HttpActionGateway {
    base_path: String,
}

impl HttpActionGateway {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ActionGateway for HttpActionGateway {
    fn send(
        &self,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ActionError>> {
        let url = request.endpoint(&self.base_path);
        let built = Request::post(&url)
            .header("Accept", "application/json")
            .json(&request.body());
        async move {
            let req = built.map_err(|err| ActionError::Network(err.to_string()))?;
            let resp = req
                .send()
                .await
                .map_err(|err| ActionError::Network(err.to_string()))?;
            let resp = check_response(resp).await?;
            resp.json::<ActionResponse>()
                .await
                .map_err(|err| ActionError::Decode(err.to_string()))
        }
    }
}
