//! Action requests sent for a single server and the results they produce.

use serde::{Deserialize, Serialize};

use crate::id::ServerId;
use crate::server::ServerAction;

/// A command for one server, created on click and consumed by a single
/// HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub server_id: ServerId,
    pub action: ServerAction,
}

/// JSON body of an action request: `{"action": "<name>"}`.
#[derive(Debug, Serialize)]
pub struct ActionBody<'a> {
    pub action: &'a str,
}

/// JSON body of a successful action response.
///
/// Any JSON value is accepted. Only a string `message` field is kept; a
/// body of another shape simply carries no message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct ActionResponse {
    pub message: Option<String>,
}

impl From<serde_json::Value> for ActionResponse {
    fn from(body: serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        Self { message }
    }
}

/// Outcome of an action request as seen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub ok: bool,
    pub message: Option<String>,
}

impl ActionRequest {
    /// Create a request from already validated parts.
    #[must_use]
    pub fn new(server_id: ServerId, action: ServerAction) -> Self {
        Self { server_id, action }
    }

    /// Build a request from the raw `data-server-id` / `data-action`
    /// attribute values of an action control.
    ///
    /// Returns `None` when either value is absent or empty.
    #[must_use]
    pub fn from_attributes(server_id: Option<&str>, action: Option<&str>) -> Option<Self> {
        let server_id = ServerId::new(server_id?).ok()?;
        let action = ServerAction::parse(action?).ok()?;
        Some(Self::new(server_id, action))
    }

    /// Path of the per-server action endpoint under `api_base`
    /// (e.g. `/api` gives `/api/servers/{id}/action`).
    #[must_use]
    pub fn endpoint(&self, api_base: &str) -> String {
        format!(
            "{}/servers/{}/action",
            api_base.trim_end_matches('/'),
            self.server_id
        )
    }

    /// JSON body for this request.
    #[must_use]
    pub fn body(&self) -> ActionBody<'_> {
        ActionBody {
            action: self.action.as_str(),
        }
    }

    /// Message shown when the backend does not provide one.
    #[must_use]
    pub fn default_success_message(&self) -> String {
        format!("Server {} successful", self.action)
    }

    /// Message to show for a successful `response`: the backend's own
    /// message when it is present and non-empty, the default otherwise.
    #[must_use]
    pub fn success_message(&self, response: &ActionResponse) -> String {
        response
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .map_or_else(|| self.default_success_message(), str::to_string)
    }
}

impl ActionOutcome {
    /// A successful outcome carrying the message shown to the user.
    #[must_use]
    pub fn success(message: String) -> Self {
        Self {
            ok: true,
            message: Some(message),
        }
    }

    /// A failed outcome.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            ok: false,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, action: &str) -> ActionRequest {
        ActionRequest::from_attributes(Some(id), Some(action)).unwrap()
    }

    #[test]
    fn should_build_request_when_both_attributes_present() {
        let req = request("7", "restart");
        assert_eq!(req.server_id.as_str(), "7");
        assert_eq!(req.action, ServerAction::Restart);
    }

    #[test]
    fn should_return_none_when_server_id_missing() {
        assert!(ActionRequest::from_attributes(None, Some("start")).is_none());
    }

    #[test]
    fn should_return_none_when_action_missing() {
        assert!(ActionRequest::from_attributes(Some("7"), None).is_none());
    }

    #[test]
    fn should_treat_empty_attributes_as_missing() {
        assert!(ActionRequest::from_attributes(Some(""), Some("start")).is_none());
        assert!(ActionRequest::from_attributes(Some("7"), Some("")).is_none());
    }

    #[test]
    fn should_derive_endpoint_from_server_id() {
        assert_eq!(request("7", "stop").endpoint("/api"), "/api/servers/7/action");
        assert_eq!(request("7", "stop").endpoint("/api/"), "/api/servers/7/action");
    }

    #[test]
    fn should_serialize_body_with_action_only() {
        let req = request("7", "backup");
        let json = serde_json::to_value(req.body()).unwrap();
        assert_eq!(json, serde_json::json!({"action": "backup"}));
    }

    #[test]
    fn should_prefer_backend_message() {
        let req = request("7", "start");
        let resp = ActionResponse {
            message: Some("Server start command executed".to_string()),
        };
        assert_eq!(req.success_message(&resp), "Server start command executed");
    }

    #[test]
    fn should_fall_back_to_default_message() {
        let req = request("7", "start");
        assert_eq!(
            req.success_message(&ActionResponse::default()),
            "Server start successful"
        );
        let empty = ActionResponse {
            message: Some(String::new()),
        };
        assert_eq!(req.success_message(&empty), "Server start successful");
    }

    #[test]
    fn should_ignore_unknown_response_fields() {
        let resp: ActionResponse =
            serde_json::from_str(r#"{"status":"success","message":"ok"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("ok"));
        let bare: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(bare.message.is_none());
    }

    #[test]
    fn should_accept_any_json_body_without_message() {
        for body in [r#"{"message":42}"#, r#"{"message":{"text":"hi"}}"#, r#""ok""#, "true", "null", "[1,2]"] {
            let resp: ActionResponse = serde_json::from_str(body).unwrap();
            assert!(resp.message.is_none(), "{body}");
        }
    }

    #[test]
    fn should_reject_body_that_is_not_json() {
        assert!(serde_json::from_str::<ActionResponse>("<html>").is_err());
    }
}
