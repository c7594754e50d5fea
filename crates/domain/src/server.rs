//! Server actions and lifecycle statuses.

use crate::error::ValidationError;

define_open_enum!(
    /// A user-initiated command targeting one managed server.
    ServerAction {
        /// Boot a stopped server.
        Start => "start",
        /// Shut a running server down.
        Stop => "stop",
        /// Stop then start again.
        Restart => "restart",
    }
);

define_open_enum!(
    /// Lifecycle state of a managed server, as shown by its status indicator.
    ServerStatus {
        Running => "running",
        Stopped => "stopped",
        Error => "error",
    }
);

impl ServerAction {
    /// Parse an action name as found in a `data-action` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAction`] for an empty name. Unknown
    /// names are kept verbatim.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyAction);
        }
        Ok(Self::from(raw))
    }

    /// Status to display after this action succeeds.
    ///
    /// This is a guess, not the real post-action state: `stop` maps to
    /// [`ServerStatus::Stopped`], every other action to
    /// [`ServerStatus::Running`].
    #[must_use]
    pub fn optimistic_status(&self) -> ServerStatus {
        match self {
            Self::Stop => ServerStatus::Stopped,
            _ => ServerStatus::Running,
        }
    }
}

impl ServerStatus {
    /// Status classes a status indicator may carry; all are cleared before
    /// a new one is applied.
    pub const KNOWN_CSS_CLASSES: [&'static str; 3] =
        ["status-running", "status-stopped", "status-error"];

    /// CSS class carried by a status indicator showing this status.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("status-{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_action_name() {
        assert_eq!(ServerAction::parse(""), Err(ValidationError::EmptyAction));
    }

    #[test]
    fn should_keep_unknown_action_name() {
        assert_eq!(
            ServerAction::parse("backup"),
            Ok(ServerAction::Other("backup".to_string()))
        );
    }

    #[test]
    fn should_map_stop_to_stopped() {
        assert_eq!(ServerAction::Stop.optimistic_status(), ServerStatus::Stopped);
    }

    #[test]
    fn should_map_start_and_restart_to_running() {
        assert_eq!(ServerAction::Start.optimistic_status(), ServerStatus::Running);
        assert_eq!(
            ServerAction::Restart.optimistic_status(),
            ServerStatus::Running
        );
    }

    #[test]
    fn should_map_unknown_action_to_running() {
        let action = ServerAction::from("backup");
        assert_eq!(action, ServerAction::Other("backup".to_string()));
        assert_eq!(action.optimistic_status(), ServerStatus::Running);
    }

    #[test]
    fn should_parse_known_actions() {
        assert_eq!(ServerAction::from("start"), ServerAction::Start);
        assert_eq!(ServerAction::from("stop"), ServerAction::Stop);
        assert_eq!(ServerAction::from("restart"), ServerAction::Restart);
    }

    #[test]
    fn should_be_case_sensitive() {
        assert_eq!(
            ServerAction::from("STOP"),
            ServerAction::Other("STOP".to_string())
        );
        assert_eq!(ServerAction::from("STOP").optimistic_status(), ServerStatus::Running);
    }

    #[test]
    fn should_build_status_css_class() {
        assert_eq!(ServerStatus::Running.css_class(), "status-running");
        assert_eq!(
            ServerStatus::from("installing").css_class(),
            "status-installing"
        );
    }

    #[test]
    fn should_list_every_known_status_class() {
        for status in [ServerStatus::Running, ServerStatus::Stopped, ServerStatus::Error] {
            assert!(ServerStatus::KNOWN_CSS_CLASSES.contains(&status.css_class().as_str()));
        }
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&ServerStatus::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let parsed: ServerStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(parsed, ServerStatus::Other("paused".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"paused\"");
    }

    #[test]
    fn should_display_wire_value() {
        assert_eq!(ServerAction::Restart.to_string(), "restart");
        assert_eq!(ServerStatus::Stopped.to_string(), "stopped");
    }
}
