//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A value failed a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Server identifiers are opaque but never empty.
    #[error("server id must not be empty")]
    EmptyServerId,
    /// Action names are open-ended but never empty.
    #[error("action name must not be empty")]
    EmptyAction,
    /// A rolling buffer needs room for at least one point.
    #[error("chart capacity must be greater than zero")]
    ZeroCapacity,
}

/// An inbound push message could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The frame is not JSON, or a known message kind has the wrong shape.
    #[error("malformed real-time message")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_validation_errors() {
        assert_eq!(
            ValidationError::EmptyServerId.to_string(),
            "server id must not be empty"
        );
        assert_eq!(
            ValidationError::ZeroCapacity.to_string(),
            "chart capacity must be greater than zero"
        );
    }

    #[test]
    fn should_keep_json_error_as_source() {
        let err: DecodeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
