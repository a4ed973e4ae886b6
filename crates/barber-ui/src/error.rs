//! Error types for binding and driving the page controller.

use thiserror::Error;

/// Result alias for controller operations.
pub type Result<T> = std::result::Result<T, UiError>;

/// Errors raised while binding to the page or projecting state onto it.
#[derive(Debug, Error)]
pub enum UiError {
    /// A required element was not present in the document.
    #[error("required element '#{id}' is missing from the page")]
    MissingElement {
        /// Identifier that failed to resolve.
        id: String,
    },
    /// Element exists but does not carry a form value.
    #[error("element '#{id}' is not a form control")]
    NotAFormControl {
        /// Identifier of the offending element.
        id: String,
    },
    /// The DOM rejected a mutation.
    #[error("dom operation '{operation}' failed: {detail}")]
    Dom {
        /// Operation that was attempted.
        operation: &'static str,
        /// Detail reported by the host.
        detail: String,
    },
    /// Embedded configuration document was not valid JSON for [`crate::config::PageConfig`].
    #[error("failed to parse page configuration")]
    ConfigParse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// Configuration parsed but failed validation.
    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig {
        /// Dotted path of the field that failed validation.
        field: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Installing the tracing subscriber failed.
    #[error("failed to install tracing subscriber: {detail}")]
    Telemetry {
        /// Subscriber error detail.
        detail: String,
    },
    /// No window or document was available.
    #[error("no document is available")]
    NoDocument,
    /// The controller was already borrowed by a running handler.
    #[error("controller is busy handling another event")]
    ControllerBusy,
    /// An exported entry point was invoked before the controller was bound.
    #[error("controller has not been started")]
    NotStarted,
}

impl UiError {
    /// Shorthand for [`UiError::MissingElement`].
    #[must_use]
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    pub(crate) fn invalid(field: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn missing_element_message_names_the_id() {
        let err = UiError::missing("menu-toggle");
        assert_eq!(
            err.to_string(),
            "required element '#menu-toggle' is missing from the page"
        );
    }

    #[test]
    fn config_parse_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UiError::ConfigParse { source };
        assert!(std::error::Error::source(&err).is_some());
    }
}
