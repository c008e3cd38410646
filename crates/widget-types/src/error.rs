use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    #[error("Reply timed out after {0}ms")]
    ReplyTimeout(u64),

    #[error("Reply failed: {0}")]
    ReplyFailed(String),

    #[error("Invalid configuration: {field}: {message}")]
    ConfigurationInvalid { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl WidgetError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        WidgetError::ConfigurationInvalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}
