/// Error type shared by every popup action
use thiserror::Error;

/// Why an action failed. The `Display` text is what the popup shows inline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoutError {
    /// Bad user input; no call was attempted
    #[error("{0}")]
    Validation(String),

    #[error("No active tab found.")]
    NoActiveTab,

    /// The tab cannot host the content script, or it was opened before install
    #[error("Cannot access this page ({0}). Try refreshing the page and reopening the extension.")]
    PageUnreachable(String),

    /// Non-2xx response from the backend
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ScoutError {
    pub fn validation(message: &str) -> ScoutError {
        ScoutError::Validation(message.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::Decode(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ScoutError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ScoutError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_displays_message_verbatim() {
        let err = ScoutError::Backend {
            status: 400,
            message: "This URL is already being tracked.".to_string(),
        };

        assert_eq!(err.to_string(), "This URL is already being tracked.");
    }

    #[test]
    fn test_page_unreachable_advises_refresh() {
        let err = ScoutError::PageUnreachable("Receiving end does not exist".to_string());

        assert!(err.to_string().contains("refreshing the page"));
    }

    #[test]
    fn test_decode_error_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: ScoutError = parse.unwrap_err().into();

        assert!(matches!(err, ScoutError::Decode(_)));
    }
}
