use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned error status: {status}, body: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response from language model: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    /// Classifies a non-2xx reply. A 401, or a message that talks about auth, is an auth failure.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 || message.to_lowercase().contains("auth") {
            LLMError::Authentication { status, message }
        } else {
            LLMError::Upstream { status, message }
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, LLMError::Authentication { .. })
    }
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LLMError::InvalidResponse(err.to_string())
        } else {
            LLMError::Network(err.to_string())
        }
    }
}
