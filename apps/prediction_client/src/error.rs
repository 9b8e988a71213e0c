use thiserror::Error;

/// Whether the last failure proves the server was reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unknown,
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// No HTTP response came back at all (connect, DNS, timeout, send failure).
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Prediction failed. Please try again.")]
    EmptyResult,

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl ClientError {
    pub fn reachability(&self) -> Reachability {
        match self {
            ClientError::Network(_) => Reachability::Unknown,
            _ => Reachability::Reachable,
        }
    }

    pub fn user_message(&self) -> String {
        match self.reachability() {
            Reachability::Unknown => {
                "Network error: Please check your internet connection".to_string()
            }
            Reachability::Reachable => format!("An error occurred: {}", self),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
