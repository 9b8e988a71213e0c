pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod history;
pub mod logger;

pub use api::PredictionApi;
pub use error::{ClientError, HistoryError, Reachability};
pub use history::{HistoryEntry, HistoryStore};
