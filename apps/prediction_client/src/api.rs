use astro_prediction::{PredictResponse, PredictionRequest};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize)]
struct PredictReply {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

/// HTTP client for the prediction service. One request per call, never retried.
pub struct PredictionApi {
    client: Client,
    base_url: String,
}

impl PredictionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/api/predict", self.base_url.trim_end_matches('/'))
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictResponse, ClientError> {
        tracing::debug!(url = %self.predict_url(), ?request, "Sending data to server");

        let response = self
            .client
            .post(self.predict_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        // A status line arrived, so a failed body read still means the server was reached.
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let message = body["message"]
                .as_str()
                .or_else(|| body["error"].as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Server responded with status: {}", status.as_u16()));
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let reply: PredictReply = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        match reply.result {
            Some(result) if !result.is_empty() => Ok(PredictResponse {
                result,
                note: reply.note,
            }),
            _ => Err(ClientError::EmptyResult),
        }
    }
}
