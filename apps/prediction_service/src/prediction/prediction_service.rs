use std::sync::Arc;

use astro_llm::{ChatRequest, LLMError, LLMService};
use astro_prediction::{
    generate_fallback_prediction, CareerPredictionPrompt, PredictRequestBody, PredictResponse,
    ValidationError, OFFLINE_SERVICE_NOTE,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// Text produced by the language model, returned verbatim.
    Generated(String),
    /// Canned text used because the model rejected our credentials.
    Fallback(String),
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        match prediction {
            Prediction::Generated(result) => PredictResponse { result, note: None },
            Prediction::Fallback(result) => PredictResponse {
                result,
                note: Some(OFFLINE_SERVICE_NOTE.to_string()),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] LLMError),
}

#[derive(Clone)]
pub struct PredictionService {
    llm: Arc<dyn LLMService + Send + Sync>,
}

impl PredictionService {
    pub fn new(llm: Arc<dyn LLMService + Send + Sync>) -> Self {
        Self { llm }
    }

    pub async fn predict(&self, body: PredictRequestBody) -> Result<Prediction, PredictionError> {
        let request = body.into_request()?;

        tracing::info!(
            name = request.name.as_deref().unwrap_or_default(),
            dob = %request.dob,
            location = %request.location,
            zodiac = %request.zodiac,
            "Processing prediction request"
        );

        let chat = ChatRequest::new(
            CareerPredictionPrompt::get_system_prompt(),
            CareerPredictionPrompt::get_prompt(&request),
        );

        tracing::info!("Sending request to language model");
        match self.llm.execute_prompt(&chat).await {
            Ok(text) => {
                tracing::info!("Response received successfully");
                Ok(Prediction::Generated(text))
            }
            Err(e) if e.is_authentication() => {
                tracing::warn!("Authentication failed, using fallback prediction: {}", e);
                Ok(Prediction::Fallback(generate_fallback_prediction(
                    request.name.as_deref(),
                    &request.zodiac,
                    &request.skills,
                )))
            }
            Err(e) => {
                tracing::error!("Language model call failed: {}", e);
                Err(e.into())
            }
        }
    }
}
