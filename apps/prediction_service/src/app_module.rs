use std::sync::Arc;

use astro_llm::LLMService;

use crate::prediction::prediction_service::PredictionService;

#[derive(Clone)]
pub struct AppService {
    pub prediction_service: PredictionService,
}

impl AppService {
    pub fn new(llm: Arc<dyn LLMService + Send + Sync>) -> Self {
        let prediction_service = PredictionService::new(llm);

        Self { prediction_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(llm: Arc<dyn LLMService + Send + Sync>) -> Self {
        Self {
            service: AppService::new(llm),
        }
    }
}
