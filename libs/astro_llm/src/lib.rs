use async_trait::async_trait;

pub mod error;
pub mod openai_compatible;

pub use error::LLMError;
pub use openai_compatible::OpenAICompatibleService;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub enum LLMProvider {
    /// Any endpoint speaking the OpenAI chat-completions protocol (OpenRouter by default).
    OpenAICompatible,
}

/// One system + user exchange sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

#[async_trait]
pub trait LLMService {
    async fn execute_prompt(&self, request: &ChatRequest) -> Result<String, LLMError>;
}

#[derive(Debug, Clone)]
pub struct LLMClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub referer: Option<String>,
    pub title: Option<String>,
}

impl LLMClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            referer: None,
            title: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Provider-agnostic front for the configured service. Each prompt is sent once.
pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: LLMClientConfig) -> Self {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::OpenAICompatible => Box::new(OpenAICompatibleService::new(config)),
        };

        Self { service }
    }
}

#[async_trait]
impl LLMService for LLMClient {
    async fn execute_prompt(&self, request: &ChatRequest) -> Result<String, LLMError> {
        self.service.execute_prompt(request).await
    }
}
