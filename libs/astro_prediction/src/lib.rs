pub mod fallback;
pub mod format;
pub mod prompt;
pub mod request;
pub mod wire;
pub mod zodiac;

pub use fallback::{generate_fallback_prediction, OFFLINE_CLIENT_NOTE, OFFLINE_SERVICE_NOTE};
pub use format::{format_prediction, render_prediction_html};
pub use prompt::CareerPredictionPrompt;
pub use request::{PredictRequestBody, PredictionRequest, ValidationError};
pub use wire::{ErrorResponse, HealthResponse, PredictResponse};
pub use zodiac::{UnknownZodiacSign, ZodiacSign, GENERIC_ZODIAC_PREDICTION};
