use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated prediction request. Required birth fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub dob: String,
    pub tob: String,
    pub location: String,
    pub zodiac: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Body of `POST /api/predict` as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequestBody {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub tob: Option<String>,
    pub location: Option<String>,
    pub zodiac: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl PredictRequestBody {
    pub fn into_request(self) -> Result<PredictionRequest, ValidationError> {
        let mut missing = Vec::new();
        let dob = non_empty(self.dob);
        let tob = non_empty(self.tob);
        let location = non_empty(self.location);
        let zodiac = non_empty(self.zodiac);

        if dob.is_none() {
            missing.push("dob");
        }
        if tob.is_none() {
            missing.push("tob");
        }
        if location.is_none() {
            missing.push("location");
        }
        if zodiac.is_none() {
            missing.push("zodiac");
        }

        match (dob, tob, location, zodiac) {
            (Some(dob), Some(tob), Some(location), Some(zodiac)) => Ok(PredictionRequest {
                name: non_empty(self.name),
                gender: non_empty(self.gender),
                dob,
                tob,
                location,
                zodiac,
                skills: self.skills.unwrap_or_default(),
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl PredictionRequest {
    /// Skills joined for display, or `None` when no skill was selected.
    pub fn skills_list(&self) -> Option<String> {
        if self.skills.is_empty() {
            None
        } else {
            Some(self.skills.join(", "))
        }
    }
}
