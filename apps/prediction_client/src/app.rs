use astro_prediction::{
    generate_fallback_prediction, render_prediction_html, PredictionRequest, OFFLINE_CLIENT_NOTE,
};

use crate::api::PredictionApi;
use crate::error::ClientError;
use crate::history::{HistoryEntry, HistoryStore};

fn render(text: &str, note: Option<&str>, plain: bool) -> String {
    if plain {
        match note {
            Some(note) => format!("[{}]\n\n{}", note, text.trim()),
            None => text.trim().to_string(),
        }
    } else {
        render_prediction_html(text, note)
    }
}

/// Requests a prediction from the service and records it. Failures are returned, never retried.
pub async fn run_predict(
    api: &PredictionApi,
    history: &HistoryStore,
    request: PredictionRequest,
    plain: bool,
) -> Result<String, ClientError> {
    let response = api.predict(&request).await?;
    let output = render(&response.result, response.note.as_deref(), plain);

    history.record(HistoryEntry::new(request, response.result, false))?;
    Ok(output)
}

/// Produces the canned prediction locally and records it as an offline entry.
pub fn run_offline(
    history: &HistoryStore,
    request: PredictionRequest,
    plain: bool,
) -> Result<String, ClientError> {
    let text = generate_fallback_prediction(request.name.as_deref(), &request.zodiac, &request.skills);
    let output = render(&text, Some(OFFLINE_CLIENT_NOTE), plain);

    history.record(HistoryEntry::new(request, text, true))?;
    Ok(output)
}

pub fn run_history(history: &HistoryStore, limit: Option<usize>) -> String {
    let entries = history.load();
    if entries.is_empty() {
        return "No predictions yet.".to_string();
    }

    entries
        .iter()
        .take(limit.unwrap_or(entries.len()))
        .map(|entry| {
            let skills = if entry.request.skills.is_empty() {
                "-".to_string()
            } else {
                entry.request.skills.join(", ")
            };
            format!(
                "{}  {:<12} {:<12} {}{}  skills: {}",
                entry.timestamp,
                entry.request.name.as_deref().unwrap_or("(anonymous)"),
                entry.request.zodiac,
                entry.request.dob,
                if entry.offline { "  [offline]" } else { "" },
                skills
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
