use std::path::PathBuf;

use astro_prediction::PredictionRequest;
use clap::{Args, Parser, Subcommand};

use crate::api::DEFAULT_SERVER_URL;
use crate::history::DEFAULT_HISTORY_PATH;

#[derive(Debug, Parser)]
#[command(name = "astro-predict")]
#[command(about = "Astrology-based career predictions from your birth details and skills")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, env = "ASTRO_HISTORY_PATH", default_value = DEFAULT_HISTORY_PATH)]
    pub history: PathBuf,

    #[arg(long, global = true, env = "ASTRO_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask the prediction service for a career prediction
    Predict(PredictArgs),
    /// Generate the canned prediction locally, without contacting the service
    Offline(PredictArgs),
    /// Show past predictions, newest first
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: String,

    /// Time of birth (24-hour HH:MM)
    #[arg(long)]
    pub tob: String,

    /// Place of birth
    #[arg(long)]
    pub location: String,

    /// Zodiac sign, e.g. Aries
    #[arg(long)]
    pub zodiac: String,

    /// A skill you have; repeat for several, order is kept
    #[arg(long = "skill")]
    pub skills: Vec<String>,
}

impl FormArgs {
    pub fn into_request(self) -> PredictionRequest {
        PredictionRequest {
            name: self.name.filter(|n| !n.is_empty()),
            gender: self.gender.filter(|g| !g.is_empty()),
            dob: self.dob,
            tob: self.tob,
            location: self.location,
            zodiac: self.zodiac,
            skills: self.skills,
        }
    }
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the raw prediction text instead of HTML
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub limit: Option<usize>,
}
