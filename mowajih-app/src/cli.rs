use std::path::PathBuf;

use mowajih::Route;

use crate::config::{DEFAULT_CONFIG, Frontend};

fn parse_route(path: &str) -> Result<Route, String> {
    Route::from_path(path).ok_or_else(|| format!("unknown route '{path}' (expected / or /summary)"))
}

/// Orientation questionnaire with program recommendations.
#[derive(Debug, clap::Parser)]
#[command(name = "mowajih", version, about)]
pub struct Cli {
    /// Settings file. Missing is fine unless given explicitly.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Recommendation service URL
    #[arg(short, long, env = "MOWAJIH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Question bank (JSON) to use instead of the built-in one
    #[arg(short, long, env = "MOWAJIH_QUESTIONS")]
    pub questions: Option<PathBuf>,

    /// Which frontend to run
    #[arg(short, long, value_enum, env = "MOWAJIH_FRONTEND")]
    pub frontend: Option<Frontend>,

    /// Route to start on (TUI only; the CLI always starts at the first question)
    #[arg(short, long, value_parser = parse_route)]
    pub route: Option<Route>,

    /// Log filter, e.g. `info` or `mowajih=debug`
    #[arg(long, env = "MOWAJIH_LOG")]
    pub log_filter: Option<String>,
}

impl Cli {
    /// The settings file to read and whether it has to exist.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        }
    }
}
