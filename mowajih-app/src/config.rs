use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use mowajih::{DEFAULT_ENDPOINT, Route};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

pub const DEFAULT_CONFIG: &str = "mowajih.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Full-screen terminal UI
    #[default]
    Tui,
    /// Line-by-line prompts
    Cli,
}

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub endpoint: Option<String>,
    pub questions: Option<PathBuf>,
    pub frontend: Option<Frontend>,
    pub route: Option<String>,
    pub log_filter: Option<String>,
}

impl FileSettings {
    pub fn load(path: &Path, required: bool) -> anyhow::Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no settings file");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read settings '{}'", path.display()));
            }
        };
        Self::parse(&raw).with_context(|| format!("invalid settings in '{}'", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub questions: Option<PathBuf>,
    pub frontend: Frontend,
    pub route: Route,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            questions: None,
            frontend: Frontend::default(),
            route: Route::default(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Read the settings file named by `cli` and apply the command line on
    /// top. Environment variables arrive through `cli`.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let (path, required) = cli.config_path();
        let file = FileSettings::load(&path, required)?;
        Self::layered(file, cli)
    }

    /// Command line (and env) wins over the file, the file over defaults.
    pub fn layered(file: FileSettings, cli: &Cli) -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Some(v) = file.endpoint {
            settings.endpoint = v;
        }
        if let Some(v) = file.questions {
            settings.questions = Some(v);
        }
        if let Some(v) = file.frontend {
            settings.frontend = v;
        }
        if let Some(v) = file.route {
            settings.route = Route::from_path(&v)
                .with_context(|| format!("unknown route '{v}' in settings"))?;
        }
        if let Some(v) = file.log_filter {
            settings.log_filter = v;
        }

        if let Some(v) = &cli.endpoint {
            settings.endpoint = v.clone();
        }
        if let Some(v) = &cli.questions {
            settings.questions = Some(v.clone());
        }
        if let Some(v) = cli.frontend {
            settings.frontend = v;
        }
        if let Some(v) = cli.route {
            settings.route = v;
        }
        if let Some(v) = &cli.log_filter {
            settings.log_filter = v.clone();
        }

        Ok(settings)
    }

    /// Where the chosen frontend opens. Only the TUI can start elsewhere
    /// than the questionnaire.
    pub fn start_route(&self) -> Route {
        match self.frontend {
            Frontend::Tui => self.route,
            Frontend::Cli => Route::Questionnaire,
        }
    }
}
