use std::path::Path;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

use super::Environment;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 200;
const DEFAULT_LOG_FILTER: &str = "info,docchat=debug,tower_http=debug";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    /// Echo client for running without credentials.
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub filter: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>` and `APP_*` variables, in that order.
    ///
    /// Nested keys use a double underscore, e.g. `APP_LLM__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment)
    }

    /// Same as [`Settings::load`], reading `appsettings.<env>` from `config_dir`.
    pub fn load_from(config_dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let settings_file = config_dir.join(format!("appsettings.{}", environment.as_str()));

        Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", DEFAULT_GEMINI_MODEL)?
            .set_default("llm.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("extraction.max_file_size_mb", DEFAULT_MAX_FILE_SIZE_MB as i64)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&settings_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            llm: LlmSettings {
                provider: LlmProvider::Gemini,
                api_key: String::new(),
                model: DEFAULT_GEMINI_MODEL.to_string(),
                base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            },
            extraction: ExtractionSettings {
                max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            },
            logging: LoggingSettings {
                filter: DEFAULT_LOG_FILTER.to_string(),
                enable_json: false,
            },
        }
    }
}
