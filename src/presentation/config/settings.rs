use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::MAX_UPLOAD_BYTES;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub intake: IntakeSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeSettings {
    pub max_upload_bytes: u64,
    pub extraction_timeout_secs: u64,
    pub session_idle_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Memory,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            extraction_timeout_secs: 30,
            session_idle_ttl_secs: 1800,
        }
    }
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.toml` (optional) and
    /// `APP__SECTION__KEY` environment variables, in that order.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("intake.max_upload_bytes", MAX_UPLOAD_BYTES as i64)?
            .set_default("intake.extraction_timeout_secs", 30_i64)?
            .set_default("intake.session_idle_ttl_secs", 1800_i64)?
            .set_default("storage.provider", "memory")?
            .set_default("storage.local_path", "./data/ephemeral")?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", environment == Environment::Prod)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
