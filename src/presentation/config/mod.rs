mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    IntakeSettings, LoggingSettings, ServerSettings, Settings, StorageProviderSetting,
    StorageSettings,
};
