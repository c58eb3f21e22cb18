mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseProvider, DatabaseSettings, LlmProvider, LlmSettings, LoggingSettings,
    ServerSettings, Settings, StorageProvider, StorageSettings, SummarySettings,
};
