mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, OpenAiSettings, ServerSettings, Settings, StorageProviderSetting,
    StorageSettings,
};
