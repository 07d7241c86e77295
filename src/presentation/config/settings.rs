use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub openai: OpenAiSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    /// May be empty; the pipeline records a configuration failure per
    /// consultation rather than refusing to boot.
    pub api_key: String,
    pub base_url: Option<String>,
    pub whisper_model: String,
    pub chat_model: String,
    pub language: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let provider = match std::env::var("STORAGE_PROVIDER")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "azure" => StorageProviderSetting::Azure,
            _ => StorageProviderSetting::Local,
        };

        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost:5432/mediscribe".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            openai: OpenAiSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                whisper_model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| "whisper-1".to_string()),
                chat_model: std::env::var("CHAT_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                language: std::env::var("TRANSCRIPTION_LANGUAGE")
                    .unwrap_or_else(|_| "es".to_string()),
                temperature: std::env::var("SUMMARY_TEMPERATURE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0.2),
            },
            storage: StorageSettings {
                provider,
                local_path: std::env::var("STORAGE_LOCAL_PATH")
                    .unwrap_or_else(|_| "./data/audio".to_string()),
                azure_account: std::env::var("AZURE_STORAGE_ACCOUNT").ok(),
                azure_access_key: std::env::var("AZURE_STORAGE_ACCESS_KEY").ok(),
                azure_container: std::env::var("AZURE_STORAGE_CONTAINER").ok(),
            },
        }
    }
}
