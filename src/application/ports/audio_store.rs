use std::io;

use async_trait::async_trait;

use crate::domain::AudioLocation;

/// Read-side view of the object store holding uploaded recordings. The
/// processor never writes audio; uploads belong to the surrounding
/// application.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn fetch(&self, location: &AudioLocation) -> Result<Vec<u8>, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("store configuration invalid: {0}")]
    InvalidConfiguration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
