use std::sync::Arc;

use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path as StorePath;
use object_store::ObjectStore;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioLocation;

/// Blob-storage-backed store. The container is fixed at construction; the
/// bucket segment of the audio location maps to a top-level prefix inside
/// it, mirroring the local layout.
pub struct AzureAudioStore {
    inner: Arc<dyn ObjectStore>,
}

impl AzureAudioStore {
    pub fn new(account: &str, access_key: &str, container: &str) -> Result<Self, AudioStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| AudioStoreError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for AzureAudioStore {
    async fn fetch(&self, location: &AudioLocation) -> Result<Vec<u8>, AudioStoreError> {
        let store_path = StorePath::from(location.as_key());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| AudioStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
