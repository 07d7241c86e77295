use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::ObjectStore;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioLocation;

/// Filesystem-backed store rooted above the buckets: objects live at
/// `<base_path>/<bucket>/<object_path>`.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::InvalidConfiguration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
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
