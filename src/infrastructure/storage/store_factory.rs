use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::azure_store::AzureAudioStore;
use super::local_store::LocalAudioStore;

pub struct AudioStoreFactory;

impl AudioStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn AudioStore>, AudioStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store = LocalAudioStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Azure => {
                let account = settings.azure_account.as_deref().ok_or_else(|| {
                    AudioStoreError::InvalidConfiguration("azure_account required".into())
                })?;
                let key = settings.azure_access_key.as_deref().ok_or_else(|| {
                    AudioStoreError::InvalidConfiguration("azure_access_key required".into())
                })?;
                let container = settings.azure_container.as_deref().ok_or_else(|| {
                    AudioStoreError::InvalidConfiguration("azure_container required".into())
                })?;
                let store = AzureAudioStore::new(account, key, container)?;
                Ok(Arc::new(store))
            }
        }
    }
}
