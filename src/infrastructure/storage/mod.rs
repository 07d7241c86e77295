mod azure_store;
mod local_store;
mod store_factory;

pub use azure_store::AzureAudioStore;
pub use local_store::LocalAudioStore;
pub use store_factory::AudioStoreFactory;
