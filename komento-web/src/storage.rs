use gloo_storage::{LocalStorage, Storage};
use komento_client::StorageBackend;

/// `StorageBackend` over the browser's window.localStorage.
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match LocalStorage::get(key) {
            Ok(value) => Some(value),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!(key, %err, "discarding unreadable local storage entry");
                None
            }
        }
    }

    fn save<T: serde::Serialize>(&mut self, key: &str, value: &T) -> anyhow::Result<()> {
        LocalStorage::set(key, value).map_err(|err| anyhow::anyhow!("{err}"))
    }
}
