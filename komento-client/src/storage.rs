use std::collections::HashMap;

pub const COMMENTS_KEY: &str = "comments";
pub const REPLIES_KEY: &str = "replies";

/// Key-value persistence seam between the store and whatever durable storage
/// the platform offers. The store treats it as strictly best-effort: a
/// backend that loses writes only loses persistence, never in-memory state.
pub trait StorageBackend {
    /// Reads and deserializes the value under `key`. Absent, corrupt and
    /// unreadable values all come back as `None`; implementations log the
    /// corrupt case.
    fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T>;

    /// Serializes `value` and writes it under `key`.
    fn save<T: serde::Serialize>(&mut self, key: &str, value: &T) -> anyhow::Result<()>;
}

/// Backend keeping everything in process memory, for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl StorageBackend for MemoryBackend {
    fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "discarding corrupt persisted value");
                None
            }
        }
    }

    fn save<T: serde::Serialize>(&mut self, key: &str, value: &T) -> anyhow::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}
