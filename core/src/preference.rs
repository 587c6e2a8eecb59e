use crate::accent::Accent;

pub const ACCENT_KEY: &str = "accent";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// `None` when storage could not be opened at all.
#[derive(Debug)]
pub struct AccentPreference<S> {
    store: Option<S>,
}

impl<S: KeyValueStore> AccentPreference<S> {
    pub fn new(store: Option<S>) -> Self {
        Self { store }
    }

    pub fn try_load(&self) -> Result<Option<Accent>, StorageError> {
        let store = self.store.as_ref().ok_or(StorageError::Unavailable)?;
        Ok(store.get(ACCENT_KEY)?.map(Accent::new))
    }

    pub fn load(&self) -> Accent {
        self.try_load().ok().flatten().unwrap_or_default()
    }

    pub fn try_save(&self, accent: &Accent) -> Result<(), StorageError> {
        let store = self.store.as_ref().ok_or(StorageError::Unavailable)?;
        store.set(ACCENT_KEY, accent.as_str())
    }

    pub fn save(&self, accent: &Accent) {
        let _ = self.try_save(accent);
    }
}
