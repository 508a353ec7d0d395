use smartcast_model::{QualityPreference, Settings};

use super::{KeyValueStore, SETTINGS_KEY, SettingsError};

/// In-memory settings backed by a [`KeyValueStore`].
///
/// Reads never fail: a missing or unreadable blob leaves the defaults in
/// place. A failed save leaves the in-memory copy untouched, so what is shown
/// is always what was last persisted.
#[derive(Debug)]
pub struct SettingsRepository<S: KeyValueStore> {
    store: S,
    current: Settings,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn load(store: S) -> Self {
        let current = match store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Settings>(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    log::error!(
                        "Failed to load settings: {}",
                        SettingsError::CorruptValue(err)
                    );
                    Settings::default()
                }
            },
            Ok(None) => {
                log::debug!("no stored settings, using defaults");
                Settings::default()
            }
            Err(err) => {
                log::error!("Failed to load settings: {err}");
                Settings::default()
            }
        };

        Self { store, current }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists the modified settings, then adopts them.
    pub fn update(
        &mut self,
        change: impl FnOnce(&mut Settings),
    ) -> Result<&Settings, SettingsError> {
        let mut next = self.current;
        change(&mut next);

        if let Err(err) = self.save(&next) {
            log::error!("Failed to save settings: {err}");
            return Err(err);
        }

        self.current = next;
        Ok(&self.current)
    }

    pub fn set_auto_play_next(
        &mut self,
        value: bool,
    ) -> Result<&Settings, SettingsError> {
        self.update(|settings| settings.auto_play_next = value)
    }

    pub fn set_quality_preference(
        &mut self,
        value: QualityPreference,
    ) -> Result<&Settings, SettingsError> {
        self.update(|settings| settings.quality_preference = value)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let raw = serde_json::to_string(settings).map_err(SettingsError::Encode)?;
        self.store.set(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::settings::MemoryStore;
    use parking_lot::Mutex;

    #[derive(Debug, Default)]
    struct BrokenStore {
        writes: Mutex<usize>,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, SettingsError> {
            Err(SettingsError::Unavailable("disk gone".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), SettingsError> {
            *self.writes.lock() += 1;
            Err(SettingsError::Unavailable("disk gone".into()))
        }
    }

    #[test]
    fn empty_store_yields_defaults() {
        let repo = SettingsRepository::load(MemoryStore::new());
        assert_eq!(*repo.current(), Settings::default());
    }

    #[test]
    fn stored_blob_is_loaded() {
        let store = MemoryStore::with_entry(
            SETTINGS_KEY,
            r#"{"autoPlayNext":false,"qualityPreference":"high"}"#,
        );
        let repo = SettingsRepository::load(store);
        assert!(!repo.current().auto_play_next);
        assert_eq!(repo.current().quality_preference, QualityPreference::High);
    }

    #[test]
    fn partial_blob_keeps_remaining_defaults() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, r#"{"autoPlayNext":false}"#);
        let repo = SettingsRepository::load(store);
        assert!(!repo.current().auto_play_next);
        assert_eq!(repo.current().quality_preference, QualityPreference::Auto);
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let store = MemoryStore::with_entry(SETTINGS_KEY, "{not json");
        let repo = SettingsRepository::load(store);
        assert_eq!(*repo.current(), Settings::default());
    }

    #[test]
    fn unreadable_store_falls_back_to_defaults() {
        let repo = SettingsRepository::load(BrokenStore::default());
        assert_eq!(*repo.current(), Settings::default());
    }

    #[test]
    fn toggle_is_persisted_under_fixed_key() {
        let mut repo = SettingsRepository::load(MemoryStore::new());
        repo.set_auto_play_next(false).unwrap();

        let raw = repo.store().get(SETTINGS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"autoPlayNext":false,"qualityPreference":"auto"}"#);
        assert!(!repo.current().auto_play_next);
    }

    #[test]
    fn failed_save_leaves_memory_unchanged() {
        let mut repo = SettingsRepository::load(BrokenStore::default());
        let result = repo.set_auto_play_next(false);

        assert!(result.is_err());
        assert!(repo.current().auto_play_next);
        assert_eq!(*repo.store().writes.lock(), 1);
    }
}
