//! Durable storage for the signed-in profile.
//!
//! A single slot holds the serialized profile. No slot content means no
//! session. Content that fails to parse is discarded on load.

use crate::config::AppConfig;
use crate::profile::UserProfile;
use dioxus_logger::tracing::{info, warn};
use serde::Deserialize;
use serde::Serialize;
use std::rc::Rc;

/// Name of the slot: the `localStorage` key on the web, the file stem natively.
pub const PROFILE_KEY: &str = "bronxSafeUser";

/// Current layout version of the stored document.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("profile slot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage is unavailable")]
    Unavailable,
}

/// One durable key-value slot.
pub trait ProfileSlot {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, contents: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Serialize)]
struct StoredRef<'a> {
    version: u32,
    profile: &'a UserProfile,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Versioned { version: u32, profile: UserProfile },
    // bare profile, as written before the document carried a version
    Legacy(UserProfile),
}

/// Reads and writes the profile document through a [`ProfileSlot`].
#[derive(Clone)]
pub struct ProfileStorage {
    slot: Rc<dyn ProfileSlot>,
}

impl ProfileStorage {
    pub fn new(slot: Rc<dyn ProfileSlot>) -> Self {
        Self { slot }
    }

    /// The platform's default slot for `config`.
    pub fn for_platform(config: &AppConfig) -> Self {
        Self::new(platform::default_slot(config))
    }

    /// Loads the stored profile.
    ///
    /// Malformed or unrecognized content is logged, erased, and reported as
    /// absent. It never surfaces as an error.
    pub fn load(&self) -> Option<UserProfile> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("could not read stored profile: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Stored>(&raw) {
            Ok(Stored::Versioned { version, profile }) if version == SCHEMA_VERSION => Some(profile),
            Ok(Stored::Versioned { version, .. }) => {
                warn!("discarding stored profile with unknown version {}", version);
                self.erase();
                None
            }
            Ok(Stored::Legacy(profile)) => {
                info!("migrating unversioned stored profile");
                Some(profile)
            }
            Err(e) => {
                warn!("failed to parse stored profile, discarding: {}", e);
                self.erase();
                None
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let json = serde_json::to_string(&StoredRef {
            version: SCHEMA_VERSION,
            profile,
        })?;
        self.slot.write(&json)
    }

    /// Clears the slot. Failures are logged; there is nothing a caller could do.
    pub fn erase(&self) {
        if let Err(e) = self.slot.clear() {
            warn!("could not clear stored profile: {}", e);
        }
    }
}

/// In-memory slot, used by tests and when no durable storage exists.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: std::cell::RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: std::cell::RefCell::new(Some(contents.into())),
        }
    }
}

impl ProfileSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.contents.borrow_mut().take();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileSlot;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{ProfileSlot, StorageError, PROFILE_KEY};
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// One JSON file on disk.
    #[derive(Debug, Clone)]
    pub struct FileSlot {
        path: PathBuf,
    }

    impl FileSlot {
        /// A slot at `<dir>/bronxSafeUser.json`.
        pub fn in_dir(dir: impl AsRef<Path>) -> Self {
            Self {
                path: dir.as_ref().join(format!("{PROFILE_KEY}.json")),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ProfileSlot for FileSlot {
        fn read(&self) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn write(&self, contents: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, contents)?;
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageSlot;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ProfileSlot, StorageError, PROFILE_KEY};

    /// The browser's `localStorage` under a single key.
    #[derive(Debug, Clone)]
    pub struct LocalStorageSlot {
        storage: web_sys::Storage,
    }

    impl LocalStorageSlot {
        pub fn open() -> Result<Self, StorageError> {
            let storage = web_sys::window()
                .ok_or(StorageError::Unavailable)?
                .local_storage()
                .map_err(|e| StorageError::Backend(format!("{e:?}")))?
                .ok_or(StorageError::Unavailable)?;
            Ok(Self { storage })
        }
    }

    impl ProfileSlot for LocalStorageSlot {
        fn read(&self) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(PROFILE_KEY)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }

        fn write(&self, contents: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(PROFILE_KEY, contents)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }

        fn clear(&self) -> Result<(), StorageError> {
            self.storage
                .remove_item(PROFILE_KEY)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
    }
}

mod platform {
    use super::{MemorySlot, ProfileSlot};
    use crate::config::AppConfig;
    use dioxus_logger::tracing::warn;
    use std::rc::Rc;

    #[cfg(target_arch = "wasm32")]
    pub fn default_slot(_config: &AppConfig) -> Rc<dyn ProfileSlot> {
        match super::LocalStorageSlot::open() {
            Ok(slot) => Rc::new(slot),
            Err(e) => {
                warn!("localStorage unavailable ({}); profile will not persist", e);
                Rc::new(MemorySlot::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_slot(config: &AppConfig) -> Rc<dyn ProfileSlot> {
        let dir = config.data_dir.clone().or_else(|| {
            directories_next::ProjectDirs::from("org", "BronxSafe", "BronxSafe")
                .map(|dirs| dirs.data_dir().to_path_buf())
        });
        match dir {
            Some(dir) => Rc::new(super::FileSlot::in_dir(dir)),
            None => {
                warn!("no data directory found; profile will not persist");
                Rc::new(MemorySlot::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::sample_profile;

    fn storage_with(slot: MemorySlot) -> (Rc<MemorySlot>, ProfileStorage) {
        let slot = Rc::new(slot);
        (slot.clone(), ProfileStorage::new(slot))
    }

    #[test]
    fn saved_profile_is_loaded_back() {
        let (slot, storage) = storage_with(MemorySlot::new());
        storage.save(&sample_profile()).unwrap();

        let raw = slot.read().unwrap().unwrap();
        assert!(raw.contains("\"version\":1"));
        assert_eq!(storage.load(), Some(sample_profile()));
    }

    #[test]
    fn empty_slot_means_no_session() {
        let (_, storage) = storage_with(MemorySlot::new());
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn malformed_content_is_discarded_and_cleared() {
        let (slot, storage) = storage_with(MemorySlot::with_contents("{not json"));

        assert_eq!(storage.load(), None);
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn invalid_radius_makes_the_document_malformed() {
        let mut json = serde_json::to_value(sample_profile()).unwrap();
        json["alertPreferences"]["radius"] = serde_json::json!(0);
        let (slot, storage) = storage_with(MemorySlot::with_contents(json.to_string()));

        assert_eq!(storage.load(), None);
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn unknown_version_is_discarded() {
        let doc = serde_json::json!({ "version": 99, "profile": sample_profile() });
        let (slot, storage) = storage_with(MemorySlot::with_contents(doc.to_string()));

        assert_eq!(storage.load(), None);
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn legacy_bare_profile_is_accepted() {
        let bare = serde_json::to_string(&sample_profile()).unwrap();
        let (_, storage) = storage_with(MemorySlot::with_contents(bare));

        assert_eq!(storage.load(), Some(sample_profile()));
    }

    #[test]
    fn erase_clears_the_slot() {
        let (slot, storage) = storage_with(MemorySlot::new());
        storage.save(&sample_profile()).unwrap();
        storage.erase();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_slot_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path().join("nested"));

        assert_eq!(slot.read().unwrap(), None);
        slot.write("{}").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("{}"));
        assert!(slot.path().ends_with("bronxSafeUser.json"));
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
        // clearing an absent file is fine
        slot.clear().unwrap();
    }
}
