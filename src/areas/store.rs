//! Saved comparison texts
//!
//! The last compared (or auto-saved) old and new texts live under a `.redline`
//! directory so a later run can pick them up again.
//!
//! ## Layout
//!
//! - `old.txt` / `new.txt`: the two text blocks, stored verbatim
//! - `saved_at`: RFC 3339 timestamp of the last write
//! - `store.lock`: lock file held exclusively while writing or removing

use anyhow::Context;
use chrono::{DateTime, Local};
use file_guard::Lock;
use std::path::Path;

/// Name of the store directory created under the store root.
pub const STORE_DIR: &str = ".redline";

const LOCK_FILE: &str = "store.lock";
const SAVED_AT_FILE: &str = "saved_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Old,
    New,
}

impl StoreKey {
    pub const ALL: [StoreKey; 2] = [StoreKey::Old, StoreKey::New];

    fn file_name(&self) -> &'static str {
        match self {
            StoreKey::Old => "old.txt",
            StoreKey::New => "new.txt",
        }
    }
}

/// File-backed key-value store for the two text blocks.
#[derive(Debug, Clone)]
pub struct Store {
    path: Box<Path>,
}

impl Store {
    pub fn new(root: &Path) -> Self {
        Store {
            path: root.join(STORE_DIR).into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: StoreKey) -> anyhow::Result<Option<String>> {
        let path = self.path.join(key.file_name());
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("failed to read saved text at {:?}", path))
    }

    /// Writes both blocks and stamps the save time.
    pub fn set_pair(&self, old: &str, new: &str) -> anyhow::Result<()> {
        self.with_lock(|| {
            for (key, text) in [(StoreKey::Old, old), (StoreKey::New, new)] {
                let path = self.path.join(key.file_name());
                std::fs::write(&path, text)
                    .with_context(|| format!("failed to save text to {:?}", path))?;
            }

            std::fs::write(self.path.join(SAVED_AT_FILE), Local::now().to_rfc3339())
                .context("failed to write save timestamp")?;

            log::debug!("saved text pair to {:?}", self.path);
            Ok(())
        })
    }

    /// Removes both blocks and the timestamp; returns whether anything was stored.
    pub fn remove_all(&self) -> anyhow::Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        self.with_lock(|| {
            let mut removed = false;
            let file_names = StoreKey::ALL
                .iter()
                .map(StoreKey::file_name)
                .chain([SAVED_AT_FILE]);

            for file_name in file_names {
                let path = self.path.join(file_name);
                if path.exists() {
                    std::fs::remove_file(&path)
                        .with_context(|| format!("failed to remove {:?}", path))?;
                    removed = true;
                }
            }

            log::debug!("cleared store at {:?} (removed: {})", self.path, removed);
            Ok(removed)
        })
    }

    pub fn saved_at(&self) -> anyhow::Result<Option<DateTime<Local>>> {
        let path = self.path.join(SAVED_AT_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read save timestamp at {:?}", path))?;
        let timestamp = DateTime::parse_from_rfc3339(raw.trim())
            .with_context(|| format!("invalid save timestamp: {}", raw.trim()))?;

        Ok(Some(timestamp.with_timezone(&Local)))
    }

    fn with_lock<R>(&self, action: impl FnOnce() -> anyhow::Result<R>) -> anyhow::Result<R> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create store directory at {:?}", self.path))?;

        let lock_path = self.path.join(LOCK_FILE);
        let mut lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file at {:?}", lock_path))?;
        let _lock = file_guard::lock(&mut lock_file, Lock::Exclusive, 0, 1)?;

        action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use fake::Fake;
    use fake::faker::lorem::en::{Sentence, Words};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn empty_store_has_nothing(store_dir: TempDir) -> anyhow::Result<()> {
        let store = Store::new(store_dir.path());

        assert_eq!(store.get(StoreKey::Old)?, None);
        assert_eq!(store.get(StoreKey::New)?, None);
        assert_eq!(store.saved_at()?, None);
        assert!(!store.remove_all()?);

        Ok(())
    }

    #[rstest]
    fn saved_pair_survives_a_new_handle(store_dir: TempDir) -> anyhow::Result<()> {
        let before = Local::now();
        Store::new(store_dir.path()).set_pair("  old\ntext ", "new\n")?;

        let reopened = Store::new(store_dir.path());

        assert_eq!(reopened.get(StoreKey::Old)?.as_deref(), Some("  old\ntext "));
        assert_eq!(reopened.get(StoreKey::New)?.as_deref(), Some("new\n"));
        let saved_at = reopened.saved_at()?.expect("timestamp written");
        assert!(saved_at.timestamp() >= before.timestamp());

        Ok(())
    }

    #[rstest]
    fn multiline_text_is_stored_verbatim(store_dir: TempDir) -> anyhow::Result<()> {
        let old = Words(5..10).fake::<Vec<String>>().join("\n");
        let new = format!("{}\r\n\n", Sentence(3..8).fake::<String>());
        let store = Store::new(store_dir.path());

        store.set_pair(&old, &new)?;

        assert_eq!(store.get(StoreKey::Old)?, Some(old));
        assert_eq!(store.get(StoreKey::New)?, Some(new));

        Ok(())
    }

    #[rstest]
    fn later_save_overwrites_earlier_one(store_dir: TempDir) -> anyhow::Result<()> {
        let store = Store::new(store_dir.path());
        store.set_pair("first old", "first new")?;
        store.set_pair("second old", "second new")?;

        assert_eq!(store.get(StoreKey::Old)?.as_deref(), Some("second old"));
        assert_eq!(store.get(StoreKey::New)?.as_deref(), Some("second new"));

        Ok(())
    }

    #[rstest]
    fn remove_all_clears_texts_and_timestamp(store_dir: TempDir) -> anyhow::Result<()> {
        let store = Store::new(store_dir.path());
        store.set_pair("old", "new")?;

        assert!(store.remove_all()?);
        assert_eq!(store.get(StoreKey::Old)?, None);
        assert_eq!(store.get(StoreKey::New)?, None);
        assert_eq!(store.saved_at()?, None);
        assert!(!store.remove_all()?);

        Ok(())
    }
}
