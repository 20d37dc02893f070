use crate::areas::store::Store;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Environment variable naming the store root when `--store` is not given.
pub const STORE_ROOT_ENV: &str = "REDLINE_HOME";

/// Picks the store root: explicit path, then `REDLINE_HOME`, then the current
/// directory.
pub fn resolve_store_root(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    match std::env::var_os(STORE_ROOT_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => std::env::current_dir().context("failed to get current directory"),
    }
}

/// Everything a command needs: the saved-text store and the output writer.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    store: Store,
}

impl Session {
    pub fn new(root: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !root.exists() {
            std::fs::create_dir_all(root)
                .with_context(|| format!("failed to create store root at {:?}", root))?;
        }
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve store root {:?}", root))?;

        let store = Store::new(&root);
        log::debug!("using store at {:?}", store.path());

        Ok(Session {
            writer: RefCell::new(writer),
            store,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
