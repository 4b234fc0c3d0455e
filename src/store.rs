//! Durable key-value storage for the high score.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String};

/// Minimal string key-value store.
pub trait ScoreStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(String::from(key), String::from(value));
        Ok(())
    }
}

/// Store that drops every write, for sessions that should not touch disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::FileStore;

#[cfg(feature = "std")]
mod file {
    use super::ScoreStore;
    use anyhow::Context;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    /// One file per key inside a directory.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(key)
        }
    }

    impl ScoreStore for FileStore {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            let path = self.path_for(key);
            match fs::read_to_string(&path) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("creating {}", self.dir.display()))?;
            let path = self.path_for(key);
            fs::write(&path, value).with_context(|| format!("writing {}", path.display()))
        }
    }
}
