use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigBackend, ConfigStore, FileConfigBackend, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best: u32,
}

impl Validate for BestScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Persistence collaborator for the single scalar surviving session resets.
pub trait BestScoreStore {
    fn load_best(&self) -> u32;
    fn save_best(&mut self, best: u32) -> Result<(), String>;
}

pub struct PersistentBestScore<TBackend: ConfigBackend> {
    store: ConfigStore<TBackend, BestScoreRecord>,
}

impl PersistentBestScore<FileConfigBackend> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigBackend::new(path))
    }
}

impl<TBackend: ConfigBackend> PersistentBestScore<TBackend> {
    pub fn new(backend: TBackend) -> Self {
        Self {
            store: ConfigStore::new(backend),
        }
    }
}

impl<TBackend: ConfigBackend> BestScoreStore for PersistentBestScore<TBackend> {
    fn load_best(&self) -> u32 {
        match self.store.load() {
            Ok(record) => record.best,
            Err(err) => {
                // Unreadable record means a fresh start, not a failed session.
                crate::warn!("Ignoring stored best score: {}", err);
                0
            }
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), String> {
        self.store.store(&BestScoreRecord { best })
    }
}
