use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigBackend {
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileConfigBackend {
    path: PathBuf,
}

impl FileConfigBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigBackend for FileConfigBackend {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

/// Backend keeping content in memory, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryConfigBackend {
    content: Mutex<Option<String>>,
}

impl MemoryConfigBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigBackend for MemoryConfigBackend {
    fn read(&self) -> Result<Option<String>, String> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn write(&self, content: &str) -> Result<(), String> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}

pub struct ConfigStore<TBackend, TConfig>
where
    TBackend: ConfigBackend,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    backend: TBackend,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigStore<FileConfigBackend, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigBackend::new(path))
    }
}

impl<TBackend, TConfig> ConfigStore<TBackend, TConfig>
where
    TBackend: ConfigBackend,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(backend: TBackend) -> Self {
        Self {
            backend,
            _config: PhantomData,
        }
    }

    /// Loads the config, falling back to `TConfig::default()` when no content
    /// has been stored yet.
    pub fn load(&self) -> Result<TConfig, String> {
        let Some(content) = self.backend.read()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn store(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        self.backend.write(&content)
    }
}
