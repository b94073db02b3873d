//! YAML plugin configuration backed by a file in the plugin's data directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

use crate::logging::sink::LogSink;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no default config bundled")]
    MissingDefault,

    #[error("top level of the config is not a mapping")]
    NotAMapping,

    #[error("invalid config path: {0:?}")]
    InvalidPath(String),

    #[error("config failed to load, leaving the file untouched")]
    NotLoaded,
}

/// Plugin configuration file
///
/// Values are addressed by dotted paths (`update-check.url`). When the file
/// does not exist yet, [`ConfigFile::load`] writes the bundled default first.
/// After a failed load the file is never written back.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    plugin_name: String,
    default_contents: Option<String>,
    root: Mapping,
    load_failed: bool,
    dirty: bool,
}

impl ConfigFile {
    pub fn new(path: &Path, plugin_name: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            plugin_name: plugin_name.to_string(),
            default_contents: None,
            root: Mapping::new(),
            load_failed: false,
            dirty: false,
        }
    }

    /// Sets the contents written when the file is missing
    pub fn with_default(mut self, contents: &str) -> Self {
        self.default_contents = Some(contents.to_string());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether values were set since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Creates the parent directory, generates the default file if needed and
    /// parses the file. Every failure is reported to `sink`; returns whether
    /// the file was parsed.
    pub fn load(&mut self, sink: &dyn LogSink) -> bool {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            sink.severe(&format!(
                "[{}] Failed to generate default config directory: {}",
                self.plugin_name, e
            ));
        }

        if !self.path.exists() {
            match self.write_default() {
                Ok(()) => sink.info(&format!(
                    "[{}] Default config generated successfully.",
                    self.plugin_name
                )),
                Err(ConfigError::MissingDefault) => sink.severe(&format!(
                    "[{}] Default config wasn't found.",
                    self.plugin_name
                )),
                Err(e) => sink.severe(&format!(
                    "[{}] Failed to generate default config: {}",
                    self.plugin_name, e
                )),
            }
        }

        let result = self.reload();
        self.load_failed = result.is_err();
        self.dirty = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                sink.severe(&format!(
                    "[{}] Failed to load config: {}",
                    self.plugin_name, e
                ));
                false
            }
        }
    }

    /// [`ConfigFile::load`] plus a confirmation line on success
    pub fn load_config(&mut self, sink: &dyn LogSink) {
        if self.load(sink) {
            sink.info(&format!(
                "[{}] Config loaded successfully.",
                self.plugin_name
            ));
        }
    }

    pub fn save(&mut self) -> Result<(), ConfigError> {
        if self.load_failed {
            return Err(ConfigError::NotLoaded);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(&self.root)?;
        fs::write(&self.path, content)?;
        self.dirty = false;
        Ok(())
    }

    /// [`ConfigFile::save`], reporting the outcome to `sink`
    pub fn save_config(&mut self, sink: &dyn LogSink) {
        match self.save() {
            Ok(()) => sink.info(&format!(
                "[{}] Config saved successfully.",
                self.plugin_name
            )),
            Err(e) => sink.severe(&format!(
                "[{}] Failed to save config: {}",
                self.plugin_name, e
            )),
        }
    }

    pub fn get_value(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut value = self.root.get(keys.next()?)?;
        for key in keys {
            value = value.as_mapping()?.get(key)?;
        }
        Some(value)
    }

    /// Reads the value at `path`; `None` when absent or of another type
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.get_value(path)?;
        serde_yaml::from_value(value.clone()).ok()
    }

    pub fn get_or<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    /// Stores `value` at `path`, replacing non-mapping values on the way.
    pub fn set<T: Serialize>(&mut self, path: &str, value: T) -> Result<(), ConfigError> {
        let keys: Vec<&str> = path.split('.').collect();
        if keys.iter().any(|key| key.is_empty()) {
            return Err(ConfigError::InvalidPath(path.to_string()));
        }
        let value = serde_yaml::to_value(value)?;
        let Some((last, parents)) = keys.split_last() else {
            return Err(ConfigError::InvalidPath(path.to_string()));
        };

        let mut node = &mut self.root;
        for key in parents {
            let entry = node
                .entry(Value::String(key.to_string()))
                .or_insert(Value::Null);
            if !entry.is_mapping() {
                *entry = Value::Mapping(Mapping::new());
            }
            node = match entry {
                Value::Mapping(child) => child,
                _ => return Err(ConfigError::InvalidPath(path.to_string())),
            };
        }

        node.insert(Value::String(last.to_string()), value);
        self.dirty = true;
        Ok(())
    }

    fn write_default(&self) -> Result<(), ConfigError> {
        let contents = self
            .default_contents
            .as_deref()
            .ok_or(ConfigError::MissingDefault)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ConfigError> {
        if !self.path.exists() {
            debug!("Config {:?} does not exist, starting empty", self.path);
            self.root = Mapping::new();
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            self.root = Mapping::new();
            return Ok(());
        }

        self.root = match serde_yaml::from_str::<Value>(&content)? {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => return Err(ConfigError::NotAMapping),
        };
        Ok(())
    }
}
