use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Plugin metadata as declared in `plugin.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluginDescription {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
}

impl PluginDescription {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }

    pub fn with_authors(mut self, authors: &[&str]) -> Self {
        self.author = None;
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn from_yaml(content: &str) -> Result<Self, DescriptionError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DescriptionError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// `author` followed by `authors`, the way the host merges them
    pub fn authors(&self) -> Vec<String> {
        self.author
            .iter()
            .chain(self.authors.iter())
            .cloned()
            .collect()
    }
}
