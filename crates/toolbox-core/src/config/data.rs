use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::error::{ConfigError, Result};
use crate::storage::error::StorageError;
use crate::storage::StorageService;
use crate::time_format::LayoutSettings;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Document formats a settings file may be written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Json,
    /// Needs the `yaml-config` feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// Needs the `toml-config` feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Canonical file extension, also used to label errors
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Pick the format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ConfigFormat::Json),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            #[cfg(feature = "toml-config")]
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Pick the format from the extension of a URL's path, ignoring any
    /// query or fragment
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        Self::from_path(Path::new(path))
    }

    fn render(self, data: &ConfigData) -> std::result::Result<String, BoxedError> {
        Ok(match self {
            ConfigFormat::Json => serde_json::to_string_pretty(data)?,
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(data)?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(data)?,
        })
    }

    fn read(self, text: &str) -> std::result::Result<ConfigData, BoxedError> {
        Ok(match self {
            ConfigFormat::Json => serde_json::from_str(text)?,
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(text)?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(text)?,
        })
    }
}

/// A flat settings document: string keys mapped to JSON-like values.
///
/// The same document serves as date layout settings and as the source of a
/// [`MapDictionary`](crate::value_provider::MapDictionary).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigData {
    entries: HashMap<String, serde_json::Value>,
}

impl ConfigData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hashmap(entries: HashMap<String, serde_json::Value>) -> Self {
        Self { entries }
    }

    /// Typed read; a missing key or a value of another shape gives `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        T::deserialize(raw).ok()
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store anything serializable under `key`
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let raw = serde_json::to_value(value).map_err(|e| ConfigError::Serialization {
            format: ConfigFormat::Json.extension().to_string(),
            source: Box::new(e),
        })?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.entries.iter()
    }

    /// Copy every entry of `other` in; its values win on conflicting keys
    pub fn merge(&mut self, other: &ConfigData) {
        self.entries
            .extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        format.render(self).map_err(|source| ConfigError::Serialization {
            format: format.extension().to_string(),
            source,
        })
    }

    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self> {
        format.read(data).map_err(|source| ConfigError::Deserialization {
            format: format.extension().to_string(),
            source,
        })
    }

    /// Load a document through a storage service.
    ///
    /// The format is taken from the URL's extension.
    pub fn load(service: &dyn StorageService, url: &str) -> Result<Self> {
        let format = ConfigFormat::from_url(url).ok_or_else(|| ConfigError::UnsupportedFormat(url.to_string()))?;

        let object = service.storage_object(url)?;
        let mut reader = service.download(&object)?;
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| StorageError::io(e, "read_config", url))?;

        log::debug!("Loaded {} configuration from {}", format.extension(), url);
        Self::deserialize(&content, format)
    }

    /// Write the document through a storage service in the format named by
    /// the URL's extension.
    pub fn save(&self, service: &dyn StorageService, url: &str) -> Result<()> {
        let format = ConfigFormat::from_url(url).ok_or_else(|| ConfigError::UnsupportedFormat(url.to_string()))?;
        let content = self.serialize(format)?;
        service.upload_bytes(url, content.as_bytes())?;
        log::debug!("Saved {} configuration to {}", format.extension(), url);
        Ok(())
    }
}

impl LayoutSettings for ConfigData {
    fn setting(&self, key: &str) -> Option<String> {
        self.get::<String>(key)
    }
}
