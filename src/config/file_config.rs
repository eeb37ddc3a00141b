use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub expansion: Option<ExpansionConfig>,
    pub cache: Option<CacheConfig>,
    /// Cascade order is file order.
    pub providers: Option<Vec<ProviderConfig>>,
    pub model_profiles: Option<Vec<ModelProfileConfig>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ExpansionConfig {
    pub word_limit: Option<usize>,
    pub high_intensity_emotions: Option<Vec<String>>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    /// 0 keeps entries until evicted by capacity.
    pub ttl_secs: Option<u64>,
    pub max_entries: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    /// "ollama" or "openai"
    pub kind: Option<String>,
    /// Name recorded on results; defaults to the kind.
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub api_key_command: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ModelProfileConfig {
    pub family: Option<String>,
    /// Absent means unbounded.
    pub token_limit: Option<usize>,
    pub compression: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
