mod file_config;

pub use file_config::{CacheConfig, ExpansionConfig, FileConfig, ModelProfileConfig, ProviderConfig};

use crate::adapter::{ModelPromptAdapter, PromptAdaptationProfile, TokenLimit};
use crate::complexity::ComplexityDetector;
use crate::expansion::{
    ExpansionCache, ExpansionEngine, ExpansionSettings, DEFAULT_MAX_ENTRIES, DEFAULT_TTL,
};
use crate::llm::{ApiKeySource, CompletionOptions, LlmProvider, OllamaProvider, OpenAIProvider};
use crate::vocabulary::{normalize_key, Vocabulary, HIGH_INTENSITY_EMOTIONS};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    Ollama,
    Openai,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::Openai => "openai",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => DEFAULT_OLLAMA_URL,
            ProviderKind::Openai => DEFAULT_OPENAI_URL,
        }
    }
}

/// CLI arguments that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub provider: Option<ProviderKind>,
    pub provider_url: Option<String>,
    pub model: Option<String>,
    pub api_key_command: Option<String>,
    pub word_limit: Option<usize>,
    pub no_cache: bool,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub name: String,
    pub base_url: String,
    pub model: String,
    pub api_key: ApiKeySource,
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl: Option<Duration>,
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Some(DEFAULT_TTL),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub expansion: ExpansionSettings,
    pub high_intensity_emotions: Vec<String>,
    pub cache: CacheSettings,
    pub providers: Vec<ProviderSettings>,
    pub model_profiles: Vec<PromptAdaptationProfile>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let expansion_file = file.expansion.unwrap_or_default();
        let defaults = ExpansionSettings::default();
        let word_limit = expansion_file
            .word_limit
            .or(cli.word_limit)
            .unwrap_or(defaults.word_limit);
        if word_limit == 0 {
            bail!("word_limit must be greater than zero");
        }
        let expansion = ExpansionSettings {
            word_limit,
            completion: CompletionOptions {
                temperature: expansion_file
                    .temperature
                    .unwrap_or(defaults.completion.temperature),
                max_tokens: expansion_file.max_tokens.or(defaults.completion.max_tokens),
                timeout: expansion_file
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.completion.timeout),
            },
        };

        let high_intensity_emotions = expansion_file.high_intensity_emotions.unwrap_or_else(|| {
            HIGH_INTENSITY_EMOTIONS
                .iter()
                .map(|e| e.to_string())
                .collect()
        });

        let cache_file = file.cache.unwrap_or_default();
        let cache = CacheSettings {
            enabled: cache_file.enabled.unwrap_or(!cli.no_cache),
            ttl: match cache_file.ttl_secs {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => Some(DEFAULT_TTL),
            },
            max_entries: cache_file.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES),
        };

        // A [[providers]] list replaces the CLI provider entirely.
        let providers = match file.providers {
            Some(list) => list
                .iter()
                .enumerate()
                .map(|(index, p)| resolve_provider(index, p))
                .collect::<Result<Vec<_>>>()?,
            None => match cli.provider {
                Some(kind) => {
                    let Some(model) = cli.model.clone() else {
                        bail!("--model is required when --provider is set");
                    };
                    vec![ProviderSettings {
                        kind,
                        name: kind.as_str().to_string(),
                        base_url: cli
                            .provider_url
                            .clone()
                            .unwrap_or_else(|| kind.default_base_url().to_string()),
                        model,
                        api_key: cli
                            .api_key_command
                            .clone()
                            .map_or(ApiKeySource::None, ApiKeySource::Command),
                    }]
                }
                None => Vec::new(),
            },
        };

        let model_profiles = file
            .model_profiles
            .unwrap_or_default()
            .iter()
            .map(resolve_profile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            expansion,
            high_intensity_emotions,
            cache,
            providers,
            model_profiles,
        })
    }

    pub fn build_providers(&self) -> Vec<Arc<dyn LlmProvider>> {
        self.providers
            .iter()
            .map(|p| -> Arc<dyn LlmProvider> {
                match p.kind {
                    ProviderKind::Ollama => Arc::new(
                        OllamaProvider::new(p.base_url.clone(), p.model.clone())
                            .with_name(p.name.clone()),
                    ),
                    ProviderKind::Openai => Arc::new(
                        OpenAIProvider::with_key_source(
                            p.base_url.clone(),
                            p.model.clone(),
                            p.api_key.clone(),
                        )
                        .with_name(p.name.clone()),
                    ),
                }
            })
            .collect()
    }

    pub fn build_engine(&self, vocab: Arc<Vocabulary>) -> ExpansionEngine {
        let cache = self
            .cache
            .enabled
            .then(|| ExpansionCache::new(self.cache.ttl, self.cache.max_entries));
        ExpansionEngine::new(vocab, self.build_providers())
            .with_detector(ComplexityDetector::new(&self.high_intensity_emotions))
            .with_settings(self.expansion.clone())
            .with_cache(cache)
    }

    pub fn build_adapter(&self) -> ModelPromptAdapter {
        self.model_profiles
            .iter()
            .cloned()
            .fold(ModelPromptAdapter::new(), ModelPromptAdapter::with_profile)
    }
}

fn resolve_provider(index: usize, p: &ProviderConfig) -> Result<ProviderSettings> {
    let Some(kind_str) = p.kind.as_deref() else {
        bail!("providers[{}]: kind is required", index);
    };
    let Ok(kind) = ProviderKind::from_str(kind_str, true) else {
        bail!(
            "providers[{}]: unknown kind '{}', expected ollama or openai",
            index,
            kind_str
        );
    };
    let Some(model) = p.model.clone() else {
        bail!("providers[{}]: model is required", index);
    };
    let api_key = match (&p.api_key, &p.api_key_command) {
        (Some(_), Some(_)) => {
            bail!("providers[{}]: api_key and api_key_command are mutually exclusive", index)
        }
        (Some(key), None) => ApiKeySource::Static(key.clone()),
        (None, Some(cmd)) => ApiKeySource::Command(cmd.clone()),
        (None, None) => ApiKeySource::None,
    };

    Ok(ProviderSettings {
        kind,
        name: p.name.clone().unwrap_or_else(|| kind.as_str().to_string()),
        base_url: p
            .base_url
            .clone()
            .unwrap_or_else(|| kind.default_base_url().to_string()),
        model,
        api_key,
    })
}

fn resolve_profile(p: &ModelProfileConfig) -> Result<PromptAdaptationProfile> {
    let Some(family) = p.family.as_deref().map(normalize_key).filter(|f| !f.is_empty()) else {
        bail!("model_profiles: family is required");
    };
    let token_limit = TokenLimit::from(p.token_limit);
    Ok(PromptAdaptationProfile {
        family,
        compression_enabled: p
            .compression
            .unwrap_or(matches!(token_limit, TokenLimit::Bounded(_))),
        token_limit,
    })
}
