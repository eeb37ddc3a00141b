use super::cache::{cache_key, ExpansionCache};
use super::prompts::{build_system_prompt, build_user_prompt};
use super::result::{ExpansionMethod, ExpansionResult, RULES_PROVIDER};
use super::validation::{self, DEFAULT_WORD_LIMIT};
use crate::complexity::{ComplexityAssessment, ComplexityDetector};
use crate::llm::{CompletionOptions, LlmProvider};
use crate::markers;
use crate::metrics;
use crate::shot::ShotDescriptor;
use crate::structured::StructuredPromptBuilder;
use crate::vocabulary::Vocabulary;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Tunables for the LLM path.
#[derive(Debug, Clone)]
pub struct ExpansionSettings {
    pub word_limit: usize,
    pub completion: CompletionOptions,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            completion: CompletionOptions {
                max_tokens: Some(400),
                ..Default::default()
            },
        }
    }
}

/// Decides between template and LLM expansion and runs the provider cascade.
///
/// Expansion never fails: every provider failure falls through to the next
/// provider, and after the last one to the structured builder.
pub struct ExpansionEngine {
    vocab: Arc<Vocabulary>,
    providers: Vec<Arc<dyn LlmProvider>>,
    detector: ComplexityDetector,
    builder: StructuredPromptBuilder,
    cache: Option<ExpansionCache>,
    settings: ExpansionSettings,
    system_prompt: String,
}

impl ExpansionEngine {
    /// Engine with the default detector, settings and cache. `providers` is
    /// tried in order.
    pub fn new(vocab: Arc<Vocabulary>, providers: Vec<Arc<dyn LlmProvider>>) -> Self {
        let settings = ExpansionSettings::default();
        Self {
            system_prompt: build_system_prompt(&vocab, settings.word_limit),
            builder: StructuredPromptBuilder::new(Arc::clone(&vocab)),
            vocab,
            providers,
            detector: ComplexityDetector::default(),
            cache: Some(ExpansionCache::default()),
            settings,
        }
    }

    pub fn with_detector(mut self, detector: ComplexityDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn with_settings(mut self, settings: ExpansionSettings) -> Self {
        self.system_prompt = build_system_prompt(&self.vocab, settings.word_limit);
        self.settings = settings;
        self
    }

    /// Replace the cache; `None` makes `expand_with_cache` behave like `expand`.
    pub fn with_cache(mut self, cache: Option<ExpansionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn detector(&self) -> &ComplexityDetector {
        &self.detector
    }

    pub fn cache(&self) -> Option<&ExpansionCache> {
        self.cache.as_ref()
    }

    pub async fn expand(&self, shot: &ShotDescriptor) -> ExpansionResult {
        self.expand_inner(shot).await.0
    }

    /// `expand` behind the content-addressed cache. Results that fell back
    /// to the template after every provider failed are not stored, so a
    /// transient outage is not pinned for the cache lifetime.
    pub async fn expand_with_cache(&self, shot: &ShotDescriptor) -> ExpansionResult {
        let Some(cache) = &self.cache else {
            return self.expand(shot).await;
        };

        let key = cache_key(shot);
        if let Some(mut hit) = cache.get(&key) {
            metrics::record_cache_lookup(true);
            debug!(key = %key, method = %hit.method, "Expansion cache hit");
            hit.cached = true;
            return hit;
        }
        metrics::record_cache_lookup(false);

        let (result, cacheable) = self.expand_inner(shot).await;
        if cacheable {
            cache.insert(key, result.clone());
        }
        result
    }

    async fn expand_inner(&self, shot: &ShotDescriptor) -> (ExpansionResult, bool) {
        let complexity = match shot.llm_expansion {
            Some(false) => {
                debug!("LLM expansion disabled for shot");
                let result = self.template_result(shot, ComplexityAssessment::bypassed());
                return (result, true);
            }
            _ => self.detector.assess(shot),
        };

        let use_llm = complexity.is_complex || shot.llm_expansion == Some(true);
        if !use_llm {
            debug!(shot_type = %shot.shot_type, "Simple shot, using template");
            return (self.template_result(shot, complexity), true);
        }

        let reasons: Vec<&str> = complexity.reasons.iter().map(|r| r.as_str()).collect();
        info!(
            shot_type = %shot.shot_type,
            characters = shot.characters.len(),
            reasons = ?reasons,
            "Complex shot, expanding with LLM"
        );

        let user_prompt = build_user_prompt(shot);
        for provider in &self.providers {
            if let Some(text) = self.try_provider(provider.as_ref(), &user_prompt).await {
                return (self.llm_result(shot, complexity, provider.name(), &text), true);
            }
        }

        warn!(
            providers = self.providers.len(),
            "All providers failed, falling back to template"
        );
        (self.template_result(shot, complexity), false)
    }

    /// One provider attempt. `None` on any failure.
    async fn try_provider(&self, provider: &dyn LlmProvider, user_prompt: &str) -> Option<String> {
        let name = provider.name();
        let started = Instant::now();
        let outcome = provider
            .generate_text(&self.system_prompt, user_prompt, &self.settings.completion)
            .await;
        metrics::record_provider_request(name, started.elapsed());

        match outcome {
            Ok(response) => {
                if let Some(text) = response.usable_text() {
                    debug!(provider = %name, tokens = response.total_tokens, "Provider succeeded");
                    return Some(text.to_string());
                }
                let kind = if response.error.is_some() { "error_field" } else { "empty" };
                warn!(
                    provider = %name,
                    error = ?response.error,
                    "Provider returned no usable text"
                );
                metrics::record_provider_failure(name, kind);
                None
            }
            Err(e) => {
                warn!(provider = %name, error = %e, "Provider call failed");
                metrics::record_provider_failure(name, "error");
                None
            }
        }
    }

    fn llm_result(
        &self,
        shot: &ShotDescriptor,
        complexity: ComplexityAssessment,
        provider: &str,
        raw: &str,
    ) -> ExpansionResult {
        let validated = validation::validate(raw, shot.characters.len(), self.settings.word_limit);

        if !validated.markers_valid {
            warn!(provider = %provider, "LLM output does not follow the marker grammar");
            metrics::record_advisory_flag("markers_invalid");
        }
        if validated.trimmed {
            metrics::record_advisory_flag("trimmed");
        }
        if validated.dynamics_missing {
            warn!(provider = %provider, "LLM output lacks a DYNAMICS section");
            metrics::record_advisory_flag("dynamics_missing");
        }
        metrics::record_expansion(ExpansionMethod::Llm.as_str(), provider);

        ExpansionResult {
            method: ExpansionMethod::Llm,
            provider: provider.to_string(),
            expanded_prompt: validated.text,
            complexity,
            markers_valid: validated.markers_valid,
            trimmed: validated.trimmed,
            word_count: validated.word_count,
            dynamics_missing: validated.dynamics_missing,
            cached: false,
        }
    }

    fn template_result(
        &self,
        shot: &ShotDescriptor,
        complexity: ComplexityAssessment,
    ) -> ExpansionResult {
        let prompt = self.builder.build_string(shot);
        metrics::record_expansion(ExpansionMethod::Template.as_str(), RULES_PROVIDER);

        ExpansionResult {
            method: ExpansionMethod::Template,
            provider: RULES_PROVIDER.to_string(),
            markers_valid: markers::scan(&prompt).is_valid(),
            trimmed: false,
            word_count: validation::count_words(&prompt),
            dynamics_missing: false,
            complexity,
            expanded_prompt: prompt,
            cached: false,
        }
    }
}
