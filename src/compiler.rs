//! One-call compilation: expansion followed by model adaptation.

use crate::adapter::{AdaptOptions, AdaptationStats, ModelPromptAdapter};
use crate::expansion::{ExpansionEngine, ExpansionResult};
use crate::metrics;
use crate::shot::ShotDescriptor;
use serde::Serialize;
use tracing::info;

/// A shot compiled for a specific model family.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledShot {
    pub family: String,
    pub expansion: ExpansionResult,
    /// Final prompt to send to the model.
    pub prompt: String,
    pub stats: AdaptationStats,
}

pub struct PromptCompiler {
    engine: ExpansionEngine,
    adapter: ModelPromptAdapter,
}

impl PromptCompiler {
    pub fn new(engine: ExpansionEngine, adapter: ModelPromptAdapter) -> Self {
        Self { engine, adapter }
    }

    pub fn engine(&self) -> &ExpansionEngine {
        &self.engine
    }

    pub fn adapter(&self) -> &ModelPromptAdapter {
        &self.adapter
    }

    pub async fn compile(&self, shot: &ShotDescriptor, family: &str) -> CompiledShot {
        self.compile_with(shot, family, &AdaptOptions::default()).await
    }

    pub async fn compile_with(
        &self,
        shot: &ShotDescriptor,
        family: &str,
        options: &AdaptOptions,
    ) -> CompiledShot {
        let expansion = self.engine.expand_with_cache(shot).await;
        let prompt = self
            .adapter
            .adapt_prompt(&expansion.expanded_prompt, family, options);
        let mut stats = self
            .adapter
            .adaptation_stats(&expansion.expanded_prompt, &prompt, family);
        if let Some(limit) = options.token_limit_override {
            stats.token_limit = Some(limit);
            stats.under_limit = stats.adapted_tokens <= limit;
        }

        metrics::record_adaptation(family, stats.was_compressed);
        info!(
            family = %family,
            method = %expansion.method,
            provider = %expansion.provider,
            original_tokens = stats.original_tokens,
            adapted_tokens = stats.adapted_tokens,
            "Compiled shot"
        );

        CompiledShot {
            family: family.to_string(),
            expansion,
            prompt,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::count_tokens;
    use crate::expansion::ExpansionMethod;
    use crate::shot::ShotType;
    use crate::vocabulary::Vocabulary;

    fn compiler() -> PromptCompiler {
        PromptCompiler::new(
            ExpansionEngine::new(Vocabulary::builtin(), vec![]),
            ModelPromptAdapter::new(),
        )
    }

    fn shot() -> ShotDescriptor {
        ShotDescriptor::new(ShotType::TwoShot)
            .with_characters(["Mara", "Theo"])
            .with_emotion("sadness")
            .with_environment("a rain-soaked pier at night")
            .with_visual_mode("cinematic")
    }

    #[tokio::test]
    async fn test_compile_unbounded_keeps_markers() {
        let compiled = compiler().compile(&shot(), "gemini").await;

        assert_eq!(compiled.expansion.method, ExpansionMethod::Template);
        assert_eq!(compiled.prompt, compiled.expansion.expanded_prompt);
        assert!(!compiled.stats.was_compressed);
        assert!(compiled.prompt.contains("[DYNAMICS:"));
    }

    #[tokio::test]
    async fn test_compile_bounded_fits_budget() {
        let compiled = compiler().compile(&shot(), "sd15").await;

        assert!(count_tokens(&compiled.prompt) <= 77);
        assert!(compiled.stats.under_limit);
        assert!(!compiled.prompt.contains('['));
    }

    #[tokio::test]
    async fn test_compile_with_override() {
        let options = AdaptOptions {
            token_limit_override: Some(12),
        };
        let compiled = compiler().compile_with(&shot(), "gemini", &options).await;

        assert!(count_tokens(&compiled.prompt) <= 12);
        assert_eq!(compiled.stats.token_limit, Some(12));
        assert!(compiled.stats.under_limit);
    }
}
