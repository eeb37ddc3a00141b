//! End-to-end tests for shot expansion: complexity routing, the provider
//! cascade and the expansion cache.

mod common;

use common::{
    cached_engine_with, engine_with, fear_close_up, jealous_trio, CountingProvider, Reply,
    SHUFFLED_JSON, TRIO_EXPANSION,
};
use shot_prompt_compiler::complexity::ComplexityReason;
use shot_prompt_compiler::expansion::{ExpansionMethod, RULES_PROVIDER};
use shot_prompt_compiler::markers::{self, Marker};
use shot_prompt_compiler::shot::ShotDescriptor;

#[tokio::test]
async fn test_simple_shot_never_calls_a_provider() {
    let provider = CountingProvider::replying(TRIO_EXPANSION);
    let engine = engine_with(vec![provider.clone()]);

    let result = engine.expand(&fear_close_up()).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(result.method, ExpansionMethod::Template);
    assert_eq!(result.provider, RULES_PROVIDER);
    assert!(!result.complexity.is_complex);
    assert!(result.markers_valid);
    assert!(markers::scan(&result.expanded_prompt).contains(Marker::Subject));
    assert!(!result.expanded_prompt.to_lowercase().contains("fear"));
}

#[tokio::test]
async fn test_complex_shot_uses_first_working_provider() {
    let provider = CountingProvider::replying(TRIO_EXPANSION);
    let engine = engine_with(vec![provider.clone()]);

    let result = engine.expand(&jealous_trio()).await;

    assert_eq!(provider.calls(), 1);
    assert_eq!(result.method, ExpansionMethod::Llm);
    assert_eq!(result.provider, "scripted");
    assert!(result.complexity.has(ComplexityReason::ThreePlusCharacters));
    assert!(result.complexity.has(ComplexityReason::HasSubtext));
    assert!(result.expanded_prompt.contains("[DYNAMICS:"));
    assert!(!result.has_warnings());
}

#[tokio::test]
async fn test_cascade_skips_failing_providers() {
    let down = CountingProvider::down("primary");
    let errored = CountingProvider::new("secondary", Reply::ErrorField("model overloaded".into()));
    let empty = CountingProvider::new("tertiary", Reply::Empty);
    let working = CountingProvider::new("quaternary", Reply::Text(TRIO_EXPANSION.to_string()));
    let engine = engine_with(vec![
        down.clone(),
        errored.clone(),
        empty.clone(),
        working.clone(),
    ]);

    let result = engine.expand(&jealous_trio()).await;

    assert_eq!(result.provider, "quaternary");
    for provider in [&down, &errored, &empty, &working] {
        assert_eq!(provider.calls(), 1);
    }
}

#[tokio::test]
async fn test_double_failure_falls_back_to_template_with_dynamics() {
    let primary = CountingProvider::down("primary");
    let fallback = CountingProvider::down("fallback");
    let engine = engine_with(vec![primary.clone(), fallback.clone()]);

    let result = engine.expand(&jealous_trio()).await;

    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 1);
    assert_eq!(result.method, ExpansionMethod::Template);
    assert!(result.complexity.is_complex);
    assert!(result.expanded_prompt.contains("[DYNAMICS:"));
}

#[tokio::test]
async fn test_llm_output_missing_dynamics_is_flagged() {
    let provider = CountingProvider::replying("[SUBJECT: A, B and C stand apart] [LENS: 35mm]");
    let engine = engine_with(vec![provider]);

    let result = engine.expand(&jealous_trio()).await;

    assert!(result.is_llm());
    assert!(result.dynamics_missing);
    assert!(result.has_warnings());
}

#[tokio::test]
async fn test_disabled_expansion_skips_detector_and_providers() {
    let provider = CountingProvider::replying(TRIO_EXPANSION);
    let engine = engine_with(vec![provider.clone()]);

    let result = engine.expand(&jealous_trio().with_llm_expansion(false)).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(result.method, ExpansionMethod::Template);
    assert!(!result.complexity.is_complex);
}

#[tokio::test]
async fn test_shuffled_descriptors_share_a_cache_entry() {
    let provider = CountingProvider::replying(TRIO_EXPANSION);
    let engine = cached_engine_with(vec![provider.clone()]);

    let first: ShotDescriptor = serde_json::from_str(SHUFFLED_JSON[0]).unwrap();
    let second: ShotDescriptor = serde_json::from_str(SHUFFLED_JSON[1]).unwrap();

    let a = engine.expand_with_cache(&first).await;
    let b = engine.expand_with_cache(&second).await;

    assert_eq!(provider.calls(), 1);
    assert!(!a.cached);
    assert!(b.cached);
    assert_eq!(a.expanded_prompt, b.expanded_prompt);
}

#[tokio::test]
async fn test_outage_fallback_is_not_cached() {
    let provider = CountingProvider::down("primary");
    let engine = cached_engine_with(vec![provider.clone()]);

    engine.expand_with_cache(&jealous_trio()).await;
    let second = engine.expand_with_cache(&jealous_trio()).await;

    assert_eq!(provider.calls(), 2);
    assert!(!second.cached);
    assert!(engine.cache().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_third_character_does_not_share_pair_entry() {
    let provider = CountingProvider::replying(TRIO_EXPANSION);
    let engine = cached_engine_with(vec![provider.clone()]);

    let trio = ShotDescriptor::default().with_characters(["A", "B", ""]);
    let pair = ShotDescriptor::default().with_characters(["A", "B"]);

    let first = engine.expand_with_cache(&trio).await;
    let second = engine.expand_with_cache(&pair).await;

    assert_eq!(first.method, ExpansionMethod::Llm);
    assert_eq!(second.method, ExpansionMethod::Template);
    assert!(!second.complexity.is_complex);
    assert!(!second.cached);
}
