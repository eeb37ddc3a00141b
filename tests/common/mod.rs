//! Common test infrastructure
//!
//! Scripted LLM providers and shot fixtures shared by the end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{engine_with, fear_close_up, CountingProvider};
//!
//! #[tokio::test]
//! async fn test_simple_shot() {
//!     let provider = CountingProvider::replying("[SUBJECT: x]");
//!     let engine = engine_with(vec![provider.clone()]);
//!     let result = engine.expand(&fear_close_up()).await;
//!     assert_eq!(provider.calls(), 0);
//! }
//! ```

mod fixtures;
mod providers;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use providers::{CountingProvider, Reply};

use shot_prompt_compiler::expansion::{ExpansionCache, ExpansionEngine};
use shot_prompt_compiler::llm::LlmProvider;
use shot_prompt_compiler::Vocabulary;
use std::sync::Arc;

/// Engine over the built-in vocabulary with the given provider cascade.
#[allow(dead_code)]
pub fn engine_with(providers: Vec<Arc<CountingProvider>>) -> ExpansionEngine {
    let providers: Vec<Arc<dyn LlmProvider>> = providers
        .into_iter()
        .map(|p| p as Arc<dyn LlmProvider>)
        .collect();
    ExpansionEngine::new(Vocabulary::builtin(), providers)
}

/// Same as [`engine_with`], with a default expansion cache.
#[allow(dead_code)]
pub fn cached_engine_with(providers: Vec<Arc<CountingProvider>>) -> ExpansionEngine {
    engine_with(providers).with_cache(Some(ExpansionCache::default()))
}
