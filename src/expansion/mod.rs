//! LLM expansion: complexity gating, provider cascade, output validation
//! and caching.

mod cache;
mod engine;
mod prompts;
mod result;
pub mod validation;

pub use cache::{cache_key, canonical_form, ExpansionCache, DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
pub use engine::{ExpansionEngine, ExpansionSettings};
pub use prompts::{build_system_prompt, build_user_prompt};
pub use result::{ExpansionMethod, ExpansionResult, RULES_PROVIDER};
pub use validation::DEFAULT_WORD_LIMIT;
