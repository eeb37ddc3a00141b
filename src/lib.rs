//! Shot Prompt Compiler Library
//!
//! Turns structured shot descriptions into model-ready image prompts and
//! directs dialogue for text-to-speech engines.

pub mod adapter;
pub mod compiler;
pub mod complexity;
pub mod config;
pub mod expansion;
pub mod llm;
pub mod markers;
pub mod metrics;
pub mod shot;
pub mod structured;
pub mod vocabulary;
pub mod voice;

// Re-export commonly used types for convenience
pub use adapter::{AdaptOptions, AdaptationStats, ModelPromptAdapter, PromptAdaptationProfile};
pub use compiler::{CompiledShot, PromptCompiler};
pub use complexity::{ComplexityAssessment, ComplexityDetector, ComplexityReason};
pub use config::{AppConfig, CliConfig, FileConfig, ProviderKind};
pub use expansion::{ExpansionEngine, ExpansionMethod, ExpansionResult};
pub use llm::{LlmError, LlmProvider};
pub use markers::Marker;
pub use shot::{CharacterProfile, CharacterRef, LocationInfo, ShotDescriptor, ShotType};
pub use structured::{CompiledPrompt, StructuredPromptBuilder};
pub use vocabulary::Vocabulary;
pub use voice::{ArcType, DialogueScript, SpeechSegment, VoicePromptBuilder, VoiceProvider};
