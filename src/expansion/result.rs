use crate::complexity::ComplexityAssessment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider name recorded on template results.
pub const RULES_PROVIDER: &str = "rules";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMethod {
    Template,
    Llm,
}

impl ExpansionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionMethod::Template => "template",
            ExpansionMethod::Llm => "llm",
        }
    }
}

impl fmt::Display for ExpansionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Outcome of expanding one shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionResult {
    pub method: ExpansionMethod,
    /// `"rules"` for template results, otherwise the backend name.
    pub provider: String,
    pub expanded_prompt: String,
    pub complexity: ComplexityAssessment,
    pub markers_valid: bool,
    pub trimmed: bool,
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dynamics_missing: bool,
    /// Served from the expansion cache.
    #[serde(default)]
    pub cached: bool,
}

impl ExpansionResult {
    pub fn is_llm(&self) -> bool {
        self.method == ExpansionMethod::Llm
    }

    /// Any advisory flag raised by validation.
    pub fn has_warnings(&self) -> bool {
        !self.markers_valid || self.trimmed || self.dynamics_missing
    }
}
