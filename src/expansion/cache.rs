//! Content-addressed cache of expansion results.
//!
//! Keys are a SHA-256 over a canonical JSON form of the descriptor, so two
//! descriptors that differ only in field order, blank fields, or bare-name
//! versus record characters share an entry. Strings are kept verbatim and
//! list elements keep their position, so anything the builders render
//! differently, or a character count the detector sees differently, gets its
//! own key. The lock is only held for map
//! operations, never across a provider call; two callers racing on the same
//! key both compute and the last write wins.

use super::result::ExpansionResult;
use crate::shot::{CharacterRef, ShotDescriptor};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Canonical JSON form of a descriptor used for cache keys.
pub fn canonical_form(shot: &ShotDescriptor) -> Value {
    let mut normalized = shot.clone();
    normalized.characters = shot
        .characters
        .iter()
        .map(|c| CharacterRef::Profile(c.to_profile()))
        .collect();

    // ShotDescriptor serialisation cannot fail: no maps with non-string keys.
    let value = serde_json::to_value(&normalized).unwrap_or(Value::Null);
    prune(value).unwrap_or(Value::Null)
}

/// Drop nulls, blank strings and empty containers from objects. Array
/// elements that prune away become `null` in place.
/// `serde_json::Map` keeps keys sorted, which fixes field order.
fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => (!s.trim().is_empty()).then_some(Value::String(s)),
        Value::Array(items) => {
            let items: Vec<Value> = items
                .into_iter()
                .map(|item| prune(item).unwrap_or(Value::Null))
                .collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(fields) => {
            let fields: Map<String, Value> = fields
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect();
            (!fields.is_empty()).then_some(Value::Object(fields))
        }
        other => Some(other),
    }
}

pub fn cache_key(shot: &ShotDescriptor) -> String {
    let canonical = canonical_form(shot).to_string();
    format!("{:x}", Sha256::digest(canonical.as_bytes()))
}

struct CacheEntry {
    result: ExpansionResult,
    inserted_at: Instant,
}

pub struct ExpansionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Option<Duration>,
    max_entries: usize,
}

impl ExpansionCache {
    /// `ttl = None` keeps entries until capacity eviction or `clear`.
    pub fn new(ttl: Option<Duration>, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        self.ttl
            .map_or(true, |ttl| now.duration_since(entry.inserted_at) < ttl)
    }

    pub fn get(&self, key: &str) -> Option<ExpansionResult> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, Instant::now()))
            .map(|entry| entry.result.clone())
    }

    pub fn insert(&self, key: String, result: ExpansionResult) {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        entries.retain(|_, entry| self.is_fresh(entry, now));

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                result,
                inserted_at: now,
            },
        );
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExpansionCache {
    fn default() -> Self {
        Self::new(Some(DEFAULT_TTL), DEFAULT_MAX_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::ComplexityAssessment;
    use crate::expansion::result::ExpansionMethod;
    use crate::shot::{CharacterProfile, ShotType};

    fn result(prompt: &str) -> ExpansionResult {
        ExpansionResult {
            method: ExpansionMethod::Template,
            provider: "rules".to_string(),
            expanded_prompt: prompt.to_string(),
            complexity: ComplexityAssessment::default(),
            markers_valid: true,
            trimmed: false,
            word_count: 1,
            dynamics_missing: false,
            cached: false,
        }
    }

    #[test]
    fn test_key_ignores_field_order() {
        let a: ShotDescriptor = serde_json::from_str(
            r#"{"shotType": "two-shot", "characters": ["A", "B"], "emotion": "fear", "subtext": "x"}"#,
        )
        .unwrap();
        let b: ShotDescriptor = serde_json::from_str(
            r#"{"subtext": "x", "emotion": "fear", "characters": ["A", "B"], "shotType": "two_shot"}"#,
        )
        .unwrap();
        assert_eq!(cache_key(&a), cache_key(&b));
    }

    #[test]
    fn test_key_ignores_blank_fields_and_character_form() {
        let bare = ShotDescriptor::new(ShotType::CloseUp).with_characters(["Mara"]);
        let record = ShotDescriptor::new(ShotType::CloseUp)
            .with_characters([CharacterProfile::named("Mara")])
            .with_environment("   ");
        assert_eq!(cache_key(&bare), cache_key(&record));
    }

    #[test]
    fn test_key_distinguishes_content() {
        let a = ShotDescriptor::new(ShotType::CloseUp).with_emotion("fear");
        let b = ShotDescriptor::new(ShotType::CloseUp).with_emotion("grief");
        assert_ne!(cache_key(&a), cache_key(&b));
        assert_eq!(cache_key(&a).len(), 64);
    }

    #[test]
    fn test_key_counts_every_character() {
        let trio = ShotDescriptor::new(ShotType::Medium).with_characters(["A", "B", ""]);
        let pair = ShotDescriptor::new(ShotType::Medium).with_characters(["A", "B"]);
        assert_ne!(cache_key(&trio), cache_key(&pair));

        let padded = ShotDescriptor::new(ShotType::Medium).with_characters(["A ", "B"]);
        assert_ne!(cache_key(&padded), cache_key(&pair));
    }

    #[test]
    fn test_insert_get_clear() {
        let cache = ExpansionCache::default();
        assert!(cache.is_empty());

        cache.insert("k".to_string(), result("[LENS: 85mm]"));
        assert_eq!(cache.get("k").unwrap().expanded_prompt, "[LENS: 85mm]");
        assert!(cache.get("missing").is_none());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_expired_entries_not_served() {
        let cache = ExpansionCache::new(Some(Duration::ZERO), 10);
        cache.insert("k".to_string(), result("x"));
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = ExpansionCache::new(None, 2);
        cache.insert("a".to_string(), result("a"));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("b".to_string(), result("b"));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert("c".to_string(), result("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_overwrite_same_key() {
        let cache = ExpansionCache::new(None, 1);
        cache.insert("k".to_string(), result("first"));
        cache.insert("k".to_string(), result("second"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").unwrap().expanded_prompt, "second");
    }
}
