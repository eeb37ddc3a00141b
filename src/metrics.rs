use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Metric name prefix for all compiler metrics
const PREFIX: &str = "prompt_compiler";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // Expansion Metrics
    pub static ref EXPANSIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_expansions_total"), "Completed expansions by method and provider"),
        &["method", "provider"]
    ).expect("Failed to create expansions_total metric");

    pub static ref ADVISORY_FLAGS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_advisory_flags_total"), "Validation flags raised on LLM output"),
        &["flag"]
    ).expect("Failed to create advisory_flags_total metric");

    // Provider Metrics
    pub static ref PROVIDER_FAILURES_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_provider_failures_total"), "Provider calls that fell through the cascade"),
        &["provider", "kind"]
    ).expect("Failed to create provider_failures_total metric");

    pub static ref PROVIDER_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_provider_request_duration_seconds"),
            "Provider generation request duration in seconds"
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 120.0]),
        &["provider"]
    ).expect("Failed to create provider_request_duration_seconds metric");

    // Cache Metrics
    pub static ref CACHE_LOOKUPS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_cache_lookups_total"), "Expansion cache lookups by result"),
        &["result"]
    ).expect("Failed to create cache_lookups_total metric");

    // Adaptation Metrics
    pub static ref ADAPTATIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_adaptations_total"), "Prompt adaptations by model family"),
        &["family", "compressed"]
    ).expect("Failed to create adaptations_total metric");
}

/// Register all metrics with the registry. Safe to call more than once.
pub fn init_metrics() {
    // Ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(EXPANSIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ADVISORY_FLAGS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROVIDER_FAILURES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROVIDER_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(CACHE_LOOKUPS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ADAPTATIONS_TOTAL.clone()));

    tracing::debug!("Metrics system initialized");
}

pub fn record_expansion(method: &str, provider: &str) {
    EXPANSIONS_TOTAL
        .with_label_values(&[method, provider])
        .inc();
}

pub fn record_advisory_flag(flag: &str) {
    ADVISORY_FLAGS_TOTAL.with_label_values(&[flag]).inc();
}

/// Record a provider call that did not produce usable text.
pub fn record_provider_failure(provider: &str, kind: &str) {
    PROVIDER_FAILURES_TOTAL
        .with_label_values(&[provider, kind])
        .inc();
}

pub fn record_provider_request(provider: &str, duration: Duration) {
    PROVIDER_REQUEST_DURATION_SECONDS
        .with_label_values(&[provider])
        .observe(duration.as_secs_f64());
}

pub fn record_cache_lookup(hit: bool) {
    CACHE_LOOKUPS_TOTAL
        .with_label_values(&[if hit { "hit" } else { "miss" }])
        .inc();
}

pub fn record_adaptation(family: &str, compressed: bool) {
    ADAPTATIONS_TOTAL
        .with_label_values(&[family, if compressed { "true" } else { "false" }])
        .inc();
}

/// Render the registry in the Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> bool {
        REGISTRY
            .gather()
            .iter()
            .any(|m| m.get_name() == format!("{PREFIX}_{name}"))
    }

    #[test]
    fn test_metrics_initialization() {
        init_metrics();
        init_metrics();
        // Vec metrics only show up in gather() once a label set exists
        record_expansion("template", "rules");
        assert!(find("expansions_total"));
    }

    #[test]
    fn test_record_provider_failure() {
        init_metrics();
        record_provider_failure("ollama", "timeout");
        record_provider_request("ollama", Duration::from_millis(250));

        assert!(find("provider_failures_total"));
        assert!(find("provider_request_duration_seconds"));
    }

    #[test]
    fn test_record_cache_and_flags() {
        init_metrics();
        record_cache_lookup(true);
        record_cache_lookup(false);
        record_advisory_flag("trimmed");
        record_adaptation("sdxl", true);

        let hits = CACHE_LOOKUPS_TOTAL.with_label_values(&["hit"]).get();
        assert!(hits >= 1.0);
        assert!(find("advisory_flags_total"));
        assert!(find("adaptations_total"));
    }

    #[test]
    fn test_encode_metrics() {
        init_metrics();
        record_expansion("llm", "openai");
        let text = encode_metrics();
        assert!(text.contains("prompt_compiler_expansions_total"));
    }
}
