//! Cache key construction.

use std::collections::BTreeMap;

/// Deterministic key for a request descriptor: the resource path plus its
/// parameters serialized with keys sorted lexicographically, so equivalent
/// parameter sets collapse to one key regardless of insertion order.
pub fn cache_key(path: &str, params: &[(&str, &str)]) -> String {
    let sorted: BTreeMap<&str, &str> = params.iter().copied().collect();
    let serialized =
        serde_json::to_string(&sorted).expect("serializing string parameter map should succeed");
    format!("{path}?{serialized}")
}
