//! Extraction of recognizable lease-identifier fragments from free text.

use crate::helpers::normalize;

/// The fragments of a lease identifier that are distinctive enough to look for inside a payment
/// reference: alphanumeric runs of at least four characters, lower-cased and accent-stripped.
/// Shorter runs ("A", "12") are indistinguishable from noise in free-text references.
pub fn lease_id_fragments(lease_id: &str) -> Vec<String> {
    let fragment = regex::Regex::new(r"[0-9a-z]{4,}").unwrap();
    let id = normalize(lease_id);
    fragment.find_iter(&id).map(|m| m.as_str().to_string()).collect()
}
