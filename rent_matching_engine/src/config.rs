use std::env;

use log::*;

pub const DEFAULT_MIN_MATCH_THRESHOLD: f64 = 0.35;
pub const DEFAULT_AMBIGUITY_GAP: f64 = 0.15;

/// Tunable policy knobs for the matching engine.
///
/// The composite weights are design constants and live in [`crate::scoring`]; only the two
/// assignment-policy values below are meant to be tuned per deployment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchConfig {
    /// Composite scores below this threshold disqualify a pair before it ever reaches the
    /// assignment stage.
    pub min_match_threshold: f64,
    /// When the two best candidates for a transaction score within this gap of each other,
    /// automatic selection is unsafe and the transaction is reported as ambiguous.
    pub ambiguity_gap: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { min_match_threshold: DEFAULT_MIN_MATCH_THRESHOLD, ambiguity_gap: DEFAULT_AMBIGUITY_GAP }
    }
}

impl MatchConfig {
    pub fn new(min_match_threshold: f64, ambiguity_gap: f64) -> Self {
        Self { min_match_threshold, ambiguity_gap }
    }

    /// Build a config from the environment, falling back to the defaults for anything unset or
    /// unparseable. Reads `RLM_MIN_MATCH_THRESHOLD` and `RLM_AMBIGUITY_GAP`.
    pub fn from_env_or_default() -> Self {
        let min_match_threshold = env_f64("RLM_MIN_MATCH_THRESHOLD", DEFAULT_MIN_MATCH_THRESHOLD);
        let ambiguity_gap = env_f64("RLM_AMBIGUITY_GAP", DEFAULT_AMBIGUITY_GAP);
        Self { min_match_threshold, ambiguity_gap }
    }
}

fn env_f64(var: &str, default: f64) -> f64 {
    env::var(var)
        .map(|s| {
            s.parse::<f64>().unwrap_or_else(|e| {
                error!("🪛️ {s} is not a valid value for {var}. {e} Using the default, {default}, instead.");
                default
            })
        })
        .unwrap_or(default)
}
