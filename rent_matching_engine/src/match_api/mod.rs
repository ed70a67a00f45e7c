//! # Matching engine public API
//!
//! The `match_api` module exposes the programmatic API of the rent matching engine.
//!
//! * [`scoring`] holds the three field scorers (amount, payer name, payment reference), the
//!   fixed composite weights and the confidence tiers.
//! * [`engine`] holds the assignment stage: [`engine::MatchEngine`] turns the per-pair scores
//!   into the matched / ambiguous / unmatched partition while enforcing at-most-one-match per
//!   rent call and per transaction.
//! * [`errors`] defines the contract-violation errors. "No good match" is not an error; it is
//!   the `Unmatched` part of the report.
pub mod engine;
pub mod errors;
pub mod scoring;
