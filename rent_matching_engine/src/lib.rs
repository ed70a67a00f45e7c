//! Rent Matching Engine
//!
//! The rent matching engine reconciles incoming bank payments against the outstanding rent calls
//! of a property-management ledger, without relying on any external payer identifier. Payers
//! write free-text bank labels that arrive truncated, reordered, misspelled or prefixed with
//! transfer jargon; the engine infers, with a confidence tier, which obligation a payment
//! discharges.
//!
//! The library is divided into three main sections:
//! 1. Domain records and results ([`mod@types`]): bank transactions, rent calls, and the
//!    matched / ambiguous / unmatched partition a run produces.
//! 2. Text helpers ([`mod@helpers`]): free-text normalization, edit distance, and lease-id
//!    fragment extraction. These are the fuzzy primitives the scorers build on.
//! 3. The matching API ([`mod@match_api`]): field scorers, the weighted composite score, and
//!    the assignment engine that enforces at-most-one-match per rent call.
//!
//! The engine is a stateless, deterministic function of its inputs. It performs no I/O, holds no
//! shared mutable state, and may be invoked concurrently from independent callers; within one
//! run, transactions are resolved strictly in input order.
pub mod config;
pub mod helpers;
mod match_api;
pub mod types;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use config::MatchConfig;
pub use match_api::{
    engine::{match_batch, MatchEngine},
    errors::MatchInputError,
    scoring,
};
pub use types::{
    AmbiguousTransaction,
    BankTransaction,
    CandidateScore,
    Confidence,
    MatchSummary,
    MatchedTransaction,
    ReconciliationReport,
    RentCall,
    RentCallId,
    TransactionId,
};
