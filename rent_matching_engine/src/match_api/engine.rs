use std::collections::HashSet;

use log::*;

use crate::{
    config::MatchConfig,
    match_api::{
        errors::MatchInputError,
        scoring::{confidence_tier, score_pair},
    },
    types::{
        AmbiguousTransaction,
        BankTransaction,
        CandidateScore,
        MatchSummary,
        MatchedTransaction,
        ReconciliationReport,
        RentCall,
        RentCallId,
    },
};

/// `MatchEngine` partitions a batch of bank transactions into matched, ambiguous and unmatched
/// against a batch of outstanding rent calls.
///
/// The engine is a pure function of its inputs: it holds nothing but its [`MatchConfig`], never
/// mutates what it is given, and can be invoked concurrently from independent callers. Within a
/// single run, transactions are resolved strictly in input order; a rent call consumed by an
/// earlier transaction is invisible to every later one, so input order decides who wins a scarce
/// candidate.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Build an engine, rejecting non-finite or out-of-range tunables.
    pub fn new(config: MatchConfig) -> Result<Self, MatchInputError> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run one matching pass.
    ///
    /// Rent calls listed in `already_matched` were resolved in a prior run and are treated
    /// exactly as if they had not been supplied. The only errors are contract violations
    /// (blank or duplicate identifiers); business outcomes are reported as data on the
    /// [`ReconciliationReport`].
    pub fn run(
        &self,
        transactions: &[BankTransaction],
        rent_calls: &[RentCall],
        already_matched: &HashSet<RentCallId>,
    ) -> Result<ReconciliationReport, MatchInputError> {
        validate_inputs(transactions, rent_calls)?;

        let available: Vec<&RentCall> = rent_calls.iter().filter(|call| !already_matched.contains(&call.id)).collect();
        let candidates_considered = available.len();
        debug!(
            "🏦️🔍️ Matching {} transactions against {} rent calls ({} excluded as already matched)",
            transactions.len(),
            candidates_considered,
            rent_calls.len() - candidates_considered
        );

        let mut consumed: HashSet<RentCallId> = HashSet::new();
        let mut matched = Vec::new();
        let mut ambiguous = Vec::new();
        let mut unmatched = Vec::new();

        for tx in transactions {
            let mut scored: Vec<CandidateScore> = available
                .iter()
                .filter(|call| !consumed.contains(&call.id))
                .map(|call| score_pair(tx, call))
                .filter(|score| score.composite >= self.config.min_match_threshold)
                .collect();
            // Descending by score; stable, so equal scores keep candidate input order.
            scored.sort_by(|a, b| b.composite.total_cmp(&a.composite));

            match scored.len() {
                0 => {
                    trace!("🏦️💤️ Transaction [{}] has no candidate above the threshold", tx.id);
                    unmatched.push(tx.id.clone());
                },
                1 => {
                    let only = scored.remove(0);
                    trace!("🏦️✅️ Transaction [{}] matched rent call [{}] uncontested", tx.id, only.rent_call_id);
                    consumed.insert(only.rent_call_id.clone());
                    matched.push(MatchedTransaction {
                        transaction_id: tx.id.clone(),
                        rent_call_id: only.rent_call_id,
                        score: only.composite,
                        confidence: confidence_tier(only.composite),
                    });
                },
                _ => {
                    let gap = scored[0].composite - scored[1].composite;
                    if gap <= self.config.ambiguity_gap {
                        debug!(
                            "🏦️⚖️ Transaction [{}] is ambiguous: {} candidates within a gap of {gap:.3}",
                            tx.id,
                            scored.len()
                        );
                        ambiguous.push(AmbiguousTransaction { transaction_id: tx.id.clone(), candidates: scored });
                    } else {
                        let winner = scored.remove(0);
                        trace!(
                            "🏦️✅️ Transaction [{}] matched rent call [{}] with a clear gap of {gap:.3}",
                            tx.id,
                            winner.rent_call_id
                        );
                        consumed.insert(winner.rent_call_id.clone());
                        matched.push(MatchedTransaction {
                            transaction_id: tx.id.clone(),
                            rent_call_id: winner.rent_call_id,
                            score: winner.composite,
                            confidence: confidence_tier(winner.composite),
                        });
                    }
                },
            }
        }

        let summary = MatchSummary {
            matched: matched.len(),
            ambiguous: ambiguous.len(),
            unmatched: unmatched.len(),
            candidates_considered,
        };
        info!(
            "🏦️🏁️ Matching run complete: {} matched, {} ambiguous, {} unmatched",
            summary.matched, summary.ambiguous, summary.unmatched
        );
        Ok(ReconciliationReport { matched, ambiguous, unmatched, summary })
    }
}

/// Match a batch with the default policy. Shorthand for building a [`MatchEngine`] from
/// [`MatchConfig::default`] and calling [`MatchEngine::run`].
pub fn match_batch(
    transactions: &[BankTransaction],
    rent_calls: &[RentCall],
    already_matched: &HashSet<RentCallId>,
) -> Result<ReconciliationReport, MatchInputError> {
    MatchEngine::new(MatchConfig::default())?.run(transactions, rent_calls, already_matched)
}

fn validate_config(config: &MatchConfig) -> Result<(), MatchInputError> {
    if !config.min_match_threshold.is_finite() || !(0.0..=1.0).contains(&config.min_match_threshold) {
        return Err(MatchInputError::InvalidConfig(format!(
            "min_match_threshold must be in [0, 1], got {}",
            config.min_match_threshold
        )));
    }
    if !config.ambiguity_gap.is_finite() || !(0.0..=1.0).contains(&config.ambiguity_gap) {
        return Err(MatchInputError::InvalidConfig(format!(
            "ambiguity_gap must be in [0, 1], got {}",
            config.ambiguity_gap
        )));
    }
    Ok(())
}

fn validate_inputs(transactions: &[BankTransaction], rent_calls: &[RentCall]) -> Result<(), MatchInputError> {
    let mut seen = HashSet::new();
    for (idx, tx) in transactions.iter().enumerate() {
        if tx.id.as_str().trim().is_empty() {
            return Err(MatchInputError::BlankTransactionId(idx));
        }
        if !seen.insert(&tx.id) {
            return Err(MatchInputError::DuplicateTransactionId(tx.id.to_string()));
        }
    }
    let mut seen = HashSet::new();
    for (idx, call) in rent_calls.iter().enumerate() {
        if call.id.as_str().trim().is_empty() {
            return Err(MatchInputError::BlankRentCallId(idx));
        }
        if !seen.insert(&call.id) {
            return Err(MatchInputError::DuplicateRentCallId(call.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rl_common::Cents;

    use super::*;
    use crate::types::TransactionId;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 3).unwrap()
    }

    fn tx(id: &str, amount: i64, payer_label: &str) -> BankTransaction {
        BankTransaction::new(TransactionId::from(id), date(), Cents::from(amount), payer_label)
    }

    fn call(id: &str, amount_due: i64, last_name: &str) -> RentCall {
        RentCall::new(RentCallId::from(id), "Lot 3", "BAIL-2024-0007", Cents::from(amount_due), "2024-04")
            .with_tenant("Jean", last_name)
    }

    #[test]
    fn blank_and_duplicate_ids_are_contract_violations() {
        let calls = vec![call("rc-1", 85000, "Dupont")];
        let err = match_batch(&[tx("", 85000, "Dupont")], &calls, &HashSet::new()).unwrap_err();
        assert_eq!(err, MatchInputError::BlankTransactionId(0));

        let err = match_batch(&[tx("t-1", 1, "a"), tx("t-1", 2, "b")], &calls, &HashSet::new()).unwrap_err();
        assert_eq!(err, MatchInputError::DuplicateTransactionId("t-1".to_string()));

        let dup = vec![call("rc-1", 85000, "Dupont"), call("rc-1", 91000, "Martin")];
        let err = match_batch(&[tx("t-1", 85000, "Dupont")], &dup, &HashSet::new()).unwrap_err();
        assert_eq!(err, MatchInputError::DuplicateRentCallId("rc-1".to_string()));
    }

    #[test]
    fn invalid_tunables_are_rejected() {
        assert!(MatchEngine::new(MatchConfig::new(f64::NAN, 0.15)).is_err());
        assert!(MatchEngine::new(MatchConfig::new(0.35, 1.5)).is_err());
        assert!(MatchEngine::new(MatchConfig::new(0.35, 0.15)).is_ok());
    }

    #[test]
    fn empty_inputs_produce_a_zero_filled_summary() {
        let report = match_batch(&[], &[], &HashSet::new()).unwrap();
        assert_eq!(report.summary, MatchSummary::default());

        let report = match_batch(&[tx("t-1", 85000, "Dupont")], &[], &HashSet::new()).unwrap();
        assert_eq!(report.summary.unmatched, 1);
        assert_eq!(report.summary.candidates_considered, 0);
        assert_eq!(report.unmatched, vec![TransactionId::from("t-1")]);
    }

    #[test]
    fn transaction_order_decides_who_wins_a_scarce_candidate() {
        let calls = vec![call("rc-1", 85000, "Dupont")];
        let txs = vec![tx("t-2", 85000, "Dupont Jean"), tx("t-1", 85000, "Dupont Jean")];
        let report = match_batch(&txs, &calls, &HashSet::new()).unwrap();
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].transaction_id, TransactionId::from("t-2"));
        assert_eq!(report.unmatched, vec![TransactionId::from("t-1")]);
    }
}
