//! Field scorers and the composite match score.
//!
//! Three independent signals are extracted from a (transaction, rent call) pair and folded into
//! a single composite score:
//!
//! * the **amount score** compares the transaction amount against the outstanding amount;
//! * the **name score** compares the free-text payer label against the tenant or company name;
//! * the **reference score** looks for the unit, name or lease identifier inside the payment
//!   reference.
//!
//! Amount equality is the strongest signal, payer-name resemblance the second, and the free-text
//! reference acts as a weak tie-breaker. The weights below are design constants, not tunables.

use rl_common::Cents;

use crate::{
    helpers::{lease_id_fragments, normalize, similarity, sorted_tokens},
    types::{BankTransaction, CandidateScore, Confidence, RentCall},
};

pub const AMOUNT_WEIGHT: f64 = 0.5;
pub const NAME_WEIGHT: f64 = 0.35;
pub const REFERENCE_WEIGHT: f64 = 0.15;

const HIGH_CONFIDENCE_FLOOR: f64 = 0.8;
const MEDIUM_CONFIDENCE_FLOOR: f64 = 0.5;

/// Relative deviation still counted as "almost the right amount".
const AMOUNT_CLOSE_DEVIATION: f64 = 0.05;
const AMOUNT_CLOSE_SCORE: f64 = 0.6;
/// Relative deviation still counted as "in the right ballpark".
const AMOUNT_NEAR_DEVIATION: f64 = 0.20;
const AMOUNT_NEAR_SCORE: f64 = 0.3;
/// A refund or debit is directionally suspicious even when the magnitude lines up.
const REFUND_PENALTY: f64 = 0.5;

const NAME_PREFIX_SCORE: f64 = 0.85;
const NAME_CONTAINMENT_SCORE: f64 = 0.8;
/// A prefix shorter than this says nothing about bank-imposed truncation.
const MIN_PREFIX_LEN: usize = 4;
/// Name forms shorter than this never trigger containment: a 2-letter surname like "Le" appears
/// in half of all transfer labels.
const MIN_CONTAINMENT_LEN: usize = 3;
/// Edit-distance similarities below this floor are noise, not near-misses.
const MIN_FUZZY_SIMILARITY: f64 = 0.5;
const MIN_UNIT_LABEL_LEN: usize = 2;

/// Score the amount factor for a pair, in `[0, 1]`.
///
/// The transaction's magnitude is compared against the outstanding amount, so a refund can still
/// match on magnitude; the result is then halved for negative amounts. A zero or malformed
/// obligation scores zero rather than erroring.
pub fn score_amount(amount: Cents, amount_due: Cents) -> f64 {
    if amount_due.value() <= 0 {
        return 0.0;
    }
    let magnitude = amount.abs().value();
    if magnitude == 0 {
        return 0.0;
    }
    let base = if magnitude == amount_due.value() {
        1.0
    } else {
        let deviation = (magnitude - amount_due.value()).abs() as f64 / amount_due.value() as f64;
        if deviation <= AMOUNT_CLOSE_DEVIATION {
            AMOUNT_CLOSE_SCORE
        } else if deviation <= AMOUNT_NEAR_DEVIATION {
            AMOUNT_NEAR_SCORE
        } else {
            0.0
        }
    };
    if amount.is_negative() {
        base * REFUND_PENALTY
    } else {
        base
    }
}

/// Score the payer-label factor for a pair, in `[0, 1]`.
///
/// The label is compared against every name form the rent call offers (full tenant name, family
/// name alone, company name), strongest rule first:
///
/// 1. equality, ignoring word order — 1.0;
/// 2. truncation: one side is a strict prefix (≥ [`MIN_PREFIX_LEN`]) of the other — 0.85;
/// 3. containment of a form (≥ [`MIN_CONTAINMENT_LEN`]) in the label, or vice versa — 0.8;
/// 4. best normalized edit-distance similarity across the forms, when ≥ 0.5;
/// 5. otherwise 0.
pub fn score_name(payer_label: &str, call: &RentCall) -> f64 {
    let label = normalize(payer_label);
    if label.is_empty() {
        return 0.0;
    }
    let forms = candidate_name_forms(call);
    if forms.is_empty() {
        return 0.0;
    }
    if forms.iter().any(|form| *form == label || sorted_tokens(form) == sorted_tokens(&label)) {
        return 1.0;
    }
    if forms.iter().any(|form| is_truncation_pair(form, &label)) {
        return NAME_PREFIX_SCORE;
    }
    if forms.iter().any(|form| {
        (form.chars().count() >= MIN_CONTAINMENT_LEN && label.contains(form.as_str()))
            || (label.chars().count() >= MIN_CONTAINMENT_LEN && form.contains(&label))
    }) {
        return NAME_CONTAINMENT_SCORE;
    }
    let best = forms.iter().map(|form| similarity(form, &label)).fold(0.0, f64::max);
    if best >= MIN_FUZZY_SIMILARITY {
        best
    } else {
        0.0
    }
}

/// Score the payment-reference factor for a pair. Deliberately binary: a reference either names
/// the obligation (unit, family name, company, or a lease-id fragment) or it is noise.
pub fn score_reference(reference: Option<&str>, call: &RentCall) -> f64 {
    let text = match reference {
        Some(r) => normalize(r),
        None => return 0.0,
    };
    if text.is_empty() {
        return 0.0;
    }
    let unit = normalize(&call.unit_label);
    if unit.chars().count() >= MIN_UNIT_LABEL_LEN && text.contains(&unit) {
        return 1.0;
    }
    if let Some(last_name) = &call.last_name {
        let last_name = normalize(last_name);
        if last_name.chars().count() >= MIN_CONTAINMENT_LEN && text.contains(&last_name) {
            return 1.0;
        }
    }
    if let Some(company) = &call.company_name {
        let company = normalize(company);
        if company.chars().count() >= MIN_CONTAINMENT_LEN && text.contains(&company) {
            return 1.0;
        }
    }
    let lease = normalize(&call.lease_id);
    if !lease.is_empty() && text.contains(&lease) {
        return 1.0;
    }
    if lease_id_fragments(&call.lease_id).iter().any(|fragment| text.contains(fragment)) {
        return 1.0;
    }
    0.0
}

/// Fold the three field scores into the composite score.
pub fn composite_score(amount_score: f64, name_score: f64, reference_score: f64) -> f64 {
    amount_score * AMOUNT_WEIGHT + name_score * NAME_WEIGHT + reference_score * REFERENCE_WEIGHT
}

/// The confidence tier for an assigned match with the given composite score.
pub fn confidence_tier(composite: f64) -> Confidence {
    if composite >= HIGH_CONFIDENCE_FLOOR {
        Confidence::High
    } else if composite >= MEDIUM_CONFIDENCE_FLOOR {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Score one (transaction, rent call) pair across all three factors.
pub fn score_pair(tx: &BankTransaction, call: &RentCall) -> CandidateScore {
    let amount_score = score_amount(tx.amount, call.amount_due);
    let name_score = score_name(&tx.payer_label, call);
    let reference_score = score_reference(tx.reference.as_deref(), call);
    CandidateScore {
        rent_call_id: call.id.clone(),
        amount_score,
        name_score,
        reference_score,
        composite: composite_score(amount_score, name_score, reference_score),
    }
}

/// The normalized name forms a rent call can be recognized by. Each form is included only when
/// the underlying field is present and non-empty after normalization.
fn candidate_name_forms(call: &RentCall) -> Vec<String> {
    let mut forms = Vec::with_capacity(3);
    if let (Some(first_name), Some(last_name)) = (&call.first_name, &call.last_name) {
        let full = normalize(&format!("{first_name} {last_name}"));
        if !full.is_empty() {
            forms.push(full);
        }
    }
    if let Some(last_name) = &call.last_name {
        let last_name = normalize(last_name);
        if !last_name.is_empty() {
            forms.push(last_name);
        }
    }
    if let Some(company) = &call.company_name {
        let company = normalize(company);
        if !company.is_empty() {
            forms.push(company);
        }
    }
    forms
}

fn is_truncation_pair(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.chars().count() >= MIN_PREFIX_LEN && shorter != longer && longer.starts_with(shorter)
}
