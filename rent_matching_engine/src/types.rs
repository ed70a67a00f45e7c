use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use rl_common::Cents;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------    TransactionId      -------------------------------------------------------
/// A lightweight wrapper around the bank's identifier for a statement line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl FromStr for TransactionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl<S: Into<String>> From<S> for TransactionId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------      RentCallId       -------------------------------------------------------
/// A lightweight wrapper around the ledger's identifier for a rent call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentCallId(pub String);

impl FromStr for RentCallId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl<S: Into<String>> From<S> for RentCallId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl Display for RentCallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RentCallId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------    BankTransaction    -------------------------------------------------------
/// A single line from a bank statement, as delivered by the ingestion collaborator.
///
/// Payers write whatever they like in the label and reference fields, so neither can be trusted
/// to carry a clean identifier. The matching engine treats both as fuzzy evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransaction {
    pub id: TransactionId,
    /// The date the funds were credited or debited on the account.
    pub value_date: NaiveDate,
    /// Signed amount in minor currency units. Negative amounts are refunds or debits.
    pub amount: Cents,
    /// The free-text label the payer attached to the transfer.
    pub payer_label: String,
    /// An optional free-text payment reference.
    pub reference: Option<String>,
}

impl BankTransaction {
    pub fn new<S: Into<String>>(id: TransactionId, value_date: NaiveDate, amount: Cents, payer_label: S) -> Self {
        Self { id, value_date, amount, payer_label: payer_label.into(), reference: None }
    }

    pub fn with_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

//--------------------------------------       RentCall        -------------------------------------------------------
/// An outstanding billing obligation that a payment may discharge.
///
/// A rent call carries either an individual tenant name pair, a company name, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentCall {
    pub id: RentCallId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    /// The unit or lot this obligation is billed against, e.g. "Lot 12".
    pub unit_label: String,
    pub lease_id: String,
    /// The outstanding amount in minor currency units.
    pub amount_due: Cents,
    /// Human-readable billing period, e.g. "2024-04".
    pub period_label: String,
}

impl RentCall {
    pub fn new<S1, S2, S3>(id: RentCallId, unit_label: S1, lease_id: S2, amount_due: Cents, period_label: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            id,
            first_name: None,
            last_name: None,
            company_name: None,
            unit_label: unit_label.into(),
            lease_id: lease_id.into(),
            amount_due,
            period_label: period_label.into(),
        }
    }

    pub fn with_tenant<S1: Into<String>, S2: Into<String>>(mut self, first_name: S1, last_name: S2) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_company<S: Into<String>>(mut self, company_name: S) -> Self {
        self.company_name = Some(company_name.into());
        self
    }
}

//--------------------------------------      Confidence       -------------------------------------------------------
/// How much manual review an assigned match deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// The composite score leaves little room for doubt.
    High,
    /// Plausible, but worth a glance from an operator.
    Medium,
    /// Barely cleared the match threshold.
    Low,
}

impl Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid confidence tier: {0}")]
pub struct ConversionError(String);

impl FromStr for Confidence {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            s => Err(ConversionError(format!("Invalid confidence tier: {s}"))),
        }
    }
}

//--------------------------------------    CandidateScore     -------------------------------------------------------
/// The per-factor breakdown for one (transaction, rent call) pair. Lives only for the duration
/// of a matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub rent_call_id: RentCallId,
    pub amount_score: f64,
    pub name_score: f64,
    pub reference_score: f64,
    pub composite: f64,
}

//--------------------------------------  MatchedTransaction   -------------------------------------------------------
/// A transaction assigned to exactly one rent call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedTransaction {
    pub transaction_id: TransactionId,
    pub rent_call_id: RentCallId,
    pub score: f64,
    pub confidence: Confidence,
}

//-------------------------------------- AmbiguousTransaction  -------------------------------------------------------
/// A transaction whose best candidates scored too closely for automatic assignment.
/// The competing candidates are listed in descending score order for operator resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbiguousTransaction {
    pub transaction_id: TransactionId,
    pub candidates: Vec<CandidateScore>,
}

//--------------------------------------      MatchSummary     -------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub matched: usize,
    pub ambiguous: usize,
    pub unmatched: usize,
    /// Rent calls visible to this run, i.e. supplied minus the already-matched set.
    pub candidates_considered: usize,
}

//--------------------------------------  ReconciliationReport -------------------------------------------------------
/// The full partition produced by one matching run. Every input transaction appears in exactly
/// one of `matched`, `ambiguous` or `unmatched`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub matched: Vec<MatchedTransaction>,
    pub ambiguous: Vec<AmbiguousTransaction>,
    pub unmatched: Vec<TransactionId>,
    pub summary: MatchSummary,
}

impl ReconciliationReport {
    pub fn as_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}
