//! Feature vector and explain record models
//!
//! The feature vector order is contractual: the external risk model was
//! trained against exactly these fourteen inputs in exactly this order.
//! The explain record carries the same quantities under readable keys for
//! audit and logging; the model never consumes it.

use serde::Serialize;

/// Number of features in the model input vector
pub const FEATURE_COUNT: usize = 14;

/// Feature names, index-aligned with the vector order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "total_claims",
    "total_beneficiaries",
    "avg_claim_amount",
    "max_claim_amount",
    "std_claim_amount",
    "avg_length_of_stay",
    "distinct_diagnoses",
    "avg_beneficiary_age",
    "pct_male",
    "pct_female",
    "avg_chronic_conditions",
    "inpatient_outpatient_ratio",
    "claims_per_beneficiary",
    "max_to_avg_claim_ratio",
];

/// Fixed-order numeric summary of a provider's claim history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl FeatureVector {
    /// Create a vector from values already in contractual order
    #[must_use]
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// The all-zero vector returned for a provider with no claims
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    /// Feature values in contractual order
    #[must_use]
    pub const fn as_slice(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Wrap the vector in the transport shape the scoring model expects
    #[must_use]
    pub fn to_model_payload(&self) -> ModelPayload {
        ModelPayload {
            data: vec![self.0],
        }
    }
}

/// Request body shape of the external scoring model: a two-dimensional
/// array holding the feature vector as its single row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPayload {
    /// Feature rows; always exactly one per scoring query
    pub data: Vec<[f64; FEATURE_COUNT]>,
}

/// Named view of the aggregated quantities, for diagnostics
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRecord {
    /// Set for degenerate results, e.g. a provider with no claims
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Number of claims aggregated
    pub total_claims: u64,
    /// Number of distinct beneficiaries billed
    pub total_beneficiaries: u64,
    /// Mean reimbursed amount
    pub avg_claim: f64,
    /// Maximum reimbursed amount
    pub max_claim: f64,
    /// Population standard deviation of reimbursed amounts
    pub std_claim: f64,
    /// Mean length of stay in days
    pub avg_stay: f64,
    /// Number of distinct diagnosis codes
    pub distinct_diagnoses: u64,
    /// Mean beneficiary age at claim start
    pub avg_age: f64,
    /// Share of gendered claims that are male
    pub pct_male: f64,
    /// Share of gendered claims that are female
    pub pct_female: f64,
    /// Mean chronic-condition burden
    pub avg_chronic: f64,
    /// Inpatient/outpatient ratio as sent to the model
    pub io_ratio: f64,
    /// Claims per beneficiary, smoothed
    pub claims_per_beneficiary: f64,
    /// Max-to-average amount ratio, smoothed
    pub max_to_avg: f64,
}

impl ExplainRecord {
    /// Explain record for a provider with no claim history
    #[must_use]
    pub fn no_claims() -> Self {
        Self {
            reason: Some("No claims for provider".to_string()),
            ..Self::default()
        }
    }
}
