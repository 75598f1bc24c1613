//! Canonical claim record model
//!
//! This module contains the `ClaimRecord` model, the normalized form of a
//! billing claim shared by both analysis pipelines. Every field that can be
//! absent or malformed in the raw feed is optional here; the normalizer
//! guarantees the record itself is always constructible.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::types::Gender;

/// Number of chronic-condition indicator dimensions carried per claim.
///
/// The order is fixed: Alzheimer's, heart failure, kidney disease, cancer,
/// obstructive pulmonary disease, depression, diabetes, ischemic heart
/// disease, osteoporosis, rheumatoid arthritis, stroke.
pub const CHRONIC_CONDITION_COUNT: usize = 11;

/// Normalized representation of a single billing claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim identifier, kept for logging and upstream resolution
    pub claim_id: Option<String>,
    /// Canonical provider identifier (uppercased, trimmed)
    pub provider: Option<String>,
    /// Beneficiary identifier
    pub beneficiary: Option<String>,
    /// Date the claim period started
    pub claim_start: Option<NaiveDate>,
    /// Date the claim period ended
    pub claim_end: Option<NaiveDate>,
    /// Beneficiary date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Admission date; presence marks the claim as inpatient
    pub admission_date: Option<NaiveDate>,
    /// Reimbursed amount, always finite when present
    pub reimbursed_amount: Option<f64>,
    /// Diagnosis group code
    pub diagnosis_code: Option<String>,
    /// Beneficiary gender
    pub gender: Gender,
    /// Chronic-condition indicators, 1 present / 0 absent
    pub chronic_flags: [u8; CHRONIC_CONDITION_COUNT],
}

impl Default for ClaimRecord {
    fn default() -> Self {
        Self {
            claim_id: None,
            provider: None,
            beneficiary: None,
            claim_start: None,
            claim_end: None,
            date_of_birth: None,
            admission_date: None,
            reimbursed_amount: None,
            diagnosis_code: None,
            gender: Gender::Unknown,
            chronic_flags: [0; CHRONIC_CONDITION_COUNT],
        }
    }
}

impl ClaimRecord {
    /// Length of stay in whole days, clamped to zero for inverted ranges
    ///
    /// Returns `None` unless both the start and end date are present.
    #[must_use]
    pub fn length_of_stay_days(&self) -> Option<i64> {
        match (self.claim_start, self.claim_end) {
            (Some(start), Some(end)) => Some(end.signed_duration_since(start).num_days().max(0)),
            _ => None,
        }
    }

    /// Beneficiary age in whole years at the claim-start date
    ///
    /// Accounts for month/day rollover rather than dividing elapsed days by
    /// a year length. Returns `None` unless both dates are present.
    #[must_use]
    pub fn age_at_claim_start(&self) -> Option<i32> {
        let (dob, start) = match (self.date_of_birth, self.claim_start) {
            (Some(dob), Some(start)) => (dob, start),
            _ => return None,
        };

        let mut age = start.year() - dob.year();
        if (start.month(), start.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        Some(age)
    }

    /// Whether this claim involved an admission
    #[must_use]
    pub const fn is_inpatient(&self) -> bool {
        self.admission_date.is_some()
    }

    /// Number of chronic conditions flagged on this claim
    #[must_use]
    pub fn chronic_condition_count(&self) -> usize {
        self.chronic_flags.iter().filter(|&&f| f != 0).count()
    }
}
