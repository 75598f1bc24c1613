//! Record normalization
//!
//! This module turns raw feed records into canonical `ClaimRecord` values.
//! Normalization never fails: every malformed or missing field degrades to
//! a neutral default (amounts and dates to `None`, gender to `Unknown`,
//! chronic flags to 0), so one bad record can never abort a pipeline.

pub mod coerce;
pub mod dates;
pub mod raw;

pub use coerce::canonical_provider_id;
pub use dates::DateFormatConfig;
pub use raw::RawClaimRecord;

use crate::models::{CHRONIC_CONDITION_COUNT, ClaimRecord};

/// Normalizer for raw claim records
///
/// A pure function over its input: the same raw record and configuration
/// always produce the same canonical record.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Date format handling for the string-encoded date fields
    pub date_config: DateFormatConfig,
}

impl Normalizer {
    /// Create a normalizer with default date handling
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a single raw record into its canonical form
    #[must_use]
    pub fn normalize(&self, raw: &RawClaimRecord) -> ClaimRecord {
        let mut chronic_flags = [0u8; CHRONIC_CONDITION_COUNT];
        for (flag, field) in chronic_flags.iter_mut().zip(raw.chronic_fields()) {
            *flag = coerce::coerce_chronic_flag(field);
        }

        ClaimRecord {
            claim_id: coerce::coerce_string(raw.claim_id.as_ref()),
            provider: coerce::coerce_provider_id(raw.provider.as_ref()),
            beneficiary: coerce::coerce_string(raw.beneficiary.as_ref()),
            claim_start: dates::parse_date_value(raw.claim_start.as_ref(), &self.date_config),
            claim_end: dates::parse_date_value(raw.claim_end.as_ref(), &self.date_config),
            date_of_birth: dates::parse_date_value(raw.date_of_birth.as_ref(), &self.date_config),
            admission_date: dates::parse_date_value(
                raw.admission_date.as_ref(),
                &self.date_config,
            ),
            reimbursed_amount: coerce::coerce_amount(raw.reimbursed_amount.as_ref()),
            diagnosis_code: coerce::coerce_string(raw.diagnosis_code.as_ref()),
            gender: coerce::coerce_gender(raw.gender.as_ref()),
            chronic_flags,
        }
    }

    /// Normalize a batch of raw records
    #[must_use]
    pub fn normalize_batch(&self, raws: &[RawClaimRecord]) -> Vec<ClaimRecord> {
        let records: Vec<ClaimRecord> = raws.iter().map(|raw| self.normalize(raw)).collect();
        log::debug!("Normalized {} raw claim records", records.len());
        records
    }
}
