//! Provider feature aggregation
//!
//! Single pass over a provider's normalized claim history, accumulating
//! running sums into the fourteen model features. O(n) time with O(n)
//! auxiliary space for the distinct-value sets. Records are never mutated;
//! repeated calls over the same history produce bit-identical vectors.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::{AggregationConfig, AmountPolicy, ChronicPolicy, InpatientRatioPolicy};
use crate::models::{
    CHRONIC_CONDITION_COUNT, ClaimRecord, ExplainRecord, FeatureVector,
};

/// Ratio value sent to the model when the inpatient ratio is frozen to the
/// externally trained baseline
const FROZEN_INPATIENT_RATIO: f64 = 1.0;

/// Running sums for one aggregation pass
#[derive(Debug, Default)]
struct Accumulator<'a> {
    amount_count: u64,
    amount_sum: f64,
    amount_sum_sq: f64,
    max_amount: f64,
    beneficiaries: FxHashSet<&'a str>,
    diagnoses: FxHashSet<&'a str>,
    stay_days_sum: f64,
    stay_count: u64,
    age_years_sum: f64,
    age_count: u64,
    male: u64,
    female: u64,
    inpatient: u64,
    outpatient: u64,
    chronic_claim_sums: [f64; CHRONIC_CONDITION_COUNT],
    chronic_by_beneficiary: FxHashMap<&'a str, [u8; CHRONIC_CONDITION_COUNT]>,
}

impl<'a> Accumulator<'a> {
    fn push(&mut self, record: &'a ClaimRecord) {
        if let Some(amount) = record.reimbursed_amount {
            self.amount_count += 1;
            self.amount_sum += amount;
            self.amount_sum_sq += amount * amount;
            if amount > self.max_amount {
                self.max_amount = amount;
            }
        }

        if let Some(beneficiary) = &record.beneficiary {
            self.beneficiaries.insert(beneficiary);
        }
        if let Some(diagnosis) = &record.diagnosis_code {
            self.diagnoses.insert(diagnosis);
        }

        if let Some(days) = record.length_of_stay_days() {
            self.stay_days_sum += days as f64;
            self.stay_count += 1;
        }
        if let Some(age) = record.age_at_claim_start() {
            self.age_years_sum += f64::from(age);
            self.age_count += 1;
        }

        match record.gender {
            crate::models::Gender::Male => self.male += 1,
            crate::models::Gender::Female => self.female += 1,
            crate::models::Gender::Unknown => {}
        }

        if record.is_inpatient() {
            self.inpatient += 1;
        } else {
            self.outpatient += 1;
        }

        for (sum, &flag) in self.chronic_claim_sums.iter_mut().zip(&record.chronic_flags) {
            *sum += f64::from(flag);
        }
        if let Some(beneficiary) = &record.beneficiary {
            let entry = self
                .chronic_by_beneficiary
                .entry(beneficiary)
                .or_insert([0; CHRONIC_CONDITION_COUNT]);
            for (seen, &flag) in entry.iter_mut().zip(&record.chronic_flags) {
                *seen = (*seen).max(flag);
            }
        }
    }
}

/// Aggregates a provider's claim history into the model feature vector
#[derive(Debug, Clone, Default)]
pub struct FeatureAggregator {
    config: AggregationConfig,
}

impl FeatureAggregator {
    /// Create an aggregator with default policies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with explicit policies
    #[must_use]
    pub const fn with_config(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Aggregate a provider's claim history
    ///
    /// An empty history is a defined degenerate result: fourteen zeros and
    /// an explain record flagging the absence of claims. Never fails.
    #[must_use]
    pub fn aggregate(
        &self,
        provider_id: &str,
        records: &[ClaimRecord],
    ) -> (FeatureVector, ExplainRecord) {
        if records.is_empty() {
            debug!("No claims for provider {provider_id}");
            return (FeatureVector::zeros(), ExplainRecord::no_claims());
        }

        let mut acc = Accumulator::default();
        for record in records {
            acc.push(record);
        }

        let total_claims = records.len() as u64;
        let total_beneficiaries = acc.beneficiaries.len() as u64;
        let distinct_diagnoses = acc.diagnoses.len() as u64;

        // Amount statistics share one denominator policy so the mean and
        // the deviation stay consistent with each other
        let amount_denominator = match self.config.amount_policy {
            AmountPolicy::ExcludeMissing => acc.amount_count,
            AmountPolicy::MissingAsZero => total_claims,
        };
        let (avg_claim, std_claim) = if amount_denominator == 0 {
            (0.0, 0.0)
        } else {
            let denominator = amount_denominator as f64;
            let mean = acc.amount_sum / denominator;
            let variance = (acc.amount_sum_sq / denominator - mean * mean).max(0.0);
            (mean, variance.sqrt())
        };

        let avg_stay = if acc.stay_count == 0 {
            0.0
        } else {
            acc.stay_days_sum / acc.stay_count as f64
        };
        let avg_age = if acc.age_count == 0 {
            0.0
        } else {
            acc.age_years_sum / acc.age_count as f64
        };

        let gendered = acc.male + acc.female;
        let (pct_male, pct_female) = if gendered == 0 {
            (0.0, 0.0)
        } else {
            (
                acc.male as f64 / gendered as f64,
                acc.female as f64 / gendered as f64,
            )
        };

        let avg_chronic = match self.config.chronic_policy {
            ChronicPolicy::PerBeneficiary => {
                if acc.chronic_by_beneficiary.is_empty() {
                    0.0
                } else {
                    let beneficiary_count = acc.chronic_by_beneficiary.len() as f64;
                    let mut totals = [0.0f64; CHRONIC_CONDITION_COUNT];
                    for flags in acc.chronic_by_beneficiary.values() {
                        for (total, &flag) in totals.iter_mut().zip(flags) {
                            *total += f64::from(flag);
                        }
                    }
                    totals.iter().map(|t| t / beneficiary_count).sum::<f64>()
                        / CHRONIC_CONDITION_COUNT as f64
                }
            }
            ChronicPolicy::PerClaim => {
                acc.chronic_claim_sums
                    .iter()
                    .map(|s| s / total_claims as f64)
                    .sum::<f64>()
                    / CHRONIC_CONDITION_COUNT as f64
            }
        };

        let io_ratio = match self.config.inpatient_ratio_policy {
            InpatientRatioPolicy::Dynamic => {
                acc.inpatient as f64 / (acc.outpatient as f64 + 1.0)
            }
            InpatientRatioPolicy::Frozen => FROZEN_INPATIENT_RATIO,
        };

        // The +1 smoothing keeps the ratio features finite when the
        // denominator quantity is zero
        let claims_per_beneficiary = total_claims as f64 / (total_beneficiaries as f64 + 1.0);
        let max_to_avg = acc.max_amount / (avg_claim + 1.0);

        let vector = FeatureVector::new([
            total_claims as f64,
            total_beneficiaries as f64,
            avg_claim,
            acc.max_amount,
            std_claim,
            avg_stay,
            distinct_diagnoses as f64,
            avg_age,
            pct_male,
            pct_female,
            avg_chronic,
            io_ratio,
            claims_per_beneficiary,
            max_to_avg,
        ]);

        let explain = ExplainRecord {
            reason: None,
            total_claims,
            total_beneficiaries,
            avg_claim,
            max_claim: acc.max_amount,
            std_claim,
            avg_stay,
            distinct_diagnoses,
            avg_age,
            pct_male,
            pct_female,
            avg_chronic,
            io_ratio,
            claims_per_beneficiary,
            max_to_avg,
        };

        debug!(
            "Aggregated {} claims over {} beneficiaries for provider {provider_id}",
            total_claims, total_beneficiaries
        );

        (vector, explain)
    }
}
