//! Configuration for the analysis pipelines.
//!
//! The upstream system computed several features inconsistently between its
//! two scoring call sites. Rather than silently reproducing one variant,
//! each divergent semantic is an explicit policy flag here, with the default
//! documented on the field.

/// How records with a missing reimbursement amount enter the amount mean
/// and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountPolicy {
    /// Records without a finite amount are excluded from the denominator
    #[default]
    ExcludeMissing,
    /// Missing amounts count as zero and stay in the denominator
    MissingAsZero,
}

/// Aggregation level for the chronic-condition feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChronicPolicy {
    /// Per-condition maximum across each beneficiary's claims, averaged
    /// over beneficiaries and condition dimensions
    #[default]
    PerBeneficiary,
    /// Per-condition mean across claims, averaged over condition dimensions
    PerClaim,
}

/// How the inpatient/outpatient ratio feature is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InpatientRatioPolicy {
    /// Admitted claims divided by non-admitted claims plus one
    #[default]
    Dynamic,
    /// Constant 1.0, matching the externally trained baseline model
    Frozen,
}

/// Configuration for the feature aggregation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregationConfig {
    /// Denominator policy for amount statistics
    pub amount_policy: AmountPolicy,
    /// Aggregation level for chronic-condition flags
    pub chronic_policy: ChronicPolicy,
    /// Source of the inpatient/outpatient ratio
    pub inpatient_ratio_policy: InpatientRatioPolicy,
}

/// Configuration for collusion graph construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollusionConfig {
    /// Maximum gap in days between two claim-start dates for the claims to
    /// count as a suspicious co-occurrence
    pub day_window_days: i64,
    /// Scan beneficiary groups in parallel once there are enough of them
    pub parallel: bool,
}

impl Default for CollusionConfig {
    fn default() -> Self {
        Self {
            day_window_days: 30, // Matches the default cluster query window
            parallel: true,
        }
    }
}

impl CollusionConfig {
    /// Create a configuration with a specific day window
    #[must_use]
    pub fn with_day_window(day_window_days: i64) -> Self {
        Self {
            day_window_days,
            ..Self::default()
        }
    }
}
