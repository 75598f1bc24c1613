//! Raw claim record as received from the upstream feed
//!
//! Field names follow the upstream wire format. Every field is a loosely
//! typed JSON value because the feed mixes encodings freely: numbers and
//! strings for amounts and gender, several date formats, and a handful of
//! spellings for the chronic-condition columns. Aliases absorb the variant
//! spellings that exist in older exports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single claim as it arrives from the upstream feed, prior to
/// normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClaimRecord {
    /// Claim identifier
    #[serde(rename = "ClaimID", default)]
    pub claim_id: Option<Value>,
    /// Billing provider identifier
    #[serde(rename = "Provider", default)]
    pub provider: Option<Value>,
    /// Beneficiary identifier
    #[serde(rename = "BeneID", default)]
    pub beneficiary: Option<Value>,
    /// Claim period start
    #[serde(rename = "ClaimStartDt", default)]
    pub claim_start: Option<Value>,
    /// Claim period end
    #[serde(rename = "ClaimEndDt", default)]
    pub claim_end: Option<Value>,
    /// Beneficiary date of birth
    #[serde(rename = "DOB", default)]
    pub date_of_birth: Option<Value>,
    /// Admission date, present only for inpatient claims
    #[serde(rename = "AdmissionDt", default)]
    pub admission_date: Option<Value>,
    /// Reimbursed amount
    #[serde(rename = "InscClaimAmtReimbursed", default)]
    pub reimbursed_amount: Option<Value>,
    /// Diagnosis group code
    #[serde(rename = "DiagnosisGroupCode", default)]
    pub diagnosis_code: Option<Value>,
    /// Beneficiary gender in any of the upstream encodings
    #[serde(rename = "Gender", default)]
    pub gender: Option<Value>,
    /// Alzheimer's indicator
    #[serde(rename = "ChronicCond_Alzheimer", default)]
    pub chronic_alzheimers: Option<Value>,
    /// Heart failure indicator
    #[serde(
        rename = "ChronicCond_HeartFailure",
        alias = "ChronicCond_Heartfailure",
        default
    )]
    pub chronic_heart_failure: Option<Value>,
    /// Kidney disease indicator
    #[serde(rename = "ChronicCond_KidneyDisease", default)]
    pub chronic_kidney_disease: Option<Value>,
    /// Cancer indicator
    #[serde(rename = "ChronicCond_Cancer", default)]
    pub chronic_cancer: Option<Value>,
    /// Obstructive pulmonary disease indicator
    #[serde(rename = "ChronicCond_ObstrPulmonary", default)]
    pub chronic_obstructive_pulmonary: Option<Value>,
    /// Depression indicator
    #[serde(rename = "ChronicCond_Depression", default)]
    pub chronic_depression: Option<Value>,
    /// Diabetes indicator
    #[serde(rename = "ChronicCond_Diabetes", default)]
    pub chronic_diabetes: Option<Value>,
    /// Ischemic heart disease indicator
    #[serde(rename = "ChronicCond_IschemicHeart", default)]
    pub chronic_ischemic_heart: Option<Value>,
    /// Osteoporosis indicator
    #[serde(
        rename = "ChronicCond_Osteoporosis",
        alias = "ChronicCond_Osteoporasis",
        default
    )]
    pub chronic_osteoporosis: Option<Value>,
    /// Rheumatoid arthritis indicator
    #[serde(rename = "ChronicCond_rheumatoidarthritis", default)]
    pub chronic_rheumatoid_arthritis: Option<Value>,
    /// Stroke indicator
    #[serde(rename = "ChronicCond_stroke", default)]
    pub chronic_stroke: Option<Value>,
}

impl RawClaimRecord {
    /// Chronic-condition fields in canonical order
    #[must_use]
    pub fn chronic_fields(&self) -> [Option<&Value>; crate::models::CHRONIC_CONDITION_COUNT] {
        [
            self.chronic_alzheimers.as_ref(),
            self.chronic_heart_failure.as_ref(),
            self.chronic_kidney_disease.as_ref(),
            self.chronic_cancer.as_ref(),
            self.chronic_obstructive_pulmonary.as_ref(),
            self.chronic_depression.as_ref(),
            self.chronic_diabetes.as_ref(),
            self.chronic_ischemic_heart.as_ref(),
            self.chronic_osteoporosis.as_ref(),
            self.chronic_rheumatoid_arthritis.as_ref(),
            self.chronic_stroke.as_ref(),
        ]
    }
}
