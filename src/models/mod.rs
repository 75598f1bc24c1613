//! Domain models for claim analytics
//!
//! This module contains the canonical claim record shared by both analysis
//! pipelines, the common domain enums, and the feature vector types consumed
//! by the external risk model.

pub mod claim;
pub mod features;
pub mod types;

pub use claim::{CHRONIC_CONDITION_COUNT, ClaimRecord};
pub use features::{ExplainRecord, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, ModelPayload};
pub use types::Gender;
