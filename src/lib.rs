//! A Rust library for provider claim analytics: collusion-ring detection
//! over a temporal co-occurrence graph, and fixed-order feature aggregation
//! for an external risk-scoring model.
//!
//! The crate owns no storage and performs no network I/O: callers supply
//! already-fetched raw records, the normalizer coerces them into canonical
//! form, and the two independent pipelines compute their results per call.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AggregationConfig, AmountPolicy, ChronicPolicy, CollusionConfig, InpatientRatioPolicy};
pub use error::{ClaimscanError, Result};
pub use models::{ClaimRecord, ExplainRecord, FeatureVector, Gender, ModelPayload};
pub use normalize::{Normalizer, RawClaimRecord};

// Analysis pipelines
pub use algorithm::collusion::{
    CollusionGraph, CollusionGraphBuilder, ProviderPair, RingLink, RingOutcome, RingReport,
    extract_ring, find_ring,
};
pub use algorithm::features::{FeatureAggregator, build_model_payload};
