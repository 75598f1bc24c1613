//! Algorithm implementations for claim analytics
//!
//! This module contains the two analysis pipelines: collusion-ring
//! detection over the provider co-occurrence graph, and feature
//! aggregation for the external risk-scoring model.

pub mod collusion;
pub mod features;
