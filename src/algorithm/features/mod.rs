//! Feature aggregation pipeline
//!
//! Produces the fixed-order feature vector the external risk-scoring model
//! consumes, together with its named explain record. The caller supplies a
//! provider's full claim history; this module never performs record
//! retrieval itself.

pub mod aggregator;

pub use aggregator::FeatureAggregator;

use crate::config::AggregationConfig;
use crate::error::{ClaimscanError, Result};
use crate::models::{ClaimRecord, ExplainRecord, ModelPayload};
use crate::normalize::canonical_provider_id;

/// Build the scoring-model request payload for one provider
///
/// Wraps the feature vector in the `{ "data": [[f1..f14]] }` transport
/// shape the model endpoint expects. An empty provider id is the only
/// rejected input; an empty history yields the defined zero payload.
pub fn build_model_payload(
    provider_id: &str,
    records: &[ClaimRecord],
    config: &AggregationConfig,
) -> Result<(ModelPayload, ExplainRecord)> {
    let target = canonical_provider_id(provider_id);
    if target.is_empty() {
        return Err(ClaimscanError::MissingProviderId);
    }

    let aggregator = FeatureAggregator::with_config(*config);
    let (vector, explain) = aggregator.aggregate(&target, records);
    Ok((vector.to_model_payload(), explain))
}
