//! Provider collusion-ring detection
//!
//! This module implements the temporal co-occurrence analysis: a graph is
//! built over providers that billed the same beneficiary within a
//! configurable day window, and the connected component containing a query
//! provider is extracted as its suspected ring.

pub mod cluster;
pub mod graph;

pub use cluster::{RingLink, RingOutcome, RingReport, extract_ring};
pub use graph::{CollusionGraph, CollusionGraphBuilder, ProviderPair};

use crate::config::CollusionConfig;
use crate::error::{ClaimscanError, Result};
use crate::models::ClaimRecord;
use crate::normalize::canonical_provider_id;

/// Run the full cluster query for one provider
///
/// The target id is case-normalized before the lookup; an empty id is the
/// only rejected input. The graph is built fresh from the given records and
/// discarded with the call.
pub fn find_ring(
    records: &[ClaimRecord],
    provider_id: &str,
    config: &CollusionConfig,
) -> Result<RingOutcome> {
    let target = canonical_provider_id(provider_id);
    if target.is_empty() {
        return Err(ClaimscanError::MissingProviderId);
    }

    let graph = CollusionGraphBuilder::new(config.clone()).build(records);
    Ok(extract_ring(&graph, &target))
}
