//! Ring extraction from the co-occurrence graph
//!
//! A ring is the connected component containing the query provider. The
//! traversal is a plain breadth-first search over the adjacency relation;
//! the edge-detail map is then filtered to pairs with both endpoints inside
//! the component. Reported lists are sorted so repeated runs produce
//! identical output.

use std::collections::VecDeque;

use log::info;
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::graph::CollusionGraph;

/// One suspicious link inside a ring, with its evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingLink {
    /// First provider of the pair
    pub provider1: String,
    /// Second provider of the pair
    pub provider2: String,
    /// Beneficiaries billed by both providers within the day window
    pub shared_beneficiaries: Vec<String>,
}

/// Full description of the ring containing a query provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingReport {
    /// The canonical query provider id
    pub provider_id: String,
    /// Every provider in the connected component, sorted
    pub members: Vec<String>,
    /// Every edge with both endpoints inside the component
    pub links: Vec<RingLink>,
}

impl RingReport {
    /// Number of providers in the ring
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Outcome of a cluster query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RingOutcome {
    /// The provider has no qualifying co-occurrence with any other provider
    NotInRing,
    /// The provider belongs to a ring
    Member(RingReport),
}

impl RingOutcome {
    /// Whether the query provider was found in a ring
    #[must_use]
    pub const fn in_ring(&self) -> bool {
        matches!(self, Self::Member(_))
    }
}

/// Extract the connected component containing `provider_id`
///
/// Returns `NotInRing` when the provider has no adjacency entry; this is a
/// defined result, not an error.
#[must_use]
pub fn extract_ring(graph: &CollusionGraph, provider_id: &str) -> RingOutcome {
    if !graph.contains(provider_id) {
        info!("Provider {provider_id} not in any suspicious cluster");
        return RingOutcome::NotInRing;
    }

    // Breadth-first traversal, visiting each provider exactly once
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut queue: VecDeque<&str> = VecDeque::new();
    visited.insert(provider_id);
    queue.push_back(provider_id);
    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = graph.neighbors(current) {
            for neighbor in neighbors {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    let mut members: Vec<String> = visited.iter().map(ToString::to_string).collect();
    members.sort_unstable();

    let mut links: Vec<RingLink> = graph
        .edges()
        .filter(|(pair, _)| visited.contains(pair.first()) && visited.contains(pair.second()))
        .map(|(pair, beneficiaries)| {
            let mut shared: Vec<String> = beneficiaries.iter().cloned().collect();
            shared.sort_unstable();
            RingLink {
                provider1: pair.first().to_string(),
                provider2: pair.second().to_string(),
                shared_beneficiaries: shared,
            }
        })
        .collect();
    links.sort_unstable_by(|a, b| {
        (&a.provider1, &a.provider2).cmp(&(&b.provider1, &b.provider2))
    });

    info!(
        "Provider {provider_id} is in a ring of {} providers with {} links",
        members.len(),
        links.len()
    );

    RingOutcome::Member(RingReport {
        provider_id: provider_id.to_string(),
        members,
        links,
    })
}
