//! Provider co-occurrence graph construction
//!
//! Records are bucketed by beneficiary; within each bucket every pair of
//! claims from distinct providers whose start dates fall within the day
//! window adds an undirected edge between the providers, with the
//! beneficiary retained as evidence on the edge. The scan is quadratic in
//! the largest bucket, which is acceptable while beneficiary fan-out stays
//! small; buckets are independent, so large datasets are scanned in
//! parallel and folded into the graph in a single accumulation step.

use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::config::CollusionConfig;
use crate::models::ClaimRecord;

/// Minimum number of beneficiary groups before the parallel scan pays off
const PARALLEL_GROUP_THRESHOLD: usize = 256;

/// An unordered pair of provider identifiers
///
/// Construction sorts the two endpoints so that (A, B) and (B, A) are the
/// same key in the edge-detail map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderPair(String, String);

impl ProviderPair {
    /// Create a pair, normalizing endpoint order
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }

    /// First endpoint in normalized order
    #[must_use]
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Second endpoint in normalized order
    #[must_use]
    pub fn second(&self) -> &str {
        &self.1
    }
}

/// Undirected provider-adjacency graph with per-edge beneficiary evidence
///
/// Built fresh per query and discarded afterwards. Invariants: adjacency is
/// symmetric, there are no self-loops, and every edge carries a non-empty
/// beneficiary set.
#[derive(Debug, Clone, Default)]
pub struct CollusionGraph {
    adjacency: FxHashMap<String, FxHashSet<String>>,
    edges: FxHashMap<ProviderPair, FxHashSet<String>>,
}

impl CollusionGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a qualifying co-occurrence between two providers
    ///
    /// Inserts the symmetric adjacency entries and adds the beneficiary to
    /// the pair's evidence set. Self-loops are ignored.
    pub fn add_link(&mut self, a: &str, b: &str, beneficiary: &str) {
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
        self.edges
            .entry(ProviderPair::new(a, b))
            .or_default()
            .insert(beneficiary.to_string());
    }

    /// Whether the provider participates in any edge
    #[must_use]
    pub fn contains(&self, provider: &str) -> bool {
        self.adjacency.contains_key(provider)
    }

    /// Providers adjacent to the given provider
    #[must_use]
    pub fn neighbors(&self, provider: &str) -> Option<&FxHashSet<String>> {
        self.adjacency.get(provider)
    }

    /// Number of providers with at least one edge
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over edges and their shared-beneficiary evidence
    pub fn edges(&self) -> impl Iterator<Item = (&ProviderPair, &FxHashSet<String>)> {
        self.edges.iter()
    }
}

/// One record's contribution to the co-occurrence scan
#[derive(Debug, Clone, Copy)]
struct EdgeCandidate<'a> {
    provider: &'a str,
    start: NaiveDate,
}

/// Builder for the provider co-occurrence graph
#[derive(Debug, Clone, Default)]
pub struct CollusionGraphBuilder {
    config: CollusionConfig,
}

impl CollusionGraphBuilder {
    /// Create a builder with the given configuration
    #[must_use]
    pub fn new(config: CollusionConfig) -> Self {
        Self { config }
    }

    /// Build the co-occurrence graph over the given records
    ///
    /// Records missing a provider, beneficiary, or claim-start date cannot
    /// participate in any edge and are excluded before grouping.
    #[must_use]
    pub fn build(&self, records: &[ClaimRecord]) -> CollusionGraph {
        let mut groups: FxHashMap<&str, SmallVec<[EdgeCandidate<'_>; 8]>> = FxHashMap::default();
        for record in records {
            let (Some(provider), Some(beneficiary), Some(start)) =
                (&record.provider, &record.beneficiary, record.claim_start)
            else {
                continue;
            };
            groups
                .entry(beneficiary.as_str())
                .or_default()
                .push(EdgeCandidate {
                    provider: provider.as_str(),
                    start,
                });
        }
        debug!(
            "Collusion scan: {} records, {} beneficiary groups",
            records.len(),
            groups.len()
        );

        let window = self.config.day_window_days;
        let mut graph = CollusionGraph::new();

        if self.config.parallel && groups.len() >= PARALLEL_GROUP_THRESHOLD {
            let groups: Vec<_> = groups.into_iter().collect();
            let scanned: Vec<(&str, Vec<ProviderPair>)> = groups
                .par_iter()
                .map(|(beneficiary, group)| (*beneficiary, scan_group(group, window)))
                .collect();
            for (beneficiary, pairs) in scanned {
                for pair in pairs {
                    graph.add_link(pair.first(), pair.second(), beneficiary);
                }
            }
        } else {
            for (beneficiary, group) in &groups {
                for pair in scan_group(group, window) {
                    graph.add_link(pair.first(), pair.second(), beneficiary);
                }
            }
        }

        info!(
            "Collusion graph built: {} providers, {} edges",
            graph.provider_count(),
            graph.edge_count()
        );
        graph
    }
}

/// Scan one beneficiary's claims for provider pairs within the day window
fn scan_group(group: &[EdgeCandidate<'_>], day_window: i64) -> Vec<ProviderPair> {
    let mut pairs = Vec::new();
    for (a, b) in group.iter().tuple_combinations() {
        if a.provider == b.provider {
            continue;
        }
        let gap = a.start.signed_duration_since(b.start).num_days().abs();
        if gap <= day_window {
            pairs.push(ProviderPair::new(a.provider, b.provider));
        }
    }
    pairs
}
