//! Call-scoped accumulation state.
//!
//! One `FacetAccumulator` lives for exactly one search call. It backs
//! the accumulating strategy directly and doubles as the per-worker
//! partial in the parallel strategy, where partials are merged pairwise
//! after the join.

use std::collections::HashMap;

use uuid::Uuid;

use crate::catalog::{Facet, FacetDomain, Item};

use super::engine::{SearchResults, zero_filled};

/// Running match list plus per-facet tallies for one in-flight search.
#[derive(Debug, Default)]
pub(super) struct FacetAccumulator<'a> {
    matched: Vec<&'a Item>,
    size_tallies: HashMap<Uuid, usize>,
    color_tallies: HashMap<Uuid, usize>,
}

impl<'a> FacetAccumulator<'a> {
    /// Accumulator with every domain value tallied at zero.
    pub(super) fn seeded(domain: &FacetDomain) -> Self {
        Self {
            matched: Vec::new(),
            size_tallies: domain.sizes().iter().map(|s| (s.id(), 0)).collect(),
            color_tallies: domain.colors().iter().map(|c| (c.id(), 0)).collect(),
        }
    }

    /// Append a matched item and bump both of its facet tallies.
    pub(super) fn record(&mut self, item: &'a Item) {
        *self.size_tallies.entry(item.size.id()).or_insert(0) += 1;
        *self.color_tallies.entry(item.color.id()).or_insert(0) += 1;
        self.matched.push(item);
    }

    /// Combine two partials: match lists concatenate, tallies sum.
    /// Commutative and associative, so rayon may reduce in any order.
    pub(super) fn merge(mut self, other: Self) -> Self {
        self.matched.extend(other.matched);
        for (id, n) in other.size_tallies {
            *self.size_tallies.entry(id).or_insert(0) += n;
        }
        for (id, n) in other.color_tallies {
            *self.color_tallies.entry(id).or_insert(0) += n;
        }
        self
    }

    pub(super) fn matched_len(&self) -> usize {
        self.matched.len()
    }

    /// Emit counts in domain order, zero-filling values this pass never
    /// saw.
    pub(super) fn into_results(self, domain: &FacetDomain) -> SearchResults<'a> {
        let size_counts = zero_filled(domain.sizes(), &self.size_tallies);
        let color_counts = zero_filled(domain.colors(), &self.color_tallies);
        SearchResults {
            items: self.matched,
            size_counts,
            color_counts,
        }
    }
}
