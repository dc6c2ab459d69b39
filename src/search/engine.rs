//! The search engine: matching predicate, facet-count aggregation, and
//! the three execution strategies.
//!
//! ## Matching
//!
//! An item matches when each restricted axis contains its value:
//!
//! ```text
//! (sizes empty OR item.size ∈ sizes) AND (colors empty OR item.color ∈ colors)
//! ```
//!
//! An empty set on an axis means "unrestricted", not "match nothing".
//! Axes combine with AND; values within one axis with OR.
//!
//! ## Counts
//!
//! Both count lists are computed over the matched set and carry exactly
//! one entry per domain facet value, in domain order, zero-filled. The
//! sum of each list therefore equals the number of matched items.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{Color, Facet, FacetDomain, Item, Size};
use crate::config::SearchConfig;
use crate::error::{GarbError, Result};

use super::accumulate::FacetAccumulator;

/// The facet values to filter by, per axis. Unordered; duplicates
/// collapse; an empty set leaves that axis unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub sizes: HashSet<Size>,
    pub colors: HashSet<Color>,
}

impl Selection {
    /// Empty selection: unrestricted on both axes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    /// True when neither axis restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty()
    }

    /// The matching predicate, evaluated independently per item.
    pub fn matches(&self, item: &Item) -> bool {
        (self.sizes.is_empty() || self.sizes.contains(&item.size))
            && (self.colors.is_empty() || self.colors.contains(&item.color))
    }
}

/// Match count for one facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount<F> {
    pub value: F,
    pub count: usize,
}

/// Outcome of one search: matched items plus the two complete
/// facet-count lists.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// Items satisfying the predicate. Catalog order, except under the
    /// parallel strategy.
    pub items: Vec<&'a Item>,
    /// One entry per domain size, in domain order, zeroes included.
    pub size_counts: Vec<FacetCount<Size>>,
    /// One entry per domain color, in domain order, zeroes included.
    pub color_counts: Vec<FacetCount<Color>>,
}

/// How a search executes. All strategies produce the same matched set
/// and identical count lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Sequential,
    Parallel,
    Accumulating,
}

/// Read-only faceted search over an immutable catalog.
///
/// Holds the catalog and the domain facet lists; all search methods
/// take `&self` and are safe to call concurrently.
pub struct SearchEngine {
    catalog: Vec<Item>,
    domain: FacetDomain,
    pool: Option<rayon::ThreadPool>,
}

impl SearchEngine {
    /// Engine over `catalog`, using rayon's global pool for the
    /// parallel strategy. An empty catalog is valid and yields all-zero
    /// counts.
    pub fn new(catalog: Vec<Item>, domain: FacetDomain) -> Self {
        Self {
            catalog,
            domain,
            pool: None,
        }
    }

    /// Engine with a dedicated worker pool for the parallel strategy
    /// when `config.parallel_workers` is nonzero.
    pub fn with_config(
        catalog: Vec<Item>,
        domain: FacetDomain,
        config: &SearchConfig,
    ) -> Result<Self> {
        let pool = match config.parallel_workers {
            0 => None,
            workers => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()?,
            ),
        };
        Ok(Self {
            catalog,
            domain,
            pool,
        })
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn domain(&self) -> &FacetDomain {
        &self.domain
    }

    /// Dispatch to the named strategy.
    pub fn search_with(
        &self,
        selection: &Selection,
        strategy: SearchStrategy,
    ) -> Result<SearchResults<'_>> {
        match strategy {
            SearchStrategy::Sequential => self.search(selection),
            SearchStrategy::Parallel => self.search_parallel(selection),
            SearchStrategy::Accumulating => self.search_accumulating(selection),
        }
    }

    /// Sequential strategy: one filter pass, then a group-by tally.
    /// Matched items keep catalog order.
    pub fn search(&self, selection: &Selection) -> Result<SearchResults<'_>> {
        self.validate(selection)?;

        let items: Vec<&Item> = self
            .catalog
            .iter()
            .filter(|item| selection.matches(item))
            .collect();

        debug!(strategy = "sequential", matched = items.len(), "search complete");

        let size_counts = count_facets(&items, self.domain.sizes(), |item| &item.size);
        let color_counts = count_facets(&items, self.domain.colors(), |item| &item.color);

        Ok(SearchResults {
            items,
            size_counts,
            color_counts,
        })
    }

    /// Parallel strategy: the predicate fans out across workers, each
    /// building a partial match list and partial tallies; partials are
    /// merged by concatenation and summation after the join. Item order
    /// is not guaranteed to follow the catalog. Synchronous end to end.
    pub fn search_parallel(&self, selection: &Selection) -> Result<SearchResults<'_>> {
        self.validate(selection)?;

        let run = || {
            self.catalog
                .par_iter()
                .fold(FacetAccumulator::default, |mut acc, item| {
                    if selection.matches(item) {
                        acc.record(item);
                    }
                    acc
                })
                .reduce(FacetAccumulator::default, FacetAccumulator::merge)
        };

        let acc = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        debug!(strategy = "parallel", matched = acc.matched_len(), "search complete");

        Ok(acc.into_results(&self.domain))
    }

    /// Accumulating strategy: a single pass that appends matches and
    /// bumps per-facet counters as it goes, skipping the post-hoc
    /// group-by. Accumulator state is created fresh inside every call,
    /// so repeated and concurrent calls on one engine stay independent.
    pub fn search_accumulating(&self, selection: &Selection) -> Result<SearchResults<'_>> {
        self.validate(selection)?;

        let mut acc = FacetAccumulator::seeded(&self.domain);
        for item in &self.catalog {
            if selection.matches(item) {
                acc.record(item);
            }
        }

        debug!(
            strategy = "accumulating",
            matched = acc.matched_len(),
            "search complete"
        );

        Ok(acc.into_results(&self.domain))
    }

    /// Every selected value must belong to its domain list. Runs before
    /// any filtering; on failure no partial results exist. Selecting a
    /// domain value absent from the catalog is valid and simply counts
    /// zero.
    fn validate(&self, selection: &Selection) -> Result<()> {
        if let Some(size) = selection
            .sizes
            .iter()
            .find(|size| !self.domain.contains_size(size))
        {
            return Err(GarbError::InvalidArgument(format!(
                "size facet '{}' is not in the domain",
                size.name()
            )));
        }
        if let Some(color) = selection
            .colors
            .iter()
            .find(|color| !self.domain.contains_color(color))
        {
            return Err(GarbError::InvalidArgument(format!(
                "color facet '{}' is not in the domain",
                color.name()
            )));
        }
        Ok(())
    }
}

/// Tally one axis over the matched items, then emit one count per
/// domain value in domain order, zero-filling values never seen.
fn count_facets<'a, F, G>(items: &[&'a Item], domain: &[F], facet_of: G) -> Vec<FacetCount<F>>
where
    F: Facet,
    G: Fn(&Item) -> &F,
{
    let tallies: HashMap<Uuid, usize> = items.iter().map(|item| facet_of(item).id()).counts();
    zero_filled(domain, &tallies)
}

/// Domain-order count list from raw tallies keyed by facet id.
pub(super) fn zero_filled<F: Facet>(
    domain: &[F],
    tallies: &HashMap<Uuid, usize>,
) -> Vec<FacetCount<F>> {
    domain
        .iter()
        .map(|value| FacetCount {
            value: value.clone(),
            count: tallies.get(&value.id()).copied().unwrap_or(0),
        })
        .collect()
}
