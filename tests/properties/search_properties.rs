//! Property tests pinning the matching predicate, the facet-count
//! semantics, and cross-strategy equivalence.

use std::collections::HashSet;

use proptest::prelude::*;
use uuid::Uuid;

use garb::catalog::{Facet, FacetDomain, Item};
use garb::search::{SearchEngine, SearchResults, SearchStrategy, Selection};
use garb::test_utils::fixtures;

/// Catalog described as (size index, color index) pairs into the
/// canonical domain (3 sizes, 5 colors).
fn arb_catalog_spec() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..3, 0usize..5), 0..80)
}

/// Selection described as index sets; may be empty on either axis and
/// may contain duplicates (which must collapse).
fn arb_selection_spec() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (
        prop::collection::vec(0usize..3, 0..5),
        prop::collection::vec(0usize..5, 0..7),
    )
}

fn build_catalog(domain: &FacetDomain, spec: &[(usize, usize)]) -> Vec<Item> {
    spec.iter()
        .enumerate()
        .map(|(n, (s, c))| {
            Item::new(
                format!("item-{n}"),
                domain.sizes()[*s].clone(),
                domain.colors()[*c].clone(),
            )
        })
        .collect()
}

fn build_selection(domain: &FacetDomain, spec: &(Vec<usize>, Vec<usize>)) -> Selection {
    Selection::new()
        .with_sizes(spec.0.iter().map(|i| domain.sizes()[*i].clone()))
        .with_colors(spec.1.iter().map(|i| domain.colors()[*i].clone()))
}

/// Reference predicate, written out independently of the library's.
fn reference_matches(selection: &Selection, item: &Item) -> bool {
    let size_ok = selection.sizes.is_empty() || selection.sizes.contains(&item.size);
    let color_ok = selection.colors.is_empty() || selection.colors.contains(&item.color);
    size_ok && color_ok
}

fn sorted_ids(results: &SearchResults<'_>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = results.items.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}

proptest! {
    /// No false positives, no false negatives, no duplicates, and the
    /// sequential strategy keeps catalog order.
    #[test]
    fn test_matched_set_is_exact(
        catalog_spec in arb_catalog_spec(),
        selection_spec in arb_selection_spec(),
    ) {
        let domain = fixtures::canonical_domain();
        let catalog = build_catalog(&domain, &catalog_spec);
        let selection = build_selection(&domain, &selection_spec);

        let expected: Vec<Uuid> = catalog
            .iter()
            .filter(|item| reference_matches(&selection, item))
            .map(|item| item.id)
            .collect();

        let engine = SearchEngine::new(catalog, domain);
        let results = engine.search(&selection).unwrap();
        let got: Vec<Uuid> = results.items.iter().map(|item| item.id).collect();

        prop_assert_eq!(got, expected);
    }

    /// Both count lists enumerate the whole domain, in domain order,
    /// and each entry equals that value's frequency in the matched set.
    #[test]
    fn test_counts_cover_domain_and_match_frequencies(
        catalog_spec in arb_catalog_spec(),
        selection_spec in arb_selection_spec(),
    ) {
        let domain = fixtures::canonical_domain();
        let catalog = build_catalog(&domain, &catalog_spec);
        let selection = build_selection(&domain, &selection_spec);

        let matched: Vec<&Item> = catalog
            .iter()
            .filter(|item| reference_matches(&selection, item))
            .collect();
        let expected_size_counts: Vec<usize> = domain
            .sizes()
            .iter()
            .map(|size| matched.iter().filter(|item| item.size == *size).count())
            .collect();
        let expected_color_counts: Vec<usize> = domain
            .colors()
            .iter()
            .map(|color| matched.iter().filter(|item| item.color == *color).count())
            .collect();

        let engine = SearchEngine::new(catalog, domain);
        let results = engine.search(&selection).unwrap();

        let size_ids: Vec<Uuid> = results.size_counts.iter().map(|c| c.value.id()).collect();
        let domain_size_ids: Vec<Uuid> =
            engine.domain().sizes().iter().map(Facet::id).collect();
        prop_assert_eq!(size_ids, domain_size_ids);

        let color_ids: Vec<Uuid> = results.color_counts.iter().map(|c| c.value.id()).collect();
        let domain_color_ids: Vec<Uuid> =
            engine.domain().colors().iter().map(Facet::id).collect();
        prop_assert_eq!(color_ids, domain_color_ids);

        let size_counts: Vec<usize> = results.size_counts.iter().map(|c| c.count).collect();
        prop_assert_eq!(size_counts, expected_size_counts);
        let color_counts: Vec<usize> = results.color_counts.iter().map(|c| c.count).collect();
        prop_assert_eq!(color_counts, expected_color_counts);
    }

    /// Each count list sums to the matched-item total: every item
    /// carries exactly one value per axis.
    #[test]
    fn test_count_sums_equal_matched_total(
        catalog_spec in arb_catalog_spec(),
        selection_spec in arb_selection_spec(),
    ) {
        let domain = fixtures::canonical_domain();
        let catalog = build_catalog(&domain, &catalog_spec);
        let selection = build_selection(&domain, &selection_spec);

        let engine = SearchEngine::new(catalog, domain);
        let results = engine.search(&selection).unwrap();

        let size_sum: usize = results.size_counts.iter().map(|c| c.count).sum();
        let color_sum: usize = results.color_counts.iter().map(|c| c.count).sum();
        prop_assert_eq!(size_sum, results.items.len());
        prop_assert_eq!(color_sum, results.items.len());
    }

    /// The three strategies return set-equal items and identical count
    /// lists.
    #[test]
    fn test_strategies_are_observably_equivalent(
        catalog_spec in arb_catalog_spec(),
        selection_spec in arb_selection_spec(),
    ) {
        let domain = fixtures::canonical_domain();
        let catalog = build_catalog(&domain, &catalog_spec);
        let selection = build_selection(&domain, &selection_spec);

        let engine = SearchEngine::new(catalog, domain);
        let baseline = engine.search(&selection).unwrap();

        for strategy in [SearchStrategy::Parallel, SearchStrategy::Accumulating] {
            let results = engine.search_with(&selection, strategy).unwrap();
            prop_assert_eq!(sorted_ids(&results), sorted_ids(&baseline));
            prop_assert_eq!(&results.size_counts, &baseline.size_counts);
            prop_assert_eq!(&results.color_counts, &baseline.color_counts);
        }
    }

    /// Result items are unique even when the selection carried
    /// duplicate facet values.
    #[test]
    fn test_no_duplicate_items(
        catalog_spec in arb_catalog_spec(),
        selection_spec in arb_selection_spec(),
    ) {
        let domain = fixtures::canonical_domain();
        let catalog = build_catalog(&domain, &catalog_spec);
        let selection = build_selection(&domain, &selection_spec);

        let engine = SearchEngine::new(catalog, domain);
        let results = engine.search(&selection).unwrap();

        let unique: HashSet<Uuid> = results.items.iter().map(|item| item.id).collect();
        prop_assert_eq!(unique.len(), results.items.len());
    }
}
