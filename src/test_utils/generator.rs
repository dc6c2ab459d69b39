//! Random catalog generation for benches and property tests.

use rand::prelude::*;

use crate::catalog::{FacetDomain, Item};

/// `len` items with sizes and colors drawn uniformly from the domain.
///
/// # Panics
///
/// Panics if either domain list is empty.
pub fn random_catalog(domain: &FacetDomain, len: usize, rng: &mut impl Rng) -> Vec<Item> {
    (0..len)
        .map(|n| {
            let size = domain
                .sizes()
                .choose(rng)
                .expect("domain has no sizes")
                .clone();
            let color = domain
                .colors()
                .choose(rng)
                .expect("domain has no colors")
                .clone();
            Item::new(format!("garment-{n}"), size, color)
        })
        .collect()
}
