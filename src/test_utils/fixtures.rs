//! Hand-written fixture data.

use crate::catalog::{Color, Facet, FacetDomain, Item, Size};

/// The canonical garment domain: three sizes, five colors.
pub fn canonical_domain() -> FacetDomain {
    FacetDomain::new(
        vec![Size::new("Small"), Size::new("Medium"), Size::new("Large")],
        vec![
            Color::new("Red"),
            Color::new("Blue"),
            Color::new("Yellow"),
            Color::new("Black"),
            Color::new("White"),
        ],
    )
}

/// Deterministic small catalog: every other size/color pairing, so
/// each domain value occurs but no pairing dominates.
pub fn sample_catalog(domain: &FacetDomain) -> Vec<Item> {
    let mut items = Vec::new();
    for (i, size) in domain.sizes().iter().enumerate() {
        for (j, color) in domain.colors().iter().enumerate() {
            if (i + j) % 2 == 0 {
                items.push(Item::new(
                    format!("{} {} tee", color.name(), size.name()),
                    size.clone(),
                    color.clone(),
                ));
            }
        }
    }
    items
}
