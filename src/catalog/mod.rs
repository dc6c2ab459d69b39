//! Catalog data model: garment items and the facet values they carry.

pub mod facets;
pub mod item;

pub use facets::{Color, Facet, FacetDomain, Size};
pub use item::Item;
