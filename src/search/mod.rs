//! Faceted search over a garment catalog.
//!
//! One logical operation, three interchangeable execution paths:
//!
//! ```text
//!                  Selection (sizes, colors)
//!                            │
//!            ┌───────────────┼────────────────┐
//!            ▼               ▼                ▼
//!      Sequential        Parallel       Accumulating
//!   (filter + group)  (rayon fold/reduce)  (single pass,
//!                                          running tallies)
//!            │               │                │
//!            └───────────────┼────────────────┘
//!                            ▼
//!        SearchResults: matched items + one count per
//!        domain facet value (zero-filled) per axis
//! ```
//!
//! All three paths return the same matched set and identical count
//! lists; only the parallel path gives up catalog order.

mod accumulate;
pub mod engine;

pub use engine::{FacetCount, SearchEngine, SearchResults, SearchStrategy, Selection};
