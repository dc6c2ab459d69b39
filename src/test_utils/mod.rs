//! Shared helpers for tests and benches: a canonical facet domain,
//! fixture catalogs, and a random catalog generator.

pub mod fixtures;
pub mod generator;
