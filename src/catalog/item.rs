//! Catalog entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::facets::{Color, Size};

/// An immutable garment record. Carries exactly one size and one color.
///
/// Items are created at catalog-load time and never mutated or copied
/// during a search; results reference them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub size: Size,
    pub color: Color,
}

impl Item {
    pub fn new(name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size,
            color,
        }
    }
}
