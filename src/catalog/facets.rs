//! Facet value types and the domain facet lists.
//!
//! A facet is a filterable attribute axis (size, color). Facet values
//! are immutable and compared by stable identifier only, never by name
//! or by pointer, so two values loaded from different sources still
//! compare equal when they denote the same facet.
//!
//! The [`FacetDomain`] holds the complete enumeration of valid values
//! per axis. It exists independently of any catalog: aggregation walks
//! it so that every known value appears in the output counts, at zero
//! when nothing matched.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common surface of facet value types, letting aggregation be written
/// once for both axes.
pub trait Facet: Clone + Eq + Hash {
    /// Stable identifier. Sole input to equality and hashing.
    fn id(&self) -> Uuid;
    /// Human-readable label.
    fn name(&self) -> &str;
}

macro_rules! facet_value {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $ty {
            id: Uuid,
            name: String,
        }

        impl $ty {
            /// New facet value with a fresh identifier.
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    id: Uuid::new_v4(),
                    name: name.into(),
                }
            }

            /// Facet value with a caller-supplied identifier, for data
            /// loaded from an external source.
            pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
                Self {
                    id,
                    name: name.into(),
                }
            }
        }

        impl Facet for $ty {
            fn id(&self) -> Uuid {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        // Identity is the id alone; the name is display metadata.
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    };
}

facet_value! {
    /// A garment size (e.g. Small).
    Size
}

facet_value! {
    /// A garment color (e.g. Red).
    Color
}

/// The complete enumerations of valid sizes and colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetDomain {
    sizes: Vec<Size>,
    colors: Vec<Color>,
}

impl FacetDomain {
    pub fn new(sizes: Vec<Size>, colors: Vec<Color>) -> Self {
        Self { sizes, colors }
    }

    /// All valid sizes, in canonical order.
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// All valid colors, in canonical order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn contains_size(&self, size: &Size) -> bool {
        self.sizes.contains(size)
    }

    pub fn contains_color(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Look up a size by its label.
    pub fn size_named(&self, name: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.name() == name)
    }

    /// Look up a color by its label.
    pub fn color_named(&self, name: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.name() == name)
    }
}
