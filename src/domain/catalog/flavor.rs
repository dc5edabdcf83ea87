//! Flavor entity - one orderable cookie type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{FlavorId, Money, ValidationError};

/// Category tag used to group flavors in the storefront.
///
/// The set is open: catalog sources may introduce new categories, which
/// are carried through as [`FlavorCategory::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlavorCategory {
    Chocolate,
    Classic,
    Fruity,
    Seasonal,
    Other(String),
}

impl FlavorCategory {
    /// Returns the lowercase tag used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            FlavorCategory::Chocolate => "chocolate",
            FlavorCategory::Classic => "classic",
            FlavorCategory::Fruity => "fruity",
            FlavorCategory::Seasonal => "seasonal",
            FlavorCategory::Other(tag) => tag,
        }
    }
}

impl From<String> for FlavorCategory {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "chocolate" => FlavorCategory::Chocolate,
            "classic" => FlavorCategory::Classic,
            "fruity" => FlavorCategory::Fruity,
            "seasonal" => FlavorCategory::Seasonal,
            _ => FlavorCategory::Other(tag),
        }
    }
}

impl From<FlavorCategory> for String {
    fn from(category: FlavorCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for FlavorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One orderable cookie type.
///
/// # Invariants
///
/// - `id` is unique within the catalog (enforced by [`super::Catalog`])
/// - Immutable reference data once loaded; never mutated or deleted
///   during a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    /// Stable identifier assigned by the catalog source.
    pub id: FlavorId,

    /// Display name.
    pub name: String,

    /// Descriptive text shown on flavor cards.
    pub description: String,

    /// Category tag for grouping and filtering.
    pub category: FlavorCategory,

    /// Per-cookie surcharge for premium flavors, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surcharge: Option<Money>,

    /// Calorie label for display (e.g. "650 cal"). Not used in computation.
    pub calories: String,
}

impl Flavor {
    /// Creates a new flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the display name is empty.
    pub fn new(
        id: FlavorId,
        name: impl Into<String>,
        category: FlavorCategory,
        description: impl Into<String>,
        calories: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            category,
            surcharge: None,
            calories: calories.into(),
        })
    }

    /// Attaches a per-cookie surcharge.
    pub fn with_surcharge(mut self, surcharge: Money) -> Self {
        self.surcharge = Some(surcharge);
        self
    }
}
