//! Catalog aggregate - lookup over immutable flavors and pack options.

use crate::domain::foundation::{FlavorId, PackOptionId, ValidationError};

use super::defaults::{default_flavors, default_pack_options};
use super::{Flavor, PackOption};

/// Immutable catalog of flavors and pack options for one session.
///
/// # Invariants
///
/// - Flavor ids are unique
/// - Pack option ids are unique
/// - Contents never change after construction
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    flavors: Vec<Flavor>,
    pack_options: Vec<PackOption>,
}

impl Catalog {
    /// Creates a catalog from externally sourced data.
    ///
    /// # Errors
    ///
    /// Returns an error if any flavor or pack option id appears twice.
    pub fn new(
        flavors: Vec<Flavor>,
        pack_options: Vec<PackOption>,
    ) -> Result<Self, ValidationError> {
        for (i, flavor) in flavors.iter().enumerate() {
            if flavors[i + 1..].iter().any(|other| other.id == flavor.id) {
                return Err(ValidationError::duplicate_id("flavors", flavor.id.to_string()));
            }
        }
        for (i, pack) in pack_options.iter().enumerate() {
            if pack_options[i + 1..].iter().any(|other| other.id == pack.id) {
                return Err(ValidationError::duplicate_id(
                    "pack_options",
                    pack.id.to_string(),
                ));
            }
        }
        Ok(Self {
            flavors,
            pack_options,
        })
    }

    /// Creates the catalog from the built-in dataset.
    pub fn built_in() -> Self {
        Self {
            flavors: default_flavors(),
            pack_options: default_pack_options(),
        }
    }

    /// All flavors, in catalog order.
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    /// All pack options, in catalog order.
    pub fn pack_options(&self) -> &[PackOption] {
        &self.pack_options
    }

    /// Looks up a flavor by id.
    pub fn flavor(&self, id: FlavorId) -> Option<&Flavor> {
        self.flavors.iter().find(|f| f.id == id)
    }

    /// Looks up a pack option by id.
    pub fn pack_option(&self, id: &PackOptionId) -> Option<&PackOption> {
        self.pack_options.iter().find(|p| &p.id == id)
    }

    /// Checks whether a flavor id exists in the catalog.
    pub fn contains_flavor(&self, id: FlavorId) -> bool {
        self.flavor(id).is_some()
    }
}
