//! PackBuilder - state machine for composing one pack at a time.
//!
//! # Design Decisions
//!
//! - **Single active selection**: The builder is Idle or Building; a
//!   `start_pack` while Building abandons the prior selection, matching
//!   the storefront flow where returning to pack selection discards
//!   progress.
//! - **Unit deltas only**: Quantities move by +1/-1 (the storefront's
//!   +/- controls); out-of-range deltas are accepted no-ops, not errors.
//! - **Capacity is a hard invariant**: the selected total can never
//!   exceed the pack's capacity, at every intermediate state.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::cart::{CookieSelection, PackLineItem};
use crate::domain::catalog::{Catalog, PackOption};
use crate::domain::foundation::{FlavorId, PackOptionId};

use super::PackError;

/// Single-unit quantity adjustment for one flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorDelta {
    Increment,
    Decrement,
}

/// An in-progress pack: the chosen pack option plus per-flavor counts.
///
/// # Invariants
///
/// - Sum of quantities never exceeds `pack.capacity`
/// - Every present quantity is >= 1 (entries that reach zero are removed)
/// - Every flavor id was validated against the catalog on entry
#[derive(Debug, Clone, PartialEq)]
pub struct PackSelection {
    pack: PackOption,
    quantities: BTreeMap<FlavorId, u32>,
}

impl PackSelection {
    fn new(pack: PackOption) -> Self {
        Self {
            pack,
            quantities: BTreeMap::new(),
        }
    }

    /// The pack option being filled.
    pub fn pack(&self) -> &PackOption {
        &self.pack
    }

    /// Current quantity for a flavor (0 when absent).
    pub fn quantity_of(&self, flavor_id: FlavorId) -> u32 {
        self.quantities.get(&flavor_id).copied().unwrap_or(0)
    }

    /// Total cookies selected so far.
    pub fn total_selected(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Unfilled slots remaining; never negative by invariant.
    pub fn remaining_slots(&self) -> u32 {
        self.pack.capacity - self.total_selected()
    }

    /// True exactly when every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.remaining_slots() == 0
    }

    /// The selected (flavor id, quantity) entries, ordered by flavor id.
    pub fn entries(&self) -> impl Iterator<Item = (FlavorId, u32)> + '_ {
        self.quantities.iter().map(|(&id, &qty)| (id, qty))
    }
}

/// Builds one pack at a time against a session's catalog.
///
/// State machine: Idle -> Building (`start_pack`) -> Building
/// (`set_flavor_delta`) -> Idle (`cancel` or `commit`, the latter
/// emitting a [`PackLineItem`]).
#[derive(Debug, Clone)]
pub struct PackBuilder {
    catalog: Arc<Catalog>,
    active: Option<PackSelection>,
}

impl PackBuilder {
    /// Creates an idle builder for the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            active: None,
        }
    }

    /// Begins a new selection for the given pack option.
    ///
    /// Any prior in-progress selection is discarded.
    ///
    /// # Errors
    ///
    /// Returns `PackError::InvalidPack` if the id is not a cataloged
    /// pack option; the prior selection (if any) is kept in that case.
    pub fn start_pack(&mut self, pack_id: &PackOptionId) -> Result<(), PackError> {
        let pack = self
            .catalog
            .pack_option(pack_id)
            .ok_or_else(|| PackError::InvalidPack(pack_id.clone()))?
            .clone();
        self.active = Some(PackSelection::new(pack));
        Ok(())
    }

    /// The in-progress selection, if any.
    pub fn selection(&self) -> Option<&PackSelection> {
        self.active.as_ref()
    }

    /// Applies a +1/-1 adjustment to one flavor's quantity.
    ///
    /// A +1 on a full pack and a -1 on an absent flavor are accepted
    /// no-ops. A quantity that reaches zero removes the entry.
    ///
    /// # Errors
    ///
    /// - `PackError::NoActivePack` if the builder is idle
    /// - `PackError::UnknownFlavor` if the id is not in the catalog
    pub fn set_flavor_delta(
        &mut self,
        flavor_id: FlavorId,
        delta: FlavorDelta,
    ) -> Result<(), PackError> {
        let selection = self.active.as_mut().ok_or(PackError::NoActivePack)?;
        if !self.catalog.contains_flavor(flavor_id) {
            return Err(PackError::UnknownFlavor(flavor_id));
        }

        match delta {
            FlavorDelta::Increment => {
                if selection.is_complete() {
                    return Ok(());
                }
                *selection.quantities.entry(flavor_id).or_insert(0) += 1;
            }
            FlavorDelta::Decrement => match selection.quantities.get_mut(&flavor_id) {
                Some(qty) if *qty > 1 => *qty -= 1,
                Some(_) => {
                    selection.quantities.remove(&flavor_id);
                }
                None => {}
            },
        }
        Ok(())
    }

    /// Unfilled slots in the active selection.
    ///
    /// # Errors
    ///
    /// Returns `PackError::NoActivePack` if the builder is idle.
    pub fn remaining_slots(&self) -> Result<u32, PackError> {
        self.active
            .as_ref()
            .map(PackSelection::remaining_slots)
            .ok_or(PackError::NoActivePack)
    }

    /// True when an active selection has every slot filled.
    pub fn is_complete(&self) -> bool {
        self.active
            .as_ref()
            .map(PackSelection::is_complete)
            .unwrap_or(false)
    }

    /// Converts the complete selection into a cart line item.
    ///
    /// On success the builder returns to idle. The emitted line item
    /// carries a fresh id and denormalized pack/flavor snapshots so the
    /// cart stays valid if the catalog changes later.
    ///
    /// # Errors
    ///
    /// - `PackError::NoActivePack` if the builder is idle
    /// - `PackError::IncompletePack` while slots remain unfilled; the
    ///   selection is left unchanged and still buildable
    pub fn commit(&mut self) -> Result<PackLineItem, PackError> {
        let selection = self.active.as_ref().ok_or(PackError::NoActivePack)?;
        let remaining = selection.remaining_slots();
        if remaining > 0 {
            return Err(PackError::IncompletePack { remaining });
        }

        let mut cookies = Vec::with_capacity(selection.quantities.len());
        for (&flavor_id, &quantity) in &selection.quantities {
            let flavor = self
                .catalog
                .flavor(flavor_id)
                .ok_or(PackError::UnknownFlavor(flavor_id))?;
            cookies.push(CookieSelection {
                id: flavor_id,
                name: flavor.name.clone(),
                quantity,
            });
        }

        let pack = selection.pack.clone();
        self.active = None;
        Ok(PackLineItem::from_pack(&pack, cookies))
    }

    /// Discards any in-progress selection. No effect on the cart.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
