//! Pack builder error types.
//!
//! All of these indicate a broken caller contract (the UI allowed an
//! operation the builder forbids), so they are raised loudly and leave
//! builder state unchanged.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FlavorId, PackOptionId};

/// Errors raised by the pack builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The requested pack option is not in the catalog.
    #[error("Pack option '{0}' is not in the catalog")]
    InvalidPack(PackOptionId),

    /// The requested flavor is not in the catalog.
    #[error("Flavor {0} is not in the catalog")]
    UnknownFlavor(FlavorId),

    /// No pack selection is in progress.
    #[error("No pack selection is in progress")]
    NoActivePack,

    /// The selection still has unfilled slots.
    #[error("Pack selection is incomplete: {remaining} slot(s) unfilled")]
    IncompletePack { remaining: u32 },
}

impl PackError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackError::InvalidPack(_) => ErrorCode::InvalidPackOption,
            PackError::UnknownFlavor(_) => ErrorCode::UnknownFlavor,
            PackError::NoActivePack => ErrorCode::NoActivePack,
            PackError::IncompletePack { .. } => ErrorCode::IncompletePack,
        }
    }
}

impl From<PackError> for DomainError {
    fn from(err: PackError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
