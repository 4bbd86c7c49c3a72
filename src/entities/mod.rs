// Entity Models
//
// Each entity has:
// - A positive integer id, unique within the store that owns it
// - A non-empty label
// - Variant-specific fields fixed at construction (quantity is the one
//   field stores may change afterwards)

pub mod inventory;
pub mod patient;
pub mod student;

pub use inventory::{ElectronicItem, GroceryItem, InventoryItem};
pub use patient::{Patient, Prescription};
pub use student::{Grade, Student};

use crate::error::{Error, Result};

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Anything a [`KeyedStore`](crate::KeyedStore) can hold
pub trait Entity {
    fn id(&self) -> u32;

    /// Human-readable name used in listings and validation
    fn label(&self) -> &str;

    /// Re-check the invariants a constructor enforces.
    ///
    /// Used on entities that bypassed the constructor (decoded snapshots).
    fn validate(&self) -> Result<()> {
        check_id(i64::from(self.id()))?;
        check_text("name", self.label())?;
        Ok(())
    }
}

/// Entities with a mutable, non-negative stock quantity
pub trait Stocked: Entity {
    fn quantity(&self) -> u32;

    fn set_quantity(&mut self, quantity: u32);
}

// ============================================================================
// FIELD VALIDATION
// ============================================================================

pub(crate) fn check_id(id: i64) -> Result<u32> {
    if id <= 0 {
        return Err(Error::invalid("id", format!("must be positive, got {}", id)));
    }
    u32::try_from(id).map_err(|_| Error::invalid("id", format!("{} is out of range", id)))
}

pub(crate) fn check_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn check_quantity(quantity: i64) -> Result<u32> {
    if quantity < 0 {
        return Err(Error::invalid(
            "quantity",
            format!("must not be negative, got {}", quantity),
        ));
    }
    u32::try_from(quantity)
        .map_err(|_| Error::invalid("quantity", format!("{} is out of range", quantity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_check_id() {
        assert_eq!(check_id(7).unwrap(), 7);
        assert_eq!(check_id(0).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(check_id(-3).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert!(check_id(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_check_quantity() {
        assert_eq!(check_quantity(0).unwrap(), 0);
        assert_eq!(check_quantity(25).unwrap(), 25);
        assert!(check_quantity(-1).is_err());
    }

    #[test]
    fn test_check_text_rejects_blank() {
        assert!(check_text("name", "Laptop").is_ok());
        assert!(check_text("name", "").is_err());
        assert!(check_text("name", "   ").is_err());
    }
}
