// 🏭 Warehouse Manager - electronics and groceries in two keyed stores
//
// Each kind of stock lives in its own store, so the same id may appear once
// per kind. Operations return results; printing is left to the caller.

use chrono::{Days, NaiveDate};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::entities::{ElectronicItem, GroceryItem};
use crate::error::Result;
use crate::store::KeyedStore;

pub const ELECTRONICS_FILE: &str = "electronics.json";
pub const GROCERIES_FILE: &str = "groceries.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Electronic,
    Grocery,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Electronic => "electronic",
            ItemKind::Grocery => "grocery",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct WarehouseManager {
    electronics: KeyedStore<ElectronicItem>,
    groceries: KeyedStore<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        WarehouseManager {
            electronics: KeyedStore::new(),
            groceries: KeyedStore::new(),
        }
    }

    /// Manager stocked with the default catalogue.
    ///
    /// Grocery expiry dates are relative to `today`.
    pub fn seed(today: NaiveDate) -> Result<Self> {
        let mut manager = WarehouseManager::new();

        manager.electronics.add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24)?)?;
        manager.electronics.add(ElectronicItem::new(2, "Smartphone", 25, "Samsung", 12)?)?;
        manager.electronics.add(ElectronicItem::new(3, "Headphones", 40, "Sony", 6)?)?;

        manager.groceries.add(GroceryItem::new(1, "Milk", 50, today + Days::new(7))?)?;
        manager.groceries.add(GroceryItem::new(2, "Bread", 30, today + Days::new(3))?)?;
        manager.groceries.add(GroceryItem::new(3, "Rice", 100, today + Days::new(365))?)?;

        info!(
            electronics = manager.electronics.count(),
            groceries = manager.groceries.count(),
            "seeded warehouse"
        );
        Ok(manager)
    }

    pub fn electronics(&self) -> &KeyedStore<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &KeyedStore<GroceryItem> {
        &self.groceries
    }

    /// Add stock to an item, returning its new quantity
    pub fn increase_stock(&mut self, kind: ItemKind, id: u32, amount: u32) -> Result<u32> {
        match kind {
            ItemKind::Electronic => self.electronics.increase_quantity(id, amount),
            ItemKind::Grocery => self.groceries.increase_quantity(id, amount),
        }
    }

    /// Set the quantity of an item outright
    pub fn set_stock(&mut self, kind: ItemKind, id: u32, quantity: i64) -> Result<()> {
        match kind {
            ItemKind::Electronic => self.electronics.update_quantity(id, quantity),
            ItemKind::Grocery => self.groceries.update_quantity(id, quantity),
        }
    }

    pub fn remove_item(&mut self, kind: ItemKind, id: u32) -> Result<()> {
        match kind {
            ItemKind::Electronic => self.electronics.remove(id).map(|_| ()),
            ItemKind::Grocery => self.groceries.remove(id).map(|_| ()),
        }
    }

    pub fn expired_groceries(&self, on: NaiveDate) -> Vec<GroceryItem> {
        self.groceries.filter(|item| item.is_expired(on))
    }

    /// Total units across both stores
    pub fn total_units(&self) -> u64 {
        let electronics: u64 = self.electronics.iter().map(|i| u64::from(i.quantity)).sum();
        let groceries: u64 = self.groceries.iter().map(|i| u64::from(i.quantity)).sum();
        electronics + groceries
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Save both stores as snapshots inside `dir`
    pub fn save(&self, dir: &Path) -> Result<()> {
        self.electronics.save_snapshot(&dir.join(ELECTRONICS_FILE))?;
        self.groceries.save_snapshot(&dir.join(GROCERIES_FILE))?;
        Ok(())
    }

    /// Whether either store has ever been saved in `dir`
    pub fn has_snapshot(dir: &Path) -> bool {
        dir.join(ELECTRONICS_FILE).exists() || dir.join(GROCERIES_FILE).exists()
    }

    /// Restore both stores from `dir`, failing if either snapshot is unreadable
    pub fn try_load(dir: &Path) -> Result<Self> {
        Ok(WarehouseManager {
            electronics: KeyedStore::load_snapshot(&dir.join(ELECTRONICS_FILE))?,
            groceries: KeyedStore::load_snapshot(&dir.join(GROCERIES_FILE))?,
        })
    }

    /// Restore both stores from `dir`.
    ///
    /// A snapshot that cannot be loaded is logged and that store starts empty.
    pub fn load(dir: &Path) -> Self {
        WarehouseManager {
            electronics: load_store(&dir.join(ELECTRONICS_FILE)),
            groceries: load_store(&dir.join(GROCERIES_FILE)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.electronics.is_empty() && self.groceries.is_empty()
    }
}

fn load_store<T>(path: &Path) -> KeyedStore<T>
where
    T: crate::entities::Entity + Clone + serde::Serialize + serde::de::DeserializeOwned,
{
    KeyedStore::load_snapshot(path).unwrap_or_else(|e| {
        warn!(error = %e, "snapshot unreadable, starting empty");
        KeyedStore::new()
    })
}

impl Default for WarehouseManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
