// 📦 Inventory Entities - stocked goods
//
// Three stocked variants share the id/name/quantity core:
// - InventoryItem: a plain logged item with the date it entered stock
// - ElectronicItem: brand + warranty
// - GroceryItem: expiry date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_id, check_quantity, check_text, Entity, Stocked};
use crate::error::Result;

// ============================================================================
// INVENTORY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(alias = "Id")]
    pub id: u32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Quantity")]
    pub quantity: u32,

    /// Day the item was logged into stock
    #[serde(alias = "DateAdded")]
    pub date_added: NaiveDate,
}

impl InventoryItem {
    pub fn new(id: i64, name: &str, quantity: i64, date_added: NaiveDate) -> Result<Self> {
        let id = check_id(id)?;
        check_text("name", name)?;
        let quantity = check_quantity(quantity)?;

        Ok(InventoryItem {
            id,
            name: name.trim().to_string(),
            quantity,
            date_added,
        })
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

// ============================================================================
// ELECTRONIC ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    #[serde(alias = "Id")]
    pub id: u32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Quantity")]
    pub quantity: u32,

    #[serde(alias = "Brand")]
    pub brand: String,

    #[serde(alias = "WarrantyMonths")]
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: i64,
        name: &str,
        quantity: i64,
        brand: &str,
        warranty_months: u32,
    ) -> Result<Self> {
        let id = check_id(id)?;
        check_text("name", name)?;
        let quantity = check_quantity(quantity)?;
        check_text("brand", brand)?;

        Ok(ElectronicItem {
            id,
            name: name.trim().to_string(),
            quantity,
            brand: brand.trim().to_string(),
            warranty_months,
        })
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        check_id(i64::from(self.id))?;
        check_text("name", &self.name)?;
        check_text("brand", &self.brand)
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

// ============================================================================
// GROCERY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(alias = "Id")]
    pub id: u32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Quantity")]
    pub quantity: u32,

    #[serde(alias = "ExpiryDate")]
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: i64, name: &str, quantity: i64, expiry_date: NaiveDate) -> Result<Self> {
        let id = check_id(id)?;
        check_text("name", name)?;
        let quantity = check_quantity(quantity)?;

        Ok(GroceryItem {
            id,
            name: name.trim().to_string(),
            quantity,
            expiry_date,
        })
    }

    /// Expired once the given day is past the expiry date
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        on > self.expiry_date
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

// ============================================================================
// TESTS
// ============================================================================
