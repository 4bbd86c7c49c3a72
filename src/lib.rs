// Record Vault - Core Library
// Validated keyed stores, line-record import, grade reports, JSON snapshots

pub mod codec;
pub mod config;
pub mod entities;
pub mod error;
pub mod snapshot;
pub mod store;
pub mod warehouse;

// Re-export commonly used types
pub use codec::{
    parse_records, parse_records_from_file, summarize, write_report, write_report_to_file,
    ReportSummary,
};
pub use config::Config;
pub use entities::{
    ElectronicItem, Entity, Grade, GroceryItem, InventoryItem, Patient, Prescription, Stocked,
    Student,
};
pub use error::{Error, ErrorKind, Result};
pub use store::KeyedStore;
pub use warehouse::{ItemKind, WarehouseManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
