//! Inventory registry for warehouse items.
//!
//! [`Item`] is a validated record of one stocked item type; [`Registry`]
//! owns items keyed by item number and offers lookup, search, stock
//! adjustment and table rendering. Everything here is deterministic
//! in-memory logic (no IO). [`SharedRegistry`] wraps a registry for
//! multi-threaded hosts.

pub mod category;
pub mod config;
pub mod item;
pub mod registry;
pub mod sample;
pub mod shared;
pub mod table;

pub use category::ItemCategory;
pub use config::RegistryConfig;
pub use item::{Item, NewItem};
pub use registry::{EMPTY_TABLE, Registry};
pub use shared::SharedRegistry;
pub use stockroom_core::{DomainError, DomainResult, ItemNumber, ValidationReason};
pub use table::{
    COLUMN_COUNT, ColumnWidths, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES, create_table,
};
