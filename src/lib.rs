//! Multi-warehouse order allocation.
//!
//! Splits an order across a priority-ordered list of warehouses, producing a
//! per-warehouse shipment breakdown that covers the order exactly, or nothing at all.

pub mod allocator;
pub mod error;
pub mod fulfillment;
pub mod models;
pub mod reporting;
pub mod scenario;

pub use allocator::{allocate, InventoryAllocator};
pub use error::{Error, Result};
pub use models::{order_from, Allocation, Order, Scenario, Warehouse};
