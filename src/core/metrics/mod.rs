//! Derived dashboard metrics
//!
//! Pure functions from snapshot data to the figures the dashboard shows.
//! Nothing here performs I/O or mutates shared state; given the same
//! snapshot, every function returns the same result.

pub mod alerts;
pub mod distribution;
pub mod donors;
pub mod ranking;
pub mod stock;

pub use alerts::{generate_alerts, AlertEntry, Severity};
pub use distribution::Distribution;
pub use donors::{average_age, donors_by_wilaya, DonorFilter, WilayaDonorStats};
pub use ranking::{region_ranking, RegionPerformance};
pub use stock::{CenterInventory, InventoryLevel, StockHealth, StockLevel};
