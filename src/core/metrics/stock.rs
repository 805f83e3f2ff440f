//! Blood stock level classification
//!
//! Classifies per-group stock against its minimum threshold and derives the
//! per-group level rows shown on the stock panel. Thresholds are integer
//! comparisons so classification is exact at the boundaries.

use crate::domain::records::{Center, DashboardStats, StockSummary};
use crate::domain::BloodGroup;
use serde::Serialize;

/// Health of one blood group's stock against its minimum threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockHealth {
    /// At or below half the minimum
    Critical,
    /// At or below the minimum
    Low,
    /// Above the minimum
    Healthy,
    /// No usable minimum threshold
    Normal,
    /// No availability figure at all
    Unknown,
}

impl StockHealth {
    /// Classify availability against a minimum threshold
    ///
    /// `2 * available <= min` is the integer-exact form of the half-minimum
    /// boundary, so 50 of 100 is critical and 51 of 100 is low.
    pub fn classify(available: Option<i64>, min_stock: Option<i64>) -> Self {
        let Some(available) = available else {
            return StockHealth::Unknown;
        };
        let min = match min_stock {
            Some(m) if m > 0 => m,
            _ => return StockHealth::Normal,
        };
        if 2 * available <= min {
            StockHealth::Critical
        } else if available <= min {
            StockHealth::Low
        } else {
            StockHealth::Healthy
        }
    }
}

/// Aggregate inventory position of one center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryLevel {
    /// More than double the minimum
    High,
    /// Above the minimum
    Medium,
    /// At or below the minimum
    Low,
    /// No usable minimum threshold
    Normal,
    /// No stock on hand
    Unknown,
}

impl InventoryLevel {
    /// Classify a center's total units against its combined minimum
    pub fn classify(total: Option<i64>, min: Option<i64>) -> Self {
        let total = match total {
            Some(t) if t > 0 => t,
            _ => return InventoryLevel::Unknown,
        };
        let min = match min {
            Some(m) if m > 0 => m,
            _ => return InventoryLevel::Normal,
        };
        if total > min * 2 {
            InventoryLevel::High
        } else if total > min {
            InventoryLevel::Medium
        } else {
            InventoryLevel::Low
        }
    }
}

/// One row of the centers listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterInventory {
    pub center: String,
    pub wilaya: Option<String>,
    pub total_units: i64,
    pub level: InventoryLevel,
}

/// Aggregate inventory position of one center
///
/// Sums the available and minimum quantities across every inventory line;
/// a center with no lines at all classifies as unknown.
pub fn center_inventory_level(center: &Center) -> InventoryLevel {
    let lines = center.inventories();
    if lines.is_empty() {
        return InventoryLevel::Unknown;
    }
    let total: i64 = lines.iter().filter_map(|l| l.total_qty).sum();
    let min: i64 = lines.iter().filter_map(|l| l.min_qty).sum();
    InventoryLevel::classify(Some(total), Some(min))
}

/// Build the centers listing, keeping the order the server returned
pub fn center_inventories(centers: &[Center]) -> Vec<CenterInventory> {
    centers
        .iter()
        .map(|center| CenterInventory {
            center: center
                .name
                .clone()
                .unwrap_or_else(|| "Unknown Center".to_string()),
            wilaya: center.wilaya.as_ref().map(|w| w.display_name()),
            total_units: center.inventories().iter().filter_map(|l| l.total_qty).sum(),
            level: center_inventory_level(center),
        })
        .collect()
}

/// One row of the stock panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub blood_group: String,
    pub units: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub health: StockHealth,
}

/// Build stock rows from the global stock table, preserving its order
///
/// Map keys are blood group codes or labels; either form resolves to the
/// canonical label for display.
pub fn stock_levels(stats: &DashboardStats) -> Vec<StockLevel> {
    stats
        .global_blood_stock
        .iter()
        .map(|(key, summary)| stock_level_row(key, summary))
        .collect()
}

fn stock_level_row(key: &str, summary: &StockSummary) -> StockLevel {
    let group = BloodGroup::from_key(key);
    let blood_group = match group {
        BloodGroup::Unknown(_) => key.to_string(),
        known => known.label(),
    };
    StockLevel {
        blood_group,
        units: summary.total_available.unwrap_or(0),
        min_stock: summary.total_min_stock.unwrap_or(0),
        max_stock: summary.total_max_stock.unwrap_or(0),
        health: StockHealth::classify(summary.total_available, summary.total_min_stock),
    }
}

/// Sum of available units across all groups
pub fn total_stock(levels: &[StockLevel]) -> i64 {
    levels.iter().map(|level| level.units).sum()
}

/// Number of groups in critical state
pub fn critical_count(levels: &[StockLevel]) -> usize {
    levels
        .iter()
        .filter(|level| level.health == StockHealth::Critical)
        .count()
}

/// Number of groups in low state
pub fn low_count(levels: &[StockLevel]) -> usize {
    levels
        .iter()
        .filter(|level| level.health == StockHealth::Low)
        .count()
}
