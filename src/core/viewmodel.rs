//! Dashboard view model assembly
//!
//! Collects every derived metric into one serializable structure. The
//! assembly is pure apart from the clock, and [`build_view_model_at`]
//! pins the clock so callers (and tests) can reproduce a view model
//! byte for byte.

use crate::core::cycle::ConnectivityState;
use crate::core::metrics::{alerts, distribution, donors, ranking, stock};
use crate::core::metrics::{
    AlertEntry, CenterInventory, Distribution, RegionPerformance, StockLevel, WilayaDonorStats,
};
use crate::domain::records::{DashboardStats, RawSnapshot};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Everything one dashboard render needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub total_donors: u64,
    pub total_blood_requests: u64,
    pub total_blood_centers: u64,

    pub stock_levels: Vec<StockLevel>,
    pub total_stock: i64,
    pub critical_stock_count: usize,
    pub low_stock_count: usize,
    pub centers: Vec<CenterInventory>,

    pub requests_by_blood_group: Vec<Distribution>,
    pub requests_by_priority: Vec<Distribution>,
    pub donors_by_blood_type: Vec<Distribution>,
    pub top_requests_by_wilaya: Vec<Distribution>,

    pub region_ranking: Vec<RegionPerformance>,
    pub alerts: Vec<AlertEntry>,

    pub average_donor_age: u32,
    pub donors_by_wilaya: Vec<WilayaDonorStats>,

    pub connectivity: ConnectivityState,
}

impl ViewModel {
    pub fn high_alert_count(&self) -> usize {
        alerts::high_count(&self.alerts)
    }

    pub fn stock_alert_count(&self) -> usize {
        alerts::stock_count(&self.alerts)
    }
}

/// Assemble the view model with the current wall clock
pub fn build_view_model(snapshot: &RawSnapshot, connectivity: ConnectivityState) -> ViewModel {
    build_view_model_at(snapshot, connectivity, Utc::now())
}

/// Assemble the view model against a fixed instant
///
/// Deterministic: the same snapshot, connectivity state and instant always
/// produce the same view model.
pub fn build_view_model_at(
    snapshot: &RawSnapshot,
    connectivity: ConnectivityState,
    now: DateTime<Utc>,
) -> ViewModel {
    let empty_stats = DashboardStats::default();
    let stats = snapshot.stats.as_ref().unwrap_or(&empty_stats);

    let stock_levels = stock::stock_levels(stats);
    let alerts = alerts::generate_alerts(&stock_levels, &snapshot.requests);

    ViewModel {
        total_donors: stats.total_donors,
        total_blood_requests: stats.total_blood_requests,
        total_blood_centers: stats.total_blood_centers,

        total_stock: stock::total_stock(&stock_levels),
        critical_stock_count: stock::critical_count(&stock_levels),
        low_stock_count: stock::low_count(&stock_levels),
        centers: stock::center_inventories(&snapshot.centers),

        requests_by_blood_group: distribution::requests_by_blood_group(stats),
        requests_by_priority: distribution::requests_by_priority(&snapshot.requests),
        donors_by_blood_type: distribution::donors_by_blood_type(&snapshot.donors),
        top_requests_by_wilaya: distribution::top_requests_by_wilaya(stats),

        region_ranking: ranking::region_ranking(stats),
        alerts,

        average_donor_age: donors::average_age(&snapshot.donors, now.year()),
        donors_by_wilaya: donors::donors_by_wilaya(&snapshot.donors, &snapshot.wilayas, now),

        stock_levels,
        connectivity,
    }
}
