//! Alert feed generation
//!
//! Alerts are derived fresh from each snapshot; ids are deterministic so a
//! given stock or request condition always produces the same entry.

use crate::core::metrics::stock::{StockHealth, StockLevel};
use crate::domain::records::BloodRequest;
use crate::domain::Priority;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

/// One entry of the alert feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub id: String,
    pub category: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
}

/// Derive the alert feed from stock levels and open requests
///
/// Order is stable: critical stock first, then low stock, then up to three
/// critical-priority requests in list order.
pub fn generate_alerts(levels: &[StockLevel], requests: &[BloodRequest]) -> Vec<AlertEntry> {
    let mut alerts = Vec::new();

    for level in levels {
        if level.health == StockHealth::Critical {
            alerts.push(AlertEntry {
                id: format!("stock-{}", level.blood_group),
                category: "Stock Critical".to_string(),
                message: format!("{} blood type below minimum threshold", level.blood_group),
                severity: Severity::High,
                timestamp: "Real-time".to_string(),
            });
        }
    }

    for level in levels {
        if level.health == StockHealth::Low {
            alerts.push(AlertEntry {
                id: format!("low-{}", level.blood_group),
                category: "Stock Low".to_string(),
                message: format!("{} blood type running low", level.blood_group),
                severity: Severity::Medium,
                timestamp: "Real-time".to_string(),
            });
        }
    }

    let critical_requests = requests
        .iter()
        .filter(|r| r.priority == Some(Priority::Critical))
        .take(3);
    for request in critical_requests {
        let blood_group = request
            .blood_group
            .map(|g| g.label())
            .unwrap_or_else(|| "Unknown".to_string());
        alerts.push(AlertEntry {
            id: format!("req-{}", request.id),
            category: "Critical Request".to_string(),
            message: format!(
                "Critical {} request from {}",
                blood_group,
                request.center_name()
            ),
            severity: Severity::High,
            timestamp: request
                .request_date
                .clone()
                .unwrap_or_else(|| "Real-time".to_string()),
        });
    }

    alerts
}

/// Number of high-severity entries in the feed
pub fn high_count(alerts: &[AlertEntry]) -> usize {
    alerts
        .iter()
        .filter(|a| a.severity == Severity::High)
        .count()
}

/// Number of stock-related entries in the feed
pub fn stock_count(alerts: &[AlertEntry]) -> usize {
    alerts
        .iter()
        .filter(|a| a.category.starts_with("Stock"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::CenterRef;
    use crate::domain::BloodGroup;

    fn level(blood_group: &str, health: StockHealth) -> StockLevel {
        StockLevel {
            blood_group: blood_group.to_string(),
            units: 10,
            min_stock: 100,
            max_stock: 300,
            health,
        }
    }

    fn critical_request(id: &str, center: Option<&str>) -> BloodRequest {
        let mut request = BloodRequest::default();
        request.id = id.to_string();
        request.priority = Some(Priority::Critical);
        request.blood_group = Some(BloodGroup::OPositive);
        request.center = center.map(|name| CenterRef {
            name: Some(name.to_string()),
            ..Default::default()
        });
        request
    }

    #[test]
    fn test_stock_alerts_ordered_critical_then_low() {
        let levels = vec![
            level("A+", StockHealth::Low),
            level("B-", StockHealth::Critical),
            level("O+", StockHealth::Healthy),
        ];

        let alerts = generate_alerts(&levels, &[]);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, "stock-B-");
        assert_eq!(alerts[0].severity, Severity::High);
        assert_eq!(alerts[0].message, "B- blood type below minimum threshold");
        assert_eq!(alerts[1].id, "low-A+");
        assert_eq!(alerts[1].severity, Severity::Medium);
        assert_eq!(alerts[1].message, "A+ blood type running low");
        assert_eq!(stock_count(&alerts), 2);
    }

    #[test]
    fn test_critical_requests_capped_at_three() {
        let mut low_priority = BloodRequest::default();
        low_priority.id = "skip".to_string();
        low_priority.priority = Some(Priority::Normal);

        let requests = vec![
            critical_request("x", Some("CHU Alger")),
            low_priority,
            critical_request("y", None),
            critical_request("z", Some("CHU Oran")),
            critical_request("w", Some("CHU Blida")),
        ];

        let alerts = generate_alerts(&[], &requests);
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].id, "req-x");
        assert_eq!(alerts[0].message, "Critical O+ request from CHU Alger");
        assert_eq!(alerts[1].id, "req-y");
        assert_eq!(alerts[1].message, "Critical O+ request from Unknown Center");
        assert_eq!(alerts[2].id, "req-z");
        assert!(alerts.iter().all(|a| a.id != "req-w"));
        assert!(alerts.iter().all(|a| a.id != "req-skip"));
        assert_eq!(high_count(&alerts), 3);
    }

    #[test]
    fn test_request_timestamp_falls_back_to_real_time() {
        let mut dated = critical_request("d", None);
        dated.request_date = Some("2026-08-01T10:00:00Z".to_string());
        let undated = critical_request("u", None);

        let alerts = generate_alerts(&[], &[dated, undated]);
        assert_eq!(alerts[0].timestamp, "2026-08-01T10:00:00Z");
        assert_eq!(alerts[1].timestamp, "Real-time");
    }

    #[test]
    fn test_empty_inputs_produce_no_alerts() {
        assert!(generate_alerts(&[], &[]).is_empty());
    }
}
