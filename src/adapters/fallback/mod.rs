//! Fallback dataset provider
//!
//! Supplies the fixed offline dataset used whenever a fetch cycle exhausts
//! its retries, or when the operator forces offline mode. The dataset is
//! deterministic and internally consistent with the live schema: valid enum
//! codes, non-negative quantities, and wilaya references that resolve
//! within the snapshot. Callers cannot tell the two trigger paths apart
//! from the returned shape, only from the connectivity state.

use crate::domain::enums::{
    Availability, BloodGroup, ContactMethod, DonationType, Priority, RequestStatus,
};
use crate::domain::records::{
    BloodRequest, Center, CenterRef, Commune, DashboardStats, Donor, InventoryItem, OrderedMap,
    RawSnapshot, StockSummary, Wilaya,
};

/// The complete demo snapshot
///
/// Pure and deterministic: every call returns the same data.
pub fn demo_snapshot() -> RawSnapshot {
    RawSnapshot {
        stats: Some(demo_stats()),
        requests: demo_requests(),
        centers: demo_centers(),
        wilayas: demo_wilayas(),
        donors: demo_donors(),
    }
}

fn demo_stats() -> DashboardStats {
    let mut requests_by_blood_group = OrderedMap::new();
    for (code, count) in [
        ("7", 45u64),
        ("3", 32),
        ("5", 28),
        ("1", 18),
        ("8", 15),
        ("4", 12),
        ("6", 4),
        ("2", 2),
    ] {
        requests_by_blood_group.insert(code, count);
    }

    let mut requests_by_wilaya = OrderedMap::new();
    for (wilaya, count) in [
        ("Alger", 45u64),
        ("Oran", 32),
        ("Constantine", 28),
        ("Annaba", 18),
        ("Blida", 15),
    ] {
        requests_by_wilaya.insert(wilaya, count);
    }

    let mut centers_by_wilaya = OrderedMap::new();
    for (wilaya, count) in [
        ("Alger", 8u64),
        ("Oran", 6),
        ("Constantine", 5),
        ("Annaba", 3),
        ("Blida", 4),
    ] {
        centers_by_wilaya.insert(wilaya, count);
    }

    let mut global_blood_stock = OrderedMap::new();
    for (code, available, min_stock, max_stock) in [
        ("7", 298, 100, 500),
        ("3", 245, 80, 400),
        ("5", 156, 60, 300),
        ("8", 45, 50, 200),
        ("1", 67, 40, 150),
        ("4", 89, 70, 250),
        ("6", 34, 40, 120),
        ("2", 23, 30, 100),
    ] {
        global_blood_stock.insert(code, StockSummary::new(available, min_stock, max_stock));
    }

    DashboardStats {
        total_donors: 4_068,
        total_blood_requests: 156,
        total_blood_centers: 48,
        requests_by_blood_group,
        requests_by_wilaya,
        centers_by_wilaya,
        global_blood_stock,
        ..Default::default()
    }
}

fn demo_wilayas() -> Vec<Wilaya> {
    [
        (16, "Alger"),
        (31, "Oran"),
        (25, "Constantine"),
        (23, "Annaba"),
        (9, "Blida"),
    ]
    .into_iter()
    .map(|(id, name)| Wilaya {
        id,
        name: Some(name.to_string()),
    })
    .collect()
}

fn wilaya_ref(id: i64, name: &str) -> Wilaya {
    Wilaya {
        id,
        name: Some(name.to_string()),
    }
}

fn demo_requests() -> Vec<BloodRequest> {
    vec![
        BloodRequest {
            id: "1".to_string(),
            evolution_status: Some(RequestStatus::Waiting),
            donation_type: Some(DonationType::WholeBlood),
            blood_group: Some(BloodGroup::OPositive),
            requested_qty: Some(5),
            request_date: Some("2024-01-15T10:00:00Z".to_string()),
            priority: Some(Priority::Critical),
            service_name: Some("Emergency".to_string()),
            center_id: Some("1".to_string()),
            center: Some(CenterRef {
                id: "1".to_string(),
                name: Some("BTC Alger Centre".to_string()),
                wilaya_id: Some(16),
                wilaya: Some(wilaya_ref(16, "Alger")),
            }),
            ..Default::default()
        },
        BloodRequest {
            id: "2".to_string(),
            evolution_status: Some(RequestStatus::Initiated),
            donation_type: Some(DonationType::WholeBlood),
            blood_group: Some(BloodGroup::APositive),
            requested_qty: Some(3),
            request_date: Some("2024-01-16T14:30:00Z".to_string()),
            priority: Some(Priority::Normal),
            service_name: Some("Surgery".to_string()),
            center_id: Some("2".to_string()),
            center: Some(CenterRef {
                id: "2".to_string(),
                name: Some("BTC Oran".to_string()),
                wilaya_id: Some(31),
                wilaya: Some(wilaya_ref(31, "Oran")),
            }),
            ..Default::default()
        },
    ]
}

fn inventory(
    id: &str,
    center_id: &str,
    group: BloodGroup,
    total: i64,
    min: i64,
    max: i64,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        center_id: Some(center_id.to_string()),
        blood_group: Some(group),
        blood_donation_type: Some(DonationType::WholeBlood),
        total_qty: Some(total),
        min_qty: Some(min),
        max_qty: Some(max),
    }
}

fn demo_centers() -> Vec<Center> {
    vec![
        Center {
            id: "1".to_string(),
            name: Some("BTC Alger Centre".to_string()),
            address: Some("Rue Didouche Mourad, Alger".to_string()),
            contact: Some("Dr. Ahmed Benali".to_string()),
            email: Some("alger@btc.dz".to_string()),
            tel: Some("+213 21 123 456".to_string()),
            wilaya_id: Some(16),
            blood_inventories: Some(vec![
                inventory("1", "1", BloodGroup::OPositive, 156, 50, 300),
                inventory("2", "1", BloodGroup::APositive, 89, 40, 200),
            ]),
            wilaya: Some(wilaya_ref(16, "Alger")),
        },
        Center {
            id: "2".to_string(),
            name: Some("BTC Oran".to_string()),
            address: Some("Boulevard de la Révolution, Oran".to_string()),
            contact: Some("Dr. Fatima Khelifi".to_string()),
            email: Some("oran@btc.dz".to_string()),
            tel: Some("+213 41 234 567".to_string()),
            wilaya_id: Some(31),
            blood_inventories: Some(vec![
                inventory("3", "2", BloodGroup::OPositive, 98, 40, 250),
                inventory("4", "2", BloodGroup::APositive, 67, 35, 180),
            ]),
            wilaya: Some(wilaya_ref(31, "Oran")),
        },
        Center {
            id: "3".to_string(),
            name: Some("BTC Constantine".to_string()),
            address: Some("Rue Larbi Ben M'hidi, Constantine".to_string()),
            contact: Some("Dr. Mohamed Saidi".to_string()),
            email: Some("constantine@btc.dz".to_string()),
            tel: Some("+213 31 345 678".to_string()),
            wilaya_id: Some(25),
            blood_inventories: Some(vec![
                inventory("5", "3", BloodGroup::OPositive, 78, 30, 200),
                inventory("6", "3", BloodGroup::BNegative, 12, 20, 100),
            ]),
            wilaya: Some(wilaya_ref(25, "Constantine")),
        },
    ]
}

fn demo_donors() -> Vec<Donor> {
    vec![
        Donor {
            id: "1".to_string(),
            donor_name: Some("Ahmed Benali".to_string()),
            donor_birth_date: Some("1985-03-15T00:00:00Z".to_string()),
            donor_blood_group: Some(BloodGroup::OPositive),
            donor_tel: Some("+213 555 123 456".to_string()),
            donor_contact_method: Some(ContactMethod::All),
            donor_availability: Some(Availability::AllTime),
            donor_last_donation_date: Some("2024-01-15T00:00:00Z".to_string()),
            commune: Some(Commune {
                id: 1,
                name: Some("Alger Centre".to_string()),
                wilaya_id: Some(16),
                wilaya: Some(wilaya_ref(16, "Alger")),
            }),
            ..Default::default()
        },
        Donor {
            id: "2".to_string(),
            donor_name: Some("Fatima Khelifi".to_string()),
            donor_birth_date: Some("1990-07-22T00:00:00Z".to_string()),
            donor_blood_group: Some(BloodGroup::APositive),
            donor_tel: Some("+213 555 234 567".to_string()),
            donor_contact_method: Some(ContactMethod::Call),
            donor_availability: Some(Availability::Morning),
            donor_last_donation_date: Some("2024-02-10T00:00:00Z".to_string()),
            commune: Some(Commune {
                id: 2,
                name: Some("Oran Centre".to_string()),
                wilaya_id: Some(31),
                wilaya: Some(wilaya_ref(31, "Oran")),
            }),
            ..Default::default()
        },
        Donor {
            id: "3".to_string(),
            donor_want_to_stay_anonymous: Some(true),
            donor_birth_date: Some("1988-11-08T00:00:00Z".to_string()),
            donor_blood_group: Some(BloodGroup::BPositive),
            donor_tel: Some("+213 555 345 678".to_string()),
            donor_contact_method: Some(ContactMethod::Text),
            donor_availability: Some(Availability::Day),
            commune: Some(Commune {
                id: 3,
                name: Some("Constantine Centre".to_string()),
                wilaya_id: Some(25),
                wilaya: Some(wilaya_ref(25, "Constantine")),
            }),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_deterministic() {
        assert_eq!(demo_snapshot(), demo_snapshot());
    }

    #[test]
    fn test_stats_totals_are_consistent() {
        let stats = demo_stats();
        assert_eq!(stats.total_donors, 4_068);
        assert_eq!(stats.total_blood_requests, 156);
        assert_eq!(stats.total_blood_centers, 48);
        assert_eq!(stats.global_blood_stock.len(), 8);
        assert_eq!(stats.requests_by_wilaya.len(), 5);
        assert_eq!(stats.centers_by_wilaya.len(), 5);
    }

    #[test]
    fn test_stock_codes_are_known_and_non_negative() {
        let stats = demo_stats();
        for (key, stock) in stats.global_blood_stock.iter() {
            assert!(
                !matches!(BloodGroup::from_key(key), BloodGroup::Unknown(_)),
                "unknown blood group code {key} in demo stock"
            );
            assert!(stock.total_available.unwrap() >= 0);
            assert!(stock.total_min_stock.unwrap() >= 0);
            assert!(stock.total_max_stock.unwrap() >= 0);
        }
    }

    #[test]
    fn test_referential_consistency_with_wilayas() {
        let snapshot = demo_snapshot();
        let wilaya_ids: Vec<i64> = snapshot.wilayas.iter().map(|w| w.id).collect();

        for center in &snapshot.centers {
            let id = center.wilaya_id.expect("demo center missing wilaya");
            assert!(wilaya_ids.contains(&id), "center wilaya {id} not in list");
        }
        for donor in &snapshot.donors {
            let id = donor.wilaya_id().expect("demo donor missing wilaya");
            assert!(wilaya_ids.contains(&id), "donor wilaya {id} not in list");
        }
        for request in &snapshot.requests {
            let id = request
                .center
                .as_ref()
                .and_then(|c| c.wilaya_id)
                .expect("demo request missing wilaya");
            assert!(wilaya_ids.contains(&id), "request wilaya {id} not in list");
        }
    }

    #[test]
    fn test_demo_contains_a_critical_request() {
        let with_critical = demo_requests()
            .iter()
            .any(|r| r.priority == Some(Priority::Critical));
        assert!(with_critical);
    }
}
