//! Raw record types from the dashboard API
//!
//! These structs mirror the wire shapes of the remote service. The payloads
//! are semi-trusted: every nested field is optional and decoding never fails
//! on a missing key. Wire names are camelCase, including the API's own
//! spelling `bloodTansfusionCenter`.
//!
//! Map-valued stats fields use [`OrderedMap`] instead of `HashMap` because
//! derived distribution tables must preserve the insertion order of first
//! occurrence.

use crate::domain::enums::{
    Availability, BloodGroup, ContactMethod, DonationType, Priority, RequestStatus,
};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A string-keyed map that preserves insertion order
///
/// `serde_json`'s default map type reorders keys; the distribution and
/// ranking metrics depend on the order the server emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.0.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> From<Vec<(String, V)>> for OrderedMap<V> {
    fn from(entries: Vec<(String, V)>) -> Self {
        OrderedMap(entries)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Aggregated stock counts for one blood group within a scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StockSummary {
    pub total_available: Option<i64>,
    pub total_min_stock: Option<i64>,
    pub total_max_stock: Option<i64>,
}

impl StockSummary {
    pub fn new(available: i64, min_stock: i64, max_stock: i64) -> Self {
        Self {
            total_available: Some(available),
            total_min_stock: Some(min_stock),
            total_max_stock: Some(max_stock),
        }
    }
}

/// Pre-aggregated statistics from `GET /Dashboard/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_donors: u64,
    pub total_blood_requests: u64,
    pub total_blood_centers: u64,
    /// Request counts keyed by blood-group code
    pub requests_by_blood_group: OrderedMap<u64>,
    /// Request counts keyed by wilaya name
    pub requests_by_wilaya: OrderedMap<u64>,
    /// Center counts keyed by wilaya name
    pub centers_by_wilaya: OrderedMap<u64>,
    pub requests_by_blood_transfer_center: OrderedMap<u64>,
    /// National stock keyed by blood-group code
    pub global_blood_stock: OrderedMap<StockSummary>,
    pub blood_stock_by_wilaya: OrderedMap<OrderedMap<StockSummary>>,
    pub blood_stock_by_center: OrderedMap<OrderedMap<StockSummary>>,
}

/// A wilaya (administrative region)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Wilaya {
    pub id: i64,
    pub name: Option<String>,
}

impl Wilaya {
    /// Display name, falling back to the numeric id
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Wilaya {}", self.id),
        }
    }
}

/// Reference to a transfusion center embedded in a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CenterRef {
    pub id: String,
    pub name: Option<String>,
    pub wilaya_id: Option<i64>,
    pub wilaya: Option<Wilaya>,
}

/// One blood-donation request from `GET /BloodDonationRequests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BloodRequest {
    pub id: String,
    pub evolution_status: Option<RequestStatus>,
    pub donation_type: Option<DonationType>,
    pub blood_group: Option<BloodGroup>,
    pub requested_qty: Option<i64>,
    pub request_date: Option<String>,
    pub request_due_date: Option<String>,
    pub priority: Option<Priority>,
    pub more_details: Option<String>,
    pub service_name: Option<String>,
    #[serde(rename = "bloodTansfusionCenterId")]
    pub center_id: Option<String>,
    #[serde(rename = "bloodTansfusionCenter")]
    pub center: Option<CenterRef>,
}

impl BloodRequest {
    /// Name of the requesting center, or `"Unknown Center"`
    pub fn center_name(&self) -> String {
        self.center
            .as_ref()
            .and_then(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown Center".to_string())
    }
}

/// One inventory line of a transfusion center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    pub id: String,
    #[serde(rename = "bloodTansfusionCenterId")]
    pub center_id: Option<String>,
    pub blood_group: Option<BloodGroup>,
    pub blood_donation_type: Option<DonationType>,
    pub total_qty: Option<i64>,
    pub min_qty: Option<i64>,
    pub max_qty: Option<i64>,
}

/// One transfusion center (BTC) from `GET /BTC`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Center {
    pub id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
    pub wilaya_id: Option<i64>,
    pub blood_inventories: Option<Vec<InventoryItem>>,
    pub wilaya: Option<Wilaya>,
}

impl Center {
    /// Inventory lines, treating a null list as empty
    pub fn inventories(&self) -> &[InventoryItem] {
        self.blood_inventories.as_deref().unwrap_or(&[])
    }
}

/// The commune (and wilaya) a donor belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Commune {
    pub id: i64,
    pub name: Option<String>,
    pub wilaya_id: Option<i64>,
    pub wilaya: Option<Wilaya>,
}

/// One registered donor from `GET /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Donor {
    pub id: String,
    pub donor_want_to_stay_anonymous: Option<bool>,
    pub donor_exclude_from_public_portal: Option<bool>,
    pub donor_availability: Option<Availability>,
    pub donor_contact_method: Option<ContactMethod>,
    pub donor_name: Option<String>,
    pub donor_birth_date: Option<String>,
    pub donor_blood_group: Option<BloodGroup>,
    #[serde(rename = "donorNIN")]
    pub donor_nin: Option<String>,
    pub donor_tel: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "donorNotesForBTC")]
    pub donor_notes_for_btc: Option<String>,
    pub donor_last_donation_date: Option<String>,
    pub commune_id: Option<i64>,
    pub commune: Option<Commune>,
}

impl Donor {
    /// Public display name honoring the anonymity flag
    pub fn display_name(&self) -> String {
        if self.donor_want_to_stay_anonymous.unwrap_or(false) {
            return "Anonymous Donor".to_string();
        }
        self.donor_name
            .clone()
            .unwrap_or_else(|| "Unnamed".to_string())
    }

    /// The wilaya id of the donor's commune, if known
    pub fn wilaya_id(&self) -> Option<i64> {
        self.commune.as_ref().and_then(|c| c.wilaya_id)
    }
}

/// Envelope of `GET /Dashboard/stats`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatsEnvelope {
    pub stats: Option<DashboardStats>,
}

/// Envelope of `GET /BloodDonationRequests`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestsEnvelope {
    pub blood_donation_requests: Vec<BloodRequest>,
}

/// Envelope of `GET /BTC`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CentersEnvelope {
    #[serde(rename = "bloodTansfusionCenters")]
    pub centers: Vec<Center>,
}

/// Envelope of `GET /Wilayas`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WilayasEnvelope {
    pub wilayas: Vec<Wilaya>,
}

/// Envelope of `GET /users`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DonorsEnvelope {
    pub users: Vec<Donor>,
}

/// All raw collections of one fetch cycle
///
/// A snapshot is always structurally complete: a resource the cycle didn't
/// request, or whose envelope key was absent, is simply empty. The metrics
/// engine consumes snapshots and nothing else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSnapshot {
    pub stats: Option<DashboardStats>,
    pub requests: Vec<BloodRequest>,
    pub centers: Vec<Center>,
    pub wilayas: Vec<Wilaya>,
    pub donors: Vec<Donor>,
}

impl RawSnapshot {
    /// An empty snapshot (every collection absent)
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_preserves_insertion_order() {
        let json = r#"{"7": 45, "3": 32, "5": 28, "1": 18}"#;
        let map: OrderedMap<u64> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["7", "3", "5", "1"]);
        assert_eq!(map.get("5"), Some(&28));
        assert_eq!(map.get("9"), None);
    }

    #[test]
    fn test_stats_envelope_missing_key_is_none() {
        let env: StatsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.stats.is_none());
    }

    #[test]
    fn test_requests_envelope_missing_key_is_empty() {
        let env: RequestsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(env.blood_donation_requests.is_empty());
    }

    #[test]
    fn test_stats_partial_shape() {
        let json = r#"{"stats": {"totalDonors": 4068, "globalBloodStock": {"7": {"totalAvailable": 298, "totalMinStock": 100, "totalMaxStock": 500}}}}"#;
        let env: StatsEnvelope = serde_json::from_str(json).unwrap();
        let stats = env.stats.unwrap();
        assert_eq!(stats.total_donors, 4068);
        assert_eq!(stats.total_blood_requests, 0);
        assert!(stats.requests_by_wilaya.is_empty());
        let stock = stats.global_blood_stock.get("7").unwrap();
        assert_eq!(stock.total_available, Some(298));
    }

    #[test]
    fn test_request_decodes_api_spelling() {
        let json = r#"{
            "id": "1",
            "priority": 3,
            "bloodGroup": 7,
            "bloodTansfusionCenterId": "1",
            "bloodTansfusionCenter": {"id": "1", "name": "BTC Alger Centre", "wilayaId": 16}
        }"#;
        let request: BloodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.priority, Some(crate::domain::enums::Priority::Critical));
        assert_eq!(request.center_name(), "BTC Alger Centre");
        assert_eq!(request.center_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_request_center_name_fallback() {
        let request = BloodRequest {
            id: "9".to_string(),
            ..Default::default()
        };
        assert_eq!(request.center_name(), "Unknown Center");
    }

    #[test]
    fn test_center_null_inventories() {
        let json = r#"{"id": "3", "name": "BTC Constantine", "wilayaId": 25, "bloodInventories": null}"#;
        let center: Center = serde_json::from_str(json).unwrap();
        assert!(center.inventories().is_empty());
    }

    #[test]
    fn test_donor_display_name() {
        let anonymous = Donor {
            id: "3".to_string(),
            donor_want_to_stay_anonymous: Some(true),
            donor_name: Some("Someone".to_string()),
            ..Default::default()
        };
        assert_eq!(anonymous.display_name(), "Anonymous Donor");

        let unnamed = Donor {
            id: "4".to_string(),
            ..Default::default()
        };
        assert_eq!(unnamed.display_name(), "Unnamed");
    }

    #[test]
    fn test_donor_nested_wilaya() {
        let json = r#"{
            "id": "1",
            "donorName": "Ahmed Benali",
            "donorBirthDate": "1985-03-15T00:00:00Z",
            "donorBloodGroup": 7,
            "commune": {"id": 1, "name": "Alger Centre", "wilayaId": 16,
                        "wilaya": {"id": 16, "name": "Alger"}}
        }"#;
        let donor: Donor = serde_json::from_str(json).unwrap();
        assert_eq!(donor.wilaya_id(), Some(16));
        assert_eq!(donor.display_name(), "Ahmed Benali");
    }

    #[test]
    fn test_wilaya_display_name_fallback() {
        let unnamed = Wilaya { id: 48, name: None };
        assert_eq!(unnamed.display_name(), "Wilaya 48");
    }
}
