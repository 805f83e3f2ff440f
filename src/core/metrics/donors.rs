//! Donor roster analytics
//!
//! Average age, per-wilaya donor counts, and the roster filter used by the
//! donor listing. All date handling is lenient: a donor whose birth or
//! donation date cannot be parsed is excluded from the affected statistic
//! rather than failing the computation.

use crate::domain::records::{Donor, Wilaya};
use crate::domain::BloodGroup;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

/// Parse a timestamp in either RFC 3339 or bare `YYYY-MM-DD` form
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Mean donor age in whole years
///
/// Age is the difference of calendar years, matching how the roster
/// displays it. Donors without a parseable birth date are excluded from
/// both the numerator and the denominator; an empty roster averages to 0.
pub fn average_age(donors: &[Donor], current_year: i32) -> u32 {
    let ages: Vec<i64> = donors
        .iter()
        .filter_map(|d| d.donor_birth_date.as_deref())
        .filter_map(parse_date)
        .map(|birth| i64::from(current_year) - i64::from(birth.year()))
        .filter(|age| *age >= 0)
        .collect();
    if ages.is_empty() {
        return 0;
    }
    let sum: i64 = ages.iter().sum();
    (sum as f64 / ages.len() as f64).round() as u32
}

/// Per-wilaya donor counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WilayaDonorStats {
    pub wilaya: String,
    pub donors: u64,
    /// Donors whose last donation falls within the last 30 days
    pub recent_donors: u64,
}

/// Count donors per wilaya, most donors first
///
/// Iterates wilayas in list order so the stable sort breaks ties by that
/// order; wilayas with no donors are dropped.
pub fn donors_by_wilaya(
    donors: &[Donor],
    wilayas: &[Wilaya],
    now: DateTime<Utc>,
) -> Vec<WilayaDonorStats> {
    let cutoff = now.date_naive() - chrono::Duration::days(30);

    let mut rows: Vec<WilayaDonorStats> = wilayas
        .iter()
        .map(|wilaya| {
            let members: Vec<&Donor> = donors
                .iter()
                .filter(|d| d.wilaya_id() == Some(wilaya.id))
                .collect();
            let recent = members
                .iter()
                .filter(|d| {
                    d.donor_last_donation_date
                        .as_deref()
                        .and_then(parse_date)
                        .map(|date| date >= cutoff)
                        .unwrap_or(false)
                })
                .count();
            WilayaDonorStats {
                wilaya: wilaya.display_name(),
                donors: members.len() as u64,
                recent_donors: recent as u64,
            }
        })
        .filter(|row| row.donors > 0)
        .collect();
    rows.sort_by(|a, b| b.donors.cmp(&a.donors));
    rows
}

/// Filter criteria for the donor roster
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    /// Case-insensitive substring of the display name, commune or wilaya
    pub search: Option<String>,
    pub wilaya_id: Option<i64>,
    pub blood_group: Option<BloodGroup>,
}

impl DonorFilter {
    pub fn matches(&self, donor: &Donor) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let commune = donor
                .commune
                .as_ref()
                .and_then(|c| c.name.as_deref())
                .unwrap_or("");
            let wilaya = donor
                .commune
                .as_ref()
                .and_then(|c| c.wilaya.as_ref())
                .map(|w| w.display_name())
                .unwrap_or_default();
            let haystack = format!(
                "{} {} {}",
                donor.display_name().to_lowercase(),
                commune.to_lowercase(),
                wilaya.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if let Some(wilaya_id) = self.wilaya_id {
            if donor.wilaya_id() != Some(wilaya_id) {
                return false;
            }
        }
        if let Some(group) = self.blood_group {
            if donor.donor_blood_group != Some(group) {
                return false;
            }
        }
        true
    }

    pub fn filter<'a>(&self, donors: &'a [Donor]) -> Vec<&'a Donor> {
        donors.iter().filter(|d| self.matches(d)).collect()
    }
}
