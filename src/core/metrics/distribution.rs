//! Count and percentage breakdowns
//!
//! Every breakdown keeps the order the data arrived in (map order for stats
//! tables, first-occurrence order for record lists) and drops zero-count
//! buckets before computing percentages.

use crate::domain::records::{BloodRequest, DashboardStats, Donor};
use crate::domain::BloodGroup;
use serde::Serialize;

/// One labelled bucket of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub label: String,
    pub count: u64,
    /// Share of total, rounded to one decimal
    pub percentage: f64,
}

/// Build a distribution from ordered label/count pairs
///
/// Zero-count entries are dropped before the total is computed, so
/// percentages always sum to roughly 100 over the retained buckets.
pub fn from_counts(counts: Vec<(String, u64)>) -> Vec<Distribution> {
    let kept: Vec<(String, u64)> = counts.into_iter().filter(|(_, n)| *n > 0).collect();
    let total: u64 = kept.iter().map(|(_, n)| n).sum();
    kept.into_iter()
        .map(|(label, count)| Distribution {
            label,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Requests per blood group, from the stats table
pub fn requests_by_blood_group(stats: &DashboardStats) -> Vec<Distribution> {
    let counts = stats
        .requests_by_blood_group
        .iter()
        .map(|(key, count)| {
            let label = match BloodGroup::from_key(key) {
                BloodGroup::Unknown(_) => key.to_string(),
                known => known.label(),
            };
            (label, *count)
        })
        .collect();
    from_counts(counts)
}

/// Requests per priority, in first-occurrence order
pub fn requests_by_priority(requests: &[BloodRequest]) -> Vec<Distribution> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for request in requests {
        let Some(priority) = request.priority else {
            continue;
        };
        let label = priority.label();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    from_counts(counts)
}

/// Donors per blood type, in first-occurrence order
pub fn donors_by_blood_type(donors: &[Donor]) -> Vec<Distribution> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for donor in donors {
        let Some(group) = donor.donor_blood_group else {
            continue;
        };
        let label = group.label();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    from_counts(counts)
}

/// The five wilayas with the most requests, highest first
///
/// The sort is stable, so wilayas tied on count keep the table order.
pub fn top_requests_by_wilaya(stats: &DashboardStats) -> Vec<Distribution> {
    let mut entries = from_counts(
        stats
            .requests_by_wilaya
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect(),
    );
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(5);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::OrderedMap;
    use crate::domain::Priority;

    #[test]
    fn test_from_counts_drops_zeros_and_rounds() {
        let dist = from_counts(vec![
            ("A".to_string(), 1),
            ("B".to_string(), 0),
            ("C".to_string(), 2),
        ]);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].label, "A");
        assert_eq!(dist[0].percentage, 33.3);
        assert_eq!(dist[1].label, "C");
        assert_eq!(dist[1].percentage, 66.7);
    }

    #[test]
    fn test_from_counts_all_zero_is_empty() {
        assert!(from_counts(vec![("A".to_string(), 0)]).is_empty());
        assert!(from_counts(Vec::new()).is_empty());
    }

    #[test]
    fn test_requests_by_blood_group_uses_labels_in_map_order() {
        let mut stats = DashboardStats::default();
        stats.requests_by_blood_group = OrderedMap::from(vec![
            ("7".to_string(), 45u64),
            ("3".to_string(), 32),
            ("2".to_string(), 0),
        ]);

        let dist = requests_by_blood_group(&stats);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].label, "O+");
        assert_eq!(dist[0].count, 45);
        assert_eq!(dist[1].label, "A+");
        assert_eq!(dist[0].percentage, 58.4);
        assert_eq!(dist[1].percentage, 41.6);
    }

    #[test]
    fn test_requests_by_priority_first_occurrence_order() {
        let mut critical = BloodRequest::default();
        critical.priority = Some(Priority::Critical);
        let mut normal = BloodRequest::default();
        normal.priority = Some(Priority::Normal);
        let unprioritized = BloodRequest::default();

        let requests = vec![
            critical.clone(),
            normal,
            critical,
            unprioritized,
        ];
        let dist = requests_by_priority(&requests);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].label, "Critical");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[1].label, "Normal");
        assert_eq!(dist[1].count, 1);
    }

    #[test]
    fn test_donors_by_blood_type_skips_unset() {
        let mut o_pos = Donor::default();
        o_pos.donor_blood_group = Some(BloodGroup::OPositive);
        let unset = Donor::default();

        let dist = donors_by_blood_type(&[o_pos.clone(), unset, o_pos]);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].label, "O+");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[0].percentage, 100.0);
    }

    #[test]
    fn test_top_requests_by_wilaya_takes_five_stable() {
        let mut stats = DashboardStats::default();
        stats.requests_by_wilaya = OrderedMap::from(vec![
            ("Alger".to_string(), 45u64),
            ("Oran".to_string(), 32),
            ("Constantine".to_string(), 28),
            ("Annaba".to_string(), 28),
            ("Blida".to_string(), 15),
            ("Setif".to_string(), 12),
        ]);

        let top = top_requests_by_wilaya(&stats);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].label, "Alger");
        // Tie keeps table order
        assert_eq!(top[2].label, "Constantine");
        assert_eq!(top[3].label, "Annaba");
        assert_eq!(top[4].label, "Blida");
    }
}
