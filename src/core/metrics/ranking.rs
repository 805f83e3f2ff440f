//! Regional performance ranking
//!
//! Scores each wilaya by request volume relative to its center count and
//! keeps the top five. A wilaya with requests but no recorded centers is
//! scored against a denominator of one rather than dropped.

use crate::core::metrics::distribution::round1;
use crate::domain::records::DashboardStats;
use serde::Serialize;

/// One wilaya's scored row in the regional ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPerformance {
    pub wilaya: String,
    pub requests: u64,
    pub centers: u64,
    /// `round(requests / max(centers, 1) * 10)`
    pub score: i64,
    /// `requests / max(centers, 1) * 1.5`, one decimal
    pub efficiency: f64,
}

/// Rank wilayas by score, highest first, keeping the top five
///
/// Iterates the requests table in its own order so the stable sort breaks
/// score ties by table position.
pub fn region_ranking(stats: &DashboardStats) -> Vec<RegionPerformance> {
    let mut rows: Vec<RegionPerformance> = stats
        .requests_by_wilaya
        .iter()
        .map(|(wilaya, requests)| {
            let centers = stats.centers_by_wilaya.get(wilaya).copied().unwrap_or(0);
            score_row(wilaya.to_string(), *requests, centers)
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows.truncate(5);
    rows
}

fn score_row(wilaya: String, requests: u64, centers: u64) -> RegionPerformance {
    let denominator = centers.max(1) as f64;
    let ratio = requests as f64 / denominator;
    RegionPerformance {
        wilaya,
        requests,
        centers,
        score: (ratio * 10.0).round() as i64,
        efficiency: round1(ratio * 1.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::OrderedMap;

    fn stats(
        requests: Vec<(&str, u64)>,
        centers: Vec<(&str, u64)>,
    ) -> DashboardStats {
        let mut stats = DashboardStats::default();
        stats.requests_by_wilaya = OrderedMap::from(
            requests
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<Vec<_>>(),
        );
        stats.centers_by_wilaya = OrderedMap::from(
            centers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<Vec<_>>(),
        );
        stats
    }

    #[test]
    fn test_score_and_efficiency_formulas() {
        let stats = stats(
            vec![("Alger", 45), ("Oran", 32)],
            vec![("Alger", 8), ("Oran", 6)],
        );

        let ranking = region_ranking(&stats);
        assert_eq!(ranking[0].wilaya, "Alger");
        assert_eq!(ranking[0].score, 56);
        assert_eq!(ranking[0].efficiency, 8.4);
        assert_eq!(ranking[1].wilaya, "Oran");
        assert_eq!(ranking[1].score, 53);
        assert_eq!(ranking[1].efficiency, 8.0);
    }

    #[test]
    fn test_zero_centers_uses_denominator_of_one() {
        let stats = stats(vec![("Blida", 7)], Vec::new());

        let ranking = region_ranking(&stats);
        assert_eq!(ranking[0].centers, 0);
        assert_eq!(ranking[0].score, 70);
        assert_eq!(ranking[0].efficiency, 10.5);
    }

    #[test]
    fn test_truncates_to_five_and_breaks_ties_by_table_order() {
        let stats = stats(
            vec![
                ("A", 10),
                ("B", 20),
                ("C", 20),
                ("D", 5),
                ("E", 30),
                ("F", 1),
            ],
            Vec::new(),
        );

        let ranking = region_ranking(&stats);
        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking[0].wilaya, "E");
        assert_eq!(ranking[1].wilaya, "B");
        assert_eq!(ranking[2].wilaya, "C");
        assert_eq!(ranking[3].wilaya, "A");
        assert_eq!(ranking[4].wilaya, "D");
    }

    #[test]
    fn test_empty_tables_rank_nothing() {
        assert!(region_ranking(&DashboardStats::default()).is_empty());
    }
}
