// Aggregation over the filtered dataset: three scalar metrics plus the two
// grouped sums behind the dashboard charts.
use crate::types::{DisasterRecord, SummaryMetrics};
use std::collections::{BTreeMap, HashSet};

/// Compute the dashboard metrics for a filtered dataset. All three values
/// are zero when the input is empty.
pub fn summarize(filtered: &[DisasterRecord]) -> SummaryMetrics {
    let total_count = filtered.iter().map(|r| r.count).sum();
    let districts: HashSet<&str> = filtered.iter().map(|r| r.district_name.as_str()).collect();
    let types: HashSet<&str> = filtered.iter().map(|r| r.disaster_type.as_str()).collect();
    SummaryMetrics {
        total_count,
        district_count: districts.len(),
        disaster_type_count: types.len(),
    }
}

/// Sum of counts per district, one entry per district actually present.
/// `BTreeMap` keeps the grouping deterministic regardless of input order.
pub fn group_by_district(filtered: &[DisasterRecord]) -> BTreeMap<String, u64> {
    group_sum(filtered.iter().map(|r| (r.district_name.as_str(), r.count)))
}

/// Sum of counts per disaster type.
pub fn group_by_disaster_type(filtered: &[DisasterRecord]) -> BTreeMap<String, u64> {
    group_sum(filtered.iter().map(|r| (r.disaster_type.as_str(), r.count)))
}

fn group_sum<'a>(pairs: impl Iterator<Item = (&'a str, u64)>) -> BTreeMap<String, u64> {
    let mut map: BTreeMap<String, u64> = BTreeMap::new();
    for (key, count) in pairs {
        *map.entry(key.to_string()).or_insert(0) += count;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(district: &str, disaster: &str, count: u64) -> DisasterRecord {
        DisasterRecord {
            province_code: "11".into(),
            province_name: "Aceh".into(),
            regency_code: "11.16".into(),
            regency_name: "Aceh Tamiang".into(),
            district_code: "11.16.01".into(),
            district_name: district.into(),
            disaster_type: disaster.into(),
            count,
            unit: "Kejadian".into(),
        }
    }

    #[test]
    fn concrete_scenario() {
        // base = A/Banjir/3, A/Longsor/2, B/Banjir/5 filtered to Banjir only
        let filtered = vec![rec("A", "Banjir", 3), rec("B", "Banjir", 5)];
        let m = summarize(&filtered);
        assert_eq!(m.total_count, 8);
        assert_eq!(m.district_count, 2);
        assert_eq!(m.disaster_type_count, 1);

        let by_district = group_by_district(&filtered);
        assert_eq!(by_district.get("A"), Some(&3));
        assert_eq!(by_district.get("B"), Some(&5));
        assert_eq!(by_district.len(), 2);

        let by_type = group_by_disaster_type(&filtered);
        assert_eq!(by_type.get("Banjir"), Some(&8));
        assert_eq!(by_type.len(), 1);
    }

    #[test]
    fn empty_input_yields_zero_metrics_and_empty_groupings() {
        let m = summarize(&[]);
        assert_eq!(m.total_count, 0);
        assert_eq!(m.district_count, 0);
        assert_eq!(m.disaster_type_count, 0);
        assert!(group_by_district(&[]).is_empty());
        assert!(group_by_disaster_type(&[]).is_empty());
    }

    #[test]
    fn both_groupings_sum_to_total() {
        let filtered = vec![
            rec("A", "Banjir", 3),
            rec("A", "Longsor", 2),
            rec("B", "Banjir", 5),
            rec("C", "Angin Kencang", 7),
        ];
        let m = summarize(&filtered);
        let district_sum: u64 = group_by_district(&filtered).values().sum();
        let type_sum: u64 = group_by_disaster_type(&filtered).values().sum();
        assert_eq!(district_sum, m.total_count);
        assert_eq!(type_sum, m.total_count);
    }

    #[test]
    fn grouping_is_order_independent() {
        let a = vec![rec("A", "Banjir", 3), rec("B", "Banjir", 5)];
        let b = vec![rec("B", "Banjir", 5), rec("A", "Banjir", 3)];
        assert_eq!(group_by_district(&a), group_by_district(&b));
        assert_eq!(summarize(&a), summarize(&b));
    }
}
