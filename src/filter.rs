// Set-membership filtering over the base dataset.
//
// The user interface supplies a `FilterSelection` (two multi-select sets);
// the filter itself is a pure function and keeps base-dataset order.
use crate::types::DisasterRecord;
use std::collections::HashSet;

/// The two user-selected filter dimensions. An empty set on either
/// dimension matches nothing, which is a valid state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub districts: HashSet<String>,
    pub disaster_types: HashSet<String>,
}

impl FilterSelection {
    /// The default selection: every distinct district and disaster type
    /// present in the current base dataset.
    pub fn all_of(base: &[DisasterRecord]) -> Self {
        FilterSelection {
            districts: base.iter().map(|r| r.district_name.clone()).collect(),
            disaster_types: base.iter().map(|r| r.disaster_type.clone()).collect(),
        }
    }
}

/// Sorted distinct district names, re-derived from the current base
/// dataset so filter options always reflect loaded data.
pub fn district_options(base: &[DisasterRecord]) -> Vec<String> {
    distinct_sorted(base.iter().map(|r| r.district_name.as_str()))
}

/// Sorted distinct disaster-type labels present in the base dataset.
pub fn disaster_type_options(base: &[DisasterRecord]) -> Vec<String> {
    distinct_sorted(base.iter().map(|r| r.disaster_type.as_str()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: HashSet<&str> = values.collect();
    let mut out: Vec<String> = set.into_iter().map(|s| s.to_string()).collect();
    out.sort();
    out
}

/// Keep the records whose district AND disaster type are both selected.
/// Pure; output preserves the relative order of `base`.
pub fn apply(base: &[DisasterRecord], sel: &FilterSelection) -> Vec<DisasterRecord> {
    base.iter()
        .filter(|r| {
            sel.districts.contains(&r.district_name)
                && sel.disaster_types.contains(&r.disaster_type)
        })
        .cloned()
        .collect()
}
