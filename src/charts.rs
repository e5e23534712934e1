// Console rendering of the two dashboard charts.
//
// The grouped summaries are handed to these renderers the same way a
// graphical frontend would receive them; here they become a horizontal
// bar chart and a percentage breakdown.
use crate::util::format_int;
use std::collections::BTreeMap;

const BAR_WIDTH: usize = 40;

/// Render a horizontal bar chart, one labeled bar per category, scaled so
/// the largest value fills the full bar width.
pub fn bar_chart(title: &str, grouped: &BTreeMap<String, u64>) -> String {
    let mut out = format!("{}\n", title);
    if grouped.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }
    let max_value = grouped.values().copied().max().unwrap_or(0).max(1);
    let label_width = grouped.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (label, value) in grouped {
        let len = ((*value as f64 / max_value as f64) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<width$}  {} {}\n",
            label,
            "#".repeat(len),
            format_int(*value),
            width = label_width
        ));
    }
    out
}

/// Render a percentage breakdown of each category's share of the total,
/// the console equivalent of a pie chart.
pub fn distribution(title: &str, grouped: &BTreeMap<String, u64>) -> String {
    let mut out = format!("{}\n", title);
    if grouped.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }
    let total: u64 = grouped.values().sum();
    let label_width = grouped.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (label, value) in grouped {
        let pct = if total == 0 {
            0.0
        } else {
            (*value as f64 / total as f64) * 100.0
        };
        out.push_str(&format!(
            "{:<width$}  {:>6} ({:>5.1}%)\n",
            label,
            format_int(*value),
            pct,
            width = label_width
        ));
    }
    out
}
