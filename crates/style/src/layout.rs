//! Row layout codes and the column widths they imply.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Width assigned to a column the layout code does not account for.
pub const AUTO_WIDTH: &str = "auto";

static LAYOUTS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("1", &["100%"][..]),
        ("2", &["50%", "50%"][..]),
        ("3", &["33.333%", "33.333%", "33.333%"][..]),
        ("4", &["25%", "25%", "25%", "25%"][..]),
        ("1_2", &["33.333%", "66.666%"][..]),
        ("2_1", &["66.666%", "33.333%"][..]),
        ("1_3", &["25%", "75%"][..]),
        ("3_1", &["75%", "25%"][..]),
        ("1_1_2", &["25%", "25%", "50%"][..]),
        ("2_1_1", &["50%", "25%", "25%"][..]),
        ("1_2_1", &["25%", "50%", "25%"][..]),
    ])
});

/// Whether `code` names one of the fixed layouts.
pub fn is_known_layout(code: &str) -> bool {
    LAYOUTS.contains_key(code)
}

/// Resolves a layout code to exactly `count` widths.
///
/// Known codes yield their fixed split; positions beyond the split get
/// [`AUTO_WIDTH`] and surplus split entries are dropped. Unknown codes divide
/// 100% evenly.
pub fn parse_column_layout(code: &str, count: usize) -> Vec<String> {
    match LAYOUTS.get(code) {
        Some(widths) => (0..count)
            .map(|i| widths.get(i).copied().unwrap_or(AUTO_WIDTH).to_string())
            .collect(),
        None => {
            let width = format_percent(100.0 / count.max(1) as f64);
            vec![width; count]
        }
    }
}

fn format_percent(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}
