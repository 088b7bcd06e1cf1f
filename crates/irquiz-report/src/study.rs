//! Study sheets for the "learn" screens.

use irquiz_core::model::{PhaseEntry, Taxonomy};

/// Description and example activities for one phase.
pub fn format_phase_details(entry: &PhaseEntry) -> String {
    let mut out = String::new();
    out.push_str(entry.phase.name());
    out.push('\n');
    out.push_str(&"=".repeat(entry.phase.name().len()));
    out.push_str("\n\nDescription:\n");
    out.push_str(&entry.description);
    out.push_str("\n\nExample Activities:\n");
    if entry.activities.is_empty() {
        out.push_str("  (none)\n");
    }
    for activity in &entry.activities {
        out.push_str(&format!("  - {activity}\n"));
    }
    out
}

/// Every phase's sheet, in canonical order, separated by blank lines.
pub fn format_study_guide(taxonomy: &Taxonomy) -> String {
    taxonomy
        .entries()
        .iter()
        .map(format_phase_details)
        .collect::<Vec<_>>()
        .join("\n")
}
