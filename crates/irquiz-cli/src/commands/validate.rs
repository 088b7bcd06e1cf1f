//! The `irquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use irquiz_core::parser::{parse_taxonomy, validate_taxonomy};

pub fn execute(taxonomy_path: PathBuf) -> Result<()> {
    let taxonomy = parse_taxonomy(&taxonomy_path)?;

    println!(
        "Taxonomy: {} ({} phases, {} activities)",
        taxonomy_path.display(),
        taxonomy.len(),
        taxonomy.activity_count()
    );

    let warnings = validate_taxonomy(&taxonomy);
    for w in &warnings {
        let prefix = w
            .phase
            .map(|p| format!("  [{p}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Taxonomy valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
