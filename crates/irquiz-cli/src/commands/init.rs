//! The `irquiz init` command.

use std::path::Path;

use anyhow::Result;

use irquiz_core::parser::to_toml_string;
use irquiz_core::Taxonomy;

const CONFIG_PATH: &str = "irquiz.toml";
const TAXONOMY_DIR: &str = "taxonomies";
const TAXONOMY_PATH: &str = "taxonomies/sans-incident-response.toml";

pub fn execute() -> Result<()> {
    // Create irquiz.toml
    if Path::new(CONFIG_PATH).exists() {
        println!("{CONFIG_PATH} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_PATH, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_PATH}");
    }

    // Write out the built-in taxonomy so it can be edited
    std::fs::create_dir_all(TAXONOMY_DIR)?;
    if Path::new(TAXONOMY_PATH).exists() {
        println!("{TAXONOMY_PATH} already exists, skipping.");
    } else {
        std::fs::write(TAXONOMY_PATH, to_toml_string(&Taxonomy::reference())?)?;
        println!("Created {TAXONOMY_PATH}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {TAXONOMY_PATH} to add your own activities");
    println!("  2. Run: irquiz validate --taxonomy {TAXONOMY_PATH}");
    println!("  3. Run: irquiz quiz --taxonomy {TAXONOMY_PATH}");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# irquiz configuration

# Taxonomy to quiz on. Leave unset to use the built-in SANS phases.
# taxonomy = "taxonomies/sans-incident-response.toml"

# Where results are saved by default.
output_dir = "."
export_file_name = "ir_quiz_results.txt"

# Fixed question order, handy for classroom runs.
# seed = 42
"#;
