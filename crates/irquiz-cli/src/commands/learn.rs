//! The `irquiz learn` command.

use anyhow::Result;

use irquiz_core::Phase;
use irquiz_report::study::{format_phase_details, format_study_guide};

use super::{load_setup, SessionOptions};

pub fn execute(phase: Option<String>, options: SessionOptions) -> Result<()> {
    let (_, taxonomy) = load_setup(options)?;

    match phase {
        Some(name) => {
            let phase: Phase = name.parse()?;
            let entry = taxonomy
                .get(phase)
                .ok_or_else(|| anyhow::anyhow!("phase {phase} is not in this taxonomy"))?;
            print!("{}", format_phase_details(entry));
        }
        None if taxonomy.is_empty() => {
            println!("The taxonomy has no phases.");
        }
        None => print!("{}", format_study_guide(&taxonomy)),
    }

    Ok(())
}
