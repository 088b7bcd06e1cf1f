//! The `irquiz start` and `irquiz quiz` commands.

use std::io;

use anyhow::Result;

use irquiz_core::parser::validate_taxonomy;

use super::{load_setup, SessionOptions};
use crate::shell::{Screen, Shell};

pub fn execute(start: Screen, options: SessionOptions) -> Result<()> {
    let (config, taxonomy) = load_setup(options)?;

    for w in validate_taxonomy(&taxonomy) {
        tracing::warn!(phase = ?w.phase, "taxonomy: {}", w.message);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), taxonomy, config).run(start)
}
