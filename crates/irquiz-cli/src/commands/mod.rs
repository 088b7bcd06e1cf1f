pub mod init;
pub mod learn;
pub mod quiz;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use irquiz_core::config::{load_config_from, QuizConfig};
use irquiz_core::parser::parse_taxonomy;
use irquiz_core::Taxonomy;

/// Options shared by every command that needs a taxonomy.
#[derive(Debug, Args)]
pub struct SessionOptions {
    /// Taxonomy TOML file (defaults to the built-in SANS data)
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed shuffle seed for a reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Resolve configuration and load the taxonomy it points at.
///
/// Command-line flags win over the config file.
pub fn load_setup(options: SessionOptions) -> Result<(QuizConfig, Taxonomy)> {
    let mut config = load_config_from(options.config.as_deref())?;
    if options.taxonomy.is_some() {
        config.taxonomy = options.taxonomy;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    let taxonomy = match &config.taxonomy {
        Some(path) => parse_taxonomy(path)?,
        None => Taxonomy::reference(),
    };
    Ok((config, taxonomy))
}
