//! irquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level irquiz configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// Taxonomy file to quiz on. The built-in reference data is used when unset.
    pub taxonomy: Option<PathBuf>,
    /// Directory the default export path is resolved against.
    pub output_dir: PathBuf,
    /// Default file name offered when saving results.
    pub export_file_name: String,
    /// Fixed shuffle seed, for reproducible question order.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            taxonomy: None,
            output_dir: PathBuf::from("."),
            export_file_name: "ir_quiz_results.txt".to_string(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Where results are saved unless the user picks another path.
    pub fn default_export_path(&self) -> PathBuf {
        self.output_dir.join(&self.export_file_name)
    }
}

/// On-disk layout of a config file. Unset keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    taxonomy: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    export_file_name: Option<String>,
    seed: Option<u64>,
}

impl ConfigFile {
    /// Relative paths in the file are relative to the directory holding it.
    fn into_config(self, base: &Path) -> QuizConfig {
        let defaults = QuizConfig::default();
        QuizConfig {
            taxonomy: self.taxonomy.map(|p| base.join(p)),
            output_dir: self
                .output_dir
                .map(|p| base.join(p))
                .unwrap_or(defaults.output_dir),
            export_file_name: self.export_file_name.unwrap_or(defaults.export_file_name),
            seed: self.seed,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `irquiz.toml` in the current directory
/// 2. `~/.config/irquiz/config.toml`
///
/// Relative `taxonomy` and `output_dir` values from a file are resolved
/// against that file's directory. Environment variable overrides
/// (`IRQUIZ_TAXONOMY`, `IRQUIZ_OUTPUT_DIR`) stay relative to the working
/// directory.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("irquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let file = toml::from_str::<ConfigFile>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            file.into_config(path.parent().unwrap_or(Path::new("")))
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

fn apply_env_overrides(config: &mut QuizConfig) {
    if let Some(taxonomy) = non_empty_env("IRQUIZ_TAXONOMY") {
        config.taxonomy = Some(PathBuf::from(taxonomy));
    }
    if let Some(dir) = non_empty_env("IRQUIZ_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("irquiz"))
}
