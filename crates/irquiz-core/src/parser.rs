//! TOML taxonomy parser.
//!
//! Loads taxonomies from TOML files, writes them back out, and validates them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Phase, PhaseEntry, Taxonomy};

/// On-disk layout of a taxonomy file.
#[derive(Debug, Serialize, Deserialize)]
struct TomlTaxonomyFile {
    #[serde(default)]
    phases: Vec<TomlPhase>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlPhase {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    activities: Vec<String>,
}

/// Parse a single TOML file into a `Taxonomy`.
pub fn parse_taxonomy(path: &Path) -> Result<Taxonomy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read taxonomy file: {}", path.display()))?;

    parse_taxonomy_str(&content, path)
}

/// Parse a TOML string into a `Taxonomy`.
pub fn parse_taxonomy_str(content: &str, source_path: &Path) -> Result<Taxonomy> {
    let parsed: TomlTaxonomyFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let entries = parsed
        .phases
        .into_iter()
        .map(|p| {
            let phase: Phase = p
                .name
                .parse()
                .with_context(|| format!("in taxonomy {}", source_path.display()))?;
            Ok(PhaseEntry {
                phase,
                description: p.description,
                activities: p.activities,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let taxonomy = Taxonomy::new(entries)
        .with_context(|| format!("invalid taxonomy: {}", source_path.display()))?;

    tracing::debug!(
        phases = taxonomy.len(),
        activities = taxonomy.activity_count(),
        "loaded taxonomy from {}",
        source_path.display()
    );

    Ok(taxonomy)
}

/// Render a taxonomy in the same TOML layout `parse_taxonomy_str` accepts.
pub fn to_toml_string(taxonomy: &Taxonomy) -> Result<String> {
    let file = TomlTaxonomyFile {
        phases: taxonomy
            .entries()
            .iter()
            .map(|e| TomlPhase {
                name: e.phase.name().to_string(),
                description: e.description.clone(),
                activities: e.activities.clone(),
            })
            .collect(),
    };
    toml::to_string_pretty(&file).context("failed to serialize taxonomy")
}

/// A warning from taxonomy validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The phase concerned (if applicable).
    pub phase: Option<Phase>,
    /// Warning message.
    pub message: String,
}

/// Validate a taxonomy for common issues.
pub fn validate_taxonomy(taxonomy: &Taxonomy) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if taxonomy.activity_count() == 0 {
        warnings.push(ValidationWarning {
            phase: None,
            message: "taxonomy has no activities, quizzes will be empty".into(),
        });
    }

    for phase in Phase::ALL {
        if taxonomy.get(phase).is_none() {
            warnings.push(ValidationWarning {
                phase: Some(phase),
                message: format!("phase {phase} is missing"),
            });
        }
    }

    for entry in taxonomy.entries() {
        if entry.description.trim().is_empty() {
            warnings.push(ValidationWarning {
                phase: Some(entry.phase),
                message: "description is empty".into(),
            });
        }
        if entry.activities.is_empty() {
            warnings.push(ValidationWarning {
                phase: Some(entry.phase),
                message: "phase has no activities".into(),
            });
        }
        for (i, activity) in entry.activities.iter().enumerate() {
            if activity.trim().is_empty() {
                warnings.push(ValidationWarning {
                    phase: Some(entry.phase),
                    message: format!("activity {} is blank", i + 1),
                });
            }
        }
    }

    // The same text under two phases cannot be answered correctly twice.
    let mut seen: HashMap<&str, Phase> = HashMap::new();
    for entry in taxonomy.entries() {
        for activity in &entry.activities {
            let key = activity.trim();
            if key.is_empty() {
                continue;
            }
            if let Some(first) = seen.insert(key, entry.phase) {
                warnings.push(ValidationWarning {
                    phase: Some(entry.phase),
                    message: format!("duplicate activity (also under {first}): {key}"),
                });
            }
        }
    }

    warnings
}
