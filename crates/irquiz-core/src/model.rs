//! Core data model types for irquiz.
//!
//! The taxonomy is a static table of incident-response phases, each with a
//! description and an ordered list of example activities. Questions pair one
//! of those activities with the phase it belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaxonomyError;

/// One stage of the incident-response lifecycle.
///
/// Declaration order is the canonical phase order. It drives the order of
/// taxonomy entries, answer options and study recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    Preparation,
    Identification,
    Containment,
    Eradication,
    Recovery,
    #[serde(rename = "Lessons Learned")]
    LessonsLearned,
}

impl Phase {
    /// All phases in canonical order.
    pub const ALL: [Phase; 6] = [
        Phase::Preparation,
        Phase::Identification,
        Phase::Containment,
        Phase::Eradication,
        Phase::Recovery,
        Phase::LessonsLearned,
    ];

    /// Human-readable name, as shown to the user and written to reports.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Preparation => "Preparation",
            Phase::Identification => "Identification",
            Phase::Containment => "Containment",
            Phase::Eradication => "Eradication",
            Phase::Recovery => "Recovery",
            Phase::LessonsLearned => "Lessons Learned",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Word separators (space, hyphen, underscore) collapse to one space.
        let normalized = s
            .trim()
            .split(|c: char| matches!(c, ' ' | '-' | '_'))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Phase::ALL
            .into_iter()
            .find(|phase| {
                let name = phase.name().to_lowercase();
                normalized == name || normalized == name.replace(' ', "")
            })
            .ok_or_else(|| TaxonomyError::UnknownPhase(s.trim().to_string()))
    }
}

/// A phase together with its study material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEntry {
    /// Which phase this entry describes.
    pub phase: Phase,
    /// What the phase is about.
    pub description: String,
    /// Example activities, in presentation order.
    #[serde(default)]
    pub activities: Vec<String>,
}

impl PhaseEntry {
    pub fn new(
        phase: Phase,
        description: impl Into<String>,
        activities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            phase,
            description: description.into(),
            activities: activities.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable table of phases, kept in canonical phase order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    entries: Vec<PhaseEntry>,
}

impl Taxonomy {
    /// Build a taxonomy from entries given in any order.
    ///
    /// Entries are sorted into canonical phase order. Any subset of the six
    /// phases is accepted, but each phase may appear only once.
    pub fn new(mut entries: Vec<PhaseEntry>) -> Result<Self, TaxonomyError> {
        entries.sort_by_key(|e| e.phase);
        if let Some(pair) = entries.windows(2).find(|w| w[0].phase == w[1].phase) {
            return Err(TaxonomyError::DuplicatePhase(pair[0].phase));
        }
        Ok(Self { entries })
    }

    /// Caller guarantees canonical order and unique phases.
    pub(crate) fn from_sorted_unchecked(entries: Vec<PhaseEntry>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].phase < w[1].phase));
        Self { entries }
    }

    /// Entries in canonical phase order.
    pub fn entries(&self) -> &[PhaseEntry] {
        &self.entries
    }

    /// Phases present in this taxonomy, in canonical order.
    pub fn phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.entries.iter().map(|e| e.phase)
    }

    /// Look up the entry for a phase.
    pub fn get(&self, phase: Phase) -> Option<&PhaseEntry> {
        self.entries.iter().find(|e| e.phase == phase)
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of activities across all phases.
    pub fn activity_count(&self) -> usize {
        self.entries.iter().map(|e| e.activities.len()).sum()
    }
}

/// A quiz item: which phase does this activity belong to?
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The activity text shown to the user.
    pub activity: String,
    /// The phase the activity belongs to.
    pub correct_phase: Phase,
}

impl Question {
    pub fn new(activity: impl Into<String>, correct_phase: Phase) -> Self {
        Self {
            activity: activity.into(),
            correct_phase,
        }
    }
}
