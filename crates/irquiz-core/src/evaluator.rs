//! Quiz scoring and weak-phase aggregation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{Phase, Question};
use crate::session::QuizSession;

/// Label used wherever an unanswered question is shown.
pub const NOT_ANSWERED: &str = "Not Answered";

/// Outcome for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: Question,
    /// What the user picked, `None` if the question was skipped.
    pub submitted: Option<Phase>,
    pub is_correct: bool,
}

impl QuestionResult {
    /// The submitted phase name, or [`NOT_ANSWERED`].
    pub fn submitted_label(&self) -> &'static str {
        self.submitted.map_or(NOT_ANSWERED, Phase::name)
    }
}

/// Correct/missed counts for questions whose answer is a given phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTally {
    pub correct: u32,
    pub missed: u32,
}

/// The evaluated outcome of a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Per-question results, in session order.
    pub results: Vec<QuestionResult>,
    pub total_correct: usize,
    pub total_questions: usize,
    /// Share of correct answers, 0–100. Zero for an empty quiz.
    pub percentage: f64,
    /// Phases tied for the most misses, in canonical order.
    pub weak_phases: BTreeSet<Phase>,
    /// Tallies keyed by the correct phase of each question.
    pub per_phase: BTreeMap<Phase, PhaseTally>,
}

impl ScoreReport {
    /// True when no answer was wrong or missing.
    pub fn is_clean_pass(&self) -> bool {
        self.weak_phases.is_empty()
    }
}

/// Score a session.
///
/// Unanswered questions count as incorrect. Misses are attributed to the
/// phase the activity belongs to, not to the phase that was picked.
pub fn evaluate(session: &QuizSession) -> ScoreReport {
    let mut per_phase: BTreeMap<Phase, PhaseTally> = BTreeMap::new();

    let results: Vec<QuestionResult> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let submitted = session.answer_for(i);
            let is_correct = submitted == Some(question.correct_phase);

            let tally = per_phase.entry(question.correct_phase).or_default();
            if is_correct {
                tally.correct += 1;
            } else {
                tally.missed += 1;
            }

            QuestionResult {
                question: question.clone(),
                submitted,
                is_correct,
            }
        })
        .collect();

    let total_questions = results.len();
    let total_correct = results.iter().filter(|r| r.is_correct).count();
    let percentage = if total_questions > 0 {
        total_correct as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    };

    let weak_phases = weakest_phases(&per_phase);

    tracing::debug!(
        total_correct,
        total_questions,
        weak = weak_phases.len(),
        "evaluated quiz session"
    );

    ScoreReport {
        results,
        total_correct,
        total_questions,
        percentage,
        weak_phases,
        per_phase,
    }
}

/// Every phase sharing the highest non-zero miss count.
fn weakest_phases(per_phase: &BTreeMap<Phase, PhaseTally>) -> BTreeSet<Phase> {
    let max_missed = per_phase.values().map(|t| t.missed).max().unwrap_or(0);
    if max_missed == 0 {
        return BTreeSet::new();
    }
    per_phase
        .iter()
        .filter(|(_, t)| t.missed == max_missed)
        .map(|(phase, _)| *phase)
        .collect()
}
