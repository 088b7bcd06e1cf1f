//! Question generation.
//!
//! Flattens a taxonomy into one question per (phase, activity) pair and
//! shuffles the result.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, Taxonomy};

/// Generate a freshly shuffled question set using the thread-local RNG.
///
/// An empty taxonomy produces an empty question set.
pub fn generate(taxonomy: &Taxonomy) -> Vec<Question> {
    generate_with(taxonomy, &mut rand::rng())
}

/// Generate a shuffled question set from a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(taxonomy: &Taxonomy, rng: &mut R) -> Vec<Question> {
    let mut questions: Vec<Question> = taxonomy
        .entries()
        .iter()
        .flat_map(|entry| {
            entry
                .activities
                .iter()
                .map(move |activity| Question::new(activity.clone(), entry.phase))
        })
        .collect();

    questions.shuffle(rng);

    tracing::debug!(questions = questions.len(), "generated question set");
    questions
}
