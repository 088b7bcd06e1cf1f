//! The state of one quiz attempt.
//!
//! A session owns a fixed, already-shuffled question list, a cursor into it,
//! and the answers recorded so far. Navigation moves the cursor only; answers
//! survive any amount of back-and-forth and are overwritten, never stacked.

use std::collections::BTreeMap;

use crate::model::{Phase, Question};

/// Mutable state of an in-progress or completed quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, Phase>,
}

impl QuizSession {
    /// Start a fresh session at the first question with no answers.
    pub fn start(questions: Vec<Question>) -> Self {
        tracing::debug!(questions = questions.len(), "quiz session started");
        Self {
            questions,
            current: 0,
            answers: BTreeMap::new(),
        }
    }

    /// The question under the cursor.
    ///
    /// # Panics
    ///
    /// Panics on an empty session. Callers must check [`is_empty`](Self::is_empty)
    /// before presenting a quiz.
    pub fn current_question(&self) -> &Question {
        assert!(!self.is_empty(), "current_question called on an empty quiz");
        &self.questions[self.current]
    }

    /// Record (or replace) the answer for the question under the cursor.
    ///
    /// # Panics
    ///
    /// Panics on an empty session.
    pub fn record_answer(&mut self, phase: Phase) {
        assert!(!self.is_empty(), "record_answer called on an empty quiz");
        self.answers.insert(self.current, phase);
    }

    /// Move to the next question. Does nothing on the last one.
    pub fn go_next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question. Does nothing on the first one.
    pub fn go_prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// The answer recorded for `index`, if any.
    pub fn answer_for(&self, index: usize) -> Option<Phase> {
        self.answers.get(&index).copied()
    }

    /// Position of the cursor (zero-based).
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// How many questions have an answer recorded.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> QuizSession {
        QuizSession::start(vec![
            Question::new("a", Phase::Preparation),
            Question::new("b", Phase::Containment),
            Question::new("c", Phase::Recovery),
        ])
    }

    #[test]
    fn starts_at_first_question_without_answers() {
        let session = three_questions();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question().activity, "a");
        assert_eq!(session.answered_count(), 0);
        assert!(session.is_first());
        assert!(!session.is_last());
        assert!((0..3).all(|i| session.answer_for(i).is_none()));
    }

    #[test]
    fn navigation_saturates() {
        let mut session = three_questions();
        session.go_prev();
        assert_eq!(session.current_index(), 0);

        session.go_next();
        session.go_next();
        assert!(session.is_last());
        session.go_next();
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_question().activity, "c");

        session.go_prev();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn reanswering_overwrites() {
        let mut session = three_questions();
        session.record_answer(Phase::Eradication);
        session.record_answer(Phase::Preparation);
        assert_eq!(session.answer_for(0), Some(Phase::Preparation));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn answers_survive_navigation() {
        let mut session = three_questions();
        session.go_next();
        session.record_answer(Phase::Containment);
        session.go_next();
        session.record_answer(Phase::LessonsLearned);

        session.go_prev();
        session.go_prev();
        session.go_next();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answer_for(1), Some(Phase::Containment));
        assert_eq!(session.answer_for(2), Some(Phase::LessonsLearned));
        assert_eq!(session.answer_for(0), None);
    }

    #[test]
    fn out_of_range_index_has_no_answer() {
        let session = three_questions();
        assert_eq!(session.answer_for(99), None);
    }

    #[test]
    fn single_question_is_first_and_last() {
        let mut session = QuizSession::start(vec![Question::new("only", Phase::Recovery)]);
        assert!(session.is_first());
        assert!(session.is_last());
        session.go_next();
        session.go_prev();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn empty_session_navigation_is_inert() {
        let mut session = QuizSession::start(vec![]);
        assert!(session.is_empty());
        session.go_next();
        session.go_prev();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answer_for(0), None);
    }

    #[test]
    #[should_panic(expected = "empty quiz")]
    fn current_question_on_empty_session_panics() {
        let session = QuizSession::start(vec![]);
        let _ = session.current_question();
    }

    #[test]
    #[should_panic(expected = "empty quiz")]
    fn record_answer_on_empty_session_panics() {
        let mut session = QuizSession::start(vec![]);
        session.record_answer(Phase::Preparation);
    }
}
