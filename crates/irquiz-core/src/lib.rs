//! irquiz-core: the incident-response quiz engine.
//!
//! This crate defines the phase taxonomy, question generation, quiz session
//! state and scoring that the rest of irquiz builds on.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod model;
pub mod parser;
pub mod reference;
pub mod session;

pub use error::TaxonomyError;
pub use evaluator::{evaluate, ScoreReport};
pub use generator::generate;
pub use model::{Phase, PhaseEntry, Question, Taxonomy};
pub use session::QuizSession;
