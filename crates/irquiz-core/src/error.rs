//! Taxonomy error types.
//!
//! Raised when building a [`Taxonomy`](crate::model::Taxonomy) from external
//! input. Everything past construction is total and never fails.

use thiserror::Error;

use crate::model::Phase;

/// Errors that can occur while building or parsing a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// A phase name did not match any of the six known phases.
    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    /// The same phase was listed more than once.
    #[error("duplicate phase: {0}")]
    DuplicatePhase(Phase),
}
