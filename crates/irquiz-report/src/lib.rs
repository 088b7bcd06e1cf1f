//! irquiz-report: result exports and study material rendering.
//!
//! Turns score reports into the plain-text document users save after a quiz
//! (or JSON, for tooling), and phase tables into study sheets.

pub mod export;
pub mod study;
pub mod text;

pub use export::{write_report, ExportFormat};
pub use text::format_report;
