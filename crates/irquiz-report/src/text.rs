//! Plain-text results report.
//!
//! Renders a [`ScoreReport`] straight from its structured data. The output is
//! deterministic for a given report and timestamp, and this module does no I/O.

use chrono::NaiveDateTime;

use irquiz_core::evaluator::ScoreReport;

/// Timestamp layout used in the report header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TITLE: &str = "Incident Response Quiz Results";
const CLEAN_PASS: &str = "Excellent work! All answers were correct.";

/// `Your Score: X out of Y (P.PP%)`
pub fn score_line(report: &ScoreReport) -> String {
    format!(
        "Your Score: {} out of {} ({:.2}%)",
        report.total_correct, report.total_questions, report.percentage
    )
}

/// The clean-pass message, or the weak phases in canonical order.
pub fn recommendation_line(report: &ScoreReport) -> String {
    if report.is_clean_pass() {
        return CLEAN_PASS.to_string();
    }
    let phases: Vec<&str> = report.weak_phases.iter().map(|p| p.name()).collect();
    format!("Study Recommendation(s): {}", phases.join(", "))
}

/// One review block per question, in session order.
pub fn review_blocks(report: &ScoreReport) -> Vec<String> {
    report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Q{}: {}\nYour Answer: {}\nCorrect Answer: {}\nStatus: {}",
                i + 1,
                r.question.activity,
                r.submitted_label(),
                r.question.correct_phase,
                if r.is_correct { "Correct" } else { "Incorrect" }
            )
        })
        .collect()
}

/// Render the full results document.
pub fn format_report(report: &ScoreReport, generated_at: NaiveDateTime) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Generated on: {}", generated_at.format(TIMESTAMP_FORMAT)),
        "-".repeat(30),
        score_line(report),
        recommendation_line(report),
        "\n--- Detailed Review ---\n".to_string(),
    ];
    lines.extend(review_blocks(report));
    lines.join("\n")
}
