//! CLI output formatting for every command.
//!
//! # Section-First Display
//!
//! Output is organized around the page's sections, in `sectionOrder`, because
//! that is what an editor thinks in. Each section is one header line with its
//! position, key, and item count; details (skips, warnings) follow as indented
//! context lines.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Edits
//! 001 set franchise.contactPhone
//! 002 add default item to menu.items
//!
//! Sections
//! 001 hero (3 items)
//! 002 reviews (4 items)
//! 003 brandStory
//!     skipped: unknown section
//!
//! Rendered 2 sections, skipped 1 → dist/index.html
//! ```
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 hero (3 items)
//! 002 menu (6 items)
//!
//! Warnings
//!     section 'reviews' is not listed and will not render
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::contact::Submission;
use crate::content::{OrderIssue, SectionKey, SiteContent};
use crate::generate::GenerateReport;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a section header: position + key, with item count when it has a list.
///
/// ```text
/// 001 hero (3 items)
/// 002 franchise (1 item)
/// 003 brandStory
/// ```
fn section_line(index: usize, key: &SectionKey, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 item)", format_index(index), key),
        Some(n) => format!("{} {} ({} items)", format_index(index), key, n),
        None => format!("{} {}", format_index(index), key),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Edits
// ============================================================================

/// Format the steps an edit script applied. Empty when there were none.
pub fn format_edit_output(applied: &[String]) -> Vec<String> {
    if applied.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Edits".to_string()];
    for (i, step) in applied.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), step));
    }
    lines.push(String::new());
    lines
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, section) in report.sections.iter().enumerate() {
        lines.push(section_line(i + 1, &section.key, section.item_count));
        if !section.rendered {
            lines.push(format!("{}skipped: unknown section", indent(1)));
        }
    }

    let skipped = report.skipped().count();
    let rendered = report.sections.len() - skipped;
    lines.push(String::new());
    let summary = if skipped > 0 {
        format!("Rendered {}, skipped {}", plural(rendered, "section"), skipped)
    } else {
        format!("Rendered {}", plural(rendered, "section"))
    };
    lines.push(format!("{} → {}", summary, report.output_path.display()));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(content: &SiteContent) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, key) in content.section_order.iter().enumerate() {
        lines.push(section_line(i + 1, key, content.item_count(key)));
    }

    let issues = content.order_issues();
    lines.push(String::new());
    if issues.is_empty() {
        lines.push("No issues".to_string());
    } else {
        lines.push("Warnings".to_string());
        for issue in &issues {
            lines.push(format!("{}{}", indent(1), issue));
        }
    }
    lines
}

pub fn print_check_output(content: &SiteContent) {
    for line in format_check_output(content) {
        println!("{}", line);
    }
}

/// Whether `check` should exit non-zero. Only unknown keys count as errors.
pub fn has_unknown_sections(content: &SiteContent) -> bool {
    content
        .order_issues()
        .iter()
        .any(|issue| matches!(issue, OrderIssue::Unknown(_)))
}

// ============================================================================
// Consult
// ============================================================================

pub fn format_consult_output(submission: &Submission) -> Vec<String> {
    match submission {
        Submission::Sent(message) => {
            let mut lines = vec![
                format!("To: {}", message.to),
                format!("Subject: {}", message.subject),
                String::new(),
            ];
            lines.extend(message.body.lines().map(|l| format!("{}{}", indent(1), l)));
            lines.push(String::new());
            lines.push(message.mailto_url());
            lines
        }
        Submission::Blocked(missing) => vec![format!("Not sent: {}", missing)],
    }
}

pub fn print_consult_output(submission: &Submission) {
    for line in format_consult_output(submission) {
        println!("{}", line);
    }
}
