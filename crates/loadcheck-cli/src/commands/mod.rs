pub mod catalog;
pub mod check;
pub mod preview;
pub mod submit;

use colored::Colorize;
use loadcheck_core::validation::ValidationIssue;

/// Prints validation issues, one per line. Returns `true` if there were any.
pub fn print_issues(issues: &[ValidationIssue]) -> bool {
    for issue in issues {
        eprintln!("{} {}", "warning:".yellow().bold(), issue);
    }
    !issues.is_empty()
}
