use colored::Colorize;
use loadcheck_core::catalog::{
    FIELDS, FieldSpec, evidence_label, question_for_answer, question_for_evidence,
};

pub fn list() {
    for line in render() {
        println!("{line}");
    }
}

/// Renders the form in display order. Each evidence list is indented under
/// the question it supports.
fn render() -> Vec<String> {
    let mut lines = Vec::new();

    for spec in FIELDS.iter() {
        // Rendered together with its question
        if question_for_evidence(spec.key).is_some() {
            continue;
        }

        match question_for_answer(spec.key) {
            Some(question) => {
                push_field(&mut lines, spec, "", question.prompt);
                let label = evidence_label(question.prompt);
                push_field(&mut lines, question.evidence.spec(), "    ", &label);
            }
            None => push_field(&mut lines, spec, "", spec.label),
        }
    }

    lines
}

fn push_field(lines: &mut Vec<String>, spec: &FieldSpec, indent: &str, label: &str) {
    let marker = if spec.required { "*" } else { " " };
    let kind = match spec.max_files {
        Some(max) => format!("{} (max {})", spec.kind, max),
        None => spec.kind.to_string(),
    };
    lines.push(format!(
        "{indent}{} {:<32} {:<18} {}",
        marker.red(),
        spec.key.as_str(),
        kind,
        label
    ));

    let options = spec.kind.options();
    if !options.is_empty() {
        lines.push(format!(
            "{indent}  {:<32} {}",
            "",
            options.join(" | ").dimmed()
        ));
    }
}
