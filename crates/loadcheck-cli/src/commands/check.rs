use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use loadcheck_core::validation::validate;
use loadcheck_infrastructure::load_record;

use super::print_issues;

pub async fn run(sheet: &Path) -> Result<()> {
    let record = load_record(sheet)
        .await
        .with_context(|| format!("Failed to load answer sheet {}", sheet.display()))?;

    let issues = validate(&record);
    if print_issues(&issues) {
        bail!("{} issue(s) found in {}", issues.len(), sheet.display());
    }

    println!("{}", format!("{} is complete", sheet.display()).green());
    Ok(())
}
