use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use loadcheck_application::SubmissionController;
use loadcheck_core::form::FormStore;
use loadcheck_core::submission::{Banner, SubmissionResult, SubmissionState, Viewport};
use loadcheck_core::validation::validate;
use loadcheck_infrastructure::{ConfigService, fill_store};
use loadcheck_interaction::FormspreeTransport;

use super::print_issues;

/// Terminal stand-in for scrolling the form back to its banner.
struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn scroll_to_top(&self) {
        println!("{}", "─".repeat(60).dimmed());
    }
}

fn print_banner(state: &SubmissionState) {
    match state.banner() {
        Some(Banner::Success { message }) => println!("{}", message.green().bold()),
        Some(Banner::Error { title, detail }) => {
            eprintln!("{}", title.red().bold());
            eprintln!("{}", detail.red());
        }
        None => {}
    }
}

pub async fn run(sheet: &Path, endpoint: Option<String>, strict: bool) -> Result<()> {
    let mut config = ConfigService::new()
        .load()
        .context("Failed to load configuration")?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    let store = Arc::new(FormStore::new());
    fill_store(sheet, &store)
        .await
        .with_context(|| format!("Failed to load answer sheet {}", sheet.display()))?;

    let issues = validate(&store.get().await);
    if print_issues(&issues) && strict {
        bail!("Not sending: {} issue(s) found", issues.len());
    }

    let transport = FormspreeTransport::with_timeout(&config.endpoint, config.request_timeout())
        .context("Failed to create HTTP transport")?;
    println!("Sending to {}", transport.endpoint());

    let controller = SubmissionController::new(
        Arc::clone(&store),
        Arc::new(transport),
        Arc::new(TerminalViewport),
    )
    .with_reset_delay(config.reset_delay());
    let mut state = controller.subscribe();

    let result = controller.submit().await;
    print_banner(&controller.state());

    match result {
        SubmissionResult::Success => {
            state
                .wait_for(|s| *s == SubmissionState::Idle)
                .await
                .context("Controller stopped before the form was reset")?;
            println!("{}", "Form cleared".dimmed());
            Ok(())
        }
        SubmissionResult::Failure(message) => bail!("Submission failed: {message}"),
        SubmissionResult::Pending => bail!("Another submission is already in flight"),
    }
}
