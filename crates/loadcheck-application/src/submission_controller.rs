//! SubmissionController - the submit lifecycle of an inspection form.
//!
//! # State machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──────▶ Succeeded ──reset delay──▶ Idle
//!                      │                       │
//!                      └──non-2xx / no reply──▶ Failed ──submit──▶ Submitting
//! ```
//!
//! A submit while `Submitting` is ignored. Entering `Submitting` cancels any
//! scheduled reset, so a stale timer can never clear a newer form.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use loadcheck_core::config::DEFAULT_RESET_DELAY_SECS;
use loadcheck_core::form::FormStore;
use loadcheck_core::submission::{
    SubmissionResult, SubmissionState, SubmissionTransport, Viewport, encode, interpret,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

/// Drives a [`FormStore`] through submission.
///
/// State changes are published on a watch channel; see [`subscribe`](Self::subscribe).
pub struct SubmissionController {
    store: Arc<FormStore>,
    transport: Arc<dyn SubmissionTransport>,
    viewport: Arc<dyn Viewport>,
    state: Arc<watch::Sender<SubmissionState>>,
    reset_delay: Duration,
    pending_reset: Mutex<Option<CancellationToken>>,
}

impl SubmissionController {
    pub fn new(
        store: Arc<FormStore>,
        transport: Arc<dyn SubmissionTransport>,
        viewport: Arc<dyn Viewport>,
    ) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            store,
            transport,
            viewport,
            state: Arc::new(state),
            reset_delay: Duration::from_secs(DEFAULT_RESET_DELAY_SECS),
            pending_reset: Mutex::new(None),
        }
    }

    /// Overrides how long a successful submission stays visible before the form is cleared.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Returns the current state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Returns a receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Submits the current form record.
    ///
    /// Returns [`SubmissionResult::Pending`] without contacting the transport
    /// when another submission is still in flight. Failures are recovered into
    /// [`SubmissionState::Failed`] and never returned as errors.
    pub async fn submit(&self) -> SubmissionResult {
        let started = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                return false;
            }
            *state = SubmissionState::Submitting;
            true
        });

        if !started {
            tracing::debug!("[SubmissionController] Submission already in flight, ignoring");
            return SubmissionResult::Pending;
        }

        self.cancel_pending_reset();

        let attempt_id = Uuid::new_v4();
        let span = tracing::info_span!("submission", %attempt_id);
        self.run_attempt().instrument(span).await
    }

    async fn run_attempt(&self) -> SubmissionResult {
        let mut in_flight = InFlight::new(&self.state);

        let record = self.store.get().await;
        let payload = encode(&record);
        tracing::info!(
            "[SubmissionController] Sending form ({} parts, {} files)",
            payload.parts.len(),
            payload.file_count()
        );

        let outcome = self.transport.send(payload).await;
        in_flight.disarm();

        match interpret(outcome) {
            Ok(()) => {
                tracing::info!("[SubmissionController] Form accepted");
                self.state.send_replace(SubmissionState::Succeeded);
                self.viewport.scroll_to_top();
                self.schedule_reset();
                SubmissionResult::Success
            }
            Err(failure) => {
                tracing::warn!("[SubmissionController] Submission failed: {:?}", failure);
                let message = failure.user_message();
                self.state.send_replace(SubmissionState::Failed {
                    message: message.clone(),
                });
                self.viewport.scroll_to_top();
                SubmissionResult::Failure(message)
            }
        }
    }

    /// Clears the form and returns to `Idle` once the reset delay has passed,
    /// unless cancelled first.
    fn schedule_reset(&self) {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending_reset().replace(token.clone()) {
            previous.cancel();
        }

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("[SubmissionController] Scheduled reset cancelled");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            // A submit entering `Submitting` makes the transition fail, and its
            // snapshot waits on the store lock held here.
            let cleared = store
                .reset_if(|| {
                    !token.is_cancelled()
                        && state.send_if_modified(|current| {
                            if *current != SubmissionState::Succeeded {
                                return false;
                            }
                            *current = SubmissionState::Idle;
                            true
                        })
                })
                .await;

            if cleared {
                tracing::info!("[SubmissionController] Form reset after successful submission");
            }
        });
    }

    fn cancel_pending_reset(&self) {
        if let Some(token) = self.pending_reset().take() {
            token.cancel();
        }
    }

    /// Cancels any scheduled reset. The form and state are left as they are.
    pub fn shutdown(&self) {
        self.cancel_pending_reset();
    }

    fn pending_reset(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.cancel_pending_reset();
    }
}

/// Returns the state to `Idle` if a submission future is dropped mid-flight.
struct InFlight<'a> {
    state: &'a watch::Sender<SubmissionState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<SubmissionState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("[SubmissionController] Submission abandoned before completion");
        self.state.send_if_modified(|state| {
            if !state.is_submitting() {
                return false;
            }
            *state = SubmissionState::Idle;
            true
        });
    }
}
