//! Scan Orchestrator
//!
//! Owns the scanning state machine, the current verdict and the session
//! history, and sequences backend call → normalisation → history update.
//!
//! ```text
//! Idle ──scan/scan_demo──▶ Scanning ──resolved──▶ Resolved
//!   ▲                          │                      │
//!   │                          └──────failed──▶ Failed│
//!   └──────────────── clear ◀─────────────────────────┘
//! ```
//!
//! A new command from any state other than `Scanning` starts a fresh attempt.
//!
//! ## Single-flight policy
//!
//! At most one attempt is outstanding. A `scan` or `scan_demo` issued while
//! another attempt is `Scanning` is rejected with `ScanError::Busy`; nothing
//! is queued and the pending attempt's state is left untouched. The check and
//! the transition into `Scanning` happen under one lock, so the policy holds
//! no matter how callers interleave.

use crate::backend::api::{BackendClient, BackendConfig, BackendResult, ProductBackend};
use crate::core::validation::validate_product_code;
use crate::scanner::error::{
    ScanError, ScanResult, DEFAULT_FAILURE_MESSAGE, UNKNOWN_FAILURE_MESSAGE,
};
use crate::scanner::history::HistoryBuffer;
use crate::scanner::normalizer::{demo_product, normalize};
use crate::scanner::types::{ScanSnapshot, ScanState, VerifiedProduct};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mutable session state, guarded by the orchestrator's lock
#[derive(Debug, Default)]
struct Session {
    state: ScanState,
    current_result: Option<VerifiedProduct>,
    error: Option<String>,
    history: HistoryBuffer,
}

impl Session {
    fn transition(&mut self, next: ScanState) {
        log::debug!("Scan state {} -> {}", self.state, next);
        self.state = next;
    }
}

/// Scan-verification orchestrator for a single user session
pub struct ScanOrchestrator {
    backend: Arc<dyn ProductBackend>,
    session: Mutex<Session>,
}

impl std::fmt::Debug for ScanOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOrchestrator")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ScanOrchestrator {
    /// Create an orchestrator over any backend implementation
    pub fn new(backend: Arc<dyn ProductBackend>) -> Self {
        Self {
            backend,
            session: Mutex::new(Session::default()),
        }
    }

    /// Create an orchestrator backed by the HTTP client
    pub fn with_config(config: BackendConfig) -> BackendResult<Self> {
        let client = BackendClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    // Never held across an await
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Verify a decoded product code
    ///
    /// The code is trimmed; an empty code fails with `ScanError::Validation`
    /// before any state change or backend call.
    pub async fn scan(&self, code: &str) -> ScanResult<VerifiedProduct> {
        let code = validate_product_code(code).map_err(|message| {
            log::debug!("Rejected product code: {}", message);
            ScanError::Validation { message }
        })?;

        let attempt = self.begin("scan")?;
        log::debug!("Verifying product '{}'", code);

        let outcome = match self.backend.verify(&code).await {
            Ok(envelope) => normalize(&envelope, false).ok_or_else(|| {
                ScanError::NotFoundOrInvalid {
                    message: envelope
                        .message()
                        .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                        .to_string(),
                }
            }),
            Err(error) => Err(ScanError::from(error)),
        };

        attempt.finish(outcome)
    }

    /// Produce the fixed demo verdict without a backend call
    ///
    /// Succeeds from every state except `Scanning`, where the single-flight
    /// policy rejects it.
    pub async fn scan_demo(&self) -> ScanResult<VerifiedProduct> {
        let attempt = self.begin("demo scan")?;
        attempt.finish(Ok(demo_product()))
    }

    /// Single entry point for the capture widget
    ///
    /// No code at all runs the demo path; a present code, even a blank one,
    /// is verified.
    pub async fn scan_and_verify(&self, code: Option<&str>) -> ScanResult<VerifiedProduct> {
        match code {
            Some(code) => self.scan(code).await,
            None => self.scan_demo().await,
        }
    }

    /// Drop the current verdict and error and return to `Idle`
    ///
    /// History is kept. While an attempt is in flight only the displayed
    /// verdict and error are cleared; the state stays `Scanning` until that
    /// attempt resolves.
    pub fn clear(&self) {
        let mut session = self.lock();
        session.current_result = None;
        session.error = None;
        if session.state != ScanState::Scanning {
            session.transition(ScanState::Idle);
        }
    }

    pub fn state(&self) -> ScanState {
        self.lock().state
    }

    pub fn is_scanning(&self) -> bool {
        self.state() == ScanState::Scanning
    }

    pub fn current_result(&self) -> Option<VerifiedProduct> {
        self.lock().current_result.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Session history, most recent first
    pub fn history(&self) -> Vec<VerifiedProduct> {
        self.lock().history.to_vec()
    }

    /// Consistent copy of the whole read model
    pub fn snapshot(&self) -> ScanSnapshot {
        let session = self.lock();
        ScanSnapshot {
            state: session.state,
            current_result: session.current_result.clone(),
            error: session.error.clone(),
            history: session.history.to_vec(),
        }
    }

    // Enter Scanning, or reject if an attempt is already in flight
    fn begin(&self, command: &str) -> ScanResult<Attempt<'_>> {
        let mut session = self.lock();
        if session.state == ScanState::Scanning {
            log::warn!("Rejected {}: a scan is already in progress", command);
            return Err(ScanError::Busy);
        }
        session.error = None;
        session.transition(ScanState::Scanning);
        Ok(Attempt {
            orchestrator: self,
            finished: false,
        })
    }
}

/// An in-flight attempt
///
/// Leaves `Scanning` exactly once: through `finish`, or on drop if the
/// attempt's future is cancelled or unwinds.
struct Attempt<'a> {
    orchestrator: &'a ScanOrchestrator,
    finished: bool,
}

impl Attempt<'_> {
    fn finish(mut self, outcome: ScanResult<VerifiedProduct>) -> ScanResult<VerifiedProduct> {
        self.finished = true;
        let mut session = self.orchestrator.lock();

        match &outcome {
            Ok(product) => {
                log::info!(
                    "Product '{}' resolved as {}",
                    product.product_id,
                    product.status
                );
                session.current_result = Some(product.clone());
                session.error = None;
                session.history.push(product.clone());
                session.transition(ScanState::Resolved);
            }
            Err(error) => {
                log::warn!("Scan failed ({}): {}", error.kind(), error);
                session.current_result = None;
                session.error = Some(error.to_string());
                session.transition(ScanState::Failed);
            }
        }

        outcome
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let message = if std::thread::panicking() {
            UNKNOWN_FAILURE_MESSAGE
        } else {
            "Scan was cancelled before completing"
        };
        log::warn!("Scan abandoned: {}", message);

        let mut session = self.orchestrator.lock();
        session.current_result = None;
        session.error = Some(message.to_string());
        session.transition(ScanState::Failed);
    }
}
