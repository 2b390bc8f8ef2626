//! Application state and core logic

use crate::backend::{ApiError, CourseApi, CourseClient, CoursePayload};
use crate::config::FormConfig;
use crate::state::{
    validate, AppState, FocusTarget, Notice, SubmissionOutcome, SubmissionPhase, FAILURE_MESSAGE,
    IN_FLIGHT_MESSAGE, QUIT_IN_FLIGHT_MESSAGE, SUCCESS_MESSAGE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Course backend
    api: Arc<dyn CourseApi>,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Result of the request in flight, if any
    pending: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(config: &FormConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        let client = CourseClient::new(endpoint.clone(), config.request_timeout())?;
        tracing::info!("course form ready, posting to {endpoint}");
        Ok(Self::with_api(Arc::new(client), endpoint))
    }

    /// Create an App over any backend implementation
    pub fn with_api(api: Arc<dyn CourseApi>, endpoint: String) -> Self {
        Self {
            state: AppState::default(),
            api,
            endpoint,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // A notice blocks the form until dismissed
        if self.state.current_notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('n') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.state.add_module()
            }
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.state.form_backspace(),
            // Unbound chords are not text
            KeyCode::Char(c) if !chord => self.state.form_input_char(c),
            _ => {}
        }
    }

    /// Quit unless a request is in flight; its outcome would be lost
    fn request_quit(&mut self) {
        if self.state.phase.is_in_flight() {
            tracing::info!("quit refused, request in flight");
            self.state.status_message = Some(QUIT_IN_FLIGHT_MESSAGE.to_string());
            return;
        }
        self.quit = true;
    }

    fn handle_enter(&mut self) {
        match self.state.active_target() {
            FocusTarget::CourseImage | FocusTarget::ModuleVideo(_) => {
                self.state.apply_path_input()
            }
            FocusTarget::ModuleDescription(_) => self.state.form_newline(),
            FocusTarget::AddModule => self.state.add_module(),
            FocusTarget::Submit => self.submit(),
            FocusTarget::CourseName | FocusTarget::ModuleTitle(_) => {
                self.state.next_form_field()
            }
        }
    }

    /// Validate the draft and send it.
    ///
    /// Failed guards show a notice and send nothing. While a request is in
    /// flight further calls are refused.
    pub fn submit(&mut self) {
        if self.state.phase.is_in_flight() {
            tracing::info!("submit ignored, request already in flight");
            self.state.status_message = Some(IN_FLIGHT_MESSAGE.to_string());
            return;
        }

        self.state.commit_path_input();
        self.state.phase = SubmissionPhase::Validating;
        if let Err(e) = validate(&self.state.draft) {
            tracing::info!("submission blocked: {e}");
            self.state.push_notice(Notice::error(e.to_string()));
            self.state.phase = SubmissionPhase::Idle;
            return;
        }

        let snapshot = self.state.draft.clone();
        let api = Arc::clone(&self.api);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = match CoursePayload::build(&snapshot).await {
                Ok(payload) => api.create_course(payload).await,
                Err(e) => Err(ApiError::from(e)),
            };
            // The receiver is gone only if the app already exited
            let _ = tx.send(SubmissionOutcome::from_result(result));
        });

        tracing::info!(
            modules = self.state.draft.module_count(),
            "submitting course {:?}",
            self.state.draft.name()
        );
        self.pending = Some(rx);
        self.state.phase = SubmissionPhase::Submitting;
        self.state.status_message = Some("Submitting course...".to_string());
    }

    /// Pick up a finished request without blocking
    pub fn poll_submission(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => {
                SubmissionOutcome::Failed("submission task ended without a result".to_string())
            }
        };
        self.pending = None;
        self.finish_submission(outcome.clone());
        Some(outcome)
    }

    /// Wait for the request in flight to finish
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn wait_for_submission(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.take()?;
        let outcome = rx.await.unwrap_or_else(|_| {
            SubmissionOutcome::Failed("submission task ended without a result".to_string())
        });
        self.finish_submission(outcome.clone());
        Some(outcome)
    }

    fn finish_submission(&mut self, outcome: SubmissionOutcome) {
        self.state.phase = SubmissionPhase::Idle;
        if outcome.is_success() {
            tracing::info!("course {outcome}");
            self.state.reset_draft();
            self.state.status_message = None;
            self.state.push_notice(Notice::info(SUCCESS_MESSAGE));
        } else {
            tracing::error!("error creating course: {outcome}");
            self.state.status_message = None;
            self.state.push_notice(Notice::error(FAILURE_MESSAGE));
        }
    }
}
