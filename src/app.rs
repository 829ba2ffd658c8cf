use crate::model::{College, Role};
use crate::services::DirectoryClient;
use crate::state::{AppError, AppResult, FormEffect, FormEvent, LoginFormState, Route, UiState};
use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Application events
pub enum AppEvent {
    Terminal(CEvent),
    Directory {
        generation: u64,
        result: AppResult<Vec<College>>,
    },
    Tick,
}

pub struct App {
    pub ui: UiState,
    /// State of the login screen currently on top of the stack, if any.
    /// Recreated on every mount; dropped on unmount.
    pub form: Option<LoginFormState>,
    directory: DirectoryClient,
    events: mpsc::UnboundedSender<AppEvent>,
    /// Bumped on every login-screen mount. Directory results tagged with an
    /// older generation belong to a screen that no longer exists and are
    /// discarded instead of applied to stale state.
    directory_generation: u64,
}

impl App {
    pub fn new(events: mpsc::UnboundedSender<AppEvent>, directory: DirectoryClient) -> App {
        App {
            ui: UiState::default(),
            form: None,
            directory,
            events,
            directory_generation: 0,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::info!(?route, "navigate");
        self.ui.navigate(route);
        self.sync_screen();
    }

    pub fn go_back(&mut self) {
        if self.ui.go_back() {
            tracing::info!(route = ?self.ui.route(), "navigate back");
            self.sync_screen();
        }
    }

    /// Mount/unmount screen-owned state after the stack changed.
    fn sync_screen(&mut self) {
        match self.ui.route() {
            Route::StudentLogin => self.mount_login(Role::Student),
            Route::AdminLogin => self.mount_login(Role::Admin),
            _ => self.form = None,
        }
    }

    fn mount_login(&mut self, role: Role) {
        self.directory_generation += 1;
        let generation = self.directory_generation;
        self.form = Some(LoginFormState::new(role));

        let client = self.directory.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.fetch_colleges().await;
            let _ = events.send(AppEvent::Directory { generation, result });
        });
    }

    /// Deliver a resolved directory fetch to the form that requested it.
    pub fn handle_directory_event(&mut self, generation: u64, result: AppResult<Vec<College>>) {
        if generation != self.directory_generation {
            tracing::debug!(generation, "discarding stale directory result");
            return;
        }
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match result {
            Ok(colleges) => {
                form.apply(FormEvent::DirectoryLoaded(colleges));
            }
            Err(err) => {
                tracing::warn!(%err, "directory fetch failed");
                let msg = match err {
                    AppError::DirectoryFetch(msg) => msg,
                    other => other.to_string(),
                };
                form.apply(FormEvent::DirectoryFailed(msg));
            }
        }
    }

    /// Submit the active login form. Validation happens in the form; on
    /// success the transition is requested fire-and-forget — no credential
    /// verification exists in this layer yet.
    pub fn submit_login(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if let Some(FormEffect::Navigate(route)) = form.apply(FormEvent::Submit) {
            if let Err(err) = self.request_transition(route) {
                let msg = match err {
                    AppError::Submission(msg) => msg,
                    other => other.to_string(),
                };
                if let Some(form) = self.form.as_mut() {
                    form.apply(FormEvent::SubmissionFailed(msg));
                }
            }
        }
    }

    /// Follow the registration path for the current selection, when one
    /// exists (student "Create Account" link, admin sentinel request).
    pub fn request_registration(&mut self) {
        let route = self.form.as_ref().and_then(|form| form.register_route());
        if let Some(route) = route {
            self.navigate(route);
        }
    }

    fn request_transition(&mut self, route: Route) -> AppResult<()> {
        self.navigate(route);
        Ok(())
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
    }
}
