//! Page Controller
//!
//! Owns all client-side state: the active section, the admin session,
//! the submission guard and the API client. No ambient globals; every
//! flag lives here behind accessors.

use crate::logic::backend::client::{AdminLoginResponse, ApiClient, ApiConfig, ApiError, PredictionResponse};
use crate::logic::diagnostics;
use crate::logic::form::{PatientForm, ValidationError};
use crate::logic::sections::{Section, SectionRouter};
use crate::logic::session::AdminSession;

/// Prediction submission states. A resolved submission collapses back
/// to `Idle` once its outcome is returned, so only the in-flight window
/// is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Gate that disables the submit control while a request is outstanding
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    state: SubmissionState,
}

impl SubmissionGuard {
    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    fn begin(&mut self) -> Result<(), PredictError> {
        if self.is_in_flight() {
            return Err(PredictError::InFlight);
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    fn finish(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

/// Prediction flow errors
#[derive(Debug)]
pub enum PredictError {
    Validation(ValidationError),
    InFlight,
    Request(ApiError),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::InFlight => write!(f, "An analysis is already in progress"),
            Self::Request(e) => write!(f, "Prediction request failed: {}", e),
        }
    }
}

impl std::error::Error for PredictError {}

/// Admin login error. Every underlying cause collapses into this one
/// user-facing value; the log keeps the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCredentials;

impl std::fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid admin credentials")
    }
}

impl std::error::Error for InvalidCredentials {}

/// Client-side state holder and flow orchestrator
pub struct PageController {
    client: ApiClient,
    router: SectionRouter,
    session: AdminSession,
    guard: SubmissionGuard,
}

impl PageController {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: ApiClient::new(config),
            router: SectionRouter::new(),
            session: AdminSession::new(),
            guard: SubmissionGuard::default(),
        }
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_in_flight()
    }

    pub fn backend_url(&self) -> &str {
        self.client.base_url()
    }

    /// Switch the active section. Info sections kick off one
    /// fire-and-forget fetch whose outcome is only logged; rendering
    /// uses the static content regardless.
    pub fn show_section(&mut self, section: Section) {
        if let Some(slug) = self.router.activate(section) {
            self.spawn_info_fetch(slug);
        }
        log::debug!("Active section: {}", section.id());
    }

    fn spawn_info_fetch(&self, slug: &'static str) {
        let client = self.client.clone();
        tokio::spawn(async move {
            match client.info(slug).await {
                Ok(value) => {
                    let entries = value.as_object().map(|o| o.len()).unwrap_or(0);
                    log::info!("Loaded {} info ({} top-level entries)", slug, entries);
                    diagnostics::record(slug, "ok");
                }
                Err(e) => {
                    // The static content already covers the section.
                    log::warn!("Background {} load failed: {}", slug, e);
                    diagnostics::record(slug, &format!("failed: {}", e));
                }
            }
        });
    }

    /// Run the full submission flow: coerce and range-check the form,
    /// then post it. Validation failures abort before any network
    /// activity and leave the flow idle.
    pub async fn submit_prediction(
        &mut self,
        form: &PatientForm,
    ) -> Result<PredictionResponse, PredictError> {
        let request = form.parse().map_err(PredictError::Validation)?;

        self.guard.begin()?;
        log::info!("Submitting risk assessment (age {}, sex {})", request.age, request.sex);

        let result = self.client.predict(&request).await;
        self.guard.finish();

        match result {
            Ok(response) => {
                log::info!("Assessment resolved: {}", response.risk_level);
                Ok(response)
            }
            Err(e) => {
                log::error!("Assessment failed: {}", e);
                Err(PredictError::Request(e))
            }
        }
    }

    /// Post the Basic credential and apply the outcome to the session.
    pub async fn admin_login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), InvalidCredentials> {
        let result = self.client.admin_login(email, password).await;
        self.apply_login_outcome(email, result)
    }

    // The UI does not distinguish a rejected credential from a
    // transport or parse failure; the log and diagnostics keep the
    // actual cause.
    fn apply_login_outcome(
        &mut self,
        email: &str,
        result: Result<AdminLoginResponse, ApiError>,
    ) -> Result<(), InvalidCredentials> {
        match result {
            Ok(ack) => {
                log::info!("{} ({})", ack.message, ack.admin);
                diagnostics::record("admin-login", "ok");
                self.session.login(email);
                Ok(())
            }
            Err(e) => {
                log::warn!("Admin login failed: {}", e);
                diagnostics::record("admin-login", &format!("failed: {}", e));
                Err(InvalidCredentials)
            }
        }
    }

    /// Reset the session and hide the admin panel. The backend never
    /// issued a token, so there is nothing to invalidate server-side.
    pub fn admin_logout(&mut self) {
        if self.session.is_logged_in() {
            log::warn!(
                "Admin logout is client-side only; the server holds no session to revoke"
            );
        }
        self.session.logout();
    }

    /// Foreground load of the about resource (shown on demand)
    pub async fn load_about(&self) -> Result<serde_json::Value, ApiError> {
        match self.client.info("about").await {
            Ok(value) => {
                diagnostics::record("about", "ok");
                Ok(value)
            }
            Err(e) => {
                log::warn!("About load failed: {}", e);
                diagnostics::record("about", &format!("failed: {}", e));
                Err(e)
            }
        }
    }
}
