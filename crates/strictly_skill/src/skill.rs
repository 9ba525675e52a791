//! Entry point gluing validation, routing and dispatch.

use rand::Rng;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::router::{on_intent, on_launch, on_session_ended, on_session_started};
use crate::{
    ResponseEnvelope, SkillConfig, SkillError, SkillErrorKind, SkillEvent, SkillRequest,
};

/// The guess-the-number skill.
///
/// Holds no per-session state; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Skill {
    config: SkillConfig,
}

impl Skill {
    /// Creates a skill answering to the configured application id.
    #[instrument(skip(config), fields(application_id = %config.application_id()))]
    pub fn new(config: SkillConfig) -> Self {
        info!("Creating skill");
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Handles one event using the thread-local generator.
    ///
    /// Returns `Ok(None)` for requests that expect no response.
    #[instrument(skip(self, event))]
    pub fn handle(&self, event: &SkillEvent) -> Result<Option<ResponseEnvelope>, SkillError> {
        self.handle_with_rng(event, &mut rand::thread_rng())
    }

    /// Handles one event, drawing any new target from `rng`.
    #[instrument(skip(self, event, rng), fields(session_id = %event.session().session_id()))]
    pub fn handle_with_rng<R: Rng>(
        &self,
        event: &SkillEvent,
        rng: &mut R,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        let session = event.session();
        info!(application_id = %session.application_id(), "Handling event");

        self.validate_application_id(session.application_id())?;

        if session.is_new() {
            on_session_started(event.request().request_id().unwrap_or_default(), session);
        }

        match event.request() {
            SkillRequest::LaunchRequest { request_id } => Ok(Some(on_launch(request_id, session))),
            SkillRequest::IntentRequest { request_id, intent } => {
                on_intent(request_id, intent, session, rng).map(Some)
            }
            SkillRequest::SessionEndedRequest { request_id, reason } => {
                on_session_ended(request_id, reason.as_deref(), session);
                Ok(None)
            }
            SkillRequest::Unsupported => {
                warn!("Ignoring unsupported request type");
                Ok(None)
            }
        }
    }

    /// Parses and handles a raw JSON event.
    ///
    /// The application id is checked on the raw JSON before the rest of the
    /// event is parsed, so a foreign caller is rejected as such even when its
    /// event is otherwise malformed.
    #[instrument(skip(self, value))]
    pub fn handle_value(&self, value: Value) -> Result<Option<ResponseEnvelope>, SkillError> {
        if let Some(application_id) = value
            .pointer("/session/application/applicationId")
            .and_then(Value::as_str)
        {
            self.validate_application_id(application_id)?;
        }

        let event = SkillEvent::from_value(value)?;
        self.handle(&event)
    }

    /// Checks the caller's application id against the configured one.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate_application_id(&self, application_id: &str) -> Result<(), SkillError> {
        if application_id == self.config.application_id() {
            Ok(())
        } else {
            warn!(
                expected = %self.config.application_id(),
                "Rejected event for another application"
            );
            Err(SkillError::new(SkillErrorKind::InvalidApplicationId(
                application_id.to_string(),
            )))
        }
    }
}
