//! Caller-managed session state.
//!
//! The host owns the session between invocations. Each call hands the
//! attributes bag in and the handler hands back a bag for the host to store.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strictly_guess::TargetNumber;
use tracing::{debug, instrument};

/// The application a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Identifier the host assigned to the skill.
    application_id: String,
}

/// Key the target number is stored under.
pub const TARGET_KEY: &str = "targetNumber";

/// Attributes persisted by the host across turns of one session.
///
/// The bag is kept exactly as the host sent it. [`TARGET_KEY`] is the only
/// key the skill reads, and it is validated only when read, so a stale or
/// malformed value never blocks a request that does not look at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes {
    entries: Map<String, Value>,
}

impl SessionAttributes {
    /// Creates an empty attributes bag.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag holding only `target`.
    #[instrument]
    pub fn with_target(target: TargetNumber) -> Self {
        let mut entries = Map::new();
        entries.insert(TARGET_KEY.to_string(), Value::from(target.value()));
        Self { entries }
    }

    /// Returns the stored target value as sent, ignoring `null`.
    pub fn stored_target(&self) -> Option<&Value> {
        self.entries.get(TARGET_KEY).filter(|v| !v.is_null())
    }

    /// Returns the stored target if it is an integer inside the target range.
    #[instrument(skip(self))]
    pub fn target_number(&self) -> Option<TargetNumber> {
        let stored = self.stored_target()?;
        let parsed = stored
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .and_then(|v| TargetNumber::new(v).ok());
        if parsed.is_none() {
            debug!(%stored, "Stored target is not a valid target number");
        }
        parsed
    }

    /// Returns the raw value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Returns `true` if the bag holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of keys in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A conversational session as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether this is the first request of the session.
    #[getter(skip)]
    new: bool,
    /// Host-assigned session identifier.
    session_id: String,
    /// Application the session was opened for.
    application: Application,
    /// Attributes bag, absent on the first request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<SessionAttributes>,
}

impl Session {
    /// Returns `true` if the host flagged this as a new session.
    pub fn is_new(&self) -> bool {
        self.new
    }

    /// Returns the application id the host sent.
    pub fn application_id(&self) -> &str {
        self.application.application_id()
    }

    /// Returns the stored target, if a game has been started and the stored
    /// value is a valid target number.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn target_number(&self) -> Option<TargetNumber> {
        self.attributes.as_ref().and_then(SessionAttributes::target_number)
    }
}
