//! Inbound skill events.

use std::collections::HashMap;
use std::str::FromStr;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, instrument, warn};

use crate::{Session, SkillError, SkillErrorKind};

/// Intents this skill recognizes, keyed by their wire names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
pub enum IntentKind {
    /// Start a new game, drawing a fresh target.
    #[strum(to_string = "StartGameIntent")]
    StartGame,
    /// Make a guess against the current target.
    #[strum(to_string = "MakeGuessIntent")]
    MakeGuess,
    /// Built-in help intent.
    #[strum(to_string = "AMAZON.HelpIntent")]
    Help,
    /// Built-in cancel intent.
    #[strum(to_string = "AMAZON.CancelIntent")]
    Cancel,
    /// Built-in stop intent.
    #[strum(to_string = "AMAZON.StopIntent")]
    Stop,
}

/// A slot value captured alongside an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Slot {
    /// Slot name as declared in the interaction model.
    name: String,
    /// Spoken value, absent when the user did not fill the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

/// A named intent with its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Intent {
    /// Intent name as sent by the host.
    name: String,
    /// Slots keyed by slot name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    /// Creates an intent with no slots.
    #[instrument]
    pub fn named(name: impl Into<String> + std::fmt::Debug) -> Self {
        Self::new(name.into(), None)
    }

    /// Resolves the intent name into a known [`IntentKind`].
    #[track_caller]
    #[instrument(skip(self), fields(intent = %self.name))]
    pub fn kind(&self) -> Result<IntentKind, SkillError> {
        IntentKind::from_str(&self.name).map_err(|_| {
            warn!("Unrecognized intent");
            SkillError::new(SkillErrorKind::InvalidIntent(self.name.clone()))
        })
    }

    /// Returns the spoken value of the named slot, if filled.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots
            .as_ref()
            .and_then(|slots| slots.get(slot))
            .and_then(|s| s.value.as_deref())
    }
}

/// The request half of an event, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    /// The user opened the skill without naming an intent.
    #[serde(rename_all = "camelCase")]
    LaunchRequest {
        /// Host-assigned request identifier.
        request_id: String,
    },

    /// The user spoke one of the skill's intents.
    #[serde(rename_all = "camelCase")]
    IntentRequest {
        /// Host-assigned request identifier.
        request_id: String,
        /// The intent the user spoke.
        intent: Intent,
    },

    /// The host is closing the session.
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        /// Host-assigned request identifier.
        request_id: String,
        /// Why the host closed the session.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// Any request type this skill does not handle.
    #[serde(other)]
    Unsupported,
}

impl SkillRequest {
    /// Returns the request identifier, if the request type carries one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::LaunchRequest { request_id }
            | Self::IntentRequest { request_id, .. }
            | Self::SessionEndedRequest { request_id, .. } => Some(request_id),
            Self::Unsupported => None,
        }
    }
}

/// A complete inbound event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct SkillEvent {
    /// The session the request belongs to.
    session: Session,
    /// The request itself.
    request: SkillRequest,
}

impl SkillEvent {
    /// Parses an event from a JSON value.
    #[track_caller]
    #[instrument(skip(value))]
    pub fn from_value(value: Value) -> Result<Self, SkillError> {
        let event: Self = serde_json::from_value(value)?;
        debug!(session_id = %event.session.session_id(), "Parsed event");
        Ok(event)
    }

    /// Parses an event from JSON text.
    #[track_caller]
    #[instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, SkillError> {
        let event: Self = serde_json::from_str(json)?;
        debug!(session_id = %event.session.session_id(), "Parsed event");
        Ok(event)
    }
}
