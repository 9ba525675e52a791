//! Response envelope and the builders that assemble it.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::SessionAttributes;

/// Envelope version understood by the host.
pub const RESPONSE_VERSION: &str = "1.0";

/// Label prefixed to every card title and card body.
pub const CARD_PREFIX: &str = "SessionSpeechlet - ";

/// Speech rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    /// Plain text, spoken as written. A `None` text means nothing is spoken.
    PlainText {
        /// Text to speak.
        text: Option<String>,
    },
}

impl OutputSpeech {
    /// Returns the text to be spoken, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::PlainText { text } => text.as_deref(),
        }
    }
}

/// Card shown in the companion app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title and plain body.
    Simple {
        /// Card title.
        title: String,
        /// Card body.
        content: String,
    },
}

impl Card {
    /// Returns the card title.
    pub fn title(&self) -> &str {
        match self {
            Self::Simple { title, .. } => title,
        }
    }

    /// Returns the card body.
    pub fn content(&self) -> &str {
        match self {
            Self::Simple { content, .. } => content,
        }
    }
}

/// Speech used when the user stays silent or is not understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// Speech to repeat.
    output_speech: OutputSpeech,
}

/// Speech, card, reprompt and end-of-session flag for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    /// What the host says.
    output_speech: OutputSpeech,
    /// What the companion app shows.
    card: Card,
    /// What the host says if the user does not answer.
    reprompt: Reprompt,
    /// Whether the host should close the session after speaking.
    should_end_session: bool,
}

impl SpeechletResponse {
    /// Returns the spoken text.
    pub fn speech_text(&self) -> &str {
        self.output_speech.text().unwrap_or_default()
    }

    /// Returns the reprompt text, if any.
    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.output_speech.text()
    }
}

/// Top-level envelope returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Envelope version, always [`RESPONSE_VERSION`].
    version: String,
    /// Attributes the host stores for the next turn.
    session_attributes: SessionAttributes,
    /// The turn's response.
    response: SpeechletResponse,
}

impl ResponseEnvelope {
    /// Consumes the envelope, returning the attributes for the host to keep.
    pub fn into_session_attributes(self) -> SessionAttributes {
        self.session_attributes
    }
}

/// Builds a speechlet response with a plain-text speech, a simple card and
/// a plain-text reprompt.
#[instrument(skip(output))]
pub fn build_speechlet_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: OutputSpeech::PlainText {
            text: Some(output.to_string()),
        },
        card: Card::Simple {
            title: format!("{CARD_PREFIX}{title}"),
            content: format!("{CARD_PREFIX}{output}"),
        },
        reprompt: Reprompt {
            output_speech: OutputSpeech::PlainText {
                text: reprompt_text.map(str::to_string),
            },
        },
        should_end_session,
    }
}

/// Wraps attributes and a speechlet response in a versioned envelope.
#[instrument(skip_all)]
pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet_response: SpeechletResponse,
) -> ResponseEnvelope {
    ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}
