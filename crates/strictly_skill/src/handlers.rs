//! Intent handlers.
//!
//! Each handler reads the current session and returns a fresh envelope
//! carrying the attributes the host should keep for the next turn.

use rand::Rng;
use serde_json::Value;
use strictly_guess::TargetNumber;
use tracing::{debug, info, instrument};

use crate::{
    Intent, ResponseEnvelope, Session, SessionAttributes, build_response,
    build_speechlet_response,
};

/// Slot carrying the number the user spoke.
pub const GUESS_SLOT: &str = "number";

/// Welcome speech used on launch and for help.
pub const WELCOME_SPEECH: &str =
    "Welcome to Guess the Number. Please guess a number between 1 and 100 to begin.";

/// Reprompt paired with [`WELCOME_SPEECH`].
pub const WELCOME_REPROMPT: &str = "Please guess a number between 1 and 100 to begin.";

/// Farewell speech for cancel and stop.
pub const FAREWELL_SPEECH: &str = "Thank you for playing. \
    Remember to like, favorite, comment, and subscribe. Have a nice day!";

/// Speech announcing a new game.
pub const START_SPEECH: &str = "Let's play! I'm thinking of a number between 1 and 100... ";

/// Reprompt after a new game starts.
pub const START_REPROMPT: &str = "You can say, take a guess.";

/// Reprompt after the target is revealed.
pub const GUESS_REPROMPT: &str = "Please take another guess.";

/// Speech when a guess arrives before any game was started.
pub const NOT_STARTED_SPEECH: &str = "Oops, you haven't started a game! You can say, let's play.";

/// Reprompt paired with [`NOT_STARTED_SPEECH`].
pub const NOT_STARTED_REPROMPT: &str = "Please start a game.";

/// Builds the welcome response. Deterministic, with an empty attributes bag.
#[instrument]
pub fn welcome_response() -> ResponseEnvelope {
    build_response(
        SessionAttributes::new(),
        build_speechlet_response("Welcome", WELCOME_SPEECH, Some(WELCOME_REPROMPT), false),
    )
}

/// Builds the farewell response that closes the session.
#[instrument]
pub fn session_end_response() -> ResponseEnvelope {
    build_response(
        SessionAttributes::new(),
        build_speechlet_response("Session Ended", FAREWELL_SPEECH, None, true),
    )
}

/// Starts a game by drawing a fresh target.
///
/// Any previous target, and any other attribute, is discarded.
#[instrument(skip(intent, session, rng), fields(intent = %intent.name(), session_id = %session.session_id()))]
pub fn start_game<R: Rng>(intent: &Intent, session: &Session, rng: &mut R) -> ResponseEnvelope {
    if let Some(previous) = session.target_number() {
        debug!(%previous, "Replacing target of game in progress");
    }

    let target = TargetNumber::draw(rng);
    info!(%target, "Game started");

    build_response(
        SessionAttributes::with_target(target),
        build_speechlet_response(intent.name(), START_SPEECH, Some(START_REPROMPT), false),
    )
}

/// Answers a guess by revealing the stored target.
///
/// The stored value is echoed as sent, even when it is not a valid target
/// number. The spoken guess is never compared against it. The session's
/// attributes are handed back unchanged.
#[instrument(skip(intent, session), fields(intent = %intent.name(), session_id = %session.session_id()))]
pub fn make_guess(intent: &Intent, session: &Session) -> ResponseEnvelope {
    debug!(guess = ?intent.slot_value(GUESS_SLOT), "Guess received");

    let session_attributes = session.attributes().clone().unwrap_or_default();

    let stored = session_attributes.stored_target().map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    });

    let (speech, reprompt) = match stored {
        Some(target) => {
            info!(%target, valid = session.target_number().is_some(), "Revealing target");
            (format!("The target number is {target}."), GUESS_REPROMPT)
        }
        None => {
            info!("Guess made before a game was started");
            (NOT_STARTED_SPEECH.to_string(), NOT_STARTED_REPROMPT)
        }
    };

    build_response(
        session_attributes,
        build_speechlet_response(intent.name(), &speech, Some(reprompt), false),
    )
}
