//! Routes events to handlers by request type and intent.

use rand::Rng;
use tracing::{info, instrument};

use crate::handlers::{make_guess, session_end_response, start_game, welcome_response};
use crate::{Intent, IntentKind, ResponseEnvelope, Session, SkillError};

/// Session-started bookkeeping. Produces no response.
#[instrument(skip(session))]
pub fn on_session_started(request_id: &str, session: &Session) {
    info!(request_id, session_id = %session.session_id(), "on_session_started");
}

/// Launch without an intent: greet the user.
#[instrument(skip(session))]
pub fn on_launch(request_id: &str, session: &Session) -> ResponseEnvelope {
    info!(request_id, session_id = %session.session_id(), "on_launch");
    welcome_response()
}

/// Dispatches an intent to its handler.
///
/// Fails with `InvalidIntent` for names outside [`IntentKind`].
#[instrument(skip(intent, session, rng), fields(intent = %intent.name()))]
pub fn on_intent<R: Rng>(
    request_id: &str,
    intent: &Intent,
    session: &Session,
    rng: &mut R,
) -> Result<ResponseEnvelope, SkillError> {
    info!(request_id, session_id = %session.session_id(), "on_intent");

    let envelope = match intent.kind()? {
        IntentKind::StartGame => start_game(intent, session, rng),
        IntentKind::MakeGuess => make_guess(intent, session),
        IntentKind::Help => welcome_response(),
        IntentKind::Cancel | IntentKind::Stop => session_end_response(),
    };

    Ok(envelope)
}

/// The host closed the session. Not called when a handler ended it.
#[instrument(skip(session))]
pub fn on_session_ended(request_id: &str, reason: Option<&str>, session: &Session) {
    info!(request_id, reason, session_id = %session.session_id(), "on_session_ended");
}
