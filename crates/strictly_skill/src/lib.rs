//! Strictly Skill - a guess-the-number voice skill request handler
//!
//! The host hands in one event per turn and gets back a response envelope.
//! Game state is a single target number kept in the session attributes bag,
//! which the host stores between turns.
//!
//! # Architecture
//!
//! - **Response**: builders for the speech/card/reprompt envelope
//! - **Handlers**: welcome, farewell, start-game and make-guess
//! - **Router**: request-type and intent dispatch
//! - **Skill**: the entry point, validating the application id first
//! - **Console**: a local stand-in for the voice host
//!
//! # Example
//!
//! ```
//! use strictly_skill::{Skill, SkillEvent};
//!
//! # fn example() -> Result<(), strictly_skill::SkillError> {
//! let event = SkillEvent::from_json(r#"{
//!     "session": {
//!         "new": true,
//!         "sessionId": "session-1",
//!         "application": {
//!             "applicationId": "amzn1.ask.skill.8f6884d0-eea8-41ff-9b80-a9fe4377932c"
//!         }
//!     },
//!     "request": { "type": "LaunchRequest", "requestId": "request-1" }
//! }"#)?;
//!
//! let envelope = Skill::default().handle(&event)?.expect("launch is answered");
//! assert!(envelope.response().speech_text().starts_with("Welcome"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod event;
pub mod handlers;
mod response;
pub mod router;
mod session;
mod skill;

// Crate-level exports - Configuration
pub use config::{APPLICATION_ID_ENV, DEFAULT_APPLICATION_ID, SkillConfig};

// Crate-level exports - Console host
pub use console::{Console, ConsoleCommand, USER_INITIATED};

// Crate-level exports - Errors
pub use error::{ConfigError, SkillError, SkillErrorKind};

// Crate-level exports - Inbound events
pub use event::{Intent, IntentKind, SkillEvent, SkillRequest, Slot};

// Crate-level exports - Response envelope
pub use response::{
    CARD_PREFIX, Card, OutputSpeech, RESPONSE_VERSION, Reprompt, ResponseEnvelope,
    SpeechletResponse, build_response, build_speechlet_response,
};

// Crate-level exports - Session state
pub use session::{Application, Session, SessionAttributes, TARGET_KEY};

// Crate-level exports - Entry point
pub use skill::Skill;

// Crate-level exports - Game types
pub use strictly_guess::{TARGET_MAX, TARGET_MIN, TargetNumber};
