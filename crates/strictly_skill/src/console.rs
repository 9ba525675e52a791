//! Line-driven console that stands in for the voice host.
//!
//! The console owns what a real host would own between turns: the session
//! id, the `new` flag and the attributes bag. Each command becomes one event.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::handlers::GUESS_SLOT;
use crate::{
    Application, Intent, IntentKind, ResponseEnvelope, Session, SessionAttributes, Skill,
    SkillError, SkillEvent, SkillRequest, Slot,
};

/// Reason sent when the console user quits.
pub const USER_INITIATED: &str = "USER_INITIATED";

const USAGE: &str = "Commands: launch, start, guess <n>, help, cancel, stop, intent <Name>, quit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Open the skill without an intent.
    Launch,
    /// Speak an intent.
    Intent(Intent),
    /// Close the session from the host side.
    Quit,
}

impl ConsoleCommand {
    /// Parses a console line. Returns `None` for blank or unknown input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_ascii_lowercase();
        let argument = words.next();

        let parsed = match command.as_str() {
            "launch" | "open" => Self::Launch,
            "start" | "play" => Self::Intent(Intent::named(IntentKind::StartGame.to_string())),
            "guess" => {
                let slots = argument.map(|value| {
                    HashMap::from([(
                        GUESS_SLOT.to_string(),
                        Slot::new(GUESS_SLOT.to_string(), Some(value.to_string())),
                    )])
                });
                Self::Intent(Intent::new(IntentKind::MakeGuess.to_string(), slots))
            }
            "help" => Self::Intent(Intent::named(IntentKind::Help.to_string())),
            "cancel" => Self::Intent(Intent::named(IntentKind::Cancel.to_string())),
            "stop" => Self::Intent(Intent::named(IntentKind::Stop.to_string())),
            "intent" => Self::Intent(Intent::named(argument?)),
            "quit" | "exit" | "end" => Self::Quit,
            _ => return None,
        };

        debug!(?parsed, "Parsed console command");
        Some(parsed)
    }
}

/// Host-side state for a console conversation.
#[derive(Debug, Clone)]
pub struct Console {
    skill: Skill,
    session_id: String,
    new: bool,
    attributes: Option<SessionAttributes>,
    sessions: u32,
    turns: u32,
}

impl Console {
    /// Creates a console with a fresh session.
    #[instrument(skip(skill))]
    pub fn new(skill: Skill) -> Self {
        let mut console = Self {
            skill,
            session_id: String::new(),
            new: true,
            attributes: None,
            sessions: 0,
            turns: 0,
        };
        console.open_session();
        console
    }

    /// Returns the current session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the attributes the host is holding for the next turn.
    pub fn attributes(&self) -> Option<&SessionAttributes> {
        self.attributes.as_ref()
    }

    /// Discards the current session and opens a new one.
    #[instrument(skip(self))]
    fn open_session(&mut self) {
        self.sessions += 1;
        self.turns = 0;
        self.session_id = format!(
            "strictly_skill.session.{}.{}",
            std::process::id(),
            self.sessions
        );
        self.new = true;
        self.attributes = None;
        info!(session_id = %self.session_id, "Opened session");
    }

    /// Builds the event a host would send for `request`.
    fn event(&self, request: SkillRequest) -> SkillEvent {
        let session = Session::new(
            self.new,
            self.session_id.clone(),
            Application::new(self.skill.config().application_id().clone()),
            self.attributes.clone(),
        );
        SkillEvent::new(session, request)
    }

    fn next_request_id(&mut self) -> String {
        self.turns += 1;
        format!("{}.request.{}", self.session_id, self.turns)
    }

    /// Sends one command through the skill and updates host state.
    ///
    /// Attributes are only replaced when the skill answers. A response that
    /// ends the session, or a quit, opens a new session for the next command.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn step(&mut self, command: ConsoleCommand) -> Result<Option<ResponseEnvelope>, SkillError> {
        let request_id = self.next_request_id();
        let request = match command {
            ConsoleCommand::Launch => SkillRequest::LaunchRequest { request_id },
            ConsoleCommand::Intent(intent) => SkillRequest::IntentRequest { request_id, intent },
            ConsoleCommand::Quit => SkillRequest::SessionEndedRequest {
                request_id,
                reason: Some(USER_INITIATED.to_string()),
            },
        };
        let ended_by_host = matches!(request, SkillRequest::SessionEndedRequest { .. });

        let result = self.skill.handle(&self.event(request))?;
        self.new = false;

        match &result {
            Some(envelope) if *envelope.response().should_end_session() => self.open_session(),
            Some(envelope) => self.attributes = Some(envelope.session_attributes().clone()),
            None if ended_by_host => self.open_session(),
            None => {}
        }

        Ok(result)
    }

    /// Reads commands from `input` until it is exhausted or the user quits,
    /// writing what the host would say to `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{USAGE}")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = ConsoleCommand::parse(&line) else {
                writeln!(output, "{USAGE}")?;
                continue;
            };
            let quitting = command == ConsoleCommand::Quit;

            match self.step(command) {
                Ok(Some(envelope)) => {
                    let response = envelope.response();
                    writeln!(output, "{}", response.speech_text())?;
                    if let Some(reprompt) = response.reprompt_text() {
                        writeln!(output, "  (reprompt: {reprompt})")?;
                    }
                    if *response.should_end_session() {
                        writeln!(output, "  (session ended)")?;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "Event rejected");
                    writeln!(output, "error: {}", e.kind())?;
                }
            }

            if quitting {
                writeln!(output, "Goodbye.")?;
                break;
            }
        }

        Ok(())
    }
}
