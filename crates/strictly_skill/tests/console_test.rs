//! Tests for the console host.

use std::io::Cursor;

use strictly_skill::{Console, ConsoleCommand, Intent, IntentKind, Skill, SkillErrorKind};

fn run(script: &str) -> String {
    let mut console = Console::new(Skill::default());
    let mut output = Vec::new();
    console
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("Console run failed");
    String::from_utf8(output).expect("Output is UTF-8")
}

#[test]
fn test_parse_commands() {
    assert_eq!(ConsoleCommand::parse("launch"), Some(ConsoleCommand::Launch));
    assert_eq!(ConsoleCommand::parse("  QUIT "), Some(ConsoleCommand::Quit));
    assert_eq!(
        ConsoleCommand::parse("stop"),
        Some(ConsoleCommand::Intent(Intent::named(IntentKind::Stop.to_string())))
    );
    assert_eq!(
        ConsoleCommand::parse("intent Custom"),
        Some(ConsoleCommand::Intent(Intent::named("Custom")))
    );
    assert_eq!(ConsoleCommand::parse("intent"), None);
    assert_eq!(ConsoleCommand::parse("dance"), None);
    assert_eq!(ConsoleCommand::parse(""), None);
}

#[test]
fn test_parse_guess_fills_slot() {
    let Some(ConsoleCommand::Intent(intent)) = ConsoleCommand::parse("guess 12") else {
        panic!("guess should parse as an intent");
    };
    assert_eq!(intent.name(), "MakeGuessIntent");
    assert_eq!(intent.slot_value("number"), Some("12"));
}

#[test]
fn test_start_then_guess_round_trips_attributes() {
    let mut console = Console::new(Skill::default());

    let started = console
        .step(ConsoleCommand::parse("start").unwrap())
        .unwrap()
        .unwrap();
    let target = started.session_attributes().target_number().unwrap();
    assert_eq!(console.attributes().and_then(|a| a.target_number()), Some(target));

    let guessed = console
        .step(ConsoleCommand::parse("guess 50").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(
        guessed.response().speech_text(),
        format!("The target number is {target}.")
    );
}

#[test]
fn test_stop_opens_new_session() {
    let mut console = Console::new(Skill::default());
    console.step(ConsoleCommand::parse("start").unwrap()).unwrap();
    let first = console.session_id().to_string();

    let stopped = console.step(ConsoleCommand::parse("stop").unwrap()).unwrap().unwrap();
    assert!(*stopped.response().should_end_session());
    assert_ne!(console.session_id(), first);
    assert!(console.attributes().is_none());
}

#[test]
fn test_invalid_intent_keeps_state() {
    let mut console = Console::new(Skill::default());
    console.step(ConsoleCommand::parse("start").unwrap()).unwrap();
    let before = console.attributes().cloned();

    let err = console
        .step(ConsoleCommand::parse("intent UnknownIntent").unwrap())
        .unwrap_err();
    assert!(matches!(err.kind(), SkillErrorKind::InvalidIntent(_)));
    assert_eq!(console.attributes().cloned(), before);
}

#[test]
fn test_run_script() {
    let output = run("launch\nguess 3\nstart\nhelp\nbogus\nstop\nquit\nlaunch\n");

    assert!(output.contains("Welcome to Guess the Number."));
    assert!(output.contains("Oops, you haven't started a game!"));
    assert!(output.contains("Let's play!"));
    assert!(output.contains("(reprompt: You can say, take a guess.)"));
    assert!(output.contains("Commands:"));
    assert!(output.contains("(session ended)"));
    assert!(output.trim_end().ends_with("Goodbye."), "input after quit is ignored");
}

#[test]
fn test_run_reports_errors() {
    let output = run("intent Nope\n");
    assert!(output.contains("error: Invalid intent: Nope"));
}
