//! Tests for the response envelope wire format.

use serde_json::json;
use strictly_skill::{
    SessionAttributes, TargetNumber, build_response, build_speechlet_response,
};

#[test]
fn test_speechlet_wire_format() {
    let speechlet = build_speechlet_response("Title", "Hello there.", Some("Still there?"), false);

    assert_eq!(
        serde_json::to_value(&speechlet).unwrap(),
        json!({
            "outputSpeech": { "type": "PlainText", "text": "Hello there." },
            "card": {
                "type": "Simple",
                "title": "SessionSpeechlet - Title",
                "content": "SessionSpeechlet - Hello there."
            },
            "reprompt": { "outputSpeech": { "type": "PlainText", "text": "Still there?" } },
            "shouldEndSession": false
        })
    );
}

#[test]
fn test_absent_reprompt_serializes_as_null() {
    let speechlet = build_speechlet_response("Bye", "Goodbye.", None, true);
    let value = serde_json::to_value(&speechlet).unwrap();

    assert_eq!(value["reprompt"]["outputSpeech"]["text"], json!(null));
    assert_eq!(value["shouldEndSession"], json!(true));
}

#[test]
fn test_envelope_wire_format() {
    let attributes = SessionAttributes::with_target(TargetNumber::new(42).unwrap());
    let envelope = build_response(
        attributes,
        build_speechlet_response("T", "Text", None, false),
    );
    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["version"], json!("1.0"));
    assert_eq!(value["sessionAttributes"], json!({ "targetNumber": 42 }));
    assert_eq!(value["response"]["outputSpeech"]["text"], json!("Text"));
}

#[test]
fn test_empty_attributes_serialize_as_empty_object() {
    let envelope = build_response(
        SessionAttributes::new(),
        build_speechlet_response("T", "Text", None, false),
    );
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["sessionAttributes"], json!({}));
}

#[test]
fn test_envelope_parses_back() {
    let envelope = build_response(
        SessionAttributes::with_target(TargetNumber::new(8).unwrap()),
        build_speechlet_response("T", "Text", Some("Again?"), false),
    );
    let json = serde_json::to_string(&envelope).unwrap();
    let parsed = serde_json::from_str(&json).unwrap();
    assert_eq!(envelope, parsed);
}

#[test]
fn test_null_target_reads_as_absent() {
    let attributes: SessionAttributes =
        serde_json::from_value(json!({ "targetNumber": null, "mood": "happy" })).unwrap();
    assert!(attributes.target_number().is_none());
    assert!(attributes.stored_target().is_none());
    assert_eq!(attributes.get("mood"), Some(&json!("happy")));
}

#[test]
fn test_invalid_target_reads_as_absent_but_is_kept() {
    let raw = json!({ "targetNumber": "42", "streak": 2 });
    let attributes: SessionAttributes = serde_json::from_value(raw.clone()).unwrap();

    assert!(attributes.target_number().is_none());
    assert_eq!(attributes.stored_target(), Some(&json!("42")));
    assert_eq!(serde_json::to_value(&attributes).unwrap(), raw);

    let out_of_range: SessionAttributes =
        serde_json::from_value(json!({ "targetNumber": 0 })).unwrap();
    assert!(out_of_range.target_number().is_none());
}
