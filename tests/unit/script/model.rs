use super::*;
use serde_json::json;

#[test]
fn decodes_command_output_and_ascii_sequences() {
    let seqs = Sequence::list_from_value(&json!([
        { "type": "command", "content": "ls", "typingDuration": 400, "pause": 300 },
        { "type": "output", "content": "a\nb", "color": "#ff0000", "delay": 100 },
        { "type": "ascii", "content": " /\\_/\\ " }
    ]))
    .unwrap();

    assert_eq!(seqs.len(), 3);
    let Sequence::Command(c) = &seqs[0] else {
        panic!("expected command");
    };
    assert_eq!(c.prompt, None);
    assert_eq!(c.typing_duration_ms, Some(400));
    assert_eq!(seqs[0].pause_ms(), 300);
    assert_eq!(seqs[0].delay_ms(), 0);
    assert_eq!(seqs[1].delay_ms(), 100);
    assert_eq!(seqs[1].pause_ms(), DEFAULT_PAUSE_MS);
    assert!(matches!(seqs[2], Sequence::Ascii(_)));
}

#[test]
fn non_array_sequences_are_rejected() {
    let err = Sequence::list_from_value(&json!({ "type": "command" })).unwrap_err();
    assert!(err.to_string().contains("sequences must be an array"));

    let err = Script::from_value(json!({ "sequences": "nope" })).unwrap_err();
    assert!(err.to_string().contains("sequences must be an array"));

    let err = Script::from_value(json!({})).unwrap_err();
    assert!(err.to_string().contains("sequences must be an array"));
}

#[test]
fn unknown_sequence_type_is_a_serde_error() {
    let err = Sequence::list_from_value(&json!([{ "type": "beep", "content": "x" }])).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn script_merges_overrides_onto_defaults() {
    let script = Script::from_json_str(
        r##"{
            "window": { "height": 400 },
            "terminal": { "fontSize": 16 },
            "sequences": []
        }"##,
    )
    .unwrap();
    let cfg = script.config();
    assert_eq!(cfg.window.height, 400.0);
    assert_eq!(cfg.window.width, 800.0);
    assert_eq!(cfg.terminal.font_size, 16.0);
    assert_eq!(cfg.terminal.line_height, 1.5);
}

#[test]
fn invalid_json_is_reported() {
    let err = Script::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn validate_checks_output_colors() {
    let script = Script::from_value(json!({
        "sequences": [{ "type": "output", "content": "x", "color": "pink" }]
    }))
    .unwrap();
    let err = script.validate().unwrap_err();
    assert!(err.to_string().contains("sequences[0].color"));
}

#[test]
fn read_maps_io_errors_to_config_errors() {
    let dir = std::env::temp_dir().join(format!("termsvg-script-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let missing = dir.join("missing.json");
    let err = Script::read(&missing).unwrap_err();
    assert!(err.to_string().contains("not found"));

    let err = Script::read(&dir).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));

    let ok = dir.join("script.json");
    std::fs::write(&ok, r#"{ "sequences": [{ "type": "command", "content": "pwd" }] }"#).unwrap();
    assert_eq!(Script::read(&ok).unwrap().sequences.len(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn serialization_uses_wire_field_names() {
    let seq = Sequence::Command(CommandSeq {
        content: "ls".to_owned(),
        typing_duration_ms: Some(500),
        ..CommandSeq::default()
    });
    let v = serde_json::to_value(&seq).unwrap();
    assert_eq!(v, json!({ "type": "command", "content": "ls", "typingDuration": 500 }));
}
