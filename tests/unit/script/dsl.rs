use super::*;
use crate::script::timing::{READING_MAX_PAUSE_MS, READING_MIN_PAUSE_MS, pause, typing};

#[test]
fn builds_sequences_in_order_with_timing() {
    let script = ScriptBuilder::new()
        .command("git log --oneline -5", typing::STANDARD)
        .pause(pause::SHORT)
        .unwrap()
        .output("abc123 fix things", Some("#f1fa8c"))
        .delay(100)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(script.sequences.len(), 2);
    let Sequence::Command(c) = &script.sequences[0] else {
        panic!("expected command");
    };
    assert_eq!(c.typing_duration_ms, Some(typing::STANDARD));
    assert_eq!(c.pause_ms, Some(pause::SHORT));
    assert_eq!(script.sequences[1].delay_ms(), 100);
}

#[test]
fn timing_without_a_sequence_is_an_error() {
    assert!(ScriptBuilder::new().pause(10).is_err());
    assert!(ScriptBuilder::new().reading_pause().is_err());
}

#[test]
fn build_validates_colors() {
    let err = ScriptBuilder::new()
        .output("x", Some("not-a-color"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("must be a hex color"));
}

#[test]
fn reading_pause_scales_with_visible_text() {
    assert_eq!(reading_pause_ms(""), READING_MIN_PAUSE_MS);
    assert_eq!(reading_pause_ms("hi"), READING_MIN_PAUSE_MS);
    // 140 chars at 14 chars/s = 10s + 300ms, clamped
    assert_eq!(reading_pause_ms(&"x".repeat(140)), READING_MAX_PAUSE_MS);
    // 28 chars = 2000ms + 300ms
    assert_eq!(reading_pause_ms(&"y".repeat(28)), 2300);
    assert_eq!(
        reading_pause_ms(&format!("[[bold]]{}[[/bold]]", "y".repeat(28))),
        2300
    );

    let script = ScriptBuilder::new()
        .output("y".repeat(28), None)
        .reading_pause()
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(script.sequences[0].pause_ms(), 2300);
}
