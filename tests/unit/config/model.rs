use super::*;
use serde_json::json;

#[test]
fn defaults_are_valid_and_yield_expected_capacity() {
    let cfg = RenderConfig::default();
    cfg.validate().unwrap();

    let g = cfg.geometry();
    assert_eq!(g.line_height_px, 21.0);
    assert_eq!(g.viewport_height_px, 600.0 - 36.0 - 40.0);
    assert_eq!(g.max_visible_lines(), 24);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg: RenderConfig = serde_json::from_value(json!({
        "window": { "width": 1200, "titleBar": { "title": "Custom Title" } },
        "terminal": { "promptColor": "#123456" }
    }))
    .unwrap();

    assert_eq!(cfg.window.width, 1200.0);
    assert_eq!(cfg.window.height, 600.0);
    assert_eq!(cfg.window.title_bar.title, "Custom Title");
    assert_eq!(cfg.window.title_bar.height, 36.0);
    assert_eq!(cfg.terminal.prompt_color, "#123456");
    assert_eq!(cfg.terminal.font_size, 14.0);
    assert_eq!(cfg.terminal.prompt, DEFAULT_PROMPT);
}

#[test]
fn validate_rejects_non_positive_sizes() {
    let mut cfg = RenderConfig::default();
    cfg.terminal.font_size = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("terminal.fontSize"));

    let mut cfg = RenderConfig::default();
    cfg.terminal.padding = -1.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_bad_colors() {
    let mut cfg = RenderConfig::default();
    cfg.terminal.text_color = "green".to_owned();
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("terminal.textColor"));
}

#[test]
fn validate_rejects_viewport_without_room_for_a_line() {
    let mut cfg = RenderConfig::default();
    cfg.window.height = 80.0;
    assert_eq!(cfg.geometry().max_visible_lines(), 0);
    assert!(cfg.validate().is_err());
}

#[test]
fn capacity_floors_partial_lines() {
    let g = Geometry {
        viewport_width_px: 100.0,
        viewport_height_px: 62.9,
        line_height_px: 21.0,
        padding_px: 0.0,
    };
    assert_eq!(g.max_visible_lines(), 2);
}
