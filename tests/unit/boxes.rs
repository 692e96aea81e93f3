use super::*;

#[test]
fn style_names_parse_and_unknown_is_typed_error() {
    assert_eq!("double".parse::<BoxStyle>().unwrap(), BoxStyle::Double);
    assert_eq!("rounded".parse::<BoxStyle>().unwrap(), BoxStyle::Rounded);

    let err = "dotted".parse::<BoxStyle>().unwrap_err();
    assert!(matches!(&err, TermsvgError::BoxStyle(s) if s == "dotted"));
    assert!(err.to_string().contains("'dotted'"));
}

#[test]
fn width_counts_wide_chars_and_skips_ansi() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("🚀 go"), 5);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("\x1b[1;32mok\x1b[0m"), 2);
}

#[test]
fn pad_and_truncate() {
    assert_eq!(pad_to_width("ab", 5), "ab   ");
    assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    assert_eq!(truncate_to_width("short", 10), "short");
    assert_eq!(truncate_to_width("hello world", 8), "hello...");
    assert_eq!(display_width(&truncate_to_width("🚀🚀🚀🚀", 6)), 5);
}

#[test]
fn wrap_breaks_on_words_and_indents_continuations() {
    let lines = wrap_text("the quick brown fox jumps", 10, "  ");
    assert_eq!(lines, vec!["the quick", "  brown", "  fox", "  jumps"]);
    assert!(lines.iter().all(|l| display_width(l) <= 10));

    assert_eq!(wrap_text("fits", 10, ""), vec!["fits"]);
    assert_eq!(wrap_text("", 10, ""), vec![""]);
}

#[test]
fn wrap_keeps_long_first_word_and_truncates_later_ones() {
    let lines = wrap_text("supercalifragilistic a extraordinarily", 10, "");
    assert_eq!(lines[0], "supercalifragilistic");
    assert_eq!(lines[1], "a");
    assert_eq!(lines[2], "extraor...");
}

#[test]
fn double_box_layout() {
    let out = draw_box(&["hi"], BoxStyle::Double, 8);
    assert_eq!(out, "╔══════╗\n║ hi   ║\n╚══════╝");
}

#[test]
fn rounded_box_truncates_and_pads_to_uniform_width() {
    let out = draw_box(&["a much too long line", "ok"], BoxStyle::Rounded, 12);
    let rows: Vec<_> = out.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| display_width(r) == 12));
    assert!(rows[1].contains("a muc..."));
    assert!(rows[0].starts_with('╭'));
}

#[test]
fn titled_box_puts_separator_after_heading() {
    let out = draw_box_with_title("Title", Some("sub"), &["body"], 14);
    let rows: Vec<_> = out.lines().collect();
    assert_eq!(rows.len(), 7);
    assert!(rows[2].contains("Title"));
    assert!(rows[3].contains("sub"));
    assert!(rows[4].starts_with('╠') && rows[4].ends_with('╣'));
    assert!(rows[5].contains("body"));
}

#[test]
fn named_style_errors_propagate() {
    assert!(draw_box_named(&["x"], "rounded", 6).is_ok());
    assert!(draw_box_named(&["x"], "heavy", 6).is_err());
}
