use super::*;
use crate::config::palette::colors;

fn plain(text: &str) -> StyledSpan {
    StyledSpan {
        text: text.to_owned(),
        style: SpanStyle::default(),
    }
}

fn fg(text: &str, color: &str) -> StyledSpan {
    StyledSpan {
        text: text.to_owned(),
        style: SpanStyle {
            fg: Some(color.to_owned()),
            ..SpanStyle::default()
        },
    }
}

#[test]
fn empty_input_yields_single_empty_span() {
    assert_eq!(parse_markup("").unwrap(), vec![plain("")]);
    assert_eq!(parse_markup("[[bold]][[/bold]]").unwrap(), vec![plain("")]);
}

#[test]
fn plain_text_is_returned_unchanged() {
    assert_eq!(parse_markup("hello world").unwrap(), vec![plain("hello world")]);
}

#[test]
fn parses_each_tag_kind() {
    assert_eq!(
        parse_markup("[[fg:green]]hello[[/fg]]").unwrap(),
        vec![fg("hello", colors::GREEN)]
    );

    let bg = parse_markup("[[bg:blue]]hello[[/bg]]").unwrap();
    assert_eq!(bg.len(), 1);
    assert_eq!(bg[0].style.bg.as_deref(), Some(colors::BLUE));

    let bold = parse_markup("[[bold]]hello[[/bold]]").unwrap();
    assert!(bold[0].style.bold);
    assert!(!bold[0].style.dim);

    let dim = parse_markup("[[dim]]hello[[/dim]]").unwrap();
    assert!(dim[0].style.dim);
}

#[test]
fn mixed_styled_and_plain_text() {
    assert_eq!(
        parse_markup("hello [[fg:green]]world[[/fg]]!").unwrap(),
        vec![plain("hello "), fg("world", colors::GREEN), plain("!")]
    );
}

#[test]
fn nested_tags_restore_the_enclosing_style() {
    let spans = parse_markup("[[bold]]a[[fg:red]]b[[/fg]]c[[/bold]]d").unwrap();
    assert_eq!(spans.len(), 4);
    assert_eq!(spans[0].text, "a");
    assert!(spans[0].style.bold && spans[0].style.fg.is_none());
    assert_eq!(spans[1].text, "b");
    assert!(spans[1].style.bold);
    assert_eq!(spans[1].style.fg.as_deref(), Some("#ff5555"));
    assert_eq!(spans[2].text, "c");
    assert!(spans[2].style.bold && spans[2].style.fg.is_none());
    assert_eq!(spans[3], plain("d"));
}

#[test]
fn inner_color_overrides_outer_until_closed() {
    let spans = parse_markup("[[fg:red]]a[[fg:cyan]]b[[/fg]]c[[/fg]]").unwrap();
    assert_eq!(
        spans,
        vec![fg("a", "#ff5555"), fg("b", colors::CYAN), fg("c", "#ff5555")]
    );
}

#[test]
fn merge_applies_only_to_adjacent_spans() {
    // "b" is unstyled, so the two green runs stay separate.
    assert_eq!(
        parse_markup("[[fg:green]]a[[/fg]]b[[fg:green]]c[[/fg]]").unwrap(),
        vec![
            fg("a", colors::GREEN),
            plain("b"),
            fg("c", colors::GREEN)
        ]
    );
    assert_eq!(
        parse_markup("[[fg:green]]hello[[/fg]][[fg:green]]world[[/fg]]").unwrap(),
        vec![fg("helloworld", colors::GREEN)]
    );
}

#[test]
fn hex_and_unknown_colors() {
    assert_eq!(
        parse_markup("[[fg:#123456]]x[[/fg]]").unwrap(),
        vec![fg("x", "#123456")]
    );
    assert_eq!(
        parse_markup("[[fg:nope]]x[[/fg]]").unwrap(),
        vec![fg("x", colors::WHITE)]
    );
}

#[test]
fn unclosed_tag_names_outermost_tag_and_offset() {
    let err = parse_markup("[[fg:green]]hello").unwrap_err();
    assert_eq!(
        err,
        MarkupError::UnclosedTag {
            tag: "fg:green".to_owned(),
            offset: 0,
        }
    );

    let err = parse_markup("ok [[bold]]a[[dim]]b[[/dim]]").unwrap_err();
    assert_eq!(err.tag(), "bold");
    assert_eq!(err.offset(), 3);
}

#[test]
fn unterminated_bracket_is_an_error() {
    let err = parse_markup("abc [[fg:green").unwrap_err();
    assert!(matches!(err, MarkupError::Unterminated { offset: 4, .. }));
}

#[test]
fn stray_closing_tag_is_ignored() {
    assert_eq!(parse_markup("a[[/bold]]b").unwrap(), vec![plain("ab")]);
}

#[test]
fn strip_and_width_ignore_tags() {
    assert_eq!(strip_markup("[[fg:green]]hello[[/fg]]"), "hello");
    assert_eq!(
        strip_markup("[[fg:green]]hello[[/fg]] [[bold]]world[[/bold]]"),
        "hello world"
    );
    assert_eq!(strip_markup("[[bold]][[fg:red]]text[[/fg]][[/bold]]"), "text");
    assert_eq!(strip_markup("plain text"), "plain text");
    assert_eq!(strip_markup("[[]] [[a]b]]"), "[[]] [[a]b]]");
    assert_eq!(display_width("[[fg:green]]hello[[/fg]]"), 5);
    assert_eq!(display_width("hello world"), 11);
}

#[test]
fn has_markup_detects_opener() {
    assert!(has_markup("[[fg:green]]text[[/fg]]"));
    assert!(!has_markup("plain text"));
    assert!(!has_markup(""));
}

#[test]
fn concatenated_spans_equal_stripped_text() {
    for input in [
        "hello [[fg:green]]world[[/fg]]!",
        "[[bold]][[fg:red]]a[[/fg]]b[[/bold]]c",
        "[[dim]]x[[/dim]][[bg:#000]]y[[/bg]]",
    ] {
        let joined: String = parse_markup(input)
            .unwrap()
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(joined, strip_markup(input));
        assert_eq!(strip_markup(&joined), strip_markup(input));
    }
}
