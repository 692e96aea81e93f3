use crate::{
    config::palette::resolve_color,
    markup::error::MarkupError,
    markup::lexer::{Token, TokenKind, char_offset, lex},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Style attributes carried by a [`StyledSpan`].
pub struct SpanStyle {
    /// Foreground color (hex), `None` for the line default.
    pub fg: Option<String>,
    /// Background color (hex).
    pub bg: Option<String>,
    /// Bold weight.
    pub bold: bool,
    /// Dimmed (reduced opacity).
    pub dim: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A contiguous run of text sharing one style.
pub struct StyledSpan {
    /// Text with markup removed.
    pub text: String,
    /// Style of the run.
    #[serde(flatten)]
    pub style: SpanStyle,
}

impl StyledSpan {
    fn new(text: &str, style: &SpanStyle) -> Self {
        Self {
            text: text.to_owned(),
            style: style.clone(),
        }
    }
}

struct OpenTag<'a> {
    tag: &'a str,
    byte_offset: usize,
    restore: SpanStyle,
}

/// Parse `[[tag]]` markup into styled spans.
///
/// Always returns at least one span; empty (or markup-only) input yields a single empty span.
pub fn parse_markup(text: &str) -> Result<Vec<StyledSpan>, MarkupError> {
    if !has_markup(text) {
        return Ok(vec![StyledSpan::new(text, &SpanStyle::default())]);
    }

    let tokens = lex(text)?;
    let mut current = SpanStyle::default();
    let mut stack: Vec<OpenTag<'_>> = Vec::new();
    let mut spans = Vec::new();

    for Token { kind, span } in tokens {
        match kind {
            TokenKind::Text(s) => spans.push(StyledSpan::new(s, &current)),
            TokenKind::Open(tag) => {
                let next = apply_tag(&current, tag);
                stack.push(OpenTag {
                    tag,
                    byte_offset: span.start,
                    restore: std::mem::replace(&mut current, next),
                });
            }
            // A stray closer with nothing open is ignored.
            TokenKind::Close(_name) => {
                if let Some(open) = stack.pop() {
                    current = open.restore;
                }
            }
        }
    }

    if let Some(outermost) = stack.first() {
        return Err(MarkupError::UnclosedTag {
            tag: outermost.tag.to_owned(),
            offset: char_offset(text, outermost.byte_offset),
        });
    }

    let merged = merge_spans(spans);
    if merged.is_empty() {
        return Ok(vec![StyledSpan::default()]);
    }
    Ok(merged)
}

fn apply_tag(base: &SpanStyle, tag: &str) -> SpanStyle {
    let mut s = base.clone();
    match tag {
        "bold" => s.bold = true,
        "dim" => s.dim = true,
        _ => {
            if let Some(name) = tag.strip_prefix("fg:") {
                s.fg = Some(resolve_color(name));
            } else if let Some(name) = tag.strip_prefix("bg:") {
                s.bg = Some(resolve_color(name));
            }
            // Unknown tags still nest; they just change nothing.
        }
    }
    s
}

/// Merge adjacent spans with identical style and drop empty ones.
fn merge_spans(spans: Vec<StyledSpan>) -> Vec<StyledSpan> {
    let mut out: Vec<StyledSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.style == span.style => last.text.push_str(&span.text),
            _ => out.push(span),
        }
    }
    out
}

/// `true` if `text` contains the `[[` tag opener.
pub fn has_markup(text: &str) -> bool {
    text.contains("[[")
}

/// Remove every complete `[[...]]` tag, leaving all other text intact.
///
/// A tag body must be non-empty and contain no `]`; anything else is left as literal text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("[[") {
        let body = &rest[start + 2..];
        let body_len = body.find(']').unwrap_or(body.len());
        if body_len > 0 && body[body_len..].starts_with("]]") {
            out.push_str(&rest[..start]);
            rest = &body[body_len + 2..];
        } else {
            // not a tag; keep the first '[' and rescan from the next char
            out.push_str(&rest[..start + 1]);
            rest = &rest[start + 1..];
        }
    }
    out.push_str(rest);
    out
}

/// Display width in characters of `text` with markup removed.
pub fn display_width(text: &str) -> usize {
    strip_markup(text).chars().count()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/parser.rs"]
mod tests;
