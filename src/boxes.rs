//! Box-drawing helpers for `ascii` sequence content.
//!
//! Widths are terminal cells (`unicode-width`), so emoji and CJK count as two.

use std::str::FromStr;

use unicode_width::UnicodeWidthStr;

use crate::foundation::error::{TermsvgError, TermsvgResult};

const ELLIPSIS: &str = "...";

/// Border character set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxStyle {
    /// `╔═╗` double lines.
    #[default]
    Double,
    /// `╭─╮` single lines with rounded corners.
    Rounded,
}

struct BorderChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    separator_left: char,
    separator_right: char,
}

impl BoxStyle {
    fn chars(self) -> BorderChars {
        match self {
            Self::Double => BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                separator_left: '╠',
                separator_right: '╣',
            },
            Self::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                separator_left: '├',
                separator_right: '┤',
            },
        }
    }
}

impl FromStr for BoxStyle {
    type Err = TermsvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double" => Ok(Self::Double),
            "rounded" => Ok(Self::Rounded),
            other => Err(TermsvgError::BoxStyle(other.to_owned())),
        }
    }
}

/// Terminal cell width of `text`, ignoring ANSI SGR escapes (`\x1b[...m`).
pub fn display_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return text.width();
    }
    strip_ansi(text).width()
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            while let Some(&n) = chars.peek() {
                chars.next();
                if n == 'm' || !(n.is_ascii_digit() || n == ';') {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Right-pad `text` with spaces to `width` cells. Wider text is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Cut `text` so it fits in `max_width` cells, ending in `...` when anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_owned();
    }

    let mut out = String::new();
    let mut width = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let w = display_width(c.encode_utf8(&mut buf));
        if width + w + ELLIPSIS.len() > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Greedy word wrap at whitespace.
///
/// Continuation lines start with `indent` and wrap at `max_width - indent` cells. A word too
/// long for a continuation line is truncated; on the first line it is kept whole.
pub fn wrap_text(text: &str, max_width: usize, indent: &str) -> Vec<String> {
    if display_width(text) <= max_width {
        return vec![text.to_owned()];
    }

    let continuation_width = max_width.saturating_sub(display_width(indent));
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let limit = if lines.is_empty() {
            max_width
        } else {
            continuation_width
        };
        if display_width(&current) + 1 + display_width(word) <= limit {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            let word = if display_width(word) > continuation_width {
                truncate_to_width(word, continuation_width)
            } else {
                word.to_owned()
            };
            current = format!("{indent}{word}");
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A bordered box with one space of inner padding on each side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiBox {
    /// Border characters.
    pub style: BoxStyle,
    /// Total width in cells, borders included.
    pub width: usize,
    /// Draw a separator rule after these content line indices.
    pub separator_after: Vec<usize>,
    /// Truncate lines wider than the inner width instead of letting them overflow.
    pub truncate: bool,
}

impl AsciiBox {
    /// Box of `width` cells with truncation on and no separators.
    pub fn new(style: BoxStyle, width: usize) -> Self {
        Self {
            style,
            width,
            separator_after: Vec::new(),
            truncate: true,
        }
    }

    /// Render `lines` inside the box, joined with `\n`.
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let ch = self.style.chars();
        let rule_len = self.width.saturating_sub(2);
        let inner = self.width.saturating_sub(4);
        let rule = |left: char, right: char| {
            let mut s = String::new();
            s.push(left);
            s.extend(std::iter::repeat_n(ch.horizontal, rule_len));
            s.push(right);
            s
        };

        let mut out = vec![rule(ch.top_left, ch.top_right)];
        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let content = if self.truncate && display_width(line) > inner {
                truncate_to_width(line, inner)
            } else {
                line.to_owned()
            };
            out.push(format!(
                "{v} {} {v}",
                pad_to_width(&content, inner),
                v = ch.vertical
            ));
            if self.separator_after.contains(&i) {
                out.push(rule(ch.separator_left, ch.separator_right));
            }
        }
        out.push(rule(ch.bottom_left, ch.bottom_right));
        out.join("\n")
    }
}

/// Draw `lines` in a box of `width` cells.
pub fn draw_box<S: AsRef<str>>(lines: &[S], style: BoxStyle, width: usize) -> String {
    AsciiBox::new(style, width).render(lines)
}

/// Double box with a blank line, `title`, optional `subtitle`, a separator, then `content`.
pub fn draw_box_with_title<S: AsRef<str>>(
    title: &str,
    subtitle: Option<&str>,
    content: &[S],
    width: usize,
) -> String {
    let mut lines = vec![String::new(), title.to_owned()];
    if let Some(sub) = subtitle {
        lines.push(sub.to_owned());
    }
    let separator = lines.len() - 1;
    lines.extend(content.iter().map(|s| s.as_ref().to_owned()));

    AsciiBox {
        separator_after: vec![separator],
        ..AsciiBox::new(BoxStyle::Double, width)
    }
    .render(&lines)
}

/// Parse a style name and draw the box, for callers holding a string identifier.
pub fn draw_box_named<S: AsRef<str>>(lines: &[S], style: &str, width: usize) -> TermsvgResult<String> {
    Ok(draw_box(lines, style.parse()?, width))
}

#[cfg(test)]
#[path = "../tests/unit/boxes.rs"]
mod tests;
