use crate::markup::error::MarkupError;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) kind: TokenKind<'a>,
    /// Byte span in the source, including the `[[`/`]]` delimiters for tags.
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    Text(&'a str),
    /// Tag body without delimiters, e.g. `fg:green`.
    Open(&'a str),
    /// Tag name without the leading `/`, e.g. `fg`.
    Close(&'a str),
}

/// Split `input` into text runs and tags.
///
/// The only lexical error is a `[[` with no `]]` after it.
pub(crate) fn lex(input: &str) -> Result<Vec<Token<'_>>, MarkupError> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while pos < input.len() {
        let Some(rel) = input[pos..].find(OPEN) else {
            out.push(Token {
                kind: TokenKind::Text(&input[pos..]),
                span: Span {
                    start: pos,
                    end: input.len(),
                },
            });
            break;
        };
        let open_start = pos + rel;

        if open_start > pos {
            out.push(Token {
                kind: TokenKind::Text(&input[pos..open_start]),
                span: Span {
                    start: pos,
                    end: open_start,
                },
            });
        }

        let body_start = open_start + OPEN.len();
        let Some(rel_close) = input[body_start..].find(CLOSE) else {
            return Err(MarkupError::Unterminated {
                tag: input[body_start..].to_owned(),
                offset: char_offset(input, open_start),
            });
        };
        let body_end = body_start + rel_close;
        let end = body_end + CLOSE.len();
        let body = &input[body_start..body_end];

        let kind = match body.strip_prefix('/') {
            Some(name) => TokenKind::Close(name),
            None => TokenKind::Open(body),
        };
        out.push(Token {
            kind,
            span: Span {
                start: open_start,
                end,
            },
        });
        pos = end;
    }

    Ok(out)
}

/// Convert a byte offset into a character offset.
pub(crate) fn char_offset(input: &str, byte: usize) -> usize {
    input[..byte].chars().count()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/lexer.rs"]
mod tests;
