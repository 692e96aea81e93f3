//! `[[tag]]` inline style markup for output lines.
//!
//! Supported tags: `[[bold]]`, `[[dim]]`, `[[fg:<name-or-hex>]]`, `[[bg:<name-or-hex>]]`, each
//! closed by `[[/bold]]`, `[[/dim]]`, `[[/fg]]`, `[[/bg]]`. Tags nest; a closer restores the
//! style that was active before the matching opener.

mod error;
mod lexer;
mod parser;

pub use error::MarkupError;
pub use parser::{SpanStyle, StyledSpan, display_width, has_markup, parse_markup, strip_markup};
