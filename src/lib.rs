//! termsvg turns a scripted terminal session into a self-contained animated SVG.
//!
//! A script is an ordered list of [`Sequence`]s: commands typed after a prompt, and blocks of
//! output that may carry inline `[[tag]]` style markup.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `&[Sequence] -> Timeline` ([`build_timeline`]). One running clock, an
//!    append-only line buffer and a viewport cursor; emits scroll and reveal frames.
//! 2. **Compile**: scroll frames become `animateTransform` keyframes ([`compile_scroll`]).
//! 3. **Render**: reveal frames become per-line groups with typing, cursor and fade-in
//!    animation ([`render_lines`]).
//! 4. **Assemble**: window chrome, filters and a clipped viewport wrap the content
//!    ([`render_document`]).
//!
//! Everything is pure and deterministic: identical inputs give byte-identical documents.
//! Configuration is an explicit [`RenderConfig`] value passed into each call.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod markup;
mod render;
mod script;
mod timeline;

pub mod boxes;

pub use config::model::{
    ButtonColors, DEFAULT_FONT_FAMILY, DEFAULT_PROMPT, Geometry, RenderConfig, TerminalStyle,
    TitleBarConfig, WindowConfig,
};
pub use config::palette::{colors, is_hex_color, lookup_color, resolve_color};
pub use foundation::error::{TermsvgError, TermsvgResult};
pub use foundation::xml::{escape_xml, text_width};
pub use markup::{
    MarkupError, SpanStyle, StyledSpan, display_width, has_markup, parse_markup, strip_markup,
};
pub use render::document::{
    SvgStats, assemble_document, content_origin, render_document, render_script, verify_svg,
};
pub use render::lines::{render_command_line, render_cursor, render_lines, render_output_line};
pub use render::scroll::compile_scroll;
pub use render::snapshot::{SnapshotImage, rasterize_snapshot, render_snapshot_svg};
pub use script::dsl::ScriptBuilder;
pub use script::model::{
    CommandSeq, DEFAULT_PAUSE_MS, DEFAULT_TYPING_MS, OutputSeq, Script, Sequence,
    validate_sequence_colors,
};
pub use script::timing;
pub use script::timing::reading_pause_ms;
pub use timeline::{
    AnimationFrame, BufferLine, OUTPUT_BLOCK_TAIL_MS, OUTPUT_LINE_STAGGER_MS, SCROLL_SETTLE_MS,
    Timeline, TimelineOpts, build_timeline, build_timeline_json,
};
