use std::collections::BTreeMap;

use crate::{
    config::model::TerminalStyle,
    foundation::xml::{CHAR_WIDTH_RATIO, cells_width, escape_xml, fmt_num, text_width},
    markup::{StyledSpan, has_markup, parse_markup},
    timeline::AnimationFrame,
};

/// Fade-in duration shared by prompts, characters and output lines.
pub const FADE_IN_MS: u64 = 10;
/// Duration of one cursor step.
pub const CURSOR_STEP_MS: u64 = 1;
/// Fill opacity applied to dimmed spans.
pub const DIM_OPACITY: f64 = 0.6;
/// Cursor and highlight top edge as a fraction of the font size above the baseline.
pub const CURSOR_RISE_RATIO: f64 = 0.85;

/// Render every revealed line from the reveal frames.
///
/// If two frames target the same `line_index` the later one wins. Lines are emitted in index
/// order, each translated to `line_index * line_height_px`.
pub fn render_lines(frames: &[AnimationFrame], style: &TerminalStyle, line_height_px: f64) -> String {
    let mut lines: BTreeMap<usize, String> = BTreeMap::new();

    for frame in frames {
        match frame {
            AnimationFrame::AddCommand {
                time,
                line_index,
                prompt,
                command,
                typing_duration_ms,
            } => {
                let y = *line_index as f64 * line_height_px;
                let svg = render_command_line(
                    *line_index,
                    y,
                    prompt,
                    command,
                    *time,
                    *typing_duration_ms,
                    style,
                );
                lines.insert(*line_index, svg);
            }
            AnimationFrame::AddOutput {
                time,
                line_index,
                content,
                color,
            } => {
                let y = *line_index as f64 * line_height_px;
                let svg = render_output_line(*line_index, y, content, color, *time, style);
                lines.insert(*line_index, svg);
            }
            AnimationFrame::Scroll { .. } | AnimationFrame::Final { .. } => {}
        }
    }

    lines.into_values().collect::<Vec<_>>().join("\n")
}

/// A command line: prompt fade-in, per-character typing and the block cursor.
pub fn render_command_line(
    line_index: usize,
    y: f64,
    prompt: &str,
    command: &str,
    start_ms: u64,
    typing_ms: u64,
    style: &TerminalStyle,
) -> String {
    let prompt_width = text_width(prompt, style.font_size);
    let char_ms = char_duration(command, typing_ms);

    let chars: String = command
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let begin = start_ms as f64 + i as f64 * char_ms;
            format!(
                r#"<tspan opacity="0">{c}<animate attributeName="opacity" from="0" to="1" begin="{begin}ms" dur="{FADE_IN_MS}ms" fill="freeze"/></tspan>"#,
                c = escape_xml(c.encode_utf8(&mut [0; 4])),
                begin = fmt_num(begin),
            )
        })
        .collect();

    format!(
        r#"
    <!-- Command line {line_index} -->
    <g id="line-{line_index}" transform="translate(0, {y})">
      <text {font} fill="{prompt_color}" filter="url(#textGlow)" xml:space="preserve" opacity="0">{prompt}<animate attributeName="opacity" from="0" to="1" begin="{start_ms}ms" dur="{FADE_IN_MS}ms" fill="freeze"/></text>
      <text x="{x}" {font} fill="{text_color}" filter="url(#textGlow)" xml:space="preserve">{chars}</text>
      {cursor}
    </g>"#,
        y = fmt_num(y),
        font = font_attrs(style),
        prompt_color = style.prompt_color,
        prompt = escape_xml(prompt),
        x = fmt_num(prompt_width),
        text_color = style.text_color,
        cursor = render_cursor(prompt, command, start_ms, typing_ms, style),
    )
}

/// The block cursor for a command line.
///
/// Appears at `start_ms`, blinks until typing ends, then hides. Its `x` steps one cell right
/// just after each character appears.
pub fn render_cursor(
    prompt: &str,
    command: &str,
    start_ms: u64,
    typing_ms: u64,
    style: &TerminalStyle,
) -> String {
    let prompt_width = text_width(prompt, style.font_size);
    let cell = style.font_size * CHAR_WIDTH_RATIO;
    let char_ms = char_duration(command, typing_ms);
    let end_ms = start_ms + typing_ms;

    let steps: String = (0..command.chars().count())
        .map(|i| {
            let begin = start_ms as f64 + i as f64 * char_ms + FADE_IN_MS as f64;
            format!(
                r#"
        <animate attributeName="x" from="{from}" to="{to}" begin="{begin}ms" dur="{CURSOR_STEP_MS}ms" fill="freeze"/>"#,
                from = fmt_num(prompt_width + i as f64 * cell),
                to = fmt_num(prompt_width + (i + 1) as f64 * cell),
                begin = fmt_num(begin),
            )
        })
        .collect();

    format!(
        r#"<!-- Cursor -->
      <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{color}" opacity="0">
        <animate attributeName="opacity" from="0" to="1" begin="{start_ms}ms" dur="{FADE_IN_MS}ms" fill="freeze"/>
        <animate attributeName="opacity" values="1;1;0;0" dur="1s" begin="{start_ms}ms" end="{end_ms}ms" repeatCount="indefinite"/>
        <animate attributeName="opacity" to="0" begin="{end_ms}ms" dur="{FADE_IN_MS}ms" fill="freeze"/>{steps}
      </rect>"#,
        x = fmt_num(prompt_width),
        y = fmt_num(-style.font_size * CURSOR_RISE_RATIO),
        w = fmt_num(cell),
        h = fmt_num(style.font_size),
        color = style.cursor_color,
    )
}

/// An output line that fades in as a unit at `start_ms`.
pub fn render_output_line(
    line_index: usize,
    y: f64,
    content: &str,
    color: &str,
    start_ms: u64,
    style: &TerminalStyle,
) -> String {
    format!(
        r#"
    <!-- Output line {line_index} -->
    <g id="line-{line_index}" transform="translate(0, {y})" opacity="0">
      <animate attributeName="opacity" from="0" to="1" begin="{start_ms}ms" dur="{FADE_IN_MS}ms" fill="freeze"/>
      {body}
    </g>"#,
        y = fmt_num(y),
        body = render_output_text(content, color, style),
    )
}

/// Static text body of an output line: styled when it carries valid markup, plain otherwise.
pub(crate) fn render_output_text(content: &str, color: &str, style: &TerminalStyle) -> String {
    if has_markup(content) {
        match parse_markup(content) {
            Ok(spans) => return render_spans(&spans, color, style),
            Err(err) => {
                tracing::debug!(error = %err, "markup error; rendering line as plain text");
            }
        }
    }
    format!(
        r#"<text {font} fill="{color}" filter="url(#textGlow)" xml:space="preserve">{text}</text>"#,
        font = font_attrs(style),
        color = escape_xml(color),
        text = escape_xml(content),
    )
}

/// Highlight rects for `bg` spans followed by one text element with a tspan per span.
fn render_spans(spans: &[StyledSpan], default_color: &str, style: &TerminalStyle) -> String {
    let mut highlights = String::new();
    let mut tspans = String::new();
    let mut cells = 0usize;

    for span in spans {
        let len = span.text.chars().count();
        if let Some(bg) = &span.style.bg
            && len > 0
        {
            highlights.push_str(&format!(
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{bg}"/>"#,
                x = fmt_num(cells_width(cells, style.font_size)),
                y = fmt_num(-style.font_size * CURSOR_RISE_RATIO),
                w = fmt_num(cells_width(len, style.font_size)),
                h = fmt_num(style.font_size),
                bg = escape_xml(bg),
            ));
            highlights.push_str("\n      ");
        }
        cells += len;

        // Markup colors are unchecked user text.
        let fill = escape_xml(span.style.fg.as_deref().unwrap_or(default_color));
        let mut attrs = format!(r#"fill="{fill}""#);
        if span.style.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if span.style.dim {
            attrs.push_str(&format!(r#" fill-opacity="{}""#, fmt_num(DIM_OPACITY)));
        }
        tspans.push_str(&format!("<tspan {attrs}>{}</tspan>", escape_xml(&span.text)));
    }

    format!(
        r#"{highlights}<text {font} fill="{default_color}" filter="url(#textGlow)" xml:space="preserve">{tspans}</text>"#,
        font = font_attrs(style),
        default_color = escape_xml(default_color),
    )
}

fn font_attrs(style: &TerminalStyle) -> String {
    format!(
        r#"font-family="{}" font-size="{}""#,
        escape_xml(&style.font_family),
        fmt_num(style.font_size)
    )
}

fn char_duration(command: &str, typing_ms: u64) -> f64 {
    match command.chars().count() {
        0 => 0.0,
        n => typing_ms as f64 / n as f64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/lines.rs"]
mod tests;
