use crate::{
    config::model::{RenderConfig, WindowConfig},
    foundation::{
        error::{TermsvgError, TermsvgResult},
        xml::{escape_xml, fmt_num},
    },
    render::{lines::render_lines, scroll::compile_scroll},
    script::model::{Script, Sequence, validate_sequence_colors},
    timeline::{Timeline, TimelineOpts, build_timeline},
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const PATTERNS: &str = r#"
    <!-- Terminal scanline effect -->
    <pattern id="scanlines" patternUnits="userSpaceOnUse" width="1" height="2">
      <rect width="1" height="1" fill="transparent"/>
      <rect y="1" width="1" height="1" fill="rgba(255,255,255,0.02)"/>
    </pattern>"#;

const FILTERS: &str = r##"
    <!-- Phosphor glow -->
    <filter id="textGlow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur in="SourceAlpha" stdDeviation="0.2" result="coreBlur"/>
      <feGaussianBlur in="SourceAlpha" stdDeviation="1.5" result="mediumBlur"/>
      <feColorMatrix in="mediumBlur" type="matrix" result="greenGlow"
        values="0 0 0 0 0
                0 1 0 0 0.3
                0 0 0 0 0
                0 0 0 1 0"/>
      <feGaussianBlur in="SourceAlpha" stdDeviation="3.5" result="outerBlur"/>
      <feBlend in="coreBlur" in2="greenGlow" mode="screen" result="layer12"/>
      <feBlend in="layer12" in2="outerBlur" mode="screen" result="allLayers"/>
      <feMerge>
        <feMergeNode in="allLayers"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
    <!-- Window shadow -->
    <filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur in="SourceAlpha" stdDeviation="15"/>
      <feOffset dx="0" dy="15" result="offsetblur"/>
      <feFlood flood-color="#000000" flood-opacity="0.8"/>
      <feComposite in2="offsetblur" operator="in"/>
      <feMerge>
        <feMergeNode/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
    <!-- CRT noise -->
    <filter id="crt">
      <feTurbulence type="fractalNoise" baseFrequency="0.01 0.8" numOctaves="1" result="noise"/>
      <feColorMatrix in="noise" type="saturate" values="0" result="desaturatedNoise"/>
      <feComponentTransfer in="desaturatedNoise" result="theNoise">
        <feFuncA type="table" tableValues="0 0 0.05 0"/>
      </feComponentTransfer>
      <feBlend in="SourceGraphic" in2="theNoise" mode="screen"/>
    </filter>"##;

/// Render a complete animated terminal document.
///
/// Validates `config` and the output colors of `sequences`, derives the viewport capacity from its geometry, builds the timeline and
/// assembles the SVG.
#[tracing::instrument(skip(config, sequences), fields(sequences = sequences.len()))]
pub fn render_document(config: &RenderConfig, sequences: &[Sequence]) -> TermsvgResult<String> {
    config.validate()?;
    validate_sequence_colors(sequences)?;
    let timeline = build_timeline(sequences, &TimelineOpts::from_config(config))?;
    let svg = assemble_document(config, &timeline);
    tracing::debug!(
        bytes = svg.len(),
        total_ms = timeline.total_duration_ms,
        "document assembled"
    );
    Ok(svg)
}

/// [`render_document`] for a loaded [`Script`], after validating it.
pub fn render_script(script: &Script) -> TermsvgResult<String> {
    script.validate()?;
    render_document(&script.config(), &script.sequences)
}

/// Assemble the animated document for an already-built timeline.
pub fn assemble_document(config: &RenderConfig, timeline: &Timeline) -> String {
    let t = &config.terminal;
    let line_height = t.line_height_px();
    let origin = content_origin(config);

    let content = format!(
        "{scroll}\n{lines}",
        scroll = compile_scroll(&timeline.frames, line_height, t.scroll_duration, origin),
        lines = render_lines(&timeline.frames, t, line_height),
    );
    wrap_document(config, &content)
}

/// Translation of the scroll container: left padding, and title bar plus top padding.
pub fn content_origin(config: &RenderConfig) -> (f64, f64) {
    let pad = config.terminal.padding;
    (pad, config.window.title_bar.height + pad)
}

/// Wrap terminal content (already positioned in container space) in the window chrome.
pub(crate) fn wrap_document(config: &RenderConfig, content: &str) -> String {
    let w = &config.window;
    let group = if w.shadow {
        r#"<g filter="url(#shadow)">"#
    } else {
        "<g>"
    };

    format!(
        r#"<svg width="{width}" height="{height}" xmlns="{SVG_NS}">
  <defs>{PATTERNS}{FILTERS}
  </defs>

  {group}{window}{title_bar}{terminal}
  </g>
</svg>
"#,
        width = fmt_num(w.width),
        height = fmt_num(w.height),
        window = window_background(w),
        title_bar = title_bar(w, &config.terminal.font_family),
        terminal = terminal_viewport(config, content),
    )
}

fn window_background(w: &WindowConfig) -> String {
    format!(
        r#"
    <!-- Window background -->
    <rect x="0" y="0" width="{width}" height="{height}" rx="{r}" ry="{r}" fill="{fill}"/>"#,
        width = fmt_num(w.width),
        height = fmt_num(w.height),
        r = fmt_num(w.border_radius),
        fill = w.background_color,
    )
}

fn title_bar(w: &WindowConfig, font_family: &str) -> String {
    let bar = &w.title_bar;
    format!(
        r#"
    <!-- Title bar -->
    <rect x="0" y="0" width="{width}" height="{height}" rx="{r}" ry="{r}" fill="{fill}"/>
    <rect x="0" y="16" width="{width}" height="16" fill="{fill}"/>
    <g id="window-controls">
      <circle cx="20" cy="16" r="6" fill="{close}"/>
      <circle cx="40" cy="16" r="6" fill="{minimize}"/>
      <circle cx="60" cy="16" r="6" fill="{maximize}"/>
    </g>
    <text x="{cx}" y="21" font-family="{font}" font-size="13" fill="{title_color}" text-anchor="middle">{title}</text>"#,
        width = fmt_num(w.width),
        height = fmt_num(bar.height),
        r = fmt_num(w.border_radius),
        fill = bar.background_color,
        close = bar.buttons.close,
        minimize = bar.buttons.minimize,
        maximize = bar.buttons.maximize,
        cx = fmt_num(w.width / 2.0),
        font = escape_xml(font_family),
        title_color = bar.title_color,
        title = escape_xml(&bar.title),
    )
}

fn terminal_viewport(config: &RenderConfig, content: &str) -> String {
    let w = &config.window;
    let (x, y) = content_origin(config);
    format!(
        r#"
    <!-- Terminal viewport -->
    <defs>
      <clipPath id="terminalViewport">
        <rect x="0" y="{top}" width="{width}" height="{height}"/>
      </clipPath>
    </defs>
    <rect x="0" y="{top}" width="{width}" height="{height}" fill="{fill}"/>
    <g clip-path="url(#terminalViewport)">
      <g id="scrollContainer" transform="translate({x}, {y})">{content}
      </g>
    </g>"#,
        top = fmt_num(w.title_bar.height),
        width = fmt_num(w.width),
        height = fmt_num(w.height - w.title_bar.height),
        fill = config.terminal.background_color,
        x = fmt_num(x),
        y = fmt_num(y),
    )
}

/// Summary of a parsed document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgStats {
    /// Document width.
    pub width: f32,
    /// Document height.
    pub height: f32,
    /// Text nodes that survived conversion (zero when no font matches).
    pub text_nodes: usize,
}

/// Parse `svg` with `usvg` to prove it is a well-formed, renderable document.
pub fn verify_svg(svg: &str) -> TermsvgResult<SvgStats> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| TermsvgError::validation(format!("generated svg does not parse: {e}")))?;
    let size = tree.size();
    Ok(SvgStats {
        width: size.width(),
        height: size.height(),
        text_nodes: count_text_nodes(tree.root()),
    })
}

fn count_text_nodes(group: &usvg::Group) -> usize {
    let mut n = 0usize;
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => n += count_text_nodes(g.as_ref()),
            usvg::Node::Text(_) => n += 1,
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
    n
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
