use std::sync::Arc;

use crate::{
    config::model::RenderConfig,
    foundation::{
        error::{TermsvgError, TermsvgResult},
        xml::{escape_xml, fmt_num, text_width},
    },
    render::{document::wrap_document, lines::render_output_text},
    timeline::{AnimationFrame, BufferLine, Timeline},
};

/// Render the end state of `timeline` as a static document (no animation elements).
///
/// Visible lines come from the [`AnimationFrame::Final`] frame and are laid out from the top of
/// the viewport.
pub fn render_snapshot_svg(config: &RenderConfig, timeline: &Timeline) -> TermsvgResult<String> {
    let Some(AnimationFrame::Final { buffer, .. }) = timeline.final_frame() else {
        return Err(TermsvgError::validation("timeline has no final frame"));
    };

    let t = &config.terminal;
    let line_height = t.line_height_px();
    let font = format!(
        r#"font-family="{}" font-size="{}""#,
        escape_xml(&t.font_family),
        fmt_num(t.font_size)
    );

    let mut content = String::new();
    for (row, line) in buffer.iter().enumerate() {
        let body = match line {
            BufferLine::Command {
                prompt, command, ..
            } => format!(
                r#"<text {font} fill="{pc}" filter="url(#textGlow)" xml:space="preserve">{p}</text>
      <text x="{x}" {font} fill="{tc}" filter="url(#textGlow)" xml:space="preserve">{c}</text>"#,
                pc = t.prompt_color,
                p = escape_xml(prompt),
                x = fmt_num(text_width(prompt, t.font_size)),
                tc = t.text_color,
                c = escape_xml(command),
            ),
            BufferLine::Output { content, color } => render_output_text(content, color, t),
        };
        content.push_str(&format!(
            r#"
    <g id="line-{row}" transform="translate(0, {y})">
      {body}
    </g>"#,
            y = fmt_num(row as f64 * line_height),
        ));
    }

    Ok(wrap_document(config, &content))
}

/// A rasterized snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major.
    pub data: Vec<u8>,
}

impl SnapshotImage {
    /// Straight-alpha RGBA8 pixels, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Rasterize the end state of `timeline` with `resvg` using system fonts.
#[tracing::instrument(skip(config, timeline))]
pub fn rasterize_snapshot(config: &RenderConfig, timeline: &Timeline) -> TermsvgResult<SnapshotImage> {
    let svg = render_snapshot_svg(config, timeline)?;

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "font database loaded");
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| TermsvgError::validation(format!("snapshot svg does not parse: {e}")))?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| TermsvgError::validation("failed to allocate snapshot pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(SnapshotImage {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

fn to_px(v: f32) -> TermsvgResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(TermsvgError::validation("snapshot has invalid width/height"));
    }
    Ok((v.ceil() as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/snapshot.rs"]
mod tests;
