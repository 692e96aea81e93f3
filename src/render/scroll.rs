use crate::{
    foundation::xml::{fmt_num, round1},
    timeline::AnimationFrame,
};

/// Compile scroll frames into `animateTransform` keyframes for the scroll container.
///
/// `origin` is the container's resting translation. Each keyframe translates from
/// `origin.1 - scrolled` to `origin.1 - scrolled - scroll_lines * line_height_px`, starting at
/// the frame time, running for `scroll_duration_ms` and freezing. Y coordinates and the line
/// height are rounded to one decimal.
pub fn compile_scroll(
    frames: &[AnimationFrame],
    line_height_px: f64,
    scroll_duration_ms: u64,
    origin: (f64, f64),
) -> String {
    let line_height = round1(line_height_px);
    let (x, base_y) = origin;
    let x = fmt_num(x);

    let mut out = String::new();
    let mut scrolled = 0.0;
    for frame in frames {
        let AnimationFrame::Scroll {
            time, scroll_lines, ..
        } = frame
        else {
            continue;
        };
        let from_y = round1(base_y - scrolled);
        scrolled += *scroll_lines as f64 * line_height;
        let to_y = round1(base_y - scrolled);

        out.push_str(&format!(
            r#"
        <animateTransform attributeName="transform" type="translate" from="{x} {from}" to="{x} {to}" begin="{time}ms" dur="{scroll_duration_ms}ms" fill="freeze"/>"#,
            from = fmt_num(from_y),
            to = fmt_num(to_y),
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scroll.rs"]
mod tests;
