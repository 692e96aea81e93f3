//! Small helpers shared by everything that emits SVG text.

/// Width of one monospace cell as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Approximate rendered width of `char_count` monospace cells.
pub fn cells_width(char_count: usize, font_size_px: f64) -> f64 {
    char_count as f64 * font_size_px * CHAR_WIDTH_RATIO
}

/// Approximate rendered width of `text` in a monospace font.
///
/// Counts Unicode scalar values, not bytes.
pub fn text_width(text: &str, font_size_px: f64) -> f64 {
    cells_width(text.chars().count(), font_size_px)
}

/// Format a coordinate or millisecond value for an SVG attribute.
///
/// Values are rounded to three decimals so float noise (`8.399999999999999`) never reaches the
/// document, and integral values print without a fractional part.
pub fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        // avoids "-0"
        return "0".to_owned();
    }
    if r.fract() == 0.0 && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

/// Round to one decimal place.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/xml.rs"]
mod tests;
