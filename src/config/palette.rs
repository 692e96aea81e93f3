//! Dracula-inspired palette and the color-name table used by `[[fg:..]]` / `[[bg:..]]` tags.

/// Named palette colors.
pub mod colors {
    /// Git commits, warnings.
    pub const YELLOW: &str = "#f1fa8c";
    /// Network output.
    pub const CYAN: &str = "#8be9fd";
    /// Success messages.
    pub const GREEN: &str = "#50fa7b";
    /// Jokes, special content.
    pub const PINK: &str = "#ff79c6";
    /// ASCII art.
    pub const PURPLE: &str = "#bd93f9";
    /// Default text; fallback for unknown color names.
    pub const WHITE: &str = "#ffffff";
    /// Highlights.
    pub const ORANGE: &str = "#ffb86c";
    /// Muted text.
    pub const COMMENT: &str = "#6272a4";
    /// Stats, profile info.
    pub const BLUE: &str = "#729fcf";
    /// Prompt color.
    pub const NEON_GREEN: &str = "#00ff9f";
    /// Cursor color.
    pub const MATRIX_GREEN: &str = "#00ff41";
    /// Terminal background.
    pub const BACKGROUND: &str = "#0a0e27";
    /// Title bar background.
    pub const TITLE_BAR_BG: &str = "#151b2e";
}

/// Lowercase color name to hex value, sorted by name for binary search.
pub const COLOR_TABLE: &[(&str, &str)] = &[
    ("background", colors::BACKGROUND),
    ("black", "#21222c"),
    ("blue", colors::BLUE),
    ("bright_black", "#6272a4"),
    ("bright_blue", "#d6acff"),
    ("bright_cyan", "#a4ffff"),
    ("bright_green", "#69ff94"),
    ("bright_magenta", "#ff92df"),
    ("bright_red", "#ff6e6e"),
    ("bright_white", "#ffffff"),
    ("bright_yellow", "#ffffa5"),
    ("comment", colors::COMMENT),
    ("cyan", colors::CYAN),
    ("green", colors::GREEN),
    ("magenta", colors::PINK),
    ("matrix_green", colors::MATRIX_GREEN),
    ("neon_green", colors::NEON_GREEN),
    ("orange", colors::ORANGE),
    ("pink", colors::PINK),
    ("purple", colors::PURPLE),
    ("red", "#ff5555"),
    ("title_bar_bg", colors::TITLE_BAR_BG),
    ("white", colors::WHITE),
    ("yellow", colors::YELLOW),
];

/// Look up a color name (case-insensitive) without falling back.
pub fn lookup_color(name: &str) -> Option<&'static str> {
    let key = name.to_ascii_lowercase();
    COLOR_TABLE
        .binary_search_by(|(n, _)| (*n).cmp(key.as_str()))
        .ok()
        .map(|i| COLOR_TABLE[i].1)
}

/// Resolve a tag color argument to a hex value.
///
/// `#`-prefixed literals pass through unchanged; unknown names resolve to white.
pub fn resolve_color(name: &str) -> String {
    if name.starts_with('#') {
        return name.to_owned();
    }
    lookup_color(name).unwrap_or(colors::WHITE).to_owned()
}

/// `true` for `#rgb`, `#rrggbb` and `#rrggbbaa` literals.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;
