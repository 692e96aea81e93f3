use crate::{
    config::palette::{colors, is_hex_color},
    foundation::error::{TermsvgError, TermsvgResult},
};

/// Default prompt used by command sequences that do not set their own.
pub const DEFAULT_PROMPT: &str = "william@dad-joke-hq:~$ ";

/// Monospace font stack used for all terminal text.
pub const DEFAULT_FONT_FAMILY: &str =
    "JetBrains Mono, Fira Code, Ubuntu Mono, Consolas, Monaco, monospace";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Immutable render configuration passed explicitly into the assembler and renderers.
///
/// Every field is defaulted, so a partial JSON object overrides defaults field by field.
pub struct RenderConfig {
    /// Outer window chrome.
    pub window: WindowConfig,
    /// Terminal text area.
    pub terminal: TerminalStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Window dimensions and chrome.
pub struct WindowConfig {
    /// Document width in pixels.
    pub width: f64,
    /// Document height in pixels.
    pub height: f64,
    /// Window fill color.
    pub background_color: String,
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Apply the drop shadow filter to the window group.
    pub shadow: bool,
    /// Title bar settings.
    pub title_bar: TitleBarConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Title bar above the terminal viewport.
pub struct TitleBarConfig {
    /// Bar height in pixels.
    pub height: f64,
    /// Bar fill color.
    pub background_color: String,
    /// Centered title text.
    pub title: String,
    /// Title text color.
    pub title_color: String,
    /// Traffic-light control colors.
    pub buttons: ButtonColors,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Window control colors.
pub struct ButtonColors {
    /// Close button.
    pub close: String,
    /// Minimize button.
    pub minimize: String,
    /// Maximize button.
    pub maximize: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Terminal text area: fonts, colors, spacing and scroll timing.
pub struct TerminalStyle {
    /// Inner padding in pixels.
    pub padding: f64,
    /// Font family stack.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Line height as a multiple of `font_size`.
    pub line_height: f64,
    /// Default output and command text color.
    pub text_color: String,
    /// Block cursor color.
    pub cursor_color: String,
    /// Viewport background color.
    pub background_color: String,
    /// Default prompt text.
    pub prompt: String,
    /// Prompt color.
    pub prompt_color: String,
    /// Duration of one scroll animation in milliseconds.
    pub scroll_duration: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background_color: colors::BACKGROUND.to_owned(),
            border_radius: 12.0,
            shadow: true,
            title_bar: TitleBarConfig::default(),
        }
    }
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            height: 36.0,
            background_color: colors::TITLE_BAR_BG.to_owned(),
            title: "william@dad-joke-hq:~".to_owned(),
            title_color: "#e0e6ed".to_owned(),
            buttons: ButtonColors::default(),
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            close: "#ff5f57".to_owned(),
            minimize: "#ffbd2e".to_owned(),
            maximize: "#28ca42".to_owned(),
        }
    }
}

impl Default for TerminalStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size: 14.0,
            line_height: 1.5,
            text_color: "#e4e4e4".to_owned(),
            cursor_color: colors::MATRIX_GREEN.to_owned(),
            background_color: colors::BACKGROUND.to_owned(),
            prompt: DEFAULT_PROMPT.to_owned(),
            prompt_color: colors::NEON_GREEN.to_owned(),
            scroll_duration: 100,
        }
    }
}

impl TerminalStyle {
    /// Line height in pixels.
    pub fn line_height_px(&self) -> f64 {
        self.font_size * self.line_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pixel geometry of the terminal viewport derived from a [`RenderConfig`].
pub struct Geometry {
    /// Viewport width in pixels.
    pub viewport_width_px: f64,
    /// Height available to text lines (window minus title bar minus vertical padding).
    pub viewport_height_px: f64,
    /// Height of one terminal line.
    pub line_height_px: f64,
    /// Inner padding.
    pub padding_px: f64,
}

impl Geometry {
    /// Number of whole lines that fit in the viewport.
    pub fn max_visible_lines(&self) -> usize {
        if self.line_height_px <= 0.0 || self.viewport_height_px <= 0.0 {
            return 0;
        }
        (self.viewport_height_px / self.line_height_px).floor() as usize
    }
}

impl RenderConfig {
    /// Derive viewport geometry.
    pub fn geometry(&self) -> Geometry {
        let t = &self.terminal;
        Geometry {
            viewport_width_px: self.window.width,
            viewport_height_px: self.window.height - self.window.title_bar.height - t.padding * 2.0,
            line_height_px: t.line_height_px(),
            padding_px: t.padding,
        }
    }

    /// Validate static invariants (positive sizes, hex colors, at least one visible line).
    pub fn validate(&self) -> TermsvgResult<()> {
        let w = &self.window;
        let t = &self.terminal;

        for (name, v) in [
            ("window.width", w.width),
            ("window.height", w.height),
            ("terminal.fontSize", t.font_size),
            ("terminal.lineHeight", t.line_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TermsvgError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("window.borderRadius", w.border_radius),
            ("window.titleBar.height", w.title_bar.height),
            ("terminal.padding", t.padding),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(TermsvgError::validation(format!("{name} must be >= 0")));
            }
        }

        for (name, c) in [
            ("window.backgroundColor", &w.background_color),
            ("window.titleBar.backgroundColor", &w.title_bar.background_color),
            ("window.titleBar.titleColor", &w.title_bar.title_color),
            ("window.titleBar.buttons.close", &w.title_bar.buttons.close),
            ("window.titleBar.buttons.minimize", &w.title_bar.buttons.minimize),
            ("window.titleBar.buttons.maximize", &w.title_bar.buttons.maximize),
            ("terminal.textColor", &t.text_color),
            ("terminal.cursorColor", &t.cursor_color),
            ("terminal.backgroundColor", &t.background_color),
            ("terminal.promptColor", &t.prompt_color),
        ] {
            if !is_hex_color(c) {
                return Err(TermsvgError::validation(format!(
                    "{name} must be a hex color, got '{c}'"
                )));
            }
        }

        if self.geometry().max_visible_lines() == 0 {
            return Err(TermsvgError::validation(
                "viewport is too small to show a single line",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
