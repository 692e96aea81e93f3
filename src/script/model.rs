use std::path::Path;

use crate::{
    config::model::{RenderConfig, TerminalStyle, WindowConfig},
    config::palette::is_hex_color,
    foundation::error::{TermsvgError, TermsvgResult},
};

/// Typing duration used when a command does not set one.
pub const DEFAULT_TYPING_MS: u64 = 2000;
/// Pause after a sequence when none is set.
pub const DEFAULT_PAUSE_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// One scripted event: a typed command or a block of output.
pub enum Sequence {
    /// A command typed character by character after a prompt.
    Command(CommandSeq),
    /// Program output; may span several `\n`-separated lines and contain markup.
    Output(OutputSeq),
    /// ASCII art; timed and rendered exactly like [`Sequence::Output`].
    Ascii(OutputSeq),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of [`Sequence::Command`].
pub struct CommandSeq {
    /// Prompt override; the terminal default prompt is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Command text.
    pub content: String,
    /// Total typing time in milliseconds.
    #[serde(
        default,
        rename = "typingDuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub typing_duration_ms: Option<u64>,
    /// Pause after typing completes.
    #[serde(default, rename = "pause", skip_serializing_if = "Option::is_none")]
    pub pause_ms: Option<u64>,
    /// Delay before the command appears.
    #[serde(default, rename = "delay", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Payload of [`Sequence::Output`] and [`Sequence::Ascii`].
pub struct OutputSeq {
    /// Output text, `\n`-separated.
    pub content: String,
    /// Hex color; the terminal text color is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pause after the block is shown.
    #[serde(default, rename = "pause", skip_serializing_if = "Option::is_none")]
    pub pause_ms: Option<u64>,
    /// Delay before the first line appears.
    #[serde(default, rename = "delay", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl Sequence {
    /// Delay before the sequence starts (default 0).
    pub fn delay_ms(&self) -> u64 {
        match self {
            Self::Command(c) => c.delay_ms,
            Self::Output(o) | Self::Ascii(o) => o.delay_ms,
        }
        .unwrap_or(0)
    }

    /// Pause after the sequence ends (default [`DEFAULT_PAUSE_MS`]).
    pub fn pause_ms(&self) -> u64 {
        match self {
            Self::Command(c) => c.pause_ms,
            Self::Output(o) | Self::Ascii(o) => o.pause_ms,
        }
        .unwrap_or(DEFAULT_PAUSE_MS)
    }

    /// Raw text content.
    pub fn content(&self) -> &str {
        match self {
            Self::Command(c) => &c.content,
            Self::Output(o) | Self::Ascii(o) => &o.content,
        }
    }

    /// Decode a JSON sequence list, rejecting anything that is not an array.
    pub fn list_from_value(value: &serde_json::Value) -> TermsvgResult<Vec<Sequence>> {
        if !value.is_array() {
            return Err(TermsvgError::validation("sequences must be an array"));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| TermsvgError::serde(format!("invalid sequence: {e}")))
    }
}

/// Reject output colors that are not `#rgb` / `#rrggbb`.
pub fn validate_sequence_colors(sequences: &[Sequence]) -> TermsvgResult<()> {
    for (i, seq) in sequences.iter().enumerate() {
        if let Sequence::Output(o) | Sequence::Ascii(o) = seq
            && let Some(color) = &o.color
            && !is_hex_color(color)
        {
            return Err(TermsvgError::validation(format!(
                "sequences[{i}].color must be a hex color, got '{color}'"
            )));
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete input document: optional window/terminal overrides plus the sequence list.
pub struct Script {
    /// Window overrides merged onto defaults.
    #[serde(default)]
    pub window: WindowConfig,
    /// Terminal overrides merged onto defaults.
    #[serde(default)]
    pub terminal: TerminalStyle,
    /// Scripted events in playback order.
    pub sequences: Vec<Sequence>,
}

impl Script {
    /// Render configuration carried by this script.
    pub fn config(&self) -> RenderConfig {
        RenderConfig {
            window: self.window.clone(),
            terminal: self.terminal.clone(),
        }
    }

    /// Validate configuration and per-sequence colors.
    pub fn validate(&self) -> TermsvgResult<()> {
        self.config().validate()?;
        validate_sequence_colors(&self.sequences)
    }

    /// Decode a script from a JSON value.
    pub fn from_value(value: serde_json::Value) -> TermsvgResult<Self> {
        let Some(obj) = value.as_object() else {
            return Err(TermsvgError::validation("script must be a JSON object"));
        };
        match obj.get("sequences") {
            Some(seqs) if seqs.is_array() => {}
            _ => return Err(TermsvgError::validation("sequences must be an array")),
        }
        serde_json::from_value(value).map_err(|e| TermsvgError::serde(format!("invalid script: {e}")))
    }

    /// Decode a script from JSON text.
    pub fn from_json_str(json: &str) -> TermsvgResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| TermsvgError::serde(format!("invalid JSON in script: {e}")))?;
        Self::from_value(value)
    }

    /// Read and decode a script file.
    #[tracing::instrument]
    pub fn read(path: &Path) -> TermsvgResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| read_error(path, &e))?;
        let script = Self::from_json_str(&text)?;
        tracing::debug!(sequences = script.sequences.len(), "script loaded");
        Ok(script)
    }
}

fn read_error(path: &Path, err: &std::io::Error) -> TermsvgError {
    use std::io::ErrorKind;

    let p = path.display();
    match err.kind() {
        ErrorKind::NotFound => TermsvgError::config(format!("script file not found at: {p}")),
        ErrorKind::PermissionDenied => {
            TermsvgError::config(format!("permission denied reading script file: {p}"))
        }
        ErrorKind::IsADirectory => {
            TermsvgError::config(format!("expected a file but found a directory: {p}"))
        }
        _ => TermsvgError::config(format!("failed to read script file {p}: {err}")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
