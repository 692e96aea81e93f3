//! Timing presets for hand-written scripts, in milliseconds.

use crate::markup::strip_markup;

/// How long it takes to "type" a command.
pub mod typing {
    /// Very short commands (`date`, `whoami`).
    pub const INSTANT: u64 = 400;
    /// Short commands.
    pub const FAST: u64 = 500;
    /// Simple commands.
    pub const QUICK: u64 = 800;
    /// Medium-length commands.
    pub const MEDIUM: u64 = 1200;
    /// Standard typing speed.
    pub const STANDARD: u64 = 1400;
    /// Longer commands.
    pub const MODERATE: u64 = 1600;
    /// Complex commands.
    pub const SLOW: u64 = 1800;
    /// Long commands; also the default.
    pub const EXTENDED: u64 = 2000;
    /// Very long commands.
    pub const LONG: u64 = 2200;
    /// Extra long commands (`docker ps --format ...`).
    pub const EXTRA_LONG: u64 = 2400;
}

/// Pause after a command or output block.
pub mod pause {
    /// Quick transitions.
    pub const MINIMAL: u64 = 300;
    /// Brief pause after a command.
    pub const SHORT: u64 = 400;
    /// Short pause.
    pub const BRIEF: u64 = 500;
    /// Quick pause.
    pub const QUICK: u64 = 600;
    /// Medium pause.
    pub const MEDIUM: u64 = 800;
    /// Standard pause; also the default.
    pub const STANDARD: u64 = 1000;
    /// Extended pause.
    pub const EXTENDED: u64 = 1200;
    /// Long pause.
    pub const LONG: u64 = 1400;
    /// Dramatic pause before a punchline.
    pub const DRAMATIC: u64 = 1800;
    /// Pause for emphasis.
    pub const EMPHASIS: u64 = 2000;
    /// Showcase content such as ASCII art.
    pub const SHOWCASE: u64 = 2800;
}

/// Delay before a sequence starts.
pub mod delay {
    /// No delay.
    pub const NONE: u64 = 0;
    /// Minimal delay.
    pub const MINIMAL: u64 = 100;
    /// Short delay.
    pub const SHORT: u64 = 200;
    /// Medium delay.
    pub const MEDIUM: u64 = 500;
}

/// Comfortable reading speed for technical text (~175 WPM).
pub const READING_CHARS_PER_SEC: f64 = 14.0;
/// Lower bound for [`reading_pause_ms`].
pub const READING_MIN_PAUSE_MS: u64 = 800;
/// Upper bound for [`reading_pause_ms`].
pub const READING_MAX_PAUSE_MS: u64 = 4500;
/// Fixed time added on top of the reading time.
pub const READING_BASE_PAUSE_MS: u64 = 300;

/// Pause long enough to read `content`, markup excluded.
pub fn reading_pause_ms(content: &str) -> u64 {
    let chars = strip_markup(content).chars().count();
    if chars == 0 {
        return READING_MIN_PAUSE_MS;
    }
    let reading = (chars as f64 / READING_CHARS_PER_SEC) * 1000.0;
    let total = (reading + READING_BASE_PAUSE_MS as f64).round() as u64;
    total.clamp(READING_MIN_PAUSE_MS, READING_MAX_PAUSE_MS)
}
