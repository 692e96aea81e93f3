use crate::{
    config::model::RenderConfig,
    foundation::error::{TermsvgError, TermsvgResult},
    script::model::{CommandSeq, DEFAULT_TYPING_MS, OutputSeq, Sequence},
    timeline::frame::{AnimationFrame, BufferLine, Timeline},
};

/// Extra wait after a scroll animation before the triggering line is revealed.
pub const SCROLL_SETTLE_MS: u64 = 10;
/// Spacing between consecutive lines of one output block.
pub const OUTPUT_LINE_STAGGER_MS: u64 = 50;
/// Time added after the last line of an output block.
pub const OUTPUT_BLOCK_TAIL_MS: u64 = 200;

#[derive(Clone, Debug, PartialEq)]
/// Inputs to the timeline builder besides the sequences themselves.
pub struct TimelineOpts {
    /// Maximum visible lines (must be at least 1).
    pub capacity: usize,
    /// Duration of one scroll animation.
    pub scroll_duration_ms: u64,
    /// Prompt for commands without one.
    pub default_prompt: String,
    /// Color for output without one.
    pub default_color: String,
}

impl TimelineOpts {
    /// Options derived from a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            capacity: config.geometry().max_visible_lines(),
            scroll_duration_ms: config.terminal.scroll_duration,
            default_prompt: config.terminal.prompt.clone(),
            default_color: config.terminal.text_color.clone(),
        }
    }

    /// Default terminal settings with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::from_config(&RenderConfig::default())
        }
    }
}

/// Turn a sequence script into time-stamped frames.
///
/// Sequences are processed strictly in order against one running clock. Before a line is
/// revealed, if the visible window would exceed `opts.capacity`, a one-line scroll frame is
/// emitted at the current time and the reveal is pushed back until the scroll has settled.
/// Frame times never decrease, and the last frame is always [`AnimationFrame::Final`].
#[tracing::instrument(skip(sequences, opts), fields(sequences = sequences.len(), capacity = opts.capacity))]
pub fn build_timeline(sequences: &[Sequence], opts: &TimelineOpts) -> TermsvgResult<Timeline> {
    if opts.capacity == 0 {
        return Err(TermsvgError::validation("viewport capacity must be >= 1"));
    }

    let mut b = TimelineBuilder {
        opts,
        frames: Vec::new(),
        buffer: Vec::new(),
        buffer_start: 0,
        clock: 0,
    };

    for seq in sequences {
        b.clock += seq.delay_ms();
        match seq {
            Sequence::Command(cmd) => b.push_command(cmd),
            Sequence::Output(out) | Sequence::Ascii(out) => b.push_output(out),
        }
        b.clock += seq.pause_ms();
    }

    let end = (b.buffer_start + opts.capacity).min(b.buffer.len());
    let visible = b.buffer[b.buffer_start..end].to_vec();
    b.frames.push(AnimationFrame::Final {
        time: b.clock,
        buffer: visible,
        buffer_start: b.buffer_start,
    });

    tracing::debug!(
        frames = b.frames.len(),
        lines = b.buffer.len(),
        total_ms = b.clock,
        "timeline built"
    );
    Ok(Timeline {
        frames: b.frames,
        total_duration_ms: b.clock,
        capacity: opts.capacity,
    })
}

/// Like [`build_timeline`], for a raw JSON sequence list.
///
/// Fails before producing any frame when `sequences` is not an array.
pub fn build_timeline_json(
    sequences: &serde_json::Value,
    opts: &TimelineOpts,
) -> TermsvgResult<Timeline> {
    let seqs = Sequence::list_from_value(sequences)?;
    build_timeline(&seqs, opts)
}

struct TimelineBuilder<'a> {
    opts: &'a TimelineOpts,
    frames: Vec<AnimationFrame>,
    buffer: Vec<BufferLine>, // append-only
    buffer_start: usize,
    clock: u64,
}

impl TimelineBuilder<'_> {
    /// Append `line` and return `(reveal_time, line_index)`.
    ///
    /// Emits a scroll frame at `at` first when the new line overflows the viewport.
    fn append(&mut self, at: u64, line: BufferLine) -> (u64, usize) {
        self.buffer.push(line);
        let index = self.buffer.len() - 1;

        if self.buffer.len() - self.buffer_start <= self.opts.capacity {
            return (at, index);
        }

        self.buffer_start += 1;
        self.frames.push(AnimationFrame::Scroll {
            time: at,
            scroll_lines: 1,
            buffer_start: self.buffer_start,
        });
        tracing::trace!(at, buffer_start = self.buffer_start, "scroll");
        (at + self.opts.scroll_duration_ms + SCROLL_SETTLE_MS, index)
    }

    fn push_command(&mut self, cmd: &CommandSeq) {
        let prompt = cmd
            .prompt
            .clone()
            .unwrap_or_else(|| self.opts.default_prompt.clone());
        let typing = cmd.typing_duration_ms.unwrap_or(DEFAULT_TYPING_MS);

        let (time, line_index) = self.append(
            self.clock,
            BufferLine::Command {
                prompt: prompt.clone(),
                command: cmd.content.clone(),
                complete: false,
            },
        );
        self.frames.push(AnimationFrame::AddCommand {
            time,
            line_index,
            prompt,
            command: cmd.content.clone(),
            typing_duration_ms: typing,
        });

        self.clock = time + typing;
        if let Some(BufferLine::Command { complete, .. }) = self.buffer.get_mut(line_index) {
            *complete = true;
        }
    }

    fn push_output(&mut self, out: &OutputSeq) {
        let color = out
            .color
            .clone()
            .unwrap_or_else(|| self.opts.default_color.clone());
        let start = self.clock;
        // Settle time of every scroll in this block pushes later lines back.
        let mut shift = 0u64;
        let mut count = 0u64;

        for (i, line) in out.content.split('\n').enumerate() {
            let base = start + i as u64 * OUTPUT_LINE_STAGGER_MS + shift;
            let (time, line_index) = self.append(
                base,
                BufferLine::Output {
                    content: line.to_owned(),
                    color: color.clone(),
                },
            );
            shift += time - base;
            count += 1;
            self.frames.push(AnimationFrame::AddOutput {
                time,
                line_index,
                content: line.to_owned(),
                color: color.clone(),
            });
        }

        self.clock = start + count * OUTPUT_LINE_STAGGER_MS + OUTPUT_BLOCK_TAIL_MS + shift;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
