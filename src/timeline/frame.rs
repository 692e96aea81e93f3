#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// One line in the append-only terminal buffer.
pub enum BufferLine {
    /// A prompt followed by a typed command.
    Command {
        /// Prompt text.
        prompt: String,
        /// Command text.
        command: String,
        /// Set once the typing time has elapsed.
        complete: bool,
    },
    /// One line of output.
    Output {
        /// Line text, possibly with markup.
        content: String,
        /// Hex color.
        color: String,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
/// A discrete, time-stamped instruction produced by [`build_timeline`](crate::build_timeline).
pub enum AnimationFrame {
    /// Shift the viewport down by `scroll_lines`.
    Scroll {
        /// Start time in milliseconds.
        time: u64,
        /// Lines to scroll.
        scroll_lines: usize,
        /// First visible buffer index after the scroll.
        buffer_start: usize,
    },
    /// Reveal a command line and start typing it.
    AddCommand {
        /// Start time in milliseconds.
        time: u64,
        /// Buffer index of the line.
        line_index: usize,
        /// Prompt text.
        prompt: String,
        /// Command text.
        command: String,
        /// Total typing time.
        typing_duration_ms: u64,
    },
    /// Reveal one output line.
    AddOutput {
        /// Start time in milliseconds.
        time: u64,
        /// Buffer index of the line.
        line_index: usize,
        /// Line text, possibly with markup.
        content: String,
        /// Hex color.
        color: String,
    },
    /// End state: the visible tail of the buffer.
    Final {
        /// Total duration in milliseconds.
        time: u64,
        /// Lines visible at the end.
        buffer: Vec<BufferLine>,
        /// First visible buffer index.
        buffer_start: usize,
    },
}

impl AnimationFrame {
    /// Start time of the frame in milliseconds.
    pub fn time(&self) -> u64 {
        match self {
            Self::Scroll { time, .. }
            | Self::AddCommand { time, .. }
            | Self::AddOutput { time, .. }
            | Self::Final { time, .. } => *time,
        }
    }

    /// Buffer index revealed by this frame, for reveal frames.
    pub fn line_index(&self) -> Option<usize> {
        match self {
            Self::AddCommand { line_index, .. } | Self::AddOutput { line_index, .. } => {
                Some(*line_index)
            }
            Self::Scroll { .. } | Self::Final { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Output of [`build_timeline`](crate::build_timeline).
pub struct Timeline {
    /// Frames ordered by non-decreasing time; the last one is always [`AnimationFrame::Final`].
    pub frames: Vec<AnimationFrame>,
    /// Time of the final frame.
    pub total_duration_ms: u64,
    /// Viewport capacity the timeline was built for.
    pub capacity: usize,
}

impl Timeline {
    /// Iterate over scroll frames only.
    pub fn scroll_frames(&self) -> impl Iterator<Item = &AnimationFrame> {
        self.frames
            .iter()
            .filter(|f| matches!(f, AnimationFrame::Scroll { .. }))
    }

    /// The closing [`AnimationFrame::Final`] frame.
    pub fn final_frame(&self) -> Option<&AnimationFrame> {
        self.frames
            .iter()
            .rev()
            .find(|f| matches!(f, AnimationFrame::Final { .. }))
    }
}
