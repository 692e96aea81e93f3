//! Scroll-aware timeline: sequences in, time-stamped frames out.

mod builder;
mod frame;

pub use builder::{
    OUTPUT_BLOCK_TAIL_MS, OUTPUT_LINE_STAGGER_MS, SCROLL_SETTLE_MS, TimelineOpts, build_timeline,
    build_timeline_json,
};
pub use frame::{AnimationFrame, BufferLine, Timeline};
