use crate::{
    config::model::RenderConfig,
    foundation::error::{TermsvgError, TermsvgResult},
    script::model::{CommandSeq, OutputSeq, Script, Sequence},
    script::timing::reading_pause_ms,
};

/// Builder for [`Script`](crate::Script).
///
/// `pause`, `delay` and `reading_pause` apply to the most recently added sequence.
#[derive(Default)]
pub struct ScriptBuilder {
    config: RenderConfig,
    sequences: Vec<Sequence>,
}

impl ScriptBuilder {
    /// Start an empty script with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the render configuration.
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a command typed over `typing_ms`, using the default prompt.
    pub fn command(mut self, content: impl Into<String>, typing_ms: u64) -> Self {
        self.sequences.push(Sequence::Command(CommandSeq {
            content: content.into(),
            typing_duration_ms: Some(typing_ms),
            ..CommandSeq::default()
        }));
        self
    }

    /// Append a command with an explicit prompt.
    pub fn command_with_prompt(
        mut self,
        prompt: impl Into<String>,
        content: impl Into<String>,
        typing_ms: u64,
    ) -> Self {
        self.sequences.push(Sequence::Command(CommandSeq {
            prompt: Some(prompt.into()),
            content: content.into(),
            typing_duration_ms: Some(typing_ms),
            ..CommandSeq::default()
        }));
        self
    }

    /// Append an output block; `color` defaults to the terminal text color.
    pub fn output(mut self, content: impl Into<String>, color: Option<&str>) -> Self {
        self.sequences.push(Sequence::Output(OutputSeq {
            content: content.into(),
            color: color.map(str::to_owned),
            ..OutputSeq::default()
        }));
        self
    }

    /// Append an ASCII-art block.
    pub fn ascii(mut self, content: impl Into<String>, color: Option<&str>) -> Self {
        self.sequences.push(Sequence::Ascii(OutputSeq {
            content: content.into(),
            color: color.map(str::to_owned),
            ..OutputSeq::default()
        }));
        self
    }

    /// Set the pause after the last sequence.
    pub fn pause(mut self, ms: u64) -> TermsvgResult<Self> {
        *self.last_mut()?.1 = Some(ms);
        Ok(self)
    }

    /// Set the delay before the last sequence.
    pub fn delay(mut self, ms: u64) -> TermsvgResult<Self> {
        *self.last_mut()?.0 = Some(ms);
        Ok(self)
    }

    /// Pause after the last sequence for as long as it takes to read it.
    pub fn reading_pause(self) -> TermsvgResult<Self> {
        let ms = match self.sequences.last() {
            Some(seq) => reading_pause_ms(seq.content()),
            None => return Err(no_sequence()),
        };
        self.pause(ms)
    }

    /// Finish and validate the script.
    pub fn build(self) -> TermsvgResult<Script> {
        let script = Script {
            window: self.config.window,
            terminal: self.config.terminal,
            sequences: self.sequences,
        };
        script.validate()?;
        Ok(script)
    }

    /// `(delay, pause)` slots of the last sequence.
    fn last_mut(&mut self) -> TermsvgResult<(&mut Option<u64>, &mut Option<u64>)> {
        match self.sequences.last_mut() {
            Some(Sequence::Command(c)) => Ok((&mut c.delay_ms, &mut c.pause_ms)),
            Some(Sequence::Output(o) | Sequence::Ascii(o)) => Ok((&mut o.delay_ms, &mut o.pause_ms)),
            None => Err(no_sequence()),
        }
    }
}

fn no_sequence() -> TermsvgError {
    TermsvgError::validation("no sequence to apply timing to")
}

#[cfg(test)]
#[path = "../../tests/unit/script/dsl.rs"]
mod tests;
