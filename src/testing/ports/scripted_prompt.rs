//! Test double for `ValuePrompt`.

use std::collections::VecDeque;

use crate::domain::{AppError, SchemaEntry};
use crate::ports::ValuePrompt;

/// Answers prompts from a fixed script of lines.
///
/// Once the script runs out every further prompt reads an empty line.
/// A line equal to [`ScriptedPrompt::INTERRUPT`] simulates an interrupted read.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub const INTERRUPT: &'static str = "\u{3}";

    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect(), asked: Vec::new() }
    }

    /// Keys prompted for, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl ValuePrompt for ScriptedPrompt {
    fn read_value(&mut self, entry: &SchemaEntry) -> Result<String, AppError> {
        self.asked.push(entry.key.to_string());
        match self.lines.pop_front() {
            Some(line) if line == Self::INTERRUPT => {
                Err(AppError::prompt_error(entry.key, "read interrupted"))
            }
            Some(line) => Ok(line),
            None => Ok(String::new()),
        }
    }
}
