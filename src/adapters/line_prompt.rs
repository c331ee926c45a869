//! `ValuePrompt` over plain line-oriented streams, used when stdin is not a terminal.

use std::io::{self, BufRead, Write};

use crate::domain::{AppError, SchemaEntry};
use crate::ports::ValuePrompt;

/// Writes each prompt to `output` and reads one line from `input`.
///
/// End of input reads as an empty line, so remaining keys keep their defaults.
pub struct LinePrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ValuePrompt for LinePrompt<R, W> {
    fn read_value(&mut self, entry: &SchemaEntry) -> Result<String, AppError> {
        let mut line = String::new();
        write!(self.output, "{}: ", entry.prompt_label())
            .and_then(|()| self.output.flush())
            .and_then(|()| self.input.read_line(&mut line))
            .map_err(|err| AppError::prompt_error(entry.key, err))?;
        Ok(line)
    }
}
