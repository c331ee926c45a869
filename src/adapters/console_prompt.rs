//! `ValuePrompt` rendered with dialoguer on an interactive terminal.

use dialoguer::Input;

use crate::domain::{AppError, SchemaEntry};
use crate::ports::ValuePrompt;

#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ValuePrompt for ConsolePrompt {
    fn read_value(&mut self, entry: &SchemaEntry) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(entry.prompt_label())
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::prompt_error(entry.key, err))
    }
}
