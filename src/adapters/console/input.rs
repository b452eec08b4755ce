//! Line input sources for the console.

use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

/// Errors raised by the console front end.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to initialize line editor: {0}")]
    Init(String),

    #[error("Readline error: {0}")]
    Readline(String),

    #[error("Failed to write to terminal: {0}")]
    Output(#[from] std::io::Error),
}

/// Something that hands the console one line at a time.
///
/// `Ok(None)` means the user is done with the current screen
/// (Ctrl+C, Ctrl+D, or the end of a script).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;
}

/// Interactive input through rustyline (history, arrows, backspace).
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, ConsoleError> {
        let editor = DefaultEditor::new().map_err(|e| ConsoleError::Init(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(ConsoleError::Readline(err.to_string())),
        }
    }
}

/// Pre-recorded input, one entry per line.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
