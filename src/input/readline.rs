//! Where command lines come from: a rustyline editor at the terminal, or a fixed
//! script of lines in tests.

use crate::error::{AppResult, DomainError};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// Result of reading a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D, or the script ran out
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> AppResult<ReadResult>;

    fn add_history(&mut self, _line: &str) {}
}

pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    pub fn new() -> AppResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| DomainError::InternalError(format!("line editor: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineSource for RustylineSource {
    fn read_line(&mut self, prompt: &str) -> AppResult<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(DomainError::Io(e)),
            Err(e) => Err(DomainError::InternalError(format!("line editor: {e}"))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let _ = self.editor.add_history_entry(line);
    }
}

/// Replays a fixed list of lines, then reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    /// Every prompt that was shown, in order
    pub prompts: Vec<String>,
}

impl ScriptedLines {
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

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> AppResult<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(match self.lines.pop_front() {
            Some(line) => ReadResult::Line(line),
            None => ReadResult::Eof,
        })
    }
}
