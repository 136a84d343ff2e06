//! Cursor state machine over the scanned images

use crate::error::NavError;
use crate::scan::ImageRecord;

use super::keymap::Command;

/// Result of applying a command to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cursor moved to this position.
    Moved(usize),
    /// Already on the last image; nothing changed.
    AtEnd,
    /// Already on the first image; nothing changed.
    AtStart,
    /// The caller should end the session.
    Quit,
    /// The input did not map to any command; nothing changed.
    UnknownCommand,
}

/// Holds the scanned sequence and a cursor into it.
///
/// The sequence is fixed at construction. Only `next` and `previous` move the
/// cursor, and it always stays within `0..len` when the sequence is non-empty.
#[derive(Debug)]
pub struct Navigator {
    records: Vec<ImageRecord>,
    cursor: usize,
}

impl Navigator {
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self { records, cursor: 0 }
    }

    /// The record under the cursor.
    ///
    /// # Errors
    /// Returns [`NavError::EmptySequence`] when there are no records.
    pub fn current(&self) -> Result<&ImageRecord, NavError> {
        self.records.get(self.cursor).ok_or(NavError::EmptySequence)
    }

    pub fn next(&mut self) -> Outcome {
        if self.cursor + 1 < self.records.len() {
            self.cursor += 1;
            Outcome::Moved(self.cursor)
        } else {
            Outcome::AtEnd
        }
    }

    pub fn previous(&mut self) -> Outcome {
        if self.cursor > 0 {
            self.cursor -= 1;
            Outcome::Moved(self.cursor)
        } else {
            Outcome::AtStart
        }
    }

    pub fn quit(&self) -> Outcome {
        Outcome::Quit
    }

    /// Dispatch a mapped command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::Quit => self.quit(),
            Command::Unknown => Outcome::UnknownCommand,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }
}
