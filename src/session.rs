//! State the console loop owns between commands

use crate::config::NOTEPAD_TERMINATOR;
use crate::network::Credentials;

/// What the next input line is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Lines are commands
    Idle,
    /// Lines are appended to the note until the terminator arrives
    Notepad(Notepad),
    /// Reset or shutdown was requested, the loop stops
    Halted,
}

/// Context owned by the main loop and handed to every handler
#[derive(Debug)]
pub struct Session {
    pub mode: Mode,
    /// Last credentials entered, lives until restart
    pub credentials: Option<Credentials>,
    /// Tick of the last clock strip refresh
    pub last_time_update: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            credentials: None,
            last_time_update: 0,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.mode == Mode::Halted
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of feeding one line to the notepad
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFeed {
    /// Line was added
    Appended,
    /// Terminator seen, the finished note
    Finished(String),
}

/// Append-only text for one notepad session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notepad {
    text: String,
}

impl Notepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed `line` equal to the terminator ends the session, anything else is appended
    pub fn feed(&mut self, line: &str) -> NoteFeed {
        let line = line.trim();
        if line == NOTEPAD_TERMINATOR {
            return NoteFeed::Finished(std::mem::take(&mut self.text));
        }
        self.text.push_str(line);
        self.text.push('\n');
        NoteFeed::Appended
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
