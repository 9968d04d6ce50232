//! Line oriented serial console

use std::collections::VecDeque;

use anyhow::Result;

/// Text in, text out. Input is delivered one complete line at a time.
pub trait Terminal {
    /// Next complete line without its terminator, `None` if no full line has arrived yet.
    /// Never blocks.
    fn poll_line(&mut self) -> Result<Option<String>>;

    /// Write text as is
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Write text followed by a line break
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_str(text)?;
        self.write_str("\r\n")
    }
}

/// Longest line kept in memory. A partial line reaching this length is
/// delivered as is and the rest continues on a new line.
pub const MAX_LINE_LEN: usize = 256;

/// Assembles raw serial bytes into lines.
///
/// `\n` ends a line, `\r` is dropped so both `\n` and `\r\n` senders work.
/// Bytes that are not valid UTF-8 are replaced.
#[derive(Debug, Default)]
pub struct LineBuffer {
    partial: Vec<u8>,
    ready: VecDeque<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            match byte {
                b'\n' => self.finish_line(),
                b'\r' => {}
                _ => {
                    self.partial.push(byte);
                    if self.partial.len() >= MAX_LINE_LEN {
                        log::warn!("Input line longer than {} bytes, splitting it", MAX_LINE_LEN);
                        self.finish_line();
                    }
                }
            }
        }
    }

    fn finish_line(&mut self) {
        let line = String::from_utf8_lossy(&self.partial).into_owned();
        self.partial.clear();
        self.ready.push_back(line);
    }

    pub fn pop_line(&mut self) -> Option<String> {
        self.ready.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_complete_only_on_newline() {
        let mut buffer = LineBuffer::new();
        buffer.push(b"DESK");
        assert_eq!(buffer.pop_line(), None);
        buffer.push(b"TOP\r\n");
        assert_eq!(buffer.pop_line().as_deref(), Some("DESKTOP"));
        assert_eq!(buffer.pop_line(), None);
    }

    #[test]
    fn several_lines_in_one_read_come_out_in_order() {
        let mut buffer = LineBuffer::new();
        buffer.push(b"hello\nworld\n.\npartial");
        assert_eq!(buffer.pop_line().as_deref(), Some("hello"));
        assert_eq!(buffer.pop_line().as_deref(), Some("world"));
        assert_eq!(buffer.pop_line().as_deref(), Some("."));
        assert_eq!(buffer.pop_line(), None);
    }

    #[test]
    fn endless_input_without_newline_is_split() {
        let mut buffer = LineBuffer::new();
        let flood = vec![b'a'; MAX_LINE_LEN * 3 + 10];
        buffer.push(&flood);

        for _ in 0..3 {
            assert_eq!(buffer.pop_line().map(|l| l.len()), Some(MAX_LINE_LEN));
        }
        assert_eq!(buffer.pop_line(), None);
        assert_eq!(buffer.partial.len(), 10);

        buffer.push(b"\n");
        assert_eq!(buffer.pop_line().map(|l| l.len()), Some(10));
    }

    #[test]
    fn empty_line_is_still_a_line() {
        let mut buffer = LineBuffer::new();
        buffer.push(b"\n");
        assert_eq!(buffer.pop_line().as_deref(), Some(""));
    }
}
