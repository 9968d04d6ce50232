use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Console;
use crate::board::Board;
use crate::config::HOLD_LONG_MS;
use crate::session::{Mode, NoteFeed, Notepad};
use crate::terminal::Terminal;

const TITLE: &str = "Notepad - type text";
const HINT: &str = "End: ENTER + '.' on new line";

impl<B: Board> Console<B> {
    /// Enter notepad mode, following lines go to the note
    pub(super) fn start_notepad(&mut self) -> Result<()> {
        self.hw.terminal.write_line("Notepad")?;
        self.session.mode = Mode::Notepad(Notepad::new());
        self.render_note("")
    }

    pub(super) fn notepad_line(&mut self, line: &str) -> Result<()> {
        let Mode::Notepad(note) = &mut self.session.mode else {
            return Ok(());
        };

        match note.feed(line) {
            NoteFeed::Appended => {
                let text = note.text().to_string();
                self.render_note(&text)
            }
            NoteFeed::Finished(text) => {
                self.session.mode = Mode::Idle;
                log::info!("Notepad closed with {} bytes", text.len());
                self.show_saved_note(&text)
            }
        }
    }

    fn render_note(&mut self, text: &str) -> Result<()> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::WHITE, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        screen.println(TITLE)?;
        screen.println(HINT)?;
        if !text.is_empty() {
            screen.newline();
            screen.println(text)?;
        }
        Ok(())
    }

    /// The note is only shown, it is not written anywhere
    fn show_saved_note(&mut self, text: &str) -> Result<()> {
        let screen = &mut self.hw.screen;
        screen.clear(Rgb565::BLACK)?;
        screen.set_text_color(Rgb565::GREEN, Rgb565::BLACK);
        screen.set_cursor(0, 0);
        screen.println("Text saved:")?;
        screen.println(text)?;
        self.hold(HOLD_LONG_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeOfDay;
    use crate::testing::{console, TestBoard};

    fn type_line(console: &mut Console<TestBoard>, line: &str) {
        console.hardware_mut().terminal.push_line(line);
        console.step().unwrap();
    }

    #[test]
    fn note_collects_lines_until_the_terminator() {
        let mut console = console();
        type_line(&mut console, "N");
        assert!(console.hardware().screen.shows(TITLE));

        type_line(&mut console, "hello");
        assert_eq!(
            console.session().mode,
            Mode::Notepad({
                let mut note = Notepad::new();
                note.feed("hello");
                note
            })
        );
        assert!(console.hardware().screen.shows("hello"));

        type_line(&mut console, "world");
        type_line(&mut console, ".");

        assert_eq!(console.session().mode, Mode::Idle);
        let screen = &console.hardware().screen;
        assert_eq!(screen.lines()[..3], ["Text saved:", "hello", "world"]);
        assert_eq!(console.hardware().clock.delays(), &[HOLD_LONG_MS]);
    }

    #[test]
    fn command_letters_are_text_while_the_note_is_open() {
        let mut console = console();
        type_line(&mut console, "n");
        type_line(&mut console, "V");
        type_line(&mut console, "E");

        assert_eq!(console.hardware().power.sleeps, 0);
        assert_eq!(console.hardware().store.backend().saves, 0);
        assert!(console.hardware().screen.shows("V"));
        assert!(matches!(console.session().mode, Mode::Notepad(_)));

        // Back to commands after the terminator
        type_line(&mut console, ".");
        type_line(&mut console, "2");
        assert!(console.hardware().screen.shows("System info:"));
    }

    #[test]
    fn clock_keeps_ticking_during_a_note() {
        let mut console = console();
        console.hardware_mut().clock.set_time(Some(TimeOfDay::new(9, 0, 1)));
        type_line(&mut console, "N");

        console.hardware_mut().clock.advance(1500);
        console.step().unwrap();
        assert_eq!(console.hardware().screen.status(), Some("Time: 09:00:01"));
        assert!(console.hardware().screen.shows(TITLE));
    }
}
