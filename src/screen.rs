//! Text cursor and drawing primitives over an `embedded-graphics` target
//!
//! Works like a classic TFT library: a cursor, a text color with background,
//! `print`/`println` with wrapping at the right edge. Nothing is buffered, every
//! call draws immediately.

use std::fmt;

use anyhow::{anyhow, Result};
use embedded_graphics::image::{Image, ImageRawBE};
use embedded_graphics::mono_font::{iso_8859_15::FONT_8X13, MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

const FONT: &MonoFont<'static> = &FONT_8X13;

/// Vertical distance between text rows
pub const LINE_HEIGHT: i32 = 16;

/// Width of one character cell
pub const CHAR_WIDTH: i32 = 8;

pub struct Screen<D> {
    display: D,
    cursor: Point,
    text_color: Rgb565,
    background: Rgb565,
    /// Text printed since the last clear, one entry per row
    lines: Vec<String>,
    /// Contents of the bottom status strip
    status: Option<String>,
}

impl<D> Screen<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    D::Error: fmt::Debug,
{
    pub fn new(display: D) -> Self {
        Self {
            display,
            cursor: Point::zero(),
            text_color: Rgb565::WHITE,
            background: Rgb565::BLACK,
            lines: vec![String::new()],
            status: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.display.size().width as i32
    }

    pub fn height(&self) -> i32 {
        self.display.size().height as i32
    }

    /// Fill the whole screen and home the cursor
    pub fn clear(&mut self, color: Rgb565) -> Result<()> {
        self.display.clear(color).map_err(draw_error)?;
        self.cursor = Point::zero();
        self.lines = vec![String::new()];
        self.status = None;
        Ok(())
    }

    pub fn set_text_color(&mut self, color: Rgb565, background: Rgb565) {
        self.text_color = color;
        self.background = background;
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
        self.start_row();
    }

    /// Print text at the cursor, `\n` moves to the next row
    pub fn print(&mut self, text: &str) -> Result<()> {
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.print_wrapped(first)?;
        }
        for segment in segments {
            self.newline();
            self.print_wrapped(segment)?;
        }
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        self.newline();
        Ok(())
    }

    pub fn newline(&mut self) {
        self.cursor = Point::new(0, self.cursor.y + LINE_HEIGHT);
        self.lines.push(String::new());
    }

    fn print_wrapped(&mut self, text: &str) -> Result<()> {
        let mut rest: Vec<char> = text.chars().collect();
        while !rest.is_empty() {
            let columns = ((self.width() - self.cursor.x) / CHAR_WIDTH).max(0) as usize;
            if columns == 0 {
                self.newline();
                continue;
            }
            let take = columns.min(rest.len());
            let chunk: String = rest.drain(..take).collect();
            self.draw_text(&chunk, self.cursor)?;
            self.cursor.x += take as i32 * CHAR_WIDTH;
            if let Some(line) = self.lines.last_mut() {
                line.push_str(&chunk);
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point) -> Result<()> {
        let style = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(self.text_color)
            .background_color(self.background)
            .build();
        Text::with_baseline(text, at, style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(draw_error)?;
        Ok(())
    }

    fn start_row(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Redraw the strip of `height` pixels at the bottom with `text`.
    /// The text cursor is left where it was.
    pub fn draw_status(&mut self, text: &str, height: u32) -> Result<()> {
        let top = self.height() - height as i32;
        self.fill_rect(0, top, self.width() as u32, height, Rgb565::BLACK)?;

        let style = MonoTextStyleBuilder::new()
            .font(FONT)
            .text_color(Rgb565::WHITE)
            .background_color(Rgb565::BLACK)
            .build();
        Text::with_baseline(text, Point::new(0, top), style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(draw_error)?;

        self.status = Some(text.to_string());
        Ok(())
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb565) -> Result<()> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb565) -> Result<()> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb565) -> Result<()> {
        Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb565) -> Result<()> {
        Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565) -> Result<()> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    /// Draw raw big endian RGB565 pixels, `width` pixels per row
    pub fn draw_image(&mut self, data: &[u8], width: u32, at: Point) -> Result<()> {
        let raw = ImageRawBE::<Rgb565>::new(data, width);
        Image::new(&raw, at)
            .draw(&mut self.display)
            .map_err(draw_error)
    }

    /// Rows of text currently on screen, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any row on screen contains `needle`
    pub fn shows(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

fn draw_error<E: fmt::Debug>(e: E) -> anyhow::Error {
    anyhow!("Display draw failed: {:?}", e)
}
