/// Terminal pixel sink: two canvas rows per character cell using half blocks
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Stdout, Write};
use wire3d_core::canvas::to_buffer_coords;
use wire3d_core::{Canvas, Color};

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Canvas that presents itself as colored half-block characters
pub struct TerminalCanvas<W: Write = Stdout> {
    writer: W,
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<Color>,
    status: Option<String>,
}

impl TerminalCanvas<Stdout> {
    /// Size the canvas to a terminal of `columns` x `rows` cells
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        Self::new(io::stdout(), columns as usize, rows as usize * 2)
    }
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(writer: W, width: usize, height: usize) -> Self {
        let background = Color::BLACK;
        Self {
            writer,
            width,
            height,
            background,
            pixels: vec![background; width * height],
            status: None,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Text drawn over the top row on the next present
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn pixel_at(&self, col: usize, row: usize) -> Color {
        if row < self.height {
            self.pixels[row * self.width + col]
        } else {
            self.background
        }
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        self.height as u32
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((col, row)) = to_buffer_coords(x, y, self.width as u32, self.height as u32) {
            self.pixels[row * self.width + col] = color;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.writer.queue(cursor::MoveTo(0, 0))?;

        let mut last: Option<(Color, Color)> = None;
        for cell_row in 0..self.height.div_ceil(2) {
            self.writer.queue(cursor::MoveTo(0, cell_row as u16))?;
            for col in 0..self.width {
                let top = self.pixel_at(col, cell_row * 2);
                let bottom = self.pixel_at(col, cell_row * 2 + 1);

                // Only emit color changes
                if last != Some((top, bottom)) {
                    self.writer.queue(SetForegroundColor(term_color(top)))?;
                    self.writer.queue(SetBackgroundColor(term_color(bottom)))?;
                    last = Some((top, bottom));
                }
                self.writer.queue(Print(HALF_BLOCK))?;
            }
        }
        self.writer.queue(ResetColor)?;

        if let Some(status) = &self.status {
            self.writer.queue(cursor::MoveTo(0, 0))?;
            self.writer.queue(SetForegroundColor(TermColor::Yellow))?;
            self.writer.queue(Print(status))?;
            self.writer.queue(ResetColor)?;
        }

        self.writer.flush()
    }
}
