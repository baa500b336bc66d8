/// Pixel sinks the rasterizer draws into
use std::collections::BTreeSet;
use std::io;
use std::ops::RangeInclusive;

use crate::geometry::Color;

/// A pixel sink addressed in canvas-centered coordinates.
///
/// (0, 0) is the canvas center and y grows upward. Writes outside the canvas
/// are dropped silently.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn put_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Flush the finished frame to its display target. Called once per render.
    fn present(&mut self) -> io::Result<()>;

    /// Centered x coordinates that land on the canvas
    fn x_range(&self) -> RangeInclusive<i32> {
        let half = (self.width() / 2) as i32;
        -half..=self.width() as i32 - half - 1
    }

    /// Centered y coordinates that land on the canvas
    fn y_range(&self) -> RangeInclusive<i32> {
        let half = (self.height() / 2) as i32;
        half - self.height() as i32..=half - 1
    }
}

/// Convert centered coordinates to a (column, row) pair, or `None` when off-canvas
pub fn to_buffer_coords(x: i32, y: i32, width: u32, height: u32) -> Option<(usize, usize)> {
    let col = (width / 2) as i64 + x as i64;
    let row = (height / 2) as i64 - y as i64 - 1;

    if col < 0 || col >= width as i64 || row < 0 || row >= height as i64 {
        return None;
    }
    Some((col as usize, row as usize))
}

/// Number of pixels in a `width` x `height` buffer, computed without `u32` overflow
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// In-memory RGB frame buffer
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
    presented_frames: usize,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::WHITE)
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; pixel_count(width, height)],
            presented_frames: 0,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Read a pixel in centered coordinates
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        to_buffer_coords(x, y, self.width, self.height)
            .map(|(col, row)| self.pixels[row * self.width as usize + col])
    }

    /// Row-major pixels, top row first
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Centered coordinates of every pixel that differs from the background
    pub fn lit_pixels(&self) -> BTreeSet<(i32, i32)> {
        let width = self.width as usize;
        let half_w = (self.width / 2) as i32;
        let half_h = (self.height / 2) as i32;

        self.pixels
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != self.background)
            .map(|(i, _)| {
                let (col, row) = ((i % width) as i32, (i / width) as i32);
                (col - half_w, half_h - row - 1)
            })
            .collect()
    }

    pub fn presented_frames(&self) -> usize {
        self.presented_frames
    }
}

impl Canvas for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((col, row)) = to_buffer_coords(x, y, self.width, self.height) {
            self.pixels[row * self.width as usize + col] = color;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented_frames += 1;
        Ok(())
    }
}
