//! Raster rendering of the three result artifacts. Figures are drawn with
//! plain canvas primitives and a small stroke font, then encoded as PNG.

mod bloch;
mod circuit;
mod histogram;

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

pub use bloch::render_bloch;
pub use circuit::render_circuit;
pub use histogram::render_histogram;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode figure as PNG")]
    Encode(#[from] image::ImageError),
}

pub(crate) const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub(crate) const INK: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub(crate) const GRID: Rgba<u8> = Rgba([210, 210, 210, 255]);
pub(crate) const BAR_FILL: Rgba<u8> = Rgba([70, 130, 180, 255]);
pub(crate) const ACCENT: Rgba<u8> = Rgba([200, 60, 60, 255]);

pub(crate) struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        for py in y.round() as i32..(y + h).round() as i32 {
            for px in x.round() as i32..(x + w).round() as i32 {
                self.put(px, py, color);
            }
        }
    }

    pub fn rect_outline(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        self.line(x, y, x + w, y, color);
        self.line(x + w, y, x + w, y + h, color);
        self.line(x + w, y + h, x, y + h, color);
        self.line(x, y + h, x, y, color);
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as i32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let px = x0 + (x1 - x0) * t;
            let py = y0 + (y1 - y0) * t;
            self.put(px.round() as i32, py.round() as i32, color);
        }
    }

    pub fn circle_outline(&mut self, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
        let steps = (r * 8.0).ceil().max(16.0) as i32;
        for step in 0..steps {
            let angle = std::f32::consts::TAU * step as f32 / steps as f32;
            self.put(
                (cx + r * angle.cos()).round() as i32,
                (cy + r * angle.sin()).round() as i32,
                color,
            );
        }
    }

    pub fn disc(&mut self, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
        for py in (cy - r).floor() as i32..=(cy + r).ceil() as i32 {
            for px in (cx - r).floor() as i32..=(cx + r).ceil() as i32 {
                let dx = px as f32 - cx;
                let dy = py as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.put(px, py, color);
                }
            }
        }
    }

    /// Stroke-font glyph drawn into a box of height `h` whose top-left
    /// corner is (x, y). Covers only the characters the figures need.
    pub fn glyph(&mut self, ch: char, x: f32, y: f32, h: f32, color: Rgba<u8>) {
        let w = h * 0.7;
        let strokes: &[[f32; 4]] = match ch {
            'H' => &[
                [0.0, 0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0, 1.0],
                [0.0, 0.5, 1.0, 0.5],
            ],
            'X' => &[[0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 0.0, 1.0]],
            'Z' => &[
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0, 1.0],
            ],
            'M' => &[
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 0.5, 0.55],
                [0.5, 0.55, 1.0, 0.0],
                [1.0, 0.0, 1.0, 1.0],
            ],
            '0' => &[
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 0.0, 1.0, 1.0],
                [1.0, 1.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 0.0],
                [1.0, 0.15, 0.0, 0.85],
            ],
            '1' => &[[0.5, 0.0, 0.5, 1.0], [0.25, 0.2, 0.5, 0.0]],
            'q' => &[
                [0.0, 0.1, 1.0, 0.1],
                [1.0, 0.1, 1.0, 0.7],
                [1.0, 0.7, 0.0, 0.7],
                [0.0, 0.7, 0.0, 0.1],
                [1.0, 0.7, 1.0, 1.0],
            ],
            _ => &[],
        };
        for [sx0, sy0, sx1, sy1] in strokes {
            self.line(
                x + sx0 * w,
                y + sy0 * h,
                x + sx1 * w,
                y + sy1 * h,
                color,
            );
        }
    }

    /// Short run of glyphs, left to right.
    pub fn text(&mut self, text: &str, x: f32, y: f32, h: f32, color: Rgba<u8>) {
        let advance = h * 0.95;
        for (i, ch) in text.chars().enumerate() {
            self.glyph(ch, x + advance * i as f32, y, h, color);
        }
    }

    pub fn into_png(self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Decodes a rendered figure and asserts its dimensions.
    pub fn assert_png_dimensions(bytes: &[u8], width: u32, height: u32) {
        let decoded = image::load_from_memory(bytes).expect("rendered PNG must decode");
        assert_eq!(decoded.width(), width);
        assert_eq!(decoded.height(), height);
    }

    /// True when at least one pixel differs from the white background.
    pub fn has_ink(bytes: &[u8]) -> bool {
        let decoded = image::load_from_memory(bytes).expect("rendered PNG must decode");
        decoded
            .to_rgba8()
            .pixels()
            .any(|p| p.0 != [255, 255, 255, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_encodes_to_decodable_png() {
        let mut canvas = Canvas::new(64, 48);
        canvas.line(0.0, 0.0, 63.0, 47.0, INK);
        let bytes = canvas.into_png().unwrap();
        test_support::assert_png_dimensions(&bytes, 64, 48);
        assert!(test_support::has_ink(&bytes));
    }

    #[test]
    fn drawing_out_of_bounds_is_clipped() {
        let mut canvas = Canvas::new(16, 16);
        canvas.line(-50.0, -50.0, 100.0, 100.0, INK);
        canvas.disc(-10.0, -10.0, 5.0, INK);
        let bytes = canvas.into_png().unwrap();
        test_support::assert_png_dimensions(&bytes, 16, 16);
    }
}
