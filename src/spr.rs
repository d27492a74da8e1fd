//! `.spr` sprite images.
//!
//! A text format: one image row per line, each pixel a whitespace-separated
//! decimal `0xRRGGBB` value, `-1` for a transparent pixel.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SprError {
    #[error("reading sprite: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {token:?} is not a pixel value")]
    BadToken { line: usize, token: String },

    #[error("line {line}: expected {expected} pixels, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("sprite has no pixels")]
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SprImage {
    pub width: usize,
    pub height: usize,
    /// Row-major; `None` is transparent.
    pixels: Vec<Option<u32>>,
}

impl SprImage {
    pub fn parse(text: &str) -> Result<Self, SprError> {
        let mut pixels = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let row_start = pixels.len();
            for token in line.split_whitespace() {
                let value: i64 = token.parse().map_err(|_| SprError::BadToken {
                    line: line_no,
                    token: token.to_string(),
                })?;
                let pixel = match value {
                    -1 => None,
                    0..=0xFF_FFFF => Some(value as u32),
                    _ => {
                        return Err(SprError::BadToken {
                            line: line_no,
                            token: token.to_string(),
                        })
                    }
                };
                pixels.push(pixel);
            }

            let found = pixels.len() - row_start;
            if found == 0 {
                continue;
            }
            if height == 0 {
                width = found;
            } else if found != width {
                return Err(SprError::RaggedRow {
                    line: line_no,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(SprError::Empty);
        }
        Ok(SprImage {
            width,
            height,
            pixels,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SprError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }

    /// Nearest-neighbour sample at normalized coordinates `u, v` in `0..1`.
    pub fn sample(&self, u: f32, v: f32) -> Option<u32> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let x = (u * self.width as f32) as usize;
        let y = (v * self.height as f32) as usize;
        self.pixel(x.min(self.width - 1), y.min(self.height - 1))
    }
}

/// Split a packed `0xRRGGBB` value into channels.
pub fn rgb(value: u32) -> (u8, u8, u8) {
    ((value >> 16) as u8, (value >> 8) as u8, value as u8)
}
