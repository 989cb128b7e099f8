use super::LedPixel;
use crate::{bitmap::Error, BYTES_PER_PIXEL};

/// Row-major grid of quantized pixels, top row first
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LedMatrix {
    /// The width of the sprite
    width: usize,
    /// The height of the sprite
    height: usize,
    /// Quantized pixels
    pixels: Vec<LedPixel>,
}

impl LedMatrix {
    /// Builds the matrix from a stream of red, green, blue triples, top row first
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] if the stream holds fewer than `width * height` triples
    pub fn from_rgb_stream(stream: &[u8], width: usize, height: usize) -> Result<Self, Error> {
        let required = width * height * BYTES_PER_PIXEL;
        if stream.len() < required {
            return Err(Error::Truncated {
                len: stream.len(),
                required,
            });
        }
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let i = (y * width + x) * BYTES_PER_PIXEL;
                pixels.push(LedPixel::from_rgb(stream[i], stream[i + 1], stream[i + 2]));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the width of the matrix
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the matrix
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixels, row-major
    #[must_use]
    pub fn pixels(&self) -> &[LedPixel] {
        &self.pixels
    }

    /// Returns the pixel at column `x` of row `y`
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<LedPixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns an entire row of the matrix
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[LedPixel]> {
        if y < self.height {
            let start_index = y * self.width;
            Some(&self.pixels[start_index..start_index + self.width])
        } else {
            None
        }
    }

    /// Packs every pixel, rows top to bottom and columns left to right
    #[must_use]
    pub fn pack(&self) -> Vec<u8> {
        self.pixels.iter().map(|p| p.pack()).collect()
    }
}
