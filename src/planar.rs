use std::ops::Index;

use itertools::Itertools;

use crate::error::{PixelplaneError, Result};

/// Channel indices into a [`PixelCube`] pixel.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

/// Pixel data addressed by row, column and channel.
///
/// The buffer is stored flat in row-major order, one `[u8; 3]` per pixel
/// with channels ordered red, green, blue. Channel values being bytes makes
/// the [0, 255] range invariant structural. Alpha is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCube {
    rows: usize,
    columns: usize,
    pixels: Vec<[u8; 3]>,
}

impl PixelCube {
    /// Unpacks a flat buffer of ARGB words (bits 24..=31 alpha, 16..=23 red,
    /// 8..=15 green, 0..=7 blue, row-major) into planar form. Alpha is
    /// discarded.
    ///
    /// Fails with [`PixelplaneError::InvalidDimensions`] when the buffer
    /// length does not equal `rows * columns` or either dimension is zero;
    /// nothing is allocated in that case.
    pub fn from_packed(packed: &[u32], columns: usize, rows: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || packed.len() != rows * columns {
            return Err(PixelplaneError::InvalidDimensions {
                rows,
                columns,
                len: packed.len(),
            });
        }

        let pixels = packed
            .iter()
            .map(|&p| {
                [
                    ((p >> 16) & 0xFF) as u8,
                    ((p >> 8) & 0xFF) as u8,
                    (p & 0xFF) as u8,
                ]
            })
            .collect_vec();

        Ok(Self {
            rows,
            columns,
            pixels,
        })
    }

    /// Packs back into ARGB words. The alpha byte was dropped on the way in,
    /// so every word gets full opacity; the round trip is lossy in alpha and
    /// exact in the color channels.
    pub fn to_packed(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|&[r, g, b]| {
                0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect_vec()
    }

    /// Builds a cube directly from per-pixel channel triples.
    pub fn from_pixels(pixels: Vec<[u8; 3]>, columns: usize, rows: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || pixels.len() != rows * columns {
            return Err(PixelplaneError::InvalidDimensions {
                rows,
                columns,
                len: pixels.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            pixels,
        })
    }

    /// Applies `f` to every pixel, producing a new independently owned cube
    /// of the same shape.
    pub fn map<F>(&self, f: F) -> PixelCube
    where
        F: Fn([u8; 3]) -> [u8; 3],
    {
        PixelCube {
            rows: self.rows,
            columns: self.columns,
            pixels: self.pixels.iter().map(|&px| f(px)).collect_vec(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, row: usize) -> &[[u8; 3]] {
        &self.pixels[row * self.columns..(row + 1) * self.columns]
    }

    /// Flat row-major view of all pixels.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}

impl Index<(usize, usize)> for PixelCube {
    type Output = [u8; 3];

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && column < self.columns);
        &self.pixels[row * self.columns + column]
    }
}
