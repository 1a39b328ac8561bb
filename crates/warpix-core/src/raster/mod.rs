//! Raster - the pixel grid container
//!
//! A [`Raster`] is a row-major 2D grid of [`Color`]s. Dimensions are
//! fixed at construction and the backing storage is a single flat
//! vector, so width and height can never drift out of sync with the
//! pixel data.

mod compose;
mod quantize;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geom::Quad;

/// A row-major grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl Raster {
    /// Create a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Color::transparent(); width as usize * height as usize],
        }
    }

    /// Create a raster from rows of colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] unless every row has the length of
    /// the first.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, Vec::len);
        for (row, colors) in rows.iter().enumerate() {
            if colors.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: colors.len(),
                });
            }
        }
        Ok(Self {
            width: width as u32,
            height,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The axis-aligned rectangle covering this raster, anchored at the
    /// origin. This is the source shape the resampler warps from.
    pub fn bounding_quad(&self) -> Quad {
        Quad::axis_aligned(0.0, 0.0, self.width as f64, self.height as f64)
    }

    /// Color at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.width as usize + x as usize)
    }

    /// Set the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data[index] = color;
        Ok(())
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }
}
