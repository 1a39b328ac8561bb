//! Palette application and palette sheets

use super::Raster;
use crate::error::{Error, Result};
use crate::palette::Palette;

impl Raster {
    /// A new raster with every pixel replaced by the palette's
    /// nearest-match entry, expanded back to full precision.
    pub fn apply_palette(&self, palette: &Palette) -> Raster {
        let data = self
            .pixels()
            .iter()
            .map(|c| palette.nearest(c).to_full())
            .collect();
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Remap every pixel from `from` to the same-index entry of `to`,
    /// in place.
    ///
    /// Pixels not found on `from` (exact match) become the target
    /// sentinel.
    pub fn swap_palette(&mut self, from: &Palette, to: &Palette) {
        for pixel in self.pixels_mut() {
            *pixel = from.remap(pixel, to);
        }
    }

    /// Render this raster once per palette and lay the results out on a
    /// near-square sheet.
    ///
    /// The sheet has `ceil(sqrt(n))` columns and `ceil(n / columns)`
    /// rows, filled row-major left to right, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] when `palettes` is empty.
    pub fn palette_sheet(&self, palettes: &[Palette]) -> Result<Raster> {
        if palettes.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let columns = (palettes.len() as f64).sqrt().ceil() as usize;
        let rows = palettes.len().div_ceil(columns);

        let mut sheet: Option<Raster> = None;
        for row in 0..rows {
            let mut strip: Option<Raster> = None;
            for palette in palettes.iter().skip(row * columns).take(columns) {
                let cell = self.apply_palette(palette);
                strip = Some(match strip {
                    Some(s) => s.beside(&cell),
                    None => cell,
                });
            }
            if let Some(strip) = strip {
                sheet = Some(match sheet {
                    Some(s) => s.stacked(&strip),
                    None => strip,
                });
            }
        }
        sheet.ok_or(Error::EmptyGrid)
    }
}
