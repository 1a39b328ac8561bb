//! Legacy palette file format support
//!
//! The legacy format is exactly 16 little-endian 4-byte unsigned
//! integers, one packed color each, 64 bytes in total. The fourth byte
//! of each integer is ignored on read and every color comes out
//! full-precision and opaque. The format does not encode transparency;
//! by convention callers treat entry 0 as the transparent sentinel.

use crate::{IoError, IoResult};
use std::fs;
use std::path::Path;
use warpix_core::{Color, Palette};

/// Number of colors in a legacy palette file.
pub const PAL_COLORS: usize = 16;
/// Size of a legacy palette file in bytes.
pub const PAL_BYTES: usize = PAL_COLORS * 4;

/// Decode a legacy palette from its 64-byte representation.
///
/// # Errors
///
/// Returns [`IoError::BadPaletteLength`] unless `data` is exactly
/// [`PAL_BYTES`] long.
pub fn read_pal(data: &[u8]) -> IoResult<Palette> {
    if data.len() != PAL_BYTES {
        return Err(IoError::BadPaletteLength {
            expected: PAL_BYTES,
            actual: data.len(),
        });
    }
    let colors = data
        .chunks_exact(4)
        .map(|chunk| {
            let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            Color::from_packed(value, true)
        })
        .collect();
    Palette::new(colors).map_err(IoError::Core)
}

/// Encode a palette into the 64-byte legacy representation.
///
/// Legacy-precision entries are expanded to full precision first; the
/// alpha byte is written but carries no meaning for readers.
///
/// # Errors
///
/// Returns [`IoError::BadPaletteLength`] unless the palette holds
/// exactly [`PAL_COLORS`] colors.
pub fn write_pal(palette: &Palette) -> IoResult<Vec<u8>> {
    if palette.len() != PAL_COLORS {
        return Err(IoError::BadPaletteLength {
            expected: PAL_COLORS,
            actual: palette.len(),
        });
    }
    let mut data = Vec::with_capacity(PAL_BYTES);
    for color in palette.colors() {
        data.extend_from_slice(&color.to_full().to_packed().to_le_bytes());
    }
    Ok(data)
}

/// Read a legacy palette file.
pub fn read_pal_file(path: impl AsRef<Path>) -> IoResult<Palette> {
    let data = fs::read(path.as_ref())?;
    read_pal(&data)
}

/// Write a palette to a legacy palette file.
pub fn write_pal_file(palette: &Palette, path: impl AsRef<Path>) -> IoResult<()> {
    let data = write_pal(palette)?;
    fs::write(path.as_ref(), data)?;
    Ok(())
}
