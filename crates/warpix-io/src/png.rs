//! PNG raster format support
//!
//! Rasters are written as 8-bit RGBA. On the way in, grayscale,
//! indexed, RGB, and 16-bit images are expanded to 8-bit color by the
//! decoder so every PNG arrives as a plain RGBA pixel grid.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use warpix_core::{Color, Raster};

/// Read a PNG image into a raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let width = info.width;
    let height = info.height;
    let bytes_per_row = info.line_size;
    let data = &buf[..info.buffer_size()];
    let (color_type, _) = reader.output_color_type();

    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let color = match color_type {
                ColorType::Grayscale => {
                    let g = data[row_start + x as usize];
                    Color::rgb(g, g, g)
                }
                ColorType::GrayscaleAlpha => {
                    let idx = row_start + x as usize * 2;
                    Color::rgba(data[idx], data[idx], data[idx], data[idx + 1])
                }
                ColorType::Rgb => {
                    let idx = row_start + x as usize * 3;
                    Color::rgb(data[idx], data[idx + 1], data[idx + 2])
                }
                ColorType::Rgba => {
                    let idx = row_start + x as usize * 4;
                    Color::rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3])
                }
                // normalize_to_color8 expands indexed images
                ColorType::Indexed => {
                    return Err(IoError::UnsupportedFormat(
                        "indexed PNG not expanded by decoder".to_string(),
                    ));
                }
            };
            row.push(color);
        }
        rows.push(row);
    }

    Raster::from_rows(rows).map_err(IoError::Core)
}

/// Write a raster as an 8-bit RGBA PNG.
///
/// Legacy-precision pixels are expanded to full precision on the way
/// out.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;

    let mut data = Vec::with_capacity(raster.pixels().len() * 4);
    for pixel in raster.pixels() {
        let c = pixel.to_full();
        data.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
    Ok(())
}

/// Read a PNG file into a raster.
pub fn read_png_file(path: impl AsRef<Path>) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    read_png(BufReader::new(file))
}

/// Write a raster to a PNG file.
pub fn write_png_file(raster: &Raster, path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    write_png(raster, BufWriter::new(file))
}
