//! warpix-io - File formats for warpix
//!
//! Reads and writes the two formats the library cares about:
//!
//! - PNG rasters (8-bit RGBA; other PNG layouts are expanded on read)
//! - The legacy 16-color palette format (64 bytes of packed
//!   little-endian integers)
//!
//! Everything decodes into and encodes from the warpix-core types;
//! no pixel processing happens here.

mod error;
pub mod pal;
pub mod png;

pub use error::{IoError, IoResult};
pub use pal::{PAL_BYTES, PAL_COLORS, read_pal, read_pal_file, write_pal, write_pal_file};
pub use self::png::{read_png, read_png_file, write_png, write_png_file};
