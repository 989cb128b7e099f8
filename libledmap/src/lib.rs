//! # libledmap
//!
//!
//! This library converts 8x8 pixel bitmap sprites into the packed per-pixel byte values expected by
//! an 8-bit color RGB LED matrix backpack, and reads/writes the textual LED map that collects those
//! values for a whole set of sprites.
//!
//! It deliberately handles a single flavor of bitmap: uncompressed, bottom-up, 24 bits per pixel,
//! with a 54 byte header and exactly 8x8 pixels. Anything else is rejected instead of guessed at.
//!
//! ### Pipeline
//!
//! Each sprite goes through the same linear transform:
//!
//! 1. The raw file is read in full ([`SpriteBitmap::from_file`])
//! 2. Width and height are read from the little-endian header fields and checked to be 8x8
//! 3. Row padding is stripped and the bottom-up pixel data is reordered top row first
//!    ([`PixelOrder`])
//! 4. Every 8-bit color channel is quantized to a 2-bit [`Level`]
//! 5. The three levels of a pixel are packed into one byte ([`LedPixel::pack`])
//!
//! The packed sprites are collected into [`LedMaps`], keyed by sprite name, in catalog order.
//!
//! ### Usage
//!
//! ```rust,no_run
//! use libledmap::{Converter, SpriteCatalog, OUTPUT_FILE};
//!
//! fn main() -> Result<(), libledmap::Error> {
//!     let converter = Converter::builder().sprite_dir("sprites").build();
//!     let led_maps = converter.convert_catalog(&SpriteCatalog::builtin())?;
//!     led_maps.into_file(OUTPUT_FILE)?;
//!     Ok(())
//! }
//! ```
//!
//! #### Packed byte layout
//!
//! The LED driver expects red in bits 7-5, green in bits 4-2 and blue in bits 1-0. Red and green
//! levels are spread by shifting a single bit (`0x10 << red`, `0x02 << green`) and masking, so a
//! level of 0 leaves the field dark and levels 1-3 select one of three bits. Blue is stored as the
//! raw level.
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the bitmap reader, header parser and pixel extractor
pub mod bitmap;
mod catalog;
mod convert;
mod error;
/// Module containing channel quantization and LED byte packing
pub mod led;
/// Module containing the textual LED map format
pub mod serde;

pub use bitmap::{Error as BitmapError, PixelOrder, SpriteBitmap};
pub use catalog::{SpriteCatalog, SpriteDescriptor};
pub use convert::Converter;
pub use error::Error;
pub use led::{matrix::LedMatrix, LedPixel, Level};
pub use serde::LedMaps;

/// Width every sprite must have, in pixels
pub const SPRITE_WIDTH: u32 = 8;
/// Height every sprite must have, in pixels
pub const SPRITE_HEIGHT: u32 = 8;
/// Number of bytes used by one pixel in the source bitmaps (blue, green, red)
pub const BYTES_PER_PIXEL: usize = 3;
/// Length of the file header plus the info header of the supported bitmaps
pub const HEADER_LEN: usize = 54;
/// Byte offset at which the pixel array starts
pub const PIXEL_DATA_OFFSET: usize = 54;
/// File name the LED maps are written to by default
pub const OUTPUT_FILE: &str = "ledmaps.txt";
/// Directory the sprite bitmaps are read from by default
pub const DEFAULT_SPRITE_DIR: &str = "sprites";
