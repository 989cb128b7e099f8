use tracing::{trace, warn};

use super::Error;
use crate::{HEADER_LEN, PIXEL_DATA_OFFSET, SPRITE_HEIGHT, SPRITE_WIDTH};

const SIGNATURE: [u8; 2] = *b"BM";
const DATA_OFFSET_FIELD: usize = 10;
const WIDTH_FIELD: usize = 18;
const HEIGHT_FIELD: usize = 22;
const BITS_PER_PIXEL_FIELD: usize = 28;
const COMPRESSION_FIELD: usize = 30;
const IMAGE_SIZE_FIELD: usize = 34;

const SUPPORTED_BITS_PER_PIXEL: u16 = 24;
// BI_RGB
const NO_COMPRESSION: u32 = 0;

/// Width and height of a bitmap, in pixels
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Geometry {
    /// Field offset: 18
    pub width: u32,
    /// Field offset: 22
    pub height: u32,
}

impl Geometry {
    /// Whether this geometry matches the 8x8 sprites driven by the LED matrix
    #[must_use]
    pub const fn is_sprite(&self) -> bool {
        self.width == SPRITE_WIDTH && self.height == SPRITE_HEIGHT
    }

    /// Checks that the geometry is 8x8
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimensions`] for any other size
    pub fn ensure_sprite(&self) -> Result<(), Error> {
        if self.is_sprite() {
            Ok(())
        } else {
            Err(Error::Dimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// The fields of the bitmap file header and info header this crate cares about
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BitmapHeader {
    /// Field offset: 10
    ///
    /// Offset of the pixel array from the start of the file
    pub data_offset: u32,

    /// Field offsets: 18 (width), 22 (height)
    pub geometry: Geometry,

    /// Field offset: 28
    pub bits_per_pixel: u16,

    /// Field offset: 30
    ///
    /// Compression method, 0 for uncompressed
    pub compression: u32,

    /// Field offset: 34
    ///
    /// Size of the pixel array in bytes. Often 0 for uncompressed bitmaps
    pub image_size: u32,
}

impl BitmapHeader {
    /// Parses the header from the start of a bitmap buffer
    ///
    /// # Errors
    ///
    /// This function errors if the buffer is shorter than the 54 byte header or does not start
    /// with the `BM` signature
    pub fn parse(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < HEADER_LEN {
            return Err(Error::Truncated {
                len: buf.len(),
                required: HEADER_LEN,
            });
        }
        if buf[..2] != SIGNATURE {
            return Err(Error::Signature);
        }
        let header = Self {
            data_offset: read_u32_le(buf, DATA_OFFSET_FIELD)?,
            geometry: Geometry {
                width: read_u32_le(buf, WIDTH_FIELD)?,
                height: read_u32_le(buf, HEIGHT_FIELD)?,
            },
            bits_per_pixel: read_u16_le(buf, BITS_PER_PIXEL_FIELD)?,
            compression: read_u32_le(buf, COMPRESSION_FIELD)?,
            image_size: read_u32_le(buf, IMAGE_SIZE_FIELD)?,
        };
        trace!("Parsed bitmap header: {header:?}");
        Ok(header)
    }

    /// Checks that the header describes an 8x8, uncompressed, 24-bit bitmap whose pixel array
    /// starts right after the header
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dimensions`], [`Error::PixelFormat`] or [`Error::DataOffset`]
    pub fn validate(&self) -> Result<(), Error> {
        self.geometry.ensure_sprite()?;
        if self.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL || self.compression != NO_COMPRESSION {
            return Err(Error::PixelFormat {
                bits_per_pixel: self.bits_per_pixel,
                compression: self.compression,
            });
        }
        if usize::try_from(self.data_offset).ok() != Some(PIXEL_DATA_OFFSET) {
            return Err(Error::DataOffset {
                offset: self.data_offset,
            });
        }
        let expected = super::pixels::row_stride(SPRITE_WIDTH as usize) * SPRITE_HEIGHT as usize;
        if self.image_size != 0 && usize::try_from(self.image_size).ok() != Some(expected) {
            warn!(
                "Header image size {} does not match the expected {expected} bytes",
                self.image_size
            );
        }
        Ok(())
    }
}

/// Reads an unsigned little-endian field of `width` bytes (1 to 8) starting at `offset`
///
/// The bytes are stored least significant first, so they are folded in reverse order.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if the field extends past the end of `buf`
pub fn read_le_field(buf: &[u8], offset: usize, width: usize) -> Result<u64, Error> {
    debug_assert!((1..=8).contains(&width), "field width must be 1-8 bytes");
    let required = offset + width;
    let field = buf.get(offset..required).ok_or(Error::Truncated {
        len: buf.len(),
        required,
    })?;
    Ok(field
        .iter()
        .rev()
        .fold(0, |acc, &byte| (acc << 8) | u64::from(byte)))
}

/// Reads a 2 byte little-endian field
///
/// # Errors
///
/// Returns [`Error::Truncated`] if the field extends past the end of `buf`
#[allow(clippy::cast_possible_truncation)]
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, Error> {
    read_le_field(buf, offset, 2).map(|v| v as u16)
}

/// Reads a 4 byte little-endian field
///
/// # Errors
///
/// Returns [`Error::Truncated`] if the field extends past the end of `buf`
#[allow(clippy::cast_possible_truncation)]
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32, Error> {
    read_le_field(buf, offset, 4).map(|v| v as u32)
}
