use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Errors raised while reading or decoding a single bitmap
pub enum Error {
    /// The bitmap could not be read
    #[error("i/o error")]
    Io(#[from] io::Error),
    /// The buffer ends before a required field or before the end of the pixel array
    #[error("bitmap data is truncated: {len} bytes, expected at least {required}")]
    Truncated {
        /// bytes available
        len: usize,
        /// bytes required
        required: usize,
    },
    /// The file does not start with `BM`
    #[error("missing 'BM' signature")]
    Signature,
    /// Width or height is not 8
    #[error("bitmap is not 8x8 pixels (found {width}x{height})")]
    Dimensions {
        /// width found in the header
        width: u32,
        /// height found in the header
        height: u32,
    },
    /// The pixels are not stored as uncompressed 24-bit values
    #[error("only uncompressed 24-bit bitmaps are supported (found {bits_per_pixel} bits per pixel, compression {compression})")]
    PixelFormat {
        /// bits per pixel found in the header
        bits_per_pixel: u16,
        /// compression method found in the header
        compression: u32,
    },
    /// The pixel array does not start right after the 54 byte header
    #[error("pixel data must start at byte 54 (header says {offset})")]
    DataOffset {
        /// offset found in the header
        offset: u32,
    },
}

impl Error {
    /// Whether this error means the bitmap could not be read in full, as opposed to being read
    /// and found malformed
    #[must_use]
    pub const fn is_read_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Truncated { .. })
    }
}
