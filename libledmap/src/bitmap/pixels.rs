use strum::{Display, EnumString, IntoStaticStr};
use tracing::trace;

use super::Error;
use crate::BYTES_PER_PIXEL;

// Bitmap rows are padded to a multiple of 4 bytes
const ROW_ALIGNMENT: usize = 4;

#[derive(Default, Debug, Eq, PartialEq, Copy, Clone, Hash, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "kebab-case")]
/// The order in which pixels are taken out of the bottom-up bitmap pixel array
///
/// Both orders emit rows top to bottom and channels as red, green, blue.
pub enum PixelOrder {
    /// The whole unpadded pixel array is reversed byte by byte.
    ///
    /// Reversing turns the bottom-up rows into top-down rows and the stored blue, green, red
    /// channels into red, green, blue, but it also reverses the pixels within each row, so the
    /// sprite comes out mirrored left to right. This is the order existing LED maps were built
    /// with.
    #[default]
    Mirrored,
    /// Rows top to bottom, pixels left to right
    Raster,
}

/// Number of padding bytes at the end of each stored row of `width` 24-bit pixels
#[must_use]
pub const fn row_padding(width: usize) -> usize {
    (ROW_ALIGNMENT - (width * BYTES_PER_PIXEL) % ROW_ALIGNMENT) % ROW_ALIGNMENT
}

/// Number of bytes each stored row of `width` 24-bit pixels occupies, padding included
#[must_use]
pub const fn row_stride(width: usize) -> usize {
    width * BYTES_PER_PIXEL + row_padding(width)
}

/// Removes the row padding from a bottom-up pixel array, keeping the stored row and channel order
///
/// # Errors
///
/// Returns [`Error::Truncated`] if `data` ends before the last pixel of the last row
pub fn strip_padding(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, Error> {
    let row_len = width * BYTES_PER_PIXEL;
    let stride = row_stride(width);
    if row_len == 0 || height == 0 {
        return Ok(Vec::new());
    }
    // the padding of the final row is not needed
    let required = stride * (height - 1) + row_len;
    if data.len() < required {
        return Err(Error::Truncated {
            len: data.len(),
            required,
        });
    }
    trace!(
        "Stripping {} padding bytes from {height} rows of {row_len} bytes",
        row_padding(width)
    );
    Ok(data
        .chunks(stride)
        .take(height)
        .flat_map(|row| &row[..row_len])
        .copied()
        .collect())
}

/// Turns a bottom-up, padded, blue-green-red pixel array into a stream of red, green, blue triples
/// with the top row first
///
/// The returned stream always holds `width * height * 3` bytes.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if `data` is too short for the given geometry
pub fn extract_rgb_stream(
    data: &[u8],
    width: usize,
    height: usize,
    order: PixelOrder,
) -> Result<Vec<u8>, Error> {
    let mut stream = strip_padding(data, width, height)?;
    if stream.is_empty() {
        return Ok(stream);
    }
    match order {
        PixelOrder::Mirrored => {
            stream.reverse();
            Ok(stream)
        }
        PixelOrder::Raster => Ok(stream
            .chunks_exact(width * BYTES_PER_PIXEL)
            .rev()
            .flat_map(|row| row.chunks_exact(BYTES_PER_PIXEL))
            .flat_map(|bgr| [bgr[2], bgr[1], bgr[0]])
            .collect()),
    }
}
