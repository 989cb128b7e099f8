#![allow(clippy::module_name_repetitions)]

mod error;
pub(crate) mod header;
pub(crate) mod pixels;

pub use error::Error;
pub use header::{read_le_field, read_u16_le, read_u32_le, BitmapHeader, Geometry};
pub use pixels::{extract_rgb_stream, row_padding, row_stride, strip_padding, PixelOrder};

use crate::{HEADER_LEN, PIXEL_DATA_OFFSET};
use std::{fs, io::Read, path::Path};
use tracing::debug;

/// A bitmap file held in memory together with its parsed header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteBitmap {
    header: BitmapHeader,
    data: Vec<u8>,
}

impl SpriteBitmap {
    /// Wraps the complete content of a bitmap file
    ///
    /// # Errors
    ///
    /// This function errors if the buffer is shorter than the header or lacks the `BM` signature.
    /// The header values themselves are checked by [`BitmapHeader::validate`]
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, Error> {
        debug!("read {} bytes for bitmap", data.len());
        let header = BitmapHeader::parse(&data)?;
        Ok(Self { header, data })
    }

    /// Reads a bitmap from a reader until EOF
    ///
    /// # Errors
    ///
    /// This function will error if the reader fails. See [`Self::from_bytes`] for other errors
    pub fn from_reader(mut r: impl Read) -> Result<Self, Error> {
        let mut data = Vec::with_capacity(HEADER_LEN);
        r.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Reads a bitmap from the provided file path
    ///
    /// The whole file is read and the handle released before anything is parsed.
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be read. See [`Self::from_bytes`] for other
    /// errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let data = fs::read(filename)?;
        Self::from_bytes(data)
    }

    /// Returns a reference to the parsed [`BitmapHeader`]
    #[must_use]
    pub const fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Returns the width and height found in the header
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.header.geometry
    }

    /// Returns the raw, padded pixel array
    #[must_use]
    pub fn pixel_data(&self) -> &[u8] {
        &self.data[PIXEL_DATA_OFFSET..]
    }

    /// Returns the complete file content
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
