use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    bitmap::{self, extract_rgb_stream, PixelOrder, SpriteBitmap},
    led::matrix::LedMatrix,
    serde::LedMaps,
    Error, SpriteCatalog, SpriteDescriptor,
};

/// Converts sprite bitmaps into packed LED bytes
///
/// ```rust
/// use libledmap::{Converter, PixelOrder};
///
/// let converter = Converter::builder()
///     .sprite_dir("sprites")
///     .order(PixelOrder::Raster)
///     .build();
/// assert_eq!(converter.order(), PixelOrder::Raster);
/// ```
#[derive(Builder, Debug, Clone)]
pub struct Converter {
    /// Directory the catalog's bitmap paths are resolved against
    #[builder(into)]
    sprite_dir: PathBuf,

    /// Order pixels are taken out of the bitmap
    #[builder(default)]
    order: PixelOrder,
}

impl Converter {
    /// Returns the directory sprites are read from
    #[must_use]
    pub fn sprite_dir(&self) -> &Path {
        &self.sprite_dir
    }

    /// Returns the pixel order used for extraction
    #[must_use]
    pub const fn order(&self) -> PixelOrder {
        self.order
    }

    /// Runs an in-memory bitmap through header validation, pixel extraction, quantization and
    /// packing. Returns one byte per pixel, rows top to bottom
    ///
    /// # Errors
    ///
    /// This function errors if the bitmap is not an 8x8, uncompressed, 24-bit bitmap or if its
    /// pixel array is truncated
    pub fn convert_bitmap(&self, bitmap: &SpriteBitmap) -> Result<Vec<u8>, bitmap::Error> {
        bitmap.header().validate()?;
        let geometry = bitmap.geometry();
        let (width, height) = (geometry.width as usize, geometry.height as usize);
        debug!("Bitmap width, height: {:?}", (width, height));

        let stream = extract_rgb_stream(bitmap.pixel_data(), width, height, self.order)?;
        debug!("Length of {} RGB stream: {}", self.order, stream.len());

        let matrix = LedMatrix::from_rgb_stream(&stream, width, height)?;
        Ok(matrix.pack())
    }

    /// Reads and converts a single sprite
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the bitmap cannot be read in full and [`Error::Format`] if it
    /// is not an 8x8, uncompressed, 24-bit bitmap. Both name the sprite
    #[instrument(skip_all, fields(sprite = sprite.name()), level = "debug")]
    pub fn convert_sprite(&self, sprite: &SpriteDescriptor) -> Result<Vec<u8>, Error> {
        let path = self.sprite_dir.join(sprite.source());
        SpriteBitmap::from_file(&path)
            .and_then(|bitmap| self.convert_bitmap(&bitmap))
            .map_err(|e| Error::for_sprite(sprite.name(), path, e))
    }

    /// Converts every sprite of the catalog, in catalog order
    ///
    /// Stops at the first sprite that fails; nothing is returned for the sprites before it.
    ///
    /// # Errors
    ///
    /// See [`Self::convert_sprite`]
    pub fn convert_catalog(&self, catalog: &SpriteCatalog) -> Result<LedMaps, Error> {
        let mut led_maps = LedMaps::new();
        for sprite in catalog {
            let leds = self.convert_sprite(sprite)?;
            info!("Converted sprite '{}' ({} LEDs)", sprite.name(), leds.len());
            led_maps
                .insert(sprite.name(), leds)
                .map_err(|_| Error::DuplicateSprite(sprite.name().to_owned()))?;
        }
        Ok(led_maps)
    }
}
