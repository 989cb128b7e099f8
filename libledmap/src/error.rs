use std::{io, path::PathBuf};

use crate::{bitmap, serde};
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libledmap` errors
pub enum Error {
    /// Error returned if a sprite bitmap is missing, unreadable, or too short
    #[error("unable to read sprite '{sprite}' from {}", .path.display())]
    Read {
        /// name of the sprite in the catalog
        sprite: String,
        /// path the bitmap was read from
        path: PathBuf,
        /// underlying bitmap error
        #[source]
        source: bitmap::Error,
    },
    /// Error returned if a sprite bitmap was read but is not an 8x8, 24-bit, uncompressed bitmap
    #[error("sprite '{sprite}' ({}) has an unsupported bitmap", .path.display())]
    Format {
        /// name of the sprite in the catalog
        sprite: String,
        /// path the bitmap was read from
        path: PathBuf,
        /// underlying bitmap error
        #[source]
        source: bitmap::Error,
    },
    /// Error returned if the LED map file cannot be created or written
    #[error("unable to write LED maps to {}", .path.display())]
    Write {
        /// output path
        path: PathBuf,
        /// underlying i/o error
        #[source]
        source: io::Error,
    },
    /// Error returned if an existing LED map file cannot be read
    #[error("unable to read LED maps from {}", .path.display())]
    Load {
        /// input path
        path: PathBuf,
        /// underlying i/o error
        #[source]
        source: io::Error,
    },
    /// Error returned if a sprite name appears twice in a catalog
    #[error("sprite name '{0}' appears more than once")]
    DuplicateSprite(String),
    /// Error returned if LED map text cannot be parsed
    #[error("parse error")]
    Parse(#[from] serde::Error),
}

impl Error {
    /// Attaches sprite context to a [`bitmap::Error`], sorting it into a read or format error
    pub(crate) fn for_sprite(sprite: &str, path: PathBuf, source: bitmap::Error) -> Self {
        let sprite = sprite.to_owned();
        if source.is_read_error() {
            Self::Read {
                sprite,
                path,
                source,
            }
        } else {
            Self::Format {
                sprite,
                path,
                source,
            }
        }
    }

    /// Returns the name of the sprite this error is about, if any
    #[must_use]
    pub fn sprite(&self) -> Option<&str> {
        match self {
            Self::Read { sprite, .. }
            | Self::Format { sprite, .. }
            | Self::DuplicateSprite(sprite) => Some(sprite.as_str()),
            Self::Write { .. } | Self::Load { .. } | Self::Parse(_) => None,
        }
    }
}
