use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::Error;

// one bitmap per eye for each expression
const EYE_EXPRESSIONS: [&str; 15] = [
    "1",
    "2",
    "3",
    "angry",
    "camclose",
    "camopen",
    "closed",
    "dead",
    "happy",
    "heart",
    "lookleft",
    "lookright",
    "open",
    "sad",
    "sleepy",
];
const EYE_SIDES: [&str; 2] = ["left", "right"];

/// A sprite to convert: the name it is stored under and the bitmap it is read from
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SpriteDescriptor {
    name: String,
    source: PathBuf,
}

impl SpriteDescriptor {
    /// Creates a new [`SpriteDescriptor`]. `source` is resolved against the sprite directory
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Returns the key of this sprite in the LED maps
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bitmap path, relative to the sprite directory
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Ordered list of sprites with unique names
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SpriteCatalog {
    sprites: Vec<SpriteDescriptor>,
}

impl SpriteCatalog {
    /// Creates a new [`SpriteCatalog`]
    ///
    /// # Errors
    ///
    /// This function errors if two sprites share a name
    pub fn new(sprites: Vec<SpriteDescriptor>) -> Result<Self, Error> {
        if let Some(name) = sprites.iter().map(SpriteDescriptor::name).duplicates().next() {
            return Err(Error::DuplicateSprite(name.to_owned()));
        }
        Ok(Self { sprites })
    }

    /// The catalog of eye sprites: every expression, left eye then right eye
    ///
    /// Names look like `"angry left"` and map to bitmaps like `eye_angry_left.bmp`.
    #[must_use]
    pub fn builtin() -> Self {
        let sprites = EYE_EXPRESSIONS
            .iter()
            .cartesian_product(EYE_SIDES)
            .map(|(expression, side)| {
                SpriteDescriptor::new(
                    format!("{expression} {side}"),
                    format!("eye_{expression}_{side}.bmp"),
                )
            })
            .collect();
        Self { sprites }
    }

    /// Returns the sprites in catalog order
    #[must_use]
    pub fn sprites(&self) -> &[SpriteDescriptor] {
        &self.sprites
    }

    /// Returns the number of sprites
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns `true` if the catalog holds no sprites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Returns an iterator over the sprites in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, SpriteDescriptor> {
        self.sprites.iter()
    }
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a SpriteCatalog {
    type Item = &'a SpriteDescriptor;
    type IntoIter = std::slice::Iter<'a, SpriteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.iter()
    }
}
