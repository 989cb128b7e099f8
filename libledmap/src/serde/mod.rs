mod error;
mod parse;

pub use error::Error;

use crate::Error as LedMapError;
use itertools::Itertools;
use std::{
    ffi::OsString,
    fmt::{Display, Write as _},
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, info, trace};

/// Packed LED bytes for a set of sprites, keyed by sprite name and kept in insertion order
///
/// The textual form is a literal mapping of quoted names to lists of byte values:
///
/// ```text
/// {'1 left': [0, 0, 37, ...], '1 right': [0, 37, 37, ...]}
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LedMaps {
    entries: Vec<(String, Vec<u8>)>,
}

impl LedMaps {
    /// Creates an empty [`LedMaps`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends the packed bytes of a sprite
    ///
    /// # Errors
    ///
    /// This function errors if `name` is already present
    pub fn insert(&mut self, name: impl Into<String>, leds: Vec<u8>) -> Result<(), Error> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(Error::DuplicateName(name));
        }
        self.entries.push((name, leds));
        Ok(())
    }

    /// Returns the packed bytes stored under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, leds)| leds.as_slice())
    }

    /// Returns the sprite names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns an iterator over `(name, packed bytes)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.entries
            .iter()
            .map(|(name, leds)| (name.as_str(), leds.as_slice()))
    }

    /// Returns the number of sprites
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sprite has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be read or does not hold a valid mapping
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, LedMapError> {
        let path = filename.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LedMapError::Load {
            path: path.to_owned(),
            source,
        })?;
        debug!("read {} bytes of LED maps", text.len());
        Ok(text.parse()?)
    }

    /// Serializes [`Self`] and atomically replaces the file at the provided path
    ///
    /// The text is written to a sibling `.tmp` file first and renamed over `filename` once
    /// complete, so the target either keeps its previous content or holds the full mapping.
    ///
    /// # Errors
    ///
    /// This will error if the temporary file cannot be written or renamed
    pub fn into_file(self, filename: impl AsRef<Path>) -> Result<(), LedMapError> {
        let path = filename.as_ref();
        let tmp = temporary_path(path);
        let text = self.to_string();
        trace!("LED MAPS:\n{text}");

        let written = write_text(&tmp, &text).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = written {
            // the target was never touched, only the temporary file may be left behind
            let _ = fs::remove_file(&tmp);
            return Err(LedMapError::Write {
                path: path.to_owned(),
                source,
            });
        }
        info!(
            "Wrote LED maps for {} sprites to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, std::ffi::OsStr::to_os_string);
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let f = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    let mut f = BufWriter::new(f);
    f.write_all(text.as_bytes())?;
    f.flush()?;
    f.get_ref().sync_all()
}

fn quote_name(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        if matches!(c, '\\' | '\'') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

impl Display for LedMaps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        let body = self
            .entries
            .iter()
            .map(|(name, leds)| format!("{}: [{}]", quote_name(name), leds.iter().join(", ")))
            .join(", ");
        f.write_str(&body)?;
        f.write_char('}')
    }
}

impl FromStr for LedMaps {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, entries) = parse::parse_complete(s).map_err(|e| Error::Syntax(e.to_string()))?;
        let mut maps = Self::new();
        for (name, leds) in entries {
            maps.insert(name, leds)?;
        }
        Ok(maps)
    }
}

impl<'a> IntoIterator for &'a LedMaps {
    type Item = &'a (String, Vec<u8>);
    type IntoIter = std::slice::Iter<'a, (String, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
