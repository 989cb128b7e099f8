pub(crate) mod matrix;

use std::fmt::Display;

// red occupies bits 7-5, green bits 4-2, blue bits 1-0
const RED_BASE: u8 = 0x10;
const RED_MASK: u8 = 0xE0;
const GREEN_BASE: u8 = 0x02;
const GREEN_MASK: u8 = 0x1C;

#[derive(Default, Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Clone, Hash)]
#[repr(u8)]
/// Intensity of one LED color channel
/// The LED driver supports four intensities per channel
pub enum Level {
    /// Channel value 0
    #[default]
    Off = 0,
    /// Channel values 1-127
    Low = 1,
    /// Channel values 128-191
    Medium = 2,
    /// Channel values 192-255
    High = 3,
}

impl Level {
    /// Quantizes an 8-bit color channel to an LED intensity
    #[must_use]
    pub const fn quantize(value: u8) -> Self {
        match value {
            0 => Self::Off,
            1..=127 => Self::Low,
            128..=191 => Self::Medium,
            192..=255 => Self::High,
        }
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        value as Self
    }
}

impl From<&Level> for u8 {
    fn from(value: &Level) -> Self {
        *value as Self
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(self))
    }
}

impl TryFrom<u8> for Level {
    type Error = &'static str;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            _ => Err("Only 0, 1, 2, and 3 are valid LED levels"),
        }
    }
}

/// The quantized levels of one pixel
#[derive(Default, Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct LedPixel {
    /// Red intensity
    pub red: Level,
    /// Green intensity
    pub green: Level,
    /// Blue intensity
    pub blue: Level,
}

impl LedPixel {
    /// Creates a pixel from already quantized levels
    #[must_use]
    pub const fn new(red: Level, green: Level, blue: Level) -> Self {
        Self { red, green, blue }
    }

    /// Quantizes each channel of an 8-bit red, green, blue triple
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Level::quantize(red),
            green: Level::quantize(green),
            blue: Level::quantize(blue),
        }
    }

    /// Packs the three levels into the byte layout of the LED driver
    ///
    /// ```rust
    /// use libledmap::{LedPixel, Level};
    ///
    /// let white = LedPixel::new(Level::High, Level::High, Level::High);
    /// assert_eq!(white.pack(), 0x93);
    /// ```
    #[must_use]
    pub const fn pack(self) -> u8 {
        let red = (RED_BASE << self.red as u8) & RED_MASK;
        let green = (GREEN_BASE << self.green as u8) & GREEN_MASK;
        red + green + self.blue as u8
    }
}

impl From<[u8; 3]> for LedPixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl From<LedPixel> for u8 {
    fn from(value: LedPixel) -> Self {
        value.pack()
    }
}
