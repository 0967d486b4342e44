//! Display formatting shared by every dictionary item

use std::fmt;

/// A concrete font face (name and point size)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontFace {
    /// Font family name (e.g., "Calabri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: u32,
}

impl FontFace {
    /// Create a new font face
    pub fn new<S: Into<String>>(name: S, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create an RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string.
    ///
    /// Anything that is not exactly seven characters starting with `#`
    /// followed by six hex digits yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return None;
        }
        let digits = hex.get(1..)?;
        let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
        Some(Rgb { r, g, b })
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Widget size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Title, font, color and size of an item as shown by the authoring tool
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemFormat {
    /// Field title (e.g., "Gloss"); empty for untitled comments
    pub title: String,
    /// Font face, `None` until the item is configured
    pub font: Option<FontFace>,
    /// Foreground color
    pub foreground: Rgb,
    /// Widget size
    pub size: Size,
}

impl ItemFormat {
    /// Create a format with the given title
    pub fn titled<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
