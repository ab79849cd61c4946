use std::fmt;

use crate::app::infrastructure::error::{EditorError, Result};

pub const MIN_FONT_SIZE: u32 = 8;
pub const MAX_FONT_SIZE: u32 = 72;

pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// An RGB color as applied to the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub const WHITE: ThemeColor = ThemeColor::rgb(255, 255, 255);
    pub const BLACK: ThemeColor = ThemeColor::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for ThemeColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font family and point size for the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: u32,
}

impl FontSpec {
    /// Build a font spec, rejecting blank families and sizes outside
    /// `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
    pub fn new(family: &str, size: u32) -> Result<Self> {
        let family = family.trim();
        if family.is_empty() {
            return Err(EditorError::InvalidFont("font family is empty".to_string()));
        }
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(EditorError::InvalidFont(format!(
                "size {} is outside {}..={}",
                size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        Ok(Self {
            family: family.to_string(),
            size,
        })
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Display attributes currently applied to the text area. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: ThemeColor,
    pub foreground: ThemeColor,
    pub font: FontSpec,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: ThemeColor::WHITE,
            foreground: ThemeColor::BLACK,
            font: FontSpec::default(),
        }
    }
}
