//! Colored tag labels that can be attached to notes.

use crate::domain::TagId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, colored label attached to zero or more notes.
///
/// Names are display strings and are not required to be unique. The registry
/// order of tags is their display order.
///
/// # Examples
///
/// ```
/// use chrisnotes::domain::{Tag, TagColor};
///
/// let tag = Tag::new("Work", TagColor::Green).unwrap();
/// assert_eq!(tag.name, "Work");
/// assert_eq!(tag.display_color().hex(), "#34C759");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: TagColor,
}

/// Error returned when constructing a tag with an invalid name.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new tag with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the name is empty or whitespace-only.
    pub fn new(name: &str, color: TagColor) -> Result<Self, ParseTagError> {
        Ok(Self {
            id: TagId::new(),
            name: validate_name(name)?,
            color,
        })
    }

    /// Replaces the display name.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the name is empty or whitespace-only.
    pub fn rename(&mut self, name: &str) -> Result<(), ParseTagError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Returns the renderable color for this tag.
    pub fn display_color(&self) -> DisplayColor {
        self.color.display_color()
    }
}

fn validate_name(name: &str) -> Result<String, ParseTagError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ParseTagError("tag name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Stored tag color.
///
/// Values outside the palette are kept verbatim in `Other` so they survive a
/// load/save cycle; they only fall back to blue when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
    Other(String),
}

impl TagColor {
    /// The color used for new tags and for unrecognized stored values.
    pub const DEFAULT: TagColor = TagColor::Blue;

    /// The selectable palette, in picker order.
    pub fn palette() -> [TagColor; 7] {
        [
            TagColor::Red,
            TagColor::Orange,
            TagColor::Yellow,
            TagColor::Green,
            TagColor::Blue,
            TagColor::Purple,
            TagColor::Gray,
        ]
    }

    /// Returns the stored name of this color.
    pub fn as_str(&self) -> &str {
        match self {
            TagColor::Red => "red",
            TagColor::Orange => "orange",
            TagColor::Yellow => "yellow",
            TagColor::Green => "green",
            TagColor::Blue => "blue",
            TagColor::Purple => "purple",
            TagColor::Gray => "gray",
            TagColor::Other(raw) => raw,
        }
    }

    /// Returns true for one of the seven palette colors.
    pub fn is_known(&self) -> bool {
        !matches!(self, TagColor::Other(_))
    }

    /// Maps the stored color to a renderable value.
    pub fn display_color(&self) -> DisplayColor {
        match self {
            TagColor::Red => DisplayColor::rgb(0xFF, 0x3B, 0x30),
            TagColor::Orange => DisplayColor::rgb(0xFF, 0x95, 0x00),
            TagColor::Yellow => DisplayColor::rgb(0xFF, 0xCC, 0x00),
            TagColor::Green => DisplayColor::rgb(0x34, 0xC7, 0x59),
            TagColor::Blue => DisplayColor::rgb(0x00, 0x7A, 0xFF),
            TagColor::Purple => DisplayColor::rgb(0xAF, 0x52, 0xDE),
            TagColor::Gray => DisplayColor::rgb(0x8E, 0x8E, 0x93),
            TagColor::Other(_) => TagColor::DEFAULT.display_color(),
        }
    }
}

impl Default for TagColor {
    fn default() -> Self {
        TagColor::DEFAULT
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TagColor {
    /// Matches a stored value exactly; anything else is kept as `Other`.
    fn from_stored(s: &str) -> Self {
        TagColor::palette()
            .into_iter()
            .find(|color| color.as_str() == s)
            .unwrap_or_else(|| TagColor::Other(s.to_string()))
    }
}

/// Lenient parsing for user input: case-insensitive, trimmed, accepts "grey".
impl FromStr for TagColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.trim().to_ascii_lowercase().as_str() {
            "red" => TagColor::Red,
            "orange" => TagColor::Orange,
            "yellow" => TagColor::Yellow,
            "green" => TagColor::Green,
            "blue" => TagColor::Blue,
            "purple" => TagColor::Purple,
            "gray" | "grey" => TagColor::Gray,
            _ => TagColor::Other(s.to_string()),
        };
        Ok(color)
    }
}

impl Serialize for TagColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TagColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TagColor::from_stored(&s))
    }
}

/// An sRGB color ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
