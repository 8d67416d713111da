//! RGBA colors as written in configuration and on the command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rrggbb, #rrggbbaa or a color name")]
pub struct ColorParseError(pub String);

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Look up one of the supported color names.
    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "transparent" | "none" => Color::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ColorParseError(s.to_string());

        let Some(hex) = trimmed.strip_prefix('#') else {
            return Color::named(&trimmed.to_lowercase()).ok_or_else(err);
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#a0d1f1".parse::<Color>().unwrap(), Color::rgb(160, 209, 241));
        assert_eq!("#A0D1F1".parse::<Color>().unwrap(), Color::rgb(160, 209, 241));
        assert_eq!(
            "#00000080".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 128)
        );
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("gray".parse::<Color>().unwrap(), Color::rgb(128, 128, 128));
        assert_eq!("Grey".parse::<Color>().unwrap(), Color::rgb(128, 128, 128));
        assert_eq!(" black ".parse::<Color>().unwrap(), Color::rgb(0, 0, 0));
        assert_eq!("transparent".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", "#", "#abc", "#gggggg", "#12345", "chartreuse-ish", "#a0d1f1ff00"] {
            assert!(bad.parse::<Color>().is_err(), "'{}' should fail", bad);
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_hex() {
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(160, 209, 241).to_string(), "#a0d1f1");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_error_message() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }
}
