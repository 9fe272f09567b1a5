//! Output image formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use parscale_report::interfaces::RenderError;

/// Image file format written by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Whether this build can write the format.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            Self::Svg => true,
            Self::Png => cfg!(feature = "png"),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert!(matches!(
            "gif".parse::<ImageFormat>(),
            Err(RenderError::UnsupportedFormat(f)) if f == "gif"
        ));
    }

    #[test]
    fn display_matches_extension() {
        assert_eq!(ImageFormat::Svg.to_string(), "svg");
        assert_eq!(ImageFormat::Png.extension(), "png");
    }

    #[test]
    fn svg_always_available() {
        assert!(ImageFormat::Svg.is_available());
        assert_eq!(ImageFormat::Png.is_available(), cfg!(feature = "png"));
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&ImageFormat::Png).unwrap(), "\"png\"");
        let f: ImageFormat = serde_json::from_str("\"svg\"").unwrap();
        assert_eq!(f, ImageFormat::Svg);
    }
}
