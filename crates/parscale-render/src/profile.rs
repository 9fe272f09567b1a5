//! Render profile (serializable).

use serde::{Deserialize, Serialize};

use crate::format::ImageFormat;

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Default width of a single-panel figure, in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default height of a single-panel figure, in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Smallest accepted panel dimension.
pub const MIN_DIMENSION: u32 = 200;
/// Largest accepted panel dimension.
pub const MAX_DIMENSION: u32 = 8000;

/// Saved rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Width of one panel, in pixels.
    pub width: u32,
    /// Height of one panel, in pixels.
    pub height: u32,
    /// Image format.
    pub format: ImageFormat,
    /// Print values next to data points.
    pub annotate: bool,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            format: ImageFormat::Svg,
            annotate: true,
        }
    }
}

impl RenderProfile {
    /// Check if this profile is compatible with the current version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Validate that the dimensions are within reasonable bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_DIMENSION..=MAX_DIMENSION).contains(&self.width)
            && (MIN_DIMENSION..=MAX_DIMENSION).contains(&self.height)
    }

    /// Pixel size of a figure with `rows` x `cols` panels.
    #[must_use]
    pub fn figure_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        let scale = |dim: u32, n: usize| dim.saturating_mul(u32::try_from(n.max(1)).unwrap_or(u32::MAX));
        (scale(self.width, cols), scale(self.height, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization() {
        let profile = RenderProfile::default();
        let json = serde_json::to_string_pretty(&profile).unwrap();
        assert!(json.contains("\"format\": \"svg\""));
        let deserialized: RenderProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn profile_compatibility() {
        let profile = RenderProfile::default();
        assert!(profile.is_compatible());

        let old = RenderProfile {
            version: 0,
            ..RenderProfile::default()
        };
        assert!(!old.is_compatible());
    }

    #[test]
    fn profile_validation() {
        assert!(RenderProfile::default().is_valid());

        let tiny = RenderProfile {
            width: 10,
            ..RenderProfile::default()
        };
        assert!(!tiny.is_valid());

        let huge = RenderProfile {
            height: 100_000,
            ..RenderProfile::default()
        };
        assert!(!huge.is_valid());
    }

    #[test]
    fn figure_size_scales_with_grid() {
        let profile = RenderProfile::default();
        assert_eq!(profile.figure_size(1, 1), (1000, 600));
        assert_eq!(profile.figure_size(2, 2), (2000, 1200));
        assert_eq!(profile.figure_size(1, 3), (3000, 600));
        assert_eq!(profile.figure_size(0, 0), (1000, 600));
    }
}
