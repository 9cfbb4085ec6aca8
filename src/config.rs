//! Configuration persistence for the picker's look and sizing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LineColor {
    pub const BLACK: LineColor = LineColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Convert to RGBA bytes (0-255), always opaque
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Resampling used when scaling layers into the thumbnail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    Nearest,
    #[default]
    Bilinear,
}

impl From<ThumbnailQuality> for tiny_skia::FilterQuality {
    fn from(q: ThumbnailQuality) -> Self {
        match q {
            ThumbnailQuality::Nearest => tiny_skia::FilterQuality::Nearest,
            ThumbnailQuality::Bilinear => tiny_skia::FilterQuality::Bilinear,
        }
    }
}

/// Picker configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Edge length of the square size the widget requests from the layout
    pub preferred_size: u32,
    /// Color of the inset bounding rectangle
    pub outline_color: LineColor,
    /// Color of the crosshair lines
    pub crosshair_color: LineColor,
    /// Color of the point marker
    pub marker_color: LineColor,
    /// Stroke width of outline and crosshair
    pub line_width: f32,
    /// Diameter of the point marker
    pub marker_diameter: f32,
    /// Stroke width of the point marker
    pub marker_stroke_width: f32,
    #[serde(default)]
    pub thumbnail_quality: ThumbnailQuality,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            preferred_size: 50,
            outline_color: LineColor::BLACK,
            crosshair_color: LineColor::BLACK,
            marker_color: LineColor::BLACK,
            line_width: 1.0,
            marker_diameter: 2.0,
            marker_stroke_width: 2.0,
            thumbnail_quality: ThumbnailQuality::Bilinear,
        }
    }
}

impl PickerConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "pointpicker";

    /// Get the path to the config file
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("No user config directory")?;
        Ok(dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                log::warn!("Could not locate config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Load from `path`, reporting read and parse errors
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = PickerConfig {
            preferred_size: 80,
            crosshair_color: LineColor {
                r: 1.0,
                g: 0.0,
                b: 0.0,
            },
            thumbnail_quality: ThumbnailQuality::Nearest,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(PickerConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PickerConfig::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(PickerConfig::load_from(&path).is_err());
        assert_eq!(PickerConfig::load_or_default(&path), PickerConfig::default());
    }

    #[test]
    fn test_quality_defaults_when_absent() {
        let json = r#"{
            "preferred_size": 50,
            "outline_color": { "r": 0.0, "g": 0.0, "b": 0.0 },
            "crosshair_color": { "r": 0.0, "g": 0.0, "b": 0.0 },
            "marker_color": { "r": 0.0, "g": 0.0, "b": 0.0 },
            "line_width": 1.0,
            "marker_diameter": 2.0,
            "marker_stroke_width": 2.0
        }"#;
        let config: PickerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.thumbnail_quality, ThumbnailQuality::Bilinear);
    }

    #[test]
    fn test_line_color_to_rgba() {
        let color = LineColor {
            r: 1.0,
            g: 0.5,
            b: 2.0,
        };
        assert_eq!(color.to_rgba_u8(), [255, 128, 255, 255]);
    }
}
