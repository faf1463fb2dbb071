use std::path::Path;

use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::shape::ShapeStyle;
use crate::state::Board;

/// Environment variable naming a JSON file with a [`BoardConfig`]
pub const CONFIG_ENV_VAR: &str = "WHITEBOARD_CONFIG";

/// User-tunable defaults of the whiteboard.
///
/// Colors are hex strings (`#RRGGBB` or `#RRGGBBAA`). Missing fields take
/// their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Fill of new shapes until the user picks another color
    pub default_fill: String,
    /// Extent of a shape created by a click without dragging
    pub default_size: f32,
    pub stroke_color: String,
    pub stroke_width: f32,
    pub background: String,
    pub export_file_name: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_fill: "#ff0000".to_owned(),
            default_size: 20.0,
            stroke_color: "#000000".to_owned(),
            stroke_width: 2.0,
            background: "#ffffff".to_owned(),
            export_file_name: "image.png".to_owned(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use the defaults.
    ///
    /// A broken config file is logged and replaced by the defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded board config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.fill_color()?;
        self.stroke()?;
        self.background_color()?;
        if !(self.default_size.is_finite() && self.default_size >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "default_size",
                reason: format!("{} is not a non-negative number", self.default_size),
            });
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export_file_name",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    pub fn fill_color(&self) -> ConfigResult<Color32> {
        parse_color(&self.default_fill)
    }

    pub fn background_color(&self) -> ConfigResult<Color32> {
        parse_color(&self.background)
    }

    pub fn stroke(&self) -> ConfigResult<Stroke> {
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "stroke_width",
                reason: format!("{} is not a non-negative number", self.stroke_width),
            });
        }
        Ok(Stroke::new(self.stroke_width, parse_color(&self.stroke_color)?))
    }

    pub fn shape_style(&self) -> ConfigResult<ShapeStyle> {
        Ok(ShapeStyle {
            stroke: self.stroke()?,
        })
    }

    /// An empty board using this config's fill and default size
    pub fn new_board(&self) -> ConfigResult<Board> {
        Ok(Board::new(self.fill_color()?, self.default_size))
    }
}

pub(crate) fn parse_color(hex: &str) -> ConfigResult<Color32> {
    Color32::from_hex(hex.trim()).map_err(|_| ConfigError::InvalidColor(hex.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fill_color().unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(config.stroke().unwrap(), Stroke::new(2.0, Color32::BLACK));
        assert_eq!(config.background_color().unwrap(), Color32::WHITE);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = BoardConfig::from_json_str(r##"{ "default_fill": "#00ff00" }"##).unwrap();
        assert_eq!(config.fill_color().unwrap(), Color32::from_rgb(0, 255, 0));
        assert_eq!(config.default_size, 20.0);
        assert_eq!(config.export_file_name, "image.png");
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = BoardConfig::from_json_str(r#"{ "stroke_color": "black" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(c) if c == "black"));
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let err = BoardConfig::from_json_str(r#"{ "default_size": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "default_size", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = BoardConfig::from_json_str("{ default_fill").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
