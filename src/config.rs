use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tools::ToolMode;

pub const DEFAULT_PEN_WIDTH: f32 = 3.0;
pub const DEFAULT_ERASER_HALF_EXTENT: f32 = 20.0;

/// User-adjustable canvas settings.
///
/// Only these settings are persisted between sessions; strokes never are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasConfig {
    pub pen_color: Color32,
    pub pen_width: f32,
    /// Half the side of the square eraser hit region
    pub eraser_half_extent: f32,
    pub background: Color32,
    pub initial_tool: ToolMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pen_color: Color32::BLACK,
            pen_width: DEFAULT_PEN_WIDTH,
            eraser_half_extent: DEFAULT_ERASER_HALF_EXTENT,
            background: Color32::WHITE,
            initial_tool: ToolMode::Pen,
        }
    }
}

impl CanvasConfig {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("pen_width", self.pen_width)?;
        check_positive("eraser_half_extent", self.eraser_half_extent)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert_eq!(config.pen_color, Color32::BLACK);
        assert_eq!(config.pen_width, 3.0);
        assert_eq!(config.eraser_half_extent, 20.0);
        assert_eq!(config.initial_tool, ToolMode::Pen);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CanvasConfig::from_json_str(r#"{ "pen_width": 7.5 }"#).unwrap();
        assert_eq!(config.pen_width, 7.5);
        assert_eq!(config.eraser_half_extent, DEFAULT_ERASER_HALF_EXTENT);
    }

    #[test]
    fn test_rejects_non_positive_extent() {
        let err = CanvasConfig::from_json_str(r#"{ "eraser_half_extent": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "eraser_half_extent", .. }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            CanvasConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_survives_a_save_and_load() {
        let config = CanvasConfig {
            pen_color: Color32::from_rgb(10, 20, 30),
            initial_tool: ToolMode::Erase,
            ..Default::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(CanvasConfig::from_json_str(&json).unwrap(), config);
    }
}
