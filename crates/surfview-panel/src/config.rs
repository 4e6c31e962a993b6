use serde::{Deserialize, Serialize};

/// Construction-time tuning for a [`SurferPanel`](crate::SurferPanel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Logical render width in pixels.
    pub render_width: u32,
    /// Logical render height in pixels.
    pub render_height: u32,
    /// Degrees of rotation produced by a drag across the full component.
    pub full_drag_degrees: f64,
    /// Follow the component size instead of the fixed render size.
    pub auto_resize: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            render_width: 240,
            render_height: 240,
            full_drag_degrees: 180.0,
            auto_resize: false,
        }
    }
}

impl PanelConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.render_width, 240);
        assert_eq!(config.render_height, 240);
        assert!((config.full_drag_degrees - 180.0).abs() < 1e-12);
        assert!(!config.auto_resize);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = PanelConfig::default();
        config.render_width = 800;
        config.auto_resize = true;

        let json = config.to_json().unwrap();
        let back = PanelConfig::from_json(&json).unwrap();
        assert_eq!(back.render_width, 800);
        assert!(back.auto_resize);
    }
}
