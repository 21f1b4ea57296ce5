use log::warn;
use serde::{Deserialize, Serialize};

use crate::physic_engine::HexColor;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Rayon du halo lumineux autour de chaque particule
    pub glow_blur: f32,
    pub rocket_line_width: f32,
    pub rocket_head_radius: f32,
    pub rocket_head_color: HexColor,
    /// Rayon d'un point de traînée : size * (base + gain * alpha)
    pub trail_size_base: f32,
    pub trail_size_gain: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            glow_blur: 40.0,
            rocket_line_width: 2.0,
            rocket_head_radius: 2.0,
            rocket_head_color: HexColor::WHITE,
            trail_size_base: 0.6,
            trail_size_gain: 0.4,
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("⚠️ Renderer config '{}' non chargée ({}), valeurs par défaut", path, e);
            Self::default()
        })
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
