use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::physic_engine::explosion_shape::ExplosionShape;

pub use glam::Vec2;

// ------------------------
// HexColor
// ------------------------

/// Couleur `#RRGGBB` telle que la manipule le canvas.
///
/// Stockée en octets pour rester `Copy` et ordonnable (regroupement par couleur
/// au rendu), formatée en hexadécimal à la demande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const WHITE: HexColor = HexColor([0xff, 0xff, 0xff]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.0
    }

    /// Chaîne `#rrggbbaa` : la couleur suivie du suffixe d'opacité.
    pub fn with_alpha(&self, alpha: f32) -> String {
        format!("{}{}", self, alpha_suffix(alpha))
    }
}

/// Deux chiffres hexadécimaux (minuscules) de `floor(alpha * 255)`, alpha borné à [0, 1].
pub fn alpha_suffix(alpha: f32) -> String {
    let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    format!("{:02x}", (a * 255.0).floor() as u8)
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Couleur invalide '{}' (attendu #RRGGBB)", s);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| anyhow::anyhow!("Couleur invalide '{}': {}", s, e))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for HexColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

// ------------------------
// Viewport
// ------------------------

/// Dimensions de la surface de dessin, en pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ------------------------
// UpdateResult
// ------------------------

/// Explosion déclenchée pendant un tick (une par fusée arrivée à son apogée).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggeredExplosion {
    pub pos: Vec2,
    pub color: HexColor,
    pub shape: ExplosionShape,
    pub particle_count: usize,
}

pub struct UpdateResult<'a> {
    pub triggered_explosions: &'a [TriggeredExplosion],
    pub expired_particles: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parse_and_display() {
        let c: HexColor = "#FF1493".parse().unwrap();
        assert_eq!(c.rgb(), [0xff, 0x14, 0x93]);
        assert_eq!(c.to_string(), "#FF1493");

        let lower: HexColor = "ff69b4".parse().unwrap();
        assert_eq!(lower.to_string(), "#FF69B4");
    }

    #[test]
    fn test_hex_color_rejects_garbage() {
        assert!("#FFF".parse::<HexColor>().is_err());
        assert!("#GGGGGG".parse::<HexColor>().is_err());
        assert!("#FF14930".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_alpha_suffix() {
        assert_eq!(alpha_suffix(1.0), "ff");
        assert_eq!(alpha_suffix(0.0), "00");
        assert_eq!(alpha_suffix(0.5), "7f");
        assert_eq!(alpha_suffix(-0.2), "00");
        assert_eq!(alpha_suffix(3.0), "ff");
        assert_eq!(HexColor::WHITE.with_alpha(0.5), "#FFFFFF7f");
    }

    #[test]
    fn test_viewport_clamps_negative_sizes() {
        let v = Viewport::new(-10.0, 600.0);
        assert_eq!(v.width, 0.0);
        assert!(v.is_empty());
        assert!(!Viewport::new(800.0, 600.0).is_empty());
    }
}
