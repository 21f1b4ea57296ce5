use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::physic_engine::types::HexColor;

/// Palette de célébration (ors, rouges, bleus, verts, violets, roses).
pub const CELEBRATION_PALETTE: [HexColor; 18] = [
    HexColor::new(0xFF, 0xD7, 0x00),
    HexColor::new(0xFF, 0xF7, 0x00),
    HexColor::new(0xFF, 0xAA, 0x00),
    HexColor::new(0xFF, 0x17, 0x44),
    HexColor::new(0xFF, 0x00, 0x55),
    HexColor::new(0xFF, 0x6E, 0x40),
    HexColor::new(0x00, 0xE5, 0xFF),
    HexColor::new(0x00, 0xBC, 0xD4),
    HexColor::new(0x21, 0x96, 0xF3),
    HexColor::new(0x76, 0xFF, 0x03),
    HexColor::new(0x00, 0xE6, 0x76),
    HexColor::new(0x69, 0xF0, 0xAE),
    HexColor::new(0xE0, 0x40, 0xFB),
    HexColor::new(0xD5, 0x00, 0xF9),
    HexColor::new(0xEA, 0x80, 0xFC),
    HexColor::new(0xFF, 0x40, 0x81),
    HexColor::new(0xF5, 0x00, 0x57),
    HexColor::new(0xFF, 0x80, 0xAB),
];

/// Palette des fusées "cœur" : roses, rouges, magentas.
pub const HEART_PALETTE: [HexColor; 6] = [
    HexColor::new(0xFF, 0x14, 0x93),
    HexColor::new(0xFF, 0x69, 0xB4),
    HexColor::new(0xFF, 0x17, 0x44),
    HexColor::new(0xFF, 0x00, 0x55),
    HexColor::new(0xFF, 0x40, 0x81),
    HexColor::new(0xF5, 0x00, 0x57),
];

/// Paramètres physiques du moteur. Les unités sont des pixels par tick
/// (un tick = une frame d'affichage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    pub gravity: f32,
    pub friction: f32,

    pub max_active_rockets: usize,
    pub rocket_trail_len: usize,
    pub particle_trail_len: usize,

    /// Décélération maximale appliquée à `vy` quand la fusée touche sa cible.
    pub deceleration_max: f32,
    /// Fraction de la hauteur sur laquelle la décélération monte en puissance.
    pub deceleration_span: f32,

    pub heart_probability: f32,

    /// Zone de lancement horizontale, en fraction de la largeur.
    pub launch_x_range: Range<f32>,
    /// Altitude cible, en fraction de la hauteur.
    pub target_y_range: Range<f32>,
    pub launch_vx_range: Range<f32>,
    /// Vitesse ascensionnelle (valeur absolue, appliquée vers le haut).
    pub launch_speed_range: Range<f32>,

    pub particles_per_explosion: Range<usize>,
    pub particle_decay_range: Range<f32>,
    pub particle_size_range: Range<f32>,

    pub palette: Vec<HexColor>,
    pub heart_palette: Vec<HexColor>,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            friction: 0.98,
            max_active_rockets: 20,
            rocket_trail_len: 8,
            particle_trail_len: 15,
            deceleration_max: 0.15,
            deceleration_span: 0.5,
            heart_probability: 0.33,
            launch_x_range: 0.2..0.8,
            target_y_range: 0.01..0.11,
            launch_vx_range: -1.0..1.0,
            launch_speed_range: 18.6..22.5,
            particles_per_explosion: 30..50,
            particle_decay_range: 0.015..0.035,
            particle_size_range: 1.5..3.5,
            palette: CELEBRATION_PALETTE.to_vec(),
            heart_palette: HEART_PALETTE.to_vec(),
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Charge la config, ou retombe sur les valeurs par défaut.
    pub fn load_or_default(path: &str) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("⚠️ Physic config '{}' non chargée ({}), valeurs par défaut", path, e);
            Self::default()
        })
    }
}
