use rand::seq::IndexedRandom;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::explosion_shape::sample;
use crate::physic_engine::trail::Trail;
use crate::physic_engine::types::{HexColor, Vec2, Viewport};

/// Représentation d’une fusée
#[derive(Debug, Clone)]
pub struct Rocket {
    /// ID attribué par le moteur à l'insertion (0 tant que la fusée est hors moteur)
    pub id: u64,

    pub pos: Vec2,
    pub vel: Vec2,
    /// Altitude (y du canvas) à laquelle la fusée explose
    pub target_y: f32,
    pub color: HexColor,
    pub trail: Trail<Vec2>,

    /// État de la fusée
    pub exploded: bool,
    pub heart: bool,
}

/// Issue d'un tick de fusée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketStatus {
    Ascending,
    /// Cible atteinte ou apogée dépassée : la fusée doit exploser puis disparaître.
    Burst,
}

impl Rocket {
    pub fn new(pos: Vec2, vel: Vec2, target_y: f32, color: HexColor, heart: bool, trail_len: usize) -> Self {
        Self {
            id: 0,
            pos,
            vel,
            target_y,
            color,
            trail: Trail::new(trail_len),
            exploded: false,
            heart,
        }
    }

    /// Tire une nouvelle fusée depuis le bas de la surface.
    pub fn launch(rng: &mut impl Rng, cfg: &PhysicConfig, viewport: Viewport) -> Self {
        let x = sample(rng, &cfg.launch_x_range) * viewport.width;
        let target_y = sample(rng, &cfg.target_y_range) * viewport.height;
        let heart = rng.random_bool(cfg.heart_probability.clamp(0.0, 1.0) as f64);

        let palette = if heart { &cfg.heart_palette } else { &cfg.palette };
        let color = palette.choose(rng).copied().unwrap_or(HexColor::WHITE);

        let vel = Vec2::new(
            sample(rng, &cfg.launch_vx_range),
            -sample(rng, &cfg.launch_speed_range),
        );

        Self::new(
            Vec2::new(x, viewport.height),
            vel,
            target_y,
            color,
            heart,
            cfg.rocket_trail_len,
        )
    }

    /// Met à jour la fusée pour un tick.
    ///
    /// La décélération est calculée sur la position d'avant le déplacement :
    /// nulle à mi-hauteur ou plus bas, `deceleration_max` sur la cible.
    pub fn update(&mut self, cfg: &PhysicConfig, surface_height: f32) -> RocketStatus {
        let span = surface_height * cfg.deceleration_span;
        let progress_ratio = if span > 0.0 {
            ((self.pos.y - self.target_y) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let deceleration = (1.0 - progress_ratio) * cfg.deceleration_max;

        self.pos += self.vel;
        self.vel.y += cfg.gravity;
        self.vel.y *= 1.0 - deceleration;

        self.trail.push(self.pos);

        if self.pos.y <= self.target_y || self.vel.y > 0.0 {
            RocketStatus::Burst
        } else {
            RocketStatus::Ascending
        }
    }
}
