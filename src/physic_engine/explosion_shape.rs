//! Formes d'explosion des feux d'artifice.
//!
//! Une forme décide, pour la particule `i` d'une gerbe de `n`, de l'angle et
//! de la vitesse initiale :
//! - `Circle` : angles régulièrement espacés, vitesse dans [3, 6)
//! - `Ring` : mêmes angles, bande de vitesse serrée dans [5, 6)
//! - `Heart` : courbe paramétrique du cœur, vitesse = 3 × distance à l'origine
//! - `Star` : 10 branches, alternance pointes longues / courtes
//! - `RandomBurst` : angle et vitesse uniformes

use rand::Rng;
use std::f32::consts::TAU;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::types::{HexColor, Vec2};

/// Nombre de tirages possibles lors du choix aléatoire d'une forme.
/// Les indices au-delà de `Star` retombent sur `RandomBurst`.
pub const SHAPE_DRAWS: u8 = 6;

const STAR_POINTS: usize = 10;
const HEART_SPEED_SCALE: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplosionShape {
    Circle,
    Ring,
    Heart,
    Star,
    RandomBurst,
}

impl ExplosionShape {
    /// Forme associée à un tirage dans `0..SHAPE_DRAWS`.
    pub fn from_draw(draw: u8) -> Self {
        match draw {
            0 => ExplosionShape::Circle,
            1 => ExplosionShape::Ring,
            2 => ExplosionShape::Heart,
            3 => ExplosionShape::Star,
            _ => ExplosionShape::RandomBurst,
        }
    }

    /// Tire une forme uniformément, sauf si `force_heart` impose le cœur.
    pub fn pick(rng: &mut impl Rng, force_heart: bool) -> Self {
        if force_heart {
            ExplosionShape::Heart
        } else {
            Self::from_draw(rng.random_range(0..SHAPE_DRAWS))
        }
    }

    /// Angle (radians) et vitesse de la particule `index` parmi `count`.
    pub fn direction(&self, index: usize, count: usize, rng: &mut impl Rng) -> (f32, f32) {
        let even_angle = TAU * index as f32 / count.max(1) as f32;
        match self {
            ExplosionShape::Circle => (even_angle, rng.random_range(3.0..6.0)),
            ExplosionShape::Ring => (even_angle, rng.random_range(5.0..6.0)),
            ExplosionShape::Heart => heart_direction(index, count),
            ExplosionShape::Star => {
                let slot = index % STAR_POINTS;
                let angle = TAU * slot as f32 / STAR_POINTS as f32;
                let reach = if slot % 2 == 0 { 5.0 } else { 2.0 };
                (angle, reach + rng.random::<f32>())
            }
            ExplosionShape::RandomBurst => {
                (rng.random_range(0.0..TAU), rng.random_range(2.0..6.0))
            }
        }
    }
}

/// Point de la courbe du cœur pour l'angle `theta`, pointe vers le haut
/// (axe y du canvas orienté vers le bas).
pub fn heart_point(theta: f32) -> Vec2 {
    let x = theta.cos();
    let y = theta.sin() + x.abs() * ((8.0 - x.abs()) / 50.0).sqrt();
    Vec2::new(x, -y)
}

/// Direction déterministe de la particule `index` d'une gerbe en cœur.
pub fn heart_direction(index: usize, count: usize) -> (f32, f32) {
    let theta = TAU * index as f32 / count.max(1) as f32;
    let point = heart_point(theta);
    (point.y.atan2(point.x), point.length() * HEART_SPEED_SCALE)
}

/// Gerbe générée par une explosion.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub shape: ExplosionShape,
    pub particles: Vec<Particle>,
}

/// Génère les particules d'une explosion à `origin`.
pub fn generate_explosion(
    rng: &mut impl Rng,
    cfg: &PhysicConfig,
    origin: Vec2,
    color: HexColor,
    force_heart: bool,
) -> Explosion {
    let shape = ExplosionShape::pick(rng, force_heart);
    let count = particle_count(rng, cfg);

    let particles = (0..count)
        .map(|i| {
            let (angle, speed) = shape.direction(i, count, rng);
            Particle::new(
                origin,
                Vec2::from_angle(angle) * speed,
                color,
                sample(rng, &cfg.particle_decay_range),
                sample(rng, &cfg.particle_size_range),
                cfg.particle_trail_len,
            )
        })
        .collect();

    Explosion { shape, particles }
}

fn particle_count(rng: &mut impl Rng, cfg: &PhysicConfig) -> usize {
    let range = &cfg.particles_per_explosion;
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range.clone())
    }
}

/// Tirage uniforme dans `[start, end)`, tolérant une plage vide ou inversée.
pub(crate) fn sample(rng: &mut impl Rng, range: &std::ops::Range<f32>) -> f32 {
    if range.start < range.end {
        rng.random_range(range.clone())
    } else {
        range.start
    }
}
