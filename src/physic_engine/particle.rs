use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::trail::Trail;
use crate::physic_engine::types::{HexColor, Vec2};

/// Point de traînée d'une particule : position et opacité au moment du passage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Étincelle produite par une explosion.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: HexColor,
    /// Opacité, de 1.0 vers 0.0, jamais croissante.
    pub alpha: f32,
    pub decay: f32,
    pub size: f32,
    pub trail: Trail<TrailPoint>,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: HexColor, decay: f32, size: f32, trail_len: usize) -> Self {
        Self {
            pos,
            vel,
            color,
            alpha: 1.0,
            decay,
            size,
            trail: Trail::new(trail_len),
        }
    }

    /// Avance la particule d'un tick. Retourne `false` quand elle est éteinte
    /// (alpha <= 0) et doit être retirée.
    pub fn update(&mut self, cfg: &PhysicConfig) -> bool {
        self.pos += self.vel;

        self.vel *= cfg.friction;
        self.vel.y += cfg.gravity;

        self.trail.push(TrailPoint {
            pos: self.pos,
            alpha: self.alpha,
        });

        self.alpha -= self.decay;
        self.is_alive()
    }

    #[inline(always)]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark(decay: f32) -> Particle {
        Particle::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(2.0, -3.0),
            HexColor::WHITE,
            decay,
            2.0,
            15,
        )
    }

    #[test]
    fn test_update_integrates_then_damps() {
        let cfg = PhysicConfig::default();
        let mut p = spark(0.02);
        p.update(&cfg);

        assert!((p.pos.x - 102.0).abs() < 1e-5);
        assert!((p.pos.y - 97.0).abs() < 1e-5);
        assert!((p.vel.x - 2.0 * 0.98).abs() < 1e-5);
        assert!((p.vel.y - (-3.0 * 0.98 + 0.05)).abs() < 1e-5);
        // La traînée enregistre l'alpha d'avant la décroissance
        assert_eq!(p.trail.newest().map(|t| t.alpha), Some(1.0));
        assert!((p.alpha - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_particle_dies_on_the_tick_alpha_reaches_zero() {
        let cfg = PhysicConfig::default();
        let mut p = spark(0.25);
        let mut ticks = 0;
        while p.update(&cfg) {
            ticks += 1;
            assert!(p.alpha > 0.0);
        }
        assert_eq!(ticks, 3);
        assert!(p.alpha <= 0.0);
    }

    #[test]
    fn test_trail_capped_at_configured_length() {
        let cfg = PhysicConfig::default();
        let mut p = spark(0.001);
        for _ in 0..40 {
            p.update(&cfg);
        }
        assert_eq!(p.trail.len(), 15);
    }
}
