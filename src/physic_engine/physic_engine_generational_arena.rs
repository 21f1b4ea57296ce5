use generational_arena::{Arena, Index};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::{
    config::PhysicConfig,
    explosion_shape::generate_explosion,
    particle::Particle,
    rocket::{Rocket, RocketStatus},
    types::{HexColor, TriggeredExplosion, UpdateResult, Vec2, Viewport},
    PhysicEngine,
};

/// Moteur de feux d'artifice.
///
/// Fusées et particules vivent dans deux `Arena` : un slot retiré devient une
/// tombe, les `Index` des autres entités restent valides pendant le tick.
/// Les vecteurs d'indices conservent l'ordre d'insertion pour l'itération.
#[derive(Debug)]
pub struct PhysicEngineFireworks {
    rockets: Arena<Rocket>,
    rocket_indices: Vec<Index>,
    particles: Arena<Particle>,
    particle_indices: Vec<Index>,
    triggered_explosions: Vec<TriggeredExplosion>,
    next_rocket_id: u64,

    viewport: Viewport,
    rng: StdRng,
    config: PhysicConfig,
}

impl PhysicEngineFireworks {
    pub fn new(config: &PhysicConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_os_rng())
    }

    /// Moteur reproductible, pour les tests et les benchs.
    pub fn with_seed(config: &PhysicConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PhysicConfig, viewport: Viewport, rng: StdRng) -> Self {
        let max_particles = config.max_active_rockets * config.particles_per_explosion.end;
        Self {
            rockets: Arena::with_capacity(config.max_active_rockets),
            rocket_indices: Vec::with_capacity(config.max_active_rockets),
            particles: Arena::with_capacity(max_particles),
            particle_indices: Vec::with_capacity(max_particles),
            triggered_explosions: Vec::with_capacity(config.max_active_rockets),
            next_rocket_id: 0,
            viewport,
            rng,
            config: config.clone(),
        }
    }

    fn insert_rocket_entity(&mut self, mut rocket: Rocket) -> u64 {
        rocket.id = self.next_rocket_id;
        self.next_rocket_id += 1;
        let id = rocket.id;
        let idx = self.rockets.insert(rocket);
        self.rocket_indices.push(idx);
        id
    }

    fn insert_particles(&mut self, particles: Vec<Particle>) {
        for p in particles {
            let idx = self.particles.insert(p);
            self.particle_indices.push(idx);
        }
    }

    fn update_rockets(&mut self) {
        let Self {
            rockets,
            rocket_indices,
            particles,
            particle_indices,
            triggered_explosions,
            viewport,
            rng,
            config,
            ..
        } = self;

        rocket_indices.retain(|&idx| {
            let Some(rocket) = rockets.get_mut(idx) else {
                return false;
            };

            if rocket.update(config, viewport.height) == RocketStatus::Ascending {
                return true;
            }

            if !rocket.exploded {
                let explosion =
                    generate_explosion(rng, config, rocket.pos, rocket.color, rocket.heart);
                rocket.exploded = true;

                debug!(
                    "💥 Rocket {} burst at ({:.1}, {:.1}): {:?} x{}",
                    rocket.id,
                    rocket.pos.x,
                    rocket.pos.y,
                    explosion.shape,
                    explosion.particles.len()
                );
                triggered_explosions.push(TriggeredExplosion {
                    pos: rocket.pos,
                    color: rocket.color,
                    shape: explosion.shape,
                    particle_count: explosion.particles.len(),
                });

                for p in explosion.particles {
                    particle_indices.push(particles.insert(p));
                }
            }

            rockets.remove(idx);
            false
        });
    }

    fn update_particles(&mut self) -> usize {
        let Self {
            particles,
            particle_indices,
            config,
            ..
        } = self;

        let before = particle_indices.len();
        particle_indices.retain(|&idx| {
            let alive = particles.get_mut(idx).is_some_and(|p| p.update(config));
            if !alive {
                particles.remove(idx);
            }
            alive
        });
        before - particle_indices.len()
    }
}

impl PhysicEngine for PhysicEngineFireworks {
    fn set_viewport(&mut self, viewport: Viewport) {
        debug!(
            "Viewport set to {} x {}",
            viewport.width, viewport.height
        );
        self.viewport = viewport;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn update(&mut self) -> UpdateResult<'_> {
        self.triggered_explosions.clear();

        // Les fusées d'abord : leurs gerbes sont mises à jour dans ce même tick.
        self.update_rockets();
        let expired_particles = self.update_particles();

        UpdateResult {
            triggered_explosions: &self.triggered_explosions,
            expired_particles,
        }
    }

    fn launch_rocket(&mut self) {
        let rocket = Rocket::launch(&mut self.rng, &self.config, self.viewport);
        let (pos, target_y, heart) = (rocket.pos, rocket.target_y, rocket.heart);
        let id = self.insert_rocket_entity(rocket);
        debug!(
            "🚀 Rocket {} launched at ({:.1}, {:.1}) -> target y {:.1}{}",
            id,
            pos.x,
            pos.y,
            target_y,
            if heart { " ❤" } else { "" }
        );
    }

    fn spawn_explosion(&mut self, origin: Vec2, color: HexColor, force_heart: bool) {
        let explosion = generate_explosion(&mut self.rng, &self.config, origin, color, force_heart);
        self.insert_particles(explosion.particles);
    }

    fn active_rockets(&self) -> usize {
        self.rocket_indices
            .iter()
            .filter(|&&idx| self.rockets.get(idx).is_some_and(|r| !r.exploded))
            .count()
    }

    fn active_particles(&self) -> usize {
        self.particle_indices.len()
    }

    fn clear(&mut self) {
        self.rockets.clear();
        self.rocket_indices.clear();
        self.particles.clear();
        self.particle_indices.clear();
        self.triggered_explosions.clear();
        debug!("PhysicEngineFireworks cleared.");
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn iter_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(
            self.rocket_indices
                .iter()
                .filter_map(move |&idx| self.rockets.get(idx)),
        )
    }

    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(
            self.particle_indices
                .iter()
                .filter_map(move |&idx| self.particles.get(idx)),
        )
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn insert_rocket(&mut self, rocket: Rocket);
    fn insert_particle(&mut self, particle: Particle);
    fn rockets_count(&self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn insert_rocket(&mut self, rocket: Rocket) {
        self.insert_rocket_entity(rocket);
    }

    fn insert_particle(&mut self, particle: Particle) {
        self.insert_particles(vec![particle]);
    }

    fn rockets_count(&self) -> usize {
        self.rocket_indices.len()
    }
}
