pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{HexColor, TriggeredExplosion, UpdateResult, Vec2, Viewport};

pub mod trail;
pub use self::trail::Trail;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod explosion_shape;
pub use self::explosion_shape::ExplosionShape;

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_generational_arena;
pub use self::physic_engine_generational_arena::PhysicEngineFireworks;
