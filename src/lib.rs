pub mod simulator;
pub use simulator::{ShowControl, ShowSignal, Simulator};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
// Spawn scheduler
pub mod scheduler;
pub use scheduler::SpawnScheduler;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
