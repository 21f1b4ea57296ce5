pub mod config;
pub use self::config::{SpawnSchedulerConfig, SpawnSchedulerConfigBuilder};

pub mod spawn_scheduler;
pub use self::spawn_scheduler::SpawnScheduler;
