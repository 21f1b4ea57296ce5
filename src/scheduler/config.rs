// =========================
// Spawn Scheduler Configuration
// =========================

use derive_builder::Builder;
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadence des lancements de fusées.
///
/// Construction via le builder :
///
/// ```
/// use fireworks_canvas::scheduler::SpawnSchedulerConfigBuilder;
///
/// let config = SpawnSchedulerConfigBuilder::default()
///     .check_interval_ms(400)
///     .build()
///     .unwrap();
/// assert_eq!(config.launch_stagger_ms, 150);
/// ```
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
#[serde(default)]
pub struct SpawnSchedulerConfig {
    /// Période de vérification du nombre de fusées actives (ms)
    #[builder(default = "800")]
    pub check_interval_ms: u64,

    /// Écart entre deux lancements d'une même salve (ms)
    #[builder(default = "150")]
    pub launch_stagger_ms: u64,

    /// Taille minimale d'une salve
    #[builder(default = "2")]
    pub burst_min: usize,

    /// Taille maximale d'une salve (incluse)
    #[builder(default = "3")]
    pub burst_max: usize,
}

impl Default for SpawnSchedulerConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: 800,
            launch_stagger_ms: 150,
            burst_min: 2,
            burst_max: 3,
        }
    }
}

impl SpawnSchedulerConfig {
    /// Jamais nulle, pour que la boucle de rattrapage avance toujours.
    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms.max(1))
    }

    pub fn launch_stagger(&self) -> Duration {
        Duration::from_millis(self.launch_stagger_ms)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("⚠️ Scheduler config '{}' non chargée ({}), valeurs par défaut", path, e);
            Self::default()
        })
    }
}
