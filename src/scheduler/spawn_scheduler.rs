use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::physic_engine::PhysicEngine;
use crate::scheduler::config::SpawnSchedulerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SpawnEvent {
    /// Vérification périodique du nombre de fusées actives.
    Check,
    /// Lancement différé d'une salve, valable pour une session donnée.
    Launch { session: u64 },
}

/// File d'événements datés : (échéance, numéro d'ordre, événement).
/// Le numéro d'ordre départage les échéances identiques (FIFO).
type EventQueue = BinaryHeap<Reverse<(Duration, u64, SpawnEvent)>>;

/// Planificateur des lancements de fusées.
///
/// Mono-thread : l'hôte appelle `tick(now, engine)` avec le temps écoulé
/// depuis une origine arbitraire, et tous les événements échus sont traités
/// dans l'ordre. Aucun timer système n'est utilisé.
///
/// Le plafond de fusées actives est lu dans la config du moteur
/// (`PhysicConfig::max_active_rockets`).
///
/// Un `stop()` retire la vérification périodique mais laisse les lancements
/// déjà planifiés dans la file : ils deviennent des no-op à leur échéance
/// (session périmée), y compris après un nouveau `start()`.
#[derive(Debug)]
pub struct SpawnScheduler {
    config: SpawnSchedulerConfig,
    queue: EventQueue,
    seq: u64,
    session: u64,
    active: bool,
    rng: StdRng,
}

impl SpawnScheduler {
    pub fn new(config: SpawnSchedulerConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: SpawnSchedulerConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SpawnSchedulerConfig, rng: StdRng) -> Self {
        Self {
            config,
            queue: BinaryHeap::new(),
            seq: 0,
            session: 0,
            active: false,
            rng,
        }
    }

    pub fn config(&self) -> &SpawnSchedulerConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active la vérification périodique. Retourne `false` (sans rien
    /// planifier) si le planificateur tourne déjà.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.active {
            debug!("Spawn scheduler already active, start ignored");
            return false;
        }
        self.active = true;
        self.session += 1;
        self.schedule(now + self.config.check_interval(), SpawnEvent::Check);
        info!("🎆 Spawn scheduler started (session {})", self.session);
        true
    }

    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.queue
            .retain(|Reverse((_, _, event))| !matches!(event, SpawnEvent::Check));
        info!(
            "🛑 Spawn scheduler stopped ({} launch(es) left to expire)",
            self.queue.len()
        );
    }

    /// Lancements encore attendus pour la session courante.
    pub fn pending_launches(&self) -> usize {
        if !self.active {
            return 0;
        }
        self.queue
            .iter()
            .filter(|Reverse((_, _, event))| {
                matches!(event, SpawnEvent::Launch { session } if *session == self.session)
            })
            .count()
    }

    /// Traite tous les événements échus à `now`. Retourne le nombre de
    /// fusées effectivement lancées.
    pub fn tick<P: PhysicEngine + ?Sized>(&mut self, now: Duration, engine: &mut P) -> usize {
        let mut launched = 0;

        while let Some(Reverse((due, _, event))) = self.queue.peek().copied() {
            if due > now {
                break;
            }
            self.queue.pop();

            match event {
                SpawnEvent::Check => self.on_check(due, engine),
                SpawnEvent::Launch { session } => {
                    if self.on_launch(session, engine) {
                        launched += 1;
                    }
                }
            }
        }

        launched
    }

    fn on_check<P: PhysicEngine + ?Sized>(&mut self, due: Duration, engine: &P) {
        let max = engine.get_config().max_active_rockets;
        let active = engine.active_rockets();

        if active < max {
            let burst = self.burst_size().min(max - active);
            let stagger = self.config.launch_stagger();
            for i in 0..burst {
                self.schedule(
                    due + stagger * i as u32,
                    SpawnEvent::Launch {
                        session: self.session,
                    },
                );
            }
            debug!(
                "Spawn check at {:?}: {} active, {} launch(es) planned",
                due, active, burst
            );
        }

        self.schedule(due + self.config.check_interval(), SpawnEvent::Check);
    }

    fn on_launch<P: PhysicEngine + ?Sized>(&mut self, session: u64, engine: &mut P) -> bool {
        if !self.active || session != self.session {
            debug!("Stale launch (session {}) ignored", session);
            return false;
        }
        if engine.active_rockets() >= engine.get_config().max_active_rockets {
            return false;
        }
        engine.launch_rocket();
        true
    }

    fn burst_size(&mut self) -> usize {
        let (min, max) = (self.config.burst_min, self.config.burst_max);
        if min >= max {
            min
        } else {
            self.rng.random_range(min..=max)
        }
    }

    fn schedule(&mut self, due: Duration, event: SpawnEvent) {
        self.seq += 1;
        self.queue.push(Reverse((due, self.seq, event)));
    }
}
