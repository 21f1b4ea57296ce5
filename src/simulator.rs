use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info};
use std::time::Duration;

use crate::log_metrics;
use crate::physic_engine::{PhysicEngine, Viewport};
use crate::profiler::Profiler;
use crate::renderer_engine::RendererEngine;
use crate::scheduler::SpawnScheduler;

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Signal de pilotage du spectacle, émis par le relais de jeu
/// (fin de partie, remise à zéro) ou par l'hôte (redimensionnement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowSignal {
    Start,
    Stop,
    Resize { width: u32, height: u32 },
}

/// Poignée clonable pour piloter un `Simulator` sans le posséder.
///
/// Les signaux sont appliqués au début de la frame suivante.
#[derive(Debug, Clone)]
pub struct ShowControl {
    sender: Sender<ShowSignal>,
}

impl ShowControl {
    pub fn start(&self) -> bool {
        self.send(ShowSignal::Start)
    }

    pub fn stop(&self) -> bool {
        self.send(ShowSignal::Stop)
    }

    pub fn resize(&self, width: u32, height: u32) -> bool {
        self.send(ShowSignal::Resize { width, height })
    }

    fn send(&self, signal: ShowSignal) -> bool {
        self.sender.send(signal).is_ok()
    }
}

/// Orchestrateur : planificateur de lancements, moteur physique et renderer
/// sur une même horloge, fournie par l'hôte à chaque frame.
///
/// Ordre d'une frame : signaux de contrôle, échéances du planificateur,
/// physique (fusées puis particules), puis rendu.
pub struct Simulator<P, R>
where
    P: PhysicEngine,
    R: RendererEngine,
{
    physic_engine: P,
    renderer_engine: R,
    scheduler: SpawnScheduler,

    control_tx: Sender<ShowSignal>,
    control_rx: Receiver<ShowSignal>,

    running: bool,
    now: Duration,
    frames: u64,

    profiler: Profiler,
    last_log: Duration,
}

impl<P, R> Simulator<P, R>
where
    P: PhysicEngine,
    R: RendererEngine,
{
    /// Le viewport du moteur est aligné sur la surface du renderer, si elle existe.
    pub fn new(mut physic_engine: P, renderer_engine: R, scheduler: SpawnScheduler) -> Self {
        if let Some((width, height)) = renderer_engine.size() {
            physic_engine.set_viewport(Viewport::new(width as f32, height as f32));
        }
        let (control_tx, control_rx) = unbounded();
        Self {
            physic_engine,
            renderer_engine,
            scheduler,
            control_tx,
            control_rx,
            running: false,
            now: Duration::ZERO,
            frames: 0,
            profiler: Profiler::new(200),
            last_log: Duration::ZERO,
        }
    }

    pub fn control_handle(&self) -> ShowControl {
        ShowControl {
            sender: self.control_tx.clone(),
        }
    }

    /// Démarre la boucle de frames et les lancements. Sans effet (retourne
    /// `false`) si le spectacle tourne déjà.
    pub fn start(&mut self) -> bool {
        if self.running {
            debug!("Show already running, start ignored");
            return false;
        }
        self.running = true;
        self.scheduler.start(self.now);
        info!("🎆 Fireworks show started at {:?}", self.now);
        true
    }

    /// Arrête tout et efface la surface, sans fondu.
    pub fn stop(&mut self) {
        let was_running = self.running;
        self.running = false;
        self.scheduler.stop();
        self.physic_engine.clear();
        self.renderer_engine.clear_surface();
        if was_running {
            info!("🛑 Fireworks show stopped after {} frame(s)", self.frames);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        info!("🖥️ Surface resized: {} x {}", width, height);
        self.renderer_engine.resize(width, height);
        self.physic_engine
            .set_viewport(Viewport::new(width as f32, height as f32));
    }

    pub fn is_active(&self) -> bool {
        self.running
    }

    /// Exécute une frame à l'instant `now` (temps écoulé depuis l'origine
    /// choisie par l'hôte). Retourne `false` si la boucle est arrêtée.
    pub fn step(&mut self, now: Duration) -> bool {
        self.now = now;
        self.apply_control_signals();

        if !self.running {
            return false;
        }

        let launched = self.scheduler.tick(now, &mut self.physic_engine);
        if launched > 0 {
            debug!("🚀 {} rocket(s) launched at {:?}", launched, now);
        }

        let physic_engine = &mut self.physic_engine;
        let update_result = self
            .profiler
            .profile_block("physic - update", || physic_engine.update());
        for expl in update_result.triggered_explosions {
            debug!(
                "💥 Explosion triggered: {:?} at ({:.1}, {:.1}), {} particles",
                expl.shape, expl.pos.x, expl.pos.y, expl.particle_count
            );
        }

        let (physic_engine, renderer_engine) = (&self.physic_engine, &mut self.renderer_engine);
        let drawn = self
            .profiler
            .profile_block("render frame", || renderer_engine.render_frame(physic_engine));
        self.profiler.record_metric("total particles drawn", drawn);
        self.profiler
            .record_metric("active rockets", self.physic_engine.active_rockets());

        self.frames += 1;

        if now.saturating_sub(self.last_log) >= LOG_INTERVAL {
            info!("Frame {} at {:?}", self.frames, now);
            log_metrics!(&self.profiler);
            self.profiler.reset();
            self.last_log = now;
        }

        true
    }

    /// Fait avancer une horloge virtuelle de `duration` par pas de
    /// `frame_interval`, en appelant `on_frame` après chaque frame exécutée.
    /// Retourne le nombre de frames exécutées.
    pub fn run_for<F>(
        &mut self,
        duration: Duration,
        frame_interval: Duration,
        mut on_frame: F,
    ) -> anyhow::Result<u64>
    where
        F: FnMut(u64, &Self) -> anyhow::Result<()>,
    {
        if frame_interval.is_zero() {
            anyhow::bail!("frame_interval must be > 0");
        }
        let end = self.now + duration;
        let mut executed = 0;
        let mut t = self.now;

        while t + frame_interval <= end {
            t += frame_interval;
            if self.step(t) {
                on_frame(executed, self)?;
                executed += 1;
            }
        }
        Ok(executed)
    }

    fn apply_control_signals(&mut self) {
        while let Ok(signal) = self.control_rx.try_recv() {
            debug!("Control signal received: {:?}", signal);
            match signal {
                ShowSignal::Start => {
                    self.start();
                }
                ShowSignal::Stop => self.stop(),
                ShowSignal::Resize { width, height } => self.resize(width, height),
            }
        }
    }

    pub fn close(&mut self) {
        self.stop();
        self.renderer_engine.close();
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_engine_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }
}
