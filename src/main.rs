// Ici on importe depuis la crate lib complète
use anyhow::{Context, Result};
use log::info;
use std::{env, fs, path::PathBuf, time::Duration};

use fireworks_canvas::physic_engine::{PhysicConfig, PhysicEngineFireworks, Viewport};
use fireworks_canvas::renderer_engine::{CanvasRenderer, RasterCanvas, RendererConfig};
use fireworks_canvas::scheduler::{SpawnScheduler, SpawnSchedulerConfig};
use fireworks_canvas::utils::show_rust_core_dependencies;
use fireworks_canvas::Simulator;

const SURFACE_WIDTH: u32 = 1024;
const SURFACE_HEIGHT: u32 = 800;
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const SHOW_DURATION: Duration = Duration::from_secs(8);
// Une image exportée toutes les 15 frames (4 par seconde)
const EXPORT_EVERY: u64 = 15;

/// Rendu hors écran d'un spectacle de célébration, avec export PNG optionnel.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks Canvas...");

    show_rust_core_dependencies();

    let physic_config = PhysicConfig::load_or_default("assets/config/physic.toml");
    let renderer_config = RendererConfig::load_or_default("assets/config/renderer.toml");
    let scheduler_config = SpawnSchedulerConfig::load_or_default("assets/config/scheduler.toml");
    info!("Physic config loaded:\n{:#?}", physic_config);

    // --------------------------
    // Gestion du chemin d'export des frames
    // --------------------------
    let export_dir = env::args()
        .nth(1) // priorité à l'argument CLI
        .map(PathBuf::from)
        .or_else(|| env::var("FIREWORKS_FRAMES_EXPORT").ok().map(PathBuf::from));

    if let Some(dir) = &export_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create export dir {}", dir.display()))?;
        info!("Frames export dir set to: {}", dir.display());
    }

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    let canvas = RasterCanvas::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    let renderer_engine = CanvasRenderer::new(canvas, renderer_config);
    // Viewport repris de la surface par le Simulator
    let physic_engine = PhysicEngineFireworks::new(&physic_config, Viewport::default());
    let scheduler = SpawnScheduler::new(scheduler_config);

    let mut simulator = Simulator::new(physic_engine, renderer_engine, scheduler);

    // Le relais de jeu n'envoie que des signaux start/stop
    let control = simulator.control_handle();
    control.start();

    let frames = simulator.run_for(SHOW_DURATION, FRAME_INTERVAL, |frame, sim| {
        let Some(dir) = &export_dir else {
            return Ok(());
        };
        if frame % EXPORT_EVERY != 0 {
            return Ok(());
        }
        match sim.renderer_engine().surface() {
            Some(canvas) => canvas.save_png(dir.join(format!("frame_{:05}.png", frame))),
            None => Ok(()),
        }
    })?;

    control.stop();
    let after = simulator.now() + FRAME_INTERVAL;
    simulator.step(after);
    info!("✅ Show finished: {} frame(s) rendered", frames);

    simulator.close();

    Ok(())
}
