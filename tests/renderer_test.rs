use fireworks_canvas::physic_engine::physic_engine_generational_arena::PhysicEngineTestHelpers;
use fireworks_canvas::physic_engine::types::alpha_suffix;
use fireworks_canvas::physic_engine::{HexColor, Particle, Rocket, Vec2};
use fireworks_canvas::renderer_engine::{
    CanvasRenderer, RasterCanvas, RendererConfig, RendererEngine,
};

mod helpers;
use helpers::{seeded_engine, DrawCall, RecordingSurface};

const RED: HexColor = HexColor::new(0xff, 0x00, 0x00);
const BLUE: HexColor = HexColor::new(0x00, 0x00, 0xff);

fn spark(x: f32, color: HexColor) -> Particle {
    Particle::new(Vec2::new(x, 100.0), Vec2::ZERO, color, 0.01, 2.0, 15)
}

#[test]
fn test_detached_renderer_is_noop() {
    let engine = seeded_engine(800.0, 600.0, 1);
    let mut renderer: CanvasRenderer<RecordingSurface> =
        CanvasRenderer::detached(RendererConfig::default());
    assert_eq!(renderer.render_frame(&engine), 0);
    renderer.clear_surface();
    renderer.resize(100, 100);
    assert!(renderer.surface().is_none());
}

#[test]
fn test_zero_size_surface_is_noop() {
    let mut engine = seeded_engine(800.0, 600.0, 2);
    engine.insert_particle(spark(10.0, RED));

    let mut renderer = CanvasRenderer::new(RecordingSurface::new(0, 0), RendererConfig::default());
    assert_eq!(renderer.render_frame(&engine), 0);
    assert!(renderer.surface().unwrap().calls.is_empty());
}

#[test]
fn test_frame_starts_with_clear_then_rockets() {
    let mut engine = seeded_engine(800.0, 600.0, 3);
    let mut rocket = Rocket::new(Vec2::new(50.0, 500.0), Vec2::ZERO, 10.0, RED, false, 8);
    rocket.trail.push(Vec2::new(50.0, 520.0));
    rocket.trail.push(Vec2::new(50.0, 510.0));
    engine.insert_rocket(rocket);

    let mut renderer = CanvasRenderer::new(RecordingSurface::new(800, 600), RendererConfig::default());
    assert_eq!(renderer.render_frame(&engine), 0);

    let calls = &renderer.surface().unwrap().calls;
    assert_eq!(
        calls,
        &vec![
            DrawCall::ClearRect(0.0, 0.0, 800.0, 600.0),
            DrawCall::ShadowBlur(0.0),
            DrawCall::StrokeStyle("#FF0000".into()),
            DrawCall::LineWidth(2.0),
            DrawCall::BeginPath,
            DrawCall::MoveTo(50.0, 520.0),
            DrawCall::LineTo(50.0, 510.0),
            DrawCall::Stroke,
            DrawCall::FillStyle("#FFFFFF".into()),
            DrawCall::BeginPath,
            DrawCall::Arc(50.0, 500.0, 2.0),
            DrawCall::Fill,
        ]
    );
}

#[test]
fn test_particles_grouped_by_color() {
    let mut engine = seeded_engine(800.0, 600.0, 4);
    engine.insert_particle(spark(10.0, RED));
    engine.insert_particle(spark(20.0, BLUE));
    engine.insert_particle(spark(30.0, RED));

    let mut renderer = CanvasRenderer::new(RecordingSurface::new(800, 600), RendererConfig::default());
    assert_eq!(renderer.render_frame(&engine), 3);

    // Groupes dans l'ordre de première apparition : rouge puis bleu
    let colors = renderer.surface().unwrap().shadow_colors();
    assert_eq!(colors, vec!["#FF0000", "#FF0000", "#0000FF"]);
}

#[test]
fn test_particle_trail_and_glow() {
    let mut engine = seeded_engine(800.0, 600.0, 5);
    let mut p = spark(10.0, RED);
    p.alpha = 0.5;
    for _ in 0..3 {
        p.update(&Default::default());
    }
    let trail_len = p.trail.len();
    let alpha = p.alpha;
    engine.insert_particle(p);

    let mut renderer = CanvasRenderer::new(RecordingSurface::new(800, 600), RendererConfig::default());
    renderer.render_frame(&engine);
    let surface = renderer.surface().unwrap();

    let expected_fills: Vec<String> = (0..trail_len)
        .map(|k| format!("#FF0000{}", alpha_suffix(k as f32 / trail_len as f32 * alpha)))
        .chain(std::iter::once(format!("#FF0000{}", alpha_suffix(alpha))))
        .collect();
    assert_eq!(surface.fill_styles(), expected_fills);

    // Halo sur le corps seulement, remis à zéro ensuite
    let tail: Vec<&DrawCall> = surface.calls.iter().rev().take(2).collect();
    assert_eq!(tail[0], &DrawCall::ShadowBlur(0.0));
    assert_eq!(tail[1], &DrawCall::Fill);
    assert!(surface.calls.contains(&DrawCall::ShadowBlur(40.0)));
    assert!(surface.calls.contains(&DrawCall::ShadowColor("#FF0000".into())));
}

#[test]
fn test_raster_canvas_renders_and_clears() {
    let mut engine = seeded_engine(200.0, 200.0, 6);
    engine.insert_particle(spark(100.0, RED));

    let mut renderer = CanvasRenderer::new(RasterCanvas::new(200, 200), RendererConfig::default());
    assert_eq!(renderer.render_frame(&engine), 1);
    let canvas = renderer.surface().unwrap();
    assert!(!canvas.is_blank());
    let center = canvas.pixel(100, 100).unwrap();
    assert!(center[0] > 200 && center[3] > 0);

    renderer.clear_surface();
    assert!(renderer.surface().unwrap().is_blank());
}

#[test]
fn test_resize_changes_surface() {
    let mut renderer = CanvasRenderer::new(RasterCanvas::new(100, 100), RendererConfig::default());
    renderer.resize(320, 240);
    let canvas = renderer.surface().unwrap();
    assert_eq!((canvas.image().width(), canvas.image().height()), (320, 240));
}

#[test]
fn test_attached_surface_draws_after_detached_start() {
    let mut engine = seeded_engine(200.0, 200.0, 7);
    engine.insert_particle(spark(100.0, BLUE));

    let mut renderer = CanvasRenderer::detached(RendererConfig::default());
    assert_eq!(renderer.size(), None);
    assert_eq!(renderer.render_frame(&engine), 0);

    // L'hôte fournit sa surface plus tard
    renderer.attach(RasterCanvas::new(200, 200));
    assert_eq!(renderer.size(), Some((200, 200)));
    assert_eq!(renderer.render_frame(&engine), 1);
    assert!(!renderer.surface().unwrap().is_blank());
}
