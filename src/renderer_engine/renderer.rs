use itertools::Itertools;
use std::f32::consts::TAU;

use crate::physic_engine::types::alpha_suffix;
use crate::physic_engine::{HexColor, Particle, PhysicEngine, Rocket};
use crate::renderer_engine::{DrawingSurface, RendererConfig, RendererEngine};

/// Passe de dessin des feux d'artifice sur une `DrawingSurface`.
///
/// La surface est optionnelle : tant qu'elle est absente (hôte pas encore
/// initialisé) ou de taille nulle, le rendu ne fait rien.
pub struct CanvasRenderer<S: DrawingSurface> {
    surface: Option<S>,
    config: RendererConfig,
}

impl<S: DrawingSurface> CanvasRenderer<S> {
    pub fn new(surface: S, config: RendererConfig) -> Self {
        Self {
            surface: Some(surface),
            config,
        }
    }

    /// Renderer sans surface : chaque frame est un no-op.
    pub fn detached(config: RendererConfig) -> Self {
        Self {
            surface: None,
            config,
        }
    }

    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn draw_rocket(surface: &mut S, config: &RendererConfig, rocket: &Rocket) {
        let color = rocket.color.to_string();
        surface.set_stroke_style(&color);
        surface.set_line_width(config.rocket_line_width);

        surface.begin_path();
        for (index, pos) in rocket.trail.iter().enumerate() {
            if index == 0 {
                surface.move_to(pos.x, pos.y);
            } else {
                surface.line_to(pos.x, pos.y);
            }
        }
        surface.stroke();

        surface.set_fill_style(&config.rocket_head_color.to_string());
        surface.begin_path();
        surface.arc(rocket.pos.x, rocket.pos.y, config.rocket_head_radius, 0.0, TAU);
        surface.fill();
    }

    fn draw_particle(surface: &mut S, config: &RendererConfig, color: &str, p: &Particle) {
        let len = p.trail.len() as f32;
        for (index, point) in p.trail.iter().enumerate() {
            let trail_alpha = (index as f32 / len) * p.alpha;
            surface.set_fill_style(&format!("{}{}", color, alpha_suffix(trail_alpha)));
            surface.begin_path();
            let trail_size = p.size * (config.trail_size_base + trail_alpha * config.trail_size_gain);
            surface.arc(point.pos.x, point.pos.y, trail_size, 0.0, TAU);
            surface.fill();
        }

        surface.set_fill_style(&format!("{}{}", color, alpha_suffix(p.alpha)));
        surface.set_shadow_blur(config.glow_blur);
        surface.set_shadow_color(color);

        surface.begin_path();
        surface.arc(p.pos.x, p.pos.y, p.size, 0.0, TAU);
        surface.fill();

        surface.set_shadow_blur(0.0);
    }
}

impl<S: DrawingSurface> RendererEngine for CanvasRenderer<S> {
    fn render_frame<P: PhysicEngine + ?Sized>(&mut self, physic: &P) -> usize {
        let Some(surface) = self.surface.as_mut() else {
            return 0;
        };
        let (width, height) = (surface.width(), surface.height());
        if width == 0 || height == 0 {
            return 0;
        }
        let config = &self.config;

        // Fond transparent : l'overlay de célébration reste visible dessous
        surface.clear_rect(0.0, 0.0, width as f32, height as f32);
        surface.set_shadow_blur(0.0);

        for rocket in physic.iter_rockets() {
            Self::draw_rocket(surface, config, rocket);
        }

        // Regroupement par couleur pour limiter les changements d'état,
        // groupes dans l'ordre de première apparition
        let mut drawn = 0;
        let colors: Vec<HexColor> = physic.iter_particles().map(|p| p.color).unique().collect();
        for color in colors {
            let css = color.to_string();
            for p in physic.iter_particles().filter(|p| p.color == color) {
                Self::draw_particle(surface, config, &css, p);
                drawn += 1;
            }
        }

        drawn
    }

    fn clear_surface(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let (w, h) = (surface.width(), surface.height());
            surface.clear_rect(0.0, 0.0, w as f32, h as f32);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    fn size(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| (s.width(), s.height()))
    }
}
