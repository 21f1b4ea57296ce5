use fireworks_canvas::physic_engine::{PhysicConfig, PhysicEngineFireworks, Viewport};
use fireworks_canvas::renderer_engine::DrawingSurface;

/// Appel enregistré par `RecordingSurface`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(u32, u32),
    ClearRect(f32, f32, f32, f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc(f32, f32, f32),
    Stroke,
    Fill,
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f32),
    ShadowBlur(f32),
    ShadowColor(String),
}

/// Surface factice : n'affiche rien, enregistre chaque appel.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn shadow_colors(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::ShadowColor(color) => Some(color.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fill_styles(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillStyle(color) => Some(color.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.push(DrawCall::Resize(width, height));
    }
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::ClearRect(x, y, width, height));
    }
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::LineTo(x, y));
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, _start_angle: f32, _end_angle: f32) {
        self.calls.push(DrawCall::Arc(x, y, radius));
    }
    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.calls.push(DrawCall::StrokeStyle(color.to_string()));
    }
    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(DrawCall::FillStyle(color.to_string()));
    }
    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }
    fn set_shadow_blur(&mut self, blur: f32) {
        self.calls.push(DrawCall::ShadowBlur(blur));
    }
    fn set_shadow_color(&mut self, color: &str) {
        self.calls.push(DrawCall::ShadowColor(color.to_string()));
    }
}

#[allow(dead_code)]
pub fn seeded_engine(width: f32, height: f32, seed: u64) -> PhysicEngineFireworks {
    PhysicEngineFireworks::with_seed(&PhysicConfig::default(), Viewport::new(width, height), seed)
}
