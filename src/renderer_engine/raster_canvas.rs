use image::{Rgba, RgbaImage};
use log::info;
use std::path::Path;

use crate::renderer_engine::color::parse_canvas_color;
use crate::renderer_engine::DrawingSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc { x: f32, y: f32, radius: f32 },
}

/// Canvas logiciel : un buffer RGBA (alpha non prémultiplié) et l'état
/// de dessin minimal dont le renderer a besoin.
///
/// Simplifications assumées : `fill` ne remplit que les arcs (disques
/// complets), `stroke` ne trace que les segments, et l'ombre portée est
/// un halo radial gaussien centré sur le disque.
pub struct RasterCanvas {
    buffer: RgbaImage,
    path: Vec<PathOp>,
    fill: Rgba<u8>,
    stroke: Rgba<u8>,
    line_width: f32,
    shadow_blur: f32,
    shadow_color: Rgba<u8>,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
            path: Vec::new(),
            fill: Rgba([0, 0, 0, 255]),
            stroke: Rgba([0, 0, 0, 255]),
            line_width: 1.0,
            shadow_blur: 0.0,
            shadow_color: Rgba([0, 0, 0, 0]),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.buffer.get_pixel_checked(x, y).copied()
    }

    /// Vrai si aucun pixel n'est visible.
    pub fn is_blank(&self) -> bool {
        self.buffer.pixels().all(|p| p.0[3] == 0)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.buffer
            .save(path)
            .map_err(|e| anyhow::anyhow!("Échec de l'export PNG '{}': {}", path.display(), e))?;
        info!("🖼️ Frame exported to {}", path.display());
        Ok(())
    }

    /// Bornes entières (clippées) d'une boîte flottante.
    fn pixel_bounds(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = self.buffer.dimensions();
        if w == 0 || h == 0 || !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }
        if max_x < 0.0 || max_y < 0.0 || min_x >= w as f32 || min_y >= h as f32 {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(w - 1);
        let y1 = (max_y.ceil().max(0.0) as u32).min(h - 1);
        (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
        let src_a = (color.0[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let dst = self.buffer.get_pixel_mut(x, y);
        let dst_a = dst.0[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        for c in 0..3 {
            let s = color.0[c] as f32;
            let d = dst.0[c] as f32;
            dst.0[c] = ((s * src_a + d * dst_a * (1.0 - src_a)) / out_a).round() as u8;
        }
        dst.0[3] = (out_a * 255.0).round() as u8;
    }

    fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(cx - radius, cy - radius, cx + radius, cy + radius) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = ((x as f32 + 0.5 - cx).powi(2) + (y as f32 + 0.5 - cy).powi(2)).sqrt();
                // Anti-crénelage sur un pixel de bord
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    fn glow_disc(&mut self, cx: f32, cy: f32, radius: f32, fill_alpha: f32) {
        let sigma = self.shadow_blur / 2.0;
        let extent = radius + self.shadow_blur;
        let color = self.shadow_color;
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(cx - extent, cy - extent, cx + extent, cy + extent) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = ((x as f32 + 0.5 - cx).powi(2) + (y as f32 + 0.5 - cy).powi(2)).sqrt();
                let outside = (d - radius).max(0.0);
                let falloff = (-0.5 * (outside / sigma).powi(2)).exp();
                self.blend(x, y, color, falloff * fill_alpha);
            }
        }
    }

    fn stroke_segment(&mut self, a: (f32, f32), b: (f32, f32), color: Rgba<u8>) {
        let half = (self.line_width / 2.0).max(0.5);
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(
            a.0.min(b.0) - half,
            a.1.min(b.1) - half,
            a.0.max(b.0) + half,
            a.1.max(b.1) + half,
        ) else {
            return;
        };
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len2 = dx * dx + dy * dy;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                let t = if len2 > 0.0 {
                    (((px - a.0) * dx + (py - a.1) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = ((px - a.0 - t * dx).powi(2) + (py - a.1 - t * dy).powi(2)).sqrt();
                let coverage = (half - d + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }
}

impl DrawingSurface for RasterCanvas {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.buffer = RgbaImage::new(width, height);
        self.path.clear();
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // Bornes demi-ouvertes : [x, x + width)
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(x, y, x + width - 1.0, y + height - 1.0) else {
            return;
        };
        for py in y0..=y1 {
            for px in x0..=x1 {
                self.buffer.put_pixel(px, py, Rgba([0, 0, 0, 0]));
            }
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(PathOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(PathOp::LineTo(x, y));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, _start_angle: f32, _end_angle: f32) {
        self.path.push(PathOp::Arc { x, y, radius });
    }

    fn stroke(&mut self) {
        let color = self.stroke;
        let mut cursor: Option<(f32, f32)> = None;
        let path = std::mem::take(&mut self.path);
        for &op in &path {
            match op {
                PathOp::MoveTo(x, y) => cursor = Some((x, y)),
                PathOp::LineTo(x, y) => {
                    if let Some(from) = cursor {
                        self.stroke_segment(from, (x, y), color);
                    }
                    cursor = Some((x, y));
                }
                PathOp::Arc { .. } => {}
            }
        }
        self.path = path;
    }

    fn fill(&mut self) {
        let color = self.fill;
        let fill_alpha = color.0[3] as f32 / 255.0;
        let glow = self.shadow_blur > 0.0 && self.shadow_color.0[3] > 0;

        let path = std::mem::take(&mut self.path);
        for &op in &path {
            if let PathOp::Arc { x, y, radius } = op {
                if glow {
                    self.glow_disc(x, y, radius, fill_alpha);
                }
                self.fill_disc(x, y, radius, color);
            }
        }
        self.path = path;
    }

    fn set_stroke_style(&mut self, color: &str) {
        if let Some(c) = parse_canvas_color(color) {
            self.stroke = c;
        }
    }

    fn set_fill_style(&mut self, color: &str) {
        if let Some(c) = parse_canvas_color(color) {
            self.fill = c;
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn set_shadow_blur(&mut self, blur: f32) {
        if blur.is_finite() && blur >= 0.0 {
            self.shadow_blur = blur;
        }
    }

    fn set_shadow_color(&mut self, color: &str) {
        if let Some(c) = parse_canvas_color(color) {
            self.shadow_color = c;
        }
    }
}
