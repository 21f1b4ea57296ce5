use crate::physic_engine::PhysicEngine;

/// Surface raster 2D, sur le modèle d'un contexte canvas.
///
/// Les couleurs sont des chaînes `#rrggbb`, éventuellement suivies d'un
/// suffixe d'opacité `aa`. Une couleur illisible laisse l'état inchangé.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Redimensionne la surface ; son contenu est perdu.
    fn resize(&mut self, width: u32, height: u32);

    /// Remet la zone en transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_shadow_blur(&mut self, blur: f32);
    fn set_shadow_color(&mut self, color: &str);
}

pub trait RendererEngine {
    /// Dessine l'état courant du moteur. Retourne le nombre de particules
    /// dessinées (0 si la surface est absente ou vide).
    fn render_frame<P: PhysicEngine + ?Sized>(&mut self, physic: &P) -> usize;

    /// Efface entièrement la surface.
    fn clear_surface(&mut self);

    fn resize(&mut self, width: u32, height: u32);

    /// Dimensions de la surface, `None` si aucune n'est attachée.
    fn size(&self) -> Option<(u32, u32)>;

    fn close(&mut self) {}
}
