pub mod r#trait;
pub use r#trait::{DrawingSurface, RendererEngine};

pub mod renderer;
pub use self::renderer::CanvasRenderer;

pub mod raster_canvas;
pub use self::raster_canvas::RasterCanvas;

pub mod color;
pub use self::color::parse_canvas_color;

pub mod config;
pub use self::config::RendererConfig;
