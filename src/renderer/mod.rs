//! Rendering module
//!
//! The game draws through the `Renderer` trait: a handful of immediate-mode
//! primitives, implemented by the SDL2 backend and by `HeadlessRenderer`.

pub mod headless;
pub mod scene;
pub mod shapes;

pub use headless::{DrawCommand, HeadlessRenderer};
pub use scene::render_scene;

use glam::IVec2;

use crate::Color;
use crate::error::RenderError;

/// Integer screen rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `x` is the left edge
    #[default]
    Left,
    /// `x` is the horizontal centre
    Center,
}

/// Drawing surface
pub trait Renderer {
    /// Fill the whole target with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One-pixel outline
    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_points(&mut self, points: &[IVec2], color: Color);

    /// Filled disc. Rasterized into points unless the backend has a native one.
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color) {
        let points = shapes::filled_circle(center, radius);
        self.draw_points(&points, color);
    }

    /// Draw `text` with the loaded font, top edge at `y`
    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
        align: TextAlign,
    ) -> Result<(), RenderError>;

    /// Flip the finished frame to the screen
    fn present(&mut self);
}
