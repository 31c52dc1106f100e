//! Recording renderer
//!
//! Keeps a log of every draw call instead of touching a screen. Used to run
//! the game without a window and to inspect frames in tests.

use glam::IVec2;

use super::{Rect, Renderer, TextAlign};
use crate::Color;
use crate::error::RenderError;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    DrawRect(Rect, Color),
    /// A filled circle (recorded whole, not as points)
    FillCircle { center: IVec2, radius: i32, color: Color },
    Points { count: usize, color: Color },
    Text {
        text: String,
        color: Color,
        x: i32,
        y: i32,
        align: TextAlign,
    },
    Present,
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    commands: Vec<DrawCommand>,
    frames: u64,
    fail_text: bool,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every text draw fail, as if the font could not rasterize
    pub fn failing_text() -> Self {
        Self {
            fail_text: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands since the most recent `Clear`
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Strings drawn since the most recent `Clear`
    pub fn last_frame_text(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of `present` calls so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::DrawRect(rect, color));
    }

    fn draw_points(&mut self, points: &[IVec2], color: Color) {
        self.commands.push(DrawCommand::Points {
            count: points.len(),
            color,
        });
    }

    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
        align: TextAlign,
    ) -> Result<(), RenderError> {
        if self.fail_text {
            return Err(RenderError::TextSurface(format!("cannot rasterize {text:?}")));
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            x,
            y,
            align,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.frames += 1;
        self.commands.push(DrawCommand::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame_starts_at_clear() {
        let mut r = HeadlessRenderer::new();
        r.clear(Color::BLACK);
        r.present();
        r.clear(Color::WHITE);
        r.fill_rect(Rect::new(0, 0, 1, 1), Color::GREEN);
        assert_eq!(r.last_frame().len(), 2);
        assert_eq!(r.last_frame()[0], DrawCommand::Clear(Color::WHITE));
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn test_failing_text_records_nothing() {
        let mut r = HeadlessRenderer::failing_text();
        let result = r.draw_text("0 : 0", Color::WHITE, 400, 20, TextAlign::Center);
        assert!(matches!(result, Err(RenderError::TextSurface(_))));
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_default_circle_goes_through_points() {
        struct PointsOnly(Vec<usize>);
        impl Renderer for PointsOnly {
            fn clear(&mut self, _: Color) {}
            fn fill_rect(&mut self, _: Rect, _: Color) {}
            fn draw_rect(&mut self, _: Rect, _: Color) {}
            fn draw_points(&mut self, points: &[IVec2], _: Color) {
                self.0.push(points.len());
            }
            fn draw_text(&mut self, _: &str, _: Color, _: i32, _: i32, _: TextAlign) -> Result<(), RenderError> {
                Ok(())
            }
            fn present(&mut self) {}
        }

        let mut r = PointsOnly(Vec::new());
        r.fill_circle(IVec2::new(5, 5), 2, Color::ORANGE);
        assert_eq!(r.0, vec![11]);
    }
}
