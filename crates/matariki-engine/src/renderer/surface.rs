//! Drawing surface contract.
//!
//! The engine paints through this trait and never touches a concrete canvas.
//! The web bridge implements it over `CanvasRenderingContext2d`;
//! [`CommandBuffer`](super::commands::CommandBuffer) records calls for tests
//! and headless runs.

use glam::Vec2;

use super::color::Color;

/// One color stop of a gradient, `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Soft shadow behind a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Color,
}

/// Text with a contrasting outline, centered on `pos.x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub pos: Vec2,
    pub font: &'a str,
    pub fill: Color,
    pub outline: Color,
    pub outline_width: f32,
}

/// Primitive 2D operations used by the paint pass.
pub trait Surface {
    /// Backend identifier (e.g. "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Erase the whole surface.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);

    /// Disc filled with a radial gradient from `center` (offset 0) to its rim
    /// (offset 1).
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Straight line stroked with a linear gradient from `from` to `to`.
    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        stops: &[GradientStop],
        glow: Option<Glow>,
    );

    fn outlined_text(&mut self, label: &Label<'_>);
}
