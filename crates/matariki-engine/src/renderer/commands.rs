//! Recording surface: stores draw calls as data.

use glam::Vec2;

use super::color::Color;
use super::surface::{Glow, GradientStop, Label, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { pos: Vec2, size: Vec2, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, line_width: f32, color: Color },
    FillRadial { center: Vec2, radius: f32, stops: Vec<GradientStop> },
    GradientLine {
        from: Vec2,
        to: Vec2,
        line_width: f32,
        stops: Vec<GradientStop>,
        glow: Option<Glow>,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        fill: Color,
        outline: Color,
        outline_width: f32,
    },
}

/// A [`Surface`] that appends every call to a list.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded label texts, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for CommandBuffer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, line_width, color });
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::FillRadial {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        stops: &[GradientStop],
        glow: Option<Glow>,
    ) {
        self.commands.push(DrawCommand::GradientLine {
            from,
            to,
            line_width,
            stops: stops.to_vec(),
            glow,
        });
    }

    fn outlined_text(&mut self, label: &Label<'_>) {
        self.commands.push(DrawCommand::Text {
            text: label.text.to_string(),
            pos: label.pos,
            font: label.font.to_string(),
            fill: label.fill,
            outline: label.outline,
            outline_width: label.outline_width,
        });
    }
}
