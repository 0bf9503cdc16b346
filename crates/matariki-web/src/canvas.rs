//! `Surface` over a browser 2D canvas context.

use glam::Vec2;
use matariki_engine::renderer::surface::{Glow, GradientStop, Label, Surface};
use matariki_engine::{Color, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to `viewport` (CSS pixels).
    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn gradient_stops(gradient: &CanvasGradient, stops: &[GradientStop]) {
        for stop in stops {
            if let Err(err) = gradient.add_color_stop(stop.offset, &stop.color.to_css()) {
                log::warn!("bad gradient stop {:?}: {:?}", stop, err);
            }
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if self.circle_path(center, radius) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        if self.circle_path(center, radius) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(line_width as f64);
            self.ctx.stroke();
        }
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(err) => {
                log::warn!("radial gradient failed: {:?}", err);
                return;
            }
        };
        Self::gradient_stops(&gradient, stops);
        if self.circle_path(center, radius) {
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        stops: &[GradientStop],
        glow: Option<Glow>,
    ) {
        let gradient =
            self.ctx
                .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        Self::gradient_stops(&gradient, stops);

        self.ctx.save();
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur as f64);
            self.ctx.set_shadow_color(&glow.color.to_css());
        }
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn outlined_text(&mut self, label: &Label<'_>) {
        let (x, y) = (label.pos.x as f64, label.pos.y as f64);
        self.ctx.set_font(label.font);
        self.ctx.set_text_align("center");
        self.ctx.set_stroke_style_str(&label.outline.to_css());
        self.ctx.set_line_width(label.outline_width as f64);
        let _ = self.ctx.stroke_text(label.text, x, y);
        self.ctx.set_fill_style_str(&label.fill.to_css());
        let _ = self.ctx.fill_text(label.text, x, y);
    }
}
