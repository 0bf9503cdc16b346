//! Paint pass: draws one frame back-to-front onto a [`Surface`].
//!
//! Everything here is a pure function of the [`Frame`] snapshot. Animated
//! values (twinkle, pulses, rays) are derived from the phase clocks the update
//! pass already advanced.

use glam::Vec2;

use super::color::Color;
use super::surface::{Glow, GradientStop, Label, Surface};
use crate::catalog::{BackgroundStar, Star};
use crate::core::session::Connection;
use crate::layout::Viewport;
use crate::systems::effects::{star_rays, EffectsState};

// ── Backdrop ─────────────────────────────────────────────────────────

const CELEBRATION_TINT: Color = Color::rgb(60, 40, 80);
const BACKGROUND_STAR_RADIUS: f32 = 1.5;

// ── Connections ──────────────────────────────────────────────────────

const CONNECTION_WIDTH: f32 = 3.0;
const CONNECTION_ALPHA: f32 = 0xCC as f32 / 255.0;
const CONNECTION_GLOW: f32 = 8.0;

// ── Stars ────────────────────────────────────────────────────────────

const STAR_BASE_RADIUS: f32 = 6.0;
const STAR_BRIGHTNESS_RADIUS: f32 = 10.0;
const GLOW_SCALE: f32 = 4.0;
const CORE_SCALE: f32 = 0.4;
const RING_WIDTH: f32 = 2.0;
const RING_ALPHA: f32 = 0.3;
const LABEL_FONT: &str = "bold 14px Arial";
const LABEL_GAP: f32 = 12.0;
const LABEL_OUTLINE: Color = Color::new(0, 0, 0, 0.8);
const LABEL_OUTLINE_WIDTH: f32 = 3.0;

// ── Rays ─────────────────────────────────────────────────────────────

const RAY_WIDTH: f32 = 2.0;

/// Read-only snapshot of everything the paint pass needs.
pub struct Frame<'a> {
    pub viewport: Viewport,
    /// Logical design size the background field is stretched from.
    pub design: Vec2,
    pub background: &'a [BackgroundStar],
    pub stars: &'a [Star],
    pub connections: &'a [Connection],
    pub effects: &'a EffectsState,
    /// Twinkle phase.
    pub twinkle: f32,
    pub ray_count: u32,
}

impl Frame<'_> {
    fn celebrating(&self) -> bool {
        self.effects.is_celebrating()
    }

    fn celebration_time(&self) -> f32 {
        self.effects.celebration_time()
    }
}

/// Paint a whole frame.
pub fn paint<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    paint_backdrop(frame, surface);
    paint_background_field(frame, surface);
    paint_connections(frame, surface);
    paint_hint_flashes(frame, surface);
    paint_particles(frame, surface);
    paint_stars(frame, surface);
    if frame.celebrating() {
        paint_light_rays(frame, surface);
    }
}

fn paint_backdrop<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    let Viewport { width, height } = frame.viewport;
    surface.clear(width, height);
    if frame.celebrating() {
        let shift = (frame.celebration_time() * 2.0).sin() * 0.05 + 0.05;
        surface.fill_rect(Vec2::ZERO, Vec2::new(width, height), CELEBRATION_TINT.with_alpha(shift));
    }
}

/// Ambient field, stretched (non-uniformly) over the whole viewport.
fn paint_background_field<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    let scale = Vec2::new(frame.viewport.width, frame.viewport.height) / frame.design;
    for point in frame.background {
        let pos = Vec2::new(point.x, point.y) * scale;
        let twinkle = 0.5 + 0.3 * (frame.twinkle * 2.0 + pos.x * 0.01).sin();
        let color = Color::WHITE.with_alpha(point.brightness * twinkle);
        surface.fill_circle(pos, BACKGROUND_STAR_RADIUS, color);
    }
}

fn paint_connections<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    for conn in frame.connections {
        let (Some(a), Some(b)) = (frame.stars.get(conn.from), frame.stars.get(conn.to)) else {
            continue;
        };
        let stops = [
            GradientStop::new(0.0, a.color.with_alpha(CONNECTION_ALPHA)),
            GradientStop::new(1.0, b.color.with_alpha(CONNECTION_ALPHA)),
        ];
        let glow = Glow { blur: CONNECTION_GLOW, color: a.color };
        surface.stroke_gradient_line(a.screen, b.screen, CONNECTION_WIDTH, &stops, Some(glow));
    }
}

fn paint_hint_flashes<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    for flash in &frame.effects.flashes {
        let c = flash.color;
        let stops = [
            GradientStop::new(0.0, c.with_alpha(flash.opacity * 0.3)),
            GradientStop::new(0.6, c.with_alpha(flash.opacity * 0.15)),
            GradientStop::new(1.0, c.with_alpha(0.0)),
        ];
        surface.fill_radial(flash.center, flash.radius, &stops);
    }
}

fn paint_particles<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    for p in &frame.effects.particles {
        let alpha = p.alpha();
        let stops = [
            GradientStop::new(0.0, p.color.with_alpha(alpha)),
            GradientStop::new(0.5, p.color.with_alpha(alpha * 0.5)),
            GradientStop::new(1.0, p.color.with_alpha(0.0)),
        ];
        surface.fill_radial(p.position, p.glow_radius(), &stops);
    }
}

/// Radius of a star's body this frame, including the celebration pulse.
pub fn star_radius(star: &Star, celebration_time: f32) -> f32 {
    let base = STAR_BASE_RADIUS + star.def.brightness * STAR_BRIGHTNESS_RADIUS;
    if star.celebrating {
        base * ((celebration_time * 4.0).sin() * 0.3 + 1.2)
    } else {
        base
    }
}

fn paint_stars<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    let t = frame.celebration_time();
    for star in frame.stars {
        let pos = star.draw_pos();
        let radius = star_radius(star, t);
        let twinkle = 0.7 + 0.3 * (frame.twinkle + star.screen.x * 0.01).sin();
        let opacity = star.def.brightness * twinkle;
        // Undiscovered stars all look alike.
        let color = if star.discovered { star.color } else { Color::WHITE };

        if star.discovered && !frame.celebrating() {
            let ring = radius * GLOW_SCALE + 2.0 * (frame.twinkle * 2.0).sin();
            surface.stroke_circle(pos, ring, RING_WIDTH, color.with_alpha(RING_ALPHA));
        }

        let glow = [
            GradientStop::new(0.0, color.with_alpha(opacity * 0.8)),
            GradientStop::new(0.3, color.with_alpha(opacity * 0.4)),
            GradientStop::new(0.7, color.with_alpha(opacity * 0.1)),
            GradientStop::new(1.0, color.with_alpha(0.0)),
        ];
        surface.fill_radial(pos, radius * GLOW_SCALE, &glow);
        surface.fill_circle(pos, radius, color.with_alpha(opacity));
        surface.fill_circle(pos, radius * CORE_SCALE, Color::WHITE.with_alpha(opacity * 0.8));

        if star.discovered {
            surface.outlined_text(&Label {
                text: star.name(),
                pos: Vec2::new(pos.x, pos.y - radius - LABEL_GAP),
                font: LABEL_FONT,
                fill: color,
                outline: LABEL_OUTLINE,
                outline_width: LABEL_OUTLINE_WIDTH,
            });
        }
    }
}

fn paint_light_rays<S: Surface + ?Sized>(frame: &Frame<'_>, surface: &mut S) {
    let t = frame.celebration_time();
    for star in frame.stars {
        for ray in star_rays(star.screen, t, frame.ray_count) {
            let stops = [
                GradientStop::new(0.0, star.color.with_alpha(ray.intensity * 0.3)),
                GradientStop::new(0.7, star.color.with_alpha(ray.intensity * 0.1)),
                GradientStop::new(1.0, star.color.with_alpha(0.0)),
            ];
            surface.stroke_gradient_line(ray.start, ray.end, RAY_WIDTH, &stops, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use crate::catalog::StarDef;
    use crate::renderer::commands::{CommandBuffer, DrawCommand};

    fn star(id: &str, discovered: bool) -> Star {
        let mut s = Star::from_def(&StarDef {
            id: id.into(),
            name: id.to_uppercase(),
            meaning: String::new(),
            story: String::new(),
            cultural: String::new(),
            color: "#FF0000".into(),
            x: 0.0,
            y: 0.0,
            brightness: 0.5,
            image: None,
        });
        s.discovered = discovered;
        s.screen = Vec2::new(100.0, 100.0);
        s
    }

    fn frame<'a>(stars: &'a [Star], conns: &'a [Connection], effects: &'a EffectsState) -> Frame<'a> {
        Frame {
            viewport: Viewport::new(800.0, 600.0),
            design: Vec2::new(800.0, 600.0),
            background: &[],
            stars,
            connections: conns,
            effects,
            twinkle: 0.0,
            ray_count: 8,
        }
    }

    #[test]
    fn first_command_clears_viewport() {
        let effects = EffectsState::new(1);
        let mut buf = CommandBuffer::new();
        paint(&frame(&[], &[], &effects), &mut buf);
        assert_eq!(buf.commands, vec![DrawCommand::Clear { width: 800.0, height: 600.0 }]);
    }

    #[test]
    fn only_discovered_stars_get_labels_and_color() {
        let stars = [star("a", true), star("b", false)];
        let effects = EffectsState::new(1);
        let mut buf = CommandBuffer::new();
        paint(&frame(&stars, &[], &effects), &mut buf);
        assert_eq!(buf.texts(), vec!["A"]);

        let bodies: Vec<Color> = buf
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle { radius, color, .. } if *radius > 5.0 => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(bodies.len(), 2);
        assert_eq!((bodies[0].r, bodies[0].g, bodies[0].b), (255, 0, 0));
        assert_eq!((bodies[1].r, bodies[1].g, bodies[1].b), (255, 255, 255));
    }

    #[test]
    fn connections_paint_before_stars() {
        let stars = [star("a", true), star("b", true)];
        let conns = [Connection { from: 0, to: 1 }];
        let effects = EffectsState::new(1);
        let mut buf = CommandBuffer::new();
        paint(&frame(&stars, &conns, &effects), &mut buf);
        let line = buf
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::GradientLine { .. }))
            .unwrap();
        let first_star = buf
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();
        assert!(line < first_star);
    }

    #[test]
    fn celebration_adds_tint_and_rays_last() {
        let config = GameConfig::default();
        let stars = [star("a", true)];
        let mut effects = EffectsState::new(1);
        effects.start_celebration(&stars, &config);
        effects.particles.clear();
        let mut buf = CommandBuffer::new();
        paint(&frame(&stars, &[], &effects), &mut buf);

        assert!(matches!(buf.commands[1], DrawCommand::FillRect { .. }));
        let rays = buf
            .commands
            .iter()
            .rev()
            .take_while(|c| matches!(c, DrawCommand::GradientLine { .. }))
            .count();
        assert_eq!(rays, 8);
        // No discovery ring while celebrating.
        assert!(!buf.commands.iter().any(|c| matches!(c, DrawCommand::StrokeCircle { .. })));
    }

    #[test]
    fn celebrating_star_pulses() {
        let mut s = star("a", true);
        let still = star_radius(&s, 0.0);
        assert!((still - 11.0).abs() < 1e-6);
        s.celebrating = true;
        assert!((star_radius(&s, 0.0) - 11.0 * 1.2).abs() < 1e-5);
    }
}
