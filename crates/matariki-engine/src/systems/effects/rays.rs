//! Celebration light rays. Entirely derived from the celebration clock; there
//! is no per-ray state.

use glam::Vec2;

/// One ray from a star outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub start: Vec2,
    pub end: Vec2,
    /// Base intensity before the gradient falloff, 0.1 - 0.7.
    pub intensity: f32,
}

/// Ray length at celebration time `t`.
pub fn ray_length(t: f32) -> f32 {
    100.0 + (t * 2.0).sin() * 50.0
}

/// Ray intensity for a star at screen x `x`.
pub fn ray_intensity(t: f32, x: f32) -> f32 {
    (t * 3.0 + x * 0.01).sin() * 0.3 + 0.4
}

/// Evenly spaced rays around `center`, rotating with `t`.
pub fn star_rays(center: Vec2, t: f32, count: u32) -> impl Iterator<Item = Ray> {
    let length = ray_length(t);
    let intensity = ray_intensity(t, center.x);
    (0..count).map(move |i| {
        let angle = (i as f32 / count as f32) * std::f32::consts::TAU + t;
        Ray {
            start: center,
            end: center + Vec2::from_angle(angle) * length,
            intensity,
        }
    })
}
