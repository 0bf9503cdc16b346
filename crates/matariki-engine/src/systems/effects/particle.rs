//! Celebration particles: glowing motes that fall under gravity and fade out.

use glam::Vec2;

use crate::renderer::color::Color;

/// A single particle with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining life, 1.0 at spawn.
    pub life: f32,
    /// Life lost per tick.
    pub decay: f32,
    pub size: f32,
    pub color: Color,
    /// Shimmer phase in radians.
    pub shimmer: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, decay: f32, size: f32, color: Color, shimmer: f32) -> Self {
        Particle {
            position,
            velocity,
            life: 1.0,
            decay,
            size,
            color,
            shimmer,
        }
    }

    /// Advance one tick. Returns false when expired.
    pub fn tick(&mut self, gravity: f32, shimmer_step: f32) -> bool {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.life -= self.decay;
        self.shimmer += shimmer_step;
        self.life > 0.0
    }

    /// Current opacity: remaining life modulated by the shimmer.
    pub fn alpha(&self) -> f32 {
        let sparkle = self.shimmer.sin() * 0.5 + 0.5;
        (self.life * sparkle).max(0.0)
    }

    /// Radius of the glow disc.
    pub fn glow_radius(&self) -> f32 {
        self.size * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(decay: f32) -> Particle {
        Particle::new(Vec2::ZERO, Vec2::new(1.0, -2.0), decay, 3.0, Color::WHITE, 0.0)
    }

    #[test]
    fn integrates_position_then_gravity() {
        let mut p = particle(0.01);
        assert!(p.tick(0.1, 0.2));
        assert_eq!(p.position, Vec2::new(1.0, -2.0));
        assert!((p.velocity.y - (-1.9)).abs() < 1e-6);
        assert!((p.shimmer - 0.2).abs() < 1e-6);
        assert!((p.life - 0.99).abs() < 1e-6);
    }

    #[test]
    fn expires_when_life_runs_out() {
        let mut p = particle(0.5);
        assert!(p.tick(0.1, 0.2));
        assert!(!p.tick(0.1, 0.2), "particle should expire at life <= 0");
    }

    #[test]
    fn alpha_follows_life_and_shimmer() {
        let mut p = particle(0.01);
        p.shimmer = std::f32::consts::FRAC_PI_2;
        assert!((p.alpha() - 1.0).abs() < 1e-6);
        p.life = 0.5;
        assert!((p.alpha() - 0.5).abs() < 1e-6);
        p.shimmer = -std::f32::consts::FRAC_PI_2;
        assert!(p.alpha().abs() < 1e-6);
    }
}
