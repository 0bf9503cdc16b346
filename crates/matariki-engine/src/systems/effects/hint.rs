//! Hint flash: a soft radial pulse over the current target star.

use glam::Vec2;

use crate::renderer::color::Color;

#[derive(Debug, Clone)]
pub struct HintFlash {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub opacity: f32,
    /// Opacity lost per tick.
    pub fade: f32,
}

impl HintFlash {
    pub fn new(center: Vec2, radius: f32, color: Color, fade: f32) -> Self {
        Self {
            center,
            radius,
            color,
            opacity: 1.0,
            fade,
        }
    }

    /// Fade one tick. Returns false once fully transparent.
    pub fn tick(&mut self) -> bool {
        self.opacity -= self.fade;
        self.opacity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_linearly_until_gone() {
        let mut flash = HintFlash::new(Vec2::ZERO, 150.0, Color::WHITE, 0.25);
        assert!(flash.tick());
        assert!((flash.opacity - 0.75).abs() < 1e-6);
        assert!(flash.tick());
        assert!(flash.tick());
        assert!(!flash.tick());
    }

    #[test]
    fn default_fade_lasts_about_a_third_of_a_second_at_60hz() {
        let mut flash = HintFlash::new(Vec2::ZERO, 150.0, Color::WHITE, 0.03);
        let mut ticks = 1;
        while flash.tick() {
            ticks += 1;
        }
        assert!((33..=34).contains(&ticks), "lasted {} ticks", ticks);
    }
}
