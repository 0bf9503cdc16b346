//! Play-area layout: fits the fixed design space into whatever part of the
//! viewport the page chrome leaves free.
//!
//! The pass is pure. [`Layout::compute`] derives the available rectangle and a
//! uniform scale, and [`Layout::apply`] writes each star's screen position.

use glam::Vec2;

use crate::api::config::GameConfig;
use crate::catalog::Star;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn device_class(&self, config: &GameConfig) -> DeviceClass {
        if self.width <= config.mobile_breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Mobile layouts stack panels below the canvas; desktop layouts put them at
/// the sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// Axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub device: DeviceClass,
    /// Area left over after reserving header, footer and side panels.
    pub available: Rect,
    /// Uniform design-to-screen scale.
    pub scale: f32,
    /// Screen position of the design-space origin.
    pub offset: Vec2,
}

impl Layout {
    pub fn compute(viewport: Viewport, config: &GameConfig) -> Self {
        let device = viewport.device_class(config);
        let available = available_space(viewport, device, config);

        let fit = match device {
            DeviceClass::Mobile => config.mobile_scale,
            DeviceClass::Desktop => config.desktop_scale,
        };
        let scale_x = available.width() / config.design_width * fit;
        let scale_y = available.height() / config.design_height * fit;
        // Degenerate viewports can leave a negative band; never mirror the design.
        let scale = scale_x.min(scale_y).max(0.0);

        let offset = Vec2::new(
            available.left + (available.width() - config.design_width * scale) / 2.0,
            available.top + (available.height() - config.design_height * scale) / 2.0,
        );

        Self { viewport, device, available, scale, offset }
    }

    /// Map a design-space point to the screen.
    pub fn to_screen(&self, logical: Vec2) -> Vec2 {
        self.offset + logical * self.scale
    }

    /// Write screen positions for every star.
    pub fn apply(&self, stars: &mut [Star]) {
        for star in stars {
            star.screen = self.to_screen(star.logical());
        }
    }
}

/// Rectangle free of page chrome, with the minimum-size fallback applied.
fn available_space(viewport: Viewport, device: DeviceClass, config: &GameConfig) -> Rect {
    let Viewport { width, height } = viewport;
    let mut rect = match device {
        DeviceClass::Mobile => Rect {
            left: config.mobile_side_margin,
            right: width - config.mobile_side_margin,
            top: config.header_mobile,
            bottom: height - config.footer_mobile,
        },
        DeviceClass::Desktop => Rect {
            left: config.desktop_left_panel,
            right: width - config.desktop_right_panel,
            top: config.header_desktop,
            bottom: height - config.footer_desktop,
        },
    };

    match device {
        DeviceClass::Mobile => {
            if rect.height() < height * config.min_space_fraction {
                let (top, bottom) = config.mobile_fallback_band;
                rect.top = height * top;
                rect.bottom = height * bottom;
            }
        }
        DeviceClass::Desktop => {
            if rect.width() < width * config.min_space_fraction {
                let (left, right) = config.desktop_fallback_band;
                rect.left = width * left;
                rect.right = width * right;
            }
        }
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarDef;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let config = GameConfig::default();
        assert_eq!(Viewport::new(768.0, 900.0).device_class(&config), DeviceClass::Mobile);
        assert_eq!(Viewport::new(769.0, 900.0).device_class(&config), DeviceClass::Desktop);
    }

    #[test]
    fn desktop_reserves_side_panels() {
        let config = GameConfig::default();
        let layout = Layout::compute(Viewport::new(1920.0, 1080.0), &config);
        assert_eq!(layout.device, DeviceClass::Desktop);
        assert_eq!(layout.available, Rect { left: 390.0, top: 120.0, right: 1600.0, bottom: 1000.0 });

        // Width 1210 → 1.5125, height 880 → 1.4667; height wins.
        let expected = 880.0 / 600.0 * 0.9;
        assert!(approx(layout.scale, expected));
        // Centered in the available rectangle.
        let center = layout.to_screen(Vec2::new(400.0, 300.0));
        assert!(approx(center.x, (390.0 + 1600.0) / 2.0));
        assert!(approx(center.y, (120.0 + 1000.0) / 2.0));
    }

    #[test]
    fn narrow_desktop_falls_back_to_center_band() {
        let config = GameConfig::default();
        // 1000 - 390 - 320 = 290 < 300
        let layout = Layout::compute(Viewport::new(1000.0, 800.0), &config);
        assert!(approx(layout.available.left, 350.0));
        assert!(approx(layout.available.right, 650.0));
        assert_eq!(layout.available.top, 120.0);
    }

    #[test]
    fn mobile_uses_margins_and_smaller_scale() {
        let config = GameConfig::default();
        let layout = Layout::compute(Viewport::new(400.0, 800.0), &config);
        assert_eq!(layout.device, DeviceClass::Mobile);
        assert_eq!(layout.available, Rect { left: 20.0, top: 90.0, right: 380.0, bottom: 740.0 });
        assert!(approx(layout.scale, 360.0 / 800.0 * 0.8));
    }

    #[test]
    fn short_mobile_falls_back_to_vertical_band() {
        let config = GameConfig::default();
        // 200 - 90 - 60 = 50 < 60
        let layout = Layout::compute(Viewport::new(700.0, 200.0), &config);
        assert!(approx(layout.available.top, 50.0));
        assert!(approx(layout.available.bottom, 150.0));
    }

    #[test]
    fn scale_is_uniform_and_never_negative() {
        let config = GameConfig::default();
        let layout = Layout::compute(Viewport::new(800.0, 100.0), &config);
        assert!(layout.scale >= 0.0);
        let a = layout.to_screen(Vec2::new(0.0, 0.0));
        let b = layout.to_screen(Vec2::new(800.0, 600.0));
        assert!(approx((b.x - a.x) / 800.0, (b.y - a.y) / 600.0));
    }

    #[test]
    fn apply_writes_star_positions() {
        let config = GameConfig::default();
        let layout = Layout::compute(Viewport::new(1920.0, 1080.0), &config);
        let mut stars = vec![Star::from_def(&StarDef {
            id: "a".into(),
            name: "A".into(),
            meaning: String::new(),
            story: String::new(),
            cultural: String::new(),
            color: "#FFFFFF".into(),
            x: 0.0,
            y: 0.0,
            brightness: 1.0,
            image: None,
        })];
        layout.apply(&mut stars);
        assert_eq!(stars[0].screen, layout.offset);
    }
}
