use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::color::Color;

/// Read-only star definition as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDef {
    pub id: String,
    pub name: String,
    pub meaning: String,
    pub story: String,
    pub cultural: String,
    /// `#rrggbb`.
    pub color: String,
    /// Position in the logical design space.
    pub x: f32,
    pub y: f32,
    /// 0.0 - 1.0.
    pub brightness: f32,
    #[serde(default)]
    pub image: Option<String>,
}

/// A star in the running session: the catalog definition plus per-session
/// flags and the screen position from the last layout pass.
#[derive(Debug, Clone)]
pub struct Star {
    pub def: StarDef,
    /// Parsed once from `def.color`.
    pub color: Color,
    pub discovered: bool,
    pub is_target: bool,
    pub jiggling: bool,
    pub celebrating: bool,
    /// Screen-space position, rewritten by every layout pass.
    pub screen: Vec2,
    /// Displacement applied while jiggling, re-rolled each tick.
    pub jiggle_offset: Vec2,
}

impl Star {
    pub fn from_def(def: &StarDef) -> Self {
        let color = Color::try_from_hex(&def.color).unwrap_or_else(|| {
            log::warn!("star '{}' has malformed color '{}', using white", def.id, def.color);
            Color::WHITE
        });
        Self {
            def: def.clone(),
            color,
            discovered: false,
            is_target: false,
            jiggling: false,
            celebrating: false,
            screen: Vec2::new(def.x, def.y),
            jiggle_offset: Vec2::ZERO,
        }
    }

    pub fn id(&self) -> &str {
        &self.def.id
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Logical position in the design space.
    pub fn logical(&self) -> Vec2 {
        Vec2::new(self.def.x, self.def.y)
    }

    /// Screen position including any jiggle displacement.
    pub fn draw_pos(&self) -> Vec2 {
        if self.jiggling {
            self.screen + self.jiggle_offset
        } else {
            self.screen
        }
    }
}

/// Decorative ambient point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStar {
    pub x: f32,
    pub y: f32,
    pub brightness: f32,
}
