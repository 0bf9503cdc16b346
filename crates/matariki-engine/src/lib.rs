pub mod api;
pub mod catalog;
pub mod core;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::error::{CatalogError, ConfigError};
pub use api::game::ConstellationGame;
pub use api::types::{PanelEvent, StarInfo};
pub use catalog::{BackgroundStar, Catalog, Star, StarDef};
pub use core::schedule::{Schedule, Timer};
pub use core::session::{Connection, Interaction, Phase, Session};
pub use core::time::{Clock, FixedTimestep};
pub use input::queue::{InputEvent, InputQueue};
pub use layout::{DeviceClass, Layout, Rect, Viewport};
pub use renderer::color::Color;
pub use renderer::commands::{CommandBuffer, DrawCommand};
pub use renderer::paint::{paint, Frame};
pub use renderer::surface::{Glow, GradientStop, Label, Surface};
pub use systems::effects::{EffectsState, HintFlash, Particle, Rng};
