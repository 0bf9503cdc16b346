use matariki_engine::{ConstellationGame, InputEvent, Surface, Viewport};

use crate::bindings::{frame_dt, AnimationLoop, Listener};
use crate::canvas::CanvasSurface;
use crate::panels::DomPanels;

/// Drives one [`ConstellationGame`] inside the page.
///
/// Lives in the crate's `thread_local!` slot because wasm-bindgen cannot
/// export it directly. Each animation frame it ticks the game, pushes panel
/// updates to the DOM and repaints the canvas. Dropping it unregisters every
/// browser callback it owns.
pub struct GameRunner {
    game: ConstellationGame,
    surface: CanvasSurface,
    panels: DomPanels,
    last_frame: Option<f64>,
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<Listener>,
}

impl GameRunner {
    pub fn new(game: ConstellationGame, surface: CanvasSurface, panels: DomPanels) -> Self {
        log::info!("rendering through {}", surface.backend());
        Self {
            game,
            surface,
            panels,
            last_frame: None,
            frame_loop: None,
            listeners: Vec::new(),
        }
    }

    /// Take ownership of the callbacks that feed this runner.
    pub fn attach(&mut self, frame_loop: AnimationLoop, listeners: Vec<Listener>) {
        self.frame_loop = Some(frame_loop);
        self.listeners = listeners;
    }

    pub fn game(&self) -> &ConstellationGame {
        &self.game
    }

    /// Queue input for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.game.push_input(event);
    }

    /// Resize the canvas now; the game relayouts on its next tick.
    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        self.push_input(InputEvent::Resize {
            width: viewport.width,
            height: viewport.height,
        });
    }

    /// One animation frame at rAF time `timestamp` (ms).
    pub fn frame(&mut self, timestamp: f64) {
        let dt = frame_dt(self.last_frame, timestamp);
        self.last_frame = Some(timestamp);
        self.game.tick(dt);
        self.present();
    }

    /// Flush panel updates and repaint without advancing time.
    pub fn present(&mut self) {
        for event in self.game.drain_events() {
            self.panels.apply(&event);
        }
        self.game.render(&mut self.surface);
    }

    /// Stop the frame loop and unregister listeners.
    pub fn stop(&mut self) {
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        self.listeners.clear();
        log::info!("runner stopped after {} ticks", self.game.ticks());
    }
}
