/// Input the game understands, already translated to canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click (or a finished touch when `touch` is set) at (x, y).
    Click { x: f32, y: f32, touch: bool },
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
    /// The reset button.
    Reset,
    /// The hint button.
    Hint,
    /// The info panel's close control.
    CloseInfo,
}

/// A queue of input events.
/// Browser handlers push events; the game drains them at the start of the
/// next frame, so a handler never observes a half-updated frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
