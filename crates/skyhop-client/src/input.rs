use std::collections::HashSet;

use skyhop_core::input::InputSnapshot;

/// Keyboard state fed by browser key events between frames. The simulation
/// never sees individual events, only the `snapshot()` taken at the start
/// of each update.
pub struct InputState {
    /// Keys currently held down, by `KeyboardEvent.code`.
    keys_down: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
        }
    }

    /// Register a key press.
    pub fn on_key_down(&mut self, code: String) {
        self.keys_down.insert(code);
    }

    /// Register a key release.
    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    fn is_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Map held keys to the logical actions: arrows or WASD to steer,
    /// ArrowUp/W/Space to jump.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_down("ArrowLeft") || self.is_down("KeyA"),
            right: self.is_down("ArrowRight") || self.is_down("KeyD"),
            jump: self.is_down("ArrowUp") || self.is_down("KeyW") || self.is_down("Space"),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
