//! Platform-agnostic pointer input
//!
//! Host adapters (DOM listeners, winit, test harnesses) translate their
//! events into these calls; the viewer only reads the aggregated state.

use glam::Vec2;
use std::collections::HashSet;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Pointer and viewport state for the current frame
#[derive(Debug, Clone)]
pub struct Input {
    pressed_mouse: HashSet<MouseButton>,

    mouse_position: Option<Vec2>,
    mouse_delta: Vec2,
    scroll_delta: Vec2,

    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed_mouse: HashSet::new(),
            mouse_position: None,
            mouse_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            screen_size: Vec2::ZERO,
        }
    }

    // ========== System API (called by Viewer/Adapter) ==========

    /// Clears per-frame deltas. Held buttons persist.
    pub fn start_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                self.pressed_mouse.insert(button);
            }
            ButtonState::Released => {
                self.pressed_mouse.remove(&button);
            }
        }
    }

    /// The first reported position only seeds the cursor; deltas start with the second.
    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        if let Some(old) = self.mouse_position {
            self.mouse_delta += new_pos - old;
        }
        self.mouse_position = Some(new_pos);
    }

    pub fn inject_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta += Vec2::new(delta_x, delta_y);
    }

    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== Queries ==========

    #[must_use]
    pub fn get_mouse_button(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position.unwrap_or(Vec2::ZERO)
    }

    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
