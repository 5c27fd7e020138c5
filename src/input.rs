//! Input gateway
//!
//! Key names are decoded into [`Action`]s once, here. The simulation only
//! ever sees a normalized direction and one-shot requests in a
//! [`TickInput`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Dash,
    Pause,
    Restart,
}

impl Action {
    /// Decode a host key name (case-insensitive). Unknown keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" | "up" | "arrowup" => Some(Action::MoveUp),
            "s" | "down" | "arrowdown" => Some(Action::MoveDown),
            "a" | "left" | "arrowleft" => Some(Action::MoveLeft),
            "d" | "right" | "arrowright" => Some(Action::MoveRight),
            "space" | " " => Some(Action::Dash),
            "escape" | "esc" => Some(Action::Pause),
            "r" => Some(Action::Restart),
            _ => None,
        }
    }

    fn direction(&self) -> Option<Vec2> {
        // Screen coordinates: y grows downward
        match self {
            Action::MoveUp => Some(Vec2::new(0.0, -1.0)),
            Action::MoveDown => Some(Vec2::new(0.0, 1.0)),
            Action::MoveLeft => Some(Vec2::new(-1.0, 0.0)),
            Action::MoveRight => Some(Vec2::new(1.0, 0.0)),
            _ => None,
        }
    }
}

/// A press or release coming from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Held directions plus pending one-shot requests
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    dash: bool,
    pause: bool,
    restart: bool,
    /// Hand control to the autopilot
    pub idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(action) => self.press(action),
            InputEvent::Released(action) => self.release(action),
        }
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.up = true,
            Action::MoveDown => self.down = true,
            Action::MoveLeft => self.left = true,
            Action::MoveRight => self.right = true,
            Action::Dash => self.dash = true,
            Action::Pause => self.pause = true,
            Action::Restart => self.restart = true,
        }
    }

    /// Releasing a one-shot action does not cancel a pending request
    pub fn release(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.up = false,
            Action::MoveDown => self.down = false,
            Action::MoveLeft => self.left = false,
            Action::MoveRight => self.right = false,
            Action::Dash | Action::Pause | Action::Restart => {}
        }
    }

    /// Unit direction from held keys; opposite keys cancel out
    pub fn move_direction(&self) -> Vec2 {
        let held = [
            (self.up, Action::MoveUp),
            (self.down, Action::MoveDown),
            (self.left, Action::MoveLeft),
            (self.right, Action::MoveRight),
        ];
        held.iter()
            .filter(|(on, _)| *on)
            .filter_map(|(_, action)| action.direction())
            .sum::<Vec2>()
            .normalize_or_zero()
    }

    /// Build the input for the next tick and clear one-shot requests
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            direction: self.move_direction(),
            dash: self.dash,
            pause: self.pause,
            restart: self.restart,
            idle_mode: self.idle_mode,
        };
        self.dash = false;
        self.pause = false;
        self.restart = false;
        input
    }
}
