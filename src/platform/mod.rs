//! Platform abstraction layer
//!
//! The host polls the real device and hands the core an already-decoded
//! event list plus a single sample of the held movement keys per frame.

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Jump,
    Left,
    Right,
    Pause,
    Confirm,
    Back,
    /// Restart the current level from its start point
    Restart,
    /// Debug: jump straight to the next level
    SkipLevel,
}

/// A discrete input event (edge triggered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

/// Movement keys sampled once per frame (level triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// -1 for left, +1 for right, 0 for neither. Left wins when both are held.
    pub fn direction(&self) -> i32 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }
}

/// Everything the core reads from the input device in one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
}

impl FrameInput {
    /// Frame with a single key press and nothing held
    pub fn press(key: Key) -> Self {
        Self {
            events: vec![InputEvent::Pressed(key)],
            held: HeldKeys::default(),
        }
    }

    /// Was `key` pressed this frame?
    pub fn pressed(&self, key: Key) -> bool {
        self.events.contains(&InputEvent::Pressed(key))
    }
}
