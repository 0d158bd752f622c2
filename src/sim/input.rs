//! Player input
//!
//! Hosts never touch the game state directly. Key and pointer events are
//! queued as [`InputEvent`]s and drained at the start of the next tick, which
//! folds them into the held-key flags and a pointer target.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// DOM key code for the left arrow
pub const KEY_CODE_LEFT: u32 = 37;
/// DOM key code for the right arrow
pub const KEY_CODE_RIGHT: u32 = 39;

/// The two keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM key code; anything but the arrows is ignored
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_CODE_LEFT => Some(Key::Left),
            KEY_CODE_RIGHT => Some(Key::Right),
            _ => None,
        }
    }
}

/// A raw event from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer x relative to the arena's left edge
    PointerMove(f32),
}

impl InputEvent {
    pub fn key_down(code: u32) -> Option<Self> {
        Key::from_key_code(code).map(InputEvent::KeyDown)
    }

    pub fn key_up(code: u32) -> Option<Self> {
        Key::from_key_code(code).map(InputEvent::KeyUp)
    }
}

/// Events waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop everything queued (used once the game is over)
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take all queued events, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// Held keys; a held key stays held until its key-up arrives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl InputState {
    /// Fold one frame's worth of events into the held flags.
    /// Returns the tick input; the last pointer move of the batch wins.
    pub fn apply(&mut self, events: impl IntoIterator<Item = InputEvent>) -> TickInput {
        let mut pointer_x = None;
        for event in events {
            match event {
                InputEvent::KeyDown(Key::Left) => self.left_pressed = true,
                InputEvent::KeyDown(Key::Right) => self.right_pressed = true,
                InputEvent::KeyUp(Key::Left) => self.left_pressed = false,
                InputEvent::KeyUp(Key::Right) => self.right_pressed = false,
                InputEvent::PointerMove(x) => pointer_x = Some(x),
            }
        }
        TickInput {
            left: self.left_pressed,
            right: self.right_pressed,
            pointer_x,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held (wins over left)
    pub right: bool,
    /// Latest pointer x this frame, unvalidated
    pub pointer_x: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_arrow_keys_recognised() {
        assert_eq!(Key::from_key_code(37), Some(Key::Left));
        assert_eq!(Key::from_key_code(39), Some(Key::Right));
        assert_eq!(Key::from_key_code(38), None);
        assert_eq!(Key::from_key_code(32), None);
        assert_eq!(InputEvent::key_down(65), None);
        assert_eq!(InputEvent::key_up(39), Some(InputEvent::KeyUp(Key::Right)));
    }

    #[test]
    fn test_held_keys_persist_across_frames() {
        let mut state = InputState::default();
        let input = state.apply([InputEvent::KeyDown(Key::Right)]);
        assert!(input.right && !input.left);

        // No events next frame: still held
        let input = state.apply([]);
        assert!(input.right);

        let input = state.apply([InputEvent::KeyUp(Key::Right)]);
        assert!(!input.right);
    }

    #[test]
    fn test_last_pointer_move_wins() {
        let mut state = InputState::default();
        let input = state.apply([
            InputEvent::PointerMove(100.0),
            InputEvent::KeyDown(Key::Left),
            InputEvent::PointerMove(250.0),
        ]);
        assert_eq!(input.pointer_x, Some(250.0));
        assert!(input.left);

        // Pointer targets are one-shot
        assert_eq!(state.apply([]).pointer_x, None);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown(Key::Left));
        queue.push(InputEvent::PointerMove(5.0));
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![InputEvent::KeyDown(Key::Left), InputEvent::PointerMove(5.0)]
        );
        assert!(queue.is_empty());
    }
}
