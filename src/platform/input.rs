//! Input events and pointer translation

use std::collections::VecDeque;

/// An input that arrived between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Desired player paddle center, court space
    SetPlayerTarget(f32),
    /// Start a new match
    Restart,
}

/// FIFO of inputs, drained at the top of each frame
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        // Only the latest paddle target matters; collapse runs of moves
        if let InputEvent::SetPlayerTarget(y) = event {
            if let Some(InputEvent::SetPlayerTarget(last)) = self.events.back_mut() {
                *last = y;
                return;
            }
        }
        self.events.push_back(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Convert a pointer Y relative to the canvas element's top edge into court
/// space. The element may be CSS-scaled, so the offset is rescaled by
/// `court_height / element_height`. Degenerate element sizes pass the offset
/// through unscaled.
pub fn pointer_to_court_y(offset_y: f32, element_height: f32, court_height: f32) -> f32 {
    if element_height > 0.0 {
        offset_y * court_height / element_height
    } else {
        offset_y
    }
}
