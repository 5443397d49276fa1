//! Scene Events
//!
//! Input is translated into [`SceneEvent`]s and queued; each scene drains
//! its queue once per frame before updating.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// Launch the arrow
    Fire,
    /// Return the arrow to its start
    Reset,
    /// Fire a cannonball
    Shoot,
    /// Leave the scene
    Exit,
}

#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SceneEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SceneEvent) {
        self.events.push_back(event);
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = SceneEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(SceneEvent::Fire);
        queue.push(SceneEvent::Reset);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![SceneEvent::Fire, SceneEvent::Reset]);
        assert!(queue.is_empty());
    }
}
