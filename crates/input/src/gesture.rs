//! Swipe detection for pointer input.
//!
//! A press anchors the gesture. Each drag sample is compared with the
//! anchor; once the pointer has travelled more than `threshold` cells along
//! the dominant axis, a command fires and that axis is re-anchored, so a long
//! drag keeps producing commands:
//!
//! | Swipe | Command |
//! |-------|---------|
//! | left | `MoveLeft` |
//! | right | `MoveRight` |
//! | down | `SoftDrop` |
//! | up | `Rotate` |
//!
//! If no command fired for more than `window_ms`, the next sample only
//! re-anchors. Slow drifts never trigger anything.

use crate::types::Command;

#[derive(Debug, Clone, Copy)]
struct Anchor {
    x: i32,
    y: i32,
    at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: u16,
    window_ms: u64,
    anchor: Option<Anchor>,
}

impl SwipeDetector {
    pub fn new(threshold: u16, window_ms: u64) -> Self {
        Self {
            threshold,
            window_ms,
            anchor: None,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Pointer went down
    pub fn press(&mut self, x: u16, y: u16, now_ms: u64) {
        self.anchor = Some(Anchor {
            x: x as i32,
            y: y as i32,
            at_ms: now_ms,
        });
    }

    /// Pointer moved while down
    pub fn drag(&mut self, x: u16, y: u16, now_ms: u64) -> Option<Command> {
        let anchor = self.anchor.as_mut()?;
        let (x, y) = (x as i32, y as i32);

        if now_ms.saturating_sub(anchor.at_ms) > self.window_ms {
            *anchor = Anchor { x, y, at_ms: now_ms };
            return None;
        }

        let dx = x - anchor.x;
        let dy = y - anchor.y;
        let threshold = self.threshold as i32;

        if dx.abs() > threshold && dx.abs() > dy.abs() {
            anchor.x = x;
            anchor.at_ms = now_ms;
            Some(if dx > 0 {
                Command::MoveRight
            } else {
                Command::MoveLeft
            })
        } else if dy.abs() > threshold && dy.abs() > dx.abs() {
            anchor.y = y;
            anchor.at_ms = now_ms;
            Some(if dy > 0 {
                Command::SoftDrop
            } else {
                Command::Rotate
            })
        } else {
            None
        }
    }

    /// Pointer went up
    pub fn release(&mut self) {
        self.anchor = None;
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(2, 300)
    }
}
