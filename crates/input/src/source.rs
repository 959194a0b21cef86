//! Crossterm-backed [`InputSource`].
//!
//! Keys go through [`map_key`]; left-button mouse drags go through a
//! [`SwipeDetector`], so a terminal with mouse reporting can be played by
//! swiping. Everything else is swallowed.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::gesture::SwipeDetector;
use crate::map::{map_key, should_quit};
use blockfall_core::{InputEvent, InputSource};

pub struct TerminalInput {
    swipe: SwipeDetector,
    started: Instant,
}

impl TerminalInput {
    pub fn new(swipe: SwipeDetector) -> Self {
        Self {
            swipe,
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn on_key(&self, key: KeyEvent) -> Option<InputEvent> {
        // Terminals without release events report holds as repeats.
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if should_quit(key) {
            return Some(InputEvent::Quit);
        }
        map_key(key).map(InputEvent::Command)
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Option<InputEvent> {
        let now = self.now_ms();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(mouse.column, mouse.row, now);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self
                .swipe
                .drag(mouse.column, mouse.row, now)
                .map(InputEvent::Command),
            MouseEventKind::Up(MouseButton::Left) => {
                self.swipe.release();
                None
            }
            _ => None,
        }
    }

    /// Translate one raw terminal event
    pub fn translate(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(_, _) => Some(InputEvent::Resize),
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(SwipeDetector::default())
    }
}

impl InputSource for TerminalInput {
    type Error = io::Error;

    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>, Self::Error> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let raw = event::read()?;
        Ok(self.translate(raw))
    }
}
