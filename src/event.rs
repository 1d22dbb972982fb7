// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! This module provides a unified input Event.
//! Events read by an adapter (SDL, or a scripted one in tests) are converted
//! here and then handled by the render loop.
//!
//! Keys are identified by their symbolic code. The physical scan code is
//! carried along for logging only, so the same logical key is recognised on
//! every keyboard layout.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Event {
    /// Platform quit request (window closed, SIGINT, ...)
    Quit,
    Key(KeyEvent),
    /// Anything the render loop does not care about
    Other,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    Esc,
    Other,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyEventKind {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
    /// Physical key location as reported by the platform
    pub scancode: Option<i32>,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            kind,
            scancode: None,
        }
    }

    pub const fn with_scancode(mut self, scancode: i32) -> KeyEvent {
        self.scancode = Some(scancode);
        self
    }

    pub fn is_down(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        KeyEvent::new(code, KeyEventKind::Press)
    }
}

impl Event {
    /// quit, or escape pressed
    pub fn is_exit(&self) -> bool {
        match self {
            Event::Quit => true,
            Event::Key(ke) => ke.code == KeyCode::Esc && ke.is_down(),
            Event::Other => false,
        }
    }
}
