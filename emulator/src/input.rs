// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Application-bound input reporting: mouse tracking (xterm 9/1000/1002/
//! 1003, SGR 1006), focus events (1004), and bracketed paste (2004).
//!
//! These are the reverse direction of `feed`: the embedder translates user
//! input into calls here, and the emulator encodes whatever the active
//! modes call for into bytes on the response channel (the same channel
//! DSR replies use). When no relevant mode is enabled nothing is emitted —
//! the embedder can call these unconditionally.

use crate::emulator::Emulator;
use crate::modes::MouseTracking;

/// Keyboard modifiers held during a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Press,
    Release,
    /// Pointer moved; `button` is whatever is held (None while hovering).
    Motion,
}

/// One pointer event in 0-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub button: Option<MouseButton>,
    pub row: u16,
    pub col: u16,
    pub modifiers: Modifiers,
}

impl Emulator {
    /// Report a mouse event to the application, honoring the active
    /// tracking level and encoding.
    pub fn report_mouse(&mut self, event: MouseEvent) {
        let modes = *self.modes();
        let wanted = match modes.mouse_tracking {
            MouseTracking::Off => false,
            MouseTracking::X10 => {
                event.kind == MouseEventKind::Press && !matches!(
                    event.button,
                    Some(MouseButton::WheelUp | MouseButton::WheelDown)
                )
            }
            MouseTracking::Normal => event.kind != MouseEventKind::Motion,
            MouseTracking::ButtonMotion => {
                event.kind != MouseEventKind::Motion || event.button.is_some()
            }
            MouseTracking::AnyMotion => true,
        };
        if !wanted {
            return;
        }

        let with_modifiers = modes.mouse_tracking != MouseTracking::X10;
        let code = encode_button(&event, with_modifiers);

        let report = if modes.sgr_mouse {
            let suffix = if event.kind == MouseEventKind::Release { 'm' } else { 'M' };
            format!("\x1b[<{code};{};{}{suffix}", event.col + 1, event.row + 1)
        } else {
            // Legacy encoding: printable range only, coordinates clamp at
            // 223 (255 - 32).
            let legacy_code = if event.kind == MouseEventKind::Release {
                (code & !0b11) | 3
            } else {
                code
            };
            let encode_pos = |pos: u16| -> char {
                char::from((pos + 1).min(223) as u8 + 32)
            };
            format!(
                "\x1b[M{}{}{}",
                char::from(legacy_code as u8 + 32),
                encode_pos(event.col),
                encode_pos(event.row)
            )
        };
        self.terminal_mut().responses.send_str(&report);
    }

    /// Report focus gained/lost (mode 1004).
    pub fn report_focus(&mut self, gained: bool) {
        if !self.modes().focus_events {
            return;
        }
        let report = if gained { "\x1b[I" } else { "\x1b[O" };
        self.terminal_mut().responses.send_str(report);
    }

    /// Deliver pasted text, bracketed when mode 2004 is on. The bytes go to
    /// the application through the response channel either way.
    pub fn paste(&mut self, text: &str) {
        let bracketed = self.modes().bracketed_paste;
        let term = self.terminal_mut();
        if bracketed {
            term.responses.send_str("\x1b[200~");
            term.responses.send_str(text);
            term.responses.send_str("\x1b[201~");
        } else {
            term.responses.send_str(text);
        }
    }
}

/// xterm button code: base button, motion flag, modifier bits.
fn encode_button(event: &MouseEvent, with_modifiers: bool) -> u16 {
    let mut code: u16 = match event.button {
        Some(MouseButton::Left) | None => 0,
        Some(MouseButton::Middle) => 1,
        Some(MouseButton::Right) => 2,
        Some(MouseButton::WheelUp) => 64,
        Some(MouseButton::WheelDown) => 65,
    };
    if event.kind == MouseEventKind::Motion {
        code += 32;
        if event.button.is_none() {
            code += 3;
        }
    }
    if with_modifiers {
        if event.modifiers.shift {
            code += 4;
        }
        if event.modifiers.alt {
            code += 8;
        }
        if event.modifiers.ctrl {
            code += 16;
        }
    }
    code
}
