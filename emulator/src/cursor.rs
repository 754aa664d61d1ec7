// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Cursor position, appearance, and the DECSC/DECRC snapshot.
//!
//! # Pending wrap
//!
//! After printing in the last column with autowrap on, the cursor logically
//! sits at "column `width`" without moving: `col` stays at the last real
//! column and [`CursorState::pending_wrap`] is set. The next printable
//! character first wraps to column 0 of the next row (scrolling if needed).
//! Every explicit cursor-motion command clears the flag; only glyph writes
//! honor it.

use crate::charset::CharsetState;
use crate::style::StyleRef;

/// DECSCUSR shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

/// The live cursor. `row < height` and `col < width` always hold; the
/// virtual "column W" state is carried by `pending_wrap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub row: u16,
    pub col: u16,
    pub visible: bool,
    pub shape: CursorShape,
    pub blink: bool,
    pub pending_wrap: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            visible: true,
            shape: CursorShape::Block,
            blink: true,
            pending_wrap: false,
        }
    }
}

impl CursorState {
    /// Move to an absolute position, clearing pending wrap (all motion
    /// commands funnel through here or through the clamped helpers in the
    /// implementation layer).
    pub fn move_to(&mut self, row: u16, col: u16) {
        self.row = row;
        self.col = col;
        self.pending_wrap = false;
    }

    /// Clamp into a `width × height` screen after a resize.
    pub fn clamp(&mut self, width: u16, height: u16) {
        self.row = self.row.min(height.saturating_sub(1));
        self.col = self.col.min(width.saturating_sub(1));
        self.pending_wrap = false;
    }
}

/// Everything DECSC captures: position, pending style, charset shift state,
/// origin mode, and the wrap flag. DECRC restores it wholesale.
#[derive(Debug, Clone)]
pub struct SavedCursor {
    pub row: u16,
    pub col: u16,
    pub pending_wrap: bool,
    pub style: StyleRef,
    pub charsets: CharsetState,
    pub origin_mode: bool,
}
