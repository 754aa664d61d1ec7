// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The public facade: one value that owns the parser and the terminal
//! state.
//!
//! ```
//! use raxol_emulator::{Emulator, EmulatorOptions};
//!
//! let mut emu = Emulator::new(80, 24, EmulatorOptions::default());
//! emu.feed(b"\x1b[31mhello\x1b[0m");
//!
//! let frame = emu.snapshot();
//! assert_eq!(frame.cells[0].base_char(), 'h');
//! for patch in emu.take_damage() {
//!     // hand changed rows to a renderer
//!     let _ = (patch.row, patch.cells);
//! }
//! ```
//!
//! # Contract
//!
//! - [`feed`] is infallible and synchronous: it runs the parser to
//!   quiescence and returns. Partial sequences are held in the parser, so
//!   any split of the input stream produces identical results.
//! - The emulator is single-owner: all methods take `&mut self` or `&self`
//!   and nothing blocks, spawns, or suspends. Run one emulator per session;
//!   instances are fully independent.
//! - Sequences that demand a reply emit bytes through the registered
//!   response sink (queued until one is registered).
//!
//! [`feed`]: Emulator::feed

use crate::buffer::cell::Cell;
use crate::buffer::damage::RowPatch;
use crate::cursor::{CursorShape, CursorState};
use crate::modes::TerminalModes;
use crate::parser::machine::Parser;
use crate::performer::SequencePerformer;
use crate::response::ResponseSink;
use crate::style::StyleHandle;
use crate::term::TerminalState;

/// Renderer-facing happenings that are not cell damage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulatorEvent {
    /// BEL was executed.
    Bell,
    /// OSC 0/1/2 changed the title.
    TitleChanged(String),
    /// ED 3 dropped the scrollback history.
    ScrollbackCleared,
}

/// Construction options. The defaults match a stock xterm-compatible
/// session.
#[derive(Debug, Clone)]
pub struct EmulatorOptions {
    /// Scrollback depth in rows; 0 disables history.
    pub scrollback: usize,
    /// Accept Kitty graphics APC transmissions.
    pub kitty_graphics: bool,
    /// Decode input as UTF-8 (off = 8-bit Latin-1/C1 operation).
    pub utf8_mode: bool,
    /// Use a private style intern table instead of the process-wide one.
    pub isolated_style_table: bool,
}

impl Default for EmulatorOptions {
    fn default() -> Self {
        Self {
            scrollback: 1000,
            kitty_graphics: true,
            utf8_mode: true,
            isolated_style_table: false,
        }
    }
}

/// A full copy of the visible grid plus cursor and title, for initial
/// paints and tests. Incremental consumers should prefer [`take_damage`].
///
/// [`take_damage`]: Emulator::take_damage
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width × height` cells.
    pub cells: Vec<Cell>,
    /// `(row, col)`, 0-based.
    pub cursor: (u16, u16),
    pub cursor_shape: CursorShape,
    pub show_cursor: bool,
    pub title: Option<String>,
}

impl Frame {
    /// Cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
    }
}

/// `resize` rejection. The emulator is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    #[error("terminal dimensions must be positive, got {width}x{height}")]
    NonPositive { width: u16, height: u16 },
}

/// The emulator core. See the [module docs](self) for the contract.
#[derive(Debug)]
pub struct Emulator {
    state: TerminalState,
    parser: Parser,
}

impl Emulator {
    /// Create an emulator with a blank `width × height` primary screen.
    /// Dimensions are clamped to at least 1×1.
    #[must_use]
    pub fn new(width: u16, height: u16, options: EmulatorOptions) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let styles = if options.isolated_style_table {
            StyleHandle::isolated()
        } else {
            StyleHandle::Global
        };
        Self {
            state: TerminalState::new(
                width,
                height,
                options.scrollback,
                options.kitty_graphics,
                options.utf8_mode,
                styles,
            ),
            parser: Parser::new(options.utf8_mode),
        }
    }

    /// Parse and apply a chunk of PTY output. Absorbs all in-stream errors;
    /// incomplete trailing sequences carry over to the next call.
    pub fn feed(&mut self, bytes: &[u8]) {
        let Self { state, parser } = self;
        let mut performer = SequencePerformer { term: state };
        parser.advance_bytes(&mut performer, bytes);
    }

    /// Resize the screen, preserving content (no reflow). The primary
    /// buffer exchanges rows with scrollback at the top; scroll regions
    /// reset to full screen and tab stops rebuild.
    ///
    /// # Errors
    ///
    /// [`ResizeError::NonPositive`] when either dimension is 0; the
    /// emulator state is untouched in that case.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), ResizeError> {
        if width == 0 || height == 0 {
            return Err(ResizeError::NonPositive { width, height });
        }
        let primary_active = !self.state.screen.is_alternate();
        let shift = self.state.screen.resize(width, height);

        // Primary content moved up (eviction) or down (pull-back); keep the
        // primary cursor on the row it was pointing at.
        if primary_active {
            let row = (i32::from(self.state.cursor.row) + shift)
                .clamp(0, i32::from(height) - 1) as u16;
            self.state.cursor.row = row;
        } else {
            let stash = &mut self.state.screen.primary_grid_mut().stashed_cursor;
            let row = (i32::from(stash.row) + shift).clamp(0, i32::from(height) - 1) as u16;
            stash.row = row;
            stash.clamp(width, height);
        }
        self.state.cursor.clamp(width, height);
        self.state.tabs.rebuild(width);
        Ok(())
    }

    /// Snapshot the full visible grid.
    #[must_use]
    pub fn snapshot(&self) -> Frame {
        Frame {
            width: self.state.width(),
            height: self.state.height(),
            cells: self.state.screen.snapshot_cells(),
            cursor: (self.state.cursor.row, self.state.cursor.col),
            cursor_shape: self.state.cursor.shape,
            show_cursor: self.state.modes.cursor_visible && self.state.cursor.visible,
            title: self.state.title.clone(),
        }
    }

    /// Drain the rows changed since the last call, each as an authoritative
    /// replacement.
    pub fn take_damage(&mut self) -> Vec<RowPatch> { self.state.screen.take_damage() }

    /// Drain non-damage events (bell, title changes, scrollback clears).
    pub fn take_events(&mut self) -> Vec<EmulatorEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Register the callback that receives DSR/DA/DECRQSS/Kitty replies and
    /// mouse/paste reporting. Replies queued before registration are
    /// flushed to it immediately.
    pub fn register_response_sink(&mut self, sink: ResponseSink) {
        self.state.responses.set_sink(sink);
    }

    /// Drain queued replies without registering a sink (poll style).
    pub fn take_responses(&mut self) -> Vec<Vec<u8>> {
        self.state.responses.take_queued()
    }

    // -- read-only views --

    #[must_use]
    pub fn width(&self) -> u16 { self.state.width() }

    #[must_use]
    pub fn height(&self) -> u16 { self.state.height() }

    #[must_use]
    pub fn cursor(&self) -> &CursorState { &self.state.cursor }

    #[must_use]
    pub fn modes(&self) -> &TerminalModes { &self.state.modes }

    #[must_use]
    pub fn title(&self) -> Option<&str> { self.state.title.as_deref() }

    #[must_use]
    pub fn is_alternate_screen(&self) -> bool { self.state.screen.is_alternate() }

    /// The aggregate state, exposed for integration points (renderers
    /// reading scrollback or the image store) and in-crate tests.
    #[must_use]
    pub fn terminal(&self) -> &TerminalState { &self.state }

    pub(crate) fn terminal_mut(&mut self) -> &mut TerminalState { &mut self.state }
}
