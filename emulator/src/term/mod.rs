// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The implementation layer: full VT semantics over the screen buffer.
//!
//! [`TerminalState`] aggregates everything a dispatched sequence can touch —
//! screen, cursor, modes, charsets, pending style, tab stops, palette,
//! graphics, response channel. The `impl_*_ops` files in this module hold
//! the real behavior behind the thin shims in [`crate::operations`], one
//! file per operation family, each with its unit tests:
//!
//! | File | Owns |
//! |------|------|
//! | [`impl_char_ops`]     | print/wrap/IRM/wide pairing, ICH/DCH/ECH/REP |
//! | [`impl_cursor_ops`]   | CUU/CUD/CUF/CUB/CUP/CHA/VPA, DECSC/DECRC, tabs |
//! | [`impl_erase_ops`]    | ED/EL and scrollback erase |
//! | [`impl_line_ops`]     | IL/DL |
//! | [`impl_scroll_ops`]   | LF/IND/RI/NEL, SU/SD, DECSTBM |
//! | [`impl_mode_ops`]     | SM/RM, DEC private modes, alternate screen |
//! | [`impl_osc_ops`]      | titles, palette, hyperlinks, clipboard |
//! | [`impl_terminal_ops`] | RIS, DECSTR, DECSCUSR, DSR/DA, DECRQSS |

use std::sync::Arc;

use crate::buffer::screen_buffer::ScreenBuffer;
use crate::charset::CharsetState;
use crate::cursor::CursorState;
use crate::emulator::EmulatorEvent;
use crate::graphics::GraphicsState;
use crate::modes::TerminalModes;
use crate::response::ResponseChannel;
use crate::style::{Style, StyleHandle, StyleRef, indexed_to_rgb};

// Attach.
pub mod impl_char_ops;
pub mod impl_cursor_ops;
pub mod impl_erase_ops;
pub mod impl_line_ops;
pub mod impl_mode_ops;
pub mod impl_osc_ops;
pub mod impl_scroll_ops;
pub mod impl_sgr_ops;
pub mod impl_terminal_ops;

/// Default foreground reported for OSC 10 queries.
pub const DEFAULT_FOREGROUND: (u8, u8, u8) = (0xd4, 0xd4, 0xd4);
/// Default background reported for OSC 11 queries.
pub const DEFAULT_BACKGROUND: (u8, u8, u8) = (0x0e, 0x0e, 0x0e);

/// The style the cursor currently holds, applied to every printed cell.
/// Mutations invalidate the cached intern reference; the reference is
/// re-interned lazily on the next print, so an SGR burst costs one intern.
#[derive(Debug, Clone)]
pub struct PendingStyle {
    pub value: Style,
    cached: Option<StyleRef>,
}

impl Default for PendingStyle {
    fn default() -> Self {
        Self { value: Style::default(), cached: None }
    }
}

impl PendingStyle {
    /// Mutate the pending style, dropping the cached reference.
    pub fn modify(&mut self, f: impl FnOnce(&mut Style)) {
        f(&mut self.value);
        self.cached = None;
    }

    pub fn reset(&mut self) {
        self.value = Style::default();
        self.cached = None;
    }

    /// The interned reference for the current value.
    pub fn style_ref(&mut self, styles: &StyleHandle) -> StyleRef {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }
        let interned = styles.table().intern(&self.value);
        self.cached = Some(interned.clone());
        interned
    }
}

/// Tab stops, default every 8 columns.
#[derive(Debug, Clone)]
pub struct TabStops {
    stops: Vec<bool>,
}

impl TabStops {
    #[must_use]
    pub fn new(width: u16) -> Self {
        let stops = (0..width).map(|col| col % 8 == 0).collect();
        Self { stops }
    }

    pub fn set(&mut self, col: u16) {
        if let Some(stop) = self.stops.get_mut(col as usize) {
            *stop = true;
        }
    }

    pub fn clear(&mut self, col: u16) {
        if let Some(stop) = self.stops.get_mut(col as usize) {
            *stop = false;
        }
    }

    pub fn clear_all(&mut self) { self.stops.fill(false); }

    /// Next stop strictly after `col`, or the last column.
    #[must_use]
    pub fn next_stop(&self, col: u16, width: u16) -> u16 {
        let last = width.saturating_sub(1);
        ((col + 1)..width)
            .find(|&c| self.stops.get(c as usize).copied().unwrap_or(false))
            .unwrap_or(last)
    }

    /// Previous stop strictly before `col`, or column 0.
    #[must_use]
    pub fn prev_stop(&self, col: u16) -> u16 {
        (0..col)
            .rev()
            .find(|&c| self.stops.get(c as usize).copied().unwrap_or(false))
            .unwrap_or(0)
    }

    /// Rebuild at the default 8-column cadence (resize semantics).
    pub fn rebuild(&mut self, width: u16) {
        self.stops = (0..width).map(|col| col % 8 == 0).collect();
    }
}

/// OSC 4 palette overrides on top of the standard xterm-256 palette.
#[derive(Debug, Clone)]
pub struct Palette {
    overrides: [Option<(u8, u8, u8)>; 256],
}

impl Default for Palette {
    fn default() -> Self { Self { overrides: [None; 256] } }
}

impl Palette {
    #[must_use]
    pub fn resolve(&self, index: u8) -> (u8, u8, u8) {
        self.overrides[index as usize].unwrap_or_else(|| indexed_to_rgb(index))
    }

    pub fn set(&mut self, index: u8, rgb: (u8, u8, u8)) {
        self.overrides[index as usize] = Some(rgb);
    }

    pub fn reset(&mut self, index: u8) { self.overrides[index as usize] = None; }

    pub fn reset_all(&mut self) { self.overrides = [None; 256]; }
}

/// What an in-flight DCS string is for, decided at hook time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcsKind {
    /// `DCS $ q … ST` — DECRQSS status-string request.
    RequestStatusString,
    /// Anything else (Sixel included): drained and dropped.
    Ignored,
}

/// DCS payload accumulation. Lives here (not in the parser) because the
/// payload streams in byte-wise and may span `feed` boundaries.
#[derive(Debug, Default)]
pub struct DcsBuffer {
    pub kind: Option<DcsKind>,
    pub data: Vec<u8>,
}

impl DcsBuffer {
    /// Payload cap; DECRQSS queries are tiny, everything else is dropped
    /// anyway.
    pub const MAX: usize = 256 * 1024;

    pub fn start(&mut self, kind: DcsKind) {
        self.kind = Some(kind);
        self.data.clear();
    }

    pub fn push(&mut self, byte: u8) {
        if self.kind == Some(DcsKind::RequestStatusString) && self.data.len() < Self::MAX {
            self.data.push(byte);
        }
    }

    pub fn finish(&mut self) -> Option<(DcsKind, Vec<u8>)> {
        let kind = self.kind.take()?;
        Some((kind, std::mem::take(&mut self.data)))
    }
}

/// Everything the dispatcher mutates. One per emulator; lives next to the
/// parser in the facade.
#[derive(Debug)]
pub struct TerminalState {
    pub screen: ScreenBuffer,
    pub cursor: CursorState,
    pub modes: TerminalModes,
    pub charsets: CharsetState,
    pub pending: PendingStyle,
    pub tabs: TabStops,
    pub title: Option<String>,
    pub palette: Palette,
    pub default_fg: (u8, u8, u8),
    pub default_bg: (u8, u8, u8),
    /// OSC 52 storage; the core never touches the OS clipboard.
    pub clipboard: Option<Vec<u8>>,
    pub graphics: GraphicsState,
    pub dcs: DcsBuffer,
    pub responses: ResponseChannel,
    pub events: Vec<EmulatorEvent>,
    pub styles: StyleHandle,
    pub utf8_mode: bool,
    /// Last printed grapheme base, for REP.
    pub last_printed: Option<char>,
}

impl TerminalState {
    #[must_use]
    pub fn new(
        width: u16,
        height: u16,
        scrollback_capacity: usize,
        kitty_graphics: bool,
        utf8_mode: bool,
        styles: StyleHandle,
    ) -> Self {
        let default_style = styles.table().default_style();
        Self {
            screen: ScreenBuffer::new(width, height, scrollback_capacity, default_style),
            cursor: CursorState::default(),
            modes: TerminalModes::default(),
            charsets: CharsetState::default(),
            pending: PendingStyle::default(),
            tabs: TabStops::new(width),
            title: None,
            palette: Palette::default(),
            default_fg: DEFAULT_FOREGROUND,
            default_bg: DEFAULT_BACKGROUND,
            clipboard: None,
            graphics: GraphicsState::new(kitty_graphics),
            dcs: DcsBuffer::default(),
            responses: ResponseChannel::default(),
            events: Vec::new(),
            styles,
            utf8_mode,
            last_printed: None,
        }
    }

    // -- shared helpers --

    #[must_use]
    pub fn width(&self) -> u16 { self.screen.width() }

    #[must_use]
    pub fn height(&self) -> u16 { self.screen.height() }

    /// Active scroll region top (inclusive).
    #[must_use]
    pub fn scroll_top(&self) -> u16 { self.screen.grid().scroll_top }

    /// Active scroll region bottom (inclusive).
    #[must_use]
    pub fn scroll_bottom(&self) -> u16 { self.screen.grid().scroll_bottom }

    /// The interned pending style (what printed cells get).
    pub fn pending_style_ref(&mut self) -> StyleRef {
        self.pending.style_ref(&self.styles)
    }

    /// Fill style for erase operations: background carries over, everything
    /// else resets (back-color erase).
    pub fn erase_fill(&mut self) -> StyleRef {
        let erase = self.pending.value.erase_style();
        self.styles.table().intern(&erase)
    }

    /// Fill style for operations that clear to true defaults (RIS, DECCOLM).
    pub fn default_fill(&self) -> StyleRef { self.styles.table().default_style() }

    pub fn push_event(&mut self, event: EmulatorEvent) { self.events.push(event); }

    /// Attach the active hyperlink (or detach) on the pending style.
    pub fn set_hyperlink(&mut self, link: Option<Arc<crate::style::Hyperlink>>) {
        self.pending.modify(|style| style.hyperlink = link);
    }
}
