// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! A single grid cell: one grapheme plus a shared style reference.
//!
//! # Wide characters
//!
//! A width-2 glyph (CJK, most emoji) occupies two adjacent columns. The
//! leading cell carries the glyph and the [`CellFlags::WIDE`] flag; the
//! trailing column holds a placeholder cell flagged
//! [`CellFlags::WIDE_SPACER`] with the same style reference. The spacer is
//! never written independently: overwriting either half of the pair blanks
//! the partner (enforced in the grid layer).
//!
//! # Combining marks
//!
//! Combining codepoints do not get cells of their own; they are appended to
//! the grapheme of the preceding base cell. The grapheme is stored inline
//! (spilling to the heap only for long ZWJ sequences) so the common
//! one-`char` case never allocates.

use bitflags::bitflags;
use smallstr::SmallString;

use crate::style::{Style, StyleRef};

bitflags! {
    /// Per-cell flags for wide-character pairing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct CellFlags: u8 {
        /// Leading half of a width-2 glyph.
        const WIDE        = 1 << 0;
        /// Trailing placeholder of a width-2 glyph; cannot hold content.
        const WIDE_SPACER = 1 << 1;
    }
}

/// Inline grapheme storage. 8 bytes covers every BMP base char plus a
/// combining mark without heap allocation.
type Grapheme = SmallString<[u8; 8]>;

/// One grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    glyph: Grapheme,
    style: StyleRef,
    flags: CellFlags,
}

impl Cell {
    /// A printable cell. `wide` marks this as the leading half of a
    /// two-column glyph.
    #[must_use]
    pub fn new(ch: char, style: StyleRef, wide: bool) -> Self {
        let mut glyph = Grapheme::new();
        glyph.push(ch);
        Self {
            glyph,
            style,
            flags: if wide { CellFlags::WIDE } else { CellFlags::empty() },
        }
    }

    /// A blank (space) cell with the given style.
    #[must_use]
    pub fn blank(style: StyleRef) -> Self {
        let mut glyph = Grapheme::new();
        glyph.push(' ');
        Self { glyph, style, flags: CellFlags::empty() }
    }

    /// The trailing placeholder for a wide glyph written at the previous
    /// column. Shares the leading cell's style reference.
    #[must_use]
    pub fn wide_spacer(style: StyleRef) -> Self {
        let mut glyph = Grapheme::new();
        glyph.push(' ');
        Self { glyph, style, flags: CellFlags::WIDE_SPACER }
    }

    /// Append a combining codepoint to this cell's grapheme.
    pub fn push_combining(&mut self, ch: char) { self.glyph.push(ch); }

    /// The base codepoint of the grapheme.
    #[must_use]
    pub fn base_char(&self) -> char { self.glyph.chars().next().unwrap_or(' ') }

    /// The full grapheme (base plus combining marks).
    #[must_use]
    pub fn grapheme(&self) -> &str { self.glyph.as_str() }

    #[must_use]
    pub fn style(&self) -> &StyleRef { &self.style }

    #[must_use]
    pub fn style_value(&self) -> &Style { &self.style }

    #[must_use]
    pub fn flags(&self) -> CellFlags { self.flags }

    #[must_use]
    pub fn is_wide(&self) -> bool { self.flags.contains(CellFlags::WIDE) }

    #[must_use]
    pub fn is_spacer(&self) -> bool { self.flags.contains(CellFlags::WIDE_SPACER) }

    /// Display width: 2 for the leading half of a wide glyph, 0 for its
    /// spacer, 1 otherwise.
    #[must_use]
    pub fn width(&self) -> u8 {
        if self.is_wide() {
            2
        } else if self.is_spacer() {
            0
        } else {
            1
        }
    }

    /// True for a space with no spacer/wide marking (style is ignored; an
    /// erased cell with a colored background is still "blank").
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.flags.is_empty() && self.glyph.as_str() == " "
    }
}
