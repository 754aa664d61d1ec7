// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Printing and in-line character editing: the glyph write path with
//! autowrap/pending-wrap, IRM, wide-cell pairing and combining marks, plus
//! ICH/DCH/ECH/REP.

use unicode_width::UnicodeWidthChar;

use crate::buffer::cell::Cell;

use super::TerminalState;

impl TerminalState {
    /// Print one character at the cursor, applying charset translation.
    /// This is the only operation that honors (and sets) the pending-wrap
    /// flag.
    pub fn print_char(&mut self, ch: char) {
        let ch = if !self.utf8_mode && (0xa0..=0xff).contains(&u32::from(ch)) {
            // 8-bit operation: GR range goes through the GR slot.
            self.charsets.map_gr(ch as u8)
        } else {
            self.charsets.map(ch)
        };
        self.print_glyph(ch);
    }

    /// Print an already-translated glyph (REP re-enters here so the stored
    /// character is not translated twice).
    pub fn print_glyph(&mut self, ch: char) {
        let width = UnicodeWidthChar::width(ch).unwrap_or(1) as u16;

        if width == 0 {
            self.attach_combining(ch);
            return;
        }

        // A glyph following a zero-width joiner fuses into the previous
        // cell: the whole ZWJ sequence renders as one grapheme.
        if self.fuse_after_zwj(ch) {
            return;
        }

        let wide = width == 2;
        let screen_width = self.width();

        // Deferred wrap from a previous print at the last column.
        if self.cursor.pending_wrap {
            if self.modes.autowrap {
                self.cursor.col = 0;
                self.cursor.pending_wrap = false;
                self.linefeed();
            } else {
                self.cursor.pending_wrap = false;
            }
        }

        // A wide glyph that cannot fit in the remaining columns.
        if wide && self.cursor.col + 1 >= screen_width {
            if self.modes.autowrap {
                self.cursor.col = 0;
                self.linefeed();
            } else {
                // Clipped at the right margin.
                return;
            }
        }

        if self.modes.insert {
            let fill = self.erase_fill();
            self.screen
                .insert_cells(self.cursor.row, self.cursor.col, width, &fill);
        }

        let style = self.pending_style_ref();
        let (row, col) = (self.cursor.row, self.cursor.col);
        self.screen.set_cell(row, col, Cell::new(ch, style.clone(), wide));
        if wide {
            self.screen.set_cell(row, col + 1, Cell::wide_spacer(style));
        }

        let advance = self.cursor.col + width;
        if advance >= screen_width {
            self.cursor.col = screen_width.saturating_sub(1);
            // In no-autowrap mode the cursor sticks at the margin and the
            // next glyph overwrites it; with autowrap the wrap is deferred.
            self.cursor.pending_wrap = self.modes.autowrap;
            if wide && self.modes.autowrap {
                // The wide glyph's spacer already occupies the last column.
                self.cursor.col = col;
                self.cursor.pending_wrap = true;
            }
        } else {
            self.cursor.col = advance;
        }
        self.last_printed = Some(ch);
    }

    /// The cell a zero-width codepoint would extend: the cell just written,
    /// accounting for pending wrap and wide bases.
    fn combining_target(&self) -> Option<(u16, u16)> {
        if self.cursor.pending_wrap {
            return Some((self.cursor.row, self.cursor.col));
        }
        if self.cursor.col == 0 {
            return None;
        }
        let mut col = self.cursor.col - 1;
        // Step over a spacer onto its wide base.
        if self
            .screen
            .cell(self.cursor.row, col)
            .is_some_and(Cell::is_spacer)
            && col > 0
        {
            col -= 1;
        }
        Some((self.cursor.row, col))
    }

    /// Zero-width codepoint: extend the grapheme of the last written cell.
    fn attach_combining(&mut self, ch: char) {
        let Some((row, col)) = self.combining_target() else { return };
        let grid = self.screen.grid_mut();
        if let Some(base) = grid.rows[row as usize].cells.get_mut(col as usize) {
            base.push_combining(ch);
        }
        self.screen.mark_dirty(row);
    }

    /// If the previous cell's grapheme ends in U+200D, append this glyph to
    /// it instead of starting a new cell.
    fn fuse_after_zwj(&mut self, ch: char) -> bool {
        let Some((row, col)) = self.combining_target() else { return false };
        let ends_in_zwj = self
            .screen
            .cell(row, col)
            .is_some_and(|cell| cell.grapheme().ends_with('\u{200d}'));
        if !ends_in_zwj {
            return false;
        }
        let grid = self.screen.grid_mut();
        if let Some(base) = grid.rows[row as usize].cells.get_mut(col as usize) {
            base.push_combining(ch);
        }
        self.screen.mark_dirty(row);
        true
    }

    /// REP: repeat the last printed glyph `n` times. Bounded by one full
    /// screen so a hostile parameter cannot stall the stream.
    pub fn repeat_last_char(&mut self, n: u16) {
        let Some(ch) = self.last_printed else { return };
        let cap = self.width() as u32 * self.height() as u32;
        for _ in 0..u32::from(n).min(cap) {
            self.print_glyph(ch);
        }
    }

    /// ICH: insert `n` blank cells at the cursor, shifting the tail right.
    pub fn insert_chars(&mut self, n: u16) {
        self.cursor.pending_wrap = false;
        let fill = self.erase_fill();
        self.screen.insert_cells(self.cursor.row, self.cursor.col, n, &fill);
    }

    /// DCH: delete `n` cells at the cursor, shifting the tail left.
    pub fn delete_chars(&mut self, n: u16) {
        self.cursor.pending_wrap = false;
        let fill = self.erase_fill();
        self.screen.delete_cells(self.cursor.row, self.cursor.col, n, &fill);
    }

    /// ECH: blank `n` cells starting at the cursor, no shifting.
    pub fn erase_chars(&mut self, n: u16) {
        self.cursor.pending_wrap = false;
        let fill = self.erase_fill();
        let end = self.cursor.col.saturating_add(n.max(1));
        self.screen
            .erase_row_span(self.cursor.row, self.cursor.col, end, &fill);
    }
}
