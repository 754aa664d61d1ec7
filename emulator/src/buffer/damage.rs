// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Dirty-row tracking and the damage format renderers consume.
//!
//! Every buffer mutation marks its row(s) dirty. [`DirtyRows::take`] drains
//! the set; the emulator facade pairs each drained index with a clone of the
//! row's cells as a [`RowPatch`]. A patch is an authoritative replacement
//! for the named row.

use super::cell::Cell;

/// One changed row, as handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPatch {
    pub row: u16,
    pub cells: Vec<Cell>,
}

/// Set of row indices changed since the last damage poll.
#[derive(Debug, Clone)]
pub struct DirtyRows {
    flags: Vec<bool>,
    any: bool,
}

impl DirtyRows {
    #[must_use]
    pub fn new(height: u16) -> Self {
        Self { flags: vec![false; height as usize], any: false }
    }

    pub fn mark(&mut self, row: u16) {
        if let Some(flag) = self.flags.get_mut(row as usize) {
            *flag = true;
            self.any = true;
        }
    }

    pub fn mark_range(&mut self, first: u16, last: u16) {
        for row in first..=last {
            self.mark(row);
        }
    }

    pub fn mark_all(&mut self) {
        self.flags.fill(true);
        self.any = !self.flags.is_empty();
    }

    /// Drain: returns the dirty indices in ascending order and clears them.
    pub fn take(&mut self) -> Vec<u16> {
        if !self.any {
            return Vec::new();
        }
        let mut rows = Vec::new();
        for (i, flag) in self.flags.iter_mut().enumerate() {
            if *flag {
                rows.push(i as u16);
                *flag = false;
            }
        }
        self.any = false;
        rows
    }

    #[must_use]
    pub fn is_dirty(&self, row: u16) -> bool {
        self.flags.get(row as usize).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn any_dirty(&self) -> bool { self.any }

    /// Resize to a new height. Freshly exposed rows start dirty so the first
    /// post-resize frame is coherent.
    pub fn resize(&mut self, height: u16) {
        self.flags.resize(height as usize, true);
        self.mark_all();
    }
}
