// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Scrollback: a bounded FIFO ring of rows evicted off the top of the
//! primary screen.
//!
//! Rows are moved into the ring (no copy) when a full-screen scroll pushes
//! them out, and are never mutated afterwards. When the ring is full the
//! oldest row is dropped. Rows keep the width they had at eviction time; a
//! later terminal resize does not rewrite history.

use std::collections::VecDeque;

use super::grid::Row;

#[derive(Debug, Clone)]
pub struct ScrollbackRing {
    rows: VecDeque<Row>,
    capacity: usize,
}

impl ScrollbackRing {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { rows: VecDeque::new(), capacity }
    }

    /// Append an evicted row, dropping the oldest when at capacity.
    pub fn push(&mut self, row: Row) {
        if self.capacity == 0 {
            return;
        }
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(row);
    }

    /// Remove and return the most recently evicted row (used when the screen
    /// grows and pulls history back into view).
    pub fn pop_newest(&mut self) -> Option<Row> { self.rows.pop_back() }

    /// Row `0` is the oldest retained row.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> { self.rows.get(index) }

    #[must_use]
    pub fn len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// ED 3 (xterm): erase saved lines.
    pub fn clear(&mut self) { self.rows.clear(); }
}
