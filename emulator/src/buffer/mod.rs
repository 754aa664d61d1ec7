// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The screen-buffer data model: styled cells in a `width × height` grid,
//! plus scrollback, the alternate screen, and dirty-row damage tracking.
//!
//! Layering inside this module:
//!
//! - [`cell`]: one grid position (grapheme + style reference + wide flags).
//! - [`grid`]: a rectangular page of rows with scroll-region primitives.
//!   Grid operations are mechanical (shift, fill, slice); they know nothing
//!   about cursors or modes.
//! - [`scrollback`]: bounded FIFO ring of rows evicted off the top of the
//!   primary grid. Rows are moved in, never copied, and never mutated after.
//! - [`screen_buffer`]: the pair of grids (primary + alternate) behind one
//!   active view, resize semantics, and the dirty-row set.
//! - [`damage`]: what renderers consume — row indices and [`RowPatch`]es.
//!
//! Terminal semantics (what a cursor write at the margin does, how erase
//! modes interact with the pending style) live one layer up in [`crate::term`].
//!
//! [`RowPatch`]: damage::RowPatch

// Attach.
pub mod cell;
pub mod damage;
pub mod grid;
pub mod screen_buffer;
pub mod scrollback;

// Re-export.
pub use cell::*;
pub use damage::*;
pub use grid::*;
pub use screen_buffer::*;
pub use scrollback::*;
