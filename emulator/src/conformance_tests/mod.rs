// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! End-to-end conformance suites.
//!
//! Everything here drives byte sequences through [`Emulator::feed`] and
//! asserts on the public outputs (frames, damage, responses, events) —
//! the full parser → dispatcher → buffer pipeline, as opposed to the unit
//! tests that live next to the implementation layer. Sequences are built
//! with the type-safe builders from [`crate::protocols`] wherever one
//! exists.
//!
//! [`Emulator::feed`]: crate::Emulator::feed

pub mod fixtures;

mod test_char_ops;
mod test_charset_ops;
mod test_cursor_ops;
mod test_invariants;
mod test_kitty_graphics;
mod test_line_scroll_ops;
mod test_mode_ops;
mod test_osc_ops;
mod test_reports;
mod test_sgr_ops;
