// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Thin per-family shims between the parser's dispatch events and the
//! implementation layer in [`crate::term`].
//!
//! Each function here does exactly two things: translate sequence
//! parameters (1-based → 0-based, missing/0 → default) and delegate to the
//! matching `TerminalState` method. No business logic lives at this layer,
//! and it intentionally has no direct unit tests — the implementation layer
//! carries unit tests, and the conformance suites cover the full pipeline
//! through the public facade.

// Attach.
pub mod char_ops;
pub mod charset_ops;
pub mod cursor_ops;
pub mod dsr_ops;
pub mod line_ops;
pub mod margin_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod scroll_ops;
pub mod sgr_ops;
pub mod terminal_ops;
