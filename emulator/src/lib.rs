// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Terminal emulator core: byte stream in, styled cell grid and damage out.
//!
//! This crate implements the hard parts of a terminal emulator as a single
//! synchronous value with no I/O of its own:
//!
//! ```text
//! ╭──────────────╮    ╭─────────────────╮    ╭──────────────────╮    ╭────────────╮
//! │ PTY / caller │───▶│ Parser          │───▶│ SequencePerformer│───▶│ Screen     │
//! │ (byte slice) │    │ (state machine) │    │ (dispatch)       │    │ buffer +   │
//! ╰──────────────╯    ╰─────────────────╯    ╰──────────────────╯    │ cursor +   │
//!                                                                    │ modes      │
//!                                                                    ╰────────────╯
//!                                                                          │
//!                                            ╭──────────────────╮          │
//!                                            │ Renderer         │◀─────────╯
//!                                            │ take_damage()    │   dirty rows
//!                                            ╰──────────────────╯
//! ```
//!
//! The [`Emulator`] facade owns everything: feed it bytes with
//! [`Emulator::feed`], poll changed rows with [`Emulator::take_damage`], and
//! take a full [`Frame`] with [`Emulator::snapshot`]. Sequences that require a
//! reply (DSR, DA, DECRQSS, Kitty graphics acks) are emitted through a
//! caller-registered response sink.
//!
//! # Layering
//!
//! The code follows a three-layer convention:
//!
//! - **Shim** ([`operations`]): parameter translation per sequence family,
//!   no business logic, no direct unit tests.
//! - **Implementation** ([`term`], [`buffer`]): the VT semantics, with unit
//!   tests next to the code.
//! - **Conformance** (`conformance_tests`, test builds only): end-to-end
//!   suites that drive byte sequences through the public facade.
//!
//! # Guarantees
//!
//! - Feeding `a ++ b` is observably identical to feeding `a` then `b`;
//!   partial sequences are preserved across calls.
//! - Malformed or unknown sequences never error and never desynchronize the
//!   parser; they are logged via [`tracing`] and skipped.
//! - The grid shape is exactly `width × height` after every operation, and
//!   every cell holds a valid interned style reference.
//!
//! One `Emulator` is single-owner and not thread-safe; independent instances
//! run in parallel without coordination. The only shared state is the
//! process-wide style intern table, which serializes interning internally.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod buffer;
pub mod charset;
pub mod cursor;
pub mod emulator;
pub mod graphics;
pub mod input;
pub mod modes;
pub mod operations;
pub mod parser;
pub mod performer;
pub mod protocols;
pub mod response;
pub mod style;
pub mod term;

// Re-export the public surface.
pub use buffer::cell::{Cell, CellFlags};
pub use buffer::damage::RowPatch;
pub use buffer::screen_buffer::ActiveBuffer;
pub use cursor::{CursorShape, CursorState};
pub use emulator::{Emulator, EmulatorEvent, EmulatorOptions, Frame, ResizeError};
pub use graphics::apc::GraphicsError;
pub use graphics::control::{KittyAction, KittyFormat};
pub use input::{Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use modes::{MouseTracking, TerminalModes};
pub use response::{ResponseChannel, ResponseSink};
pub use style::attribs::{StyleAttribs, UnderlineKind};
pub use style::color::Color;
pub use style::intern::StyleTable;
pub use style::style_def::{Hyperlink, Style, StyleRef};

// Conformance test suites (end-to-end, through the public facade).
#[cfg(test)]
mod conformance_tests;
