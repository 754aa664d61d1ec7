// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The ANSI/DEC byte-stream parser.
//!
//! A hand-written, byte-oriented state machine covering the classic DEC
//! state chart: Ground, Escape (+intermediates), the CSI family, OSC
//! strings, the DCS family, and SOS/PM/APC strings (APC payloads are
//! surfaced for Kitty graphics). The machine emits events through the
//! [`Perform`] trait and holds every piece of in-flight state — parameter
//! accumulator, intermediates, string payloads, UTF-8 residue — so a
//! sequence split across `feed` calls behaves exactly like one contiguous
//! slice.
//!
//! The parser never fails: malformed input degrades to the `CsiIgnore` /
//! `DcsIgnore` sinks or is consumed silently, and `CAN`/`SUB` abort any
//! sequence back to Ground.
//!
//! [`Perform`]: perform::Perform

// Attach.
pub mod machine;
pub mod params;
pub mod perform;

// Re-export.
pub use machine::*;
pub use params::*;
pub use perform::*;
