// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Wire-format vocabulary: named constants for CSI/ESC/SGR bytes and
//! parameters, plus type-safe sequence builders.
//!
//! The builders ([`CsiSequence`], [`EscSequence`], [`SgrCode`]) render the
//! exact byte sequences the parser consumes. Tests use them instead of
//! hand-typed escape strings, and the mouse/paste reporting path uses them
//! to build replies.
//!
//! [`CsiSequence`]: csi_codes::CsiSequence
//! [`EscSequence`]: esc_codes::EscSequence
//! [`SgrCode`]: sgr_codes::SgrCode

// Attach.
pub mod csi_codes;
pub mod esc_codes;
pub mod sgr_codes;

// Re-export.
pub use csi_codes::*;
pub use esc_codes::*;
pub use sgr_codes::*;
