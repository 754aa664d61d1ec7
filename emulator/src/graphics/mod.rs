// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Kitty graphics: APC-framed image transmission.
//!
//! The protocol rides on APC strings shaped `G k=v,k=v,…;<base64 data>`.
//! [`control`] parses the control segment into a typed command; [`apc`]
//! drives chunk reassembly, decoding, and validation; [`store`] keeps the
//! sealed images and their placements for a renderer to consume.
//!
//! Errors never surface to `feed` — a bad transmission produces one error
//! response through the response channel and the image is discarded.

// Attach.
pub mod apc;
pub mod control;
pub mod store;

// Re-export.
pub use apc::*;
pub use control::*;
pub use store::*;
