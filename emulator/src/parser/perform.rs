// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The event interface between the state machine and the dispatcher.
//!
//! The parser produces a fixed, finite set of events; the dispatcher is a
//! match over them. Default implementations make every event optional so
//! test doubles can observe only what they care about.

use super::params::Params;

/// Receiver for parser events. Implemented by the sequence dispatcher and by
/// test recorders.
pub trait Perform {
    /// A printable character reached Ground state (already decoded from
    /// UTF-8 when that mode is active).
    fn print(&mut self, _ch: char) {}

    /// A C0 (or, in 8-bit operation, C1) control executed in place.
    fn execute(&mut self, _byte: u8) {}

    /// `ESC I... F` completed (non-CSI/OSC/DCS/APC).
    fn esc_dispatch(&mut self, _intermediates: &[u8], _byte: u8) {}

    /// A CSI sequence completed. `private_marker` is the `<`/`=`/`>`/`?`
    /// byte when present.
    fn csi_dispatch(
        &mut self,
        _private_marker: Option<u8>,
        _params: &Params,
        _intermediates: &[u8],
        _final_byte: char,
    ) {
    }

    /// A complete OSC payload (everything between `ESC ]` and its
    /// terminator, unsplit).
    fn osc_dispatch(&mut self, _payload: &[u8], _bell_terminated: bool) {}

    /// A DCS header completed; payload bytes follow via [`dcs_put`] until
    /// [`dcs_unhook`].
    ///
    /// [`dcs_put`]: Perform::dcs_put
    /// [`dcs_unhook`]: Perform::dcs_unhook
    fn dcs_hook(
        &mut self,
        _private_marker: Option<u8>,
        _params: &Params,
        _intermediates: &[u8],
        _final_byte: char,
    ) {
    }

    /// One DCS passthrough byte.
    fn dcs_put(&mut self, _byte: u8) {}

    /// The DCS string terminated (or was aborted).
    fn dcs_unhook(&mut self) {}

    /// A complete APC payload (Kitty graphics arrive here).
    fn apc_dispatch(&mut self, _payload: &[u8]) {}
}
