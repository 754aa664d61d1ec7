// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! OSC shim. The per-code grammar lives in [`crate::term::impl_osc_ops`].

use crate::performer::SequencePerformer;

pub fn dispatch_osc(performer: &mut SequencePerformer<'_>, payload: &[u8]) {
    performer.term.handle_osc(payload);
}
