// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! DECSTBM shim. See [`crate::term::impl_scroll_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

/// `CSI top ; bottom r` — both 1-based, both optional (defaulting to the
/// screen edges).
pub fn set_margins(performer: &mut SequencePerformer<'_>, params: &Params) {
    let top = params.get(0).filter(|&v| v != 0);
    let bottom = params.get(1).filter(|&v| v != 0);
    performer.term.set_scroll_region(top, bottom);
}
