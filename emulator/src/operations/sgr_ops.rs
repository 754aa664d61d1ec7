// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SGR shim. See [`crate::term::impl_sgr_ops`] for the parameter grammar
//! and its unit tests.

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn set_graphics_rendition(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.apply_sgr(params);
}
