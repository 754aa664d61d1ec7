// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! IL / DL shims. See [`crate::term::impl_line_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn insert_lines(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.insert_lines(params.get_or(0, 1));
}

pub fn delete_lines(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.delete_lines(params.get_or(0, 1));
}
