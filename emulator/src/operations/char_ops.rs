// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Character printing and in-line editing shims (print, ICH/DCH/ECH/REP).
//!
//! See [`crate::term::impl_char_ops`] for the implementations and their
//! unit tests.

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

/// Printable character from Ground state.
pub fn print_char(performer: &mut SequencePerformer<'_>, ch: char) {
    performer.term.print_char(ch);
}

/// ICH — insert n blank characters at the cursor.
pub fn insert_chars(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.insert_chars(params.get_or(0, 1));
}

/// DCH — delete n characters at the cursor.
pub fn delete_chars(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.delete_chars(params.get_or(0, 1));
}

/// ECH — erase n characters in place.
pub fn erase_chars(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.erase_chars(params.get_or(0, 1));
}

/// REP — repeat the preceding graphic character n times.
pub fn repeat_char(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.repeat_last_char(params.get_or(0, 1));
}
