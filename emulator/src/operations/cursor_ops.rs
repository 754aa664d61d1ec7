// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Cursor-motion shims (CUU/CUD/CUF/CUB, CNL/CPL, CHA/HPA, CUP/HVP, VPA,
//! CHT/CBT, SCP/RCP).
//!
//! All counts default missing/0 to 1 per VT100; absolute positions convert
//! from the wire's 1-based coordinates to 0-based buffer coordinates here.
//! See [`crate::term::impl_cursor_ops`] for the implementations.

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn cursor_up(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_up(params.get_or(0, 1));
}

pub fn cursor_down(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_down(params.get_or(0, 1));
}

pub fn cursor_forward(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_forward(params.get_or(0, 1));
}

pub fn cursor_backward(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_backward(params.get_or(0, 1));
}

pub fn cursor_next_line(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_next_line(params.get_or(0, 1));
}

pub fn cursor_prev_line(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_prev_line(params.get_or(0, 1));
}

/// CHA / HPA: 1-based column on the wire.
pub fn cursor_column(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_column(params.get_or(0, 1) - 1);
}

/// CUP / HVP: 1-based `row;col` on the wire.
pub fn cursor_position(performer: &mut SequencePerformer<'_>, params: &Params) {
    let row = params.get_or(0, 1) - 1;
    let col = params.get_or(1, 1) - 1;
    performer.term.cursor_position(row, col);
}

/// VPA: 1-based row, column unchanged.
pub fn vertical_position(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.cursor_row(params.get_or(0, 1) - 1);
}

pub fn tab_forward(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.tab_forward(params.get_or(0, 1));
}

pub fn tab_backward(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.tab_backward(params.get_or(0, 1));
}

pub fn save_cursor(performer: &mut SequencePerformer<'_>) {
    performer.term.save_cursor();
}

pub fn restore_cursor(performer: &mut SequencePerformer<'_>) {
    performer.term.restore_cursor();
}
