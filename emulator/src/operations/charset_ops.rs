// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SCS and shift shims (`ESC ( F` family, SI/SO, SS2/SS3). See
//! [`crate::charset`].

use crate::performer::SequencePerformer;
use crate::protocols::esc_codes;

/// `ESC ( F` … `ESC + F`: map the intermediate to a slot and designate it.
pub fn designate_charset(
    performer: &mut SequencePerformer<'_>,
    intermediate: u8,
    final_byte: u8,
) {
    let slot = match intermediate {
        esc_codes::SCS_G0 => 0,
        esc_codes::SCS_G1 => 1,
        esc_codes::SCS_G2 => 2,
        esc_codes::SCS_G3 => 3,
        _ => return,
    };
    performer.term.charsets.designate(slot, final_byte);
}

/// SI (0x0F).
pub fn shift_in(performer: &mut SequencePerformer<'_>) {
    performer.term.charsets.shift_in();
}

/// SO (0x0E).
pub fn shift_out(performer: &mut SequencePerformer<'_>) {
    performer.term.charsets.shift_out();
}

/// SS2 / SS3.
pub fn single_shift(performer: &mut SequencePerformer<'_>, slot: usize) {
    performer.term.charsets.single_shift(slot);
}
