// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! ICH/DCH/ECH/REP and the print path (wrap, insert mode, wide glyphs)
//! through the public facade.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::emulator::Emulator;
use crate::protocols::csi_codes::CsiSequence;

/// `"ABCDEFGHIJ"` in row 0 of a 10×4 screen.
fn alphabet_emulator() -> Emulator {
    let mut emu = new_emulator(10, 4);
    feed_str(&mut emu, "ABCDEFGHIJ\x1b[1;1H");
    emu
}

#[test]
fn dch_shifts_left_and_back_fills() {
    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(4), CsiSequence::DeleteChar(1)));
    assert_eq!(row_text(&emu, 0), "ABCEFGHIJ ");

    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(3), CsiSequence::DeleteChar(3)));
    assert_eq!(row_text(&emu, 0), "ABFGHIJ   ");
}

#[test]
fn dch_beyond_line_end_clamps() {
    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(9), CsiSequence::DeleteChar(5)));
    assert_eq!(row_text(&emu, 0), "ABCDEFGH  ");
}

#[test]
fn ich_inserts_blanks_and_discards_overflow() {
    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(4), CsiSequence::InsertChar(1)));
    assert_eq!(row_text(&emu, 0), "ABC DEFGHI");

    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(3), CsiSequence::InsertChar(3)));
    assert_eq!(row_text(&emu, 0), "AB   CDEFG");
}

#[test]
fn ech_erases_in_place() {
    let mut emu = alphabet_emulator();
    feed_str(&mut emu, &format!("{}{}", CsiSequence::CursorColumn(4), CsiSequence::EraseChar(2)));
    assert_eq!(row_text(&emu, 0), "ABC  FGHIJ");
}

#[test]
fn rep_repeats_the_last_graphic_char() {
    let mut emu = new_emulator(10, 2);
    feed_str(&mut emu, "x");
    feed_str(&mut emu, &format!("{}", CsiSequence::RepeatChar(4)));
    assert_eq!(row_text(&emu, 0), "xxxxx     ");
}

#[test]
fn autowrap_writes_continue_on_the_next_row() {
    let mut emu = new_emulator(5, 3);
    feed_str(&mut emu, "abcdefg");
    assert_eq!(row_text(&emu, 0), "abcde");
    assert_eq!(row_text(&emu, 1), "fg   ");
}

#[test]
fn autowrap_off_sticks_at_the_margin() {
    let mut emu = new_emulator(5, 3);
    feed_str(&mut emu, "\x1b[?7labcdefg");
    assert_eq!(row_text(&emu, 0), "abcdg");
    assert_eq!(row_text(&emu, 1), "     ");
}

#[test]
fn insert_mode_via_irm() {
    let mut emu = new_emulator(8, 2);
    feed_str(&mut emu, "world\x1b[1;1H\x1b[4h***");
    assert_eq!(row_text(&emu, 0), "***world");
    feed_str(&mut emu, "\x1b[4l");
    feed_str(&mut emu, "X");
    assert_eq!(row_text(&emu, 0), "***Xorld");
}

#[test]
fn wide_glyphs_round_trip_through_the_pipeline() {
    let mut emu = new_emulator(8, 2);
    feed_str(&mut emu, "a\u{4e16}b");
    let frame = emu.snapshot();
    assert!(frame.cell(0, 1).unwrap().is_wide());
    assert!(frame.cell(0, 2).unwrap().is_spacer());
    assert_eq!(frame.cell(0, 3).unwrap().base_char(), 'b');
    assert_eq!(emu.cursor().col, 4);
}

#[test]
fn overwriting_half_a_wide_pair_blanks_the_partner() {
    let mut emu = new_emulator(8, 2);
    feed_str(&mut emu, "\u{4e16}\x1b[1;2Hx");
    let frame = emu.snapshot();
    assert!(frame.cell(0, 0).unwrap().is_blank(), "base blanked");
    assert_eq!(frame.cell(0, 1).unwrap().base_char(), 'x');
}

#[test]
fn combining_accents_stay_in_one_cell() {
    let mut emu = new_emulator(8, 2);
    feed_str(&mut emu, "e\u{301}x");
    let frame = emu.snapshot();
    assert_eq!(frame.cell(0, 0).unwrap().grapheme(), "e\u{301}");
    assert_eq!(frame.cell(0, 1).unwrap().base_char(), 'x');
}
