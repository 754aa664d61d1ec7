// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Character-set designation and shifting through the wire.

use pretty_assertions::assert_eq;

use super::fixtures::*;

#[test]
fn dec_graphics_draws_boxes() {
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b(0lqqk\x1b(B");
    assert_row(&emu, 0, "┌──┐");
}

#[test]
fn locking_shifts_switch_between_g0_and_g1() {
    let mut emu = new_emulator(10, 3);
    // G1 = DEC graphics; SO activates it, SI returns to ASCII.
    feed_str(&mut emu, "\x1b)0q\x0eq\x0fq");
    assert_row(&emu, 0, "q─q");
}

#[test]
fn single_shift_affects_one_character() {
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b*0\x1bNqq");
    assert_row(&emu, 0, "─q");
}

#[test]
fn uk_charset_rewrites_hash() {
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b(A#a");
    assert_row(&emu, 0, "£a");
}

#[test]
fn utf8_passes_through_designated_graphics() {
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b(0");
    emu.feed("é".as_bytes());
    assert_row(&emu, 0, "é");
}

#[test]
fn unknown_designations_fall_back_to_ascii() {
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b(Kq#");
    assert_row(&emu, 0, "q#");
}
