// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Cursor motion through the full pipeline: relative moves, absolute
//! positioning, save/restore, and tab navigation.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::protocols::csi_codes::CsiSequence;
use crate::protocols::esc_codes::EscSequence;
use crate::style::Color;

#[test]
fn relative_moves_with_defaults_and_counts() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorDown(3)));
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorForward(10)));
    assert_eq!((emu.cursor().row, emu.cursor().col), (3, 10));

    // Missing and zero parameters both mean 1.
    feed_str(&mut emu, "\x1b[A\x1b[0D");
    assert_eq!((emu.cursor().row, emu.cursor().col), (2, 9));
}

#[test]
fn moves_clamp_at_screen_edges() {
    let mut emu = new_emulator(10, 5);
    feed_str(&mut emu, "\x1b[99B\x1b[99C");
    assert_eq!((emu.cursor().row, emu.cursor().col), (4, 9));
    feed_str(&mut emu, "\x1b[99A\x1b[99D");
    assert_eq!((emu.cursor().row, emu.cursor().col), (0, 0));
}

#[test]
fn next_and_prev_line_reset_the_column() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "abc");
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorNextLine(2)));
    assert_eq!((emu.cursor().row, emu.cursor().col), (2, 0));

    feed_str(&mut emu, "xy");
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorPrevLine(1)));
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 0));
}

#[test]
fn cha_and_vpa_are_absolute_single_axis() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[5;5H");
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorColumn(12)));
    assert_eq!((emu.cursor().row, emu.cursor().col), (4, 11));
    feed_str(&mut emu, &format!("{}", CsiSequence::VerticalPosition(2)));
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 11));
    // HPA is the same motion as CHA.
    feed_str(&mut emu, "\x1b[3`");
    assert_eq!(emu.cursor().col, 2);
}

#[test]
fn hvp_behaves_like_cup() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[7;9f");
    assert_eq!((emu.cursor().row, emu.cursor().col), (6, 8));
}

#[test]
fn csi_save_restore_cursor() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[4;8H");
    feed_str(&mut emu, &format!("{}", CsiSequence::SaveCursor));
    feed_str(&mut emu, "\x1b[1;1H");
    feed_str(&mut emu, &format!("{}", CsiSequence::RestoreCursor));
    assert_eq!((emu.cursor().row, emu.cursor().col), (3, 7));
}

#[test]
fn decsc_restores_rendition_and_charset_too() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[31m\x1b(0\x1b[2;2H");
    feed_str(&mut emu, &format!("{}", EscSequence::SaveCursor));

    feed_str(&mut emu, "\x1b[0m\x1b(B\x1b[9;9H");
    feed_str(&mut emu, &format!("{}", EscSequence::RestoreCursor));

    // Restored: position, red foreground, DEC graphics G0.
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 1));
    feed_str(&mut emu, "q");
    let frame = emu.snapshot();
    assert_eq!(frame.cell(1, 1).unwrap().base_char(), '─');
    assert_eq!(frame.cell(1, 1).unwrap().style_value().fg, Color::Indexed(1));
}

#[test]
fn tab_stops_default_set_and_clear_via_sequences() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\t");
    assert_eq!(emu.cursor().col, 8);

    // Set a custom stop at column 12 (0-based 11).
    feed_str(&mut emu, "\x1b[1;12H");
    feed_str(&mut emu, &format!("{}", EscSequence::SetTab));
    feed_str(&mut emu, "\x1b[1;1H\t\t");
    assert_eq!(emu.cursor().col, 11);

    // CBT walks backwards.
    feed_str(&mut emu, &format!("{}", CsiSequence::TabBackward(2)));
    assert_eq!(emu.cursor().col, 0);

    // TBC 3 clears everything: HT then lands on the last column.
    feed_str(&mut emu, &format!("{}", CsiSequence::TabClear(3)));
    feed_str(&mut emu, "\t");
    assert_eq!(emu.cursor().col, 79);
}

#[test]
fn pending_wrap_is_cleared_by_motion_commands() {
    let mut emu = new_emulator(5, 3);
    feed_str(&mut emu, "abcde");
    assert!(emu.cursor().pending_wrap);
    feed_str(&mut emu, "\x1b[D");
    assert!(!emu.cursor().pending_wrap);
    feed_str(&mut emu, "x");
    assert_row(&emu, 0, "abcxe");
}
