// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! IL/DL, SU/SD, IND/RI/NEL, DECSTBM, and scrollback behavior through the
//! public facade.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::emulator::Emulator;
use crate::protocols::csi_codes::CsiSequence;

/// Four labeled rows on a 6×4 screen, cursor homed.
fn labeled_emulator() -> Emulator {
    let mut emu = new_emulator(6, 4);
    feed_str(&mut emu, "row0\r\nrow1\r\nrow2\r\nrow3\x1b[1;1H");
    emu
}

#[test]
fn il_and_dl_at_the_cursor_row() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("\x1b[2;1H{}", CsiSequence::InsertLine(1)));
    assert_eq!(row_text(&emu, 0), "row0  ");
    assert_eq!(row_text(&emu, 1), "      ");
    assert_eq!(row_text(&emu, 2), "row1  ");
    assert_eq!(row_text(&emu, 3), "row2  ");

    // IL pushed row3 off the region bottom; DL restores the order with a
    // blank tail.
    feed_str(&mut emu, &format!("{}", CsiSequence::DeleteLine(1)));
    assert_eq!(row_text(&emu, 1), "row1  ");
    assert_eq!(row_text(&emu, 2), "row2  ");
    assert_eq!(row_text(&emu, 3), "      ");
}

#[test]
fn su_scrolls_content_into_scrollback() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("{}", CsiSequence::ScrollUp(2)));
    assert_eq!(row_text(&emu, 0), "row2  ");
    assert_eq!(row_text(&emu, 2), "      ");
    assert_eq!(emu.terminal().screen.scrollback().len(), 2);
}

#[test]
fn sd_scrolls_down_and_discards() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("{}", CsiSequence::ScrollDown(1)));
    assert_eq!(row_text(&emu, 0), "      ");
    assert_eq!(row_text(&emu, 1), "row0  ");
    assert_eq!(row_text(&emu, 3), "row2  ");
}

#[test]
fn margins_confine_the_scroll() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("{}", CsiSequence::SetMargins(2, 3)));
    feed_str(&mut emu, &format!("{}", CsiSequence::ScrollUp(1)));
    assert_eq!(row_text(&emu, 0), "row0  ", "outside the region untouched");
    assert_eq!(row_text(&emu, 1), "row2  ");
    assert_eq!(row_text(&emu, 2), "      ");
    assert_eq!(row_text(&emu, 3), "row3  ");
    assert_eq!(emu.terminal().screen.scrollback().len(), 0);
}

#[test]
fn linefeed_at_region_bottom_scrolls_the_region() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("{}", CsiSequence::SetMargins(1, 2)));
    feed_str(&mut emu, "\x1b[2;1H\n");
    assert_eq!(row_text(&emu, 0), "row1  ");
    assert_eq!(row_text(&emu, 1), "      ");
    assert_eq!(row_text(&emu, 2), "row2  ", "below the region untouched");
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 0));
}

#[test]
fn reverse_index_at_region_top_scrolls_down() {
    let mut emu = labeled_emulator();
    feed_str(&mut emu, &format!("{}", CsiSequence::SetMargins(2, 3)));
    feed_str(&mut emu, "\x1b[2;1H\x1bM");
    assert_eq!(row_text(&emu, 0), "row0  ");
    assert_eq!(row_text(&emu, 1), "      ");
    assert_eq!(row_text(&emu, 2), "row1  ");
    assert_eq!(row_text(&emu, 3), "row3  ");
}

#[test]
fn nel_moves_to_column_zero_of_the_next_row() {
    let mut emu = new_emulator(8, 3);
    feed_str(&mut emu, "abc\x1bE");
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 0));
}

#[test]
fn scrollback_depth_is_bounded() {
    let mut emu = {
        let options = crate::emulator::EmulatorOptions {
            scrollback: 3,
            isolated_style_table: true,
            ..Default::default()
        };
        crate::emulator::Emulator::new(6, 2, options)
    };
    for i in 0..10 {
        feed_str(&mut emu, &format!("l{i}\r\n"));
    }
    assert_eq!(emu.terminal().screen.scrollback().len(), 3, "FIFO-bounded");
}

#[test]
fn origin_mode_confines_addressing_to_the_region() {
    let mut emu = new_emulator(10, 8);
    feed_str(&mut emu, "\x1b[3;6r\x1b[?6h");
    feed_str(&mut emu, "\x1b[1;1HX");
    let frame = emu.snapshot();
    assert_eq!(frame.cell(2, 0).unwrap().base_char(), 'X', "row 1 means region top");

    feed_str(&mut emu, "\x1b[99;1HY");
    let frame = emu.snapshot();
    assert_eq!(frame.cell(5, 0).unwrap().base_char(), 'Y', "clamped to region bottom");
}
