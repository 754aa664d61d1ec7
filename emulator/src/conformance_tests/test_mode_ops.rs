// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Mode switching through the wire: DEC private sets/resets, the alternate
//! screen family, and mode-dependent behavior changes.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::cursor::CursorShape;
use crate::modes::MouseTracking;
use crate::protocols::csi_codes::CsiSequence;

#[test]
fn dectcem_controls_cursor_visibility() {
    let mut emu = new_emulator_80x24();
    assert!(emu.snapshot().show_cursor);
    feed_str(&mut emu, &format!("{}", CsiSequence::ResetPrivateMode(25)));
    assert!(!emu.snapshot().show_cursor);
    feed_str(&mut emu, &format!("{}", CsiSequence::SetPrivateMode(25)));
    assert!(emu.snapshot().show_cursor);
}

#[test]
fn multiple_modes_in_one_sequence() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[?25;7;2004h");
    assert!(emu.modes().cursor_visible);
    assert!(emu.modes().autowrap);
    assert!(emu.modes().bracketed_paste);
    feed_str(&mut emu, "\x1b[?7;2004l");
    assert!(!emu.modes().autowrap);
    assert!(!emu.modes().bracketed_paste);
}

#[test]
fn mouse_and_reporting_modes_toggle() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[?1003h\x1b[?1006h\x1b[?1004h");
    assert_eq!(emu.modes().mouse_tracking, MouseTracking::AnyMotion);
    assert!(emu.modes().sgr_mouse);
    assert!(emu.modes().focus_events);

    feed_str(&mut emu, "\x1b[?1003l\x1b[?1006l\x1b[?1004l");
    assert_eq!(emu.modes().mouse_tracking, MouseTracking::Off);
    assert!(!emu.modes().sgr_mouse);
}

#[test]
fn decscnm_marks_the_whole_screen_dirty() {
    let mut emu = new_emulator(10, 4);
    let _ = emu.take_damage();
    feed_str(&mut emu, "\x1b[?5h");
    assert!(emu.modes().reverse_video);
    assert_eq!(dirty_rows(&mut emu), vec![0, 1, 2, 3]);
}

#[test]
fn lnm_makes_lf_imply_cr() {
    let mut emu = new_emulator(10, 4);
    feed_str(&mut emu, "ab\n");
    assert_eq!((emu.cursor().row, emu.cursor().col), (1, 2), "LF alone keeps the column");

    feed_str(&mut emu, "\x1b[20hcd\n");
    assert_eq!((emu.cursor().row, emu.cursor().col), (2, 0), "LNM adds the CR");
}

#[test]
fn alt_screen_47_1047_1049_families() {
    // 47: plain switch, contents kept across exit/enter.
    let mut emu = new_emulator(10, 3);
    feed_str(&mut emu, "\x1b[?47hkeep\x1b[?47l\x1b[?47h");
    assert_row(&emu, 0, "keep");

    // 1047: clears the alternate screen on entry.
    feed_str(&mut emu, "\x1b[?47l\x1b[?1047h");
    assert_row(&emu, 0, "");

    // 1048 pairs with 1047 for cursor save/restore.
    let mut emu = new_emulator(10, 6);
    feed_str(&mut emu, "\x1b[3;4H\x1b[?1048h\x1b[1;1H\x1b[?1048l");
    assert_eq!((emu.cursor().row, emu.cursor().col), (2, 3));
}

#[test]
fn deccolm_clears_and_resets_margins() {
    let mut emu = new_emulator(12, 4);
    feed_str(&mut emu, "content\x1b[2;3r\x1b[?3h");
    assert_row(&emu, 0, "");
    assert_eq!((emu.cursor().row, emu.cursor().col), (0, 0));
    assert_eq!(emu.terminal().scroll_bottom(), 3);
}

#[test]
fn smooth_scroll_is_accepted_quietly() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[?4h");
    assert!(emu.modes().smooth_scroll);
    feed_str(&mut emu, "\x1b[?4l");
    assert!(!emu.modes().smooth_scroll);
}

#[test]
fn decscusr_shapes_flow_to_the_frame() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, &format!("{}", CsiSequence::CursorStyle(6)));
    let frame = emu.snapshot();
    assert_eq!(frame.cursor_shape, CursorShape::Bar);
    assert!(!emu.cursor().blink);

    feed_str(&mut emu, &format!("{}", CsiSequence::CursorStyle(0)));
    assert_eq!(emu.snapshot().cursor_shape, CursorShape::Block);
    assert!(emu.cursor().blink);
}

#[test]
fn soft_reset_via_wire() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[?6h\x1b[4h\x1b[5;10r");
    feed_str(&mut emu, &format!("{}", CsiSequence::SoftReset));
    assert!(!emu.modes().origin);
    assert!(!emu.modes().insert);
    assert_eq!(emu.terminal().scroll_bottom(), 23);
}

#[test]
fn hard_reset_via_wire() {
    let mut emu = new_emulator(10, 4);
    feed_str(&mut emu, "\x1b[31mtext\x1b]0;t\x07\x1b[?1049h");
    feed_str(&mut emu, "\x1bc");
    assert!(!emu.is_alternate_screen());
    assert_eq!(emu.title(), None);
    assert_row(&emu, 0, "");
    assert_eq!((emu.cursor().row, emu.cursor().col), (0, 0));
}
