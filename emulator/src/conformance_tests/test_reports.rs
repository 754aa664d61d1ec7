// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Reply-producing sequences through the wire, and sink registration
//! semantics.

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

use super::fixtures::*;

#[test]
fn dsr_status_and_cursor_position() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[5n");
    assert_eq!(drain_responses(&mut emu), "\x1b[0n");

    feed_str(&mut emu, "\x1b[4;8H\x1b[6n");
    assert_eq!(drain_responses(&mut emu), "\x1b[4;8R");
}

#[test]
fn device_attributes_primary_and_secondary() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[c");
    assert_eq!(drain_responses(&mut emu), "\x1b[?62;22c");

    feed_str(&mut emu, "\x1b[>c");
    assert_eq!(drain_responses(&mut emu), "\x1b[>0;10;0c");
}

#[test]
fn decreqtparm_reply() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[x");
    assert_eq!(drain_responses(&mut emu), "\x1b[2;1;1;128;128;1;0x");
    feed_str(&mut emu, "\x1b[1x");
    assert_eq!(drain_responses(&mut emu), "\x1b[3;1;1;128;128;1;0x");
}

#[test]
fn decrqss_round_trip_including_split_payload() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[3;10r");
    // Split the DCS across feeds: the payload must survive the boundary.
    feed_str(&mut emu, "\x1bP$");
    feed_str(&mut emu, "qr\x1b\\");
    assert_eq!(drain_responses(&mut emu), "\x1bP1$r3;10r\x1b\\");

    feed_str(&mut emu, "\x1bP$qzz\x1b\\");
    assert_eq!(drain_responses(&mut emu), "\x1bP0$r\x1b\\");
}

#[test]
fn sixel_like_dcs_is_drained_quietly() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1bPq#0;2;0;0;0#0!10~-\x1b\\ok");
    assert_eq!(drain_responses(&mut emu), "");
    assert_row(&emu, 0, "ok");
}

#[test]
fn sink_receives_flushed_backlog_then_live_replies() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[5n");

    let seen: Arc<Mutex<Vec<u8>>> = Arc::default();
    let sink_seen = seen.clone();
    emu.register_response_sink(Box::new(move |bytes| {
        sink_seen.lock().unwrap().extend_from_slice(bytes);
    }));

    feed_str(&mut emu, "\x1b[6n");
    let collected = String::from_utf8(seen.lock().unwrap().clone()).unwrap();
    assert_eq!(collected, "\x1b[0n\x1b[1;1R");
    assert_eq!(drain_responses(&mut emu), "", "nothing queues once a sink exists");
}

#[test]
fn window_manipulation_is_parsed_and_ignored() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[8;30;100tX");
    assert_row(&emu, 0, "X");
    assert_eq!(drain_responses(&mut emu), "");
}
