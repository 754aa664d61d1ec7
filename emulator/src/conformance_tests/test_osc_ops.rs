// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! OSC through the wire: both terminators, titles, hyperlinks, palette,
//! clipboard, and split payloads.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::emulator::EmulatorEvent;

#[test]
fn title_with_bel_and_st_terminators() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]0;bell title\x07");
    assert_eq!(emu.title(), Some("bell title"));

    feed_str(&mut emu, "\x1b]2;st title\x1b\\");
    assert_eq!(emu.title(), Some("st title"));
    assert_eq!(emu.snapshot().title.as_deref(), Some("st title"));

    let events = emu.take_events();
    assert_eq!(
        events,
        vec![
            EmulatorEvent::TitleChanged("bell title".into()),
            EmulatorEvent::TitleChanged("st title".into()),
        ]
    );
}

#[test]
fn osc_split_across_feeds() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]0;sp");
    feed_str(&mut emu, "lit\x07after");
    assert_eq!(emu.title(), Some("split"));
    assert_row(&emu, 0, "after");
}

#[test]
fn hyperlink_runs_attach_to_cells() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\plain");
    let frame = emu.snapshot();
    let linked = frame.cell(0, 0).unwrap().style_value().hyperlink.clone().unwrap();
    assert_eq!(linked.uri, "https://example.com");
    assert!(frame.cell(0, 4).unwrap().style_value().hyperlink.is_none());
}

#[test]
fn palette_override_and_query_via_wire() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]4;17;rgb:10/20/30\x07");
    feed_str(&mut emu, "\x1b]4;17;?\x07");
    assert_eq!(
        drain_responses(&mut emu),
        "\x1b]4;17;rgb:1010/2020/3030\x1b\\"
    );
    feed_str(&mut emu, "\x1b]104;17\x07");
    feed_str(&mut emu, "\x1b]4;17;?\x07");
    let reply = drain_responses(&mut emu);
    assert!(reply.starts_with("\x1b]4;17;rgb:"), "standard palette restored");
    assert_ne!(reply, "\x1b]4;17;rgb:1010/2020/3030\x1b\\");
}

#[test]
fn clipboard_round_trip_via_wire() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]52;c;aGVsbG8=\x07");
    feed_str(&mut emu, "\x1b]52;c;?\x07");
    assert_eq!(drain_responses(&mut emu), "\x1b]52;c;aGVsbG8=\x1b\\");
}

#[test]
fn default_color_queries() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]10;?\x07\x1b]11;?\x07");
    let reply = drain_responses(&mut emu);
    assert!(reply.contains("\x1b]10;rgb:"));
    assert!(reply.contains("\x1b]11;rgb:"));
}

#[test]
fn unknown_osc_codes_are_harmless() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b]777;mystery\x07ok");
    assert_row(&emu, 0, "ok");
    assert_eq!(drain_responses(&mut emu), "");
}
