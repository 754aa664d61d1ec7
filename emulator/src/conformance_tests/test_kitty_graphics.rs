// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Kitty graphics through the wire: APC framing, chunked transmissions
//! split across feeds, compression, and error responses.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pretty_assertions::assert_eq;
use std::io::Write;

use super::fixtures::*;
use crate::emulator::{Emulator, EmulatorOptions};

fn rgb_base64(pixels: usize) -> String { BASE64.encode(vec![0xabu8; pixels * 3]) }

fn store_len(emu: &Emulator) -> usize { emu.terminal().graphics.store.len() }

#[test]
fn transmit_and_display_places_at_the_cursor() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[3;5H");
    feed_str(
        &mut emu,
        &format!("\x1b_Ga=T,f=24,s=2,v=2,i=1;{}\x1b\\", rgb_base64(4)),
    );

    assert_eq!(drain_responses(&mut emu), "\x1b_Gi=1;OK\x1b\\");
    let image = emu.terminal().graphics.store.get(1).unwrap();
    assert_eq!((image.width, image.height), (2, 2));
    assert_eq!(image.placements.len(), 1);
    assert_eq!((image.placements[0].row, image.placements[0].col), (2, 4));
}

#[test]
fn chunked_transmission_split_across_feeds() {
    let mut emu = new_emulator_80x24();
    let data = vec![0x42u8; 12]; // 2x2 RGB
    let first = BASE64.encode(&data[..6]);
    let second = BASE64.encode(&data[6..]);

    // First chunk, then the continuation APC split mid-sequence.
    feed_str(&mut emu, &format!("\x1b_Ga=t,f=24,s=2,v=2,i=3,m=1;{first}\x1b\\"));
    let continuation = format!("\x1b_Gi=3,m=0;{second}\x1b\\");
    let (head, tail) = continuation.split_at(9);
    feed_str(&mut emu, head);
    feed_str(&mut emu, tail);

    assert_eq!(drain_responses(&mut emu), "\x1b_Gi=3;OK\x1b\\");
    assert_eq!(emu.terminal().graphics.store.get(3).unwrap().data, data);
}

#[test]
fn zlib_compressed_payload() {
    let mut emu = new_emulator_80x24();
    let raw = vec![9u8; 27]; // 3x3 RGB
    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&raw).unwrap();
    let deflated = encoder.finish().unwrap();

    feed_str(
        &mut emu,
        &format!("\x1b_Ga=t,f=24,s=3,v=3,i=2,o=z;{}\x1b\\", BASE64.encode(&deflated)),
    );
    assert_eq!(drain_responses(&mut emu), "\x1b_Gi=2;OK\x1b\\");
    assert_eq!(emu.terminal().graphics.store.get(2).unwrap().data, raw);
}

#[test]
fn size_mismatch_reports_and_discards() {
    let mut emu = new_emulator_80x24();
    feed_str(
        &mut emu,
        &format!("\x1b_Ga=t,f=24,s=9,v=9,i=4;{}\x1b\\", rgb_base64(1)),
    );
    let reply = drain_responses(&mut emu);
    assert!(reply.contains("ESIZE"), "got {reply:?}");
    assert_eq!(store_len(&emu), 0);
}

#[test]
fn query_and_delete_actions() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b_Ga=q,i=9;AAAA\x1b\\");
    assert_eq!(drain_responses(&mut emu), "\x1b_Gi=9;OK\x1b\\");

    feed_str(&mut emu, &format!("\x1b_Ga=T,f=24,s=1,v=1,i=7;{}\x1b\\", rgb_base64(1)));
    let _ = drain_responses(&mut emu);
    feed_str(&mut emu, "\x1b_Ga=d,i=7;\x1b\\");
    assert_eq!(store_len(&emu), 0);
}

#[test]
fn put_places_an_existing_image() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, &format!("\x1b_Ga=t,f=24,s=1,v=1,i=8;{}\x1b\\", rgb_base64(1)));
    let _ = drain_responses(&mut emu);

    feed_str(&mut emu, "\x1b[10;20H\x1b_Ga=p,i=8,p=2;\x1b\\");
    assert_eq!(drain_responses(&mut emu), "\x1b_Gi=8,p=2;OK\x1b\\");
    let image = emu.terminal().graphics.store.get(8).unwrap();
    assert_eq!((image.placements[0].row, image.placements[0].col), (9, 19));
}

#[test]
fn put_for_unknown_image_errors() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b_Ga=p,i=404;\x1b\\");
    assert!(drain_responses(&mut emu).contains("ENOENT"));
}

#[test]
fn disabled_graphics_ignore_apc() {
    let options = EmulatorOptions {
        kitty_graphics: false,
        isolated_style_table: true,
        ..Default::default()
    };
    let mut emu = Emulator::new(80, 24, options);
    feed_str(&mut emu, &format!("\x1b_Ga=T,f=24,s=1,v=1,i=1;{}\x1b\\", rgb_base64(1)));
    assert_eq!(drain_responses(&mut emu), "");
    assert_eq!(store_len(&emu), 0);
}

#[test]
fn graphics_do_not_disturb_text_flow() {
    let mut emu = new_emulator(20, 4);
    feed_str(&mut emu, "before");
    feed_str(&mut emu, &format!("\x1b_Ga=T,f=24,s=1,v=1,i=1;{}\x1b\\", rgb_base64(1)));
    feed_str(&mut emu, "after");
    assert_row(&emu, 0, "beforeafter");
}
