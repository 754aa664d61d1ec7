// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Structural invariants that must hold for any input byte sequence, plus
//! the randomized feed-concatenation property.

use pretty_assertions::assert_eq;
use rand::prelude::*;

use super::fixtures::*;
use crate::emulator::Emulator;

/// Invariants 1, 2, 4: grid shape, cursor bounds, wide-cell pairing.
fn assert_structural_invariants(emu: &Emulator) {
    let frame = emu.snapshot();
    assert_eq!(
        frame.cells.len(),
        frame.width as usize * frame.height as usize,
        "grid must stay width × height"
    );

    let cursor = emu.cursor();
    assert!(cursor.row < frame.height);
    assert!(cursor.col < frame.width);

    for row in 0..frame.height {
        for col in 0..frame.width {
            let cell = frame.cell(row, col).unwrap();
            if cell.is_spacer() {
                assert!(col > 0, "spacer at column 0");
                assert!(
                    frame.cell(row, col - 1).unwrap().is_wide(),
                    "orphan spacer at ({row},{col})"
                );
            }
            if cell.is_wide() {
                assert!(
                    col + 1 < frame.width && frame.cell(row, col + 1).unwrap().is_spacer(),
                    "wide cell without spacer at ({row},{col})"
                );
            }
        }
    }
}

#[test]
fn invariants_hold_across_a_hostile_sample() {
    let inputs: &[&[u8]] = &[
        b"plain text",
        b"\x1b[999;999H\x1b[31mX",
        b"\x1b[?1049h\x1b[2Jalt\x1b[?1049l",
        b"\x1b[5;2r\x1b[10Swrap\x1b[10T",
        "wide \u{4e16}\u{754c} cells".as_bytes(),
        b"\x1b[1;1H\x1b[2K\x1b[5@\x1b[3P\x1b[4X",
        b"\x1b]0;title\x07\x1b[0m",
        b"\x1b[18\x18aborted\x1a\x1b[2J",
        &[0xff, 0xfe, b'x', 0x1b, b'[', b'm'],
    ];
    for input in inputs {
        let mut emu = new_emulator(20, 6);
        emu.feed(input);
        assert_structural_invariants(&emu);
    }
}

/// Invariant 5: scrollback rows are never mutated after eviction.
#[test]
fn scrollback_rows_are_immutable_after_eviction() {
    let mut emu = new_emulator(10, 2);
    feed_str(&mut emu, "first\r\nsecond\r\nthird");
    let evicted = emu.terminal().screen.scrollback().get(0).unwrap().text();
    assert_eq!(evicted.trim_end(), "first");

    // Hammer the screen; history must not change.
    feed_str(&mut emu, "\x1b[2J\x1b[1;1Hoverwrite\x1b[1L\x1b[1M");
    let after = emu.terminal().screen.scrollback().get(0).unwrap().text();
    assert_eq!(evicted, after);
}

/// Invariant 6: ED 2 + CUP 1;1 yields a fully default screen.
#[test]
fn clear_and_home_is_canonical_blank() {
    let mut emu = new_emulator(12, 4);
    feed_str(&mut emu, "\x1b[44;1mstuff\x1b[2;2Hmore");
    feed_str(&mut emu, "\x1b[0m\x1b[2J\x1b[1;1H");

    assert_eq!((emu.cursor().row, emu.cursor().col), (0, 0));
    let frame = emu.snapshot();
    for cell in &frame.cells {
        assert!(cell.is_blank());
        assert!(cell.style_value().is_default());
    }
}

/// Invariant 7: the primary buffer survives an alternate-screen excursion
/// bit-for-bit.
#[test]
fn alternate_screen_preserves_primary_exactly() {
    let mut emu = new_emulator(20, 5);
    feed_str(&mut emu, "\x1b[33mstyled\x1b[0m line\x1b[3;4Hdeep");
    let before = emu.snapshot();

    feed_str(&mut emu, "\x1b[?1049h");
    feed_str(&mut emu, "\x1b[2J\x1b[31mALT CONTENT\x1b[5;1Hbottom");
    feed_str(&mut emu, "\x1b[?1049l");

    let after = emu.snapshot();
    assert_eq!(before, after);
}

/// Invariant 8: commuting SGR codes produce identical interned styles.
#[test]
fn commuting_sgr_orders_intern_identically() {
    let mut a = new_emulator(10, 2);
    let mut b = new_emulator(10, 2);
    feed_str(&mut a, "\x1b[1m\x1b[31m\x1b[4mX");
    feed_str(&mut b, "\x1b[4m\x1b[1m\x1b[31mX");

    let style_a = a.snapshot().cell(0, 0).unwrap().style_value().clone();
    let style_b = b.snapshot().cell(0, 0).unwrap().style_value().clone();
    assert_eq!(style_a, style_b);
}

// -- feed concatenation (invariant 3) --

/// Deterministic, ESC-biased random byte stream.
fn random_stream(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(len * 4);
    while bytes.len() < len {
        match rng.random_range(0..10) {
            // Printable runs.
            0..=3 => {
                for _ in 0..rng.random_range(1..8) {
                    bytes.push(rng.random_range(0x20..0x7f));
                }
            }
            // Control characters.
            4 => bytes.push(*[0x07, 0x08, 0x09, 0x0a, 0x0d].choose(rng).unwrap()),
            // Well-formed CSI.
            5..=6 => {
                bytes.extend_from_slice(b"\x1b[");
                if rng.random_bool(0.3) {
                    bytes.push(b'?');
                }
                for _ in 0..rng.random_range(0..3) {
                    bytes.extend(rng.random_range(0..1100u16).to_string().bytes());
                    bytes.push(b';');
                }
                bytes.push(*b"ABCDHJKLMPSTXm@rhl".choose(rng).unwrap());
            }
            // OSC with both terminators.
            7 => {
                bytes.extend_from_slice(b"\x1b]0;t");
                if rng.random_bool(0.5) {
                    bytes.push(0x07);
                } else {
                    bytes.extend_from_slice(b"\x1b\\");
                }
            }
            // UTF-8 multi-byte.
            8 => bytes.extend_from_slice("é世🦀".as_bytes()),
            // Hostile fragments: truncated/aborted sequences.
            _ => bytes.extend_from_slice(&[0x1b, b'[', b'1', 0x18, 0x1b]),
        }
    }
    bytes
}

#[test]
fn feeding_any_split_matches_the_contiguous_feed() {
    // Seeded so failures reproduce.
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let stream = random_stream(&mut rng, 200);

        let mut whole = new_emulator(20, 6);
        whole.feed(&stream);

        let mut split = new_emulator(20, 6);
        let mut rest = stream.as_slice();
        while !rest.is_empty() {
            let take = rng.random_range(1..=rest.len());
            split.feed(&rest[..take]);
            rest = &rest[take..];
        }

        assert_eq!(whole.snapshot(), split.snapshot(), "stream: {stream:?}");
        assert_structural_invariants(&whole);
    }
}

#[test]
fn byte_at_a_time_matches_contiguous() {
    let input = b"\x1b[2;5Hsplit \x1b[31mred\x1b[0m \x1b]0;t\x07 \xe4\xb8\x96";
    let mut whole = new_emulator_80x24();
    whole.feed(input);

    let mut split = new_emulator_80x24();
    for &byte in input {
        split.feed(&[byte]);
    }
    assert_eq!(whole.snapshot(), split.snapshot());
}
