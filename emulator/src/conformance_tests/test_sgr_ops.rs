// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SGR through the wire: color grammars, attributes, underline styles, and
//! the interning behavior visible through cell styles.

use pretty_assertions::assert_eq;
use std::sync::Arc;

use super::fixtures::*;
use crate::protocols::sgr_codes::SgrCode;
use crate::style::{Color, StyleAttribs, UnderlineKind};

#[test]
fn basic_palette_via_builders() {
    let mut emu = new_emulator_80x24();
    feed_str(
        &mut emu,
        &format!(
            "{}{}A{}B",
            SgrCode::ForegroundBasic(2),
            SgrCode::BackgroundBasic(5),
            SgrCode::Reset
        ),
    );
    let frame = emu.snapshot();
    let styled = frame.cell(0, 0).unwrap().style_value();
    assert_eq!(styled.fg, Color::Indexed(2));
    assert_eq!(styled.bg, Color::Indexed(5));
    assert!(frame.cell(0, 1).unwrap().style_value().is_default());
}

#[test]
fn indexed_256_and_truecolor() {
    let mut emu = new_emulator_80x24();
    feed_str(
        &mut emu,
        &format!(
            "{}a{}b",
            SgrCode::ForegroundIndexed(196),
            SgrCode::BackgroundRgb(12, 34, 56)
        ),
    );
    let frame = emu.snapshot();
    assert_eq!(frame.cell(0, 0).unwrap().style_value().fg, Color::Indexed(196));
    assert_eq!(
        frame.cell(0, 1).unwrap().style_value().bg,
        Color::Rgb(12, 34, 56)
    );
}

#[test]
fn colon_subparameter_colors() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[38:2::9:8:7mZ");
    let frame = emu.snapshot();
    assert_eq!(frame.cell(0, 0).unwrap().style_value().fg, Color::Rgb(9, 8, 7));
}

#[test]
fn curly_underline_with_color() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[4:3m\x1b[58;5;196mE");
    let style = emu.snapshot().cell(0, 0).unwrap().style_value().clone();
    assert_eq!(style.underline, Some(UnderlineKind::Curly));
    assert_eq!(style.underline_color, Color::Indexed(196));
}

#[test]
fn attributes_accumulate_and_clear_selectively() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[1;3;9ma\x1b[23mb");
    let frame = emu.snapshot();
    let first = frame.cell(0, 0).unwrap().style_value();
    assert!(first.attribs.contains(StyleAttribs::BOLD));
    assert!(first.attribs.contains(StyleAttribs::ITALIC));
    assert!(first.attribs.contains(StyleAttribs::STRIKETHROUGH));

    let second = frame.cell(0, 1).unwrap().style_value();
    assert!(second.attribs.contains(StyleAttribs::BOLD), "23 clears italic only");
    assert!(!second.attribs.contains(StyleAttribs::ITALIC));
}

#[test]
fn equal_styles_share_one_interned_reference() {
    let mut emu = new_emulator_80x24();
    feed_str(&mut emu, "\x1b[31mab\x1b[0m \x1b[31mc");
    let frame = emu.snapshot();
    let a = frame.cell(0, 0).unwrap().style().clone();
    let b = frame.cell(0, 1).unwrap().style().clone();
    let c = frame.cell(0, 3).unwrap().style().clone();
    assert!(Arc::ptr_eq(&a, &b), "same run shares the cached ref");
    assert!(Arc::ptr_eq(&a, &c), "re-interning an equal style yields the same ref");
}

#[test]
fn malformed_extended_color_is_skipped_locally() {
    let mut emu = new_emulator_80x24();
    // 38 with a truncated RGB spec, then a valid bold.
    feed_str(&mut emu, "\x1b[38;2;10m\x1b[1mQ");
    let style = emu.snapshot().cell(0, 0).unwrap().style_value().clone();
    assert_eq!(style.fg, Color::Default, "truncated color ignored");
    assert!(style.attribs.contains(StyleAttribs::BOLD));
}
