// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Shared helpers for the conformance suites.

use crate::emulator::{Emulator, EmulatorOptions};

/// A blank emulator with an isolated style table (so intern-table state
/// never leaks between tests).
pub fn new_emulator(width: u16, height: u16) -> Emulator {
    let options = EmulatorOptions { isolated_style_table: true, ..Default::default() };
    Emulator::new(width, height, options)
}

/// The standard 80×24 screen most suites use.
pub fn new_emulator_80x24() -> Emulator { new_emulator(80, 24) }

pub fn feed_str(emu: &mut Emulator, input: &str) { emu.feed(input.as_bytes()); }

/// Visible text of one row, spacers skipped, width-padded with spaces.
pub fn row_text(emu: &Emulator, row: u16) -> String {
    emu.terminal().screen.row_text(row)
}

/// Assert a row's text, trimming trailing blanks from both sides of the
/// comparison so narrow expectations read naturally.
#[track_caller]
pub fn assert_row(emu: &Emulator, row: u16, expected: &str) {
    let actual = row_text(emu, row);
    assert_eq!(
        actual.trim_end(),
        expected.trim_end(),
        "row {row} mismatch (full row: {actual:?})"
    );
}

/// Drain queued responses as one string.
pub fn drain_responses(emu: &mut Emulator) -> String {
    emu.take_responses()
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

/// Rows reported dirty since the last poll.
pub fn dirty_rows(emu: &mut Emulator) -> Vec<u16> {
    emu.take_damage().iter().map(|patch| patch.row).collect()
}
