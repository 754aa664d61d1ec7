// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Color model shared by foreground, background, and underline colors.
//!
//! Cells store colors symbolically: `Indexed(1)` stays `Indexed(1)` in the
//! grid so a renderer (or an OSC 4 palette override) decides the final RGB
//! late. [`indexed_to_rgb`] provides the standard xterm-256 resolution for
//! query responses and renderers that want a default.

/// A terminal color as written by SGR sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The renderer's default foreground or background.
    #[default]
    Default,
    /// Palette index 0–255 (0–7 normal, 8–15 bright, 16–231 color cube,
    /// 232–255 grayscale ramp).
    Indexed(u8),
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolve to concrete RGB, treating `Default` as the given fallback.
    #[must_use]
    pub fn to_rgb(self, default: (u8, u8, u8)) -> (u8, u8, u8) {
        match self {
            Color::Default => default,
            Color::Indexed(i) => indexed_to_rgb(i),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

/// Standard xterm-256 palette resolution.
#[must_use]
pub fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        // 16 base colors (xterm defaults).
        0 => (0x00, 0x00, 0x00),
        1 => (0xcd, 0x00, 0x00),
        2 => (0x00, 0xcd, 0x00),
        3 => (0xcd, 0xcd, 0x00),
        4 => (0x00, 0x00, 0xee),
        5 => (0xcd, 0x00, 0xcd),
        6 => (0x00, 0xcd, 0xcd),
        7 => (0xe5, 0xe5, 0xe5),
        8 => (0x7f, 0x7f, 0x7f),
        9 => (0xff, 0x00, 0x00),
        10 => (0x00, 0xff, 0x00),
        11 => (0xff, 0xff, 0x00),
        12 => (0x5c, 0x5c, 0xff),
        13 => (0xff, 0x00, 0xff),
        14 => (0x00, 0xff, 0xff),
        15 => (0xff, 0xff, 0xff),
        // 6x6x6 color cube.
        16..=231 => {
            let i = index - 16;
            let r = i / 36;
            let g = (i % 36) / 6;
            let b = i % 6;
            let scale = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (scale(r), scale(g), scale(b))
        }
        // Grayscale ramp.
        232..=255 => {
            let level = 8 + (index - 232) * 10;
            (level, level, level)
        }
    }
}
