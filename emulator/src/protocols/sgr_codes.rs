// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) parameter constants and the [`SgrCode`]
//! builder.

use std::fmt::{self, Display};

pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_FAINT: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_BLINK: u16 = 5;
pub const SGR_RAPID_BLINK: u16 = 6;
pub const SGR_REVERSE: u16 = 7;
pub const SGR_HIDDEN: u16 = 8;
pub const SGR_STRIKETHROUGH: u16 = 9;
pub const SGR_DOUBLE_UNDERLINE: u16 = 21;
pub const SGR_RESET_BOLD_FAINT: u16 = 22;
pub const SGR_RESET_ITALIC: u16 = 23;
pub const SGR_RESET_UNDERLINE: u16 = 24;
pub const SGR_RESET_BLINK: u16 = 25;
pub const SGR_RESET_REVERSE: u16 = 27;
pub const SGR_RESET_HIDDEN: u16 = 28;
pub const SGR_RESET_STRIKETHROUGH: u16 = 29;

pub const SGR_FG_BLACK: u16 = 30;
pub const SGR_FG_WHITE: u16 = 37;
/// 38 — extended foreground: `5;n` indexed or `2;r;g;b` RGB.
pub const SGR_FG_EXTENDED: u16 = 38;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_BLACK: u16 = 40;
pub const SGR_BG_WHITE: u16 = 47;
/// 48 — extended background, same grammar as 38.
pub const SGR_BG_EXTENDED: u16 = 48;
pub const SGR_BG_DEFAULT: u16 = 49;
/// 58 — extended underline color, same grammar as 38.
pub const SGR_UNDERLINE_COLOR: u16 = 58;
pub const SGR_UNDERLINE_COLOR_DEFAULT: u16 = 59;
pub const SGR_FG_BRIGHT_BLACK: u16 = 90;
pub const SGR_FG_BRIGHT_WHITE: u16 = 97;
pub const SGR_BG_BRIGHT_BLACK: u16 = 100;
pub const SGR_BG_BRIGHT_WHITE: u16 = 107;

/// Extended-color mode selector: indexed palette.
pub const COLOR_MODE_INDEXED: u16 = 5;
/// Extended-color mode selector: direct RGB.
pub const COLOR_MODE_RGB: u16 = 2;

/// Type-safe SGR builder for tests and reply generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
    /// 30–37.
    ForegroundBasic(u8),
    /// 40–47.
    BackgroundBasic(u8),
    ForegroundIndexed(u8),
    BackgroundIndexed(u8),
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
    ForegroundDefault,
    BackgroundDefault,
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[")?;
        match self {
            Self::Reset => write!(f, "{SGR_RESET}m"),
            Self::Bold => write!(f, "{SGR_BOLD}m"),
            Self::Faint => write!(f, "{SGR_FAINT}m"),
            Self::Italic => write!(f, "{SGR_ITALIC}m"),
            Self::Underline => write!(f, "{SGR_UNDERLINE}m"),
            Self::Blink => write!(f, "{SGR_BLINK}m"),
            Self::Reverse => write!(f, "{SGR_REVERSE}m"),
            Self::Hidden => write!(f, "{SGR_HIDDEN}m"),
            Self::Strikethrough => write!(f, "{SGR_STRIKETHROUGH}m"),
            Self::ForegroundBasic(n) => write!(f, "{}m", SGR_FG_BLACK + u16::from(*n)),
            Self::BackgroundBasic(n) => write!(f, "{}m", SGR_BG_BLACK + u16::from(*n)),
            Self::ForegroundIndexed(n) => write!(f, "{SGR_FG_EXTENDED};{COLOR_MODE_INDEXED};{n}m"),
            Self::BackgroundIndexed(n) => write!(f, "{SGR_BG_EXTENDED};{COLOR_MODE_INDEXED};{n}m"),
            Self::ForegroundRgb(r, g, b) => {
                write!(f, "{SGR_FG_EXTENDED};{COLOR_MODE_RGB};{r};{g};{b}m")
            }
            Self::BackgroundRgb(r, g, b) => {
                write!(f, "{SGR_BG_EXTENDED};{COLOR_MODE_RGB};{r};{g};{b}m")
            }
            Self::ForegroundDefault => write!(f, "{SGR_FG_DEFAULT}m"),
            Self::BackgroundDefault => write!(f, "{SGR_BG_DEFAULT}m"),
        }
    }
}
