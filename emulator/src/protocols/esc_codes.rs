// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! C0 controls and plain ESC-sequence finals.

use std::fmt::{self, Display};

// C0 control bytes the dispatcher executes.

pub const BELL: u8 = 0x07;
pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LINE_FEED: u8 = 0x0a;
pub const VERTICAL_TAB: u8 = 0x0b;
pub const FORM_FEED: u8 = 0x0c;
pub const CARRIAGE_RETURN: u8 = 0x0d;
/// SO — locking shift to G1.
pub const SHIFT_OUT: u8 = 0x0e;
/// SI — locking shift to G0.
pub const SHIFT_IN: u8 = 0x0f;

// C1 controls (8-bit forms, executed when UTF-8 mode is off).

pub const C1_IND: u8 = 0x84;
pub const C1_NEL: u8 = 0x85;
pub const C1_HTS: u8 = 0x88;
pub const C1_RI: u8 = 0x8d;
pub const C1_SS2: u8 = 0x8e;
pub const C1_SS3: u8 = 0x8f;

// ESC finals.

/// ESC 7 — DECSC, save cursor (position, style, charsets, origin mode).
pub const DECSC_SAVE_CURSOR: u8 = b'7';
/// ESC 8 — DECRC, restore cursor.
pub const DECRC_RESTORE_CURSOR: u8 = b'8';
/// ESC D — IND, index down (scrolls at the bottom margin).
pub const IND_INDEX_DOWN: u8 = b'D';
/// ESC E — NEL, next line (CR + IND).
pub const NEL_NEXT_LINE: u8 = b'E';
/// ESC H — HTS, set a tab stop at the cursor column.
pub const HTS_SET_TAB: u8 = b'H';
/// ESC M — RI, reverse index (scrolls at the top margin).
pub const RI_REVERSE_INDEX: u8 = b'M';
/// ESC N — SS2, single shift G2.
pub const SS2_SINGLE_SHIFT_2: u8 = b'N';
/// ESC O — SS3, single shift G3.
pub const SS3_SINGLE_SHIFT_3: u8 = b'O';
/// ESC c — RIS, hard reset.
pub const RIS_RESET: u8 = b'c';
/// ESC = — DECKPAM, keypad application mode.
pub const DECKPAM_KEYPAD_APP: u8 = b'=';
/// ESC > — DECKPNM, keypad numeric mode.
pub const DECKPNM_KEYPAD_NUMERIC: u8 = b'>';

/// SCS intermediates: `ESC ( F` … `ESC + F` designate G0..G3.
pub const SCS_G0: u8 = b'(';
pub const SCS_G1: u8 = b')';
pub const SCS_G2: u8 = b'*';
pub const SCS_G3: u8 = b'+';

/// SCS finals.
pub const CHARSET_ASCII: u8 = b'B';
pub const CHARSET_DEC_GRAPHICS: u8 = b'0';
pub const CHARSET_UK: u8 = b'A';

/// Plain ESC sequence builder for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscSequence {
    SaveCursor,
    RestoreCursor,
    Index,
    NextLine,
    ReverseIndex,
    SetTab,
    Reset,
    /// Designate a charset: slot intermediate + final.
    Designate(u8, u8),
    SingleShift2,
    SingleShift3,
}

impl Display for EscSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SaveCursor => write!(f, "\x1b7"),
            Self::RestoreCursor => write!(f, "\x1b8"),
            Self::Index => write!(f, "\x1bD"),
            Self::NextLine => write!(f, "\x1bE"),
            Self::ReverseIndex => write!(f, "\x1bM"),
            Self::SetTab => write!(f, "\x1bH"),
            Self::Reset => write!(f, "\x1bc"),
            Self::Designate(slot, final_byte) => {
                write!(f, "\x1b{}{}", char::from(*slot), char::from(*final_byte))
            }
            Self::SingleShift2 => write!(f, "\x1bN"),
            Self::SingleShift3 => write!(f, "\x1bO"),
        }
    }
}
