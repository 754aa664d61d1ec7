// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) constants and the [`CsiSequence`]
//! builder, organized by functional category.

use std::fmt::{self, Display};

/// CSI sequence start: ESC [
pub const CSI_START: &str = "\x1b[";

/// Private mode prefix for DEC sequences (`CSI ? … h/l`).
pub const CSI_PRIVATE_MARKER: u8 = b'?';

// Cursor movement.

/// CSI A: Cursor Up (CUU), n lines (default 1).
pub const CUU_CURSOR_UP: char = 'A';
/// CSI B: Cursor Down (CUD).
pub const CUD_CURSOR_DOWN: char = 'B';
/// CSI C: Cursor Forward (CUF).
pub const CUF_CURSOR_FORWARD: char = 'C';
/// CSI D: Cursor Backward (CUB).
pub const CUB_CURSOR_BACKWARD: char = 'D';
/// CSI E: Cursor Next Line (CNL) — CR plus down.
pub const CNL_CURSOR_NEXT_LINE: char = 'E';
/// CSI F: Cursor Previous Line (CPL) — CR plus up.
pub const CPL_CURSOR_PREV_LINE: char = 'F';
/// CSI G: Cursor Horizontal Absolute (CHA), 1-based column.
pub const CHA_CURSOR_COLUMN: char = 'G';
/// CSI H: Cursor Position (CUP), 1-based row;col.
pub const CUP_CURSOR_POSITION: char = 'H';
/// CSI f: Horizontal and Vertical Position (HVP) — same as CUP.
pub const HVP_CURSOR_POSITION: char = 'f';
/// CSI d: Vertical Position Absolute (VPA), 1-based row.
pub const VPA_VERTICAL_POSITION: char = 'd';
/// CSI e: Vertical Position Relative (VPR) — same motion as CUD.
pub const VPR_VERTICAL_RELATIVE: char = 'e';
/// CSI `: Horizontal Position Absolute (HPA) — same as CHA.
pub const HPA_HORIZONTAL_POSITION: char = '`';
/// CSI a: Horizontal Position Relative (HPR) — same motion as CUF.
pub const HPR_HORIZONTAL_RELATIVE: char = 'a';
/// CSI I: Cursor Horizontal Tab (CHT), forward n tab stops.
pub const CHT_TAB_FORWARD: char = 'I';
/// CSI Z: Cursor Backward Tab (CBT), back n tab stops.
pub const CBT_TAB_BACKWARD: char = 'Z';

// Erasing.

/// CSI J: Erase in Display (ED).
pub const ED_ERASE_DISPLAY: char = 'J';
/// CSI K: Erase in Line (EL).
pub const EL_ERASE_LINE: char = 'K';

/// ED/EL 0: erase from cursor to end (default).
pub const ERASE_TO_END: u16 = 0;
/// ED/EL 1: erase from start to cursor.
pub const ERASE_FROM_START: u16 = 1;
/// ED/EL 2: erase everything.
pub const ERASE_ALL: u16 = 2;
/// ED 3 (xterm): erase scrollback too.
pub const ERASE_ALL_AND_SCROLLBACK: u16 = 3;

// Line and character editing.

/// CSI L: Insert Line (IL).
pub const IL_INSERT_LINE: char = 'L';
/// CSI M: Delete Line (DL).
pub const DL_DELETE_LINE: char = 'M';
/// CSI @: Insert Character (ICH).
pub const ICH_INSERT_CHAR: char = '@';
/// CSI P: Delete Character (DCH).
pub const DCH_DELETE_CHAR: char = 'P';
/// CSI X: Erase Character (ECH).
pub const ECH_ERASE_CHAR: char = 'X';
/// CSI b: Repeat preceding graphic character (REP).
pub const REP_REPEAT_CHAR: char = 'b';

// Scrolling and margins.

/// CSI S: Scroll Up (SU).
pub const SU_SCROLL_UP: char = 'S';
/// CSI T: Scroll Down (SD).
pub const SD_SCROLL_DOWN: char = 'T';
/// CSI r: Set Top and Bottom Margins (DECSTBM).
pub const DECSTBM_SET_MARGINS: char = 'r';

// Modes, reports, state.

/// CSI h: Set Mode (SM); with `?` prefix, DEC private set.
pub const SM_SET_MODE: char = 'h';
/// CSI l: Reset Mode (RM); with `?` prefix, DEC private reset.
pub const RM_RESET_MODE: char = 'l';
/// CSI m: Select Graphic Rendition (SGR).
pub const SGR_SET_GRAPHICS: char = 'm';
/// CSI n: Device Status Report (DSR).
pub const DSR_DEVICE_STATUS: char = 'n';
/// CSI c: Device Attributes (DA1; DA2 with `>` marker).
pub const DA_DEVICE_ATTRIBUTES: char = 'c';
/// CSI g: Tab Clear (TBC).
pub const TBC_TAB_CLEAR: char = 'g';
/// CSI s: Save Cursor Position (SCP).
pub const SCP_SAVE_CURSOR: char = 's';
/// CSI u: Restore Cursor Position (RCP).
pub const RCP_RESTORE_CURSOR: char = 'u';
/// CSI t: window manipulation (parsed, ignored).
pub const XTWINOPS_WINDOW_OPS: char = 't';
/// CSI x: Request Terminal Parameters (DECREQTPARM).
pub const DECREQTPARM_REQUEST: char = 'x';
/// CSI SP q: Set Cursor Style (DECSCUSR).
pub const DECSCUSR_CURSOR_STYLE: char = 'q';
/// CSI ! p: Soft Reset (DECSTR).
pub const DECSTR_SOFT_RESET: char = 'p';

/// DSR parameter: operating status.
pub const DSR_STATUS: u16 = 5;
/// DSR parameter: cursor position report.
pub const DSR_CURSOR_POSITION: u16 = 6;

/// TBC parameter: clear stop at the cursor column.
pub const TBC_CLEAR_CURRENT: u16 = 0;
/// TBC parameter: clear all stops.
pub const TBC_CLEAR_ALL: u16 = 3;

/// Type-safe CSI sequence builder. `Display` renders the exact byte
/// sequence, so tests compose inputs without hand-typed escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBackward(u16),
    CursorNextLine(u16),
    CursorPrevLine(u16),
    /// 1-based column.
    CursorColumn(u16),
    /// 1-based (row, col).
    CursorPosition(u16, u16),
    VerticalPosition(u16),
    EraseDisplay(u16),
    EraseLine(u16),
    InsertLine(u16),
    DeleteLine(u16),
    InsertChar(u16),
    DeleteChar(u16),
    EraseChar(u16),
    RepeatChar(u16),
    ScrollUp(u16),
    ScrollDown(u16),
    /// 1-based inclusive (top, bottom).
    SetMargins(u16, u16),
    SetMode(u16),
    ResetMode(u16),
    SetPrivateMode(u16),
    ResetPrivateMode(u16),
    DeviceStatus(u16),
    SaveCursor,
    RestoreCursor,
    CursorStyle(u16),
    SoftReset,
    TabClear(u16),
    TabForward(u16),
    TabBackward(u16),
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CSI_START}")?;
        match self {
            Self::CursorUp(n) => write!(f, "{n}{CUU_CURSOR_UP}"),
            Self::CursorDown(n) => write!(f, "{n}{CUD_CURSOR_DOWN}"),
            Self::CursorForward(n) => write!(f, "{n}{CUF_CURSOR_FORWARD}"),
            Self::CursorBackward(n) => write!(f, "{n}{CUB_CURSOR_BACKWARD}"),
            Self::CursorNextLine(n) => write!(f, "{n}{CNL_CURSOR_NEXT_LINE}"),
            Self::CursorPrevLine(n) => write!(f, "{n}{CPL_CURSOR_PREV_LINE}"),
            Self::CursorColumn(n) => write!(f, "{n}{CHA_CURSOR_COLUMN}"),
            Self::CursorPosition(row, col) => {
                write!(f, "{row};{col}{CUP_CURSOR_POSITION}")
            }
            Self::VerticalPosition(n) => write!(f, "{n}{VPA_VERTICAL_POSITION}"),
            Self::EraseDisplay(n) => write!(f, "{n}{ED_ERASE_DISPLAY}"),
            Self::EraseLine(n) => write!(f, "{n}{EL_ERASE_LINE}"),
            Self::InsertLine(n) => write!(f, "{n}{IL_INSERT_LINE}"),
            Self::DeleteLine(n) => write!(f, "{n}{DL_DELETE_LINE}"),
            Self::InsertChar(n) => write!(f, "{n}{ICH_INSERT_CHAR}"),
            Self::DeleteChar(n) => write!(f, "{n}{DCH_DELETE_CHAR}"),
            Self::EraseChar(n) => write!(f, "{n}{ECH_ERASE_CHAR}"),
            Self::RepeatChar(n) => write!(f, "{n}{REP_REPEAT_CHAR}"),
            Self::ScrollUp(n) => write!(f, "{n}{SU_SCROLL_UP}"),
            Self::ScrollDown(n) => write!(f, "{n}{SD_SCROLL_DOWN}"),
            Self::SetMargins(top, bottom) => {
                write!(f, "{top};{bottom}{DECSTBM_SET_MARGINS}")
            }
            Self::SetMode(n) => write!(f, "{n}{SM_SET_MODE}"),
            Self::ResetMode(n) => write!(f, "{n}{RM_RESET_MODE}"),
            Self::SetPrivateMode(n) => write!(f, "?{n}{SM_SET_MODE}"),
            Self::ResetPrivateMode(n) => write!(f, "?{n}{RM_RESET_MODE}"),
            Self::DeviceStatus(n) => write!(f, "{n}{DSR_DEVICE_STATUS}"),
            Self::SaveCursor => write!(f, "{SCP_SAVE_CURSOR}"),
            Self::RestoreCursor => write!(f, "{RCP_RESTORE_CURSOR}"),
            Self::CursorStyle(n) => write!(f, "{n} {DECSCUSR_CURSOR_STYLE}"),
            Self::SoftReset => write!(f, "!{DECSTR_SOFT_RESET}"),
            Self::TabClear(n) => write!(f, "{n}{TBC_TAB_CLEAR}"),
            Self::TabForward(n) => write!(f, "{n}{CHT_TAB_FORWARD}"),
            Self::TabBackward(n) => write!(f, "{n}{CBT_TAB_BACKWARD}"),
        }
    }
}
