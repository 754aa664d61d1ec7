// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The byte-oriented state machine.
//!
//! # State chart
//!
//! ```text
//!                 ╭──────── printable ──────▶ print()
//!   ┌────────┐    │
//!   │ Ground │────┤  ESC ┌────────┐  '['  ┌──────────┐ 0x40–0x7E
//!   └────────┘    ╰─────▶│ Escape │──────▶│ CsiEntry │───────────▶ csi_dispatch()
//!        ▲                └────────┘       └──────────┘
//!        │                  │ │ │ │          │     │
//!        │            final │ │ │ ╰ ']' OSC  │     ╰ 0x30–0x3F → CsiParam
//!        │     esc_dispatch ╯ │ ╰ 'P' DCS    ╰ 0x20–0x2F → CsiIntermediate
//!        │                    ╰ '_' APC
//!        ╰──── ST / BEL / CAN / SUB / final ──────────────────────────╯
//! ```
//!
//! Three rules hold in every state:
//!
//! - C0 controls execute in place (BEL, BS, HT, LF, VT, FF, CR, SI, SO).
//! - `ESC` restarts sequence recognition, first terminating any string
//!   state as if by ST.
//! - `CAN` and `SUB` abort to Ground, discarding the sequence.
//!
//! String payloads (OSC/APC) accumulate raw bytes and are dispatched whole;
//! DCS streams its payload through `dcs_put`. Buffers are capped so a
//! malformed never-terminated string cannot grow without bound.

use smallvec::SmallVec;

use super::params::Params;
use super::perform::Perform;

/// Parser states, per the DEC/ECMA-48 recognition chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    CsiIgnore,
    OscString,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsPassthrough,
    DcsIgnore,
    SosPmApcString,
}

const ESC: u8 = 0x1b;
const CAN: u8 = 0x18;
const SUB: u8 = 0x1a;
const BEL: u8 = 0x07;
const DEL: u8 = 0x7f;
const ST_C1: u8 = 0x9c;

/// Cap for an OSC payload; bytes past this are dropped.
const OSC_BUF_MAX: usize = 128 * 1024;
/// Cap for a single APC payload (Kitty chunks its data well below this).
const APC_BUF_MAX: usize = 1024 * 1024;

/// Outcome of feeding one byte to the UTF-8 decoder.
enum Utf8Step {
    Incomplete,
    Decoded(char),
    /// Sequence was invalid; emit U+FFFD. When `reprocess` is set the byte
    /// that broke the sequence must be run through the parser again.
    Invalid { reprocess: bool },
}

/// Incremental UTF-8 decoder; residue survives across `feed` boundaries.
#[derive(Debug, Clone, Copy, Default)]
struct Utf8Decoder {
    codepoint: u32,
    remaining: u8,
    seen: u8,
    lead: u8,
}

impl Utf8Decoder {
    fn pending(&self) -> bool { self.remaining > 0 }

    fn reset(&mut self) {
        self.remaining = 0;
        self.seen = 0;
    }

    fn advance(&mut self, byte: u8) -> Utf8Step {
        if self.remaining == 0 {
            match byte {
                0xc2..=0xdf => {
                    self.codepoint = u32::from(byte & 0x1f);
                    self.remaining = 1;
                    self.seen = 0;
                    self.lead = byte;
                    Utf8Step::Incomplete
                }
                0xe0..=0xef => {
                    self.codepoint = u32::from(byte & 0x0f);
                    self.remaining = 2;
                    self.seen = 0;
                    self.lead = byte;
                    Utf8Step::Incomplete
                }
                0xf0..=0xf4 => {
                    self.codepoint = u32::from(byte & 0x07);
                    self.remaining = 3;
                    self.seen = 0;
                    self.lead = byte;
                    Utf8Step::Incomplete
                }
                // 0x80–0xC1 continuation-without-lead / overlong leads,
                // 0xF5–0xFF out of range.
                _ => Utf8Step::Invalid { reprocess: false },
            }
        } else if (0x80..=0xbf).contains(&byte) {
            // Reject overlong/surrogate/out-of-range forms on the first
            // continuation byte, per the W3C/WHATWG constrained ranges.
            if self.seen == 0 {
                let ok = match self.lead {
                    0xe0 => (0xa0..=0xbf).contains(&byte),
                    0xed => (0x80..=0x9f).contains(&byte),
                    0xf0 => (0x90..=0xbf).contains(&byte),
                    0xf4 => (0x80..=0x8f).contains(&byte),
                    _ => true,
                };
                if !ok {
                    self.reset();
                    return Utf8Step::Invalid { reprocess: true };
                }
            }
            self.codepoint = (self.codepoint << 6) | u32::from(byte & 0x3f);
            self.remaining -= 1;
            self.seen += 1;
            if self.remaining == 0 {
                match char::from_u32(self.codepoint) {
                    Some(ch) => Utf8Step::Decoded(ch),
                    None => Utf8Step::Invalid { reprocess: false },
                }
            } else {
                Utf8Step::Incomplete
            }
        } else {
            self.reset();
            Utf8Step::Invalid { reprocess: true }
        }
    }
}

/// The parser. One instance per emulator; owns all in-flight sequence
/// state so input can be fed in arbitrary slices.
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
    params: Params,
    intermediates: SmallVec<[u8; 2]>,
    private_marker: Option<u8>,
    osc_buf: Vec<u8>,
    apc_buf: Vec<u8>,
    /// Inside `SosPmApcString`: collect (APC) or discard (SOS/PM).
    string_is_apc: bool,
    utf8_mode: bool,
    utf8: Utf8Decoder,
}

impl Parser {
    #[must_use]
    pub fn new(utf8_mode: bool) -> Self {
        Self { utf8_mode, ..Self::default() }
    }

    #[must_use]
    pub fn state(&self) -> State { self.state }

    /// Feed a whole slice.
    pub fn advance_bytes<P: Perform>(&mut self, performer: &mut P, bytes: &[u8]) {
        for &byte in bytes {
            self.advance(performer, byte);
        }
    }

    /// Feed one byte.
    pub fn advance<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        // Global rules first: CAN/SUB abort, ESC restarts (terminating
        // string states as if by ST).
        match byte {
            CAN | SUB => {
                self.abort(performer);
                return;
            }
            ESC if !(self.state == State::Ground && self.utf8.pending()) => {
                self.terminate_string(performer);
                self.enter_escape();
                return;
            }
            _ => {}
        }

        match self.state {
            State::Ground => self.ground(performer, byte),
            State::Escape => self.escape(performer, byte),
            State::EscapeIntermediate => self.escape_intermediate(performer, byte),
            State::CsiEntry => self.csi_entry(performer, byte),
            State::CsiParam => self.csi_param(performer, byte),
            State::CsiIntermediate => self.csi_intermediate(performer, byte),
            State::CsiIgnore => self.csi_ignore(performer, byte),
            State::OscString => self.osc_string(performer, byte),
            State::DcsEntry => self.dcs_entry(performer, byte),
            State::DcsParam => self.dcs_param(performer, byte),
            State::DcsIntermediate => self.dcs_intermediate(performer, byte),
            State::DcsPassthrough => self.dcs_passthrough(performer, byte),
            State::DcsIgnore => self.dcs_ignore(byte),
            State::SosPmApcString => self.sos_pm_apc(performer, byte),
        }
    }

    // -- global transitions --

    fn abort<P: Perform>(&mut self, performer: &mut P) {
        if self.state == State::DcsPassthrough {
            performer.dcs_unhook();
        }
        self.utf8.reset();
        self.state = State::Ground;
    }

    /// ESC while inside a string state delivers the accumulated payload, as
    /// the ESC of `ESC \` (the 7-bit ST).
    fn terminate_string<P: Perform>(&mut self, performer: &mut P) {
        match self.state {
            State::OscString => performer.osc_dispatch(&self.osc_buf, false),
            State::DcsPassthrough => performer.dcs_unhook(),
            State::SosPmApcString if self.string_is_apc => {
                performer.apc_dispatch(&self.apc_buf);
            }
            _ => {}
        }
    }

    fn enter_escape(&mut self) {
        self.intermediates.clear();
        self.utf8.reset();
        self.state = State::Escape;
    }

    fn clear_sequence(&mut self) {
        self.params.clear();
        self.intermediates.clear();
        self.private_marker = None;
    }

    fn is_c0(byte: u8) -> bool {
        matches!(byte, 0x00..=0x17 | 0x19 | 0x1c..=0x1f)
    }

    // -- per-state handlers --

    fn ground<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        if self.utf8_mode && (self.utf8.pending() || byte >= 0x80) {
            match self.utf8.advance(byte) {
                Utf8Step::Incomplete => {}
                Utf8Step::Decoded(ch) => performer.print(ch),
                Utf8Step::Invalid { reprocess } => {
                    performer.print('\u{fffd}');
                    if reprocess {
                        self.advance(performer, byte);
                    }
                }
            }
            return;
        }
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x7e => performer.print(char::from(byte)),
            DEL => {}
            // 8-bit operation: C1 controls introduce sequences directly.
            0x90 => {
                self.clear_sequence();
                self.state = State::DcsEntry;
            }
            0x9b => {
                self.clear_sequence();
                self.state = State::CsiEntry;
            }
            0x9d => {
                self.osc_buf.clear();
                self.state = State::OscString;
            }
            0x9f => {
                self.apc_buf.clear();
                self.string_is_apc = true;
                self.state = State::SosPmApcString;
            }
            0x98 | 0x9e => {
                self.string_is_apc = false;
                self.state = State::SosPmApcString;
            }
            ST_C1 => {}
            0x80..=0x9a => performer.execute(byte),
            // GR range in 8-bit operation; the dispatcher translates
            // through the GR slot.
            0xa0..=0xff => performer.print(char::from(byte)),
            // Remaining C0 bytes were consumed by the guard arm or the
            // global CAN/SUB/ESC rules.
            _ => {}
        }
    }

    fn escape<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::EscapeIntermediate;
            }
            b'[' => {
                self.clear_sequence();
                self.state = State::CsiEntry;
            }
            b']' => {
                self.osc_buf.clear();
                self.state = State::OscString;
            }
            b'P' => {
                self.clear_sequence();
                self.state = State::DcsEntry;
            }
            b'_' => {
                self.apc_buf.clear();
                self.string_is_apc = true;
                self.state = State::SosPmApcString;
            }
            b'X' | b'^' => {
                self.string_is_apc = false;
                self.state = State::SosPmApcString;
            }
            0x30..=0x7e => {
                performer.esc_dispatch(&self.intermediates, byte);
                self.state = State::Ground;
            }
            _ => {}
        }
    }

    fn escape_intermediate<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => self.intermediates.push(byte),
            0x30..=0x7e => {
                performer.esc_dispatch(&self.intermediates, byte);
                self.state = State::Ground;
            }
            _ => {}
        }
    }

    fn csi_entry<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::CsiIntermediate;
            }
            b'0'..=b'9' => {
                self.params.push_digit(byte - b'0');
                self.state = State::CsiParam;
            }
            b';' => {
                self.params.next_param();
                self.state = State::CsiParam;
            }
            b':' => {
                self.params.next_subparam();
                self.state = State::CsiParam;
            }
            0x3c..=0x3f => {
                self.private_marker = Some(byte);
                self.state = State::CsiParam;
            }
            0x40..=0x7e => self.csi_finish(performer, byte),
            _ => {}
        }
    }

    fn csi_param<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            b'0'..=b'9' => self.params.push_digit(byte - b'0'),
            b';' => self.params.next_param(),
            b':' => self.params.next_subparam(),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::CsiIntermediate;
            }
            // A private marker after parameters is malformed.
            0x3c..=0x3f => self.state = State::CsiIgnore,
            0x40..=0x7e => self.csi_finish(performer, byte),
            _ => {}
        }
    }

    fn csi_intermediate<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => self.intermediates.push(byte),
            0x30..=0x3f => self.state = State::CsiIgnore,
            0x40..=0x7e => self.csi_finish(performer, byte),
            _ => {}
        }
    }

    fn csi_ignore<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x40..=0x7e => self.state = State::Ground,
            _ => {}
        }
    }

    fn csi_finish<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        performer.csi_dispatch(
            self.private_marker,
            &self.params,
            &self.intermediates,
            char::from(byte),
        );
        self.state = State::Ground;
    }

    fn osc_string<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            BEL => {
                performer.osc_dispatch(&self.osc_buf, true);
                self.state = State::Ground;
            }
            ST_C1 if !self.utf8_mode => {
                performer.osc_dispatch(&self.osc_buf, false);
                self.state = State::Ground;
            }
            _ if Self::is_c0(byte) => {}
            _ => {
                if self.osc_buf.len() < OSC_BUF_MAX {
                    self.osc_buf.push(byte);
                }
            }
        }
    }

    fn dcs_entry<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::DcsIntermediate;
            }
            b'0'..=b'9' => {
                self.params.push_digit(byte - b'0');
                self.state = State::DcsParam;
            }
            b';' => {
                self.params.next_param();
                self.state = State::DcsParam;
            }
            b':' => {
                self.params.next_subparam();
                self.state = State::DcsParam;
            }
            0x3c..=0x3f => {
                self.private_marker = Some(byte);
                self.state = State::DcsParam;
            }
            0x40..=0x7e => self.dcs_finish(performer, byte),
            _ => {}
        }
    }

    fn dcs_param<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            b'0'..=b'9' => self.params.push_digit(byte - b'0'),
            b';' => self.params.next_param(),
            b':' => self.params.next_subparam(),
            0x20..=0x2f => {
                self.intermediates.push(byte);
                self.state = State::DcsIntermediate;
            }
            0x3c..=0x3f => self.state = State::DcsIgnore,
            0x40..=0x7e => self.dcs_finish(performer, byte),
            _ => {}
        }
    }

    fn dcs_intermediate<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            _ if Self::is_c0(byte) => performer.execute(byte),
            0x20..=0x2f => self.intermediates.push(byte),
            0x30..=0x3f => self.state = State::DcsIgnore,
            0x40..=0x7e => self.dcs_finish(performer, byte),
            _ => {}
        }
    }

    fn dcs_finish<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        performer.dcs_hook(
            self.private_marker,
            &self.params,
            &self.intermediates,
            char::from(byte),
        );
        self.state = State::DcsPassthrough;
    }

    fn dcs_passthrough<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            ST_C1 if !self.utf8_mode => {
                performer.dcs_unhook();
                self.state = State::Ground;
            }
            _ => performer.dcs_put(byte),
        }
    }

    fn dcs_ignore(&mut self, byte: u8) {
        if byte == ST_C1 && !self.utf8_mode {
            self.state = State::Ground;
        }
    }

    fn sos_pm_apc<P: Perform>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            ST_C1 if !self.utf8_mode => {
                if self.string_is_apc {
                    performer.apc_dispatch(&self.apc_buf);
                }
                self.state = State::Ground;
            }
            _ if Self::is_c0(byte) => {}
            _ => {
                if self.string_is_apc && self.apc_buf.len() < APC_BUF_MAX {
                    self.apc_buf.push(byte);
                }
            }
        }
    }
}
