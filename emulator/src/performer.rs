// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The sequence dispatcher: a [`Perform`] implementation that routes every
//! parser event to its operation shim.
//!
//! # Pipeline position
//!
//! ```text
//! Emulator::feed(bytes)
//!         ↓
//!     Parser (state machine, owns in-flight sequence state)
//!         ↓
//!     SequencePerformer [THIS MODULE]
//!         ↓
//!     operations::* shims (parameter translation)
//!         ↓
//!     TerminalState impl methods (the VT semantics)
//! ```
//!
//! The performer is deliberately a thin match: every arm is one shim call.
//! Unknown finals are logged through [`tracing`] and ignored — the stream
//! is never blocked, recovery is always local to the sequence.

use tracing::debug;

use crate::operations::{char_ops, charset_ops, cursor_ops, dsr_ops, line_ops, margin_ops,
                        mode_ops, osc_ops, scroll_ops, sgr_ops, terminal_ops};
use crate::parser::params::Params;
use crate::parser::perform::Perform;
use crate::protocols::{csi_codes, esc_codes};
use crate::term::{DcsKind, TerminalState};

/// Borrows the terminal state for the duration of one `feed` call.
#[derive(Debug)]
pub struct SequencePerformer<'a> {
    pub term: &'a mut TerminalState,
}

impl Perform for SequencePerformer<'_> {
    fn print(&mut self, ch: char) { char_ops::print_char(self, ch); }

    fn execute(&mut self, byte: u8) {
        match byte {
            esc_codes::BELL => {
                self.term.push_event(crate::emulator::EmulatorEvent::Bell);
            }
            esc_codes::BACKSPACE => {
                cursor_ops::cursor_backward(self, &Params::new());
            }
            esc_codes::TAB => cursor_ops::tab_forward(self, &Params::new()),
            esc_codes::LINE_FEED | esc_codes::VERTICAL_TAB | esc_codes::FORM_FEED => {
                scroll_ops::index_down(self);
                if self.term.modes.linefeed_newline {
                    self.term.cursor.move_to(self.term.cursor.row, 0);
                }
            }
            esc_codes::CARRIAGE_RETURN => {
                self.term.cursor.move_to(self.term.cursor.row, 0);
            }
            esc_codes::SHIFT_OUT => charset_ops::shift_out(self),
            esc_codes::SHIFT_IN => charset_ops::shift_in(self),
            // 8-bit C1 forms (reachable only with UTF-8 mode off).
            esc_codes::C1_IND => scroll_ops::index_down(self),
            esc_codes::C1_NEL => scroll_ops::next_line(self),
            esc_codes::C1_HTS => terminal_ops::set_tab_stop(self),
            esc_codes::C1_RI => scroll_ops::reverse_index(self),
            esc_codes::C1_SS2 => charset_ops::single_shift(self, 2),
            esc_codes::C1_SS3 => charset_ops::single_shift(self, 3),
            _ => {}
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], byte: u8) {
        if let [intermediate] = intermediates {
            charset_ops::designate_charset(self, *intermediate, byte);
            return;
        }
        match byte {
            esc_codes::DECSC_SAVE_CURSOR => cursor_ops::save_cursor(self),
            esc_codes::DECRC_RESTORE_CURSOR => cursor_ops::restore_cursor(self),
            esc_codes::IND_INDEX_DOWN => scroll_ops::index_down(self),
            esc_codes::NEL_NEXT_LINE => scroll_ops::next_line(self),
            esc_codes::HTS_SET_TAB => terminal_ops::set_tab_stop(self),
            esc_codes::RI_REVERSE_INDEX => scroll_ops::reverse_index(self),
            esc_codes::SS2_SINGLE_SHIFT_2 => charset_ops::single_shift(self, 2),
            esc_codes::SS3_SINGLE_SHIFT_3 => charset_ops::single_shift(self, 3),
            esc_codes::RIS_RESET => terminal_ops::reset_terminal(self),
            esc_codes::DECKPAM_KEYPAD_APP => {
                terminal_ops::set_keypad_application(self, true);
            }
            esc_codes::DECKPNM_KEYPAD_NUMERIC => {
                terminal_ops::set_keypad_application(self, false);
            }
            _ => debug!(final_byte = %char::from(byte), "ESC: unknown sequence ignored"),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn csi_dispatch(
        &mut self,
        private_marker: Option<u8>,
        params: &Params,
        intermediates: &[u8],
        final_byte: char,
    ) {
        // Intermediate-qualified finals first; they reuse final bytes that
        // also exist bare.
        match (intermediates, final_byte) {
            ([b' '], csi_codes::DECSCUSR_CURSOR_STYLE) => {
                terminal_ops::set_cursor_style(self, params);
                return;
            }
            ([b'!'], csi_codes::DECSTR_SOFT_RESET) => {
                terminal_ops::soft_reset(self);
                return;
            }
            ([], _) => {}
            _ => {
                debug!(
                    ?intermediates,
                    final_byte = %final_byte,
                    "CSI: unknown intermediate form ignored"
                );
                return;
            }
        }

        match final_byte {
            // Cursor movement.
            csi_codes::CUU_CURSOR_UP => cursor_ops::cursor_up(self, params),
            csi_codes::CUD_CURSOR_DOWN => cursor_ops::cursor_down(self, params),
            csi_codes::CUF_CURSOR_FORWARD => cursor_ops::cursor_forward(self, params),
            csi_codes::CUB_CURSOR_BACKWARD => cursor_ops::cursor_backward(self, params),
            csi_codes::CNL_CURSOR_NEXT_LINE => cursor_ops::cursor_next_line(self, params),
            csi_codes::CPL_CURSOR_PREV_LINE => cursor_ops::cursor_prev_line(self, params),
            csi_codes::CHA_CURSOR_COLUMN | csi_codes::HPA_HORIZONTAL_POSITION => {
                cursor_ops::cursor_column(self, params);
            }
            csi_codes::HPR_HORIZONTAL_RELATIVE => {
                cursor_ops::cursor_forward(self, params);
            }
            csi_codes::CUP_CURSOR_POSITION | csi_codes::HVP_CURSOR_POSITION => {
                cursor_ops::cursor_position(self, params);
            }
            csi_codes::VPA_VERTICAL_POSITION => {
                cursor_ops::vertical_position(self, params);
            }
            csi_codes::VPR_VERTICAL_RELATIVE => cursor_ops::cursor_down(self, params),
            csi_codes::CHT_TAB_FORWARD => cursor_ops::tab_forward(self, params),
            csi_codes::CBT_TAB_BACKWARD => cursor_ops::tab_backward(self, params),

            // Erasing.
            csi_codes::ED_ERASE_DISPLAY => scroll_ops::erase_display(self, params),
            csi_codes::EL_ERASE_LINE => scroll_ops::erase_line(self, params),

            // Line and character editing.
            csi_codes::IL_INSERT_LINE => line_ops::insert_lines(self, params),
            csi_codes::DL_DELETE_LINE => line_ops::delete_lines(self, params),
            csi_codes::ICH_INSERT_CHAR => char_ops::insert_chars(self, params),
            csi_codes::DCH_DELETE_CHAR => char_ops::delete_chars(self, params),
            csi_codes::ECH_ERASE_CHAR => char_ops::erase_chars(self, params),
            csi_codes::REP_REPEAT_CHAR => char_ops::repeat_char(self, params),

            // Scrolling and margins.
            csi_codes::SU_SCROLL_UP => scroll_ops::scroll_up(self, params),
            csi_codes::SD_SCROLL_DOWN => scroll_ops::scroll_down(self, params),
            csi_codes::DECSTBM_SET_MARGINS => margin_ops::set_margins(self, params),

            // Modes and rendition.
            csi_codes::SM_SET_MODE => mode_ops::set_mode(self, private_marker, params),
            csi_codes::RM_RESET_MODE => mode_ops::reset_mode(self, private_marker, params),
            csi_codes::SGR_SET_GRAPHICS => sgr_ops::set_graphics_rendition(self, params),

            // Reports and state.
            csi_codes::DSR_DEVICE_STATUS => dsr_ops::status_report(self, params),
            csi_codes::DA_DEVICE_ATTRIBUTES => {
                dsr_ops::device_attributes(self, private_marker, params);
            }
            csi_codes::DECREQTPARM_REQUEST => {
                dsr_ops::request_terminal_parameters(self, params);
            }
            csi_codes::TBC_TAB_CLEAR => terminal_ops::clear_tab_stops(self, params),
            csi_codes::SCP_SAVE_CURSOR => cursor_ops::save_cursor(self),
            csi_codes::RCP_RESTORE_CURSOR => cursor_ops::restore_cursor(self),
            csi_codes::XTWINOPS_WINDOW_OPS => {
                // Window manipulation: parsed for stream hygiene, ignored —
                // the embedder owns the window.
                debug!("CSI t: window manipulation ignored");
            }
            _ => debug!(final_byte = %final_byte, "CSI: unknown final ignored"),
        }
    }

    fn osc_dispatch(&mut self, payload: &[u8], _bell_terminated: bool) {
        osc_ops::dispatch_osc(self, payload);
    }

    fn dcs_hook(
        &mut self,
        _private_marker: Option<u8>,
        _params: &Params,
        intermediates: &[u8],
        final_byte: char,
    ) {
        let kind = match (intermediates, final_byte) {
            ([b'$'], 'q') => DcsKind::RequestStatusString,
            _ => {
                // Sixel (`DCS q`) and other device strings: drained, dropped.
                debug!(?intermediates, final_byte = %final_byte, "DCS: payload will be ignored");
                DcsKind::Ignored
            }
        };
        self.term.dcs.start(kind);
    }

    fn dcs_put(&mut self, byte: u8) { self.term.dcs.push(byte); }

    fn dcs_unhook(&mut self) {
        if let Some((kind, data)) = self.term.dcs.finish() {
            match kind {
                DcsKind::RequestStatusString => self.term.request_status_string(&data),
                DcsKind::Ignored => {}
            }
        }
    }

    fn apc_dispatch(&mut self, payload: &[u8]) {
        let cursor = (self.term.cursor.row, self.term.cursor.col);
        self.term
            .graphics
            .handle_apc(payload, cursor, &mut self.term.responses);
    }
}
