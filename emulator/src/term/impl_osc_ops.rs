// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! OSC handling: titles (0/1/2), palette (4/104), hyperlinks (8), default
//! colors (10/11/12), and clipboard (52).
//!
//! Payloads arrive raw from the parser; the split on `;` happens here
//! because each code has its own grammar. Query forms (`?`) answer through
//! the response channel with the matching OSC reply, ST-terminated.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::emulator::EmulatorEvent;
use crate::style::Hyperlink;

use super::TerminalState;

impl TerminalState {
    /// Entry point from the dispatcher.
    pub fn handle_osc(&mut self, payload: &[u8]) {
        let (code, rest) = match split_code(payload) {
            Some(parts) => parts,
            None => {
                debug!("OSC: payload without numeric code ignored");
                return;
            }
        };
        match code {
            0 | 1 | 2 => self.osc_set_title(rest),
            4 => self.osc_palette(rest),
            8 => self.osc_hyperlink(rest),
            10 | 11 | 12 => self.osc_default_color(code, rest),
            52 => self.osc_clipboard(rest),
            104 => self.osc_palette_reset(rest),
            _ => debug!(code, "OSC: unhandled code ignored"),
        }
    }

    fn osc_set_title(&mut self, rest: &[u8]) {
        let title = String::from_utf8_lossy(rest).into_owned();
        self.title = Some(title.clone());
        self.push_event(EmulatorEvent::TitleChanged(title));
    }

    /// OSC 4: `index;spec` pairs. A spec of `?` queries; otherwise it sets
    /// a palette override.
    fn osc_palette(&mut self, rest: &[u8]) {
        let text = String::from_utf8_lossy(rest);
        let mut parts = text.split(';');
        while let (Some(index_text), Some(spec)) = (parts.next(), parts.next()) {
            let Ok(index) = index_text.parse::<u8>() else {
                debug!(index_text, "OSC 4: bad palette index ignored");
                continue;
            };
            if spec == "?" {
                let (r, g, b) = self.palette.resolve(index);
                self.responses.send_str(&format!(
                    "\x1b]4;{index};{}\x1b\\",
                    format_x11_rgb(r, g, b)
                ));
            } else if let Some(rgb) = parse_color_spec(spec) {
                self.palette.set(index, rgb);
            } else {
                debug!(spec, "OSC 4: unparseable color spec ignored");
            }
        }
    }

    /// OSC 104: reset listed palette indices, or all when none are listed.
    fn osc_palette_reset(&mut self, rest: &[u8]) {
        if rest.is_empty() {
            self.palette.reset_all();
            return;
        }
        for index_text in String::from_utf8_lossy(rest).split(';') {
            if let Ok(index) = index_text.parse::<u8>() {
                self.palette.reset(index);
            }
        }
    }

    /// OSC 8: `params;uri`. An empty URI ends the current hyperlink run.
    fn osc_hyperlink(&mut self, rest: &[u8]) {
        let text = String::from_utf8_lossy(rest);
        let Some((params, uri)) = text.split_once(';') else {
            self.set_hyperlink(None);
            return;
        };
        if uri.is_empty() {
            self.set_hyperlink(None);
            return;
        }
        let id = params
            .split(':')
            .find_map(|kv| kv.strip_prefix("id="))
            .map(str::to_owned);
        self.set_hyperlink(Some(Arc::new(Hyperlink { id, uri: uri.to_owned() })));
    }

    /// OSC 10/11/12: default foreground / background / cursor color.
    fn osc_default_color(&mut self, code: u16, rest: &[u8]) {
        if rest == b"?" {
            let (r, g, b) = match code {
                10 => self.default_fg,
                11 => self.default_bg,
                _ => self.default_fg,
            };
            self.responses.send_str(&format!(
                "\x1b]{code};{}\x1b\\",
                format_x11_rgb(r, g, b)
            ));
            return;
        }
        match (code, parse_color_spec(&String::from_utf8_lossy(rest))) {
            (10, Some(rgb)) => self.default_fg = rgb,
            (11, Some(rgb)) => self.default_bg = rgb,
            (12, Some(_)) => {} // cursor color: accepted, renderer-owned
            _ => debug!(code, "OSC: unparseable default-color spec ignored"),
        }
    }

    /// OSC 52: `Pc;Pd`. The payload is stored on the emulator (never the OS
    /// clipboard) and echoed back base64-encoded on `?` queries.
    fn osc_clipboard(&mut self, rest: &[u8]) {
        let text = String::from_utf8_lossy(rest);
        let Some((selection, data)) = text.split_once(';') else { return };
        if data == "?" {
            let stored = self.clipboard.as_deref().unwrap_or(&[]);
            self.responses.send_str(&format!(
                "\x1b]52;{selection};{}\x1b\\",
                BASE64.encode(stored)
            ));
            return;
        }
        if data.is_empty() {
            self.clipboard = None;
            return;
        }
        match BASE64.decode(data.as_bytes()) {
            Ok(decoded) => self.clipboard = Some(decoded),
            Err(_) => debug!("OSC 52: bad base64 payload ignored"),
        }
    }
}

/// Split `code;rest`, accepting a bare `code` with empty rest.
fn split_code(payload: &[u8]) -> Option<(u16, &[u8])> {
    let split_at = payload
        .iter()
        .position(|&b| b == b';')
        .unwrap_or(payload.len());
    let code = std::str::from_utf8(&payload[..split_at]).ok()?.parse().ok()?;
    let rest = payload.get(split_at + 1..).unwrap_or(&[]);
    Some((code, rest))
}

/// `rgb:RR/GG/BB` (1–4 hex digits per component) or `#RRGGBB`.
fn parse_color_spec(spec: &str) -> Option<(u8, u8, u8)> {
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some((r, g, b));
        }
        return None;
    }
    let components = spec.strip_prefix("rgb:")?;
    let mut parts = components.split('/');
    let r = parse_scaled_hex(parts.next()?)?;
    let g = parse_scaled_hex(parts.next()?)?;
    let b = parse_scaled_hex(parts.next()?)?;
    Some((r, g, b))
}

/// Scale a 1–4 digit hex component to 8 bits.
fn parse_scaled_hex(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 4 {
        return None;
    }
    let value = u32::from_str_radix(text, 16).ok()?;
    let max = (1u32 << (4 * text.len() as u32)) - 1;
    Some(((value * 255 + max / 2) / max) as u8)
}

/// X11 four-digit-per-component form used in query replies.
fn format_x11_rgb(r: u8, g: u8, b: u8) -> String {
    let widen = |v: u8| u16::from(v) * 0x0101;
    format!("rgb:{:04x}/{:04x}/{:04x}", widen(r), widen(g), widen(b))
}
