// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SGR application: a parameter list becomes a delta on the pending style.
//!
//! Both sub-parameter grammars are accepted for extended colors:
//! `38;5;n` / `38;2;r;g;b` (legacy semicolons) and `38:5:n` /
//! `38:2::r:g:b` (colon groups). Unknown codes are skipped and processing
//! continues. SGR never touches the hyperlink — that belongs to OSC 8.

use crate::parser::params::Params;
use crate::protocols::sgr_codes as sgr;
use crate::style::{Color, Style, StyleAttribs, UnderlineKind};

use super::TerminalState;

impl TerminalState {
    /// CSI … m.
    pub fn apply_sgr(&mut self, params: &Params) {
        if params.is_empty() {
            self.sgr_reset();
            return;
        }

        let groups: Vec<&[u16]> = params.iter().collect();
        let mut i = 0;
        while i < groups.len() {
            let group = groups[i];
            let code = group[0];
            match code {
                sgr::SGR_FG_EXTENDED => {
                    if let Some(color) = parse_extended_color(&groups, &mut i) {
                        self.pending.modify(|s| s.fg = color);
                    }
                }
                sgr::SGR_BG_EXTENDED => {
                    if let Some(color) = parse_extended_color(&groups, &mut i) {
                        self.pending.modify(|s| s.bg = color);
                    }
                }
                sgr::SGR_UNDERLINE_COLOR => {
                    if let Some(color) = parse_extended_color(&groups, &mut i) {
                        self.pending.modify(|s| s.underline_color = color);
                    }
                }
                _ => self.apply_sgr_code(group),
            }
            i += 1;
        }
    }

    /// SGR 0: attributes and colors to defaults; the active hyperlink is
    /// OSC-owned state and survives.
    fn sgr_reset(&mut self) {
        self.pending.modify(|style| {
            let hyperlink = style.hyperlink.take();
            *style = Style { hyperlink, ..Style::default() };
        });
    }

    /// One non-extended code (with its sub-parameters, used by `4:k`).
    #[allow(clippy::too_many_lines)]
    fn apply_sgr_code(&mut self, group: &[u16]) {
        let code = group[0];
        match code {
            sgr::SGR_RESET => self.sgr_reset(),
            sgr::SGR_BOLD => self.set_attrib(StyleAttribs::BOLD, true),
            sgr::SGR_FAINT => self.set_attrib(StyleAttribs::FAINT, true),
            sgr::SGR_ITALIC => self.set_attrib(StyleAttribs::ITALIC, true),
            sgr::SGR_UNDERLINE => {
                let kind = match group.get(1) {
                    Some(&sub) => UnderlineKind::from_sgr_subparam(sub),
                    None => Some(UnderlineKind::Single),
                };
                self.pending.modify(|s| s.underline = kind);
            }
            sgr::SGR_BLINK | sgr::SGR_RAPID_BLINK => {
                self.set_attrib(StyleAttribs::BLINK, true);
            }
            sgr::SGR_REVERSE => self.set_attrib(StyleAttribs::REVERSE, true),
            sgr::SGR_HIDDEN => self.set_attrib(StyleAttribs::HIDDEN, true),
            sgr::SGR_STRIKETHROUGH => self.set_attrib(StyleAttribs::STRIKETHROUGH, true),
            sgr::SGR_DOUBLE_UNDERLINE => {
                self.pending.modify(|s| s.underline = Some(UnderlineKind::Double));
            }
            sgr::SGR_RESET_BOLD_FAINT => {
                self.pending.modify(|s| {
                    s.attribs.remove(StyleAttribs::BOLD);
                    s.attribs.remove(StyleAttribs::FAINT);
                });
            }
            sgr::SGR_RESET_ITALIC => self.set_attrib(StyleAttribs::ITALIC, false),
            sgr::SGR_RESET_UNDERLINE => {
                self.pending.modify(|s| s.underline = None);
            }
            sgr::SGR_RESET_BLINK => self.set_attrib(StyleAttribs::BLINK, false),
            sgr::SGR_RESET_REVERSE => self.set_attrib(StyleAttribs::REVERSE, false),
            sgr::SGR_RESET_HIDDEN => self.set_attrib(StyleAttribs::HIDDEN, false),
            sgr::SGR_RESET_STRIKETHROUGH => {
                self.set_attrib(StyleAttribs::STRIKETHROUGH, false);
            }
            sgr::SGR_FG_BLACK..=sgr::SGR_FG_WHITE => {
                let index = (code - sgr::SGR_FG_BLACK) as u8;
                self.pending.modify(|s| s.fg = Color::Indexed(index));
            }
            sgr::SGR_FG_DEFAULT => self.pending.modify(|s| s.fg = Color::Default),
            sgr::SGR_BG_BLACK..=sgr::SGR_BG_WHITE => {
                let index = (code - sgr::SGR_BG_BLACK) as u8;
                self.pending.modify(|s| s.bg = Color::Indexed(index));
            }
            sgr::SGR_BG_DEFAULT => self.pending.modify(|s| s.bg = Color::Default),
            sgr::SGR_UNDERLINE_COLOR_DEFAULT => {
                self.pending.modify(|s| s.underline_color = Color::Default);
            }
            sgr::SGR_FG_BRIGHT_BLACK..=sgr::SGR_FG_BRIGHT_WHITE => {
                let index = (code - sgr::SGR_FG_BRIGHT_BLACK) as u8 + 8;
                self.pending.modify(|s| s.fg = Color::Indexed(index));
            }
            sgr::SGR_BG_BRIGHT_BLACK..=sgr::SGR_BG_BRIGHT_WHITE => {
                let index = (code - sgr::SGR_BG_BRIGHT_BLACK) as u8 + 8;
                self.pending.modify(|s| s.bg = Color::Indexed(index));
            }
            _ => tracing::debug!(code, "SGR: unknown code ignored"),
        }
    }

    fn set_attrib(&mut self, attrib: StyleAttribs, on: bool) {
        self.pending.modify(|style| {
            if on {
                style.attribs.insert(attrib);
            } else {
                style.attribs.remove(attrib);
            }
        });
    }
}

/// Parse an extended color at `groups[*i]`, consuming following groups in
/// the semicolon grammar. Out-of-range components saturate; a truncated
/// grammar yields `None` (code skipped).
fn parse_extended_color(groups: &[&[u16]], i: &mut usize) -> Option<Color> {
    let group = groups[*i];
    if group.len() > 1 {
        // Colon grammar: self-contained group.
        match group[1] {
            sgr::COLOR_MODE_INDEXED => group.get(2).map(|&n| Color::Indexed((n % 256) as u8)),
            sgr::COLOR_MODE_RGB => {
                // `38:2:r:g:b` or `38:2:<colorspace>:r:g:b`.
                let rgb = if group.len() >= 6 { &group[3..6] } else { group.get(2..5)? };
                Some(Color::Rgb(clamp8(rgb[0]), clamp8(rgb[1]), clamp8(rgb[2])))
            }
            _ => None,
        }
    } else {
        // Semicolon grammar: mode and components are separate groups.
        let mode = *groups.get(*i + 1)?.first()?;
        match mode {
            sgr::COLOR_MODE_INDEXED => {
                let n = *groups.get(*i + 2)?.first()?;
                *i += 2;
                Some(Color::Indexed((n % 256) as u8))
            }
            sgr::COLOR_MODE_RGB => {
                let r = *groups.get(*i + 2)?.first()?;
                let g = *groups.get(*i + 3)?.first()?;
                let b = *groups.get(*i + 4)?.first()?;
                *i += 4;
                Some(Color::Rgb(clamp8(r), clamp8(g), clamp8(b)))
            }
            _ => {
                *i += 1;
                None
            }
        }
    }
}

fn clamp8(value: u16) -> u8 { value.min(255) as u8 }
