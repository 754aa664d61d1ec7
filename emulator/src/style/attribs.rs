// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Text attribute flags and underline variants carried by a [`Style`].
//!
//! [`Style`]: super::style_def::Style

use bitflags::bitflags;

bitflags! {
    /// Boolean SGR attributes. Underline is not a flag here; its presence and
    /// shape live in [`Style::underline`] so the five underline kinds stay
    /// mutually exclusive.
    ///
    /// [`Style::underline`]: super::style_def::Style::underline
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StyleAttribs: u16 {
        const BOLD          = 1 << 0;
        const FAINT         = 1 << 1;
        const ITALIC        = 1 << 2;
        const BLINK         = 1 << 3;
        const REVERSE       = 1 << 4;
        const HIDDEN        = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

/// Underline shape selected by SGR 4 (optionally with a `4:n` sub-parameter)
/// or SGR 21 (double).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum UnderlineKind {
    Single,
    Double,
    Curly,
    Dotted,
    Dashed,
}

impl UnderlineKind {
    /// Map the `4:n` sub-parameter of extended underline SGR. `4:0` means no
    /// underline and is handled by the caller; unknown values fall back to a
    /// single underline.
    #[must_use]
    pub fn from_sgr_subparam(n: u16) -> Option<Self> {
        match n {
            0 => None,
            2 => Some(Self::Double),
            3 => Some(Self::Curly),
            4 => Some(Self::Dotted),
            5 => Some(Self::Dashed),
            _ => Some(Self::Single),
        }
    }
}
