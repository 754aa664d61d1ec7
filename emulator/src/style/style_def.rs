// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The immutable [`Style`] value type.
//!
//! A `Style` is a small plain value: two colors, an optional underline color
//! and shape, attribute flags, and an optional hyperlink. Styles are never
//! mutated in place; SGR processing builds a new value and interns it (see
//! [`StyleTable`]), so cells can share one allocation per distinct style.
//!
//! [`StyleTable`]: super::intern::StyleTable

use std::sync::Arc;

use super::attribs::{StyleAttribs, UnderlineKind};
use super::color::Color;

/// Shared, refcounted handle to an interned style. Equality on the handle is
/// structural (it derefs to [`Style`]); pointer equality additionally holds
/// for two handles obtained from the same [`StyleTable`].
///
/// [`StyleTable`]: super::intern::StyleTable
pub type StyleRef = Arc<Style>;

/// An OSC 8 hyperlink attached to a run of cells. The `id` groups visually
/// separate cells into one logical link (e.g. a link that wraps lines).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hyperlink {
    pub id: Option<String>,
    pub uri: String,
}

/// Complete graphic rendition state for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    /// SGR 58/59. `Default` means "use `fg`".
    pub underline_color: Color,
    /// `None` = not underlined.
    pub underline: Option<UnderlineKind>,
    pub attribs: StyleAttribs,
    pub hyperlink: Option<Arc<Hyperlink>>,
}

impl Style {
    /// True when every field is at its default, i.e. this is the style a
    /// blank cell gets after a full reset.
    #[must_use]
    pub fn is_default(&self) -> bool { *self == Style::default() }

    /// The style erase operations fill with: only the background color
    /// survives, per the DEC back-color-erase convention.
    #[must_use]
    pub fn erase_style(&self) -> Style {
        Style { bg: self.bg, ..Style::default() }
    }
}
