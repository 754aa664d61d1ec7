// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! SM/RM shims, routing on the `?` private marker. Each parameter in the
//! list is applied independently. See [`crate::term::impl_mode_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;
use crate::protocols::csi_codes::CSI_PRIVATE_MARKER;

pub fn set_mode(
    performer: &mut SequencePerformer<'_>,
    private_marker: Option<u8>,
    params: &Params,
) {
    apply(performer, private_marker, params, true);
}

pub fn reset_mode(
    performer: &mut SequencePerformer<'_>,
    private_marker: Option<u8>,
    params: &Params,
) {
    apply(performer, private_marker, params, false);
}

fn apply(
    performer: &mut SequencePerformer<'_>,
    private_marker: Option<u8>,
    params: &Params,
    enable: bool,
) {
    let dec_private = private_marker == Some(CSI_PRIVATE_MARKER);
    for group in params {
        let Some(&mode) = group.first() else { continue };
        if dec_private {
            performer.term.set_dec_private_mode(mode, enable);
        } else {
            performer.term.set_ansi_mode(mode, enable);
        }
    }
}
