// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Device report shims (DSR, DA1/DA2, DECREQTPARM). See
//! [`crate::term::impl_terminal_ops`].

use crate::parser::params::Params;
use crate::performer::SequencePerformer;

pub fn status_report(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer.term.device_status_report(params.get(0).unwrap_or(0));
}

/// CSI c / CSI > c, selected by the private marker.
pub fn device_attributes(
    performer: &mut SequencePerformer<'_>,
    private_marker: Option<u8>,
    params: &Params,
) {
    // Only parameter 0 (or none) requests attributes.
    if params.get(0).unwrap_or(0) != 0 {
        return;
    }
    match private_marker {
        None => performer.term.device_attributes_primary(),
        Some(b'>') => performer.term.device_attributes_secondary(),
        _ => {}
    }
}

pub fn request_terminal_parameters(performer: &mut SequencePerformer<'_>, params: &Params) {
    performer
        .term
        .request_terminal_parameters(params.get(0).unwrap_or(0));
}
