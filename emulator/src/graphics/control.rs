// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Control-segment parsing: `G k=v,k=v,…;payload` → [`KittyCommand`].
//!
//! Unknown keys are ignored (forward compatibility); a malformed value for
//! a known key fails the whole segment, which the caller reports as one
//! error response.

use strum_macros::Display;

/// `a=` — what to do with this transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum KittyAction {
    /// `a=t` (default): transmit data only.
    #[default]
    Transmit,
    /// `a=T`: transmit and display at the cursor.
    TransmitAndDisplay,
    /// `a=p`: place a previously transmitted image.
    Put,
    /// `a=d`: delete images or placements.
    Delete,
    /// `a=q`: validate the transmission without storing.
    Query,
    /// `a=a`: animation frame (accepted, not composed).
    Frame,
    /// `a=c`: composition (accepted, not composed).
    Compose,
}

/// `f=` — pixel format of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum KittyFormat {
    /// `f=24`: packed RGB.
    Rgb,
    /// `f=32` (default): packed RGBA.
    #[default]
    Rgba,
    /// `f=100`: PNG, dimensions taken from the file itself.
    Png,
}

impl KittyFormat {
    /// Bytes per pixel for raster formats.
    #[must_use]
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::Rgb => Some(3),
            Self::Rgba => Some(4),
            Self::Png => None,
        }
    }
}

/// `t=` — where the payload lives. Only direct transmission is possible for
/// an I/O-free core; file-based media produce an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum KittyMedium {
    #[default]
    Direct,
    File,
    TempFile,
    SharedMemory,
}

/// One parsed APC graphics command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KittyCommand {
    pub action: KittyAction,
    pub format: KittyFormat,
    pub medium: KittyMedium,
    /// `m=1`: more chunks follow for this image id.
    pub more: bool,
    /// `i=`.
    pub image_id: u32,
    /// `p=`.
    pub placement_id: u32,
    /// `s=` / `v=`: claimed pixel dimensions.
    pub width: u32,
    pub height: u32,
    /// `x=` / `y=`: source offset within the image.
    pub x_offset: u32,
    pub y_offset: u32,
    /// `X=` / `Y=`: pixel offset within the destination cell.
    pub cell_x_offset: u32,
    pub cell_y_offset: u32,
    /// `z=`: stacking order (negative draws under text).
    pub z_index: i32,
    /// `q=`: 1 suppresses OK responses, 2 suppresses errors too.
    pub quiet: u8,
    /// `o=z`: payload is zlib-deflated.
    pub compressed: bool,
    /// The base64 data segment, still encoded.
    pub payload: Vec<u8>,
}

/// Recognize and parse a Kitty graphics APC payload. Returns `None` when
/// the payload is not Kitty-framed (other APC users), `Some(Err(_))` when it
/// is Kitty but malformed.
pub fn parse_kitty_apc(payload: &[u8]) -> Option<Result<KittyCommand, String>> {
    let rest = payload.strip_prefix(b"G")?;
    Some(parse_control_and_data(rest))
}

fn parse_control_and_data(rest: &[u8]) -> Result<KittyCommand, String> {
    let (control, data) = match rest.iter().position(|&b| b == b';') {
        Some(split_at) => (&rest[..split_at], &rest[split_at + 1..]),
        None => (rest, &rest[rest.len()..]),
    };

    let mut command = KittyCommand { payload: data.to_vec(), ..KittyCommand::default() };

    let control = std::str::from_utf8(control)
        .map_err(|_| "control segment is not ASCII".to_owned())?;
    for pair in control.split(',') {
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once('=') else {
            return Err(format!("key without value: {pair}"));
        };
        apply_pair(&mut command, key, value)?;
    }
    Ok(command)
}

fn apply_pair(command: &mut KittyCommand, key: &str, value: &str) -> Result<(), String> {
    let numeric = |value: &str| -> Result<u32, String> {
        value
            .parse::<u32>()
            .map_err(|_| format!("bad numeric value for {key}: {value}"))
    };
    match key {
        "a" => {
            command.action = match value {
                "t" => KittyAction::Transmit,
                "T" => KittyAction::TransmitAndDisplay,
                "p" => KittyAction::Put,
                "d" => KittyAction::Delete,
                "q" => KittyAction::Query,
                "a" => KittyAction::Frame,
                "c" => KittyAction::Compose,
                _ => return Err(format!("unknown action: {value}")),
            };
        }
        "f" => {
            command.format = match value {
                "24" => KittyFormat::Rgb,
                "32" => KittyFormat::Rgba,
                "100" => KittyFormat::Png,
                _ => return Err(format!("unknown format: {value}")),
            };
        }
        "t" => {
            command.medium = match value {
                "d" => KittyMedium::Direct,
                "f" => KittyMedium::File,
                "t" => KittyMedium::TempFile,
                "s" => KittyMedium::SharedMemory,
                _ => return Err(format!("unknown medium: {value}")),
            };
        }
        "m" => command.more = numeric(value)? == 1,
        "i" => command.image_id = numeric(value)?,
        "p" => command.placement_id = numeric(value)?,
        "s" => command.width = numeric(value)?,
        "v" => command.height = numeric(value)?,
        "x" => command.x_offset = numeric(value)?,
        "y" => command.y_offset = numeric(value)?,
        "X" => command.cell_x_offset = numeric(value)?,
        "Y" => command.cell_y_offset = numeric(value)?,
        "z" => {
            command.z_index = value
                .parse::<i32>()
                .map_err(|_| format!("bad z value: {value}"))?;
        }
        "q" => command.quiet = numeric(value)?.min(2) as u8,
        "o" => command.compressed = value == "z",
        // Unknown keys: ignore, keep parsing.
        _ => tracing::debug!(key, value, "kitty: unknown control key ignored"),
    }
    Ok(())
}
