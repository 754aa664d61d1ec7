// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! Transmission assembly: chunk reassembly keyed by image id, base64 and
//! zlib decoding, payload validation, and the ack/error responses.
//!
//! Chunked form: the first chunk carries the full control segment with
//! `m=1`; continuation chunks carry only `m=` (and `i=`) plus more data;
//! `m=0` or its absence seals the image. Each chunk's data segment is
//! base64-decoded independently and the raw bytes concatenated, then the
//! whole payload is inflated once if `o=z` was claimed.

use std::io::Read;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::response::ResponseChannel;

use super::control::{KittyAction, KittyCommand, KittyFormat, KittyMedium, parse_kitty_apc};
use super::store::{ImageStore, KittyImage, MAX_IMAGE_BYTES, Placement};

/// Why a transmission was rejected. `Display` renders the wire form the
/// response channel carries back to the application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphicsError {
    #[error("EINVAL:{0}")]
    Malformed(String),
    #[error("EBASE64:invalid data")]
    BadBase64,
    #[error("EZLIB:{0}")]
    BadZlib(String),
    #[error("ESIZE:expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("EFBIG:payload exceeds cap")]
    TooLarge,
    #[error("EMEDIUM:only direct transmission is supported")]
    UnsupportedMedium,
    #[error("ENOENT:no such image")]
    UnknownImage,
}

/// An in-flight chunked transmission.
#[derive(Debug)]
struct PendingTransmission {
    /// Control fields from the opening chunk.
    command: KittyCommand,
    /// Decoded bytes accumulated so far.
    data: Vec<u8>,
}

/// Kitty graphics state owned by the terminal: in-flight transmissions plus
/// the sealed image store.
#[derive(Debug)]
pub struct GraphicsState {
    enabled: bool,
    pending: FxHashMap<u32, PendingTransmission>,
    pub store: ImageStore,
}

impl GraphicsState {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled, pending: FxHashMap::default(), store: ImageStore::default() }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Drop everything (RIS).
    pub fn clear(&mut self) {
        self.pending.clear();
        self.store.clear();
    }

    /// Entry point for a complete APC payload. `cursor` anchors `a=T`
    /// placements.
    pub fn handle_apc(
        &mut self,
        payload: &[u8],
        cursor: (u16, u16),
        responses: &mut ResponseChannel,
    ) {
        let Some(parsed) = parse_kitty_apc(payload) else {
            debug!("APC: non-graphics payload ignored");
            return;
        };
        if !self.enabled {
            debug!("kitty: graphics disabled, payload dropped");
            return;
        }
        match parsed {
            Ok(command) => self.dispatch(command, cursor, responses),
            Err(reason) => {
                debug!(reason = %reason, "kitty: malformed control segment");
                respond(responses, 0, 0, &GraphicsError::Malformed(reason).to_string());
            }
        }
    }

    fn dispatch(
        &mut self,
        command: KittyCommand,
        cursor: (u16, u16),
        responses: &mut ResponseChannel,
    ) {
        match command.action {
            KittyAction::Query => self.query(&command, responses),
            KittyAction::Delete => {
                self.store.delete(command.image_id, command.placement_id);
            }
            KittyAction::Put => self.put(&command, cursor, responses),
            KittyAction::Transmit | KittyAction::TransmitAndDisplay => {
                self.transmit(command, cursor, responses);
            }
            KittyAction::Frame | KittyAction::Compose => {
                debug!(action = %command.action, "kitty: animation action accepted, not composed");
            }
        }
    }

    /// `a=q`: validate without storing.
    fn query(&mut self, command: &KittyCommand, responses: &mut ResponseChannel) {
        if command.medium != KittyMedium::Direct {
            respond_err(responses, command, &GraphicsError::UnsupportedMedium);
            return;
        }
        match BASE64.decode(&command.payload) {
            Ok(_) => respond_ok(responses, command),
            Err(_) => respond_err(responses, command, &GraphicsError::BadBase64),
        }
    }

    /// `a=p`: place an already-stored image.
    fn put(
        &mut self,
        command: &KittyCommand,
        cursor: (u16, u16),
        responses: &mut ResponseChannel,
    ) {
        let placement = Placement {
            placement_id: command.placement_id,
            row: cursor.0,
            col: cursor.1,
            cell_x_offset: command.cell_x_offset,
            cell_y_offset: command.cell_y_offset,
            z_index: command.z_index,
        };
        if self.store.add_placement(command.image_id, placement) {
            respond_ok(responses, command);
        } else {
            respond_err(responses, command, &GraphicsError::UnknownImage);
        }
    }

    /// `a=t` / `a=T`: accumulate chunks; seal on the final one.
    fn transmit(
        &mut self,
        command: KittyCommand,
        cursor: (u16, u16),
        responses: &mut ResponseChannel,
    ) {
        let id = command.image_id;

        if command.medium != KittyMedium::Direct {
            respond_err(responses, &command, &GraphicsError::UnsupportedMedium);
            return;
        }

        let decoded = match BASE64.decode(&command.payload) {
            Ok(decoded) => decoded,
            Err(_) => {
                self.pending.remove(&id);
                respond_err(responses, &command, &GraphicsError::BadBase64);
                return;
            }
        };

        let is_continuation = self.pending.contains_key(&id);
        if !is_continuation {
            // A bare continuation chunk (no geometry, more expected) whose
            // opening chunk we never saw: drop it.
            let looks_bare = command.width == 0
                && command.height == 0
                && command.format == KittyFormat::Rgba;
            if looks_bare && command.more {
                debug!(id, "kitty: continuation chunk for unknown id dropped");
                return;
            }
            self.pending
                .insert(id, PendingTransmission { command: command.clone(), data: Vec::new() });
        }

        let finished = {
            let pending = self.pending.get_mut(&id).expect("just inserted");
            pending.data.extend_from_slice(&decoded);
            if pending.data.len() > MAX_IMAGE_BYTES {
                self.pending.remove(&id);
                respond_err(responses, &command, &GraphicsError::TooLarge);
                return;
            }
            !command.more
        };
        if !finished {
            return;
        }

        let pending = self.pending.remove(&id).expect("checked above");
        self.seal(pending, cursor, responses);
    }

    fn seal(
        &mut self,
        pending: PendingTransmission,
        cursor: (u16, u16),
        responses: &mut ResponseChannel,
    ) {
        let command = pending.command;
        let mut data = pending.data;

        if command.compressed {
            data = match inflate(&data) {
                Ok(inflated) => inflated,
                Err(error) => {
                    respond_err(responses, &command, &error);
                    return;
                }
            };
        }

        if let Some(bpp) = command.format.bytes_per_pixel() {
            let expected = command.width as usize * command.height as usize * bpp;
            if expected == 0 || data.len() != expected {
                respond_err(
                    responses,
                    &command,
                    &GraphicsError::SizeMismatch { expected, actual: data.len() },
                );
                return;
            }
        }

        let mut image = KittyImage {
            id: command.image_id,
            format: command.format,
            width: command.width,
            height: command.height,
            data,
            placements: Vec::new(),
        };
        if command.action == KittyAction::TransmitAndDisplay {
            image.placements.push(Placement {
                placement_id: command.placement_id,
                row: cursor.0,
                col: cursor.1,
                cell_x_offset: command.cell_x_offset,
                cell_y_offset: command.cell_y_offset,
                z_index: command.z_index,
            });
        }
        self.store.insert(image);
        respond_ok(responses, &command);
    }
}

/// Inflate with a hard output cap so a zlib bomb cannot blow past the
/// per-image limit.
fn inflate(data: &[u8]) -> Result<Vec<u8>, GraphicsError> {
    let mut decoder = flate2::read::ZlibDecoder::new(data).take(MAX_IMAGE_BYTES as u64 + 1);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|err| GraphicsError::BadZlib(err.to_string()))?;
    if out.len() > MAX_IMAGE_BYTES {
        return Err(GraphicsError::TooLarge);
    }
    Ok(out)
}

fn respond_ok(responses: &mut ResponseChannel, command: &KittyCommand) {
    if command.quiet >= 1 {
        return;
    }
    respond(responses, command.image_id, command.placement_id, "OK");
}

fn respond_err(responses: &mut ResponseChannel, command: &KittyCommand, error: &GraphicsError) {
    if command.quiet >= 2 {
        return;
    }
    respond(responses, command.image_id, command.placement_id, &error.to_string());
}

fn respond(responses: &mut ResponseChannel, image_id: u32, placement_id: u32, message: &str) {
    let reply = if placement_id != 0 {
        format!("\x1b_Gi={image_id},p={placement_id};{message}\x1b\\")
    } else {
        format!("\x1b_Gi={image_id};{message}\x1b\\")
    };
    responses.send_str(&reply);
}
