// Copyright (c) 2025 Raxol Contributors. Licensed under Apache License, Version 2.0.

//! The upstream response channel.
//!
//! DSR/DA reports, DECRQSS replies, Kitty graphics acks, and mouse/paste
//! reporting all produce bytes the application side of the PTY must see.
//! When a sink is registered the bytes go straight to it; until then they
//! queue, so tests (and embedders that poll) can drain them with
//! [`ResponseChannel::take_queued`]. Registering a sink flushes the queue.

use std::fmt;

/// Callback receiving emulator-generated bytes destined for the PTY.
pub type ResponseSink = Box<dyn FnMut(&[u8]) + Send>;

#[derive(Default)]
pub struct ResponseChannel {
    sink: Option<ResponseSink>,
    queued: Vec<Vec<u8>>,
}

impl fmt::Debug for ResponseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseChannel")
            .field("sink", &self.sink.is_some())
            .field("queued", &self.queued.len())
            .finish()
    }
}

impl ResponseChannel {
    /// Emit bytes upstream (or queue them while no sink is registered).
    pub fn send(&mut self, bytes: &[u8]) {
        match &mut self.sink {
            Some(sink) => sink(bytes),
            None => self.queued.push(bytes.to_vec()),
        }
    }

    pub fn send_str(&mut self, text: &str) { self.send(text.as_bytes()); }

    /// Install the sink, flushing anything queued in order.
    pub fn set_sink(&mut self, mut sink: ResponseSink) {
        for bytes in self.queued.drain(..) {
            sink(&bytes);
        }
        self.sink = Some(sink);
    }

    /// Drain queued responses (only meaningful before a sink is set).
    pub fn take_queued(&mut self) -> Vec<Vec<u8>> { std::mem::take(&mut self.queued) }
}
