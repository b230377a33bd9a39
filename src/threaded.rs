// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resizing on a worker thread
//!
//! The carve itself stays strictly sequential; this only moves the
//! loop off the caller's thread and streams its events back through a
//! bounded channel.  When the channel is full the worker waits, and
//! when the receiver is dropped the worker stops after the seam in
//! flight and hands back the last buffer it produced.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::seamcarver::{IterationEvent, PixelBuffer, Resizer};
use crossbeam::channel::{bounded, Receiver};
use log::debug;
use std::thread::{self, JoinHandle};

/// A resize running in the background.
pub struct ResizeHandle {
    events: Receiver<IterationEvent>,
    worker: JoinHandle<Result<PixelBuffer>>,
}

impl ResizeHandle {
    /// The stream of per-seam events.  It closes when the resize ends.
    pub fn events(&self) -> &Receiver<IterationEvent> {
        &self.events
    }

    /// Wait for the worker and take its final buffer.
    pub fn join(self) -> Result<PixelBuffer> {
        let ResizeHandle { events, worker } = self;
        drop(events);
        worker.join().map_err(|_| Error::WorkerPanicked)?
    }
}

/// Start shrinking `buffer` on a worker thread.
///
/// Target validation happens up front, on the caller's thread, so a
/// bad request fails here instead of inside the worker.
pub fn spawn_resize(
    buffer: PixelBuffer,
    target_width: u32,
    target_height: u32,
    config: Config,
) -> Result<ResizeHandle> {
    let (sender, events) = bounded(config.channel_capacity);
    let mut resizer = Resizer::with_config(buffer, target_width, target_height, config)?;

    let worker = thread::spawn(move || {
        while let Some(event) = resizer.next() {
            if sender.send(event?).is_err() {
                debug!(
                    "event receiver dropped, stopping at step {}/{}",
                    resizer.step(),
                    resizer.steps()
                );
                break;
            }
        }
        Ok(resizer.into_buffer())
    });

    Ok(ResizeHandle { events, worker })
}
