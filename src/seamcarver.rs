// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Drives the energy → seam → removal cycle until the image reaches
//! its target size.  The loop is exposed as an iterator: each call to
//! `next()` carves exactly one seam and hands back an
//! `IterationEvent`, so the caller decides when the next cycle runs
//! and can render, report progress, or simply stop asking in between.

use crate::config::Config;
use crate::energy::{compute_energy_with_config, EnergyMap};
use crate::error::{Error, Result};
use crate::seamfinder::{find_seam, Orientation, Seam};
use crate::seamremover::remove_seam;
use image::RgbaImage;
use log::{debug, trace};
use std::iter::FusedIterator;

/// The working image.  Alpha doubles as the forced-removal marker.
pub type PixelBuffer = RgbaImage;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub w: u32,
    pub h: u32,
}

impl ImageSize {
    pub fn new(w: u32, h: u32) -> Self {
        ImageSize { w, h }
    }

    pub fn of(buffer: &PixelBuffer) -> Self {
        let (w, h) = buffer.dimensions();
        ImageSize { w, h }
    }
}

/// What the caller gets after every seam.
#[derive(Debug, Clone)]
pub struct IterationEvent {
    /// The buffer after this seam was removed.
    pub img: PixelBuffer,
    /// The energy map the seam was drawn from, before removal.
    pub energy_map: EnergyMap,
    /// The seam that was removed.
    pub seam: Seam,
    /// Size of `img`.
    pub size: ImageSize,
    /// 1-based count of seams removed so far.
    pub step: u32,
    /// Total number of seams this resize removes.
    pub steps: u32,
}

/// How width and height removals are interleaved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Carve whichever dimension has the larger share of its
    /// reduction still to go, so both finish together.  Ties go to
    /// the width.
    Proportional,
    /// Alternate width and height while both need work, then finish
    /// whichever is left.
    Alternate,
    /// All width seams, then all height seams.
    WidthFirst,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Proportional
    }
}

impl Schedule {
    /// Pick the orientation of the next seam.  A dimension already at or
    /// below its target is never chosen while the other still has work;
    /// with nothing left at all the answer is `Horizontal`.
    pub fn next_orientation(
        self,
        start: ImageSize,
        current: ImageSize,
        target: ImageSize,
        last: Option<Orientation>,
    ) -> Orientation {
        let left_w = current.w.saturating_sub(target.w);
        let left_h = current.h.saturating_sub(target.h);
        if left_w == 0 {
            return Orientation::Horizontal;
        }
        if left_h == 0 {
            return Orientation::Vertical;
        }
        match self {
            Schedule::Proportional => {
                let total_w = start.w.saturating_sub(target.w);
                let total_h = start.h.saturating_sub(target.h);
                // left_w / total_w >= left_h / total_h, without division.
                if u64::from(left_w) * u64::from(total_h) >= u64::from(left_h) * u64::from(total_w) {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                }
            }
            Schedule::Alternate => match last {
                Some(Orientation::Vertical) => Orientation::Horizontal,
                _ => Orientation::Vertical,
            },
            Schedule::WidthFirst => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Reducing,
    Done,
}

/// An in-progress resize.  Iterating it carves one seam per step.
///
/// After the final seam, or after the first failure, the iterator is
/// exhausted.  The buffer from the last successful step is always
/// available through `current()` and `into_buffer()`.
pub struct Resizer {
    current: PixelBuffer,
    start: ImageSize,
    target: ImageSize,
    step: u32,
    steps: u32,
    last: Option<Orientation>,
    state: State,
    config: Config,
}

impl Resizer {
    /// Prepare to shrink `buffer` to `target_width` x `target_height`
    /// with the default configuration.
    pub fn new(buffer: PixelBuffer, target_width: u32, target_height: u32) -> Result<Self> {
        Resizer::with_config(buffer, target_width, target_height, Config::default())
    }

    pub fn with_config(
        buffer: PixelBuffer,
        target_width: u32,
        target_height: u32,
        config: Config,
    ) -> Result<Self> {
        let (width, height) = buffer.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if target_width == 0 || target_height == 0 || target_width > width || target_height > height
        {
            return Err(Error::InvalidTarget {
                width,
                height,
                target_width,
                target_height,
            });
        }
        let steps = (width - target_width) + (height - target_height);
        Ok(Resizer {
            current: buffer,
            start: ImageSize::new(width, height),
            target: ImageSize::new(target_width, target_height),
            step: 0,
            steps,
            last: None,
            state: State::Idle,
            config,
        })
    }

    /// The most recent valid buffer.
    pub fn current(&self) -> &PixelBuffer {
        &self.current
    }

    /// Give up the most recent valid buffer.  Once the iterator is
    /// exhausted without error this is the resized image.
    pub fn into_buffer(self) -> PixelBuffer {
        self.current
    }

    /// Seams removed so far.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Seams this resize removes in total.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    // One energy → seam → removal cycle.
    fn carve_once(&mut self) -> Result<IterationEvent> {
        let size = ImageSize::of(&self.current);
        let orientation =
            self.config
                .schedule
                .next_orientation(self.start, size, self.target, self.last);

        let energy_map = compute_energy_with_config(&self.current, &self.config)?;
        let seam = find_seam(&energy_map, orientation)?;
        self.current = remove_seam(&self.current, &seam)?;
        self.last = Some(orientation);
        self.step += 1;

        let size = ImageSize::of(&self.current);
        trace!(
            "step {}/{}: removed {} seam, now {}x{}",
            self.step,
            self.steps,
            orientation,
            size.w,
            size.h
        );
        Ok(IterationEvent {
            img: self.current.clone(),
            energy_map,
            seam,
            size,
            step: self.step,
            steps: self.steps,
        })
    }
}

impl Iterator for Resizer {
    type Item = Result<IterationEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Idle => {
                debug!(
                    "resizing {}x{} to {}x{} in {} steps",
                    self.start.w, self.start.h, self.target.w, self.target.h, self.steps
                );
                self.state = State::Reducing;
            }
            State::Reducing => {}
        }

        if ImageSize::of(&self.current) == self.target {
            debug!("resize finished after {} steps", self.step);
            self.state = State::Done;
            return None;
        }

        let event = self.carve_once();
        if let Err(ref e) = event {
            debug!("resize aborted at step {}: {}", self.step + 1, e);
            self.state = State::Done;
        }
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.state {
            State::Done => 0,
            _ => (self.steps - self.step) as usize,
        };
        (left, Some(left))
    }
}

impl FusedIterator for Resizer {}

/// Shrink `buffer` to the target size with the default configuration,
/// calling `on_iteration` after every seam.
pub fn resize<F>(
    buffer: PixelBuffer,
    target_width: u32,
    target_height: u32,
    on_iteration: F,
) -> Result<PixelBuffer>
where
    F: FnMut(&IterationEvent),
{
    resize_with_config(
        buffer,
        target_width,
        target_height,
        &Config::default(),
        on_iteration,
    )
}

/// Shrink `buffer` to the target size, calling `on_iteration` after
/// every seam.  The first failure ends the resize and is returned;
/// every event delivered before it remains valid.
pub fn resize_with_config<F>(
    buffer: PixelBuffer,
    target_width: u32,
    target_height: u32,
    config: &Config,
    mut on_iteration: F,
) -> Result<PixelBuffer>
where
    F: FnMut(&IterationEvent),
{
    let mut resizer = Resizer::with_config(buffer, target_width, target_height, config.clone())?;
    for event in &mut resizer {
        on_iteration(&event?);
    }
    Ok(resizer.into_buffer())
}
