// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tuning knobs for the carving engine.

use crate::pixelpairs::Gradient;
use crate::seamcarver::Schedule;
use crate::{MAX_HEIGHT_LIMIT, MAX_WIDTH_LIMIT};

/// Default floor added to every unmasked pixel's energy.
pub const DEFAULT_UNMASKED_BASELINE: f64 = 1000.0;

/// Configuration options for a resize.
///
/// All parameters are passed explicitly; the engine keeps no
/// process-wide state.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Pixel-pair measure used by the energy calculator.
    pub gradient: Gradient,

    /// Constant energy floor for unmasked pixels.
    ///
    /// Masked pixels always get zero.  Every seam crosses the same
    /// number of pixels, so the floor never reorders unmasked seams;
    /// it only sets how much cheaper each masked pixel makes a seam.
    pub unmasked_baseline: f64,

    /// Order in which width and height seams are taken.
    pub schedule: Schedule,

    /// Largest width handed to the engine by `fit_within_limits`.
    pub max_width: u32,

    /// Largest height handed to the engine by `fit_within_limits`.
    pub max_height: u32,

    /// Number of events buffered between a background resize and its
    /// consumer before the worker blocks.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradient: Gradient::default(),
            unmasked_baseline: DEFAULT_UNMASKED_BASELINE,
            schedule: Schedule::default(),
            max_width: MAX_WIDTH_LIMIT,
            max_height: MAX_HEIGHT_LIMIT,
            channel_capacity: 1,
        }
    }
}

impl Config {
    // Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn set_unmasked_baseline(mut self, baseline: f64) -> Self {
        self.unmasked_baseline = baseline.max(0.0);
        self
    }

    pub fn set_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    // Set both size limits
    pub fn set_limits(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn set_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new()
            .set_schedule(Schedule::WidthFirst)
            .set_unmasked_baseline(-4.0)
            .set_limits(10, 20);
        assert_eq!(config.schedule, Schedule::WidthFirst);
        assert_eq!(config.unmasked_baseline, 0.0);
        assert_eq!((config.max_width, config.max_height), (10, 20));
        assert_eq!(config.gradient, Gradient::Luma);
    }
}
