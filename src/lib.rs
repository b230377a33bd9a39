// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! Repeatedly finds the lowest-energy path of pixels across an image
//! and deletes it, until the image reaches its target size.  Pixels
//! marked through the alpha channel (see `mask`) are deleted first.

/// Alpha value reserved to mark a pixel for forced removal.
pub const ALPHA_DELETE_THRESHOLD: u8 = 244;

/// Largest working width `fit_within_limits` lets through by default.
pub const MAX_WIDTH_LIMIT: u32 = 1500;

/// Largest working height `fit_within_limits` lets through by default.
pub const MAX_HEIGHT_LIMIT: u32 = 1500;

mod flipper;
mod ternary;
mod twodmap;

pub mod config;
pub mod dump;
pub mod energy;
pub mod error;
pub mod mask;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod source;

#[cfg(feature = "threaded")]
pub mod threaded;

pub use config::Config;
pub use dump::{draw_seam, energy_to_image};
pub use energy::{compute_energy, compute_energy_with_config, EnergyMap};
pub use error::{Error, Result};
pub use mask::{apply_mask, clear_mask, is_masked, sanitize_alpha, MaskOverlay};
pub use pixelpairs::Gradient;
pub use seamcarver::{
    resize, resize_with_config, ImageSize, IterationEvent, PixelBuffer, Resizer, Schedule,
};
pub use seamfinder::{find_seam, Orientation, Seam};
pub use seamremover::remove_seam;
pub use source::{fit_within_limits, target_for_scale};
pub use twodmap::TwoDimensionalMap;

#[cfg(feature = "threaded")]
pub use threaded::{spawn_resize, ResizeHandle};
