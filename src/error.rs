// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine and its command-line surface.

use crate::seamfinder::Orientation;
use std::io;
use thiserror::Error;

/// Everything that can go wrong while shrinking an image.
#[derive(Error, Debug)]
pub enum Error {
    /// A buffer or map with a zero-sized dimension was handed in.
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// A seam was requested along a dimension that is already a single
    /// pixel wide (vertical) or tall (horizontal).
    #[error("cannot find a {orientation} seam in a {width}x{height} map")]
    DegenerateMap {
        orientation: Orientation,
        width: u32,
        height: u32,
    },

    /// The seam and the buffer disagree.  This is an internal
    /// consistency failure between the finder and the remover.
    #[error("seam does not fit a {width}x{height} buffer: {detail}")]
    SeamOutOfBounds {
        width: u32,
        height: u32,
        detail: String,
    },

    /// Targets must be positive and no larger than the source.
    #[error("cannot shrink {width}x{height} to {target_width}x{target_height}")]
    InvalidTarget {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// A background resize worker died before returning.
    #[error("resize worker panicked")]
    WorkerPanicked,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
