// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Forced-removal masks
//!
//! A mask is baked into the working buffer's alpha channel before the
//! carve starts: every marked pixel has its alpha set to
//! `ALPHA_DELETE_THRESHOLD`, and the energy calculator treats that
//! value as "delete me first".  Because alpha is also transparency,
//! source pixels that already happen to carry the sentinel are nudged
//! one step more opaque before any mask is applied, so only pixels the
//! user actually marked ever hold it.

use crate::twodmap::TwoDimensionalMap;
use crate::ALPHA_DELETE_THRESHOLD;
use image::{GenericImageView, Rgba, RgbaImage};
use log::debug;

/// True if the pixel carries the forced-removal sentinel.
#[inline]
pub fn is_masked(pixel: &Rgba<u8>) -> bool {
    pixel[3] == ALPHA_DELETE_THRESHOLD
}

/// A boolean plane marking pixels for forced removal.  It need not
/// match the buffer's size; it is stretched over the buffer when
/// applied.
#[derive(Debug, Clone)]
pub struct MaskOverlay {
    plane: TwoDimensionalMap<bool>,
}

impl MaskOverlay {
    /// An empty mask.
    pub fn new(width: u32, height: u32) -> Self {
        MaskOverlay {
            plane: TwoDimensionalMap::new(width, height),
        }
    }

    /// Build a mask from a drawn overlay: any pixel with a non-zero
    /// alpha counts as a stroke.
    pub fn from_alpha<I>(overlay: &I) -> Self
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = overlay.dimensions();
        let mut mask = MaskOverlay::new(width, height);
        for (x, y, p) in overlay.pixels() {
            mask.plane[(x, y)] = p[3] != 0;
        }
        mask
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.plane.dimensions()
    }

    /// Mark a single pixel.  Coordinates outside the mask are ignored.
    pub fn mark(&mut self, x: u32, y: u32) {
        let (width, height) = self.plane.dimensions();
        if x < width && y < height {
            self.plane[(x, y)] = true;
        }
    }

    /// Mark a rectangle, clipped to the mask.
    pub fn mark_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let (mw, mh) = self.plane.dimensions();
        for yy in y..y.saturating_add(height).min(mh) {
            for xx in x..x.saturating_add(width).min(mw) {
                self.plane[(xx, yy)] = true;
            }
        }
    }

    pub fn is_marked(&self, x: u32, y: u32) -> bool {
        let (width, height) = self.plane.dimensions();
        x < width && y < height && self.plane[(x, y)]
    }

    /// Number of marked pixels.
    pub fn count(&self) -> usize {
        self.plane.as_slice().iter().filter(|m| **m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Move any pixel whose alpha collides with the sentinel to the next
/// more opaque value.  Returns how many pixels changed.
pub fn sanitize_alpha(buffer: &mut RgbaImage) -> usize {
    let mut promoted = 0;
    for pixel in buffer.pixels_mut() {
        if is_masked(pixel) {
            pixel[3] = ALPHA_DELETE_THRESHOLD + 1;
            promoted += 1;
        }
    }
    promoted
}

/// Bake a mask into a buffer's alpha channel.
///
/// Mask coordinates are found by scaling buffer coordinates with the
/// floor of the size ratio, so a mask drawn over a differently sized
/// preview still lands on the right pixels.  Colour channels are left
/// alone.  Returns how many buffer pixels were marked.
pub fn apply_mask(buffer: &mut RgbaImage, mask: &MaskOverlay) -> usize {
    let promoted = sanitize_alpha(buffer);
    if promoted > 0 {
        debug!("promoted {} source pixels off the mask sentinel", promoted);
    }

    let (width, height) = buffer.dimensions();
    let (mw, mh) = mask.dimensions();
    if mw == 0 || mh == 0 {
        return 0;
    }

    let mut marked = 0;
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let mx = (u64::from(x) * u64::from(mw) / u64::from(width)) as u32;
        let my = (u64::from(y) * u64::from(mh) / u64::from(height)) as u32;
        if mask.is_marked(mx, my) {
            pixel[3] = ALPHA_DELETE_THRESHOLD;
            marked += 1;
        }
    }
    marked
}

/// Make any still-marked pixels opaque again, for export.  Returns
/// how many were cleared.
///
/// The sentinel overwrote the source alpha when the mask was baked in,
/// and seam removal moves pixels around afterwards, so the old value is
/// gone by now.  Survivors always come back fully opaque, including
/// ones that were transparent before they were marked.  A carve that
/// reaches its target only after every marked pixel is removed never
/// has any to clear.
pub fn clear_mask(buffer: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in buffer.pixels_mut().filter(|p| is_masked(p)) {
        pixel[3] = u8::MAX;
        cleared += 1;
    }
    cleared
}
