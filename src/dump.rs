// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the engine's intermediate products: the energy map as
//! a greyscale image, and a seam painted over the working buffer.

use crate::energy::EnergyMap;
use crate::seamfinder::Seam;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use num_traits::clamp;

/// Scale an energy map into 0..=255, darkest at the map's minimum
/// and brightest at its maximum.  A flat map comes out black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let values = energy.as_slice();
    let floor = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let ceiling = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = ceiling - floor;

    GrayImage::from_fn(width, height, |x, y| {
        if span <= 0.0 {
            return Luma([0]);
        }
        let c = (energy[(x, y)] - floor) * 255.0 / span;
        Luma([clamp(c.round(), 0.0, 255.0) as u8])
    })
}

/// Paint a seam over a copy of the buffer.  Coordinates outside the
/// buffer are skipped.
pub fn draw_seam(buffer: &RgbaImage, seam: &Seam, colour: Rgba<u8>) -> RgbaImage {
    let mut out = buffer.clone();
    let (width, height) = out.dimensions();
    seam.coordinates()
        .filter(|(x, y)| *x < width && *y < height)
        .for_each(|(x, y)| out.put_pixel(x, y, colour));
    out
}
