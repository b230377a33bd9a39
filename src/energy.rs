// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the energy map the seam finder walks.
//! Uses the most straightforward of the energy map algorithms: the
//! squared differences of the left/right and up/down neighbours,
//! with border pixels standing in for their own missing neighbours.
//! Pixels carrying the mask sentinel in their alpha channel are
//! forced to zero, the lowest energy any pixel can have.

use crate::config::Config;
use crate::cq;
use crate::error::{Error, Result};
use crate::mask::is_masked;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Rgba};
use itertools::iproduct;

/// Per-pixel importance.  Lower is safer to delete.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// Compute the energy of every pixel in an image with the default
/// configuration.
pub fn compute_energy<I>(image: &I) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    compute_energy_with_config(image, &Config::default())
}

/// Compute the energy of every pixel in an image.
///
/// An unmasked pixel scores `gradient + config.unmasked_baseline`; a
/// masked pixel scores zero.  Fails with `InvalidDimensions` on an
/// empty image.
pub fn compute_energy_with_config<I>(image: &I, config: &Config) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let (mw, mh) = (width - 1, height - 1);
    let gradient = config.gradient;

    let energies = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let current_pixel = image.get_pixel(x, y);
            if is_masked(&current_pixel) {
                return 0.0;
            }
            let (leftpixel, rightpixel, uppixel, downpixel) = (
                cq!(x == 0, current_pixel, image.get_pixel(x - 1, y)),
                cq!(x >= mw, current_pixel, image.get_pixel(x + 1, y)),
                cq!(y == 0, current_pixel, image.get_pixel(x, y - 1)),
                cq!(y >= mh, current_pixel, image.get_pixel(x, y + 1)),
            );
            let e = gradient.energy_of_pair(&leftpixel, &rightpixel)
                + gradient.energy_of_pair(&uppixel, &downpixel);
            #[cfg(feature = "square_root")]
            let e = e.sqrt();
            e + config.unmasked_baseline
        })
        .collect();

    EnergyMap::from_vec(width, height, energies)
}
