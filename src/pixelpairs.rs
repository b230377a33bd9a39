// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the relative distance
//! between the colors that make them up.  Two measures are provided:
//! a convert-to-grayscale d(L²), which is the default, and the classic
//! d(R²) + d(G²) + d(B²).  Alpha never contributes; it belongs to the
//! mask.

use image::{Pixel, Primitive};

/// Which pixel-pair measure the energy calculator uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gradient {
    Luma,
    Rgb,
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient::Luma
    }
}

impl Gradient {
    /// Dispatch to the matching pair function.
    pub fn energy_of_pair<P, S>(self, p1: &P, p2: &P) -> f64
    where
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        match self {
            Gradient::Luma => energy_of_pair_luma(p1, p2),
            Gradient::Rgb => energy_of_pair_rgb(p1, p2),
        }
    }
}

#[inline]
fn channel<S: Primitive>(c: S) -> f64 {
    c.to_f64().unwrap_or_default()
}

/// (Pixel, Pixel) -> Energy
///
/// Given a pair of pixels, calculate the squared difference of their
/// luminance.
#[inline]
pub fn energy_of_pair_luma<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let css = channel(p1.to_luma()[0]) - channel(p2.to_luma()[0]);
    css * css
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
#[inline]
pub fn energy_of_pair_rgb<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.0
        .iter()
        .zip(c2.0.iter())
        .map(|(a, b)| {
            let d = channel(*a) - channel(*b);
            d * d
        })
        .sum()
}
