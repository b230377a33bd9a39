// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Delete a seam from an image
//!
//! Produces a new buffer one pixel narrower (vertical seam) or shorter
//! (horizontal seam).  Surviving pixels, alpha included, are copied
//! unchanged; nothing is blended.

use crate::error::Result;
use crate::seamfinder::{Orientation, Seam};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

/// Remove a seam, checking it against the image first.
pub fn remove_seam<I, P, S>(image: &I, seam: &Seam) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    seam.check_fits(width, height)?;
    Ok(match seam.orientation() {
        Orientation::Vertical => remove_vertical_seam(image, seam.positions()),
        Orientation::Horizontal => remove_horizontal_seam(image, seam.positions()),
    })
}

// Every pixel left of the seam keeps its column, every pixel right of
// it moves one to the left, and the seam pixel itself is skipped.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in (0..width).filter(|x| *x != cut) {
            imgbuf.put_pixel(if x < cut { x } else { x - 1 }, y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

// The transpose of the above: pixels below the seam move up one.
fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for x in 0..width {
        let cut = seam[x as usize];
        for y in (0..height).filter(|y| *y != cut) {
            imgbuf.put_pixel(x, if y < cut { y } else { y - 1 }, image.get_pixel(x, y));
        }
    }
    imgbuf
}
