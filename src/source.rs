// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting a source image ready for carving: capping its size and
//! turning percentage scales into pixel targets.

use crate::seamcarver::{ImageSize, PixelBuffer};
use image::imageops::{self, FilterType};
use log::debug;

/// Smallest and largest accepted scale, in percent.
pub const MIN_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 100;

/// Downscale `image` so it fits inside `max_width` x `max_height`,
/// keeping its aspect ratio.  The width limit is applied first, then
/// the height limit.  Images already inside the limits are returned
/// as they are.
pub fn fit_within_limits(image: PixelBuffer, max_width: u32, max_height: u32) -> PixelBuffer {
    let (width, height) = image.dimensions();
    let fitted = fitted_size(ImageSize::new(width, height), max_width, max_height);
    if fitted == ImageSize::new(width, height) {
        return image;
    }
    debug!(
        "downscaling {}x{} to {}x{} to fit {}x{}",
        width, height, fitted.w, fitted.h, max_width, max_height
    );
    imageops::resize(&image, fitted.w, fitted.h, FilterType::Triangle)
}

fn fitted_size(size: ImageSize, max_width: u32, max_height: u32) -> ImageSize {
    let ratio = f64::from(size.w) / f64::from(size.h);
    let (mut w, mut h) = (size.w, size.h);
    if w > max_width {
        w = max_width;
        h = (f64::from(w) / ratio).floor() as u32;
    }
    if h > max_height {
        h = max_height;
        w = (f64::from(h) * ratio).floor() as u32;
    }
    ImageSize::new(w.max(1), h.max(1))
}

/// Turn width and height percentages into a pixel target.  Scales
/// are clamped to `MIN_SCALE..=MAX_SCALE`; neither side drops below
/// one pixel.
pub fn target_for_scale(size: ImageSize, width_percent: u32, height_percent: u32) -> ImageSize {
    let scale = |dim: u32, percent: u32| {
        let percent = percent.max(MIN_SCALE).min(MAX_SCALE);
        ((u64::from(percent) * u64::from(dim) / 100) as u32).max(1)
    };
    ImageSize::new(scale(size.w, width_percent), scale(size.h, height_percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn wide_images_are_capped_by_width() {
        assert_eq!(fitted_size(ImageSize::new(3000, 1000), 1500, 1500), ImageSize::new(1500, 500));
    }

    #[test]
    fn tall_images_are_capped_by_height() {
        assert_eq!(fitted_size(ImageSize::new(1000, 4000), 1500, 1500), ImageSize::new(375, 1500));
    }

    #[test]
    fn small_images_pass_through() {
        let img = RgbaImage::from_pixel(10, 20, Rgba([1, 2, 3, 4]));
        let out = fit_within_limits(img.clone(), 1500, 1500);
        assert_eq!(out, img);
    }

    #[test]
    fn oversized_image_is_resized() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([1, 2, 3, 255]));
        assert_eq!(fit_within_limits(img, 10, 10).dimensions(), (10, 5));
    }

    #[test]
    fn scales_are_clamped_and_floored() {
        let size = ImageSize::new(99, 10);
        assert_eq!(target_for_scale(size, 50, 70), ImageSize::new(49, 7));
        assert_eq!(target_for_scale(size, 0, 250), ImageSize::new(1, 10));
    }
}
