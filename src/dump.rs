// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as something you can look at
//!
//! Energies only mean anything relative to each other, so the
//! rendering scales the whole map by its brightest score before
//! quantizing down to an 8-bit graymap.  Strictly a debugging and
//! gawking aid; nothing in the carving path depends on it.

use crate::grid::Grid;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use num_traits::clamp;

/// Scale an energy map into a grayscale image, brightest score at
/// white.  A map with no energy anywhere comes back all black rather
/// than dividing by zero.
pub fn energy_to_image(energy: &Grid<f32>) -> GrayImage {
    let (width, height) = (energy.width(), energy.height());
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    let brightest = energy.cells().iter().cloned().fold(0.0f32, f32::max);
    if brightest > 0.0 {
        for (y, x) in iproduct!(0..height, 0..width) {
            let level = clamp(energy[(x, y)] * 255.0 / brightest, 0.0, 255.0);
            out.put_pixel(x, y, Luma([level as u8]));
        }
    }
    out
}
