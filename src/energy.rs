// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Two passes over the frame: first every RGBA quad is reduced to its
//! BT.709 luminance, then a 3x3 Sobel operator turns local luminance
//! contrast into a per-pixel energy.  High energy marks pixels the
//! carver should fight to keep; the seam it removes is the connected
//! path these scores value least.

use crate::grid::Grid;
use crate::pixel::{luminance, Rgba};
use itertools::iproduct;

/// Horizontal Sobel kernel, rows top to bottom.
const SOBEL_X: [[f32; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

/// Vertical Sobel kernel, rows top to bottom.
const SOBEL_Y: [[f32; 3]; 3] = [
    [1.0, 2.0, 1.0],
    [0.0, 0.0, 0.0],
    [-1.0, -2.0, -1.0],
];

/// Reduce every pixel in the buffer to its luminance.
pub fn luminance_map(image: &Grid<Rgba>) -> Grid<f32> {
    let mut luma = Grid::new(image.width(), image.height());
    for (y, x) in iproduct!(0..image.height(), 0..image.width()) {
        luma[(x, y)] = luminance(image[(x, y)]);
    }
    luma
}

/// Score every pixel with the magnitude of its Sobel gradient,
/// `sqrt(sx * sx + sy * sy)` over the two 3x3 convolutions.
///
/// Window samples that fall outside the image read as luminance 0.
/// That zero-fill means the border of a uniform bright image still
/// scores nonzero energy, since the frame looks like an edge against
/// the black nothing beyond it.  Seams therefore drift one column in
/// from the sides of flat images.
pub fn sobel_energy(luma: &Grid<f32>) -> Grid<f32> {
    let (width, height) = (luma.width(), luma.height());
    let mut energy = Grid::new(width, height);
    for (cy, cx) in iproduct!(0..height, 0..width) {
        let (mut sx, mut sy) = (0.0f32, 0.0f32);
        for (dy, dx) in iproduct!(-1..=1i64, -1..=1i64) {
            let (nx, ny) = (i64::from(cx) + dx, i64::from(cy) + dy);
            let out = nx < 0 || nx >= i64::from(width) || ny < 0 || ny >= i64::from(height);
            let sample = if out { 0.0 } else { luma[(nx as u32, ny as u32)] };
            sx += sample * SOBEL_X[(dy + 1) as usize][(dx + 1) as usize];
            sy += sample * SOBEL_Y[(dy + 1) as usize][(dx + 1) as usize];
        }
        energy[(cx, cy)] = (sx * sx + sy * sy).sqrt();
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::SQRT_2;

    #[test]
    fn luminance_map_applies_bt709_per_pixel() {
        let image = Grid::from_vec(
            2,
            2,
            vec![
                [255, 0, 0, 255],
                [0, 255, 0, 9],
                [0, 0, 255, 0],
                [0, 0, 0, 255],
            ],
        )
        .unwrap();
        let luma = luminance_map(&image);
        assert_eq!(luma.cells(), &[0.2126, 0.7152, 0.0722, 0.0]);
    }

    #[test]
    fn lone_bright_pixel_energizes_its_neighborhood() {
        let luma = Grid::from_vec(3, 3, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let energy = sobel_energy(&luma);
        // The bright pixel itself sits under both kernels' zero
        // centers; its eight neighbors pick up the gradient.
        let expected = [
            SQRT_2, 2.0, SQRT_2, //
            2.0, 0.0, 2.0, //
            SQRT_2, 2.0, SQRT_2, //
        ];
        assert_eq!(energy.cells(), &expected);
    }

    #[test]
    fn uniform_white_keeps_a_border_halo() {
        let white = Grid::from_vec(5, 3, vec![1.0f32; 15]).unwrap();
        let energy = sobel_energy(&white);
        // Zero-filled window samples make the frame of a flat image
        // read as an edge; only the interior is quiet.
        let corner = 18.0f32.sqrt();
        let expected = [
            corner, 4.0, 4.0, 4.0, corner, //
            4.0, 0.0, 0.0, 0.0, 4.0, //
            corner, 4.0, 4.0, 4.0, corner, //
        ];
        assert_eq!(energy.cells(), &expected);
    }

    #[test]
    fn all_black_scores_zero_everywhere() {
        let black = Grid::from_vec(4, 4, vec![0.0f32; 16]).unwrap();
        let energy = sobel_energy(&black);
        assert!(energy.cells().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn rescoring_an_unchanged_buffer_is_bit_identical() {
        // A cheap congruential scribble; the values only need to vary.
        let mut seed = 0x2545_f491u32;
        let quads: Vec<Rgba> = (0..35)
            .map(|_| {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                seed.to_le_bytes()
            })
            .collect();
        let image = Grid::from_vec(7, 5, quads).unwrap();

        let first = sobel_energy(&luminance_map(&image));
        let second = sobel_energy(&luminance_map(&image));
        assert_eq!(first, second);
    }
}
