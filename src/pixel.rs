// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-pixel arithmetic
//!
//! The pipeline touches individual pixels in two places: on the way
//! in, when a packed RGBA quad is boiled down to one brightness
//! number, and at the edges of the system, where flat byte buffers
//! become pixel grids and back.  Both live here.

use crate::error::CarveError;
use crate::grid::Grid;

/// One packed pixel: red, green, blue, alpha, in that byte order.
pub type Rgba = [u8; 4];

// ITU-R BT.709 luma coefficients.
const LUMA_RED: f32 = 0.2126;
const LUMA_GREEN: f32 = 0.7152;
const LUMA_BLUE: f32 = 0.0722;

/// The perceived brightness of one pixel, in `[0.0, 1.0]`.  Channels
/// are normalized to `[0, 1]` and weighted per BT.709; alpha never
/// participates.
#[inline]
pub fn luminance(p: Rgba) -> f32 {
    let r = f32::from(p[0]) / 255.0;
    let g = f32::from(p[1]) / 255.0;
    let b = f32::from(p[2]) / 255.0;
    LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
}

impl Grid<Rgba> {
    /// Adopt a packed byte buffer (four bytes per pixel, row-major,
    /// `width * height * 4` bytes long) as a pixel grid.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, CarveError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(CarveError::SizeMismatch {
                expected: usize::MAX,
                actual: bytes.len(),
            })?;
        if bytes.len() != expected {
            return Err(CarveError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let quads = bytes
            .chunks_exact(4)
            .map(|q| [q[0], q[1], q[2], q[3]])
            .collect();
        Grid::from_vec(width, height, quads)
    }

    /// Flatten back into the packed byte form the outside world speaks.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells().len() * 4);
        for quad in self.into_vec() {
            bytes.extend_from_slice(&quad);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_weigh_in_at_their_bt709_coefficients() {
        assert_eq!(luminance([255, 0, 0, 255]), 0.2126);
        assert_eq!(luminance([0, 255, 0, 255]), 0.7152);
        assert_eq!(luminance([0, 0, 255, 255]), 0.0722);
        assert_eq!(luminance([0, 0, 0, 255]), 0.0);
        let white = luminance([255, 255, 255, 255]);
        assert!((white - 1.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_never_contributes() {
        let opaque = luminance([120, 33, 250, 255]);
        let clear = luminance([120, 33, 250, 0]);
        assert_eq!(opaque, clear);
    }

    #[test]
    fn byte_buffers_round_trip() {
        let bytes: Vec<u8> = (0..24).collect();
        let grid = Grid::from_rgba_bytes(3, 2, &bytes).unwrap();
        assert_eq!(grid[(0, 0)], [0, 1, 2, 3]);
        assert_eq!(grid[(2, 1)], [20, 21, 22, 23]);
        assert_eq!(grid.into_rgba_bytes(), bytes);
    }

    #[test]
    fn short_buffers_are_rejected() {
        let err = Grid::from_rgba_bytes(3, 2, &[0u8; 23]).unwrap_err();
        assert_eq!(
            err,
            CarveError::SizeMismatch {
                expected: 24,
                actual: 23
            }
        );
    }

    #[test]
    fn dimensions_too_large_to_address_are_rejected() {
        // u32::MAX squared times four overflows usize on every target,
        // so no buffer length can ever satisfy these dimensions.
        let err = Grid::from_rgba_bytes(u32::MAX, u32::MAX, &[]).unwrap_err();
        assert_eq!(
            err,
            CarveError::SizeMismatch {
                expected: usize::MAX,
                actual: 0
            }
        );
    }
}
