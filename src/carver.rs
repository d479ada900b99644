// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The remover that compacts one seam out of the frame, and the
//! driving loop that scores, selects, and removes until the requested
//! number of columns is gone.

use crate::energy::{luminance_map, sobel_energy};
use crate::error::CarveError;
use crate::grid::Grid;
use crate::pixel::Rgba;
use crate::seam::{cumulative_energy, energy_to_seam};

// TODO: Every pass rescores the whole frame, although a removed seam
// only disturbs energies within a pixel or two of itself.  Rescoring
// just the dirtied band would make wide carves much cheaper.

// Each row is two slice copies: everything left of the seam lands
// unmoved, everything right of it slides one column over.
fn remove_seam(image: &Grid<Rgba>, seam: &[u32]) -> Grid<Rgba> {
    let (width, height) = (image.width(), image.height());
    let mut narrowed = Grid::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize] as usize;
        let src = image.row(y);
        let dst = narrowed.row_mut(y);
        dst[..cut].copy_from_slice(&src[..cut]);
        dst[cut..].copy_from_slice(&src[cut + 1..]);
    }
    narrowed
}

/// Carve `columns` vertical seams out of the image, one at a time.
///
/// Each pass runs the whole pipeline (luminance, Sobel energy,
/// cumulative totals, seam) against the current buffer, then commits
/// a one-column-narrower copy and lets the old buffer go.  The scratch
/// maps never outlive their pass.
///
/// Bad jobs are refused up front, before any pixel moves: the image
/// must have area, and at least one column has to survive the carving.
/// With `columns` at zero the buffer comes straight back.
pub fn seamcarve(image: Grid<Rgba>, columns: u32) -> Result<Grid<Rgba>, CarveError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions { width, height });
    }
    if columns >= width {
        return Err(CarveError::TooManySeams {
            requested: columns,
            width,
        });
    }

    let mut current = image;
    for _ in 0..columns {
        let luma = luminance_map(&current);
        let energy = sobel_energy(&luma);
        let table = cumulative_energy(&energy);
        let seam = energy_to_seam(&table);
        current = remove_seam(&current, &seam);
    }
    Ok(current)
}

/// The flat-buffer flavor of [`seamcarve`]: packed RGBA bytes in,
/// packed RGBA bytes out, `columns` fewer columns wide.  For callers
/// who deal in raw decoder output rather than grids.
pub fn seamcarve_raw(
    bytes: &[u8],
    width: u32,
    height: u32,
    columns: u32,
) -> Result<Vec<u8>, CarveError> {
    let image = Grid::from_rgba_bytes(width, height, bytes)?;
    Ok(seamcarve(image, columns)?.into_rgba_bytes())
}
