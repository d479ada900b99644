// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! From energies to the cheapest seam
//!
//! Classic dynamic programming: fold the per-pixel energies into a
//! table where every cell holds the cheapest total of any connected
//! top-to-bottom path ending there, then read the winning path back
//! out of the finished table, bottom row first.

use crate::grid::Grid;

/// Accumulate energies into cheapest-path totals.
///
/// Row 0 is the energy row itself, a path of length one.  Every later
/// cell adds its own energy to the cheapest of its up-to-three parents:
/// directly above, above-left, above-right.  Edge columns simply have
/// one parent fewer; no sentinel stands in for the missing side.  (Note
/// the asymmetry with the Sobel pass, which *does* substitute zeros for
/// its missing window samples.  Reconciling the two would move every
/// seam, so both behaviors stay exactly as they are.)
///
/// Rows strictly depend on the row above, so the sweep is sequential
/// top to bottom.
///
/// The map must be at least 1x1; the carve loop validates dimensions
/// before any scoring starts, and callers reaching in directly are
/// expected to do the same.
pub fn cumulative_energy(energy: &Grid<f32>) -> Grid<f32> {
    let (width, height) = (energy.width(), energy.height());
    debug_assert!(
        width > 0 && height > 0,
        "a {}x{} map has no paths to cost",
        width,
        height
    );
    let mut table = Grid::new(width, height);
    for x in 0..width {
        table[(x, 0)] = energy[(x, 0)];
    }
    for y in 1..height {
        for x in 0..width {
            let mut cheapest = table[(x, y - 1)];
            if x > 0 {
                cheapest = cheapest.min(table[(x - 1, y - 1)]);
            }
            if x + 1 < width {
                cheapest = cheapest.min(table[(x + 1, y - 1)]);
            }
            table[(x, y)] = energy[(x, y)] + cheapest;
        }
    }
    table
}

/// Given a cumulative table, return the list of x-coordinates that,
/// when zipped with the range `(0..height)`, give the XY coordinates
/// for each pixel in the seam to be removed.
///
/// Ties are resolved the same way every time.  The bottom-row scan
/// keeps the first (leftmost) strictly-smallest total.  Walking back
/// up, the column straight above the current one wins any tie; a
/// diagonal steals the seam only by being strictly cheaper, the left
/// diagonal getting its chance before the right one.
///
/// Like [`cumulative_energy`], this expects a table of at least 1x1.
pub fn energy_to_seam(table: &Grid<f32>) -> Vec<u32> {
    let (width, height) = (table.width(), table.height());
    debug_assert!(
        width > 0 && height > 0,
        "a {}x{} table holds no seam",
        width,
        height
    );
    let bottom = height - 1;
    let mut seam = vec![0u32; height as usize];

    let mut best_x = 0;
    for x in 1..width {
        if table[(x, bottom)] < table[(best_x, bottom)] {
            best_x = x;
        }
    }
    seam[bottom as usize] = best_x;

    for y in (0..bottom).rev() {
        let prev_x = seam[(y + 1) as usize];
        let mut best_x = prev_x;
        if prev_x > 0 && table[(prev_x - 1, y)] < table[(best_x, y)] {
            best_x = prev_x - 1;
        }
        if prev_x + 1 < width && table[(prev_x + 1, y)] < table[(best_x, y)] {
            best_x = prev_x + 1;
        }
        seam[y as usize] = best_x;
    }
    seam
}
