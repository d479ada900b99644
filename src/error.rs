// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! What can go wrong
//!
//! Nothing inside the pipeline itself can fail; it is pure arithmetic
//! over buffers that are correct by construction.  Everything that can
//! go wrong does so at the boundary, before the first seam is scored,
//! which is why every variant here describes a rejected input rather
//! than an interrupted carve.

use failure::Fail;

/// The ways a caller can hand the carver an impossible job.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A zero-area image has no seams to find.
    #[fail(display = "image dimensions {}x{} describe an empty image", width, height)]
    InvalidDimensions {
        /// The width the caller claimed.
        width: u32,
        /// The height the caller claimed.
        height: u32,
    },

    /// Carving must leave at least one column standing, so the number
    /// of seams removed has to be strictly less than the width.
    #[fail(
        display = "cannot remove {} seams from an image only {} columns wide",
        requested, width
    )]
    TooManySeams {
        /// How many seams the caller asked for.
        requested: u32,
        /// The width of the image they asked it of.
        width: u32,
    },

    /// A flat buffer whose length disagrees with its claimed dimensions.
    #[fail(
        display = "buffer holds {} elements where {} were expected",
        actual, expected
    )]
    SizeMismatch {
        /// The length the dimensions demand.
        expected: usize,
        /// The length the buffer actually has.
        actual: usize,
    },
}
