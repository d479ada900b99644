// #![deny(missing_docs)]

//! Content-aware image narrowing.
//!
//! Give [`seamcarve`] an RGBA pixel grid and a column count; it
//! repeatedly scores every pixel by Sobel gradient magnitude of the
//! BT.709 luminance, finds the connected top-to-bottom path that
//! those scores value least, and removes it, until the image is that
//! many columns narrower.  Decoding and encoding image files is the
//! caller's business; the pipeline deals only in pixel buffers.
//!
//! ```
//! use imgseam::{seamcarve, Grid};
//!
//! let image = Grid::from_rgba_bytes(3, 2, &[0u8; 24]).unwrap();
//! let narrowed = seamcarve(image, 2).unwrap();
//! assert_eq!((narrowed.width(), narrowed.height()), (1, 2));
//! ```

pub mod carver;
pub mod dump;
pub mod energy;
pub mod error;
pub mod grid;
pub mod pixel;
pub mod seam;

pub use carver::{seamcarve, seamcarve_raw};
pub use error::CarveError;
pub use grid::Grid;
pub use pixel::Rgba;
