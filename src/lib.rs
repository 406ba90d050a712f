#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring and adding `c`, starting from zero,
//! never runs off to infinity.  Points outside the set are colored by
//! how many rounds they survive before passing a distance of 2 from
//! the origin, which is far enough that escape is certain.
//!
//! The renderer covers a square grid of pixels laid over a rectangle
//! of the plane.  Every pixel is independent of every other, so the
//! work splits cleanly: the sequential renderer walks the rows in
//! order, the threaded renderer deals rows round-robin to a fixed set
//! of scoped threads, and the rayon renderer lets a thread pool pull
//! rows.  The three produce identical images and differ only in how
//! long they take.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate rayon;

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod partition;
pub mod planes;
pub mod ppm;
pub mod render;

pub use buffer::PixelBuffer;
pub use color::{ColorScheme, Rgb};
pub use config::RenderConfig;
pub use error::RenderError;
pub use escape::{escape_time, ITERATION_MAX};
pub use planes::{Pixel, PlaneMapper, Viewport};
pub use render::{Renderer, Strategy};
