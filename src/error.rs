// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render.  Bad parameters are caught
//! before any pixel is computed; allocation and thread failures abort
//! the run without producing a buffer.

use failure::Fail;
use std::io;

/// The ways a render can fail.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The bounding box is empty, inverted, or not finite.
    #[fail(
        display = "invalid viewport: x {}..{}, y {}..{}",
        x_min, x_max, y_min, y_max
    )]
    InvalidViewport {
        /// Lowest real bound
        x_min: f64,
        /// Highest real bound
        x_max: f64,
        /// Lowest imaginary bound
        y_min: f64,
        /// Highest imaginary bound
        y_max: f64,
    },

    /// The image must be at least one pixel on a side.
    #[fail(display = "invalid resolution: {}", _0)]
    InvalidResolution(usize),

    /// Color schemes run from 0 to 5.
    #[fail(display = "invalid color scheme: {} (expected 0 to 5)", _0)]
    InvalidScheme(u32),

    /// At least one worker is needed.
    #[fail(display = "invalid thread count: {}", _0)]
    InvalidThreadCount(usize),

    /// The pixel buffer could not be reserved.
    #[fail(display = "unable to allocate a buffer of {} pixels", _0)]
    Allocation(usize),

    /// The operating system refused to start a worker thread.
    #[fail(display = "unable to create worker threads: {}", _0)]
    WorkerSpawn(#[fail(cause)] io::Error),

    /// A worker died before finishing its rows.
    #[fail(display = "a worker thread panicked")]
    WorkerPanicked,

    /// The rayon pool could not be built.
    #[fail(display = "unable to build thread pool: {}", _0)]
    ThreadPool(#[fail(cause)] rayon::ThreadPoolBuildError),

    /// Only .ppm and .png files can be written.
    #[fail(display = "unsupported output format: {}", _0)]
    UnsupportedFormat(String),

    /// Writing the image failed.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[fail(cause)] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}
