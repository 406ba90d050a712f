// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parameters of a single run, validated once and then only read.

use crate::color::ColorScheme;
use crate::error::RenderError;
use crate::planes::Viewport;
use crate::render::Strategy;

/// Everything a render needs to know.  Built once at startup and
/// shared by reference with every worker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// The region of the complex plane to draw.
    pub viewport: Viewport,
    /// Pixels along each side of the square image.
    pub resolution: usize,
    /// How iteration counts are turned into colors.
    pub scheme: ColorScheme,
    /// Number of workers.  Always 1 for the sequential strategy.
    pub threads: usize,
    /// How the rows are spread across workers.
    pub strategy: Strategy,
}

impl RenderConfig {
    /// Constructor.  Checks the resolution and thread count; the
    /// sequential strategy ignores the requested thread count.
    pub fn new(
        viewport: Viewport,
        resolution: usize,
        scheme: ColorScheme,
        threads: usize,
        strategy: Strategy,
    ) -> Result<RenderConfig, RenderError> {
        if resolution == 0 {
            return Err(RenderError::InvalidResolution(resolution));
        }
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount(threads));
        }
        let threads = match strategy {
            Strategy::Sequential => 1,
            _ => threads,
        };
        Ok(RenderConfig {
            viewport,
            resolution,
            scheme,
            threads,
            strategy,
        })
    }
}
