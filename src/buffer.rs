// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer: one contiguous, row-major block of `Rgb` values,
//! `resolution` pixels on a side.  It is allocated once per render,
//! handed out to workers a row at a time, and dropped when the caller
//! is done writing it out.

use std::slice::ChunksMut;

use rayon::prelude::*;

use crate::color::Rgb;
use crate::error::RenderError;

/// A square image held as a flat vector, indexed by
/// `resolution * y + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    resolution: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Reserve and zero a buffer for a `resolution` x `resolution`
    /// image.  Running out of memory is reported rather than aborting
    /// the process.
    pub fn allocate(resolution: usize) -> Result<PixelBuffer, RenderError> {
        if resolution == 0 {
            return Err(RenderError::InvalidResolution(resolution));
        }
        let len = resolution
            .checked_mul(resolution)
            .ok_or(RenderError::Allocation(usize::max_value()))?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation(len))?;
        pixels.resize(len, Rgb::default());
        Ok(PixelBuffer { resolution, pixels })
    }

    /// The number of pixels along each side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Describes that the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&Rgb> {
        if x >= self.resolution {
            return None;
        }
        self.pixels.get(self.resolution * y + x)
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> &[Rgb] {
        &self.pixels[y * self.resolution..(y + 1) * self.resolution]
    }

    /// Split the buffer into disjoint mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> ChunksMut<Rgb> {
        self.pixels.chunks_mut(self.resolution)
    }

    /// The same rows as `rows_mut`, as a rayon parallel iterator.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<Rgb> {
        self.pixels.par_chunks_mut(self.resolution)
    }

    /// The image as packed RGB bytes, three per pixel.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }
}
