// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The dispatcher.  A `Renderer` holds everything needed to color a
//! pixel and knows three ways of getting every pixel colored: one row
//! after another on the calling thread, on a fixed set of scoped
//! threads that each own a stripe of rows, or on a rayon pool.  All
//! three fill the buffer with exactly the same bytes.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use itertools::iproduct;
use log::{debug, info};
use num::Complex;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::color::{colorize, ColorScheme, Rgb};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::escape::escape_time;
use crate::partition::{deal_rows, Stripe};
use crate::planes::{Pixel, PlaneMapper};

/// How the work of a render is spread across threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Every row, in order, on the calling thread.
    Sequential,
    /// A fixed pool of scoped threads, rows dealt round-robin.
    Threaded,
    /// A rayon pool iterating rows in parallel.
    Rayon,
}

impl Strategy {
    /// The canonical name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Threaded => "threaded",
            Strategy::Rayon => "rayon",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "threaded" | "pth" => Ok(Strategy::Threaded),
            "rayon" | "omp" => Ok(Strategy::Rayon),
            _ => Err(format!("Unknown strategy '{}'", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Renderer contains the parameters by which an image is
/// generated.  Once set, this object should not be mutable; workers
/// share it by reference.
#[derive(Clone, Debug)]
pub struct Renderer {
    plane: PlaneMapper,
    scheme: ColorScheme,
}

impl Renderer {
    /// Requires the mapping from pixels to the complex plane and the
    /// color scheme.
    pub fn new(plane: PlaneMapper, scheme: ColorScheme) -> Self {
        Renderer { plane, scheme }
    }

    /// Build a renderer for a validated configuration.
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let plane = PlaneMapper::new(config.viewport, config.resolution)?;
        Ok(Renderer::new(plane, config.scheme))
    }

    /// Build a renderer for `config` and run it with the configured
    /// strategy and thread count.
    pub fn run(config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
        Renderer::from_config(config)?.render(config.strategy, config.threads)
    }

    /// The pixel-to-plane mapping in use.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The color of a single pixel.
    #[inline]
    pub fn pixel(&self, pixel: &Pixel) -> Rgb {
        colorize(escape_time(self.plane.pixel_to_point(pixel)), self.scheme)
    }

    /// Color every pixel of row `y`.  The imaginary part is shared by
    /// the whole row, so it is computed once.
    fn render_row(&self, y: usize, row: &mut [Rgb]) {
        let im = self.plane.row_to_imaginary(y);
        for (x, slot) in row.iter_mut().enumerate() {
            let point = Complex::new(self.plane.column_to_real(x), im);
            *slot = colorize(escape_time(point), self.scheme);
        }
    }

    /// Dispatch to one of the three strategies.  `threads` is ignored
    /// by the sequential one.
    pub fn render(&self, strategy: Strategy, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount(threads));
        }
        info!(
            "Rendering {0}x{0} over {1:?} with scheme {2}, strategy {3}, {4} thread(s)",
            self.plane.resolution,
            self.plane.viewport,
            self.scheme,
            strategy,
            if strategy == Strategy::Sequential { 1 } else { threads }
        );
        let start = Instant::now();
        let buffer = match strategy {
            Strategy::Sequential => self.render_single(),
            Strategy::Threaded => self.render_threaded(threads),
            Strategy::Rayon => self.render_rayon(threads),
        }?;
        info!("Computed {} pixels in {:?}", buffer.len(), start.elapsed());
        Ok(buffer)
    }

    /// The main function for single-threaded renders.
    pub fn render_single(&self) -> Result<PixelBuffer, RenderError> {
        let mut buffer = PixelBuffer::allocate(self.plane.resolution)?;
        {
            let pixels = buffer.rows_mut().flat_map(|row| row.iter_mut());
            let coordinates = iproduct!(0..self.plane.resolution, 0..self.plane.resolution);
            for ((y, x), slot) in coordinates.zip(pixels) {
                *slot = self.pixel(&Pixel(x, y));
            }
        }
        Ok(buffer)
    }

    /// A worker's whole life: color each row of its stripe.
    fn render_stripe(&self, worker: usize, stripe: Stripe<Rgb>) {
        debug!("Worker {} starting on {} rows", worker, stripe.len());
        for (y, row) in stripe {
            self.render_row(y, row);
        }
        debug!("Worker {} done", worker);
    }

    /// A multi-threaded version of the render function.  Starts
    /// exactly `threads` workers, each owning the rows the stripe
    /// partitioner gives it, and waits for all of them.  If any worker
    /// cannot be started, those already running are joined and no
    /// buffer is returned.
    pub fn render_threaded(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount(threads));
        }
        let mut buffer = PixelBuffer::allocate(self.plane.resolution)?;
        {
            let stripes = deal_rows(buffer.rows_mut(), threads);
            crossbeam::scope(|spawner| -> Result<(), RenderError> {
                for (index, stripe) in stripes.into_iter().enumerate() {
                    let worker = index + 1;
                    spawner
                        .builder()
                        .name(format!("mandelbrot-worker-{}", worker))
                        .spawn(move |_| self.render_stripe(worker, stripe))
                        .map_err(RenderError::WorkerSpawn)?;
                }
                Ok(())
            })
            .map_err(|_| RenderError::WorkerPanicked)??;
        }
        Ok(buffer)
    }

    /// The rayon version.  Builds a pool of `threads` threads and hands
    /// it the rows as a parallel iterator.
    pub fn render_rayon(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount(threads));
        }
        let mut buffer = PixelBuffer::allocate(self.plane.resolution)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mandelbrot-rayon-{}", i + 1))
            .build()
            .map_err(RenderError::ThreadPool)?;
        pool.install(|| {
            buffer
                .par_rows_mut()
                .enumerate()
                .for_each(|(y, row)| self.render_row(y, row));
        });
        debug!("Rayon pool finished {} rows", buffer.resolution());
        Ok(buffer)
    }
}
