// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.  A point belongs to the Mandelbrot set if
//! repeatedly squaring and adding it never carries it more than 2
//! units from the origin; how many rounds it survives before escaping
//! is what gets colored.

use num::Complex;

/// The iteration cap.  Twelve bits, so that every count below the cap
/// splits cleanly into the three nibbles the color mapper uses.  A
/// point still bounded after this many rounds is treated as inside
/// the set.
pub const ITERATION_MAX: u32 = 0xFFF;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterate `z = z * z + c` from zero and return the number of rounds
/// completed before `|z|` reached 2, or `ITERATION_MAX` if it never
/// did.
///
/// The squares of both components are carried between rounds so each
/// round costs three multiplications.  The new imaginary part has to
/// be computed while the old real part is still around.
#[inline]
pub fn escape_time(c: Complex<f64>) -> u32 {
    let (mut zx, mut zy) = (0.0f64, 0.0f64);
    let (mut zx2, mut zy2) = (0.0f64, 0.0f64);
    let mut iteration = 0;
    while iteration < ITERATION_MAX && zx2 + zy2 < ESCAPE_RADIUS_SQUARED {
        zy = 2.0 * zx * zy + c.im;
        zx = zx2 - zy2 + c.re;
        zx2 = zx * zx;
        zy2 = zy * zy;
        iteration += 1;
    }
    iteration
}
