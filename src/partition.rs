// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-striped partitioning.  Rows are dealt to workers like cards:
//! worker 1 gets rows 0, T, 2T, ..., worker 2 gets rows 1, T+1, ...,
//! and so on.  Neighbouring rows cost about the same to compute, so
//! every worker ends up with a similar share of the expensive band
//! through the middle of the set, and since no row depends on any
//! other the workers never have to talk to each other.

use std::iter::StepBy;
use std::ops::Range;

/// The rows owned by `worker` (counted from 1) out of `workers`, for
/// an image `rows` high.
pub fn stripe(worker: usize, workers: usize, rows: usize) -> StepBy<Range<usize>> {
    assert!(worker >= 1 && worker <= workers);
    (worker - 1..rows).step_by(workers)
}

/// A worker's share of the buffer: each row it owns, paired with the
/// row's index.
pub type Stripe<'a, T> = Vec<(usize, &'a mut [T])>;

/// Deal an iterator of disjoint mutable rows out to `workers` bins.
/// Bin `t` (counted from 0) receives exactly the rows that
/// `stripe(t + 1, workers, _)` names.
pub fn deal_rows<'a, T, I>(rows: I, workers: usize) -> Vec<Stripe<'a, T>>
where
    I: IntoIterator<Item = &'a mut [T]>,
{
    assert!(workers >= 1);
    let mut bins: Vec<Stripe<'a, T>> = (0..workers).map(|_| Vec::new()).collect();
    for (y, row) in rows.into_iter().enumerate() {
        bins[y % workers].push((y, row));
    }
    bins
}
