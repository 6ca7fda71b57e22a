// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iterator and the two Mandelbrot colorizers built on
//! top of it.
//!
//! A point `c` on the complex plane belongs to the Mandelbrot set if
//! repeatedly squaring `z` and adding `c`, starting from zero, never
//! carries `z` beyond the cutoff.  We can only ever try a bounded number
//! of steps, so "belongs" here means "has not escaped yet".

use num::Complex;

use crate::color::{hsv_to_rgb, Color};

/// What became of a point after iterating it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Escape {
    /// Every requested step stayed within the cutoff.  `z` is the last
    /// value computed and `count` is the number of steps taken, which is
    /// always the requested depth.
    Bounded {
        /// Last value of the orbit.
        z: Complex<f64>,
        /// Number of steps completed.
        count: usize,
    },
    /// The orbit left the cutoff circle.  `count` is the number of steps
    /// that completed *before* the one that escaped.
    Diverged {
        /// Number of steps completed before the escaping step.
        count: usize,
    },
}

impl Escape {
    /// True if the orbit escaped.
    pub fn is_diverged(&self) -> bool {
        match *self {
            Escape::Diverged { .. } => true,
            Escape::Bounded { .. } => false,
        }
    }

    /// The iteration count, whichever way the orbit went.
    pub fn count(&self) -> usize {
        match *self {
            Escape::Bounded { count, .. } | Escape::Diverged { count } => count,
        }
    }
}

/// Iterates `z -> z^2 + c` from zero for at most `depth` steps.  The
/// first step whose modulus exceeds `cutoff` ends the iteration.
pub fn iterate(c: Complex<f64>, depth: usize, cutoff: f64) -> Escape {
    let mut z = Complex::new(0.0, 0.0);
    for count in 0..depth {
        z = z * z + c;
        if z.norm() > cutoff {
            return Escape::Diverged { count };
        }
    }
    Escape::Bounded { z, count: depth }
}

/// The divisor that takes a divergence count into [0, 1].  The largest
/// count a diverged point can report is `depth - 1`; a depth of zero or
/// one would leave nothing to divide by, so the divisor never drops
/// below one.
pub fn ramp_divisor(depth: usize) -> usize {
    if depth > 1 {
        depth - 1
    } else {
        1
    }
}

/// Black for points that escaped, white for the rest.
pub fn mandelbrot(c: Complex<f64>, depth: usize, cutoff: f64) -> Color {
    if iterate(c, depth, cutoff).is_diverged() {
        Color::FILL
    } else {
        Color::BACKGROUND
    }
}

/// Colors escaped points by how long they took to escape, using the
/// scaled count as both hue and value at full saturation.  Points that
/// never escaped stay white.
pub fn dynamic_mandelbrot(c: Complex<f64>, depth: usize, cutoff: f64) -> Color {
    match iterate(c, depth, cutoff) {
        Escape::Diverged { count } => {
            let scaled = count as f64 / ramp_divisor(depth) as f64;
            let (r, g, b) = hsv_to_rgb(scaled, 1.0, scaled);
            Color::from_unit(r, g, b)
        }
        Escape::Bounded { .. } => Color::BACKGROUND,
    }
}
