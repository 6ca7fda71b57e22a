// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain geometric classifiers and the Sierpinski subdivider.  Every
//! function here takes a point on the real plane and a size, and says
//! whether the point is inside the shape.

use num::Complex;

use crate::color::Color;

#[inline]
fn fill_if(inside: bool) -> Color {
    if inside {
        Color::FILL
    } else {
        Color::BACKGROUND
    }
}

/// The height of an equilateral triangle with the given side.
#[inline]
pub fn triangle_height(side: f64) -> f64 {
    side * 3.0_f64.sqrt() / 2.0
}

/// A closed disk about the origin: the rim is inside.
pub fn circle(point: Complex<f64>, radius: f64) -> Color {
    fill_if(point.re.powi(2) + point.im.powi(2) <= radius.powi(2))
}

/// An open square about the origin: the edges are outside.
pub fn square(point: Complex<f64>, side: f64) -> Color {
    fill_if(point.re.abs() < side / 2.0 && point.im.abs() < side / 2.0)
}

/// An equilateral triangle centered on the origin with its apex toward
/// negative y.  The triangle is open: every edge is outside.
pub fn triangle(point: Complex<f64>, side: f64) -> Color {
    let height = triangle_height(side);
    let recentered = point.im + height / 2.0;
    if recentered <= 0.0 || recentered >= height {
        return Color::BACKGROUND;
    }
    fill_if(60.0_f64.to_radians().tan() * point.re.abs() < recentered.abs())
}

/// A Sierpinski triangle of the given side, subdivided `depth` times.
/// At depth zero this is exactly `triangle`.  Each level replaces a
/// triangle with three half-size copies: one at the apex and two
/// sitting side by side along the flat edge.
pub fn sierpinski_triangle(point: Complex<f64>, side: f64, depth: usize) -> Color {
    // Each entry is a subproblem: the point relative to a sub-triangle's
    // center, that sub-triangle's side, and the levels left to subdivide.
    let mut pending = vec![(point, side, depth)];
    while let Some((p, side, depth)) = pending.pop() {
        if depth == 0 {
            if triangle(p, side) == Color::FILL {
                return Color::FILL;
            }
            continue;
        }
        let height = triangle_height(side);
        let half = side / 2.0;
        pending.push((Complex::new(p.re, p.im + height / 4.0), half, depth - 1));
        pending.push((
            Complex::new(p.re - side / 4.0, p.im - height / 4.0),
            half,
            depth - 1,
        ));
        pending.push((
            Complex::new(p.re + side / 4.0, p.im - height / 4.0),
            half,
            depth - 1,
        ));
    }
    Color::BACKGROUND
}
