// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colors as written into the output buffer, and the HSV conversion
//! the continuous Mandelbrot colorizer ramps through.

/// The largest value a channel may take.
pub const MAX_COLOR: u8 = 255;

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Points that belong to the shape.
    pub const FILL: Color = Color(0, 0, 0);
    /// Everything else; also the color of a fresh canvas.
    pub const BACKGROUND: Color = Color(MAX_COLOR, MAX_COLOR, MAX_COLOR);

    /// The channels in buffer order.
    pub fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// Builds a color out of unit-range channel intensities.  Each
    /// channel is scaled to 8 bits by truncation, not rounding.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Color {
        let max = f64::from(MAX_COLOR);
        Color((r * max) as u8, (g * max) as u8, (b * max) as u8)
    }
}

/// Converts hue, saturation and value, all in [0, 1], to red, green and
/// blue in [0, 1].  A hue of 1.0 wraps around to red.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sextant = (h * 6.0).floor();
    let f = h * 6.0 - sextant;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sextant as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
