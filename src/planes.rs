// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square grid of pixels with an origin at 0,0 and the real
//! plane, viewed through a center point and a zoom factor.  The pixel
//! grid always spans the unit square [-1, 1) on both axes at zoom 1.
use num::Complex;

/// Describes the x, y of a pixel on the integral grid.  Column first,
/// then row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

// We don't need a Point, as a single Complex number is a Point: the
// real part is x and the imaginary part is y.

/// Maps pixels on a square integral plane to points on the real plane.
/// Rows are not flipped: row 0 maps to the most negative y.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The width and height, in pixels, of the integral plane.
    pub size: usize,
    /// The point on the real plane that the middle of the grid lands on.
    pub center: Complex<f64>,
    /// Magnification.  Must be positive; the mapper does not check.
    pub zoom: f64,
    // Half the grid size, the divisor that takes a pixel offset to the
    // unit square.
    half: f64,
}

impl PlaneMapper {
    /// Constructor.  Validation of the zoom factor belongs to whoever
    /// builds the configuration; see `RenderConfig::new`.
    pub fn new(size: usize, center: Complex<f64>, zoom: f64) -> PlaneMapper {
        PlaneMapper {
            size,
            center,
            zoom,
            half: (size as f64) / 2.0,
        }
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Given a pixel on the integral plane, return the point on the real
    /// plane it maps to.  Each axis is taken to the unit square, scaled
    /// by the zoom, and then offset by the center.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.axis_to_real(pixel.0, self.center.re),
            self.axis_to_real(pixel.1, self.center.im),
        )
    }

    #[inline]
    fn axis_to_real(&self, index: usize, offset: f64) -> f64 {
        let unit = ((index as f64) - self.half) / self.half;
        let scaled = unit / self.zoom;
        scaled + offset
    }

    /// Given a point on the real plane, map it to the nearest pixel on
    /// the integral plane.  Points whose nearest pixel falls off the grid
    /// return None.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = (((point.re - self.center.re) * self.zoom) * self.half + self.half).round();
        let top = (((point.im - self.center.im) * self.zoom) * self.half + self.half).round();
        let size = self.size as f64;
        if left < 0.0 || left >= size || top < 0.0 || top >= size {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}
