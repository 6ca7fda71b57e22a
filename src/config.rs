// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render configuration: which shape to draw, how big, where the
//! view is centered and how far it is zoomed.  Built once, validated
//! once, and read-only from then on.

use std::fmt;
use std::str::FromStr;

use num::Complex;

use crate::color::Color;
use crate::errors::ConfigError;
use crate::escape;
use crate::planes::PlaneMapper;
use crate::shapes;

/// Width and height of the canvas, in pixels.
pub const IMAGE_SIZE: usize = 1000;
/// Radius or side length when none is given.
pub const DEFAULT_SIZE: f64 = 0.5;
/// Magnification when none is given.
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Subdivision or escape-time depth when none is given.
pub const DEFAULT_ITERATIONS: usize = 1;
/// Escape-time cutoff when none is given.
pub const DEFAULT_CUTOFF: f64 = 2.0;

/// The things we know how to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Closed disk; size is the radius.
    Circle,
    /// Open square; size is the side.
    Square,
    /// Equilateral triangle; size is the side.
    Triangle,
    /// Sierpinski triangle; size is the side, iterations the depth.
    SierpinskiTriangle,
    /// Black and white Mandelbrot set.
    Mandelbrot,
    /// Mandelbrot set colored by escape time.
    DynamicMandelbrot,
}

impl Shape {
    /// Every shape name the parser accepts, in the order they are listed
    /// in help text.
    pub const NAMES: [&'static str; 6] = [
        "circle",
        "square",
        "triangle",
        "sierpinski_triangle",
        "mandelbrot",
        "dynamic_mandelbrot",
    ];

    /// The name the parser knows this shape by.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::SierpinskiTriangle => "sierpinski_triangle",
            Shape::Mandelbrot => "mandelbrot",
            Shape::DynamicMandelbrot => "dynamic_mandelbrot",
        }
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    /// An empty name is a circle.
    fn from_str(s: &str) -> Result<Shape, ConfigError> {
        match s {
            "" | "circle" => Ok(Shape::Circle),
            "square" => Ok(Shape::Square),
            "triangle" => Ok(Shape::Triangle),
            "sierpinski_triangle" => Ok(Shape::SierpinskiTriangle),
            "mandelbrot" => Ok(Shape::Mandelbrot),
            "dynamic_mandelbrot" => Ok(Shape::DynamicMandelbrot),
            other => Err(ConfigError::InvalidShape(other.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a render needs to know.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// What to draw.
    pub shape: Shape,
    /// Radius for circles, side length for everything else.  Ignored
    /// by the Mandelbrot shapes.
    pub size: f64,
    /// The point on the plane at the middle of the image.
    pub center: Complex<f64>,
    /// Magnification; always positive.
    pub zoom: f64,
    /// Subdivision depth for Sierpinski, iteration limit for Mandelbrot.
    pub iterations: usize,
    /// Escape radius for the Mandelbrot shapes; always positive.
    pub cutoff: f64,
    /// Canvas width and height in pixels.
    pub image_size: usize,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            shape: Shape::Circle,
            size: DEFAULT_SIZE,
            center: Complex::new(0.0, 0.0),
            zoom: DEFAULT_ZOOM,
            iterations: DEFAULT_ITERATIONS,
            cutoff: DEFAULT_CUTOFF,
            image_size: IMAGE_SIZE,
        }
    }
}

impl RenderConfig {
    /// Validates and assembles a configuration.  The center is taken as
    /// a slice so that callers handing us whatever the user typed get a
    /// proper error when it isn't exactly two numbers.
    pub fn new(
        shape: Shape,
        size: f64,
        center: &[f64],
        zoom: f64,
        iterations: usize,
        cutoff: f64,
    ) -> Result<RenderConfig, ConfigError> {
        let center = match *center {
            [x, y] => Complex::new(x, y),
            _ => return Err(ConfigError::CenterNotPair(center.len())),
        };
        // Written as negations so that NaN is rejected too.
        if !(zoom > 0.0) {
            return Err(ConfigError::NonPositiveZoom(zoom));
        }
        if !(cutoff > 0.0) {
            return Err(ConfigError::NonPositiveCutoff(cutoff));
        }
        Ok(RenderConfig {
            shape,
            size,
            center,
            zoom,
            iterations,
            cutoff,
            image_size: IMAGE_SIZE,
        })
    }

    /// The same configuration on a canvas of a different size.
    pub fn with_image_size(self, image_size: usize) -> RenderConfig {
        RenderConfig { image_size, ..self }
    }

    /// The mapping from this configuration's canvas to the plane.
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new(self.image_size, self.center, self.zoom)
    }

    /// True when the escape-time ramp has no room to spread colors and
    /// its divisor is clamped.
    pub fn ramp_is_clamped(&self) -> bool {
        self.shape == Shape::DynamicMandelbrot && self.iterations <= 1
    }

    /// The color of one point on the plane.
    pub fn classify(&self, point: Complex<f64>) -> Color {
        match self.shape {
            Shape::Circle => shapes::circle(point, self.size),
            Shape::Square => shapes::square(point, self.size),
            Shape::Triangle => shapes::triangle(point, self.size),
            Shape::SierpinskiTriangle => {
                shapes::sierpinski_triangle(point, self.size, self.iterations)
            }
            Shape::Mandelbrot => escape::mandelbrot(point, self.iterations, self.cutoff),
            Shape::DynamicMandelbrot => {
                escape::dynamic_mandelbrot(point, self.iterations, self.cutoff)
            }
        }
    }
}
