#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shape and fractal renderer
//!
//! Every pixel of a square canvas is mapped to a point on the real
//! plane, through a center point and a zoom factor, and the point is
//! classified against the selected rule: a circle, a square, an
//! equilateral triangle, a Sierpinski triangle, or the Mandelbrot set.
//!
//! The geometric shapes are plain inside/outside tests.  The Sierpinski
//! triangle replaces its triangle with three half-size triangles, again
//! and again, to whatever depth was asked for; a point is inside if it
//! lands in any of the smallest triangles.  The Mandelbrot set takes a
//! point `c` and repeatedly squares `z` and adds `c`, starting from
//! zero; if `z` wanders beyond the cutoff the point is outside, and how
//! many steps that took can be turned into a color.
//!
//! No pixel depends on any other, so rendering splits cleanly across
//! threads by bands of rows.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;

pub mod color;
pub mod config;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod shapes;

pub use color::Color;
pub use config::{RenderConfig, Shape};
pub use errors::{ConfigError, RenderError};
pub use escape::{iterate, Escape};
pub use planes::{Pixel, PlaneMapper};
pub use render::{render, render_threaded, write_image};
