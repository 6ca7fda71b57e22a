// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types.  Configuration errors are caught before a render
//! starts; render errors abort the render as a whole.

use failure::Fail;

/// Problems with the requested render, found before any pixel is drawn.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The shape name matched none of the known shapes.
    #[fail(display = "Invalid shape: {}", _0)]
    InvalidShape(String),

    /// The center was given with the wrong number of coordinates.
    #[fail(display = "Center must be a pair of numbers, got {} value(s).", _0)]
    CenterNotPair(usize),

    /// Zoom was zero or negative.
    #[fail(display = "Zoom must be a positive number, got {}.", _0)]
    NonPositiveZoom(f64),

    /// Cutoff was zero or negative.
    #[fail(display = "Cutoff must be a positive number, got {}.", _0)]
    NonPositiveCutoff(f64),

    /// A numeric argument could not be parsed.
    #[fail(display = "Could not parse {} from {:?}.", _0, _1)]
    Unparseable(&'static str, String),
}

/// Failures while producing or writing an image.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// One of the render workers panicked; the image is incomplete and
    /// has been discarded.
    #[fail(display = "A render worker panicked; no image was produced.")]
    WorkerPanicked,

    /// The finished pixel buffer did not fit the canvas.
    #[fail(display = "Pixel buffer does not fit a {}x{} canvas.", _0, _0)]
    Canvas(usize),

    /// The image could not be written out.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[fail(cause)] std::io::Error),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> RenderError {
        RenderError::Io(err)
    }
}
