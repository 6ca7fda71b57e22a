// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render driver.  Walks every pixel of the canvas, maps it to the
//! plane, classifies it and writes the resulting color.  Pixels never
//! look at each other, so the threaded renderer simply hands each
//! thread its own band of rows.

use std::cmp;
use std::path::Path;

use image::Pixel as ImagePixel;
use image::RgbImage;
use itertools::iproduct;
use log::debug;

use crate::color::{Color, MAX_COLOR};
use crate::config::RenderConfig;
use crate::errors::RenderError;
use crate::planes::{Pixel, PlaneMapper};

/// Bytes per pixel in the output buffer.
const CHANNELS: usize = 3;

/// Fills a band of whole rows, starting at `first_row`, in place.
fn render_rows(config: &RenderConfig, mapper: &PlaneMapper, first_row: usize, band: &mut [u8]) {
    let size = mapper.size;
    let rows = band.len() / (size * CHANNELS);
    for (row, column) in iproduct!(0..rows, 0..size) {
        let point = mapper.pixel_to_point(&Pixel(column, first_row + row));
        let offset = (row * size + column) * CHANNELS;
        band[offset..offset + CHANNELS].copy_from_slice(&config.classify(point).channels());
    }
}

/// A white canvas with room for every pixel of the plane.
fn blank_canvas(mapper: &PlaneMapper) -> Vec<u8> {
    vec![MAX_COLOR; mapper.len() * CHANNELS]
}

fn into_image(config: &RenderConfig, pixels: Vec<u8>) -> Result<RgbImage, RenderError> {
    let side = config.image_size as u32;
    RgbImage::from_raw(side, side, pixels).ok_or(RenderError::Canvas(config.image_size))
}

/// Renders the whole canvas on the calling thread.
pub fn render(config: &RenderConfig) -> Result<RgbImage, RenderError> {
    let mapper = config.mapper();
    let mut pixels = blank_canvas(&mapper);
    if !mapper.is_empty() {
        render_rows(config, &mapper, 0, &mut pixels);
    }
    into_image(config, pixels)
}

/// Renders the canvas on up to `threads` threads, one band of rows
/// each.  If any thread panics the whole render fails; no partially
/// drawn image is ever returned.
pub fn render_threaded(config: &RenderConfig, threads: usize) -> Result<RgbImage, RenderError> {
    let mapper = config.mapper();
    let mut pixels = blank_canvas(&mapper);
    if mapper.is_empty() {
        return into_image(config, pixels);
    }

    let threads = cmp::max(threads, 1);
    let rows_per_band = (mapper.size + threads - 1) / threads;
    let band_len = rows_per_band * mapper.size * CHANNELS;
    debug!(
        "rendering {}x{} {} in bands of {} rows",
        mapper.size, mapper.size, config.shape, rows_per_band
    );

    {
        let mapper = &mapper;
        crossbeam::scope(|spawner| {
            for (index, band) in pixels.chunks_mut(band_len).enumerate() {
                spawner.spawn(move |_| render_rows(config, mapper, index * rows_per_band, band));
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;
    }

    into_image(config, pixels)
}

/// The color of one pixel of a finished render.  Panics if the pixel is
/// off the canvas.
pub fn color_at(image: &RgbImage, pixel: &Pixel) -> Color {
    let channels = image.get_pixel(pixel.0 as u32, pixel.1 as u32).channels();
    Color(channels[0], channels[1], channels[2])
}

/// Writes a finished render.  The format follows the file extension.
pub fn write_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), RenderError> {
    image.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Shape;

    fn config(shape: Shape, size: usize) -> RenderConfig {
        let mut config = RenderConfig::default().with_image_size(size);
        config.shape = shape;
        config
    }

    #[test]
    fn render_fills_the_whole_canvas() {
        let image = render(&config(Shape::Circle, 40)).unwrap();
        assert_eq!(image.dimensions(), (40, 40));
        assert_eq!(color_at(&image, &Pixel(20, 20)), Color::FILL);
        assert_eq!(color_at(&image, &Pixel(0, 0)), Color::BACKGROUND);
    }

    #[test]
    fn each_pixel_is_classified_at_its_mapped_point() {
        let mut config = config(Shape::Mandelbrot, 30);
        config.iterations = 12;
        config.zoom = 0.5;
        config.center = num::Complex::new(-0.5, 0.0);
        let image = render(&config).unwrap();
        let mapper = config.mapper();
        for (column, row) in iproduct!(0..30, 0..30) {
            let pixel = Pixel(column, row);
            assert_eq!(
                color_at(&image, &pixel),
                config.classify(mapper.pixel_to_point(&pixel))
            );
        }
    }

    #[test]
    fn color_at_reads_column_then_row() {
        // Off-center view: the disk covers the left part of the canvas
        // only, so swapping column and row would change the answer.
        let mut config = config(Shape::Circle, 20);
        config.center = num::Complex::new(0.6, 0.0);
        let image = render(&config).unwrap();
        assert_eq!(color_at(&image, &Pixel(2, 10)), Color::FILL);
        assert_eq!(color_at(&image, &Pixel(10, 2)), Color::BACKGROUND);
        let raw = image.clone().into_raw();
        let offset = (10 * 20 + 2) * CHANNELS;
        assert_eq!(
            color_at(&image, &Pixel(2, 10)).channels(),
            [raw[offset], raw[offset + 1], raw[offset + 2]]
        );
    }

    #[test]
    #[should_panic]
    fn color_at_panics_off_the_canvas() {
        let image = render(&config(Shape::Circle, 5)).unwrap();
        color_at(&image, &Pixel(5, 0));
    }

    #[test]
    fn threaded_render_matches_single_threaded() {
        for shape in &[Shape::SierpinskiTriangle, Shape::DynamicMandelbrot] {
            let mut config = config(*shape, 37);
            config.iterations = 5;
            config.size = 1.5;
            let single = render(&config).unwrap();
            for threads in 1..6 {
                let threaded = render_threaded(&config, threads).unwrap();
                assert_eq!(single.clone().into_raw(), threaded.into_raw());
            }
        }
    }

    #[test]
    fn more_threads_than_rows() {
        let config = config(Shape::Square, 3);
        let single = render(&config).unwrap();
        let threaded = render_threaded(&config, 8).unwrap();
        assert_eq!(single.into_raw(), threaded.into_raw());
    }

    #[test]
    fn zero_threads_means_one() {
        let config = config(Shape::Triangle, 10);
        assert!(render_threaded(&config, 0).is_ok());
    }

    #[test]
    fn empty_canvas() {
        let config = config(Shape::Circle, 0);
        assert_eq!(render(&config).unwrap().dimensions(), (0, 0));
        assert_eq!(render_threaded(&config, 4).unwrap().dimensions(), (0, 0));
    }
}
