// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate fractals;
extern crate log;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use std::str::FromStr;
use std::time::Instant;

use fractals::config::{DEFAULT_CUTOFF, DEFAULT_ITERATIONS, DEFAULT_SIZE, DEFAULT_ZOOM};
use fractals::{ConfigError, RenderConfig, Shape};

fn parse_number<T: FromStr>(s: &str, what: &'static str) -> Result<T, ConfigError> {
    T::from_str(s).map_err(|_| ConfigError::Unparseable(what, s.to_string()))
}

fn validate_number<T: FromStr>(s: &str, what: &'static str) -> Result<(), String> {
    parse_number::<T>(s, what)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Clap validator: `s` must parse as a `T` within `low..=high`.
fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const SHAPE: &str = "shape";
const SIZE: &str = "size";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const ITERATIONS: &str = "iterations";
const CUTOFF: &str = "cutoff";
const OUTPUT: &str = "output";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fractals")
        .version("0.1.0")
        .about("Renders simple shapes and fractals to a 1000x1000 image")
        .arg(
            Arg::with_name(SHAPE)
                .long(SHAPE)
                .takes_value(true)
                .default_value("circle")
                .help(
                    "One of circle, square, triangle, sierpinski_triangle, \
                     mandelbrot, dynamic_mandelbrot",
                ),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_number::<f64>(&s, "size"))
                .help("Radius of the circle, or side length of the other shapes [default: 0.5]"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .takes_value(true)
                .number_of_values(2)
                .value_names(&["X", "Y"])
                .allow_hyphen_values(true)
                .validator(|s| validate_number::<f64>(&s, "center coordinate"))
                .help("Point on the plane at the middle of the image [default: 0 0]"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .long(ZOOM)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_number::<f64>(&s, "zoom"))
                .help("Magnification, must be positive [default: 1]"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .takes_value(true)
                .validator(|s| validate_number::<usize>(&s, "iteration count"))
                .help("Sierpinski subdivision depth, or Mandelbrot iteration limit [default: 1]"),
        )
        .arg(
            Arg::with_name(CUTOFF)
                .long(CUTOFF)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_number::<f64>(&s, "cutoff"))
                .help("Mandelbrot escape radius, must be positive [default: 2]"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("fractal.png")
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with [default: all CPUs]"),
        )
        .get_matches()
}

fn number_or<T: FromStr>(
    matches: &ArgMatches,
    name: &str,
    what: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match matches.value_of(name) {
        Some(s) => parse_number(s, what),
        None => Ok(default),
    }
}

fn config_from(matches: &ArgMatches) -> Result<RenderConfig, ConfigError> {
    let shape = Shape::from_str(matches.value_of(SHAPE).unwrap_or(""))?;
    let center: Vec<f64> = match matches.values_of(CENTER) {
        Some(values) => values
            .map(|s| parse_number(s, "center coordinate"))
            .collect::<Result<_, _>>()?,
        None => vec![0.0, 0.0],
    };
    RenderConfig::new(
        shape,
        number_or(matches, SIZE, "size", DEFAULT_SIZE)?,
        &center,
        number_or(matches, ZOOM, "zoom", DEFAULT_ZOOM)?,
        number_or(matches, ITERATIONS, "iteration count", DEFAULT_ITERATIONS)?,
        number_or(matches, CUTOFF, "cutoff", DEFAULT_CUTOFF)?,
    )
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let config = config_from(matches)?;
    let threads = number_or(matches, THREADS, "thread count", num_cpus::get())?;
    let output = matches.value_of(OUTPUT).unwrap_or("fractal.png");

    info!(
        "{} size={} center=({}, {}) zoom={} iterations={} cutoff={}",
        config.shape,
        config.size,
        config.center.re,
        config.center.im,
        config.zoom,
        config.iterations,
        config.cutoff
    );
    if config.ramp_is_clamped() {
        warn!(
            "{} iteration(s) is too few to spread an escape-time ramp; clamping its divisor to 1",
            config.iterations
        );
    }

    let started = Instant::now();
    let image = fractals::render_threaded(&config, threads)?;
    info!("rendered on {} thread(s) in {:?}", threads, started.elapsed());

    fractals::write_image(&image, output)?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
