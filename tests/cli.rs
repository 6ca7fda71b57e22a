extern crate assert_cmd;
extern crate fractals;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use fractals::render::color_at;
use fractals::{Color, Pixel};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn fractals() -> Command {
    Command::cargo_bin("fractals").unwrap()
}

fn load(path: &Path) -> image::RgbImage {
    image::open(path).unwrap().to_rgb()
}

#[test]
fn default_render_is_a_centered_disk() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("circle.png");
    fractals().arg("--output").arg(&out).assert().success();

    let image = load(&out);
    assert_eq!(image.dimensions(), (1000, 1000));
    assert_eq!(color_at(&image, &Pixel(500, 500)), Color::FILL);
    assert_eq!(color_at(&image, &Pixel(750, 500)), Color::FILL);
    assert_eq!(color_at(&image, &Pixel(751, 500)), Color::BACKGROUND);
    assert_eq!(color_at(&image, &Pixel(0, 0)), Color::BACKGROUND);
}

#[test]
fn every_shape_renders() {
    let dir = tempdir().unwrap();
    for shape in fractals::Shape::NAMES.iter() {
        let out = dir.path().join(format!("{}.png", shape));
        fractals()
            .args(&["--shape", *shape, "--iterations", "3", "--threads", "1"])
            .arg("--output")
            .arg(&out)
            .assert()
            .success();
        assert!(out.exists());
    }
}

#[test]
fn negative_center_and_options() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("mandelbrot.png");
    fractals()
        .args(&[
            "--shape",
            "dynamic_mandelbrot",
            "--center",
            "-0.5",
            "0",
            "--zoom",
            "0.5",
            "--iterations",
            "20",
            "--cutoff",
            "2",
        ])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let image = load(&out);
    // The middle of the view is -0.5, well inside the set.
    assert_eq!(color_at(&image, &Pixel(500, 500)), Color::BACKGROUND);
    // The top-left corner is -2.5-2i, which escapes at once.
    assert_eq!(color_at(&image, &Pixel(0, 0)), Color(0, 0, 0));
}

#[test]
fn invalid_shape_fails_before_rendering() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("hexagon.png");
    fractals()
        .args(&["--shape", "hexagon"])
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shape: hexagon"));
    assert!(!out.exists());
}

#[test]
fn zoom_must_be_positive() {
    for zoom in &["0", "-2"] {
        fractals()
            .args(&["--zoom", *zoom])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Zoom must be a positive number"));
    }
}

#[test]
fn cutoff_must_be_positive() {
    fractals()
        .args(&["--shape", "mandelbrot", "--cutoff", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cutoff must be a positive number"));
}

#[test]
fn center_needs_two_numbers() {
    fractals().args(&["--center", "0.5"]).assert().failure();
    fractals()
        .args(&["--center", "0.5", "north"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("center coordinate"));
}

#[test]
fn thread_count_is_range_checked() {
    fractals()
        .args(&["--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between"));
}
