use assert_cmd::Command;
use image::{ImageBuffer, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_card(path: &Path, width: u32, height: u32) {
    let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8, 255])
    });
    img.save(path).unwrap();
}

fn seamshrink() -> Command {
    Command::cargo_bin("seamshrink").unwrap()
}

#[test]
fn shrinks_by_default_percentages() {
    let dir = TempDir::new().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 20, 10);

    seamshrink().arg(&input).arg(&output).assert().success();

    assert_eq!(image::open(&output).unwrap().to_rgba8().dimensions(), (10, 7));
}

#[test]
fn explicit_pixel_targets_win() {
    let dir = TempDir::new().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 12, 12);

    seamshrink()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "9", "--height", "11", "--schedule", "alternate"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().to_rgba8().dimensions(), (9, 11));
}

#[test]
fn mask_and_energy_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    let mask = dir.path().join("mask.png");
    let energy = dir.path().join("energy.png");
    write_card(&input, 8, 6);

    let mut overlay = RgbaImage::new(8, 6);
    for y in 0..6 {
        overlay.put_pixel(5, y, Rgba([255, 0, 0, 255]));
    }
    overlay.save(&mask).unwrap();

    seamshrink()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "7", "--height", "6"])
        .arg("--mask")
        .arg(&mask)
        .arg("--energy")
        .arg(&energy)
        .assert()
        .success();

    let out = image::open(&output).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (7, 6));
    assert!(out.pixels().all(|p| p[3] == 255));
    assert_eq!(image::open(&energy).unwrap().to_luma8().dimensions(), (8, 6));
}

#[test]
fn last_seam_is_drawn_before_its_removal() {
    let dir = TempDir::new().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    let seams = dir.path().join("seams.png");
    write_card(&input, 8, 6);

    seamshrink()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "6", "--height", "6"])
        .arg("--seams")
        .arg(&seams)
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().to_rgba8().dimensions(), (6, 6));
    let drawn = image::open(&seams).unwrap().to_rgba8();
    assert_eq!(drawn.dimensions(), (7, 6));
    for y in 0..6 {
        let reds = (0..7).filter(|x| *drawn.get_pixel(*x, y) == Rgba([255, 0, 0, 255])).count();
        assert!(reds >= 1);
    }
}

#[test]
fn no_seam_picture_without_cuts() {
    let dir = TempDir::new().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    let seams = dir.path().join("seams.png");
    write_card(&input, 4, 4);

    seamshrink()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "4", "--height", "4"])
        .arg("--seams")
        .arg(&seams)
        .assert()
        .success();

    assert!(output.exists());
    assert!(!seams.exists());
}

#[test]
fn enlarging_is_refused() {
    let dir = TempDir::new().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_card(&input, 5, 5);

    seamshrink()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot shrink 5x5 to 6x3"));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    seamshrink()
        .arg(dir.path().join("nope.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure();
}
