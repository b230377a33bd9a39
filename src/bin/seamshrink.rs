// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate image;

use clap::{value_t, App, Arg, ArgMatches};
use image::{DynamicImage, Rgba, RgbaImage};
use log::{error, info};
use seamshrink::{
    apply_mask, clear_mask, compute_energy_with_config, draw_seam, energy_to_image,
    fit_within_limits, resize_with_config, sanitize_alpha, target_for_scale, Config, ImageSize,
    IterationEvent, MaskOverlay, Result, Schedule, Seam,
};
use std::path::Path;
use std::process;

const DEFAULT_WIDTH_SCALE: &str = "50";
const DEFAULT_HEIGHT_SCALE: &str = "70";
const SEAM_COLOUR: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn schedule_of(name: &str) -> Schedule {
    match name {
        "alternate" => Schedule::Alternate,
        "width-first" => Schedule::WidthFirst,
        _ => Schedule::Proportional,
    }
}

fn config_of(matches: &ArgMatches) -> Config {
    let mut config = Config::new().set_schedule(schedule_of(
        matches.value_of("schedule").unwrap_or("proportional"),
    ));
    if matches.is_present("baseline") {
        config =
            config.set_unmasked_baseline(value_t!(matches, "baseline", f64).unwrap_or_else(|e| e.exit()));
    }
    config
}

fn target_of(matches: &ArgMatches, size: ImageSize) -> ImageSize {
    let scaled = target_for_scale(
        size,
        value_t!(matches, "width-scale", u32).unwrap_or_else(|e| e.exit()),
        value_t!(matches, "height-scale", u32).unwrap_or_else(|e| e.exit()),
    );
    let pick = |name: &str, fallback: u32| {
        if matches.is_present(name) {
            value_t!(matches, name, u32).unwrap_or_else(|e| e.exit())
        } else {
            fallback
        }
    };
    ImageSize::new(pick("width", scaled.w), pick("height", scaled.h))
}

// JPEG has no alpha channel, so drop it there.
fn save(buffer: RgbaImage, path: &Path) -> Result<()> {
    let jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);
    if jpeg {
        DynamicImage::ImageRgba8(buffer).to_rgb8().save(path)?;
    } else {
        buffer.save(path)?;
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = config_of(matches);

    let input = matches.value_of("input").unwrap_or_default();
    let mut image = image::open(input)?.to_rgba8();
    if !matches.is_present("no-limit") {
        image = fit_within_limits(image, config.max_width, config.max_height);
    }

    match matches.value_of("mask") {
        Some(path) => {
            let overlay = MaskOverlay::from_alpha(&image::open(path)?.to_rgba8());
            let marked = apply_mask(&mut image, &overlay);
            info!("mask marks {} pixels for removal", marked);
        }
        None => {
            sanitize_alpha(&mut image);
        }
    }

    if let Some(path) = matches.value_of("energy") {
        energy_to_image(&compute_energy_with_config(&image, &config)?).save(path)?;
        info!("wrote energy map to {}", path);
    }

    let size = ImageSize::of(&image);
    let target = target_of(matches, size);
    info!(
        "carving {}x{} down to {}x{}",
        size.w, size.h, target.w, target.h
    );

    // Only kept when a seam picture was asked for: the buffer each
    // event's seam was found in, and the latest such pair.
    let seams = matches.value_of("seams");
    let mut before = seams.map(|_| image.clone());
    let mut last_cut: Option<(RgbaImage, Seam)> = None;

    let report_every = |steps: u32| (steps / 10).max(1);
    let mut result = resize_with_config(image, target.w, target.h, &config, |event: &IterationEvent| {
        if let Some(buffer) = before.as_mut() {
            let carved = std::mem::replace(buffer, event.img.clone());
            last_cut = Some((carved, event.seam.clone()));
        }
        if event.step % report_every(event.steps) == 0 || event.step == event.steps {
            info!(
                "{:>3}% ({}/{}) {}x{}",
                event.step * 100 / event.steps,
                event.step,
                event.steps,
                event.size.w,
                event.size.h
            );
        }
    })?;

    if let Some(path) = seams {
        match last_cut {
            Some((buffer, seam)) => {
                let mut drawn = draw_seam(&buffer, &seam, SEAM_COLOUR);
                clear_mask(&mut drawn);
                save(drawn, Path::new(path))?;
                info!("wrote last {} seam to {}", seam.orientation(), path);
            }
            None => info!("no seams removed, not writing {}", path),
        }
    }

    clear_mask(&mut result);
    let output = matches.value_of("output").unwrap_or_default();
    save(result, Path::new(output))?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("seamshrink")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (overrides --width-scale)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (overrides --height-scale)"),
        )
        .arg(
            Arg::with_name("width-scale")
                .long("width-scale")
                .takes_value(true)
                .default_value(DEFAULT_WIDTH_SCALE)
                .help("Target width as a percentage, 1 to 100"),
        )
        .arg(
            Arg::with_name("height-scale")
                .long("height-scale")
                .takes_value(true)
                .default_value(DEFAULT_HEIGHT_SCALE)
                .help("Target height as a percentage, 1 to 100"),
        )
        .arg(
            Arg::with_name("mask")
                .long("mask")
                .short("m")
                .takes_value(true)
                .help("Overlay image; pixels with any alpha are removed first"),
        )
        .arg(
            Arg::with_name("schedule")
                .long("schedule")
                .takes_value(true)
                .possible_values(&["proportional", "alternate", "width-first"])
                .default_value("proportional")
                .help("Order of width and height seams"),
        )
        .arg(
            Arg::with_name("baseline")
                .long("baseline")
                .takes_value(true)
                .help("Energy floor for unmasked pixels"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .takes_value(true)
                .help("Also write the initial energy map as a greyscale image"),
        )
        .arg(
            Arg::with_name("seams")
                .long("seams")
                .takes_value(true)
                .help("Also write the image as it was before the last cut, with that seam drawn in"),
        )
        .arg(
            Arg::with_name("no-limit")
                .long("no-limit")
                .help("Do not downscale images larger than 1500x1500 first"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }
}
