// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The command-line face of the carver: decode whatever `image` can
//! open, hand the raw RGBA buffer to the library, encode the result
//! wherever the output extension points.  With `--energy` it writes
//! the Sobel energy map of the input as a graymap instead, which is
//! the quickest way to see what the carver is about to chew through.

use std::process;

use clap::{App, Arg};
use failure::{err_msg, Error};
use image::RgbaImage;

use imgseam::dump::energy_to_image;
use imgseam::energy::{luminance_map, sobel_energy};
use imgseam::{seamcarve, Grid};

fn run() -> Result<(), Error> {
    let matches = App::new("imgseam")
        .version("0.1.0")
        .about("Content-aware image narrowing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to narrow")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("columns")
                .short("n")
                .long("columns")
                .help("How many columns to carve away")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the input's energy map as a graymap instead of carving"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let columns: u32 = matches.value_of("columns").unwrap().parse()?;

    let decoded = image::open(input)?.to_rgba();
    let (width, height) = decoded.dimensions();
    let buffer = Grid::from_rgba_bytes(width, height, &decoded.into_raw())?;

    if matches.is_present("energy") {
        let map = sobel_energy(&luminance_map(&buffer));
        energy_to_image(&map).save(output)?;
        return Ok(());
    }

    let carved = seamcarve(buffer, columns)?;
    let (new_width, new_height) = (carved.width(), carved.height());
    let encoded = RgbaImage::from_raw(new_width, new_height, carved.into_rgba_bytes())
        .ok_or_else(|| err_msg("carved buffer does not fit its own dimensions"))?;
    encoded.save(output)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("imgseam: {}", err);
        process::exit(1);
    }
}
