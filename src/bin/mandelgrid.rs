extern crate clap;
extern crate image;
extern crate mandelgrid;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use num::{clamp, Complex};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use mandelgrid::{Config, Engine, Region, Resolution};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SEQUENTIAL: &str = "sequential";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = std::cmp::max(num_cpus::get(), 4);

    App::new("mandelgrid")
        .version("0.1.0")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Samples along the real and imaginary axes"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.25,-1.25")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the sampled region"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.75,1.25")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the sampled region"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("4")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("128")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum escape-time count per point"),
        )
        .arg(
            Arg::with_name(SEQUENTIAL)
                .required(false)
                .long(SEQUENTIAL)
                .help("Evaluate on a single thread instead of dispatching rows"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}

fn main() {
    let matches = args();
    let size: (usize, usize) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let threads = usize::from_str(matches.value_of(THREADS).unwrap())
        .expect("Could not parse thread count.");
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");

    let region = match Region::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im) {
        Ok(region) => region,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let resolution = match Resolution::new(size.0, size.1) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let config = Config {
        max_iterations: iterations,
        workers: threads,
        parallel: !matches.is_present(SEQUENTIAL),
    };

    let mut engine = match Engine::new(resolution, config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    match engine.calculate(region) {
        Err(e) => {
            eprintln!("Calculation failure: {}", e);
            std::process::exit(1);
        }
        Ok(result) => {
            let pixels: Vec<u8> = result
                .counts()
                .iter()
                .map(|&count| clamp((u64::from(count) * 255 / u64::from(iterations)) as u32, 0, 255) as u8)
                .collect();
            if let Err(e) = write_image(
                matches.value_of(OUTPUT).unwrap(),
                &pixels,
                (result.cols(), result.rows()),
            ) {
                eprintln!("Could not write image: {}", e);
                std::process::exit(1);
            }
        }
    }
}
