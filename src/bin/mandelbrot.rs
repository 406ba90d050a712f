// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use failure::Error;
use log::debug;
use mandelbrot::{ppm, ColorScheme, RenderConfig, Renderer, Strategy, Viewport};
use std::str::FromStr;

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
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

const X_MIN: &str = "X_MIN";
const X_MAX: &str = "X_MAX";
const Y_MIN: &str = "Y_MIN";
const Y_MAX: &str = "Y_MAX";
const SIZE: &str = "SIZE";
const SCHEME: &str = "SCHEME";
const THREADS: &str = "threads";
const STRATEGY: &str = "strategy";
const OUTPUT: &str = "output";

const EXAMPLES: &str = "examples with SIZE = 11500:
    Full Picture:         mandelbrot -2.5 1.5 -2.0 2.0 11500 0
    Seahorse Valley:      mandelbrot -0.8 -0.7 0.05 0.15 11500 3
    Elephant Valley:      mandelbrot 0.175 0.375 -0.1 0.1 11500 5 --threads 12
    Triple Spiral Valley: mandelbrot -0.188 -0.012 0.554 0.754 11500 --strategy rayon";

fn bound<'a, 'b>(name: &'a str, help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .required(true)
        .validator(|s| validate_float(&s, "Could not parse region bound"))
        .help(help)
}

fn app<'a, 'b>(default_threads: &'a str) -> App<'a, 'b> {
    App::new("mandelbrot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape-time Mandelbrot renderer")
        .setting(AppSettings::AllowNegativeNumbers)
        .after_help(EXAMPLES)
        .arg(bound(X_MIN, "Lowest real bound of the region"))
        .arg(bound(X_MAX, "Highest real bound of the region"))
        .arg(bound(Y_MIN, "Lowest imaginary bound of the region"))
        .arg(bound(Y_MAX, "Highest imaginary bound of the region"))
        .arg(
            Arg::with_name(SIZE)
                .required(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse image size",
                        "Image size must be at least 1",
                    )
                })
                .help("Width and height of the square output image, in pixels"),
        )
        .arg(
            Arg::with_name(SCHEME)
                .required(false)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        ColorScheme::COUNT - 1,
                        "Could not parse color scheme",
                        "Color scheme must be between 0 and 5",
                    )
                })
                .help("Color scheme, 0 to 5"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .alias("nt")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse thread count",
                        "Thread count must be at least 1",
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(STRATEGY)
                .long(STRATEGY)
                .short("s")
                .takes_value(true)
                .possible_values(&["sequential", "seq", "threaded", "pth", "rayon", "omp"])
                .default_value("threaded")
                .help("How rows are spread across threads"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.ppm or .png); without one, nothing is written"),
        )
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, Error> {
    // Every value below has already passed its validator.
    let float = |name: &str| f64::from_str(matches.value_of(name).unwrap_or_default());
    let viewport = Viewport::new(float(X_MIN)?, float(X_MAX)?, float(Y_MIN)?, float(Y_MAX)?)?;
    let resolution = usize::from_str(matches.value_of(SIZE).unwrap_or_default())?;
    let scheme = ColorScheme::from_str(matches.value_of(SCHEME).unwrap_or("0"))?;
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or("1"))?;
    let strategy = Strategy::from_str(matches.value_of(STRATEGY).unwrap_or("threaded"))
        .map_err(failure::err_msg)?;
    Ok(RenderConfig::new(
        viewport, resolution, scheme, threads, strategy,
    )?)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config(matches)?;
    debug!("{:?}", config);
    let buffer = Renderer::run(&config)?;
    if let Some(output) = matches.value_of(OUTPUT) {
        ppm::save(&buffer, output)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let default_threads = num_cpus::get().to_string();
    let matches = match app(&default_threads).get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            // Too few parameters is not a failure: show how to call us.
            ErrorKind::MissingRequiredArgument => {
                println!("{}\n\n{}", e.message, EXAMPLES);
                std::process::exit(0);
            }
            _ => e.exit(),
        },
    };

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
