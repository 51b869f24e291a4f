use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::crate_version;
use log::LevelFilter;

use svgbuild::{configure_logging, LogConfig, Scene};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Size {
    w: f64,
    h: f64,
}

#[derive(Clone, Debug, PartialEq)]
enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    fn read(&self) -> Result<String> {
        match *self {
            Input::Stdin => {
                let mut s = String::new();
                io::stdin()
                    .read_to_string(&mut s)
                    .context("could not read the scene from stdin")?;
                Ok(s)
            }

            Input::Path(ref p) => {
                fs::read_to_string(p).with_context(|| format!("could not read {}", p.display()))
            }
        }
    }

    fn name(&self) -> String {
        match *self {
            Input::Stdin => "stdin".to_string(),
            Input::Path(ref p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Debug)]
enum Output {
    Stdout,
    Path(PathBuf),
}

#[derive(Debug)]
struct Converter {
    input: Input,
    output: Output,
    width: Option<f64>,
    height: Option<f64>,
    restrict: Option<Size>,
    log: LogConfig,
}

impl Converter {
    fn convert(self) -> Result<()> {
        configure_logging(&self.log).context("could not set up logging")?;

        let json = self.input.read()?;
        let mut scene = Scene::from_json(&json)
            .with_context(|| format!("could not load the scene from {}", self.input.name()))?;

        if let Some(w) = self.width {
            scene.width = w;
        }

        if let Some(h) = self.height {
            scene.height = h;
        }

        let mut canvas = scene.into_canvas()?;

        if let Some(Size { w, h }) = self.restrict {
            canvas.restrict_all(w, h)?;
        }

        log::info!(
            "writing {} components from {}",
            canvas.len(),
            self.input.name()
        );

        match self.output {
            Output::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(canvas.to_svg().as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("could not write to stdout")?;
            }

            Output::Path(ref p) => canvas.save(p)?,
        }

        Ok(())
    }
}

fn build_cli() -> clap::Command {
    clap::Command::new("svgbuild")
        .version(concat!("version ", crate_version!()))
        .about("Build an SVG document from a JSON scene")
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("version")
                .short('v')
                .long("version")
                .help("Display the version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("filename")
                .help("Output filename [defaults to stdout]")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("width")
                .long("width")
                .num_args(1)
                .value_name("number")
                .value_parser(parse_dimension)
                .help("Canvas width [defaults to the width of the scene]")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("height")
                .long("height")
                .num_args(1)
                .value_name("number")
                .value_parser(parse_dimension)
                .help("Canvas height [defaults to the height of the scene]")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("restrict")
                .long("restrict")
                .num_args(1)
                .value_name("WIDTHxHEIGHT")
                .value_parser(parse_size)
                .help("Scale down every component that does not fit in this size")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("log_level")
                .long("log-level")
                .num_args(1)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .ignore_case(true)
                .help("Log level [defaults to $SVGBUILD_LOG, or warn]")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("log_file")
                .long("log-file")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("filename")
                .help("Write log messages to this file instead of stderr")
                .action(clap::ArgAction::Set),
        )
        .arg(
            clap::Arg::new("INPUT")
                .value_parser(clap::value_parser!(PathBuf))
                .help("The scene document to read, or - for stdin")
                .required_unless_present("version"),
        )
}

fn parse_dimension(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("'{s}' is not a valid size: expected a non-negative number")),
    }
}

fn parse_size(s: &str) -> Result<Size, String> {
    let err = || format!("'{s}' is not a valid size: expected WIDTHxHEIGHT, like 100x50");

    let (w, h) = s.split_once(['x', 'X']).ok_or_else(err)?;
    let w = w.trim().parse::<f64>().map_err(|_| err())?;
    let h = h.trim().parse::<f64>().map_err(|_| err())?;

    if [w, h].iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(Size { w, h })
    } else {
        Err(format!("'{s}' is not a valid size: both sides must be positive"))
    }
}

fn print_version() {
    println!("svgbuild version {}", crate_version!());
}

fn parse_args() -> Result<Option<Converter>> {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    if matches.get_flag("version") {
        print_version();
        return Ok(None);
    }

    let input = match matches.get_one::<PathBuf>("INPUT") {
        Some(p) if p.as_os_str() == "-" => Input::Stdin,
        Some(p) => Input::Path(p.clone()),
        None => Input::Stdin,
    };

    let output = match matches.get_one::<PathBuf>("output") {
        None => Output::Stdout,
        Some(path) => Output::Path(path.clone()),
    };

    let level = matches
        .get_one::<String>("log_level")
        .map(|s| s.parse::<LevelFilter>())
        .transpose()
        .context("invalid log level")?;

    Ok(Some(Converter {
        input,
        output,
        width: matches.get_one("width").copied(),
        height: matches.get_one("height").copied(),
        restrict: matches.get_one("restrict").copied(),
        log: LogConfig {
            level,
            file: matches.get_one::<PathBuf>("log_file").cloned(),
        },
    }))
}

fn main() {
    let res = parse_args().and_then(|converter| match converter {
        Some(c) => c.convert(),
        None => Ok(()),
    });

    if let Err(e) = res {
        eprintln!("svgbuild: {e:#}");
        std::process::exit(1);
    }
}
