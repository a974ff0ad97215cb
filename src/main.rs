use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use wask::error::{Error, Result};
use wask::sink::Sink;
use wask::url::Target;

/// Fetch a url over HTTP/1.0 and write the response body to stdout.
#[derive(Parser)]
#[clap(name = "wask", version)]
struct Options {
    /// Write the body to this file instead of stdout
    #[clap(short = 'o', long = "output", value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,
    /// Host followed by an optional path, e.g. example.com/index.html
    url: String,
}

fn parse_options() -> Result<Options> {
    Options::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            log::debug!("bad arguments: {}", e);
            Error::Usage
        }
    })
}

fn run() -> Result<()> {
    let options = parse_options()?;
    let mut sink = Sink::open(options.output.as_deref())?;
    let target = Target::split(&options.url);
    wask::client::get(&target, &mut sink)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        match e {
            Error::Usage => eprintln!("{}", e),
            e => eprintln!("wask: {}", e),
        }
        process::exit(1);
    }
}
