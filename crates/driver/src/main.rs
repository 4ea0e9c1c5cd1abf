mod error;
mod literal;
mod script;

pub use self::error::Error;
use collections::StandardCollection;
use log::LevelFilter;
use std::{
    fs,
    io,
    path::PathBuf,
    process,
};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    #[structopt(name = "script file", parse(from_os_str))]
    script: PathBuf,
    /// Logs more details, repeat for even more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

/// Initializes the logger, `RUST_LOG` takes precedence over `-v`.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(opt: &Opt) -> Result<(), Error> {
    log::info!("running script {}", opt.script.display());
    let script = fs::read_to_string(&opt.script)?;
    let mut collection = StandardCollection::new();
    let stdout = io::stdout();
    script::run(&script, &mut collection, &mut stdout.lock())?;
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    init_logger(opt.verbose);
    if let Err(error) = run(&opt) {
        log::error!("{}", error);
        if let Some(line) = error.line() {
            log::debug!("script stopped before executing line {}", line);
        }
        process::exit(1)
    }
}
