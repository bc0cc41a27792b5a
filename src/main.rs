use std::{path::PathBuf, process, time::Instant};

use clap::{error::ErrorKind as ClapErrorKind, Parser as ClapParser};
use sjavac::{display_error, lexer::source::SourceFile, validate};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sjavac")]
#[command(about = "Static validator for sjava source files", long_about = None)]
struct Cli {
    /// Source file to validate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Log pass and scope activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

const ARGUMENT_ERROR: i32 = 2;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", ARGUMENT_ERROR);
                eprint!("{}", err);
                process::exit(ARGUMENT_ERROR);
            }
        },
    };

    init_logging(cli.verbose);
    process::exit(run(&cli));
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let source = match SourceFile::open(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            println!("{}", error.exit_code());
            eprintln!("Error: {}", error);
            return error.exit_code();
        }
    };
    debug!(lines = source.lines().len(), "read {}", source.file());

    let code = match validate(&source) {
        Ok(()) => 0,
        Err(error) => {
            display_error(&error, &source);
            error.exit_code()
        }
    };

    info!("validated in {:?}", start.elapsed());
    println!("{}", code);
    code
}
