//! AWA command-line interpreter.
//!
//! Usage:
//!   awa <file.awa>     Run a file
//!   awa -e <code>      Run a string
//!   awa               Read from stdin

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use awa::{Error, RunConfig, Session};
use awa_core::{Program, disassemble, parse_program};
use env_logger::Env;
use log::debug;

const USAGE: &str = "\
Usage: awa [OPTIONS] [FILE]

Arguments:
  [FILE]  AWA source file to run

Options:
  -e <CODE>          Run CODE string
  --max-steps <N>    Abort after N executed instructions
  --config <PATH>    Read run settings from PATH (default: awa.toml next to FILE)
  --disasm           Print the decoded program instead of running it
  -h, --help         Print this help message

If no FILE is given, reads from stdin.";

enum Source {
    File(PathBuf),
    Inline(String),
    Stdin,
}

struct Options {
    source: Source,
    config: Option<PathBuf>,
    max_steps: Option<u64>,
    disasm: bool,
}

enum Action {
    Run(Options),
    Help,
}

fn parse_args() -> Result<Action, String> {
    let mut args = env::args().skip(1);
    let mut source = None;
    let mut config = None;
    let mut max_steps = None;
    let mut disasm = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "-e" => {
                let code = args.next().ok_or("-e requires a CODE argument")?;
                source = Some(Source::Inline(code));
            }
            "--max-steps" => {
                let n = args.next().ok_or("--max-steps requires a value")?;
                let n = n
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --max-steps '{n}': {e}"))?;
                max_steps = Some(n);
            }
            "--config" => {
                let path = args.next().ok_or("--config requires a PATH argument")?;
                config = Some(PathBuf::from(path));
            }
            "--disasm" => disasm = true,
            "-" => source = Some(Source::Stdin),
            flag if flag.starts_with('-') => return Err(USAGE.into()),
            file => {
                if source.is_some() {
                    return Err(USAGE.into());
                }
                source = Some(Source::File(PathBuf::from(file)));
            }
        }
    }

    Ok(Action::Run(Options {
        source: source.unwrap_or(Source::Stdin),
        config,
        max_steps,
        disasm,
    }))
}

fn config_path(options: &Options) -> Option<PathBuf> {
    match (&options.config, &options.source) {
        (Some(path), _) => Some(path.clone()),
        (None, Source::File(file)) => RunConfig::locate(file),
        (None, _) => None,
    }
}

fn load_program(session: &Session, source: &Source) -> Result<Program, Error> {
    let program = match source {
        Source::File(path) => session.load_file(path)?,
        Source::Inline(code) => parse_program(code),
        Source::Stdin => session.load_reader(io::stdin().lock())?,
    };
    Ok(program)
}

fn print_listing(program: &Program) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    for line in disassemble(program, false) {
        writeln!(stdout, "{line}").map_err(Error::Output)?;
    }
    Ok(())
}

fn run(options: Options) -> Result<(), Error> {
    let path = config_path(&options);
    let mut config = match &path {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    if options.max_steps.is_some() {
        config.run.max_steps = options.max_steps;
    }

    let default_filter = if config.run.trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    if let Some(path) = &path {
        debug!("using config {}", path.display());
    }

    let session = Session::with_config(&config);
    let program = load_program(&session, &options.source)?;

    if options.disasm {
        return print_listing(&program);
    }

    session.run_stdout(program)?;
    Ok(())
}

fn main() -> ExitCode {
    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Run(options)) => match run(options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
