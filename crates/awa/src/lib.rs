//! AWA interpreter front end.
//!
//! Ties source loading, configuration and execution together. The
//! [`Session`] is what the `awa` binary and the integration tests use.

mod config;
mod error;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use awa_core::{Program, parse_program, read_program};
use awa_vm::{Abyss, Bubble, Limits, Machine, RuntimeError};
use log::info;

pub use config::{CONFIG_FILE_NAME, RunConfig, RunSection};
pub use error::{ConfigError, Error, LoadError};

/// Output and final abyss of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Everything printed by the program.
    pub output: String,
    /// The abyss when execution stopped, bottom to top.
    pub abyss: Vec<Bubble>,
}

/// An interpreter session: run settings shared by every program it executes.
#[derive(Clone, Debug, Default)]
pub struct Session {
    limits: Limits,
}

impl Session {
    /// Create a session without limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with explicit limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Create a session from a run configuration.
    pub fn with_config(config: &RunConfig) -> Self {
        Self::with_limits(config.limits())
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Read and decode a program file.
    pub fn load_file(&self, path: &Path) -> Result<Program, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::Io {
            path: path.to_owned(),
            source: e,
        })?;
        let program = read_program(BufReader::new(file)).map_err(|e| LoadError::Io {
            path: path.to_owned(),
            source: e,
        })?;
        info!("loaded {} ({} instructions)", path.display(), program.len());
        Ok(program)
    }

    /// Read and decode a program from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Program, LoadError> {
        read_program(BufReader::new(reader)).map_err(LoadError::Input)
    }

    /// Run a decoded program, writing printed output to `out`.
    pub fn run<W: Write>(&self, program: Program, out: W) -> Result<Abyss, RuntimeError> {
        let mut machine = Machine::with_limits(program, out, self.limits);
        machine.run()?;
        let (_, abyss) = machine.finish();
        Ok(abyss)
    }

    /// Decode and run source text, capturing its output.
    pub fn eval(&self, source: &str) -> Result<Evaluation, RuntimeError> {
        self.eval_program(parse_program(source))
    }

    /// Run a decoded program, capturing its output.
    pub fn eval_program(&self, program: Program) -> Result<Evaluation, RuntimeError> {
        let mut out = Vec::new();
        let abyss = self.run(program, &mut out)?;
        Ok(Evaluation {
            output: String::from_utf8_lossy(&out).into_owned(),
            abyss: abyss.into_vec(),
        })
    }

    /// Run a program against stdout.
    pub fn run_stdout(&self, program: Program) -> Result<Abyss, RuntimeError> {
        let stdout = io::stdout();
        self.run(program, stdout.lock())
    }
}
