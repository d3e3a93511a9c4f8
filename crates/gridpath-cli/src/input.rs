//! Resolution of where the problem description is read from.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gridpath_lib::Problem;

/// Environment variable naming the default input file.
pub const INPUT_ENV_VAR: &str = "GRIDPATH_INPUT";

/// Where the problem description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Use `flag` when given, then `GRIDPATH_INPUT`, then stdin. A value of
    /// `-` in either place also selects stdin.
    pub fn resolve(flag: Option<&Path>) -> Self {
        let chosen = flag
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(INPUT_ENV_VAR).map(PathBuf::from));
        match chosen {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    /// Read and parse the problem.
    pub fn load(&self) -> Result<Problem> {
        match self {
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open input {}", path.display()))?;
                Problem::from_reader(file)
                    .with_context(|| format!("failed to read problem from {}", path.display()))
            }
            InputSource::Stdin => Problem::from_reader(io::stdin().lock())
                .context("failed to read problem from stdin"),
        }
    }
}
