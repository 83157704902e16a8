//! Error type of the CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use figura::FiguraError;

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error(transparent)]
    Figura(#[from] FiguraError),
}
