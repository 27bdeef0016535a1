use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::application::{Config, ConfigError};
use crate::domain::Algorithm;

/// How the display surface is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    /// Resizable desktop window
    #[default]
    Window,
    /// Full-screen screen saver surface
    Fullscreen,
    /// Show run modes and controls, then exit
    About,
}

/// Command line names for [`Algorithm`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Cell by cell on the main thread
    Serial,
    /// Rows split across a thread pool
    Parallel,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Serial => Algorithm::Serial,
            AlgorithmArg::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life screen saver", long_about = None)]
pub struct Args {
    /// Display mode
    #[arg(value_enum, default_value_t = DisplayMode::Window)]
    pub mode: DisplayMode,

    /// JSON settings file, applied before the flags below
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pixels per cell side
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Milliseconds between generations (0 = every frame)
    #[arg(long)]
    pub step_ms: Option<u64>,

    /// Probability a cell starts alive, 0 to 1
    #[arg(long)]
    pub density: Option<f64>,

    /// Treat grid edges as walls instead of wrapping around
    #[arg(long)]
    pub no_wrap: bool,

    /// Age at which cell color stops changing, 1 to 255
    #[arg(long)]
    pub max_age: Option<u8>,

    /// Seed for the initial pattern
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stepping strategy
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

impl Args {
    /// Config for the chosen mode. The about screen needs none, so the
    /// settings file is not touched there.
    pub fn config_for_mode(&self) -> Result<Option<Config>, ConfigError> {
        match self.mode {
            DisplayMode::About => Ok(None),
            DisplayMode::Window | DisplayMode::Fullscreen => self.resolve_config().map(Some),
        }
    }

    /// Layer defaults, the optional settings file and the flags, in that order
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(step_ms) = self.step_ms {
            config.step_interval_ms = step_ms;
        }
        if let Some(density) = self.density {
            config.initial_density = density;
        }
        if self.no_wrap {
            config.wrap = false;
        }
        if let Some(max_age) = self.max_age {
            config.max_age = max_age;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.into();
        }

        Ok(config.sanitized())
    }
}
