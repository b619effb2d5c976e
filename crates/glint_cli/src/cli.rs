use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which scene preset to render.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenePreset {
    /// The random-spheres showcase scene
    Random,
    /// Ground plus three feature spheres
    Simple,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A stochastic ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "450")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100")]
    pub samples_per_pixel: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value = "50")]
    pub max_depth: u32,

    /// Base seed for the random streams; omitted means a fresh seed per run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scene to render
    #[arg(long, value_enum, default_value = "random")]
    pub scene: ScenePreset,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,

    /// Output file path (8-bit PNG, gamma corrected)
    #[arg(short, long, default_value = "output.png")]
    pub output: String,
}
