// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Command line arguments and the runtime configuration built from them.
//!
//! Window title, size and the requested GL version are fixed; only the
//! variant, logging and the GL debug channel can be chosen.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Longtime";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// OpenGL major.minor requested before window creation, core profile
pub const GL_VERSION: (u8, u8) = (3, 3);

/// Which incremental version of the program to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Window, context and a clear loop
    Clear,
    /// Clear loop plus vertex buffer upload and a vertex shader
    Buffer,
    /// Full shader pipeline, vertex array object, debug output and draw call
    Triangle,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Clear => "clear",
            Variant::Buffer => "buffer",
            Variant::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "longtime", version, about = "SDL2 + OpenGL 3.3 core triangle")]
pub struct Args {
    /// Program variant to run
    #[arg(short, long, value_enum, default_value_t = Variant::Triangle)]
    pub variant: Variant,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Also write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not install the GL debug message callback
    #[arg(long)]
    pub no_gl_debug: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub variant: Variant,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_version: (u8, u8),
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub gl_debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::Triangle,
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            gl_version: GL_VERSION,
            log_level: LevelFilter::Info,
            log_file: None,
            gl_debug: true,
        }
    }
}

impl Config {
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// The debug channel only exists in the triangle variant
    pub fn debug_channel(&self) -> bool {
        self.gl_debug && self.variant == Variant::Triangle
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            variant: args.variant,
            log_level: args.log_level.into(),
            log_file: args.log_file,
            gl_debug: !args.no_gl_debug,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_window() {
        let cfg = Config::from(Args::parse_from(["longtime"]));
        assert_eq!(cfg.variant, Variant::Triangle);
        assert_eq!(cfg.title, "Longtime");
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.gl_version, (3, 3));
        assert_eq!(cfg.log_level, LevelFilter::Info);
        assert!(cfg.debug_channel());
    }

    #[test]
    fn test_parse_variant_and_logging() {
        let cfg = Config::from(Args::parse_from([
            "longtime",
            "--variant",
            "buffer",
            "--log-level",
            "trace",
            "--log-file",
            "log/longtime.log",
            "--no-gl-debug",
        ]));
        assert_eq!(cfg.variant, Variant::Buffer);
        assert_eq!(cfg.log_level, LevelFilter::Trace);
        assert_eq!(cfg.log_file, Some(PathBuf::from("log/longtime.log")));
        assert!(!cfg.gl_debug);
    }

    #[test]
    fn test_debug_channel_only_for_triangle() {
        assert!(!Config::with_variant(Variant::Clear).debug_channel());
        assert!(!Config::with_variant(Variant::Buffer).debug_channel());
        assert!(Config::with_variant(Variant::Triangle).debug_channel());
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Args::try_parse_from(["longtime", "-v", "quad"]).is_err());
    }
}
