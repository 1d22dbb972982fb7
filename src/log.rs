// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Log module sets up the log4rs backend behind the `log` facade, reference
//! https://docs.rs/log4rs
//!
//! Records always go to stderr. An optional log file receives the same records.

use crate::error::{LongtimeError, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// init logs system, call once at startup
pub fn init_log(level: LevelFilter, file_path: Option<&Path>) -> Result<()> {
    let config = build_config(level, file_path)?;
    log4rs::init_config(config).map_err(|e| LongtimeError::Log(e.to_string()))?;
    Ok(())
}

fn build_config(level: LevelFilter, file_path: Option<&Path>) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(fp) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(fp)
            .map_err(|e| LongtimeError::Log(format!("{}: {}", fp.display(), e)))?;
        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    builder
        .build(root.build(level))
        .map_err(|e| LongtimeError::Log(e.to_string()))
}
