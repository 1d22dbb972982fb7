// Longtime
// copyright zipxing@hotmail.com 2022～2025

use clap::Parser;
use log::{error, info};
use longtime::{
    config::{Args, Config},
    log::init_log,
    render::adapter::sdl::SdlAdapter,
    run,
};
use std::process;

fn main() {
    let config = Config::from(Args::parse());
    if let Err(e) = init_log(config.log_level, config.log_file.as_deref()) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
    info!("Longtime start...variant={}", config.variant.name());

    let mut adapter = SdlAdapter::new();
    let code = match run(&mut adapter, &config) {
        Ok(frames) => {
            info!("Longtime exit...{} frames", frames);
            0
        }
        Err(e) => {
            // resources are already released by run()
            error!("{}", e);
            eprintln!("{}", e);
            e.exit_code()
        }
    };
    drop(adapter);
    process::exit(code);
}
