use crate::config::Config;
use crate::source::ReplaySource;
use display::observer::ScreenObserver;
use display::sink::WriterSink;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

fn main() {
    let config = match Config::from_file() {
        Ok(value) => value,
        Err(err) => {
            let mut message = format!("Config initialization failed. Error: {err}.");
            if let Some(additional_info) = err.additional_info() {
                message.push_str(&format!(" Additional_info: {additional_info}"));
            }
            eprintln!("{}", message);
            std::process::exit(1);
        },
    };

    let log_level = config.log_level().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });
    logging::setup(log_level, config.log_format.clone()).unwrap_or_else(|err| {
        let mut message = format!("Logger initialization failed. Error: {err}.");
        if let Some(additional_info) = err.additional_info() {
            message.push_str(&format!(" Additional_info: {additional_info}"));
        }
        eprintln!("{}", message);
        std::process::exit(1);
    });

    let frames_path = match std::env::args().nth(1) {
        Some(value) => PathBuf::from(value),
        None => config.frames_path.clone(),
    };
    let file = File::open(&frames_path).unwrap_or_else(|err| {
        log::error!("Failed to open {}. Error: {err}", frames_path.display());
        std::process::exit(1);
    });
    log::info!("Replaying frames from {}", frames_path.display());

    let mut source = ReplaySource::new(BufReader::new(file));
    let sink = WriterSink::new(BufWriter::new(std::io::stdout()));
    ScreenObserver::new(sink, config.display_options()).subscribe(&mut source);

    match source.run() {
        Ok(frames) => log::info!("Replay finished. Frames delivered: {frames}"),
        Err(err) => {
            let mut message = format!("Replay failed. Error: {err}.");
            if let Some(additional_info) = err.additional_info() {
                message.push_str(&format!(" Additional_info: {additional_info}"));
            }
            log::error!("{}", message);
            std::process::exit(1);
        },
    }
}

mod config;
mod logging;
mod source;
