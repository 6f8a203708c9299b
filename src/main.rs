#[macro_use]
extern crate log;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use canopy::app::App;
use canopy::configuration::command_line::{LogLevel, Opt};
use canopy::configuration::manifest::Manifest;

fn main() {
    let options = Opt::from_args();
    let signals = Signals::new(&[SIGINT]).unwrap();

    thread::spawn(move || {
        for sig in signals.forever() {
            info!("Received signal {:?}, stopping", sig);
            exit(0);
        }
    });

    init_logging(
        options.logging.unwrap_or(LogLevel::Warn).into(),
        &options.log_output_file,
    );

    match Manifest::from(options.file.clone()) {
        Ok(manifest) => {
            debug!("Loaded run log {:#?}", manifest);
            let app = App::new(manifest, options.report_options(), options.html.clone());
            if let Err(e) = app.run() {
                error!("Failed to write report output {}", e);
                exit(1);
            }
        }
        Err(e) => {
            error!("Failed to load run log {}", e);
            exit(1);
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) {
    let mut dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file).unwrap())
    }
    dispatcher.apply().unwrap();
    debug!("Logging level {} enabled", level);
}
