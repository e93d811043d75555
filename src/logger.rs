use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

fn logging_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Route log records to stderr. Stdout is reserved for codec output.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter >= LevelFilter::Debug {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        log::error!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
