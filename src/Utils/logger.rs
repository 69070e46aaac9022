use chrono::Local;
use simplelog::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Maps a textual log level onto a filter. `None` means logging is switched off.
/// Unknown levels fall back to `info`.
pub fn log_option(loglevel: Option<&str>) -> Option<LevelFilter> {
    let Some(level) = loglevel else {
        return Some(LevelFilter::Info);
    };
    match level.to_lowercase().as_str() {
        "off" | "none" => None,
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        other => {
            eprintln!("unknown loglevel {:?}, using info", other);
            Some(LevelFilter::Info)
        }
    }
}

/// Terminal logger. Returns false when logging is off or a logger was already installed.
pub fn init_logger(loglevel: Option<&str>) -> bool {
    let Some(level) = log_option(loglevel) else {
        return false;
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .is_ok()
}

/// Terminal logger plus a `log_<date>_<time>.txt` file in `dir`. Returns the path of the
/// log file, or `None` when logging is off.
pub fn init_logger_with_file(loglevel: Option<&str>, dir: &Path) -> io::Result<Option<PathBuf>> {
    let Some(level) = log_option(loglevel) else {
        return Ok(None);
    };
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("log_{}.txt", date_and_time));
    let file = File::create(&path)?;
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, Config::default(), file),
    ];
    // a logger installed earlier keeps running; the file just stays empty
    let _ = CombinedLogger::init(loggers);
    Ok(Some(path))
}
