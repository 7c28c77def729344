use chrono::Local;
use log::SetLoggerError;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

pub fn parse_loglevel(loglevel: &Option<String>) -> LevelFilter {
    if let Some(level) = loglevel {
        match level.as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => panic!("loglevel must be debug, info, warn or error"),
        }
    } else {
        LevelFilter::Info
    }
}

/// Installs a terminal logger, and with `save_log` also a write logger with
/// a timestamped file name. Fails when a global logger is already set; the
/// caller decides whether that matters.
pub fn init_search_logger(
    loglevel: &Option<String>,
    save_log: bool,
) -> Result<(), SetLoggerError> {
    let log_option = parse_loglevel(loglevel);

    if save_log {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("search_log_{}.txt", date_and_time);
        CombinedLogger::init(vec![
            TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ),
            WriteLogger::new(log_option, Config::default(), File::create(name).unwrap()),
        ])
    } else {
        CombinedLogger::init(vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )])
    }
}
