use log::{Log, Metadata, Record};

/// A logger that writes everything to stderr. Nothing fancy is needed
/// here; the binary is short-lived and single-threaded.
#[derive(Debug)]
struct Logger(());

const LOGGER: &Logger = &Logger(());

/// Install the stderr logger with a level taken from the CLI flags.
pub fn init(args: &clap::ArgMatches<'_>) -> Result<(), log::SetLoggerError> {
    let level = if args.is_present("trace") {
        log::LevelFilter::Trace
    } else if args.is_present("debug") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    log::set_logger(LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for Logger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        // Filtering is done by the max level set in `init`.
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("{}|{}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}
