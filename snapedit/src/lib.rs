//! Console Image Editor
//!
//! Loads an image from disk or grabs a frame from the default camera, then offers a
//! small processing menu: isolate a colour channel, box blur, grayscale, draw a
//! rectangle, save, and reset to the original.
//!
//! # Features
//! - `window`: preview results in a native window (minifb)
//! - `native-camera`: capture from the default camera (nokhwa)
//! - `desktop`: both of the above
//!
//! # Architecture
//! - `controller`: the menu state machine, owns the session explicitly
//! - `console`: stdin/stdout plus the journal file
//! - `viewer`: bounded preview windows

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod menu;
pub mod save;
pub mod session;
pub mod viewer;

use config::Config;
use console::{Console, Journal};
use controller::Controller;
use std::io;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Uses local time format for timestamps.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Main entry point for the console application.
///
/// # Tasks
/// - Initializes logger
/// - Resolves paths next to the executable
/// - Truncates the journal
/// - Runs the interactive session on stdin/stdout
pub fn console_main() -> anyhow::Result<()> {
    init_logger();
    log::debug!("start...");

    let config = Config::new()?;
    let journal = match Journal::create(&config.journal_path) {
        Ok(journal) => journal,
        Err(e) => {
            log::warn!(
                "can not create journal {}: {e}",
                config.journal_path.display()
            );
            Journal::disabled()
        }
    };

    let console = Console::new(io::stdin().lock(), io::stdout(), journal);
    let outcome = Controller::new(console, config).run()?;

    log::debug!("exit... ({outcome:?})");
    Ok(())
}
