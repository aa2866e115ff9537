//! Stderr backend for the `log` facade.
//!
//! Core library messages (archive being inspected, match outcome) and CLI
//! diagnostics such as skipped archives go through `log`; this backend
//! prints them to stderr so stdout stays clean for `--json` output.

use console::Term;
use console::style;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;

struct StderrLogger {
    term: Term,
    use_colors: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let label = level_label(record.level());
        let line = if self.use_colors {
            let styled = match record.level() {
                Level::Error => style(label).red().bold(),
                Level::Warn => style(label).yellow().bold(),
                Level::Info => style(label).cyan(),
                Level::Debug | Level::Trace => style(label).dim(),
            };
            format!("{styled} {}", record.args())
        } else {
            format!("{label} {}", record.args())
        };

        let _ = self.term.write_line(&line);
    }

    fn flush(&self) {
        let _ = self.term.flush();
    }
}

const fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error:",
        Level::Warn => "warning:",
        Level::Info => "info:",
        Level::Debug => "debug:",
        Level::Trace => "trace:",
    }
}

/// Maps the global verbosity flags to a log level.
const fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. Later calls are no-ops.
pub fn init(verbose: bool, quiet: bool) {
    let logger = StderrLogger {
        term: Term::stderr(),
        use_colors: console::colors_enabled_stderr(),
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level_filter(verbose, quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(false, false), LevelFilter::Warn);
        assert_eq!(level_filter(true, false), LevelFilter::Debug);
        assert_eq!(level_filter(false, true), LevelFilter::Error);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(Level::Warn), "warning:");
        assert_eq!(level_label(Level::Debug), "debug:");
    }
}
