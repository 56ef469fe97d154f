//! Writes statistics as `{PREFIX} {NAME}={VALUE}` lines, optionally followed by a closing line.
//!
//! Statistic logging is disabled until [`configure_statistic_logging`] is called; after that the
//! configuration is fixed for the remainder of the process.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

struct StatisticSink {
    prefix: &'static str,
    // Written after a block of statistics
    postfix: Option<&'static str>,
    // Applied to the statistic names, which are written in snake case by the engine
    casing: Option<Case>,
    writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticSink")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

impl StatisticSink {
    fn write_line(&mut self, line: impl Display) {
        let _ = writeln!(self.writer, "{line}");
    }
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Enables statistic logging.
///
/// Every statistic is written on its own line, starting with `prefix`. If `postfix` is provided,
/// it is written after every block of statistics. The names of the statistics are converted to
/// `casing` if it is provided. Statistics are written to `writer`, or to stdout if it is
/// [`None`].
///
/// Only the first call has an effect; the returned value indicates whether this call configured
/// the logging.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) -> bool {
    let mut configured = false;
    let _ = STATISTIC_SINK.get_or_init(|| {
        configured = true;
        Mutex::new(StatisticSink {
            prefix,
            postfix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
    configured
}

/// Logs the statistic `name` with value `value`, if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_sink(|sink| {
        let name = match sink.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let prefix = sink.prefix;
        sink.write_line(format_args!("{prefix} {name}={value}"));
    });
}

/// Closes a block of statistics with the configured postfix (if there is one).
pub fn log_statistic_postfix() {
    with_sink(|sink| {
        if let Some(postfix) = sink.postfix {
            sink.write_line(postfix);
        }
    });
}

/// Returns whether statistic logging has been configured.
pub fn should_log_statistics() -> bool {
    STATISTIC_SINK.get().is_some()
}

fn with_sink(action: impl FnOnce(&mut StatisticSink)) {
    if let Some(sink) = STATISTIC_SINK.get() {
        if let Ok(mut sink) = sink.lock() {
            action(&mut sink);
        }
    }
}
