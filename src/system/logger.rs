use std::fmt;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{AppError, AppResult, ConfigError};
use crate::output::log_file_name;

use super::clock::unix_secs;

/// Where the run log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

impl LogTarget {
    /// `-` selects stdout; no explicit path selects a per-run file in `odir`.
    #[must_use]
    pub fn resolve(log_file: Option<&str>, odir: &Path, prefix: &str, node_id: &str) -> Self {
        match log_file {
            Some("-") => LogTarget::Stdout,
            Some(path) => LogTarget::File(PathBuf::from(path)),
            None => LogTarget::File(odir.join(log_file_name(prefix, unix_secs(), node_id))),
        }
    }
}

/// Formats events as `<unix-seconds>\t<message>`; errors and warnings are
/// tagged `ERR:` / `WARN:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTabFormat;

impl<S, N> FormatEvent<S, N> for UnixTabFormat
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}\t", unix_secs())?;
        if let Some(tag) = level_tag(*event.metadata().level()) {
            if writer.has_ansi_escapes() {
                write!(writer, "\x1b[1;31m{}\x1b[0m ", tag)?;
            } else {
                write!(writer, "{} ", tag)?;
            }
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_tag(level: Level) -> Option<&'static str> {
    if level == Level::ERROR {
        Some("ERR:")
    } else if level == Level::WARN {
        Some("WARN:")
    } else {
        None
    }
}

/// Installs the global subscriber writing to `target`.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened or written; the log is
/// the run's audit trail, so the probe must not start without it.
pub fn init_logging(target: &LogTarget, verbose: bool, no_color: bool) -> AppResult<()> {
    let filter = std::env::var("FETCHPOLL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let (writer, ansi) = match target {
        LogTarget::Stdout => (BoxMakeWriter::new(std::io::stdout), !no_color),
        LogTarget::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .event_format(UnixTabFormat)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}

fn open_log_file(path: &Path) -> AppResult<std::fs::File> {
    let open_error = |err| {
        AppError::config(ConfigError::OpenLog {
            path: path.to_path_buf(),
            source: err,
        })
    };
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(open_error)?;
    writeln!(file, "{}\tLog opened", unix_secs()).map_err(open_error)?;
    Ok(file)
}
