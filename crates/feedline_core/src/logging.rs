//! Diagnostic logging bootstrap.
//!
//! # Responsibility
//! - Open one rolling-file log session per process.
//! - Report panics as single-line log events.
//!
//! # Invariants
//! - Re-opening with identical settings is a no-op.
//! - Re-opening with a different level or directory is rejected.
//! - Nothing here panics; failures come back as readable strings.
//! - Log lines carry ids and counts only, never comment text.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecBuilder, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "feedline";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_MESSAGE_LIMIT: usize = 160;

static SESSION: OnceCell<LogSession> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Severity threshold accepted by `init_logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Threshold {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Threshold {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unsupported log level `{other}`; expected trace|debug|info|warn|error"
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::Trace,
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warn => LevelFilter::Warn,
            Self::Error => LevelFilter::Error,
        }
    }
}

/// Requested session settings, validated but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionRequest {
    threshold: Threshold,
    dir: PathBuf,
}

impl SessionRequest {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            threshold: Threshold::parse(level)?,
            dir: absolute_dir(log_dir)?,
        })
    }

    fn conflict_with(&self, open: &SessionRequest) -> Option<String> {
        if self.dir != open.dir {
            return Some(format!(
                "log session already open at `{}`; refusing to switch to `{}`",
                open.dir.display(),
                self.dir.display()
            ));
        }
        if self.threshold != open.threshold {
            return Some(format!(
                "log session already open at level `{}`; refusing to switch to `{}`",
                open.threshold.as_str(),
                self.threshold.as_str()
            ));
        }
        None
    }
}

struct LogSession {
    settings: SessionRequest,
    _handle: LoggerHandle,
}

impl LogSession {
    fn open(settings: SessionRequest) -> Result<Self, String> {
        std::fs::create_dir_all(&settings.dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                settings.dir.display()
            )
        })?;

        let spec = LogSpecBuilder::new()
            .default(settings.threshold.filter())
            .build();
        let handle = Logger::with(spec)
            .log_to_file(
                FileSpec::default()
                    .directory(settings.dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(ROTATE_AT_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        install_panic_hook();
        info!(
            "event=log_session_open module=logging status=ok crate_version={} os={} build={} level={} dir={} rotate_bytes={} keep_files={}",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            build_kind(),
            settings.threshold.as_str(),
            settings.dir.display(),
            ROTATE_AT_BYTES,
            KEEP_LOG_FILES
        );

        Ok(Self {
            settings,
            _handle: handle,
        })
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported `level`, or an empty/relative `log_dir`.
/// - Directory creation or logger startup failure.
/// - A session is already open with different settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let request = SessionRequest::parse(level, log_dir)?;
    let session = SESSION.get_or_try_init(|| LogSession::open(request.clone()))?;
    match request.conflict_with(&session.settings) {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

/// Active `(level, log_dir)`, or `None` before `init_logging` succeeds.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    SESSION.get().map(|session| {
        (
            session.settings.threshold.as_str(),
            session.settings.dir.clone(),
        )
    })
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    match build_kind() {
        "debug" => Threshold::Debug.as_str(),
        _ => Threshold::Info.as_str(),
    }
}

fn build_kind() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

/// Panic summary logged by the hook: source location plus a clipped message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PanicReport {
    at: String,
    message: String,
}

impl PanicReport {
    fn new(at: Option<String>, payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        Self {
            at: at.unwrap_or_else(|| "unknown".to_string()),
            message: clip_to_line(message, PANIC_MESSAGE_LIMIT),
        }
    }
}

impl Display for PanicReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "at={} message={}", self.at, self.message)
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let at = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()));
        let report = PanicReport::new(at, panic_info.payload());
        error!("event=core_panic module=logging status=error {report}");
        previous(panic_info);
    }));
}

/// Joins lines with spaces and keeps at most `limit` chars, marking cuts with `...`.
fn clip_to_line(value: &str, limit: usize) -> String {
    let mut chars = value
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    let mut clipped: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        clipped.push_str("...");
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::{
        clip_to_line, default_log_level, init_logging, logging_status, PanicReport,
        SessionRequest, Threshold,
    };
    use log::LevelFilter;

    #[test]
    fn threshold_accepts_aliases_and_maps_to_filters() {
        assert_eq!(Threshold::parse(" WARNING ").unwrap(), Threshold::Warn);
        assert_eq!(Threshold::parse("Trace").unwrap().filter(), LevelFilter::Trace);
        assert!(Threshold::parse("verbose").is_err());
        assert!(["debug", "info"].contains(&default_log_level()));
    }

    #[test]
    fn session_request_requires_absolute_dir() {
        assert!(SessionRequest::parse("info", "  ").unwrap_err().contains("empty"));
        assert!(SessionRequest::parse("info", "logs/feed")
            .unwrap_err()
            .contains("absolute"));
    }

    #[test]
    fn clip_to_line_flattens_and_caps() {
        assert_eq!(clip_to_line("a\nb", 10), "a b");
        assert_eq!(clip_to_line("abcd", 4), "abcd");
        assert_eq!(clip_to_line("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn panic_report_reads_string_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("bad\nstate"));
        let report = PanicReport::new(Some("src/lib.rs:7".to_string()), owned.as_ref());
        assert_eq!(report.to_string(), "at=src/lib.rs:7 message=bad state");

        let opaque: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        let report = PanicReport::new(None, opaque.as_ref());
        assert_eq!(report.to_string(), "at=unknown message=non-string panic payload");
    }

    #[test]
    fn init_logging_accepts_repeat_and_rejects_changes() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");
        let first_dir = first.path().to_str().expect("utf-8 temp path").to_string();
        let second_dir = second.path().to_str().expect("utf-8 temp path").to_string();

        init_logging("info", &first_dir).expect("first init should succeed");
        init_logging("INFO", &first_dir).expect("same settings should be accepted");

        let level_err = init_logging("debug", &first_dir).expect_err("level change must fail");
        assert!(level_err.contains("refusing to switch"));
        let dir_err = init_logging("info", &second_dir).expect_err("dir change must fail");
        assert!(dir_err.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
