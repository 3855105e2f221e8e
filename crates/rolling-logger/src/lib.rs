//! Rolling Logger
//!
//! File logger keeping a bounded set of rotated files:
//! `<app>.log` is the live file, `<app>.1.log` .. `<app>.<n-1>.log` the
//! older ones. Output is also teed to stderr. `log` records are forwarded
//! into the same sink, so `log::info!` and `tracing::info!` both land here.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};

/// Rotate once the live file would exceed this size
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Live file plus rotated files kept on disk
pub const DEFAULT_MAX_FILES: usize = 5;

static APP_NAME: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger io error: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized or failed to install: {0}")]
    Init(String),
    #[error("logger not initialized")]
    NotInitialized,
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub max_bytes: u64,
    pub max_files: usize,
    pub level: tracing::Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            level: tracing::Level::INFO,
        }
    }
}

struct RollingState {
    dir: PathBuf,
    base: String,
    max_bytes: u64,
    max_files: usize,
    file: Option<File>,
    written: u64,
}

impl RollingState {
    fn path(&self, n: usize) -> PathBuf {
        if n == 0 {
            self.dir.join(format!("{}.log", self.base))
        } else {
            self.dir.join(format!("{}.{}.log", self.base, n))
        }
    }

    fn open(&mut self) -> io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(self.path(0))?;
        self.written = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        let oldest = self.path(self.max_files.saturating_sub(1));
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (0..self.max_files.saturating_sub(1)).rev() {
            let from = self.path(n);
            if from.exists() {
                fs::rename(&from, self.path(n + 1))?;
            }
        }
        self.open()
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.file.is_none() {
            self.open()?;
        }
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file not open"))?;
        file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }
}

/// Size-rotating file writer, cheap to clone
#[derive(Clone)]
pub struct RollingFileWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingFileWriter {
    pub fn new(dir: &Path, base: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let mut state = RollingState {
            dir: dir.to_path_buf(),
            base: base.to_string(),
            max_bytes,
            max_files: max_files.max(1),
            file: None,
            written: 0,
        };
        state.open()?;
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
        })
    }

    /// Path of the live log file
    pub fn current_path(&self) -> Option<PathBuf> {
        self.state.lock().ok().map(|s| s.path(0))
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        state.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global logger writing to `log_dir/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(log_dir: PathBuf, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    let writer = RollingFileWriter::new(&log_dir, app_name, config.max_bytes, config.max_files)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_timer(LocalTimer)
        .with_max_level(config.level)
        .with_writer(writer.and(io::stderr))
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    let _ = APP_NAME.set(app_name.to_string());
    log::info!("logger initialized at {}", log_dir.display());
    Ok(())
}

fn app_name() -> Result<&'static str, LoggerError> {
    APP_NAME.get().map(String::as_str).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    let app = app_name()?;
    tracing::info!(app = %app, "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    let app = app_name()?;
    tracing::error!(app = %app, "{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_writer_rotates_and_bounds_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::new(dir.path(), "app", 10, 3).unwrap();

        for line in ["first-line\n", "second-line\n", "third-line\n", "fourth-line\n"] {
            writer.write_all(line.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(read(&dir.path().join("app.log")), "fourth-line\n");
        assert_eq!(read(&dir.path().join("app.1.log")), "third-line\n");
        assert_eq!(read(&dir.path().join("app.2.log")), "second-line\n");
        assert!(!dir.path().join("app.3.log").exists());
    }

    #[test]
    fn test_writer_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "old\n").unwrap();

        let mut writer = RollingFileWriter::new(dir.path(), "app", 1024, 2).unwrap();
        writer.write_all(b"new\n").unwrap();

        assert_eq!(read(&dir.path().join("app.log")), "old\nnew\n");
        assert_eq!(writer.current_path(), Some(dir.path().join("app.log")));
    }

    #[test]
    fn test_helpers_require_init() {
        assert!(matches!(info("hello"), Err(LoggerError::NotInitialized)));
    }
}
