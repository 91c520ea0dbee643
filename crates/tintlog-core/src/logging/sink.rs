//! Output sinks: the console and the append-only log file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::{LogError, LogResult};

/// In-memory writer that can stand in for stdout
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

enum ConsoleTarget {
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Console destination for records
///
/// Always enabled. Each record is handed over in one `write_all` under the
/// destination's lock, so concurrent records never share a line.
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    /// Write to the process's standard output
    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
        }
    }

    /// Write to an arbitrary writer instead of stdout
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: ConsoleTarget::Writer(Mutex::new(Box::new(writer))),
        }
    }

    /// A console sink backed by a fresh capture buffer
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        (Self::writer(buffer.clone()), buffer)
    }

    /// Write one record followed by a newline. Errors are dropped.
    pub fn write_record(&self, record: &str) {
        let line = terminated(record);
        let _ = match &self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Writer(writer) => writer.lock().write_all(line.as_bytes()),
        };
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleSink").field("target", &target).finish()
    }
}

/// Append-only log file
///
/// The mutex is the only write lock for the file. `None` inside it means the
/// sink has been closed.
pub struct FileSink {
    path: PathBuf,
    colors: bool,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it if absent. Never truncates.
    ///
    /// `colors` records whether the owner writes colored or plain records.
    pub fn open(path: impl Into<PathBuf>, colors: bool) -> LogResult<Self> {
        let path = path.into();
        let file = open_append(&path).map_err(|source| LogError::FileOpen {
            path: path.clone(),
            source: Arc::new(source),
        })?;

        Ok(Self {
            path,
            colors,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether records should be written with their color framing
    pub fn colors(&self) -> bool {
        self.colors
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Append one record, verbatim, followed by a newline.
    ///
    /// A no-op once the sink is closed; write errors are dropped.
    pub fn write_record(&self, record: &str) {
        let line = terminated(record);

        let mut guard = self.file.lock();
        if let Some(file) = guard.as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    /// Flush and release the file handle. Safe to call repeatedly.
    pub fn close(&self) {
        let mut guard = self.file.lock();
        if let Some(mut file) = guard.take() {
            let _ = file.flush();
        }
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .field("colors", &self.colors)
            .field("open", &self.is_open())
            .finish()
    }
}

fn terminated(record: &str) -> String {
    let mut line = String::with_capacity(record.len() + 1);
    line.push_str(record);
    line.push('\n');
    line
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}
