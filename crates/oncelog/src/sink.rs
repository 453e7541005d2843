//! Output destinations.
//!
//! A [`Sink`] fans each formatted line out to every destination in the
//! order they were configured. Writes are serialized by one mutex, so a
//! line is never interleaved with another on the same destination.
//! [`SinkWriter`] hands the sink to the `fmt` layer.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

use crate::callsite::TARGET;
use crate::error::LoggerError;

enum Destination {
    Stdout,
    Stderr,
    File(BufWriter<File>),
    Writer(Box<dyn Write + Send>),
}

impl Destination {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().write_all(buf),
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::File(file) => file.write_all(buf),
            Self::Writer(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().flush(),
            Self::Stderr => io::stderr().lock().flush(),
            Self::File(file) => file.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }
}

/// The set of destinations a logger writes to.
pub struct Sink {
    destinations: Mutex<Vec<Destination>>,
}

impl Sink {
    /// Open every output identifier, in order.
    ///
    /// Accepts `"stdout"`, `"stderr"`, a filesystem path, or a `file://`
    /// URL. Files are opened for append and created when missing; parent
    /// directories are not created. An empty list yields a sink that
    /// discards everything.
    pub fn open<S: AsRef<str>>(outputs: &[S]) -> Result<Self, LoggerError> {
        let destinations = outputs
            .iter()
            .map(|output| open_destination(output.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            destinations: Mutex::new(destinations),
        })
    }

    /// A sink with a single caller-supplied writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            destinations: Mutex::new(vec![Destination::Writer(Box::new(writer))]),
        }
    }

    /// Add another caller-supplied writer after the existing destinations.
    #[must_use]
    pub fn and_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.destinations
            .lock()
            .push(Destination::Writer(Box::new(writer)));
        self
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.destinations.lock().len()
    }

    /// Whether records are discarded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write one formatted line to every destination.
    ///
    /// A failing destination does not stop the others; the first error is
    /// returned after all have been attempted.
    pub(crate) fn write(&self, buf: &[u8]) -> io::Result<()> {
        let mut first_err = None;
        for destination in self.destinations.lock().iter_mut() {
            if let Err(e) = destination.write_all(buf) {
                let _ = first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Flush every destination.
    pub fn sync(&self) -> io::Result<()> {
        let mut first_err = None;
        for destination in self.destinations.lock().iter_mut() {
            if let Err(e) = destination.flush() {
                let _ = first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// [`MakeWriter`] over a shared [`Sink`].
///
/// Facade events are flushed by the [`Logger`](crate::Logger) once the call
/// completes. Anything else routed through the dispatch is flushed as soon as
/// it is written.
#[derive(Clone)]
pub(crate) struct SinkWriter(Arc<Sink>);

impl SinkWriter {
    pub(crate) fn new(sink: Arc<Sink>) -> Self {
        Self(sink)
    }
}

impl<'a> MakeWriter<'a> for SinkWriter {
    type Writer = LineWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            sink: &self.0,
            flush_on_drop: true,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter {
            sink: &self.0,
            flush_on_drop: meta.target() != TARGET,
        }
    }
}

/// Writer for one formatted event.
pub(crate) struct LineWriter<'a> {
    sink: &'a Sink,
    flush_on_drop: bool,
}

impl Write for LineWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.sync()
    }
}

impl Drop for LineWriter<'_> {
    fn drop(&mut self) {
        if self.flush_on_drop {
            let _ = self.sink.sync();
        }
    }
}

fn open_destination(output: &str) -> Result<Destination, LoggerError> {
    match output {
        "stdout" => Ok(Destination::Stdout),
        "stderr" => Ok(Destination::Stderr),
        _ => {
            let path = file_path(output)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggerError::OpenOutput {
                    path: path.to_string(),
                    source,
                })?;
            Ok(Destination::File(BufWriter::new(file)))
        }
    }
}

fn file_path(output: &str) -> Result<&str, LoggerError> {
    let path = match output.strip_prefix("file://") {
        Some(rest) => rest,
        None if output.contains("://") => {
            return Err(LoggerError::InvalidOutput {
                output: output.to_string(),
                reason: "unsupported scheme",
            });
        }
        None => output,
    };
    if path.is_empty() {
        return Err(LoggerError::InvalidOutput {
            output: output.to_string(),
            reason: "empty path",
        });
    }
    Ok(path)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
