//! Stream sink: encoded records written line by line

use crate::core::{Format, Level, LoggerError, Options, Record, Result, Sink};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each record as one encoded line to a byte stream.
///
/// The writer sits behind a mutex that is held for exactly one record, so
/// concurrent loggers sharing the sink never interleave partial lines.
pub struct StreamSink {
    writer: Mutex<Box<dyn Write + Send>>,
    format: Format,
    name: String,
}

impl StreamSink {
    /// Sink over any writer
    pub fn new<W: Write + Send + 'static>(writer: W, format: Format) -> Self {
        Self::named(writer, format, "stream")
    }

    fn named<W: Write + Send + 'static>(writer: W, format: Format, name: &str) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            format,
            name: name.to_string(),
        }
    }

    pub fn stdout(format: Format) -> Self {
        Self::named(io::stdout(), format, "stdout")
    }

    pub fn stderr(format: Format) -> Self {
        Self::named(io::stderr(), format, "stderr")
    }

    /// Append to the file at `path`, creating it if needed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use leveled_logger::{Format, Logger};
    /// use leveled_logger::sinks::StreamSink;
    ///
    /// let sink = StreamSink::file("/var/log/app.jsonl", Format::Json).unwrap();
    /// let logger = Logger::builder().sink(sink).build();
    /// ```
    pub fn file(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;
        Ok(Self::named(BufWriter::new(file), format, "file"))
    }

    /// Stdout sink in the format the options ask for
    pub fn from_options(opts: &Options) -> Self {
        Self::stdout(opts.format)
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl Sink for StreamSink {
    fn log(&self, _level: Level, record: &Record) -> Result<()> {
        let mut line = self.format.encode(record)?;
        line.push('\n');

        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for StreamSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the destination
        let _ = self.writer.get_mut().flush();
    }
}
