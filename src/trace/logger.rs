use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::error::ScreenError;
use crate::trace::trace::TraceEvent;

struct Sink {
    out: Box<dyn Write + Send>,
    written: u64,
}

/// JSONL sink for render-pass and edit events. A failed write is logged and
/// dropped; the render carries on.
pub struct TraceLogger {
    sink: Mutex<Sink>,
}

impl TraceLogger {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self, ScreenError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ScreenError::Io {
                context: format!("opening trace file {}", path),
                source,
            })?;
        tracing::debug!(path, "trace file opened");
        Ok(Self::to_writer(file))
    }

    pub fn to_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Sink {
                out: Box::new(out),
                written: 0,
            }),
        }
    }

    /// Events successfully written so far.
    pub fn written(&self) -> u64 {
        self.sink.lock().map(|s| s.written).unwrap_or(0)
    }

    pub fn log(&self, event: &TraceEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(pass = event.pass, error = %e, "failed to serialize trace event");
                return;
            }
        };

        let Ok(mut sink) = self.sink.lock() else {
            tracing::warn!("trace sink lock poisoned");
            return;
        };

        match writeln!(sink.out, "{}", line).and_then(|_| sink.out.flush()) {
            Ok(()) => sink.written += 1,
            Err(e) => tracing::warn!(pass = event.pass, error = %e, "failed to write trace event"),
        }
    }
}
