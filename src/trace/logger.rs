use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::UiError;
use crate::menu::menu_model::MenuTransition;
use crate::trace::trace::TraceEvent;

struct TraceSink {
    path: String,
    file: File,
    written: usize,
}

/// JSONL sink for menu transitions and row mutations. A disabled logger
/// accepts events and drops them.
pub struct TraceLogger {
    sink: Option<Mutex<TraceSink>>,
}

impl TraceLogger {
    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UiError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| UiError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            sink: Some(Mutex::new(TraceSink {
                path: path.display().to_string(),
                file,
                written: 0,
            })),
        })
    }

    /// Like `open`, but an unopenable file only costs the trace.
    pub fn new(path: &str) -> Self {
        Self::open(path).unwrap_or_else(|e| {
            eprintln!("Warning: tracing disabled: {}", e);
            Self::disabled()
        })
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Path and number of events written so far, when enabled.
    pub fn summary(&self) -> Option<(String, usize)> {
        let sink = self.sink.as_ref()?.lock().ok()?;
        Some((sink.path.clone(), sink.written))
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Warning: trace event '{}' not serializable: {}", event.event, e);
                return;
            }
        };

        let Ok(mut sink) = sink.lock() else {
            eprintln!("Warning: trace sink poisoned, dropping '{}'", event.event);
            return;
        };
        match writeln!(sink.file, "{}", line) {
            Ok(()) => sink.written += 1,
            Err(e) => eprintln!("Warning: writing to {} failed: {}", sink.path, e),
        }
    }

    /// One `menu` event per transition, numbered from `next_seq`.
    pub fn log_transitions(&self, transitions: &[MenuTransition], clock: u64, mut next_seq: impl FnMut() -> u64) {
        for transition in transitions {
            self.log(&TraceEvent::menu(next_seq(), clock, transition));
        }
    }
}
