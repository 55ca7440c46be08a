//! Destinations for found words.
//!
//! Workers hand every [`FoundWord`] to a [`WordSink`] the moment they
//! find it. Sinks are shared by all workers, so they synchronize
//! internally and must not block for long: a slow sink stalls the worker
//! that found the word, not the search as a whole.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};
use lexgrid_grid::FoundWord;

/// Receives found words from search workers.
pub trait WordSink: Send + Sync {
    /// Record one found word.
    fn emit(&self, found: FoundWord);
}

// ── WriterSink ───────────────────────────────────────────────────

/// Writes each found word as one `WORD<TAB>route` line.
///
/// Lines are written as they arrive, interleaved across workers. Write
/// failures are counted and logged, never propagated into the search.
pub struct WriterSink<W> {
    out: Mutex<W>,
    write_errors: AtomicU64,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Number of lines that failed to write.
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Flush the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.out
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stdout> {
    /// A sink over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WordSink for WriterSink<W> {
    fn emit(&self, found: FoundWord) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{found}") {
            let prior = self.write_errors.fetch_add(1, Ordering::Relaxed);
            if prior == 0 {
                tracing::warn!(error = %e, "failed to write found word");
            }
        }
    }
}

// ── VecSink ──────────────────────────────────────────────────────

/// Collects found words in memory, in arrival order.
#[derive(Default)]
pub struct VecSink {
    found: Mutex<Vec<FoundWord>>,
}

impl VecSink {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected so far, leaving the sink empty.
    pub fn take(&self) -> Vec<FoundWord> {
        std::mem::take(&mut *self.found.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of words collected so far.
    pub fn len(&self) -> usize {
        self.found
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WordSink for VecSink {
    fn emit(&self, found: FoundWord) {
        self.found
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(found);
    }
}

// ── ChannelSink ──────────────────────────────────────────────────

/// Forwards found words over an unbounded crossbeam channel, so a
/// consumer thread can stream them while the search runs.
pub struct ChannelSink {
    tx: Sender<FoundWord>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn new() -> (Self, Receiver<FoundWord>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl WordSink for ChannelSink {
    fn emit(&self, found: FoundWord) {
        // A dropped receiver means nobody is listening; results are
        // discarded rather than failing the search.
        let _ = self.tx.send(found);
    }
}

// ── FnSink ───────────────────────────────────────────────────────

/// Adapts a closure into a [`WordSink`].
pub struct FnSink<F>(pub F);

impl<F> WordSink for FnSink<F>
where
    F: Fn(FoundWord) + Send + Sync,
{
    fn emit(&self, found: FoundWord) {
        (self.0)(found)
    }
}
