//! Writable destinations shared by the engines
//!
//! A [`Destination`] is cheap to clone; clones write to the same place. Each
//! `write_line` call is one atomic append of a newline-terminated line.

use crate::core::{LoggerError, Result};
use crossbeam_channel::{bounded, Sender};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, LineWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Clone)]
pub struct Destination {
    target: Target,
}

#[derive(Clone)]
enum Target {
    Stdout,
    Stderr,
    Writer(SharedWriter),
    Async(Arc<AsyncWorker>),
}

impl Destination {
    /// Standard output (the default for every engine)
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    /// Any writer; writes are serialized by an internal mutex
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            target: Target::Writer(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Append to a file, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::writer(LineWriter::new(file)))
    }

    /// Hand lines to a background thread through a bounded queue.
    ///
    /// Writers block while the queue is full. [`flush`](Self::flush) waits
    /// until every line queued before it has been written. The worker drains
    /// the queue and exits once the last clone is dropped.
    pub fn asynchronous(inner: Destination, capacity: usize) -> Result<Self> {
        let worker = AsyncWorker::spawn(inner, capacity)?;
        Ok(Self {
            target: Target::Async(Arc::new(worker)),
        })
    }

    pub fn name(&self) -> &'static str {
        match self.target {
            Target::Stdout => "stdout",
            Target::Stderr => "stderr",
            Target::Writer(_) => "writer",
            Target::Async(_) => "async",
        }
    }

    /// Write `line` followed by a newline as a single append
    pub fn write_line(&self, line: &str) -> Result<()> {
        match &self.target {
            Target::Stdout => write_terminated(&mut io::stdout().lock(), line),
            Target::Stderr => write_terminated(&mut io::stderr().lock(), line),
            Target::Writer(writer) => write_terminated(&mut *writer.lock(), line),
            Target::Async(worker) => worker.send_line(line),
        }
    }

    pub fn flush(&self) -> Result<()> {
        match &self.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
            Target::Writer(writer) => writer.lock().flush()?,
            Target::Async(worker) => worker.flush()?,
        }
        Ok(())
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("target", &self.name())
            .finish()
    }
}

impl From<SharedBuffer> for Destination {
    fn from(buffer: SharedBuffer) -> Self {
        Destination::writer(buffer)
    }
}

fn write_terminated(writer: &mut dyn Write, line: &str) -> Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    if !line.ends_with('\n') {
        buf.push('\n');
    }
    writer.write_all(buf.as_bytes())?;
    Ok(())
}

enum Command {
    Line(String),
    Flush(Sender<()>),
}

struct AsyncWorker {
    sender: Option<Sender<Command>>,
    handle: Option<JoinHandle<()>>,
}

impl AsyncWorker {
    fn spawn(inner: Destination, capacity: usize) -> Result<Self> {
        let (sender, receiver) = bounded::<Command>(capacity.max(1));

        let handle = thread::Builder::new()
            .name("log-destination".to_string())
            .spawn(move || {
                // Ends once every sender is dropped and the queue is drained
                for command in receiver.iter() {
                    match command {
                        Command::Line(line) => {
                            if let Err(e) = inner.write_line(&line) {
                                eprintln!(
                                    "[LOGGER ERROR] async destination write to {} failed: {}",
                                    inner.name(),
                                    e
                                );
                            }
                        }
                        Command::Flush(ack) => {
                            if let Err(e) = inner.flush() {
                                eprintln!("[LOGGER ERROR] async destination flush failed: {}", e);
                            }
                            let _ = ack.send(());
                        }
                    }
                }

                if let Err(e) = inner.flush() {
                    eprintln!("[LOGGER ERROR] async destination final flush failed: {}", e);
                }
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn sender(&self) -> Result<&Sender<Command>> {
        self.sender
            .as_ref()
            .ok_or_else(|| LoggerError::destination_closed("async"))
    }

    fn send_line(&self, line: &str) -> Result<()> {
        self.sender()?
            .send(Command::Line(line.to_string()))
            .map_err(|_| LoggerError::destination_closed("async"))
    }

    fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = bounded(1);
        self.sender()?
            .send(Command::Flush(ack_tx))
            .map_err(|_| LoggerError::destination_closed("async"))?;
        ack_rx
            .recv()
            .map_err(|_| LoggerError::destination_closed("async"))
    }
}

impl Drop for AsyncWorker {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain what is queued, then exit
        drop(self.sender.take());

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                eprintln!("[LOGGER ERROR] async destination worker panicked during shutdown");
            }
        }
    }
}

/// In-memory destination; clones share one buffer.
///
/// Handy for observing engine output in tests.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Buffer contents as (lossy) UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Take the contents and leave the buffer empty
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
