//! Line-oriented transport to the game server.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};

use crate::sync::StopFlag;

/// A bidirectional line channel.
pub trait LineChannel {
    /// Next line without its terminator.
    ///
    /// With `block` false, returns `Ok(None)` when no line is available yet.
    /// Once the peer has closed the channel and all lines are consumed,
    /// returns an `UnexpectedEof` error.
    fn read_line(&mut self, block: bool) -> io::Result<Option<String>>;

    /// Send one line; the terminator is added.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

#[derive(Default)]
struct Inbox {
    lines: VecDeque<String>,
    closed: bool,
    error: Option<io::Error>,
}

struct Shared {
    inbox: Mutex<Inbox>,
    ready: Condvar,
}

/// Line channel fed by a background reader thread.
///
/// The reader pushes every received line into a queue. When the input ends
/// or fails, the channel is marked closed and the stop flag is raised so a
/// running search gives up.
pub struct ThreadedChannel<W: Write> {
    shared: Arc<Shared>,
    writer: W,
    reader: Option<JoinHandle<()>>,
}

/// The channel over the process's standard input and output.
pub type StdioChannel = ThreadedChannel<io::Stdout>;

impl StdioChannel {
    #[must_use]
    pub fn stdio(stop: StopFlag) -> Self {
        let stdin = io::stdin();
        ThreadedChannel::spawn(io::BufReader::new(stdin), io::stdout(), stop)
    }
}

impl<W: Write> ThreadedChannel<W> {
    /// Start reading lines from `input` on a background thread.
    pub fn spawn<R>(input: R, writer: W, stop: StopFlag) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let shared = Arc::new(Shared {
            inbox: Mutex::new(Inbox::default()),
            ready: Condvar::new(),
        });
        let feed = Arc::clone(&shared);
        let reader = thread::spawn(move || read_loop(input, &feed, &stop));
        ThreadedChannel {
            shared,
            writer,
            reader: Some(reader),
        }
    }

    /// Stop using the channel and hand back the writer.
    ///
    /// Waits for the reader thread, so the input must already be at its end.
    pub fn into_writer(mut self) -> W {
        if let Some(reader) = self.reader.take() {
            if reader.join().is_err() {
                log::warn!("channel reader thread panicked");
            }
        }
        self.writer
    }
}

fn read_loop<R: BufRead>(mut input: R, shared: &Shared, stop: &StopFlag) {
    loop {
        let mut line = String::new();
        let result = input.read_line(&mut line);
        let mut inbox = shared.inbox.lock();
        match result {
            Ok(0) => {
                log::debug!("server closed the connection");
                inbox.closed = true;
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']);
                log::trace!("<- {trimmed}");
                inbox.lines.push_back(trimmed.to_string());
                shared.ready.notify_all();
                continue;
            }
            Err(err) => {
                log::warn!("reading from server failed: {err}");
                inbox.closed = true;
                inbox.error = Some(err);
            }
        }
        stop.stop();
        shared.ready.notify_all();
        return;
    }
}

impl<W: Write> LineChannel for ThreadedChannel<W> {
    fn read_line(&mut self, block: bool) -> io::Result<Option<String>> {
        let mut inbox = self.shared.inbox.lock();
        loop {
            if let Some(line) = inbox.lines.pop_front() {
                return Ok(Some(line));
            }
            if inbox.closed {
                return Err(inbox.error.take().unwrap_or_else(|| {
                    io::Error::new(io::ErrorKind::UnexpectedEof, "channel closed")
                }));
            }
            if !block {
                return Ok(None);
            }
            self.shared.ready.wait(&mut inbox);
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        log::trace!("-> {line}");
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}
