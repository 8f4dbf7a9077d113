// Console transcript for socket events

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

/// Receives the three socket events the tester reports
pub trait Console {
    /// Inbound frame payload, written verbatim after the prefix
    fn received(&mut self, text: &str) -> io::Result<()>;

    /// Transport failure diagnostic
    fn error(&mut self, error: &dyn Display) -> io::Result<()>;

    /// Connection closed notice
    fn closed(&mut self) -> io::Result<()>;
}

/// Writes received frames and close notices to `out`, diagnostics to `err`
#[derive(Debug)]
pub struct WriterConsole<O, E> {
    out: O,
    err: E,
}

impl WriterConsole<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> WriterConsole<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Console for WriterConsole<O, E> {
    fn received(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "Received: {}", text)?;
        self.out.flush()
    }

    fn error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "WebSocket Error: {}", error)?;
        self.err.flush()
    }

    fn closed(&mut self) -> io::Result<()> {
        writeln!(self.out, "Connection closed")?;
        self.out.flush()
    }
}
