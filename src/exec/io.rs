//! Program input and output.
//!
//! The engine only talks to [`InputSource`] and [`OutputSink`]. The text
//! implementations here work over any reader or writer, which covers both
//! the terminal and in-memory buffers in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Where `inN` and `inC` read from.
pub trait InputSource {
    /// Next integer, or `None` if the input is not a valid integer.
    fn read_integer(&mut self) -> Option<i64>;

    /// Next character, or `None` at end of input.
    fn read_character(&mut self) -> Option<char>;
}

/// Where `outN` and `outC` write to.
pub trait OutputSink {
    fn write_integer(&mut self, value: i64) -> io::Result<()>;

    fn write_character(&mut self, c: char) -> io::Result<()>;
}

/// Line-buffered text input.
///
/// Integers are whitespace-separated tokens; a token that does not parse
/// is consumed and yields `None`. Characters are taken one at a time,
/// newlines included. Bytes that are not valid UTF-8 decode to
/// U+FFFD, so they surface as a bad token or a replacement character
/// instead of vanishing. A read error from the underlying reader ends
/// the input.
#[derive(Debug)]
pub struct TextInput<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> TextInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Pull the next line into the buffer. False at end of input.
    fn fill(&mut self) -> bool {
        let mut line = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => return false,
                Ok(_) => {
                    self.pending.extend(String::from_utf8_lossy(&line).chars());
                    return true;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return false,
            }
        }
    }
}

impl TextInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for TextInput<R> {
    fn read_integer(&mut self) -> Option<i64> {
        loop {
            while self.pending.front().is_some_and(|c| c.is_whitespace()) {
                self.pending.pop_front();
            }
            if !self.pending.is_empty() || !self.fill() {
                break;
            }
        }

        let mut token = String::new();
        while let Some(c) = self.pending.front().copied() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.pending.pop_front();
        }

        token.parse().ok()
    }

    fn read_character(&mut self) -> Option<char> {
        if self.pending.is_empty() && !self.fill() {
            return None;
        }
        self.pending.pop_front()
    }
}

/// Text output, flushed after every value.
#[derive(Debug)]
pub struct TextOutput<W> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for TextOutput<W> {
    fn write_integer(&mut self, value: i64) -> io::Result<()> {
        write!(self.writer, "{}", value)?;
        self.writer.flush()
    }

    fn write_character(&mut self, c: char) -> io::Result<()> {
        write!(self.writer, "{}", c)?;
        self.writer.flush()
    }
}
