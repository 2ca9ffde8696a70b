// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Line-oriented operator I/O for the [Debugger](super::Debugger)

use crate::error::Result;
use std::io::{BufRead, Stdout, StdinLock, Write};

/// Something the debugger can talk to the operator through
pub trait Transport {
    /// Shows `prompt`, then reads one line of input, without its line ending.
    ///
    /// Returns `None` at the end of input. Bytes which aren't UTF-8 read as U+FFFD.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
    /// Writes one line of output
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// A [Transport] over any buffered reader and writer
#[derive(Debug)]
pub struct LineIo<R: BufRead, W: Write> {
    input: R,
    output: W,
}

/// The operator's terminal
pub type StdIo = LineIo<StdinLock<'static>, Stdout>;

impl<R: BufRead, W: Write> LineIo<R, W> {
    /// Wraps a reader and a writer
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// # fn main() -> Result<()> {
    /// let mut io = LineIo::new(&b"step\n"[..], vec![]);
    /// assert_eq!(Some("step".to_string()), io.read_line("> ")?);
    /// assert_eq!(None, io.read_line("> ")?);
    /// io.write_line("done")?;
    /// assert_eq!(b"> > done\n", &io.output()[..]);
    /// #    Ok(())
    /// # }
    /// ```
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gets the writer
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Unwraps the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl StdIo {
    /// Locks stdin, for the lifetime of the program
    pub fn stdio() -> Self {
        LineIo::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Transport for LineIo<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
