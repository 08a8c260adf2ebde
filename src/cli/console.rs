//! Line-oriented terminal I/O
//!
//! `Console` is the input/output collaborator every interactive command talks
//! to. It is generic over the reader and writer so tests can script a session
//! with an in-memory buffer.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{ExpenseError, ExpenseResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a question and read one line of answer
    ///
    /// The trailing line ending is removed, nothing else. Bytes that are not
    /// valid UTF-8 become U+FFFD. End of input is reported as
    /// [`ExpenseError::InputClosed`].
    pub fn prompt(&mut self, question: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ExpenseError::InputClosed);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print preformatted text as-is
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
