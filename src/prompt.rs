use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{Error, Result};

/// A line reader paired with the stream its questions are printed to.
///
/// Owning the handle for the length of a run means it is released when the
/// value drops, whichever way the run ends.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// Questions on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Pair any reader with any writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line of answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Prompt);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
