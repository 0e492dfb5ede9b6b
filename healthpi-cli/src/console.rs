use std::io::{self, BufRead, Write};

use crate::{Error, Result};

#[mockall::automock]
pub trait Console {
    /// Reads one line without its line terminator, `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn write(&mut self, text: &str) -> io::Result<()>;
}

pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}

pub type StdConsole = IoConsole<io::StdinLock<'static>, io::Stdout>;

pub fn std_console() -> StdConsole {
    IoConsole::new(io::stdin().lock(), io::stdout())
}

/// Shows `question` and waits for the answer.
pub fn prompt(console: &mut dyn Console, question: &str) -> Result<String> {
    console.write(question)?;
    console.read_line()?.ok_or(Error::EndOfInput)
}
