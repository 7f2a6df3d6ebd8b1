use anyhow::{bail, Context, Result};
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use crate::console::Console;


pub struct StreamConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending_tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StreamConsole {
            input,
            output,
            pending_tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending_tokens.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let bytes_read = self
                .input
                .read_line(&mut line)
                .context("Could not read from input")?;
            if bytes_read == 0 {
                bail!("Input stream closed");
            }
            self.pending_tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn print_formatted_line(&mut self, args: fmt::Arguments) -> Result<()> {
        self.output.write_fmt(args)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn read_int(&mut self) -> Result<i64> {
        self.output.flush()?;
        loop {
            let token = self.next_token()?;
            match token.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => log::debug!("Discarding non-integer input `{}`", token),
            }
        }
    }
}
