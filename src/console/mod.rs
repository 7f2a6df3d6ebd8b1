use anyhow::*;
use std::fmt;

pub mod stream;
#[cfg(test)]
pub mod mock;

pub use self::stream::StreamConsole;

pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;

    fn print_formatted_line(&mut self, args: fmt::Arguments) -> Result<()>;

    /// Blocks until the next whitespace-delimited token is an integer.
    /// Tokens that are not integers are discarded.
    fn read_int(&mut self) -> Result<i64>;
}
