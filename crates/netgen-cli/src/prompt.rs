//! Bounded stdin prompts for interactive runs.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

/// Reads replies from any `BufRead` so tests can drive it with a cursor.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the reply parses and falls inside `min..=max`.
    pub fn get_number<T>(&mut self, prompt: &str, min: T, max: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        writeln!(self.output, "{prompt}")?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(value) if value >= min && value <= max => return Ok(value),
                _ => writeln!(self.output, "Expected a value between {min} - {max}")?,
            }
        }
    }

    /// A reply starting with `y` (any case) means yes; anything else is no.
    pub fn get_bool(&mut self, prompt: &str) -> Result<bool> {
        writeln!(self.output, "{prompt}")?;
        let line = self.read_line()?;
        Ok(line.trim().to_lowercase().starts_with('y'))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed before a value was provided");
        }
        Ok(line)
    }
}
