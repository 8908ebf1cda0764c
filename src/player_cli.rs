#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{board::Board, common::GameError, config::BOARD_SIZE, player::Player};
use rand::rngs::SmallRng;

/// Human player answering coordinate prompts on a terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Prompt on stdout and read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for one axis until the answer is valid.
    fn ask(&mut self, axis: char) -> Result<usize, GameError> {
        loop {
            write!(self.output, "{} coordinate (1-{}): ", axis, BOARD_SIZE)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match parse_axis(line.trim()) {
                Ok(Answer::Quit) => return Err(GameError::Abandoned),
                Ok(Answer::Axis(v)) => return Ok(v),
                Err(e) => writeln!(self.output, "✗ Error: {}", e)?,
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Axis(usize),
    Quit,
}

/// Parse a 1-based axis value into a 0-based board offset.
fn parse_axis(input: &str) -> Result<Answer, String> {
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Answer::Quit);
    }
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let value: usize = input
        .parse()
        .map_err(|_| format!("Invalid number '{}' - must be 1-{}", input, BOARD_SIZE))?;
    if value == 0 || value > BOARD_SIZE {
        return Err(format!("{} out of bounds - must be 1-{}", value, BOARD_SIZE));
    }
    Ok(Answer::Axis(value - 1))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: &Board,
    ) -> Result<(usize, usize), GameError> {
        let x = self.ask('X')?;
        let y = self.ask('Y')?;
        Ok((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_values() {
        assert_eq!(parse_axis("1"), Ok(Answer::Axis(0)));
        assert_eq!(parse_axis("10"), Ok(Answer::Axis(9)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(parse_axis("0").is_err());
        assert!(parse_axis("11").is_err());
        assert!(parse_axis("-3").is_err());
        assert!(parse_axis("A5").is_err());
        assert!(parse_axis("").is_err());
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(parse_axis("Q"), Ok(Answer::Quit));
        assert_eq!(parse_axis("quit"), Ok(Answer::Quit));
    }
}
