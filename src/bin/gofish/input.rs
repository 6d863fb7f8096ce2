//! Prompting and parsing of the human player's answers.

use std::io::{self, BufRead, Write};

use gofish::{PLAYER_COUNT, Rank, SET_SIZE};
use thiserror::Error;

/// A parsed answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    /// The player answered the question.
    Value(T),
    /// The player asked to quit.
    Quit,
}

/// Answers that cannot be used; the prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter a number")]
    NotANumber,
    #[error("pick player 2, 3 or 4")]
    InvalidTarget,
    #[error("{0}")]
    InvalidRank(#[from] gofish::ParseRankError),
    #[error("a player holds between 0 and 4 cards of a rank")]
    InvalidGuess,
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parses the player to ask. Only bot seats can be asked.
pub fn parse_target(input: &str, human_id: u8) -> Result<Answer<u8>, InputError> {
    let input = input.trim().to_lowercase();
    if is_quit(&input) {
        return Ok(Answer::Quit);
    }
    let target: u8 = input.parse().map_err(|_| InputError::NotANumber)?;
    if target == human_id || target == 0 || usize::from(target) > PLAYER_COUNT {
        return Err(InputError::InvalidTarget);
    }
    Ok(Answer::Value(target))
}

/// Parses a rank symbol.
///
/// `Q` is the Queen here, so only the full word `quit` (or `exit`) quits.
pub fn parse_rank(input: &str) -> Result<Answer<Rank>, InputError> {
    let input = input.trim().to_lowercase();
    match input.parse() {
        Ok(rank) => Ok(Answer::Value(rank)),
        Err(_) if matches!(input.as_str(), "quit" | "exit") => Ok(Answer::Quit),
        Err(err) => Err(err.into()),
    }
}

pub fn parse_guess(input: &str) -> Result<Answer<u8>, InputError> {
    let input = input.trim().to_lowercase();
    if is_quit(&input) {
        return Ok(Answer::Quit);
    }
    let guess: u8 = input.parse().map_err(|_| InputError::NotANumber)?;
    if usize::from(guess) > SET_SIZE {
        return Err(InputError::InvalidGuess);
    }
    Ok(Answer::Value(guess))
}

/// Prompts until `parse` accepts the answer.
///
/// Returns `Ok(None)` when the player quits or input ends.
pub fn ask<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> Result<Answer<T>, InputError>,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(writer, "{prompt}")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse(&line) {
            Ok(Answer::Value(value)) => return Ok(Some(value)),
            Ok(Answer::Quit) => return Ok(None),
            Err(err) => writeln!(writer, "{err}")?,
        }
    }
}
