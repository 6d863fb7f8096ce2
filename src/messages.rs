//! Rolling message log shown under the table.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;

use crate::result::{TurnOutcome, TurnReport};

/// Default number of messages kept.
pub const DEFAULT_CAPACITY: usize = 8;

/// Keeps the most recent messages, evicting the oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Creates an empty log holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a message, dropping the oldest if the log is full.
    pub fn push(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Iterates messages from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of stored messages.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Describes a resolved turn in one line.
#[must_use]
pub fn describe(report: &TurnReport) -> String {
    let TurnReport {
        player_id,
        target,
        rank,
        guess,
        outcome,
    } = *report;

    match outcome {
        TurnOutcome::Correct {
            transferred: 0, ..
        } => format!(
            "Player {player_id} correctly guessed that player {target} has no {rank}s."
        ),
        TurnOutcome::Correct {
            transferred,
            scored,
        } => {
            let mut line = format!(
                "Player {player_id} takes {transferred} x {rank} from player {target}."
            );
            if scored {
                line.push_str(&format!(" Player {player_id} completes the {rank}s and scores!"));
            }
            line
        }
        TurnOutcome::Wrong { actual } => format!(
            "Player {player_id} guessed {guess} x {rank} from player {target}, but they have {actual}."
        ),
    }
}
