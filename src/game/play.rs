//! Turn flow: taking turns, bot turns and the round-robin loop.

use alloc::vec::Vec;

use log::{error, info, warn};

use crate::bot::choose_bot_move;
use crate::error::TurnError;
use crate::player::{HUMAN_ID, PLAYER_COUNT, is_valid_id};
use crate::result::{Standings, TurnReport};

use super::turn::{Move, resolve_turn};
use super::{Game, GameState, SETS_TO_WIN, cards_accounted_for};

/// Supplies moves for the human seat and follows the game as it is played.
///
/// Front ends implement this to prompt for input and redraw after each turn.
pub trait MoveSource {
    /// Returns the next move for `player_id`, or `None` to stop playing.
    fn next_move(&mut self, game: &Game, player_id: u8) -> Option<Move>;

    /// Called when the last move returned by [`MoveSource::next_move`] was
    /// rejected. The game asks again afterwards.
    fn rejected(&mut self, _game: &Game, _error: TurnError) {}

    /// Called after every resolved turn, human or bot.
    fn observe(&mut self, _game: &Game, _report: &TurnReport) {}
}

const fn next_seat(player_id: u8) -> u8 {
    player_id % PLAYER_COUNT as u8 + 1
}

impl Game {
    /// Plays one turn for `player_id`.
    ///
    /// The turn passes to the next seat whether or not the guess was
    /// correct. Once the final set is claimed the game moves to
    /// [`GameState::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, or
    /// the move is invalid (see [`resolve_turn`]). Rejected moves do not
    /// consume the turn.
    pub fn take_turn(&self, player_id: u8, mv: Move) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        if !is_valid_id(player_id) {
            return Err(TurnError::InvalidPlayer(player_id));
        }

        let mut current = self.current.lock();
        if *current != player_id {
            return Err(TurnError::NotYourTurn);
        }

        let mut players = self.players.lock();
        let accounted = cards_accounted_for(&players);
        let outcome = resolve_turn(&mut players, player_id, mv)?;
        debug_assert_eq!(cards_accounted_for(&players), accounted);
        let total: u8 = players.iter().map(|player| player.score).sum();
        drop(players);

        *current = next_seat(player_id);
        drop(current);

        if total >= SETS_TO_WIN {
            *self.state.lock() = GameState::GameOver;
            info!("all {SETS_TO_WIN} sets claimed");
        }

        Ok(TurnReport {
            player_id,
            target: mv.target,
            rank: mv.rank,
            guess: mv.guess,
            outcome,
        })
    }

    /// Draws a bot move for `bot_id` from the game's random number generator.
    pub fn bot_move(&self, bot_id: u8) -> Option<Move> {
        let players = self.players.lock();
        let mut rng = self.rng.lock();
        choose_bot_move(&players, bot_id, &mut *rng)
    }

    /// Plays the current player's turn with the bot strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over.
    pub fn play_bot_turn(&self) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        let player_id = self.current_player();
        let mv = self
            .bot_move(player_id)
            .ok_or(TurnError::InvalidPlayer(player_id))?;
        self.take_turn(player_id, mv)
    }

    /// Plays the game to the end.
    ///
    /// Seats take turns in order 1, 2, 3, 4. The human seat asks `source`
    /// for a move, asking again after each rejected move. Bot seats use the
    /// bot strategy. The loop stops as soon as every set is claimed, even in
    /// the middle of a round.
    ///
    /// Returns `None` if `source` stops supplying moves before the end.
    pub fn run<S: MoveSource + ?Sized>(&self, source: &mut S) -> Option<Standings> {
        while !self.is_over() {
            let player_id = self.current_player();
            let report = if player_id == HUMAN_ID {
                loop {
                    let mv = source.next_move(self, player_id)?;
                    match self.take_turn(player_id, mv) {
                        Ok(report) => break report,
                        Err(err) => {
                            warn!("rejected move from player {player_id}: {err}");
                            source.rejected(self, err);
                        }
                    }
                }
            } else {
                match self.play_bot_turn() {
                    Ok(report) => report,
                    Err(err) => {
                        error!("bot {player_id} could not move: {err}");
                        return None;
                    }
                }
            };
            source.observe(self, &report);
        }

        Some(self.standings())
    }

    /// Returns the scores and the players sharing the highest score.
    pub fn standings(&self) -> Standings {
        let scores = self.scores();
        let best = scores.iter().map(|&(_, score)| score).max().unwrap_or(0);
        let winners: Vec<u8> = scores
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(id, _)| id)
            .collect();

        Standings { scores, winners }
    }
}
