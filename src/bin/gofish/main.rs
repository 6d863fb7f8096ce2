//! Terminal Go Fish: you against three bots.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use gofish::messages::describe;
use gofish::{Game, MessageLog, Move, MoveSource, TurnError, TurnReport};
use log::{LevelFilter, info};

use crate::input::{ask, parse_guess, parse_rank, parse_target};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// RNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// How many messages the log under the table keeps
    #[arg(long, default_value_t = gofish::messages::DEFAULT_CAPACITY)]
    history: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Let the bot strategy play your seat too
    #[arg(long, default_value_t = false)]
    autoplay: bool,
}

struct Terminal<R, W> {
    reader: R,
    writer: W,
    log: MessageLog,
    autoplay: bool,
    io_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn prompt_move(&mut self, game: &Game, player_id: u8) -> io::Result<Option<Move>> {
        write!(self.writer, "{}", render::render_screen(game, &self.log))?;

        let Some(target) = ask(
            &mut self.reader,
            &mut self.writer,
            "Which player do you want to ask? (2, 3 or 4, q to quit): ",
            |s| parse_target(s, player_id),
        )?
        else {
            return Ok(None);
        };
        let Some(rank) = ask(
            &mut self.reader,
            &mut self.writer,
            "Which rank? (A, 2, 3, ..., 10, J, Q, K, or quit): ",
            parse_rank,
        )?
        else {
            return Ok(None);
        };
        let Some(guess) = ask(
            &mut self.reader,
            &mut self.writer,
            &format!("How many {rank}s does player {target} have? "),
            parse_guess,
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Move::new(target, rank, guess)))
    }
}

impl<R: BufRead, W: Write> MoveSource for Terminal<R, W> {
    fn next_move(&mut self, game: &Game, player_id: u8) -> Option<Move> {
        if self.io_error.is_some() {
            return None;
        }
        if self.autoplay {
            return game.bot_move(player_id);
        }
        match self.prompt_move(game, player_id) {
            Ok(mv) => mv,
            Err(err) => {
                self.io_error = Some(err);
                None
            }
        }
    }

    fn rejected(&mut self, _game: &Game, error: TurnError) {
        self.log.push(format!("Move rejected: {error}"));
    }

    fn observe(&mut self, _game: &Game, report: &TurnReport) {
        let line = describe(report);
        if self.autoplay && self.io_error.is_none() {
            if let Err(err) = writeln!(self.writer, "{line}") {
                self.io_error = Some(err);
            }
        }
        self.log.push(line);
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .format_target(false)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!("starting game with seed {seed}");
    let game = Game::new(seed);

    let mut terminal = Terminal {
        reader: io::stdin().lock(),
        writer: io::stdout(),
        log: MessageLog::new(args.history),
        autoplay: args.autoplay,
        io_error: None,
    };

    let standings = game.run(&mut terminal);
    if let Some(err) = terminal.io_error.take() {
        return Err(err.into());
    }

    let mut out = io::stdout();
    if !args.autoplay {
        write!(out, "{}", render::render_screen(&game, &terminal.log))?;
    }
    let Some(standings) = standings else {
        writeln!(out, "Goodbye.")?;
        return Ok(());
    };

    writeln!(out, "===================================")?;
    writeln!(out, "Final scores (seed {seed}):")?;
    for (id, score) in &standings.scores {
        writeln!(out, "  Player {id}: {score}")?;
    }
    let winners: Vec<String> = standings.winners.iter().map(ToString::to_string).collect();
    writeln!(out, "Winner(s): player {}", winners.join(", "))?;
    Ok(())
}
