//! ASCII card art and screen layout.

use core::fmt::Write as _;

use colored::{Color, Colorize};
use gofish::{Card, Game, HUMAN_ID, MessageLog};

/// Cards drawn side by side before wrapping.
const CARDS_PER_ROW: usize = 13;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Draws a card as five lines of seven columns.
pub fn card_art(card: &Card) -> [String; 5] {
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::Black
    };
    let rank = card.rank.symbol();
    let paint = |text: String| text.color(color).on_white().to_string();

    [
        paint(format!("{rank:<2}     ")),
        paint("       ".to_string()),
        paint(format!("   {}   ", card.suit)),
        paint("       ".to_string()),
        paint(format!("     {rank:>2}")),
    ]
}

/// Draws cards side by side, wrapping after 13 with a blank line between rows.
pub fn render_cards(cards: &[Card]) -> String {
    let mut out = String::new();
    for (index, row) in cards.chunks(CARDS_PER_ROW).enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let art: Vec<[String; 5]> = row.iter().map(card_art).collect();
        for line in 0..5 {
            let joined: Vec<&str> = art.iter().map(|card| card[line].as_str()).collect();
            out.push_str(&joined.join("  "));
            out.push('\n');
        }
    }
    out
}

/// Lays out the score board, the human's hand, bot hand sizes and the
/// message log.
pub fn render_table(game: &Game, log: &MessageLog) -> String {
    let mut out = String::new();
    let players = game.players();

    out.push_str(&"Score".bold().to_string());
    out.push('\n');
    for player in &players {
        let who = if player.is_human() { "You" } else { "Bot" };
        let _ = writeln!(
            out,
            "  Player {} ({who}): {} set(s), {} card(s)",
            player.id,
            player.score,
            player.hand.len()
        );
    }
    out.push('\n');

    if let Some(human) = players.iter().find(|player| player.id == HUMAN_ID) {
        out.push_str(&"Your hand".bold().to_string());
        out.push('\n');
        if human.hand.is_empty() {
            out.push_str("  (empty)\n");
        } else {
            out.push_str(&render_cards(&human.hand.sorted()));
        }
        out.push('\n');
    }

    out.push_str(&"Messages".bold().to_string());
    out.push('\n');
    for message in log.iter() {
        let _ = writeln!(out, "  {message}");
    }
    out
}

/// Clears the terminal and draws the table.
pub fn render_screen(game: &Game, log: &MessageLog) -> String {
    format!("{CLEAR_SCREEN}{}", render_table(game, log))
}
