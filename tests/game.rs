//! Game integration tests.

use gofish::deck;
use gofish::messages::describe;
use gofish::{
    Card, DECK_SIZE, DealError, Game, GameState, Hand, MessageLog, Move, MoveSource, Player,
    RANKS, Rank, SUITS, Standings, Suit, TurnError, TurnOutcome, TurnReport, cards_accounted_for,
    choose_bot_move, resolve_turn,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_table(game: &Game, hands: [&[Card]; 4], scores: [u8; 4]) {
    *game.players.lock() = hands
        .iter()
        .zip(scores)
        .zip(1..)
        .map(|((cards, score), id)| Player {
            id,
            hand: Hand::from_cards(cards),
            score,
        })
        .collect();
}

/// Plays a fixed list of moves for the human seat.
struct Scripted {
    moves: Vec<Move>,
    rejections: Vec<TurnError>,
    reports: Vec<TurnReport>,
}

impl Scripted {
    fn new(moves: &[Move]) -> Self {
        let mut moves = moves.to_vec();
        moves.reverse();
        Self {
            moves,
            rejections: Vec::new(),
            reports: Vec::new(),
        }
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self, _game: &Game, _player_id: u8) -> Option<Move> {
        self.moves.pop()
    }

    fn rejected(&mut self, _game: &Game, error: TurnError) {
        self.rejections.push(error);
    }

    fn observe(&mut self, _game: &Game, report: &TurnReport) {
        self.reports.push(*report);
    }
}

/// Lets the bot strategy play the human seat, with a turn cap.
struct Autoplay {
    turns: usize,
    limit: usize,
}

impl MoveSource for Autoplay {
    fn next_move(&mut self, game: &Game, player_id: u8) -> Option<Move> {
        if self.turns >= self.limit {
            return None;
        }
        game.bot_move(player_id)
    }

    fn observe(&mut self, game: &Game, _report: &TurnReport) {
        self.turns += 1;
        assert_eq!(cards_accounted_for(&game.players()), DECK_SIZE);
    }
}

#[test]
fn deck_has_one_card_per_suit_and_rank() {
    let cards = deck::build();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Spades, Rank::King));
    assert_eq!(cards[13], card(Suit::Hearts, Rank::Ace));

    for suit in SUITS {
        for rank in RANKS {
            let copies = cards.iter().filter(|c| **c == card(suit, rank)).count();
            assert_eq!(copies, 1, "{rank}{suit}");
        }
    }
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut first = deck::build();
    let mut second = deck::build();
    deck::shuffle(&mut first, &mut ChaCha8Rng::seed_from_u64(9));
    deck::shuffle(&mut second, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(first, second);
    assert_ne!(first, deck::build());

    let mut sorted = first.clone();
    sorted.sort_by_key(|c| (c.suit, c.rank));
    assert_eq!(sorted, deck::build());
}

#[test]
fn deal_gives_contiguous_blocks_in_seat_order() {
    let mut cards = deck::build();
    deck::shuffle(&mut cards, &mut ChaCha8Rng::seed_from_u64(5));

    let hands = deck::deal(&cards).unwrap();
    for (seat, hand) in hands.iter().enumerate() {
        assert_eq!(hand.cards(), &cards[seat * 13..(seat + 1) * 13]);
    }

    assert_eq!(
        deck::deal(&cards[..51]).unwrap_err(),
        DealError::WrongDeckSize(51)
    );
}

#[test]
fn new_game_deals_thirteen_cards_each() {
    let game = Game::new(42);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.player_count(), 4);

    for id in 1..=4 {
        assert_eq!(game.hand(id).map(|h| h.len()), Some(13));
        assert_eq!(game.score(id), Some(0));
    }
    assert_eq!(game.hand(5), None);
    assert_eq!(cards_accounted_for(&game.players()), DECK_SIZE);

    let again = Game::new(42);
    assert_eq!(game.players(), again.players());
}

#[test]
fn hand_counts_and_partitions_by_rank() {
    let hand = Hand::from_cards(&[
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Seven),
    ]);
    assert_eq!(hand.count_of_rank(Rank::Seven), 2);
    assert_eq!(hand.count_of_rank(Rank::King), 0);

    let (rest, removed) = hand.remove_all_of_rank(Rank::Seven);
    assert_eq!(rest.cards(), &[card(Suit::Hearts, Rank::Two)]);
    assert_eq!(removed.len(), 2);
    assert_eq!(hand.len(), 3);

    let (same, completed) = hand.remove_set_if_complete(Rank::Seven);
    assert!(!completed);
    assert_eq!(same, hand);
}

#[test]
fn complete_set_is_removed_from_hand() {
    let mut hand = Hand::new();
    hand.add_cards(SUITS.map(|suit| card(suit, Rank::Queen)));
    hand.add_cards([card(Suit::Hearts, Rank::Three)]);
    assert!(hand.has_complete_set(Rank::Queen));

    let (rest, completed) = hand.remove_set_if_complete(Rank::Queen);
    assert!(completed);
    assert_eq!(rest.cards(), &[card(Suit::Hearts, Rank::Three)]);

    assert!(hand.claim_set(Rank::Queen));
    assert!(!hand.claim_set(Rank::Queen));
    assert_eq!(hand, rest);
}

#[test]
fn correct_guess_moves_every_card_of_the_rank() {
    let game = Game::new(1);
    set_table(
        &game,
        [
            &[card(Suit::Spades, Rank::Five)],
            &[
                card(Suit::Hearts, Rank::Five),
                card(Suit::Clubs, Rank::Five),
                card(Suit::Hearts, Rank::Nine),
            ],
            &[],
            &[],
        ],
        [0; 4],
    );

    let report = game.take_turn(1, Move::new(2, Rank::Five, 2)).unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Correct {
            transferred: 2,
            scored: false
        }
    );
    assert_eq!(game.hand(1).unwrap().count_of_rank(Rank::Five), 3);
    assert_eq!(game.hand(2).unwrap().count_of_rank(Rank::Five), 0);
    assert_eq!(game.hand(2).unwrap().len(), 1);
    assert_eq!(game.current_player(), 2);
}

#[test]
fn correct_guess_of_none_is_a_no_op_that_ends_the_turn() {
    let game = Game::new(2);
    set_table(
        &game,
        [
            &[card(Suit::Spades, Rank::Eight)],
            &[card(Suit::Hearts, Rank::Eight)],
            &[card(Suit::Clubs, Rank::Three), card(Suit::Clubs, Rank::Eight)],
            &[card(Suit::Diamonds, Rank::Eight)],
        ],
        [0; 4],
    );
    let before = game.players();
    assert_eq!(game.hand(3).unwrap().count_of_rank(Rank::Jack), 0);

    let report = game.take_turn(1, Move::new(3, Rank::Jack, 0)).unwrap();
    assert_eq!(
        report.outcome,
        TurnOutcome::Correct {
            transferred: 0,
            scored: false
        }
    );
    assert_eq!(game.players(), before);
    assert_eq!(game.current_player(), 2);
}

#[test]
fn wrong_guess_changes_nothing_but_the_turn() {
    let game = Game::new(3);
    let before = game.players();
    let actual = game.hand(4).unwrap().count_of_rank(Rank::Jack) as u8;
    let guess = (actual + 1) % 5;

    let report = game.take_turn(1, Move::new(4, Rank::Jack, guess)).unwrap();
    assert_eq!(report.outcome, TurnOutcome::Wrong { actual });
    assert!(!report.outcome.is_correct());
    assert_eq!(game.players(), before);
    assert_eq!(game.current_player(), 2);
}

#[test]
fn invalid_input_is_rejected_without_side_effects() {
    let game = Game::new(4);
    let before = game.players();

    assert_eq!(
        game.take_turn(1, Move::new(1, Rank::Ace, 1)).unwrap_err(),
        TurnError::SelfTarget
    );
    assert_eq!(
        game.take_turn(1, Move::new(5, Rank::Ace, 1)).unwrap_err(),
        TurnError::InvalidPlayer(5)
    );
    assert_eq!(
        game.take_turn(1, Move::new(0, Rank::Ace, 1)).unwrap_err(),
        TurnError::InvalidPlayer(0)
    );
    assert_eq!(
        game.take_turn(1, Move::new(2, Rank::Ace, 5)).unwrap_err(),
        TurnError::InvalidGuess(5)
    );
    assert_eq!(
        game.take_turn(3, Move::new(2, Rank::Ace, 1)).unwrap_err(),
        TurnError::NotYourTurn
    );
    assert_eq!(
        game.take_turn(9, Move::new(2, Rank::Ace, 1)).unwrap_err(),
        TurnError::InvalidPlayer(9)
    );

    assert_eq!(game.players(), before);
    assert_eq!(game.current_player(), 1);
}

#[test]
fn resolve_turn_rejects_self_target_on_any_seat() {
    let game = Game::new(6);
    let mut players = game.players();
    let before = players.clone();

    for id in 1..=4 {
        assert_eq!(
            resolve_turn(&mut players, id, Move::new(id, Rank::Four, 0)),
            Err(TurnError::SelfTarget)
        );
    }
    assert_eq!(players, before);
}

#[test]
fn set_completes_across_several_transfers() {
    let game = Game::new(7);
    set_table(
        &game,
        [
            &[
                card(Suit::Spades, Rank::King),
                card(Suit::Hearts, Rank::King),
                card(Suit::Spades, Rank::Two),
            ],
            &[card(Suit::Diamonds, Rank::King)],
            &[card(Suit::Clubs, Rank::King), card(Suit::Clubs, Rank::Two)],
            &[card(Suit::Hearts, Rank::Two)],
        ],
        [0; 4],
    );

    let first = game.take_turn(1, Move::new(2, Rank::King, 1)).unwrap();
    assert!(!first.outcome.scored());
    assert_eq!(game.hand(1).unwrap().count_of_rank(Rank::King), 3);

    // Bots miss on purpose so the turn comes back around.
    game.take_turn(2, Move::new(4, Rank::Two, 4)).unwrap();
    game.take_turn(3, Move::new(4, Rank::Two, 4)).unwrap();
    game.take_turn(4, Move::new(3, Rank::Two, 4)).unwrap();

    let second = game.take_turn(1, Move::new(3, Rank::King, 1)).unwrap();
    assert_eq!(
        second.outcome,
        TurnOutcome::Correct {
            transferred: 1,
            scored: true
        }
    );
    assert_eq!(game.score(1), Some(1));
    assert_eq!(game.hand(1).unwrap().count_of_rank(Rank::King), 0);
    assert_eq!(game.hand(1).unwrap().len(), 1);
    assert_eq!(game.total_score(), 1);
}

#[test]
fn last_set_ends_the_game() {
    let game = Game::new(8);
    set_table(
        &game,
        [
            &[
                card(Suit::Spades, Rank::Ace),
                card(Suit::Hearts, Rank::Ace),
                card(Suit::Clubs, Rank::Ace),
            ],
            &[card(Suit::Diamonds, Rank::Ace)],
            &[],
            &[],
        ],
        [3, 3, 3, 3],
    );
    assert!(!game.is_over());

    let report = game.take_turn(1, Move::new(2, Rank::Ace, 1)).unwrap();
    assert!(report.outcome.scored());
    assert_eq!(game.total_score(), 13);
    assert!(game.is_over());
    assert_eq!(game.state(), GameState::GameOver);

    assert_eq!(
        game.take_turn(2, Move::new(1, Rank::Ace, 0)).unwrap_err(),
        TurnError::GameOver
    );
    assert_eq!(game.play_bot_turn().unwrap_err(), TurnError::GameOver);
    assert_eq!(
        game.standings(),
        Standings {
            scores: vec![(1, 4), (2, 3), (3, 3), (4, 3)],
            winners: vec![1],
        }
    );
}

#[test]
fn run_stops_mid_round_once_every_set_is_claimed() {
    let game = Game::new(10);
    set_table(
        &game,
        [
            &[
                card(Suit::Spades, Rank::Ace),
                card(Suit::Hearts, Rank::Ace),
                card(Suit::Clubs, Rank::Ace),
            ],
            &[card(Suit::Diamonds, Rank::Ace)],
            &[],
            &[],
        ],
        [3, 3, 3, 3],
    );

    let mut source = Scripted::new(&[
        Move::new(1, Rank::Ace, 1),
        Move::new(2, Rank::Ace, 1),
    ]);
    let standings = game.run(&mut source).unwrap();

    assert_eq!(source.rejections, vec![TurnError::SelfTarget]);
    assert_eq!(source.reports.len(), 1);
    assert_eq!(standings.winners, vec![1]);
    assert_eq!(game.current_player(), 2);
}

#[test]
fn run_returns_none_when_the_human_quits() {
    let game = Game::new(11);
    let mut source = Scripted::new(&[]);
    assert_eq!(game.run(&mut source), None);
    assert!(source.reports.is_empty());
}

#[test]
fn bots_play_a_full_game_to_thirteen_sets() {
    let game = Game::new(12);
    let mut source = Autoplay {
        turns: 0,
        limit: 500_000,
    };

    let standings = game.run(&mut source).expect("game should finish");
    let total: u8 = standings.scores.iter().map(|&(_, score)| score).sum();
    assert_eq!(total, 13);
    assert!(!standings.winners.is_empty());
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(cards_accounted_for(&game.players()), DECK_SIZE);
}

#[test]
fn bot_targets_are_uniform_over_other_seats() {
    let game = Game::new(13);
    let players = game.players();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut targets = [0usize; 5];
    let mut ranks_seen = Vec::new();

    for _ in 0..3000 {
        let mv = choose_bot_move(&players, 2, &mut rng).unwrap();
        assert_ne!(mv.target, 2);
        assert!((1..=4).contains(&mv.guess));
        targets[usize::from(mv.target)] += 1;
        if !ranks_seen.contains(&mv.rank) {
            ranks_seen.push(mv.rank);
        }
    }

    assert_eq!(targets[2], 0);
    for id in [1, 3, 4] {
        assert!(
            (800..1200).contains(&targets[id]),
            "player {id} picked {} times",
            targets[id]
        );
    }
    assert_eq!(ranks_seen.len(), RANKS.len());
}

#[test]
fn bot_needs_someone_to_ask() {
    let alone = [Player::new(1, Hand::new())];
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(choose_bot_move(&alone, 1, &mut rng), None);
}

#[test]
fn ranks_parse_from_symbols() {
    assert_eq!("A".parse::<Rank>(), Ok(Rank::Ace));
    assert_eq!("q".parse::<Rank>(), Ok(Rank::Queen));
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert!("1".parse::<Rank>().is_err());
    assert!("".parse::<Rank>().is_err());
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "10♦");
    assert!(Suit::Hearts.is_red());
    assert!(!Suit::Clubs.is_red());
}

#[test]
fn message_log_keeps_most_recent_entries() {
    let mut log = MessageLog::new(3);
    for n in 0..5 {
        log.push(format!("message {n}"));
    }
    assert_eq!(log.len(), 3);
    assert_eq!(
        log.iter().collect::<Vec<_>>(),
        vec!["message 2", "message 3", "message 4"]
    );

    let mut silent = MessageLog::new(0);
    silent.push("dropped");
    assert!(silent.is_empty());
}

#[test]
fn turn_reports_describe_outcomes() {
    let report = TurnReport {
        player_id: 1,
        target: 3,
        rank: Rank::Seven,
        guess: 2,
        outcome: TurnOutcome::Wrong { actual: 1 },
    };
    assert_eq!(
        describe(&report),
        "Player 1 guessed 2 x 7 from player 3, but they have 1."
    );

    let scored = TurnReport {
        outcome: TurnOutcome::Correct {
            transferred: 2,
            scored: true,
        },
        ..report
    };
    assert_eq!(
        describe(&scored),
        "Player 1 takes 2 x 7 from player 3. Player 1 completes the 7s and scores!"
    );

    let none = TurnReport {
        guess: 0,
        outcome: TurnOutcome::Correct {
            transferred: 0,
            scored: false,
        },
        ..report
    };
    assert_eq!(
        describe(&none),
        "Player 1 correctly guessed that player 3 has no 7s."
    );
}
