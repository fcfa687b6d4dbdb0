//! CLI Pasur example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pasur::{Card, Game, GameOptions, GameState, PlayOutcome, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Pasur CLI example (type 'q' to quit)");

    let Some(players) = prompt_players() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_players(players);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    if let Err(err) = game.deal() {
        println!("Deal error: {err:?}");
        return;
    }

    loop {
        match game.state() {
            GameState::Playing => {}
            GameState::RoundOver => {
                println!("\nDealing the next hands.");
                if let Err(err) = game.deal() {
                    println!("Deal error: {err:?}");
                    return;
                }
                continue;
            }
            GameState::GameOver => break,
            GameState::WaitingForDeal => {
                println!("Game was not dealt.");
                return;
            }
        }

        let Some(seat) = game.current_player() else {
            break;
        };

        let Some(player) = game.player(seat) else {
            break;
        };

        let result = if player.is_automated() {
            game.play_automated(seat)
        } else {
            print_table(&game, seat);
            let hand = player.hand().to_vec();
            let Some(card) = prompt_card(&hand) else {
                println!("Goodbye.");
                return;
            };
            game.play(seat, card)
        };

        match result {
            Ok(outcome) => print_outcome(&game, &outcome),
            Err(err) => println!("Play error: {err:?}"),
        }
    }

    print_leaderboard(&game);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_players() -> Option<u8> {
    loop {
        let input = prompt_line("Players (2-4): ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u8>() {
            Ok(value) if (2..=4).contains(&value) => return Some(value),
            _ => println!("Please enter 2, 3, or 4."),
        }
    }
}

fn prompt_card(hand: &[Card]) -> Option<Card> {
    loop {
        let input = prompt_line(&format!("Play card (1-{}): ", hand.len()));
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(index) if (1..=hand.len()).contains(&index) => return Some(hand[index - 1]),
            _ => println!("Please enter a card number."),
        }
    }
}

fn print_table(game: &Game, seat: u8) {
    println!(
        "\nDeck: {} cards remaining ({}% dealt)",
        game.cards_remaining(),
        game.progress_percent()
    );
    println!("Table: {}", format_cards(game.table()));

    for player in game.players() {
        let total = game.score(player.id()).map_or(0, |score| score.total);
        println!(
            "  {}: {} points ({} cards)",
            player.name(),
            total,
            player.captured().len()
        );
    }

    if let Some(player) = game.player(seat) {
        let hand = player
            .hand()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let marker = if game.possible_takes(*card).is_empty() {
                    String::new()
                } else {
                    colorize("*", "33")
                };
                format!("[{}]{}{}", index + 1, format_card(card), marker)
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("\nYour hand: {hand}");
    }
}

fn print_outcome(game: &Game, outcome: &PlayOutcome) {
    let name = game
        .player(outcome.player_id)
        .map_or_else(|| outcome.player_id.to_string(), |p| p.name().to_string());

    if outcome.is_capture() {
        println!(
            "{name} plays {} and takes {}",
            format_card(&outcome.card),
            format_cards(&outcome.captured)
        );
    } else {
        println!("{name} lays {}", format_card(&outcome.card));
    }

    if outcome.sur {
        println!("{}", colorize("Sur!", "33"));
    }
    if outcome.total_points() > 0 {
        println!("+{}", outcome.total_points());
    }
    if !outcome.remainder.is_empty() {
        println!(
            "{name} collects the remaining table: {}",
            format_cards(&outcome.remainder)
        );
    }
}

fn print_leaderboard(game: &Game) {
    println!("\nFinal standings:");
    for (rank, standing) in game.leaderboard().iter().enumerate() {
        let b = &standing.breakdown;
        println!(
            "{}. {} - {} points",
            rank + 1,
            standing.name,
            b.total
        );
        println!(
            "   10♦ {} | 2♣ {} | aces {} | jacks {} | 7♣ {} | surs ({}) {} | most cards {} | {} cards",
            b.ten_diamonds,
            b.two_clubs,
            b.aces,
            b.jacks,
            b.clubs_seven,
            standing.surs,
            b.surs,
            b.most_cards,
            standing.captured_count
        );
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
