//! Deck, capture, and valuation tests.

use std::collections::HashSet;

use pasur::capture::possible_takes;
use pasur::score::evaluate_cards_value;
use pasur::strategy::choose_card;
use pasur::{Card, DECK_SIZE, Deck, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort();
    cards
}

#[test]
fn standard_deck_holds_each_card_once() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn shuffle_is_a_seeded_permutation() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
    let other = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(8));

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_ne!(first, Deck::standard());
    assert_eq!(sorted(first.cards()), sorted(Deck::standard().cards()));
}

#[test]
fn only_a_full_deck_is_complete() {
    assert!(Deck::standard().is_complete());
    assert!(Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3)).is_complete());

    let mut cards = Deck::standard().cards().to_vec();
    let top = cards.pop().unwrap();
    assert!(!Deck::from_cards(cards.clone()).is_complete());

    cards.push(cards[0]);
    assert!(!Deck::from_cards(cards).is_complete());
    assert!(!Deck::from_cards(vec![top]).is_complete());
}

#[test]
fn draw_empties_the_deck_without_error() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, 2), card(Suit::Spades, 9)]);
    assert_eq!(deck.draw(), Some(card(Suit::Spades, 9)));
    assert_eq!(deck.draw(), Some(card(Suit::Hearts, 2)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn direct_match_takes_every_card_of_the_rank() {
    let table = [
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 9),
    ];
    let played = card(Suit::Hearts, 7);

    let takes = possible_takes(played, &table);
    assert_eq!(takes, [card(Suit::Diamonds, 7), card(Suit::Clubs, 7)]);

    // Only the seven of clubs carries a point.
    let group = [played, takes[0], takes[1]];
    assert_eq!(evaluate_cards_value(&group), 1);
}

#[test]
fn sum_match_takes_the_adding_cards() {
    let table = [card(Suit::Spades, 3), card(Suit::Diamonds, 4)];
    let takes = possible_takes(card(Suit::Clubs, 7), &table);
    assert_eq!(takes, table);
}

#[test]
fn direct_and_sum_matches_are_taken_together() {
    let table = [
        card(Suit::Spades, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 7),
    ];
    let takes = possible_takes(card(Suit::Clubs, 7), &table);
    assert_eq!(takes, table);
}

#[test]
fn overlapping_sums_are_merged() {
    let table = [
        card(Suit::Hearts, 2),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 5),
        card(Suit::Hearts, 8),
    ];

    // 2 + 8 and 2 + 3 + 5 both make ten; the nine fits no group.
    let takes = possible_takes(card(Suit::Spades, 10), &table);
    assert_eq!(
        takes,
        [
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 5),
            card(Suit::Hearts, 8),
        ]
    );
}

#[test]
fn no_match_takes_nothing() {
    let takes = possible_takes(card(Suit::Diamonds, 9), &[card(Suit::Spades, 5)]);
    assert!(takes.is_empty());
    assert!(possible_takes(card(Suit::Diamonds, 9), &[]).is_empty());
}

#[test]
fn face_cards_and_aces_never_sum() {
    // An Ace is not a one.
    let takes = possible_takes(
        card(Suit::Clubs, 3),
        &[card(Suit::Spades, 1), card(Suit::Hearts, 2)],
    );
    assert!(takes.is_empty());

    let table = [
        card(Suit::Diamonds, 11),
        card(Suit::Spades, 5),
        card(Suit::Clubs, 6),
    ];
    assert_eq!(
        possible_takes(card(Suit::Hearts, 11), &table),
        [card(Suit::Diamonds, 11)]
    );

    let table = [card(Suit::Hearts, 13), card(Suit::Hearts, 12)];
    assert_eq!(
        possible_takes(card(Suit::Spades, 13), &table),
        [card(Suit::Hearts, 13)]
    );
    assert_eq!(
        possible_takes(card(Suit::Spades, 1), &[card(Suit::Diamonds, 1)]),
        [card(Suit::Diamonds, 1)]
    );
}

#[test]
fn a_card_cannot_be_counted_twice_in_a_sum() {
    // 5 + 5 would need two fives.
    let takes = possible_takes(card(Suit::Clubs, 10), &[card(Suit::Hearts, 5)]);
    assert!(takes.is_empty());

    let takes = possible_takes(
        card(Suit::Clubs, 10),
        &[card(Suit::Hearts, 5), card(Suit::Spades, 5)],
    );
    assert_eq!(takes.len(), 2);
}

#[test]
fn fixed_card_values() {
    assert_eq!(evaluate_cards_value(&[card(Suit::Diamonds, 10)]), 3);
    assert_eq!(
        evaluate_cards_value(&[card(Suit::Clubs, 1), card(Suit::Diamonds, 1)]),
        2
    );
    assert_eq!(
        evaluate_cards_value(&[
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 1),
        ]),
        6
    );
    assert_eq!(evaluate_cards_value(&[card(Suit::Hearts, 11)]), 1);
    assert_eq!(evaluate_cards_value(&[card(Suit::Hearts, 10)]), 0);
    assert_eq!(evaluate_cards_value(&[]), 0);
}

#[test]
fn strategy_prefers_the_first_capturing_card() {
    let table = [card(Suit::Spades, 4)];
    let hand = [
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 4),
    ];
    assert_eq!(choose_card(&hand, &table), Some(card(Suit::Clubs, 4)));

    let hand = [card(Suit::Hearts, 9), card(Suit::Clubs, 13)];
    assert_eq!(choose_card(&hand, &table), Some(card(Suit::Hearts, 9)));
    assert_eq!(choose_card(&[], &table), None);
}

#[test]
fn cards_display_rank_and_suit() {
    assert_eq!(card(Suit::Diamonds, 10).to_string(), "10♦");
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Clubs, 11).to_string(), "J♣");
    assert_eq!(card(Suit::Hearts, 13).to_string(), "K♥");
}
