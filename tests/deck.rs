//! Deck tests.

use bjcore::{CardSource, Card, DECK_SIZE, Deck, DeckError, RandomDeck, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn standard_deck_holds_every_card_once_in_fixed_order() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[DECK_SIZE - 1], Card::new(Suit::Spades, Rank::Ace));

    let mut sorted = deck.cards().to_vec();
    sorted.sort_by_key(|c| (c.suit, c.rank));
    sorted.dedup();
    assert_eq!(sorted.len(), DECK_SIZE);
    assert_eq!(deck, Deck::default());
}

#[test]
fn draws_shrink_deck_and_never_repeat() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::standard();
    let mut drawn = Vec::new();

    while !deck.is_empty() {
        let card = deck.draw(&mut rng).unwrap();
        assert!(!deck.contains(&card));
        assert!(!drawn.contains(&card));
        drawn.push(card);
        assert_eq!(deck.len() + drawn.len(), DECK_SIZE);
    }

    assert_eq!(deck.draw(&mut rng).unwrap_err(), DeckError::Empty);
}

#[test]
fn take_removes_a_specific_card_once() {
    let mut deck = Deck::standard();
    let ace = Card::new(Suit::Hearts, Rank::Ace);

    assert_eq!(deck.take(ace).unwrap(), ace);
    assert_eq!(deck.take(ace).unwrap_err(), DeckError::NotInDeck(ace));
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

#[test]
fn random_deck_is_reproducible_from_seed() {
    let mut a = RandomDeck::new(99);
    let mut b = RandomDeck::new(99);

    for _ in 0..DECK_SIZE {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
    assert!(a.deck().is_empty());
    assert_eq!(a.draw().unwrap_err(), DeckError::Empty);
}
