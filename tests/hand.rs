//! Hand evaluation tests.

use bjcore::{Card, Deck, DealerHand, Hand, HandError, HandStatus, Rank, Suit, classify, hand_value};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(rank, suit)| card(*suit, *rank))
        .collect()
}

#[rstest]
#[case(&[Rank::Ace, Rank::Ace], 12)]
#[case(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace], 14)]
#[case(&[Rank::Ace, Rank::King], 21)]
#[case(&[Rank::King, Rank::Queen], 20)]
#[case(&[Rank::Jack, Rank::Two, Rank::Three], 15)]
#[case(&[Rank::Five, Rank::Ace], 16)]
#[case(&[Rank::Ace, Rank::Five, Rank::Ace], 17)]
#[case(&[Rank::Nine, Rank::Ace, Rank::Ace], 21)]
#[case(&[Rank::Ace, Rank::Nine, Rank::Ten], 20)]
#[case(&[Rank::Ten, Rank::Ace, Rank::Ace], 22)] // first Ace takes 11 at a base of 10
#[case(&[Rank::Ten, Rank::Nine, Rank::Five], 24)]
#[case(&[], 0)]
fn hand_values(#[case] ranks: &[Rank], #[case] expected: u8) {
    assert_eq!(hand_value(&cards(ranks)), expected);
}

#[test]
fn long_ace_runs_saturate_instead_of_overflowing() {
    let aces = vec![card(Suit::Spades, Rank::Ace); 300];
    assert_eq!(hand_value(&aces), u8::MAX);
    assert_eq!(classify(&aces), HandStatus::Bust);
}

#[rstest]
#[case(20, HandStatus::Open)]
#[case(21, HandStatus::Win)]
#[case(22, HandStatus::Bust)]
#[case(2, HandStatus::Open)]
fn status_from_value(#[case] value: u8, #[case] expected: HandStatus) {
    assert_eq!(HandStatus::from_value(value), expected);
}

#[test]
fn classify_matches_value_for_random_hands() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..500 {
        let mut deck = Deck::standard();
        let mut hand = Hand::new();
        for _ in 0..11 {
            let status = hand.add_card(deck.draw(&mut rng).unwrap());
            let value = hand.value();
            let expected = if value == 21 {
                HandStatus::Win
            } else if value > 21 {
                HandStatus::Bust
            } else {
                HandStatus::Open
            };
            assert_eq!(status, expected);
            assert_eq!(classify(hand.cards()), expected);
            assert_eq!(hand.status(), hand.status());
        }
        assert_eq!(hand.len(), 11);
        hand.validate().unwrap();
    }
}

#[test]
fn hand_validation_rejects_empty_and_duplicates() {
    assert_eq!(Hand::new().validate().unwrap_err(), HandError::Empty);

    let twice = card(Suit::Hearts, Rank::Queen);
    let hand = Hand::from(vec![twice, card(Suit::Clubs, Rank::Two), twice]);
    assert_eq!(hand.validate().unwrap_err(), HandError::DuplicateCard(twice));

    let mut dealer = DealerHand::new();
    assert_eq!(dealer.validate().unwrap_err(), HandError::Empty);
    dealer.add_card(twice);
    dealer.add_card(twice);
    assert_eq!(dealer.validate().unwrap_err(), HandError::DuplicateCard(twice));
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    assert_eq!(dealer.add_card(card(Suit::Hearts, Rank::Ace)), HandStatus::Open);
    assert_eq!(dealer.add_card(card(Suit::Clubs, Rank::Six)), HandStatus::Open);

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.up_card(), Some(&card(Suit::Hearts, Rank::Ace)));
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert_eq!(dealer.len(), 2);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10H");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "AS");
    assert_eq!(card(Suit::Clubs, Rank::Queen).to_string(), "QC");
}
