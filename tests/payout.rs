//! Payout table and bankroll tests.

use bjcore::{
    Bankroll, BetError, GameOptions, Multiplier, Payout, RoundOutcome, RoundingMode, resolve,
};
use rstest::rstest;

#[rstest]
#[case(RoundOutcome::PlayerBlackjack { drawn: false }, false, 1)]
#[case(RoundOutcome::PlayerBlackjack { drawn: true }, false, 3)]
#[case(RoundOutcome::PlayerBlackjack { drawn: true }, true, 4)]
#[case(RoundOutcome::PlayerBust, false, -1)]
#[case(RoundOutcome::PlayerBust, true, -2)]
#[case(RoundOutcome::DealerBlackjack, false, -1)]
#[case(RoundOutcome::DealerBlackjack, true, -2)]
#[case(RoundOutcome::DealerBust, false, 1)]
#[case(RoundOutcome::DealerBust, true, 2)]
#[case(RoundOutcome::PlayerWin, false, 1)]
#[case(RoundOutcome::PlayerWin, true, 2)]
#[case(RoundOutcome::DealerWin, false, -1)]
#[case(RoundOutcome::DealerWin, true, -2)]
#[case(RoundOutcome::Push, false, 0)]
#[case(RoundOutcome::Push, true, 0)]
#[case(RoundOutcome::InsurancePaid, false, -3)]
#[case(RoundOutcome::PlayerQuit, false, 0)]
fn outcome_codes(#[case] outcome: RoundOutcome, #[case] doubled: bool, #[case] code: i8) {
    assert_eq!(resolve(outcome, doubled, false).code(), code);
}

#[test]
fn insurance_flag_leaves_later_outcomes_alone() {
    // Only the insurance check itself settles as -3.
    assert_eq!(resolve(RoundOutcome::InsurancePaid, false, true), Payout::INSURANCE_LOSS);
    assert_eq!(resolve(RoundOutcome::DealerBlackjack, false, true), Payout::LOSS);
    assert_eq!(resolve(RoundOutcome::DealerBlackjack, true, true), Payout::DOUBLE_LOSS);
    assert_eq!(resolve(RoundOutcome::PlayerWin, false, true), Payout::WIN);
    assert_eq!(resolve(RoundOutcome::DealerWin, false, true), Payout::LOSS);
}

#[rstest]
#[case(0, 0, "0")]
#[case(1, 2, "+1")]
#[case(-1, -2, "-1")]
#[case(2, 4, "+2")]
#[case(-2, -4, "-2")]
#[case(3, 3, "+1.5")]
#[case(4, 6, "+3")]
#[case(-3, -3, "-1.5")]
fn payout_multipliers(#[case] code: i8, #[case] halves: i16, #[case] shown: &str) {
    let payout = Payout::from_code(code).unwrap();
    assert_eq!(payout.code(), code);
    assert_eq!(payout.multiplier(), Multiplier::from_halves(halves));
    assert_eq!(payout.multiplier().to_string(), shown);
}

#[test]
fn unknown_codes_are_rejected() {
    assert_eq!(Payout::from_code(5), None);
    assert_eq!(Payout::from_code(-4), None);
    assert_eq!(Multiplier::ZERO.halves(), 0);
}

#[test]
fn bets_are_validated_against_pot_and_minimum() {
    let options = GameOptions::default().with_min_bet(5);
    let bankroll = Bankroll::new(50, &options);

    assert_eq!(bankroll.place_bet(0), Err(BetError::BelowMinimum));
    assert_eq!(bankroll.place_bet(4), Err(BetError::BelowMinimum));
    assert_eq!(bankroll.place_bet(51), Err(BetError::InsufficientFunds));
    assert_eq!(bankroll.place_bet(50), Ok(50));
    assert_eq!(bankroll.pot(), 50);
}

#[test]
fn settlement_applies_multiplier_to_bet() {
    let options = GameOptions::default();
    let mut bankroll = Bankroll::new(100, &options);

    assert_eq!(bankroll.settle(10, Payout::WIN), 10);
    assert_eq!(bankroll.pot(), 110);
    assert_eq!(bankroll.settle(10, Payout::DOUBLE_LOSS), -20);
    assert_eq!(bankroll.pot(), 90);
    assert_eq!(bankroll.settle(10, Payout::DOUBLE_BLACKJACK), 30);
    assert_eq!(bankroll.settle(10, Payout::INSURANCE_LOSS), -15);
    assert_eq!(bankroll.settle(10, Payout::NONE), 0);
    assert_eq!(bankroll.pot(), 105);
}

#[rstest]
#[case(RoundingMode::Down, 7)]
#[case(RoundingMode::Up, 8)]
#[case(RoundingMode::Nearest, 8)]
fn fractional_settlement_uses_rounding_mode(#[case] mode: RoundingMode, #[case] expected: isize) {
    let options = GameOptions::default().with_rounding(mode);
    let mut bankroll = Bankroll::new(20, &options);

    assert_eq!(bankroll.settle(5, Payout::BLACKJACK), expected);
    assert_eq!(bankroll.settle(5, Payout::INSURANCE_LOSS), -expected);
    assert_eq!(bankroll.pot(), 20);
}

#[test]
fn losses_beyond_pot_empty_it() {
    let mut bankroll = Bankroll::new(10, &GameOptions::default());
    assert_eq!(bankroll.settle(10, Payout::DOUBLE_LOSS), -20);
    assert_eq!(bankroll.pot(), 0);
    assert!(bankroll.is_broke());
}
