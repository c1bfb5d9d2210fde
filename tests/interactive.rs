//! Line-based action source tests.

use std::io::Cursor;

use bjcore::{
    Action, ActionError, ActionSource, Card, GameOptions, LineActions, Rank, Round, RoundOutcome,
    ScriptedActions, StackedDeck, Suit, TableView,
};

const EMPTY_VIEW: TableView<'static> = TableView {
    player: &[],
    dealer: &[],
    dealer_concealed: true,
};

#[test]
fn reprompts_until_an_allowed_action_arrives() {
    let mut source = LineActions::new(Cursor::new("x\nd\n  HIT \n"), Vec::new());

    let action = source.next_action(&EMPTY_VIEW, &Action::FOLLOW_UP).unwrap();
    assert_eq!(action, Action::Hit);

    let (_, output) = source.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("press h to hit, s to stand, q to quit.").count(), 3);
    assert!(!output.contains("double down"));
}

#[test]
fn opening_prompt_offers_double_down() {
    let mut source = LineActions::new(Cursor::new("double\n"), Vec::new());

    let action = source.next_action(&EMPTY_VIEW, &Action::OPENING).unwrap();
    assert_eq!(action, Action::DoubleDown);

    let (_, output) = source.into_inner();
    assert!(String::from_utf8(output).unwrap().contains("d to double down"));
}

#[test]
fn end_of_input_closes_the_source() {
    let mut source = LineActions::new(Cursor::new("nonsense\n"), Vec::new());
    assert_eq!(
        source.next_action(&EMPTY_VIEW, &Action::OPENING).unwrap_err(),
        ActionError::InputClosed
    );
}

#[test]
fn insurance_answer_accepts_yes() {
    let mut source = LineActions::new(Cursor::new("Y\nno\n"), Vec::new());
    assert!(source.take_insurance(&EMPTY_VIEW, 10).unwrap());
    assert!(!source.take_insurance(&EMPTY_VIEW, 10).unwrap());

    let (_, output) = source.into_inner();
    assert!(String::from_utf8(output).unwrap().contains("Purchase insurance for $5?"));
}

#[test]
fn plays_a_round_from_typed_lines() {
    let round = Round::new(
        StackedDeck::new(&[
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Diamonds, Rank::Three),
            Card::new(Suit::Clubs, Rank::Ten),
            Card::new(Suit::Spades, Rank::Seven),
            Card::new(Suit::Hearts, Rank::Ten),
        ]),
        10,
        GameOptions::default(),
    );
    let source = LineActions::new(Cursor::new("h\nd\ns\n"), Vec::new());

    let result = round.play(source).unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerWin);
    assert_eq!(result.player_value, 15);
}

#[test]
fn scripted_tokens_parse_like_typed_ones() {
    let script = ScriptedActions::parse("h, H  stand q").unwrap();
    assert_eq!(
        script.remaining().iter().copied().collect::<Vec<_>>(),
        vec![Action::Hit, Action::Hit, Action::Stand, Action::Quit]
    );
    assert_eq!(
        ScriptedActions::parse("h split").unwrap_err(),
        ActionError::UnknownToken
    );
}
