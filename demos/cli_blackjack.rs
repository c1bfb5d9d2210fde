//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{
    Bankroll, Card, EventKind, Game, GameOptions, LineActions, RoundOutcome, Suit, TableEvent,
    TableObserver,
};

struct Printer;

impl TableObserver for Printer {
    fn on_event(&mut self, event: &TableEvent<'_>) {
        match event.kind {
            EventKind::Dealt => {}
            EventKind::PlayerHit(_) => println!("Player hits.\n"),
            EventKind::PlayerDoubled(_) => println!("Player doubles down on a hit.\n"),
            EventKind::PlayerStood => println!("Player stands.\n"),
            EventKind::DealerRevealed => {}
            EventKind::DealerHit(_) => println!("Dealer hits.\n"),
            EventKind::Resolved(outcome) => {
                println!("{}\n", describe(outcome));
                return;
            }
        }

        let view = event.view;
        println!("Player: {} (value {})", format_cards(view.player), view.player_value());
        let mut dealer = format_cards(view.visible_dealer_cards());
        if view.dealer_concealed {
            dealer.push_str(" ??");
        }
        println!("Dealer: {dealer} (value {})\n", view.visible_dealer_value());
    }
}

const fn describe(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerBlackjack { .. } => "Player blackjack! Player wins.",
        RoundOutcome::PlayerBust => "Player busts.",
        RoundOutcome::DealerBlackjack | RoundOutcome::InsurancePaid => {
            "Dealer blackjack! Dealer wins."
        }
        RoundOutcome::DealerBust => "Dealer busts.",
        RoundOutcome::PlayerWin => "Player wins.",
        RoundOutcome::DealerWin => "Dealer wins.",
        RoundOutcome::Push => "It's a draw.",
        RoundOutcome::PlayerQuit => "Player quits.",
    }
}

fn main() {
    env_logger::init();
    println!("Welcome to blackjack.\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    println!("How much are you entering the table with?");
    let Some(pot) = prompt_usize("Enter pot amount: ", 1) else {
        return;
    };
    let mut bankroll = Bankroll::new(pot, &options);

    loop {
        println!("\nPot: {}\n", bankroll.pot());
        println!("Game is about to begin.");

        let bet = loop {
            let Some(amount) = prompt_usize("Enter bet amount: ", 0) else {
                return;
            };
            match bankroll.place_bet(amount) {
                Ok(bet) => break bet,
                Err(err) => println!("Bet error: {err}.\n"),
            }
        };
        println!();

        let actions = LineActions::new(io::stdin().lock(), io::stdout());
        let result = match game.play_round(bet, actions, Printer) {
            Ok(result) => result,
            Err(err) => {
                println!("Round aborted: {err}");
                return;
            }
        };

        let payout = result.payout();
        let delta = bankroll.settle(bet, payout);
        println!("Payout {} ({delta:+})", payout.multiplier());
        println!("Pot: {}\n", bankroll.pot());

        if bankroll.is_broke() {
            println!("Unfortunately you are out of funds. Go get some more and come back.");
            println!("Thanks for playing.");
            break;
        }

        let again = prompt_line("Play again? (enter 'y' or 'n'): ");
        if again.is_none_or(|answer| answer == "n") {
            println!("\nThanks for playing.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_usize(prompt: &str, min: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) if value >= min => return Some(value),
            _ => println!("Enter a valid number."),
        }
    }
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

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
