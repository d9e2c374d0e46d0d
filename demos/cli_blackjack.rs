//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::{Game, GameOptions, GameState, Hand, PlayerAction};
use log::error;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let min_bet = options.min_bet;
    let mut game = Game::new(options, seed);

    let player_id = match game.join(500) {
        Ok(id) => id,
        Err(err) => {
            error!("Join failed: {err}");
            return;
        }
    };

    loop {
        let money = game.get_money(player_id).unwrap_or(0);
        if usize::try_from(money).ok().is_none_or(|money| money < min_bet) {
            println!("You are out of money. Game over.");
            break;
        }

        if game.check_and_reshuffle() == Ok(true) {
            println!("Shoe reshuffled.");
        }

        if let Err(err) = game.start_betting() {
            error!("Betting could not start: {err}");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount ({min_bet}-{money}, 0 to quit): "))
        else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.bet(player_id, bet) {
            println!("Bet error: {err}");
            game.clear_round();
            continue;
        }

        if let Err(err) = game.deal() {
            error!("Deal failed: {err}");
            game.clear_round();
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game, player_id, true);

            let turn = game.current_turn();
            let options = match game.legal_actions(player_id, turn.hand_index) {
                Ok(options) => options,
                Err(err) => {
                    error!("Options failed: {err}");
                    break;
                }
            };

            let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
            let input = prompt_line(&format!("{}? ", labels.join(", ")));
            if input == "q" || input == "quit" {
                return;
            }

            let Some(action) = PlayerAction::from_key(&input) else {
                println!("Key {input} not recognised, try again.");
                continue;
            };

            if let Err(err) = game.act(player_id, turn.hand_index, action) {
                println!("Action error: {err}");
            }
        }

        if game.state() == GameState::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => error!("Dealer play failed: {err}"),
            }
        }

        if game.state() == GameState::RoundOver {
            match game.showdown() {
                Ok(result) => {
                    print_table(&game, player_id, false);
                    for player in result.players {
                        if player.player_id != player_id {
                            continue;
                        }
                        for hand in &player.hands {
                            println!("Hand {}: {}", hand.hand_index, hand.outcome);
                        }
                        println!("Net {:+}, money {}", player.net, player.money);
                    }
                }
                Err(err) => error!("Showdown failed: {err}"),
            }
        }

        game.clear_round();
    }
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, player_id: u8, masked: bool) {
    println!("\nShoe: {} cards remaining", game.cards_remaining());
    println!("Dealer: {}", game.dealer_hand().show(masked));

    let hands = game.get_hands(player_id).unwrap_or_default();
    let turn = game.current_turn();
    for (index, hand) in hands.iter().enumerate() {
        let marker = if masked && index == turn.hand_index {
            "*"
        } else {
            " "
        };
        println!("{marker} Hand {index}: {} | {}", hand, stake(hand));
    }
    println!();
}

fn stake(hand: &Hand) -> String {
    let bet = hand.bet().unwrap_or(0);
    if hand.is_from_split() {
        format!("stake {bet} (split)")
    } else {
        format!("stake {bet}")
    }
}
