//! Rule engine tests: values, hands, options, actions, dealer play, outcomes.

use bjrules::{
    ActionError, Card, DealError, DrawError, DrawSource, Hand, HandOutcome, ParseCardError,
    PlayerAction, Rank, Shoe, ShowdownError, Suit, Values, apply_action, hand_outcome,
    play_dealer, player_options,
};

fn card(id: &str) -> Card {
    id.parse().unwrap()
}

fn hand(bet: usize, ids: &[&str]) -> Hand {
    let mut hand = Hand::new(bet);
    for id in ids {
        hand.add_card(card(id));
    }
    hand
}

fn dealer(ids: &[&str]) -> Hand {
    let mut hand = Hand::dealer();
    for id in ids {
        hand.add_card(card(id));
    }
    hand
}

fn shoe(ids: &[&str]) -> Shoe {
    let cards: Vec<Card> = ids.iter().map(|id| card(id)).collect();
    Shoe::from_draws(&cards)
}

#[test]
fn rank_values() {
    assert_eq!(Values::from_rank(Rank::Ace), Values::from([1, 11]));
    for rank in &Rank::ALL[1..] {
        let expected = u16::from(rank.ordinal().min(10));
        assert_eq!(Values::from_rank(*rank), Values::from([expected]));
    }
    assert_eq!(Values::from_rank(Rank::Seven), Values::from([7]));
    assert_eq!(Values::from_rank(Rank::Queen), Values::from([10]));
}

#[test]
fn combine_laws() {
    let ace = Values::from_rank(Rank::Ace);
    let nine = Values::from_rank(Rank::Nine);
    let mixed = Values::from([3, 13]);

    assert_eq!(ace.combine(&nine), nine.combine(&ace));
    assert_eq!(
        ace.combine(&nine).combine(&mixed),
        ace.combine(&nine.combine(&mixed))
    );
    assert_eq!(Values::zero().combine(&mixed), mixed);
    assert_eq!(&ace + &ace, Values::from([2, 12, 22]));
}

#[test]
fn eligible_and_best_values() {
    let values = Values::from([12, 22]);
    assert_eq!(values.eligible(), Values::from([12]));
    assert_eq!(values.best_eligible(), Some(12));

    let bust = Values::from([22, 32]);
    assert!(bust.eligible().is_empty());
    assert_eq!(bust.best_eligible(), None);
    assert_eq!(bust.min(), Some(22));
    assert_eq!(bust.to_string(), "{22, 32}");
}

#[test]
fn hand_values_and_flags() {
    let empty = Hand::new(10);
    assert_eq!(empty.values(), Values::zero());

    let natural = hand(10, &["TC", "AH"]);
    assert_eq!(natural.values(), Values::from([11, 21]));
    assert!(natural.is_blackjack());
    assert!(!natural.is_bust());

    let bust = hand(10, &["TC", "TD", "2S"]);
    assert_eq!(bust.values(), Values::from([22]));
    assert!(bust.is_bust());
    assert!(bust.values().eligible().is_empty());
    assert_eq!(bust.best_value(), None);

    let three_card_21 = hand(10, &["7C", "7D", "7S"]);
    assert_eq!(three_card_21.best_value(), Some(21));
    assert!(!three_card_21.is_blackjack());

    let aces = hand(10, &["AC", "AD"]);
    assert_eq!(aces.values(), Values::from([2, 12, 22]));
    assert!(!aces.is_bust());
}

#[test]
fn hand_display() {
    assert_eq!(hand(10, &["TC", "AH"]).to_string(), "[T♣ A♥] {11, 21}");
    assert_eq!(hand(10, &["TC", "TD", "2S"]).show(false), "[T♣ T♦ 2♠] {22}");
    assert_eq!(dealer(&["AS", "9C"]).show(true), "[A♠ ??] {1, 11}");
}

#[test]
fn deal_draws_into_empty_hand_only() {
    let mut source = shoe(&["9H", "5C", "2D"]);
    let mut player = Hand::new(10);

    player.deal(&mut source, 2).unwrap();
    assert_eq!(player.cards(), [card("9H"), card("5C")]);
    assert_eq!(
        player.deal(&mut source, 2).unwrap_err(),
        DealError::AlreadyDealt
    );

    let mut other = Hand::new(10);
    assert_eq!(
        other.deal(&mut source, 2).unwrap_err(),
        DealError::Draw(DrawError::EmptyShoe)
    );
}

#[test]
fn options_for_pair() {
    let pair = hand(10, &["8C", "8H"]);

    assert_eq!(
        player_options(&pair, &card("6S"), 100),
        [
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::DoubleDown,
            PlayerAction::Split,
        ]
    );
    assert_eq!(
        player_options(&pair, &card("AS"), 100),
        [
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::DoubleDown,
            PlayerAction::Split,
            PlayerAction::TakeInsurance,
        ]
    );
}

#[test]
fn options_for_bust_hand_are_empty() {
    let bust = hand(10, &["TC", "TD", "2S"]);
    assert!(player_options(&bust, &card("AS"), 1_000).is_empty());
    assert!(player_options(&bust, &card("5S"), 0).is_empty());
}

#[test]
fn options_for_blackjack() {
    let natural = hand(10, &["TC", "AH"]);
    assert!(player_options(&natural, &card("9S"), 100).is_empty());
    assert_eq!(
        player_options(&natural, &card("AS"), 100),
        [
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::DoubleDown,
            PlayerAction::TakeInsurance,
        ]
    );
}

#[test]
fn options_gated_on_funds_and_shape() {
    let pair = hand(10, &["8C", "8H"]);
    assert_eq!(
        player_options(&pair, &card("AS"), 19),
        [
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::TakeInsurance
        ]
    );
    assert_eq!(
        player_options(&pair, &card("AS"), 14),
        [PlayerAction::Hit, PlayerAction::Stand]
    );

    let three_cards = hand(10, &["2C", "3H", "4D"]);
    assert_eq!(
        player_options(&three_cards, &card("AS"), 100),
        [PlayerAction::Hit, PlayerAction::Stand]
    );
}

#[test]
fn split_pair_of_tens() {
    let mut source = shoe(&["5C", "6D"]);
    let mut original = hand(10, &["TC", "TD"]);

    let sibling = apply_action(&mut original, PlayerAction::Split, &mut source)
        .unwrap()
        .unwrap();

    assert_eq!(original.cards(), [card("TC"), card("5C")]);
    assert_eq!(sibling.cards(), [card("TD"), card("6D")]);
    for split in [&original, &sibling] {
        assert!(split.is_active());
        assert!(split.is_from_split());
        assert_eq!(split.bet(), Some(10));
    }
}

#[test]
fn split_aces_finish_both_hands() {
    let mut source = shoe(&["KC", "9D"]);
    let mut original = hand(10, &["AC", "AD"]);

    let sibling = original.split(&mut source).unwrap();

    assert_eq!(original.len(), 2);
    assert_eq!(sibling.len(), 2);
    assert!(!original.is_active());
    assert!(!sibling.is_active());
}

#[test]
fn split_rejects_non_pairs() {
    let mut source = shoe(&["2C", "3C"]);

    let mut mixed = hand(10, &["TC", "9D"]);
    assert_eq!(mixed.split(&mut source).unwrap_err(), ActionError::CannotSplit);

    let mut three = hand(10, &["4C", "4D", "4H"]);
    assert_eq!(three.split(&mut source).unwrap_err(), ActionError::CannotSplit);
    assert_eq!(source.len(), 2);
}

#[test]
fn resolve_simple_actions() {
    let mut source = shoe(&["3C", "TH", "2S"]);

    let mut hit = hand(10, &["5C", "6D"]);
    assert_eq!(
        apply_action(&mut hit, PlayerAction::Hit, &mut source),
        Ok(None)
    );
    assert_eq!(hit.len(), 3);
    assert!(hit.is_active());

    let mut double = hand(10, &["5H", "6H"]);
    apply_action(&mut double, PlayerAction::DoubleDown, &mut source).unwrap();
    assert_eq!(double.best_value(), Some(21));
    assert!(!double.is_active());
    assert_eq!(double.bet(), Some(10));

    let mut stand = hand(10, &["TC", "7D"]);
    apply_action(&mut stand, PlayerAction::Stand, &mut source).unwrap();
    assert!(!stand.is_active());
    assert_eq!(
        apply_action(&mut stand, PlayerAction::Hit, &mut source).unwrap_err(),
        ActionError::HandNotActive
    );

    let mut insured = hand(10, &["TC", "AD"]);
    apply_action(&mut insured, PlayerAction::TakeInsurance, &mut source).unwrap();
    assert!(!insured.is_active());
    assert_eq!(insured.len(), 2);

    assert_eq!(source.len(), 1);
}

#[test]
fn hit_on_empty_shoe_fails() {
    let mut source = Shoe::from_draws(&[]);
    let mut player = hand(10, &["5C", "6D"]);
    assert_eq!(
        player.hit(&mut source).unwrap_err(),
        ActionError::Draw(DrawError::EmptyShoe)
    );
    assert_eq!(player.len(), 2);
}

#[test]
fn dealer_draws_to_seventeen() {
    let mut source = shoe(&["3C", "TC", "9D"]);
    let mut house = dealer(&["2C", "AD"]);
    assert_eq!(house.values(), Values::from([3, 13]));

    let drawn = play_dealer(&mut house, &mut source).unwrap();

    assert_eq!(drawn, [card("3C"), card("TC")]);
    assert!(house.values().max().unwrap() >= 17);
    assert!(!house.is_active());
    assert_eq!(source.len(), 1);
}

#[test]
fn dealer_stands_on_blackjack() {
    let mut source = shoe(&["3C"]);
    let mut house = dealer(&["TS", "AH"]);

    assert!(play_dealer(&mut house, &mut source).unwrap().is_empty());
    assert!(house.is_blackjack());
}

#[test]
fn dealer_requires_initial_two_cards() {
    let mut source = shoe(&["3C"]);
    let mut house = dealer(&["2C", "3D", "4H"]);
    assert_eq!(
        play_dealer(&mut house, &mut source).unwrap_err(),
        ShowdownError::DealerNotDealt
    );

    let mut short = dealer(&["5C", "5D"]);
    assert_eq!(
        play_dealer(&mut short, &mut Shoe::from_draws(&[])).unwrap_err(),
        ShowdownError::Draw(DrawError::EmptyShoe)
    );
}

#[test]
fn outcomes() {
    let seventeen = dealer(&["TS", "7S"]);

    assert_eq!(
        hand_outcome(&hand(10, &["TC", "7C"]), &seventeen),
        HandOutcome::Draw
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "AC"]), &seventeen),
        HandOutcome::Win
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "TD", "2C"]), &seventeen),
        HandOutcome::Lose
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "AC"]), &dealer(&["AS", "TD"])),
        HandOutcome::Draw
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "8C"]), &seventeen),
        HandOutcome::Win
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "6C"]), &seventeen),
        HandOutcome::Lose
    );
}

#[test]
fn outcome_precedence() {
    let dealer_bust = dealer(&["TS", "6S", "9D"]);
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "2C"]), &dealer_bust),
        HandOutcome::Win
    );
    assert_eq!(
        hand_outcome(&hand(10, &["TC", "5C", "9C"]), &dealer_bust),
        HandOutcome::Lose
    );

    let dealer_natural = dealer(&["KS", "AS"]);
    assert_eq!(
        hand_outcome(&hand(10, &["7C", "7D", "7H"]), &dealer_natural),
        HandOutcome::Lose
    );
}

#[test]
fn settlement() {
    let mut money = 100;
    HandOutcome::Win.apply(&mut money, 10);
    assert_eq!(money, 110);
    HandOutcome::Lose.apply(&mut money, 10);
    assert_eq!(money, 100);
    HandOutcome::Draw.apply(&mut money, 10);
    assert_eq!(money, 100);
    assert_eq!(HandOutcome::Lose.delta(10), -10);
}

#[test]
fn settlement_applies_full_loss_below_zero() {
    let mut money = 5;
    HandOutcome::Lose.apply(&mut money, 10);
    assert_eq!(money, -5);
    HandOutcome::Win.apply(&mut money, 10);
    assert_eq!(money, 5);
}

#[test]
fn negative_funds_only_allow_hit_and_stand() {
    let pair = hand(10, &["8C", "8D"]);
    assert_eq!(
        player_options(&pair, &card("AS"), -10),
        [PlayerAction::Hit, PlayerAction::Stand]
    );
}

#[test]
fn card_identifiers() {
    assert_eq!(card("TC"), Card::new(Suit::Clubs, Rank::Ten));
    assert_eq!(card("AS").to_string(), "A♠");
    assert_eq!("T".parse::<Card>(), Err(ParseCardError::InvalidLength));
    assert_eq!("XC".parse::<Card>(), Err(ParseCardError::InvalidRank('X')));
    assert_eq!("TX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
    assert_eq!(PlayerAction::from_key("sp"), Some(PlayerAction::Split));
}

#[test]
fn shoe_draws_and_takes() {
    let mut full = Shoe::new(1, 7);
    assert_eq!(full.len(), 52);

    let ace = card("AS");
    assert_eq!(full.take(ace), Ok(ace));
    assert_eq!(full.take(ace), Err(DrawError::CardNotFound));
    assert_eq!(full.len(), 51);

    let drawn = full.draw().unwrap();
    assert_ne!(drawn, ace);
    assert_eq!(full.len(), 50);

    let mut again = Shoe::new(1, 7);
    assert_eq!(again.draw(), Shoe::new(1, 7).draw());
}
