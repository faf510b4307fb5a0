//! Play-transaction atomicity.
//!
//! A rejected `play_card` must leave hand, board, power, and deck exactly
//! as they were before the call - no partially applied transaction is
//! ever observable.

use card_duel::{
    ActionError, CardCollection, CardDefinition, CardId, CardRegistry, PlayerId, Session,
    SessionConfig,
};

/// Everything observable about one player's state.
#[derive(Debug, PartialEq)]
struct Snapshot {
    hand: Vec<CardId>,
    board: Vec<CardId>,
    power: i64,
    deck_size: usize,
}

fn snapshot(session: &Session, player: PlayerId) -> Snapshot {
    Snapshot {
        hand: session.hand(player).to_vec(),
        board: session.board(player).to_vec(),
        power: session.power(player),
        deck_size: session.deck_size(player),
    }
}

fn session_with(cost: i64, power: i64, slots: usize) -> Session {
    let mut registry = CardRegistry::new();
    let mut collection = CardCollection::new("Atomicity Set");
    for id in 0..8 {
        registry.register(
            CardDefinition::new(CardId::new(id), format!("Card {id}")).with_cost(cost),
        );
        collection.add(CardId::new(id));
    }

    let mut session = Session::begin(
        registry,
        &collection,
        SessionConfig::new()
            .starting_hand_size(4)
            .max_board_slots(slots)
            .starting_power(power)
            .seed(42),
    )
    .unwrap();
    session.finish_setup();
    session
}

#[test]
fn test_zone_full_changes_nothing() {
    let mut session = session_with(0, 0, 2);

    let hand: Vec<CardId> = session.hand(PlayerId::One).to_vec();
    session.play_card(PlayerId::One, hand[0]).unwrap();
    session.play_card(PlayerId::One, hand[1]).unwrap();

    let before = snapshot(&session, PlayerId::One);
    let opponent_before = snapshot(&session, PlayerId::Two);

    assert_eq!(
        session.play_card(PlayerId::One, hand[2]),
        Err(ActionError::ZoneFull { limit: 2 })
    );

    assert_eq!(snapshot(&session, PlayerId::One), before);
    assert_eq!(snapshot(&session, PlayerId::Two), opponent_before);
}

#[test]
fn test_insufficient_funds_changes_nothing() {
    let mut session = session_with(5, 3, 7);
    let card = session.hand(PlayerId::One)[0];

    let before = snapshot(&session, PlayerId::One);

    assert_eq!(
        session.play_card(PlayerId::One, card),
        Err(ActionError::InsufficientFunds {
            cost: 5,
            available: 3
        })
    );

    assert_eq!(snapshot(&session, PlayerId::One), before);
}

#[test]
fn test_card_not_in_hand_changes_nothing() {
    let mut session = session_with(0, 10, 7);

    // A card the opponent holds is not in player one's hand
    let foreign = session.hand(PlayerId::Two)[0];
    let before = snapshot(&session, PlayerId::One);
    let opponent_before = snapshot(&session, PlayerId::Two);

    assert_eq!(
        session.play_card(PlayerId::One, foreign),
        Err(ActionError::CardNotInHand)
    );

    assert_eq!(snapshot(&session, PlayerId::One), before);
    assert_eq!(snapshot(&session, PlayerId::Two), opponent_before);
}

#[test]
fn test_rejections_emit_no_events() {
    let mut session = session_with(5, 3, 7);
    let card = session.hand(PlayerId::One)[0];
    session.drain_events();

    let _ = session.play_card(PlayerId::One, card);

    assert!(session.drain_events().is_empty());
}

#[test]
fn test_affordability_checked_before_any_mutation() {
    // Cost exactly equal to the balance succeeds and drains it
    let mut session = session_with(3, 3, 7);
    let card = session.hand(PlayerId::One)[0];

    assert!(session.play_card(PlayerId::One, card).is_ok());
    assert_eq!(session.power(PlayerId::One), 0);

    // A second play is now rejected with nothing moved
    let next = session.hand(PlayerId::One)[0];
    let before = snapshot(&session, PlayerId::One);

    assert_eq!(
        session.play_card(PlayerId::One, next),
        Err(ActionError::InsufficientFunds {
            cost: 3,
            available: 0
        })
    );
    assert_eq!(snapshot(&session, PlayerId::One), before);
}
