//! The session: one card duel from setup to reset.
//!
//! A `Session` is an explicit context object owning every component of one
//! game: per-player decks, hands, boards, power pools, the turn
//! controller, the RNG, and the event log. There is no global instance;
//! callers hold the session and pass it where it is needed.
//!
//! ## Setup phase
//!
//! `Session::begin` validates configuration, builds and shuffles the
//! decks, and leaves the initial deal *pending*. The deal is a sequence of
//! explicit suspension points: each `step_setup` call deals exactly one
//! card, so a presentation layer can await one deal animation per step.
//! `finish_setup` drains the sequence for callers that want an instant
//! logical deal. Until the sequence completes, turn actions are rejected
//! (`SetupNotComplete`) and end-turn requests are no-ops.
//!
//! ## Action model
//!
//! Single-threaded and cooperative: every mutation happens synchronously
//! inside one method call, and each call either completes its full effect
//! or changes nothing.

use std::collections::VecDeque;

use crate::cards::{CardCollection, CardDefinition, CardId, CardRegistry};
use crate::core::{ActionError, GameRng, GameRngState, PlayerId, PlayerPair, SetupError};
use crate::zones::{Board, Deck, Hand};

use super::config::SessionConfig;
use super::events::{EventLog, StateEvent};
use super::power::PowerPool;
use super::turn::{TurnController, TurnState};

/// Result of one setup step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupStep {
    /// One card was dealt; more steps may remain.
    Dealt { player: PlayerId, card: CardId },
    /// The initial deal has completed; turn actions are accepted.
    Complete,
}

/// A running card duel.
pub struct Session {
    registry: CardRegistry,
    config: SessionConfig,

    decks: PlayerPair<Deck>,
    hands: PlayerPair<Hand>,
    boards: PlayerPair<Board>,
    power: PlayerPair<PowerPool>,

    turn: TurnController,
    rng: GameRng,
    events: EventLog,

    /// Remaining deal steps, front first. Empty once setup completes.
    pending_deal: VecDeque<PlayerId>,
}

impl Session {
    /// Begin a session: validate the collection, build and shuffle both
    /// decks, and enter the setup phase with the initial deal pending.
    ///
    /// Both players draw from the same base collection, each with an
    /// independently shuffled copy. Missing or empty configuration aborts
    /// session creation rather than proceeding with degraded state.
    pub fn begin(
        registry: CardRegistry,
        collection: &CardCollection,
        config: SessionConfig,
    ) -> Result<Self, SetupError> {
        collection.validate(&registry)?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut events = EventLog::new();
        let mut decks =
            PlayerPair::new(|_| Deck::from_cards(collection.cards().iter().copied()));

        for player in PlayerId::both() {
            decks[player].shuffle(&mut rng);
            events.record(StateEvent::DeckShuffled {
                player,
                deck_size: decks[player].len(),
            });
        }

        // Deal alternately, first player first
        let mut pending_deal = VecDeque::new();
        for _ in 0..config.starting_hand_size {
            pending_deal.push_back(config.first_player);
            pending_deal.push_back(config.first_player.opponent());
        }

        Ok(Self {
            turn: TurnController::new(config.first_player),
            decks,
            hands: PlayerPair::with_default(),
            boards: PlayerPair::new(|_| {
                Board::new(config.max_board_slots, config.board_spacing)
            }),
            power: PlayerPair::new(|_| PowerPool::new(config.starting_power)),
            rng,
            events,
            pending_deal,
            registry,
            config,
        })
    }

    // === Setup phase ===

    /// Perform one setup step: deal a single card to the next player in
    /// the deal order.
    ///
    /// A deck running out during the deal ends that player's share early
    /// without error. Once the last card is dealt, setup completes: the
    /// turn gate opens and the first turn starts. Calling again after
    /// completion returns `Complete`.
    pub fn step_setup(&mut self) -> SetupStep {
        if self.turn.is_ready() {
            return SetupStep::Complete;
        }

        while let Some(player) = self.pending_deal.pop_front() {
            match self.decks[player].draw_top() {
                Ok(card) => {
                    self.hands[player].add(card);
                    let hand_index = self.hands[player].len() - 1;
                    self.events.record(StateEvent::CardDealt {
                        player,
                        card,
                        hand_index,
                    });
                    if self.pending_deal.is_empty() {
                        self.complete_setup();
                    }
                    return SetupStep::Dealt { player, card };
                }
                Err(_) => {
                    // Short deck: drop this player's remaining deals
                    self.pending_deal.retain(|&p| p != player);
                }
            }
        }

        self.complete_setup();
        SetupStep::Complete
    }

    /// Drain all remaining setup steps: an instant logical deal.
    pub fn finish_setup(&mut self) {
        while self.step_setup() != SetupStep::Complete {}
    }

    fn complete_setup(&mut self) {
        if self.turn.is_ready() {
            return;
        }
        self.turn.mark_ready();
        self.events.record(StateEvent::SetupCompleted);

        // First turn starts with replenishment but no extra draw: the
        // opening hand is exactly `starting_hand_size` cards.
        let active = self.turn.active();
        self.refill_power(active);
        self.events.record(StateEvent::TurnStarted {
            player: active,
            turn: self.turn.turn_number(),
        });
    }

    // === Turn actions ===

    /// End the active player's turn.
    ///
    /// Before setup completes this is a no-op and returns `false`. After,
    /// it flips the active player, runs the new player's turn-start hook
    /// (draw one card - an empty deck is tolerated - then replenish power
    /// per policy), and returns `true`.
    pub fn end_turn(&mut self) -> bool {
        let previous = self.turn.active();
        let previous_turn = self.turn.turn_number();

        let Some(next) = self.turn.end_turn() else {
            return false;
        };

        self.events.record(StateEvent::TurnEnded {
            player: previous,
            turn: previous_turn,
        });

        // Turn-start hook
        if let Ok(card) = self.decks[next].draw_top() {
            self.hands[next].add(card);
            self.events.record(StateEvent::CardDrawn { player: next, card });
            self.events.record(StateEvent::HandRelaid {
                player: next,
                count: self.hands[next].len(),
            });
        }
        self.refill_power(next);

        self.events.record(StateEvent::TurnStarted {
            player: next,
            turn: self.turn.turn_number(),
        });
        true
    }

    /// Play a card from a player's hand to their board.
    ///
    /// The whole move is one transaction: validation (setup complete, card
    /// in hand, board space, affordability) precedes any mutation, and the
    /// mutations (pay cost, remove from hand, place on board) then all
    /// apply. On any error the session is unchanged.
    ///
    /// Returns the assigned board slot index.
    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<usize, ActionError> {
        if !self.turn.is_ready() {
            return Err(ActionError::SetupNotComplete);
        }
        if !self.hands[player].contains(card) {
            return Err(ActionError::CardNotInHand);
        }
        if self.boards[player].is_full() {
            return Err(ActionError::ZoneFull {
                limit: self.boards[player].max_slots(),
            });
        }
        // Hand cards were validated against the registry at session start
        let cost = self
            .registry
            .get(card)
            .map(|def| def.cost)
            .ok_or(ActionError::CardNotInHand)?;
        if !self.power[player].can_afford(cost) {
            return Err(ActionError::InsufficientFunds {
                cost,
                available: self.power[player].balance(),
            });
        }

        // All checks passed; none of the following can fail.
        self.power[player].pay(cost)?;
        self.hands[player].remove(card);
        let slot = self.boards[player].play(card)?;

        self.events.record(StateEvent::PowerPaid {
            player,
            cost,
            remaining: self.power[player].balance(),
        });
        self.events.record(StateEvent::CardPlayed { player, card, slot });
        self.events.record(StateEvent::HandRelaid {
            player,
            count: self.hands[player].len(),
        });
        self.events.record(StateEvent::BoardRelaid {
            player,
            count: self.boards[player].len(),
        });

        Ok(slot)
    }

    /// Draw one card from a player's deck into their hand.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<CardId, ActionError> {
        if !self.turn.is_ready() {
            return Err(ActionError::SetupNotComplete);
        }

        let card = self.decks[player].draw_top()?;
        self.hands[player].add(card);

        self.events.record(StateEvent::CardDrawn { player, card });
        self.events.record(StateEvent::HandRelaid {
            player,
            count: self.hands[player].len(),
        });
        Ok(card)
    }

    /// Remove a card from a player's board, compacting the slots.
    ///
    /// Returns `false` when the card is not on the board; a double
    /// removal must not corrupt other state.
    pub fn remove_from_board(&mut self, player: PlayerId, card: CardId) -> bool {
        if !self.boards[player].remove(card) {
            return false;
        }
        self.events.record(StateEvent::CardRemoved { player, card });
        self.events.record(StateEvent::BoardRelaid {
            player,
            count: self.boards[player].len(),
        });
        true
    }

    fn refill_power(&mut self, player: PlayerId) {
        if let Some(balance) = self.power[player].refill(self.config.refill) {
            self.events
                .record(StateEvent::PowerRefilled { player, balance });
        }
    }

    // === Queries ===

    /// Has the initial shuffle-and-deal completed?
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.turn.is_ready()
    }

    /// The current turn state.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    /// The active player.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number()
    }

    /// A player's hand, in hand order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardId] {
        self.hands[player].cards()
    }

    /// A player's board, in slot order.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &[CardId] {
        self.boards[player].cards()
    }

    /// A player's political power balance.
    #[must_use]
    pub fn power(&self, player: PlayerId) -> i64 {
        self.power[player].balance()
    }

    /// Cards left in a player's deck.
    #[must_use]
    pub fn deck_size(&self, player: PlayerId) -> usize {
        self.decks[player].len()
    }

    /// Centered presentation offsets for a player's board, in slot order.
    #[must_use]
    pub fn board_offsets(&self, player: PlayerId) -> Vec<f32> {
        self.boards[player].offsets()
    }

    /// Centered presentation offsets for a player's hand, in hand order.
    #[must_use]
    pub fn hand_offsets(&self, player: PlayerId) -> Vec<f32> {
        self.hands[player].offsets(self.config.hand_spacing)
    }

    /// Look up a card definition.
    #[must_use]
    pub fn definition(&self, card: CardId) -> Option<&CardDefinition> {
        self.registry.get(card)
    }

    /// The card registry backing this session.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Snapshot of the RNG state, for replay and debugging.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        self.events.drain_pending()
    }

    /// The full ordered event history.
    #[must_use]
    pub fn event_history(&self) -> impl Iterator<Item = &StateEvent> {
        self.events.history().iter()
    }
}
