//! The game controller - sole mutator of match state.
//!
//! The controller owns every `RuntimePlayer`, validates each operation
//! against the current phase and the players' zones, and publishes what
//! happened on the event bus. Every rejection leaves state untouched and is
//! logged at the level its `ErrorKind` calls for.

use tracing::{debug, info};

use super::error::MatchError;
use crate::cards::{CardDefinition, RuntimeCard};
use crate::core::{
    Command, CommandRecord, EntityAllocator, EntityId, GameRng, MatchConfig, MatchPhase, PlayerId,
    PlayerMap,
};
use crate::effects::{BehaviourEngine, TargetResolver};
use crate::events::{EventBus, GameEvent};
use crate::players::{MatchSetup, RuntimePlayer};
use crate::zones::ZoneKind;

/// Runs the rules of one match.
#[derive(Debug)]
pub struct GameController {
    config: MatchConfig,
    bus: EventBus,
    phase: MatchPhase,
    players: PlayerMap<RuntimePlayer>,
    decklists: PlayerMap<Vec<CardDefinition>>,
    rngs: PlayerMap<GameRng>,
    allocator: EntityAllocator,
    decks_initialized: bool,
    history: Vec<CommandRecord>,
}

impl GameController {
    /// Create a controller with no players, in `Initializing`.
    #[must_use]
    pub fn new(config: MatchConfig, bus: EventBus) -> Self {
        Self {
            config,
            bus,
            phase: MatchPhase::Initializing,
            players: PlayerMap::new(),
            decklists: PlayerMap::new(),
            rngs: PlayerMap::new(),
            allocator: EntityAllocator::new(0),
            decks_initialized: false,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Set the phase. Driven by the state machine.
    pub fn set_phase(&mut self, phase: MatchPhase) {
        if self.phase != phase {
            debug!(from = %self.phase, to = %phase, "controller phase changed");
            self.phase = phase;
        }
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<RuntimePlayer> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&RuntimePlayer> {
        self.players.try_get(player)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn decks_initialized(&self) -> bool {
        self.decks_initialized
    }

    /// Successfully executed commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// Players whose health is above its minimum, in seat order.
    #[must_use]
    pub fn standing_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_standing())
            .map(|(id, _)| id)
            .collect()
    }

    /// Find which player and zone hold a card.
    #[must_use]
    pub fn locate_card(&self, card: EntityId) -> Option<(PlayerId, ZoneKind)> {
        self.players
            .iter()
            .find_map(|(id, p)| p.locate(card).map(|zone| (id, zone)))
    }

    /// Install one runtime player per profile, in seat order.
    ///
    /// Only allowed while `Initializing`, and only once. The setup is
    /// validated before anything is installed.
    pub fn install_players(&mut self, setup: &MatchSetup) -> Result<(), MatchError> {
        let result = self.install_players_inner(setup);
        Self::logged("install_players", result)
    }

    fn install_players_inner(&mut self, setup: &MatchSetup) -> Result<(), MatchError> {
        if self.phase != MatchPhase::Initializing {
            return Err(MatchError::IllegalPhase {
                operation: "install_players",
                phase: self.phase,
            });
        }
        if !self.players.is_empty() {
            return Err(MatchError::PlayersAlreadyInstalled);
        }
        setup.validate()?;

        let mut players = PlayerMap::new();
        for (seat, profile) in setup.players.iter().enumerate() {
            // validate() caps the seat count at u8::MAX.
            let id = PlayerId::new(seat as u8);
            players.push(RuntimePlayer::from_profile(id, profile)?);
        }

        let base = GameRng::new(self.config.seed);
        self.rngs = PlayerMap::from_fn(players.player_count(), |p| base.stream(p.index() as u64));
        self.decklists = PlayerMap::new();
        for profile in &setup.players {
            self.decklists.push(profile.deck.clone());
        }
        self.allocator = EntityAllocator::new(players.player_count());
        self.players = players;

        for (player, runtime) in self.players.iter() {
            info!(%player, name = runtime.name(), player_type = ?runtime.player_type(), "player added");
            self.bus.publish(&GameEvent::PlayerAdded {
                player,
                name: runtime.name().to_string(),
            });
        }
        Ok(())
    }

    /// Fill every player's deck with fresh card instances from their profile.
    pub fn fill_player_decks(&mut self) -> Result<(), MatchError> {
        let result = self.fill_player_decks_inner();
        Self::logged("fill_player_decks", result)
    }

    fn fill_player_decks_inner(&mut self) -> Result<(), MatchError> {
        self.require_in_match("fill_player_decks")?;
        if self.decks_initialized {
            return Err(MatchError::DecksAlreadyInitialized);
        }

        for (player, decklist) in self.decklists.iter() {
            let cards: Vec<RuntimeCard> = decklist
                .iter()
                .map(|def| RuntimeCard::from_definition(self.allocator.next_id(), def))
                .collect();
            let count = cards.len();

            self.players[player].zone_mut(ZoneKind::Deck).overwrite(cards)?;
            debug!(%player, cards = count, "deck filled");
            self.bus.publish(&GameEvent::ZoneOrderChanged {
                player,
                zone: ZoneKind::Deck,
            });
        }

        self.decks_initialized = true;
        Ok(())
    }

    /// Shuffle every player's deck with that player's RNG stream.
    pub fn shuffle_player_decks(&mut self) -> Result<(), MatchError> {
        let result = self.shuffle_player_decks_inner();
        Self::logged("shuffle_player_decks", result)
    }

    fn shuffle_player_decks_inner(&mut self) -> Result<(), MatchError> {
        self.require_in_match("shuffle_player_decks")?;
        if !self.decks_initialized {
            return Err(MatchError::DecksNotInitialized);
        }

        for (player, runtime) in self.players.iter_mut() {
            runtime.zone_mut(ZoneKind::Deck).shuffle(&mut self.rngs[player]);
            self.bus.publish(&GameEvent::ZoneOrderChanged {
                player,
                zone: ZoneKind::Deck,
            });
        }
        Ok(())
    }

    /// Draw until every hand is at capacity or its deck runs out.
    ///
    /// Returns the number of cards drawn across all players. Running out of
    /// cards is not an error.
    pub fn fill_player_hands(&mut self) -> Result<usize, MatchError> {
        let result = self.fill_player_hands_inner();
        Self::logged("fill_player_hands", result)
    }

    fn fill_player_hands_inner(&mut self) -> Result<usize, MatchError> {
        self.require_in_match("fill_player_hands")?;
        if !self.decks_initialized {
            return Err(MatchError::DecksNotInitialized);
        }

        let mut drawn = 0;
        let seats: Vec<PlayerId> = self.players.player_ids().collect();
        for player in seats {
            let missing = self
                .config
                .hand_slots
                .saturating_sub(self.players[player].zone(ZoneKind::Hand).count());

            for _ in 0..missing {
                match self.draw_card(player) {
                    Ok(_) => drawn += 1,
                    Err(err) => {
                        err.log("fill_player_hands");
                        break;
                    }
                }
            }
        }
        Ok(drawn)
    }

    /// Move the top card of the player's deck into their hand.
    ///
    /// Publishes `CardRemoved` (deck), `CardAdded` (hand), then `CardMoved`.
    pub fn try_draw_card(&mut self, player: PlayerId) -> Result<EntityId, MatchError> {
        let result = self.draw_card(player);
        Self::logged("draw_card", result)
    }

    fn draw_card(&mut self, player: PlayerId) -> Result<EntityId, MatchError> {
        self.require_in_match("draw_card")?;
        let slots = self.config.hand_slots;
        let runtime = self
            .players
            .try_get_mut(player)
            .ok_or(MatchError::UnknownPlayer(player))?;

        let card = runtime
            .zone(ZoneKind::Deck)
            .first()
            .map(RuntimeCard::id)
            .ok_or(MatchError::DeckEmpty(player))?;
        if runtime.zone(ZoneKind::Hand).count() >= slots {
            return Err(MatchError::HandFull { player, slots });
        }

        runtime.transfer_card(card, ZoneKind::Deck, ZoneKind::Hand, Some(slots))?;
        self.publish_move(player, card, ZoneKind::Deck, ZoneKind::Hand);
        Ok(card)
    }

    /// Use a card from the player's hand, optionally at an explicit target.
    ///
    /// Each behaviour is resolved and activated in order; the first one that
    /// finds no target or affects nothing fails the whole use and the card
    /// stays in hand. Behaviours that already applied are not undone. On
    /// success the card moves to the discard and the number of affected
    /// targets across all behaviours is returned.
    pub fn try_use_card(
        &mut self,
        player: PlayerId,
        card: EntityId,
        target: Option<EntityId>,
    ) -> Result<usize, MatchError> {
        let result = self.use_card(player, card, target);
        Self::logged("use_card", result)
    }

    fn use_card(
        &mut self,
        player: PlayerId,
        card: EntityId,
        target: Option<EntityId>,
    ) -> Result<usize, MatchError> {
        self.require_in_match("use_card")?;
        let runtime = self
            .players
            .try_get(player)
            .ok_or(MatchError::UnknownPlayer(player))?;
        let behaviours = runtime
            .zone(ZoneKind::Hand)
            .get(card)
            .map(|c| c.behaviours().to_vec())
            .ok_or(MatchError::CardNotInZone {
                player,
                card,
                zone: ZoneKind::Hand,
            })?;

        let mut affected = 0;
        for behaviour in &behaviours {
            let targets = TargetResolver::resolve(&self.players, player, behaviour.target_type(), target)?;
            if targets.is_empty() {
                return Err(MatchError::NoValidTarget {
                    card,
                    behaviour: behaviour.kind(),
                });
            }
            affected += BehaviourEngine::try_activate(behaviour, player, &targets, &mut self.players, &self.bus)?;
        }

        self.players[player].transfer_card(card, ZoneKind::Hand, ZoneKind::Discard, None)?;
        self.publish_move(player, card, ZoneKind::Hand, ZoneKind::Discard);
        info!(%player, %card, affected, "card used");
        Ok(affected)
    }

    /// Execute a command and record it on success.
    pub fn execute(&mut self, command: &Command) -> Result<(), MatchError> {
        let result = match command {
            Command::DrawCard { player } => self.try_draw_card(*player).map(|_| ()),
            Command::UseCard {
                player,
                card,
                target,
            } => self.try_use_card(*player, *card, *target).map(|_| ()),
        };
        result?;

        let sequence = self.history.len() as u32;
        debug!(verb = command.verb(), player = %command.player(), sequence, "command executed");
        self.history.push(CommandRecord::new(command.clone(), sequence));
        Ok(())
    }

    fn require_in_match(&self, operation: &'static str) -> Result<(), MatchError> {
        if self.phase == MatchPhase::InMatch {
            Ok(())
        } else {
            Err(MatchError::IllegalPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn publish_move(&self, player: PlayerId, card: EntityId, from: ZoneKind, to: ZoneKind) {
        self.bus.publish(&GameEvent::CardRemoved {
            player,
            zone: from,
            card,
        });
        self.bus.publish(&GameEvent::CardAdded {
            player,
            zone: to,
            card,
        });
        self.bus.publish(&GameEvent::CardMoved {
            player,
            card,
            from,
            to,
        });
    }

    fn logged<T>(operation: &'static str, result: Result<T, MatchError>) -> Result<T, MatchError> {
        if let Err(err) = &result {
            err.log(operation);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Behaviour, TargetType};
    use crate::controller::ErrorKind;
    use crate::players::{ComponentDefaults, PlayerProfile};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bolt() -> CardDefinition {
        CardDefinition::new("Bolt").with_behaviour(Behaviour::damage(50, TargetType::EnemyPlayers))
    }

    fn setup(deck_size: usize) -> MatchSetup {
        let components = ComponentDefaults::default().with_health(1000);
        MatchSetup::new(vec![
            PlayerProfile::new("Alice").with_components(components).with_card(bolt(), deck_size),
            PlayerProfile::new("Bob").with_components(components).with_card(bolt(), deck_size),
        ])
    }

    fn controller_in_match(deck_size: usize) -> GameController {
        let mut controller = GameController::new(MatchConfig::default(), EventBus::new());
        controller.install_players(&setup(deck_size)).unwrap();
        controller.set_phase(MatchPhase::InMatch);
        controller.fill_player_decks().unwrap();
        controller
    }

    #[test]
    fn test_operations_rejected_outside_match() {
        let mut controller = GameController::new(MatchConfig::default(), EventBus::new());
        controller.install_players(&setup(3)).unwrap();

        let err = controller.fill_player_decks().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert!(controller.player(PlayerId::new(0)).unwrap().zone(ZoneKind::Deck).is_empty());
    }

    #[test]
    fn test_install_twice_rejected() {
        let mut controller = GameController::new(MatchConfig::default(), EventBus::new());
        controller.install_players(&setup(1)).unwrap();

        assert_eq!(
            controller.install_players(&setup(1)),
            Err(MatchError::PlayersAlreadyInstalled)
        );
        assert_eq!(controller.player_count(), 2);
    }

    #[test]
    fn test_fill_decks_allocates_unique_ids() {
        let controller = controller_in_match(3);

        let alice = controller.player(PlayerId::new(0)).unwrap().zone(ZoneKind::Deck).ids().to_vec();
        let bob = controller.player(PlayerId::new(1)).unwrap().zone(ZoneKind::Deck).ids().to_vec();

        assert_eq!(alice, vec![EntityId(2), EntityId(3), EntityId(4)]);
        assert_eq!(bob, vec![EntityId(5), EntityId(6), EntityId(7)]);
        assert!(controller.decks_initialized());
    }

    #[test]
    fn test_fill_decks_twice_rejected() {
        let mut controller = controller_in_match(3);

        assert_eq!(controller.fill_player_decks(), Err(MatchError::DecksAlreadyInitialized));
    }

    #[test]
    fn test_shuffle_requires_filled_decks() {
        let mut controller = GameController::new(MatchConfig::default(), EventBus::new());
        controller.install_players(&setup(3)).unwrap();
        controller.set_phase(MatchPhase::InMatch);

        assert_eq!(controller.shuffle_player_decks(), Err(MatchError::DecksNotInitialized));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = controller_in_match(20);
        let mut b = controller_in_match(20);
        a.shuffle_player_decks().unwrap();
        b.shuffle_player_decks().unwrap();

        let deck = |c: &GameController| c.player(PlayerId::new(0)).unwrap().zone(ZoneKind::Deck).ids().to_vec();
        assert_eq!(deck(&a), deck(&b));
    }

    #[test]
    fn test_draw_publishes_in_order() {
        let mut controller = controller_in_match(3);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let _sub = controller.bus().subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let card = controller.try_draw_card(PlayerId::new(0)).unwrap();

        assert_eq!(card, EntityId(2));
        let player = PlayerId::new(0);
        assert_eq!(
            *log.borrow(),
            vec![
                GameEvent::CardRemoved {
                    player,
                    zone: ZoneKind::Deck,
                    card
                },
                GameEvent::CardAdded {
                    player,
                    zone: ZoneKind::Hand,
                    card
                },
                GameEvent::CardMoved {
                    player,
                    card,
                    from: ZoneKind::Deck,
                    to: ZoneKind::Hand
                },
            ]
        );
    }

    #[test]
    fn test_fill_hands_stops_at_capacity_or_empty_deck() {
        let mut controller = controller_in_match(7);

        assert_eq!(controller.fill_player_hands().unwrap(), 10);
        let alice = controller.player(PlayerId::new(0)).unwrap();
        assert_eq!(alice.zone(ZoneKind::Hand).count(), 5);
        assert_eq!(alice.zone(ZoneKind::Deck).count(), 2);

        let mut short = controller_in_match(2);
        assert_eq!(short.fill_player_hands().unwrap(), 4);
        assert!(short.player(PlayerId::new(1)).unwrap().zone(ZoneKind::Deck).is_empty());
    }

    #[test]
    fn test_draw_unknown_player() {
        let mut controller = controller_in_match(1);

        let err = controller.try_draw_card(PlayerId::new(4)).unwrap_err();

        assert_eq!(err, MatchError::UnknownPlayer(PlayerId::new(4)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_use_card_not_in_hand() {
        let mut controller = controller_in_match(2);

        // Still in the deck.
        let err = controller.try_use_card(PlayerId::new(0), EntityId(2), None).unwrap_err();

        assert!(matches!(err, MatchError::CardNotInZone { zone: ZoneKind::Hand, .. }));
        assert_eq!(controller.locate_card(EntityId(2)), Some((PlayerId::new(0), ZoneKind::Deck)));
    }

    #[test]
    fn test_use_card_records_history() {
        let mut controller = controller_in_match(2);
        let bob = PlayerId::new(1);
        controller.execute(&Command::draw(bob)).unwrap();
        let card = controller.player(bob).unwrap().zone(ZoneKind::Hand).ids()[0];

        controller.execute(&Command::use_card(bob, card)).unwrap();

        assert_eq!(controller.player(PlayerId::new(0)).unwrap().health(), Some(950));
        assert_eq!(controller.locate_card(card), Some((bob, ZoneKind::Discard)));
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.history()[1].sequence, 1);
    }

    #[test]
    fn test_failed_command_not_recorded() {
        let mut controller = controller_in_match(1);

        assert!(controller.execute(&Command::use_card(PlayerId::new(0), EntityId(99))).is_err());
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_standing_players() {
        let mut controller = controller_in_match(1);
        assert_eq!(controller.standing_players(), vec![PlayerId::new(0), PlayerId::new(1)]);

        controller.players[PlayerId::new(0)]
            .component_mut(crate::players::ComponentKind::Health)
            .unwrap()
            .set(0)
            .unwrap();

        assert_eq!(controller.standing_players(), vec![PlayerId::new(1)]);
    }
}
