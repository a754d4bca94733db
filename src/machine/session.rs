//! Match session - the composition root of one match.
//!
//! A `MatchSession` wires the event bus, controller, match timer and state
//! machine together and is the single path through which the host drives a
//! match: `tick` once per frame, `execute` for player commands,
//! `toggle_pause` for pause input.

use std::time::Duration;

use super::loader::MatchLoader;
use super::state_machine::MatchStateMachine;
use super::states::MatchContext;
use crate::controller::{GameController, MatchError};
use crate::core::{Command, MatchConfig, MatchOutcome, MatchPhase, MatchState};
use crate::events::{EventBus, GameEvent};

/// One match, from setup loading to game over.
///
/// ```
/// use std::time::Duration;
/// use rust_ccg_match::cards::{Behaviour, CardDefinition, TargetType};
/// use rust_ccg_match::core::{MatchConfig, MatchPhase};
/// use rust_ccg_match::machine::{MatchSession, ReadyLoader};
/// use rust_ccg_match::players::{MatchSetup, PlayerProfile};
///
/// let bolt = CardDefinition::new("Bolt").with_behaviour(Behaviour::damage(5, TargetType::EnemyPlayers));
/// let setup = MatchSetup::new(vec![
///     PlayerProfile::new("Alice").with_card(bolt.clone(), 10),
///     PlayerProfile::new("Bob").with_card(bolt, 10),
/// ]);
///
/// let mut session = MatchSession::new(MatchConfig::default(), ReadyLoader::new(setup));
/// assert_eq!(session.tick(Duration::from_millis(16)), MatchPhase::InMatch);
/// ```
#[derive(Debug)]
pub struct MatchSession {
    bus: EventBus,
    context: MatchContext,
    machine: MatchStateMachine,
}

impl MatchSession {
    /// Start a match on a fresh bus.
    #[must_use]
    pub fn new(config: MatchConfig, loader: impl MatchLoader + 'static) -> Self {
        Self::with_bus(config, EventBus::new(), loader)
    }

    /// Start a match on an existing bus, so listeners registered beforehand
    /// see the initial `StateEntered` and every `PlayerAdded`.
    #[must_use]
    pub fn with_bus(config: MatchConfig, bus: EventBus, loader: impl MatchLoader + 'static) -> Self {
        let timer = MatchState::new(config.timer_interval());
        let controller = GameController::new(config, bus.clone());
        let mut context = MatchContext::new(controller, timer);
        let mut machine = MatchStateMachine::new(loader);
        machine.start(&mut context);

        Self {
            bus,
            context,
            machine,
        }
    }

    /// Advance the match by `dt` and return the phase afterwards.
    pub fn tick(&mut self, dt: Duration) -> MatchPhase {
        self.machine.update(&mut self.context, dt);
        self.machine.phase()
    }

    /// Execute a player command.
    pub fn execute(&mut self, command: &Command) -> Result<(), MatchError> {
        self.context.controller.execute(command)
    }

    /// Publish pause input. Takes effect on the next tick.
    pub fn toggle_pause(&self) {
        self.bus.publish(&GameEvent::PauseToggled);
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.machine.phase()
    }

    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    #[must_use]
    pub fn controller(&self) -> &GameController {
        &self.context.controller
    }

    /// The result, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.context.outcome
    }

    /// Match time advanced while in `InMatch`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.context.timer.elapsed()
    }
}
