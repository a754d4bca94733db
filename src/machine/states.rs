//! Match states.
//!
//! One handler per `MatchPhase`. Each handler registers its own listeners on
//! `enter` and drops them on `exit`, so it only reacts to events while it is
//! the current state. Listeners only set flags; `update` acts on them.

use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;
use std::time::Duration;

use tracing::{info, warn};

use super::loader::MatchLoader;
use crate::controller::GameController;
use crate::core::{MatchOutcome, MatchPhase, MatchState};
use crate::events::{GameEvent, Subscription};
use crate::players::ComponentKind;

/// Everything the states act on.
#[derive(Debug)]
pub struct MatchContext {
    pub controller: GameController,
    pub timer: MatchState,
    pub outcome: Option<MatchOutcome>,
}

impl MatchContext {
    #[must_use]
    pub fn new(controller: GameController, timer: MatchState) -> Self {
        Self {
            controller,
            timer,
            outcome: None,
        }
    }

    /// Record and announce the result.
    fn decide(&mut self, outcome: MatchOutcome) {
        info!(%outcome, "match decided");
        self.outcome = Some(outcome);
        self.controller
            .bus()
            .publish(&GameEvent::MatchDecided { outcome });
    }
}

/// Behaviour of one match phase.
pub trait MatchStateHandler {
    /// The phase this handler runs.
    fn phase(&self) -> MatchPhase;

    /// Called after the controller has switched to this phase.
    fn enter(&mut self, _from: Option<MatchPhase>, _ctx: &mut MatchContext) {}

    /// Called before the controller leaves this phase.
    fn exit(&mut self, _to: MatchPhase, _ctx: &mut MatchContext) {}

    /// Per-tick work. Returns the next phase when a transition is due.
    fn update(&mut self, ctx: &mut MatchContext, dt: Duration) -> Option<MatchPhase>;
}

/// Waits for match setup, then installs the players.
pub struct Initializing {
    loader: Option<Box<dyn MatchLoader>>,
}

impl Initializing {
    #[must_use]
    pub fn new(loader: Box<dyn MatchLoader>) -> Self {
        Self {
            loader: Some(loader),
        }
    }
}

impl MatchStateHandler for Initializing {
    fn phase(&self) -> MatchPhase {
        MatchPhase::Initializing
    }

    fn update(&mut self, ctx: &mut MatchContext, _dt: Duration) -> Option<MatchPhase> {
        let loader = self.loader.as_mut()?;
        let loaded = match loader.poll_load() {
            Poll::Pending => return None,
            Poll::Ready(result) => result,
        };
        self.loader = None;

        let installed = loaded
            .map_err(Into::into)
            .and_then(|setup| ctx.controller.install_players(&setup));

        match installed {
            Ok(()) => Some(MatchPhase::InMatch),
            Err(err) => {
                warn!(error = %err, "match setup failed");
                ctx.decide(MatchOutcome::Aborted);
                Some(MatchPhase::GameOver)
            }
        }
    }
}

/// The match is running: commands are accepted and the timer advances.
#[derive(Default)]
pub struct InMatch {
    pause_requested: Rc<Cell<bool>>,
    defeat_signalled: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl InMatch {
    fn deal_opening_hands(ctx: &mut MatchContext) {
        let controller = &mut ctx.controller;
        let dealt = controller
            .fill_player_decks()
            .and_then(|()| controller.shuffle_player_decks())
            .and_then(|()| controller.fill_player_hands());

        match dealt {
            Ok(drawn) => info!(players = controller.player_count(), drawn, "opening hands dealt"),
            Err(err) => warn!(error = %err, "opening deal incomplete"),
        }
    }

    /// Outcome once at most one player is standing.
    fn check_victory(controller: &GameController) -> Option<MatchOutcome> {
        match controller.standing_players().as_slice() {
            [] => Some(MatchOutcome::Draw),
            [winner] if controller.player_count() > 1 => Some(MatchOutcome::Winner(*winner)),
            _ => None,
        }
    }
}

impl MatchStateHandler for InMatch {
    fn phase(&self) -> MatchPhase {
        MatchPhase::InMatch
    }

    fn enter(&mut self, from: Option<MatchPhase>, ctx: &mut MatchContext) {
        let pause = Rc::clone(&self.pause_requested);
        let defeat = Rc::clone(&self.defeat_signalled);
        self.subscriptions.push(ctx.controller.bus().subscribe(move |event| match event {
            GameEvent::PauseToggled => pause.set(true),
            GameEvent::ComponentAtMinimum {
                kind: ComponentKind::Health,
                ..
            } => defeat.set(true),
            _ => {}
        }));

        if from == Some(MatchPhase::Initializing) {
            Self::deal_opening_hands(ctx);
        }
    }

    fn exit(&mut self, _to: MatchPhase, _ctx: &mut MatchContext) {
        self.subscriptions.clear();
        self.pause_requested.set(false);
        self.defeat_signalled.set(false);
    }

    /// Settles a pending defeat, then a pause request. The timer only
    /// advances on ticks that stay in the match.
    fn update(&mut self, ctx: &mut MatchContext, dt: Duration) -> Option<MatchPhase> {
        if self.defeat_signalled.take() {
            if let Some(outcome) = Self::check_victory(&ctx.controller) {
                ctx.decide(outcome);
                return Some(MatchPhase::GameOver);
            }
        }

        if self.pause_requested.take() {
            return Some(MatchPhase::Paused);
        }

        if let Some(elapsed) = ctx.timer.tick(dt) {
            ctx.controller
                .bus()
                .publish(&GameEvent::MatchTimerTick { elapsed });
        }
        None
    }
}

/// The match is suspended. The timer does not advance.
#[derive(Default)]
pub struct Paused {
    resume_requested: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl MatchStateHandler for Paused {
    fn phase(&self) -> MatchPhase {
        MatchPhase::Paused
    }

    fn enter(&mut self, _from: Option<MatchPhase>, ctx: &mut MatchContext) {
        let resume = Rc::clone(&self.resume_requested);
        self.subscriptions.push(ctx.controller.bus().subscribe(move |event| {
            if *event == GameEvent::PauseToggled {
                resume.set(true);
            }
        }));
    }

    fn exit(&mut self, _to: MatchPhase, _ctx: &mut MatchContext) {
        self.subscriptions.clear();
        self.resume_requested.set(false);
    }

    fn update(&mut self, _ctx: &mut MatchContext, _dt: Duration) -> Option<MatchPhase> {
        self.resume_requested.take().then_some(MatchPhase::InMatch)
    }
}

/// Terminal.
#[derive(Default)]
pub struct GameOver;

impl MatchStateHandler for GameOver {
    fn phase(&self) -> MatchPhase {
        MatchPhase::GameOver
    }

    fn enter(&mut self, _from: Option<MatchPhase>, ctx: &mut MatchContext) {
        let elapsed_ms = u64::try_from(ctx.timer.elapsed().as_millis()).unwrap_or(u64::MAX);
        match ctx.outcome {
            Some(outcome) => info!(%outcome, elapsed_ms, "game over"),
            None => info!(elapsed_ms, "game over without a result"),
        }
    }

    fn update(&mut self, _ctx: &mut MatchContext, _dt: Duration) -> Option<MatchPhase> {
        None
    }
}
