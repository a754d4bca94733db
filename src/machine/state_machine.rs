//! The match state machine.
//!
//! Owns one handler per phase and drives transitions:
//!
//! ```text
//! Initializing -> InMatch     setup loaded and installed
//! Initializing -> GameOver    setup failed (outcome Aborted)
//! InMatch      -> Paused      pause toggled
//! Paused       -> InMatch     pause toggled
//! InMatch      -> GameOver    at most one player standing
//! ```
//!
//! Around every change the machine calls `exit` on the old handler,
//! publishes `StateExited`, switches the controller's phase, calls `enter`
//! on the new handler and publishes `StateEntered`.

use std::time::Duration;

use tracing::info;

use super::loader::MatchLoader;
use super::states::{GameOver, InMatch, Initializing, MatchContext, MatchStateHandler, Paused};
use crate::core::MatchPhase;
use crate::events::GameEvent;

/// Sequences match phases.
pub struct MatchStateMachine {
    phase: MatchPhase,
    started: bool,
    initializing: Initializing,
    in_match: InMatch,
    paused: Paused,
    game_over: GameOver,
}

impl MatchStateMachine {
    /// Create a machine that will load its setup from `loader`.
    #[must_use]
    pub fn new(loader: impl MatchLoader + 'static) -> Self {
        Self {
            phase: MatchPhase::Initializing,
            started: false,
            initializing: Initializing::new(Box::new(loader)),
            in_match: InMatch::default(),
            paused: Paused::default(),
            game_over: GameOver,
        }
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Enter the initial state. Later calls do nothing.
    pub fn start(&mut self, ctx: &mut MatchContext) {
        if self.started {
            return;
        }
        self.started = true;

        ctx.controller.set_phase(self.phase);
        self.handler(self.phase).enter(None, ctx);
        ctx.controller.bus().publish(&GameEvent::StateEntered {
            phase: self.phase,
            from: None,
        });
        info!(phase = %self.phase, "state machine started");
    }

    /// Run one tick of the current state and apply any transition it asks for.
    pub fn update(&mut self, ctx: &mut MatchContext, dt: Duration) {
        self.start(ctx);
        if let Some(next) = self.handler(self.phase).update(ctx, dt) {
            self.transition(next, ctx);
        }
    }

    /// Move to `to`. Transitions to the current phase and transitions out of
    /// `GameOver` are ignored.
    pub fn transition(&mut self, to: MatchPhase, ctx: &mut MatchContext) {
        let from = self.phase;
        if from == to || from.is_terminal() {
            return;
        }

        self.handler(from).exit(to, ctx);
        ctx.controller
            .bus()
            .publish(&GameEvent::StateExited { phase: from, to });

        ctx.controller.set_phase(to);
        self.phase = to;

        self.handler(to).enter(Some(from), ctx);
        ctx.controller.bus().publish(&GameEvent::StateEntered {
            phase: to,
            from: Some(from),
        });
        info!(%from, %to, "state changed");
    }

    fn handler(&mut self, phase: MatchPhase) -> &mut dyn MatchStateHandler {
        match phase {
            MatchPhase::Initializing => &mut self.initializing,
            MatchPhase::InMatch => &mut self.in_match,
            MatchPhase::Paused => &mut self.paused,
            MatchPhase::GameOver => &mut self.game_over,
        }
    }
}

impl std::fmt::Debug for MatchStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchStateMachine")
            .field("phase", &self.phase)
            .field("started", &self.started)
            .finish()
    }
}
