//! Session controller
//!
//! Owns the current session and is the only way to mutate it. The host calls
//! `tick()` once per scheduling quantum and `trigger()` for the single input
//! action, both from the same thread; `activate()`/`deactivate()` follow the
//! host's visibility signal.

use crate::sim::rng::{RngSource, seeded};
use crate::sim::snapshot::Snapshot;
use crate::sim::state::{Session, SessionMode, WorldParams};
use crate::sim::tick::{TickReport, tick};
use crate::tuning::{Tuning, TuningError};

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// No active session, or the runner was already airborne
    Ignored,
    /// Idle -> Running
    Started,
    /// Grounded runner jumped
    Jumped,
    /// GameOver -> fresh Running session
    Restarted,
}

pub struct SessionController {
    tuning: Tuning,
    rng: Box<dyn RngSource>,
    /// `None` while deactivated
    session: Option<Session>,
    /// Best score since the last `activate()`
    best_score: u32,
}

impl SessionController {
    /// Default tuning, seeded from OS entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Default tuning with a reproducible obstacle sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            tuning: Tuning::default(),
            rng: Box::new(seeded(seed)),
            session: None,
            best_score: 0,
        }
    }

    /// Custom tuning with a seeded RNG
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, seeded(seed))
    }

    /// Custom tuning and RNG source (e.g. a scripted one for replays)
    pub fn with_rng(
        tuning: Tuning,
        rng: impl RngSource + 'static,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            rng: Box::new(rng),
            session: None,
            best_score: 0,
        })
    }

    /// (Re)create a fresh Idle session and start accepting ticks/triggers
    pub fn activate(&mut self) {
        self.session = Some(Session::new(&self.tuning));
        self.best_score = 0;
        log::info!("Runner session activated");
    }

    /// Discard the session. Safe to call at any time.
    pub fn deactivate(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Runner session deactivated ({:?}, score {})",
                session.mode,
                session.score
            );
        }
        self.best_score = 0;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Dispatch the single input action
    pub fn trigger(&mut self) -> TriggerOutcome {
        let Some(session) = self.session.as_mut() else {
            return TriggerOutcome::Ignored;
        };

        match session.mode {
            SessionMode::Idle => {
                session.mode = SessionMode::Running;
                log::info!("Run started");
                TriggerOutcome::Started
            }
            SessionMode::Running => {
                let impulse = session.world.jump_impulse;
                if session.runner.jump(impulse) {
                    TriggerOutcome::Jumped
                } else {
                    TriggerOutcome::Ignored
                }
            }
            SessionMode::GameOver => {
                let mut fresh = Session::new(&self.tuning);
                fresh.mode = SessionMode::Running;
                *session = fresh;
                log::info!("Run restarted");
                TriggerOutcome::Restarted
            }
        }
    }

    /// Advance one step. No-op unless a session is Running.
    pub fn tick(&mut self) -> TickReport {
        let Some(session) = self.session.as_mut() else {
            return TickReport::default();
        };
        let report = tick(session, &mut *self.rng, &self.tuning);
        self.best_score = self.best_score.max(session.score);
        report
    }

    /// Read-only copy of the current session, `None` while deactivated
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session
            .as_ref()
            .map(|session| Snapshot::capture(session, self.best_score))
    }

    pub fn mode(&self) -> Option<SessionMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    /// Current difficulty parameters
    pub fn world(&self) -> Option<&WorldParams> {
        self.session.as_ref().map(|s| &s.world)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
