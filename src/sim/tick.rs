//! Per-frame simulation step
//!
//! Order within a tick: input, player physics, spawner, pool (drift, expiry,
//! collision). A hazard contact moves the round to `Lost` and every later
//! update reports `Lost` until the state is reset.

use super::pool::{self, ObstaclePool};
use super::spawner::SpawnResult;
use super::state::{GameState, RoundOutcome, RunPhase};
use crate::consts::MAX_FRAME_DT;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Char(char),
    Other,
}

impl Key {
    /// Up arrow or `w`
    pub fn is_jump(&self) -> bool {
        matches!(self, Key::Up | Key::Char('w') | Key::Char('W'))
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Char('q') | Key::Char('Q'))
    }

    pub fn is_restart(&self) -> bool {
        matches!(self, Key::Char('r') | Key::Char('R'))
    }
}

/// Input event drained from the platform each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window/terminal close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Whether this event asks to leave the game
    pub fn is_quit_request(&self) -> bool {
        match self {
            InputEvent::Quit => true,
            InputEvent::KeyDown(key) => key.is_quit(),
            InputEvent::KeyUp(_) => false,
        }
    }
}

impl<P: ObstaclePool> GameState<P> {
    /// Advance the round by `dt` seconds with this frame's input
    pub fn update(&mut self, dt: f32, events: &[InputEvent]) -> RoundOutcome {
        if !self.is_running() {
            return self.outcome();
        }

        for event in events {
            self.handle_input(event);
            if !self.is_running() {
                return self.outcome();
            }
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        self.player.integrate(dt, self.tuning.gravity, &self.ground);

        match self.spawner.advance(dt, &mut self.pool) {
            SpawnResult::Idle => {}
            SpawnResult::Spawned => {
                self.stats.spawned += 1;
                log::debug!("Spawned obstacle ({} live)", self.pool.len());
            }
            SpawnResult::Dropped => self.stats.dropped_spawns += 1,
        }

        let report = pool::update(
            &mut self.pool,
            &mut self.drift,
            dt,
            self.player.rect(),
            &self.footprints,
        );
        self.stats.ticks += 1;
        self.stats.expired += report.expired;
        self.stats.collected += report.collected;
        if report.expired > 0 {
            log::debug!("Expired {} (total {})", report.expired, self.stats.expired);
        }
        if report.collected > 0 {
            log::debug!("Collected {} (total {})", report.collected, self.stats.collected);
        }

        if let Some(hazard) = report.hazard {
            log::debug!(
                "{} hit at x={} after {} ticks",
                hazard.kind.as_str(),
                hazard.x,
                self.stats.ticks
            );
            self.phase = RunPhase::Lost;
        }

        self.outcome()
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if event.is_quit_request() {
            self.phase = RunPhase::Quit;
            return;
        }
        match event {
            InputEvent::KeyDown(key) if key.is_jump() => {
                self.player.jump(&self.ground, self.tuning.jump_velocity);
                self.jump_held = true;
            }
            InputEvent::KeyUp(key) if key.is_jump() => {
                if self.jump_held {
                    self.player.cut_jump(&self.tuning.jump_cut);
                }
                self.jump_held = false;
            }
            _ => {}
        }
    }
}
