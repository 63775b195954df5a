//! Frame loop
//!
//! Owns the backend and the game state. Each frame drains input, advances
//! the simulation by the measured clock delta, and renders. Presentation is
//! the only thing that paces the loop.

use std::io;
use std::path::Path;

use crate::error::SetupError;
use crate::platform::{Platform, Renderer};
use crate::renderer::{Sprites, render_frame};
use crate::sim::{FreeListPool, GameState, InputEvent, ObstaclePool, RoundOutcome};

pub struct FrameLoop<B: Platform, P: ObstaclePool = FreeListPool> {
    backend: B,
    state: GameState<P>,
    sprites: Sprites<<B as Renderer>::Texture>,
    events: Vec<InputEvent>,
    last_millis: u64,
}

impl<B: Platform, P: ObstaclePool> FrameLoop<B, P> {
    /// Load the sprites from `asset_dir` and take ownership of the state
    pub fn new(mut backend: B, state: GameState<P>, asset_dir: &Path) -> Result<Self, SetupError> {
        let sprites = Sprites::load(&mut backend, asset_dir)?;
        let last_millis = backend.now_millis();
        Ok(Self {
            backend,
            state,
            sprites,
            events: Vec::new(),
            last_millis,
        })
    }

    pub fn state(&self) -> &GameState<P> {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One frame: input, update, render
    pub fn frame(&mut self) -> io::Result<RoundOutcome> {
        self.events.clear();
        while let Some(event) = self.backend.poll_event() {
            self.events.push(event);
        }

        let now = self.backend.now_millis();
        let dt = now.saturating_sub(self.last_millis) as f32 / 1000.0;
        self.last_millis = now;

        let outcome = self.state.update(dt, &self.events);
        render_frame(&mut self.backend, &self.state, &self.sprites)?;
        Ok(outcome)
    }

    /// Run frames until the round is lost or the player quits
    pub fn run_round(&mut self) -> io::Result<RoundOutcome> {
        log::info!("Round start ({} pool)", P::STRATEGY);
        self.last_millis = self.backend.now_millis();

        loop {
            let outcome = self.frame()?;
            if outcome == RoundOutcome::Running {
                continue;
            }

            let stats = &self.state.stats;
            log::info!(
                "Round over ({:?}): {} ticks, {} spawned, {} collected, {} expired, {} spawns dropped",
                outcome,
                stats.ticks,
                stats.spawned,
                stats.collected,
                stats.expired,
                stats.dropped_spawns
            );
            return Ok(outcome);
        }
    }

    /// Hold the game-over frame until the player restarts (true) or quits
    pub fn await_restart(&mut self) -> io::Result<bool> {
        loop {
            while let Some(event) = self.backend.poll_event() {
                if event.is_quit_request() {
                    return Ok(false);
                }
                if let InputEvent::KeyDown(key) = event {
                    if key.is_restart() {
                        self.state.reset();
                        return Ok(true);
                    }
                }
            }
            render_frame(&mut self.backend, &self.state, &self.sprites)?;
        }
    }

    /// Play rounds until the player quits
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.run_round()? {
                RoundOutcome::Lost => {
                    if !self.await_restart()? {
                        return Ok(());
                    }
                }
                RoundOutcome::Quit | RoundOutcome::Running => return Ok(()),
            }
        }
    }
}
