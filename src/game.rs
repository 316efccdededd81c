//! Frame driver
//!
//! Once per display frame: apply queued input, step the engine, draw, and
//! mirror the score to the HUD when it changed. The loop keeps running after
//! the match ends so a restart picks up without re-entering it.

use rand_pcg::Pcg32;

use crate::platform::{InputEvent, InputQueue};
use crate::sim::{Engine, GameState, RandomSource, Score, Side};
use crate::tuning::Tuning;

/// Draws a frame from read-only state
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Read-only mirror of the score (DOM elements on the web)
pub trait ScoreBoard {
    fn show_score(&mut self, score: Score);
    /// `None` hides the banner
    fn show_winner(&mut self, winner: Option<Side>);
}

/// Owns the engine and the input queue
pub struct GameLoop<R: RandomSource = Pcg32> {
    engine: Engine<R>,
    input: InputQueue,
    /// Last values pushed to the score board
    shown_score: Option<Score>,
    shown_winner: Option<Option<Side>>,
    frames: u64,
}

impl GameLoop<Pcg32> {
    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        log::info!("New match, seed {}", seed);
        Self::new(Engine::seeded(tuning, seed))
    }
}

impl<R: RandomSource> GameLoop<R> {
    pub fn new(engine: Engine<R>) -> Self {
        Self {
            engine,
            input: InputQueue::new(),
            shown_score: None,
            shown_winner: None,
            frames: 0,
        }
    }

    /// Queue an input for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame
    pub fn frame(&mut self, renderer: &mut impl Renderer, hud: &mut impl ScoreBoard) {
        for event in self.input.drain() {
            match event {
                InputEvent::SetPlayerTarget(y) => self.engine.set_player_target(y),
                InputEvent::Restart => self.engine.restart(),
            }
        }

        self.engine.step();
        renderer.draw(self.engine.state());
        self.sync_hud(hud);
        self.frames += 1;
    }

    fn sync_hud(&mut self, hud: &mut impl ScoreBoard) {
        let state = self.engine.state();
        if self.shown_score != Some(state.score) {
            hud.show_score(state.score);
            self.shown_score = Some(state.score);
        }
        let winner = state.winner();
        if self.shown_winner != Some(winner) {
            hud.show_winner(winner);
            self.shown_winner = Some(winner);
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn engine_mut(&mut self) -> &mut Engine<R> {
        &mut self.engine
    }

    /// Frames run so far, including frozen game-over frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
