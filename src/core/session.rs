//! The per-frame simulation loop for one play session.
//!
//! A [`GameSession`] is an explicit, serializable state struct: bird,
//! obstacle deque, counters, phase. One `advance_frame` call per rendered
//! frame, in a fixed order: background scroll, pipe movement/scoring/cleanup,
//! spawn check, collision check, out-of-bounds check. Every frame returns the
//! events it produced; nothing in here touches presentation state.

use super::collision::{check_collision, out_of_bounds, CollisionOutcome};
use super::constants::*;
use super::events::{QuestSignal, SimEvent};
use super::spawner::{can_spawn, spawn_obstacle};
use super::types::{BirdState, GamePhase, ObstaclePair, PhysicsTuning};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// State for one play session, owned by the driver loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Opaque player identity (wallet address), fixed at creation.
    pub identity: String,
    pub phase: GamePhase,
    pub bird: BirdState,
    /// Active pairs in spawn order, which is also left-to-right screen order.
    /// Mutated only by the spawner (append) and cleanup (pop front).
    pub obstacles: VecDeque<ObstaclePair>,
    pub score: u32,
    /// Monotonic within a session; difficulty is recomputed from this.
    pub pipes_passed: u32,
    /// Cosmetic scroll position, wraps at the field width.
    pub background_offset: f64,
    pub tuning: PhysicsTuning,
    /// Selected cosmetics; presentation only.
    pub equipped_bird: Option<String>,
    pub equipped_pipe: Option<String>,
}

impl GameSession {
    /// Create a session in the [`GamePhase::Ready`] phase. Identity is passed
    /// in up front; the simulation never asks anyone for player data later.
    pub fn new(identity: impl Into<String>, tuning: PhysicsTuning) -> Self {
        Self {
            identity: identity.into(),
            phase: GamePhase::Ready,
            bird: BirdState::new(),
            obstacles: VecDeque::new(),
            score: 0,
            pipes_passed: 0,
            background_offset: 0.0,
            tuning,
            equipped_bird: None,
            equipped_pipe: None,
        }
    }

    /// Difficulty level, recomputed from the passed counter so it can never
    /// drift. Feeds only the spawner formulas.
    pub fn difficulty_level(&self) -> u32 {
        self.pipes_passed / PIPES_PER_LEVEL
    }

    /// Start (or restart) play. The bird is recreated, not reset, and the
    /// obstacle sequence is rebuilt from scratch; no state survives from a
    /// previous run.
    pub fn start(&mut self) -> Vec<SimEvent> {
        self.bird = BirdState::new();
        self.obstacles.clear();
        self.score = 0;
        self.pipes_passed = 0;
        self.phase = GamePhase::Running;
        vec![SimEvent::Quest(QuestSignal::GameStart)]
    }

    /// Flap input. Sets (not adds) upward velocity; ignored outside play.
    pub fn flap(&mut self) {
        if self.phase == GamePhase::Running {
            self.bird.velocity = self.tuning.flap_force;
        }
    }

    /// One update pass. See the module docs for the fixed stage order.
    pub fn advance_frame<R: Rng>(&mut self, rng: &mut R) -> Vec<SimEvent> {
        let mut events = Vec::new();

        // Background scrolls in every phase, including the start screen.
        self.background_offset = (self.background_offset + BACKGROUND_SPEED) % PLAY_WIDTH;

        if self.phase != GamePhase::Running {
            return events;
        }

        self.step_bird();
        self.update_obstacles(&mut events);
        self.try_spawn(rng);

        let hit = check_collision(&self.bird, &self.obstacles) != CollisionOutcome::None;
        if hit || out_of_bounds(&self.bird) {
            self.finish(&mut events);
        }

        events
    }

    /// Force the terminal transition, e.g. from a forfeit. Idempotent: a
    /// session that is already over produces no further events.
    pub fn force_game_over(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        self.finish(&mut events);
        events
    }

    fn step_bird(&mut self) {
        self.bird.velocity += self.tuning.gravity * FRAME_DT;
        self.bird.y += self.bird.velocity * FRAME_DT;
        self.bird.rotation = (self.bird.velocity * 0.1).clamp(-90.0, 90.0);
    }

    fn update_obstacles(&mut self, events: &mut Vec<SimEvent>) {
        for pair in &mut self.obstacles {
            pair.x -= self.tuning.pipe_speed;

            // Score exactly once, when the pair's left edge passes the bird.
            if !pair.scored && pair.x <= self.bird.x {
                pair.scored = true;
                self.score += 1;
                self.pipes_passed += 1;
                events.push(SimEvent::ScoreChanged { score: self.score });
                events.push(SimEvent::Quest(QuestSignal::ScoreAchieved {
                    score: self.score,
                }));
            }
        }

        while matches!(self.obstacles.front(), Some(p) if p.x < PIPE_DESPAWN_X) {
            self.obstacles.pop_front();
        }
    }

    fn try_spawn<R: Rng>(&mut self, rng: &mut R) {
        if !can_spawn(self.obstacles.len()) {
            return;
        }
        let last_x = self.obstacles.back().map(|p| p.x);
        let pair = spawn_obstacle(self.difficulty_level(), last_x, rng);
        self.obstacles.push_back(pair);
    }

    /// Single funnel for every terminal condition. Fires at most once per
    /// session even when several conditions hold in the same frame.
    fn finish(&mut self, events: &mut Vec<SimEvent>) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::Over;
        self.bird.alive = false;
        self.bird.velocity = 0.0;

        events.push(SimEvent::GameOver {
            score: self.score,
            pipes_passed: self.pipes_passed,
            difficulty_level: self.difficulty_level(),
        });
        events.push(SimEvent::Quest(QuestSignal::GameEnd {
            score: self.score,
            pipes_passed: self.pipes_passed,
        }));
    }
}
