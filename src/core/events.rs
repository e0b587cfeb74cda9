//! Outbound simulation events.
//!
//! Each frame the session produces a sequence of [`SimEvent`]s; the
//! presentation layer drains it. The simulation never queries presentation
//! state, and quest bookkeeping consumes only the [`QuestSignal`] variants.

/// Signals the quest tracker subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestSignal {
    /// A play session started.
    GameStart,
    /// The running score reached `score` (emitted once per point).
    ScoreAchieved { score: u32 },
    /// The session ended with this final tally.
    GameEnd { score: u32, pipes_passed: u32 },
    /// The final score beat the stored personal best. Emitted by the caller
    /// that owns the persisted high score, not by the simulation.
    HighScore { score: u32 },
    /// A cosmetic purchase was recorded.
    CosmeticPurchased { cosmetic_id: String },
}

/// One event produced by a frame update (or by the surrounding app layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// Score changed; carries the new value.
    ScoreChanged { score: u32 },
    /// Terminal transition. Guaranteed to appear at most once per session.
    GameOver {
        score: u32,
        pipes_passed: u32,
        difficulty_level: u32,
    },
    /// Quest-relevant signal, routed to the quest tracker.
    Quest(QuestSignal),
}
