//! Quest tracking: catalog, per-player log, and the accept/progress/claim
//! state machine fed by gameplay signals.

pub mod data;
pub mod logic;
pub mod types;

pub use logic::{
    accept_quest, apply_period_resets, claim_reward, quest_stats, raise_progress_to,
    record_progress, route_signal, ClaimError,
};
pub use types::{QuestKind, QuestLog, QuestRecord, QuestState, QuestStats};
