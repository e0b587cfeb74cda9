//! Quest records and the per-player quest log.

use serde::{Deserialize, Serialize};

/// Scheduling class of a quest. Daily and weekly quests reset when their
/// period rolls over; achievements never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Daily,
    Weekly,
    Achievement,
}

/// Lifecycle state derived from the three flags. The flags are what gets
/// persisted; the state is a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestState {
    Locked,
    Accepted,
    Completed,
    Claimed,
}

/// One trackable objective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: QuestKind,
    pub reward_lamports: u64,
    /// Clamped to `target`; non-decreasing until the next period reset.
    pub progress: u32,
    pub target: u32,
    /// Progress only accrues once the quest is accepted.
    pub accepted: bool,
    /// Set exactly once, on the update that reaches the target.
    pub completed: bool,
    /// Set only after reward issuance succeeds.
    pub claimed: bool,
    pub icon: String,
    /// Unix seconds of the last mutation.
    pub last_updated: i64,
}

impl QuestRecord {
    pub fn state(&self) -> QuestState {
        if self.claimed {
            QuestState::Claimed
        } else if self.completed {
            QuestState::Completed
        } else if self.accepted {
            QuestState::Accepted
        } else {
            QuestState::Locked
        }
    }

    /// Force back to initial values (period rollover).
    pub fn reset(&mut self, now: i64) {
        self.progress = 0;
        self.accepted = false;
        self.completed = false;
        self.claimed = false;
        self.last_updated = now;
    }
}

/// All quests for one player, plus the period keys guarding resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestLog {
    pub quests: Vec<QuestRecord>,
    /// Calendar-day key (`YYYY-MM-DD`) of the last daily reset.
    pub last_daily_key: Option<String>,
    /// ISO-week Monday key of the last weekly reset.
    pub last_weekly_key: Option<String>,
}

impl Default for QuestLog {
    fn default() -> Self {
        Self {
            quests: super::data::default_quests(),
            last_daily_key: None,
            last_weekly_key: None,
        }
    }
}

impl QuestLog {
    pub fn get(&self, id: &str) -> Option<&QuestRecord> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut QuestRecord> {
        self.quests.iter_mut().find(|q| q.id == id)
    }
}

/// Summary numbers for the quest panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestStats {
    pub total: usize,
    pub completed: usize,
    pub claimed: usize,
    /// Lamports claimable right now (completed, unclaimed).
    pub claimable_lamports: u64,
    /// Lamports already paid out.
    pub claimed_lamports: u64,
}
