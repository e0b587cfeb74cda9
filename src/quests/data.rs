//! Built-in quest catalog.

use super::types::{QuestKind, QuestRecord};

struct QuestDef {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: QuestKind,
    reward_lamports: u64,
    target: u32,
    icon: &'static str,
}

const QUEST_DEFS: &[QuestDef] = &[
    QuestDef {
        id: "daily_play_1",
        title: "First Flight",
        description: "Play 1 game today",
        kind: QuestKind::Daily,
        reward_lamports: 1_000_000,
        target: 1,
        icon: "🎮",
    },
    QuestDef {
        id: "daily_score_10",
        title: "Sky Walker",
        description: "Score 10 points in a single game",
        kind: QuestKind::Daily,
        reward_lamports: 2_000_000,
        target: 10,
        icon: "⭐",
    },
    QuestDef {
        id: "daily_play_3",
        title: "Triple Threat",
        description: "Play 3 games today",
        kind: QuestKind::Daily,
        reward_lamports: 3_000_000,
        target: 3,
        icon: "🔥",
    },
    QuestDef {
        id: "daily_high_score",
        title: "Personal Best",
        description: "Beat your high score",
        kind: QuestKind::Daily,
        reward_lamports: 5_000_000,
        target: 1,
        icon: "🏆",
    },
    QuestDef {
        id: "weekly_play_20",
        title: "Dedicated Flyer",
        description: "Play 20 games this week",
        kind: QuestKind::Weekly,
        reward_lamports: 10_000_000,
        target: 20,
        icon: "✈️",
    },
    QuestDef {
        id: "weekly_score_100",
        title: "Century Club",
        description: "Score 100 points total this week",
        kind: QuestKind::Weekly,
        reward_lamports: 15_000_000,
        target: 100,
        icon: "💯",
    },
    QuestDef {
        id: "weekly_cosmetic",
        title: "Fashion Forward",
        description: "Purchase a cosmetic item",
        kind: QuestKind::Weekly,
        reward_lamports: 20_000_000,
        target: 1,
        icon: "🎨",
    },
    QuestDef {
        id: "achievement_first_win",
        title: "Record Breaker",
        description: "Set a new high score",
        kind: QuestKind::Achievement,
        reward_lamports: 5_000_000,
        target: 1,
        icon: "🥇",
    },
    QuestDef {
        id: "achievement_score_50",
        title: "Half Century",
        description: "Score 50 points in a single game",
        kind: QuestKind::Achievement,
        reward_lamports: 10_000_000,
        target: 50,
        icon: "🚀",
    },
    QuestDef {
        id: "achievement_play_100",
        title: "Veteran Pilot",
        description: "Finish 100 games",
        kind: QuestKind::Achievement,
        reward_lamports: 50_000_000,
        target: 100,
        icon: "🎖️",
    },
];

/// Fresh records for every built-in quest, all locked with zero progress.
pub fn default_quests() -> Vec<QuestRecord> {
    QUEST_DEFS
        .iter()
        .map(|def| QuestRecord {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            kind: def.kind,
            reward_lamports: def.reward_lamports,
            progress: 0,
            target: def.target,
            accepted: false,
            completed: false,
            claimed: false,
            icon: def.icon.to_string(),
            last_updated: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let quests = default_quests();
        for (i, a) in quests.iter().enumerate() {
            for b in &quests[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_all_quests_start_locked() {
        for quest in default_quests() {
            assert!(!quest.accepted);
            assert!(!quest.completed);
            assert!(!quest.claimed);
            assert_eq!(quest.progress, 0);
            assert!(quest.target > 0);
            assert!(quest.reward_lamports > 0);
        }
    }
}
