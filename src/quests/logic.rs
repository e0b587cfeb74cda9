//! Quest state machine: accept, progress, claim, period resets, and the
//! routing of gameplay signals into quest progress.

use super::types::{QuestKind, QuestLog, QuestStats};
use crate::core::QuestSignal;
use crate::rewards::{RewardError, RewardIssuer, RewardReceipt};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::fmt;

/// Why a claim attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    UnknownQuest,
    NotCompleted,
    AlreadyClaimed,
    /// Issuance failed; the quest stays completed and claimable.
    Issuance(RewardError),
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::UnknownQuest => write!(f, "unknown quest id"),
            ClaimError::NotCompleted => write!(f, "quest is not completed yet"),
            ClaimError::AlreadyClaimed => write!(f, "reward already claimed"),
            ClaimError::Issuance(err) => write!(f, "reward issuance failed: {}", err),
        }
    }
}

/// Mark a quest accepted so progress starts counting. Idempotent; returns
/// false only for an unknown id.
pub fn accept_quest(log: &mut QuestLog, quest_id: &str, now: i64) -> bool {
    match log.get_mut(quest_id) {
        Some(quest) => {
            if !quest.accepted {
                quest.accepted = true;
                quest.last_updated = now;
            }
            true
        }
        None => false,
    }
}

/// Add `amount` to a quest's progress. No-op unless the quest is accepted
/// and not yet completed. Progress clamps at the target, and the quest
/// completes exactly on the update that reaches it. Returns true when this
/// call completed the quest.
pub fn record_progress(log: &mut QuestLog, quest_id: &str, amount: u32, now: i64) -> bool {
    let Some(quest) = log.get_mut(quest_id) else {
        return false;
    };
    if !quest.accepted || quest.completed {
        return false;
    }
    quest.progress = quest.progress.saturating_add(amount).min(quest.target);
    quest.last_updated = now;
    if quest.progress >= quest.target {
        quest.completed = true;
        return true;
    }
    false
}

/// Raise a quest's progress to at least `value`, for quests measured by the
/// best result in a single game rather than an accumulating count. Never
/// lowers progress. Returns true when this call completed the quest.
pub fn raise_progress_to(log: &mut QuestLog, quest_id: &str, value: u32, now: i64) -> bool {
    let Some(quest) = log.get_mut(quest_id) else {
        return false;
    };
    if !quest.accepted || quest.completed || value <= quest.progress {
        return false;
    }
    quest.progress = value.min(quest.target);
    quest.last_updated = now;
    if quest.progress >= quest.target {
        quest.completed = true;
        return true;
    }
    false
}

/// Pay out a completed quest through `issuer`. The claimed flag flips only
/// after the issuer reports success, so a failed transfer leaves the quest
/// claimable and a second claim of the same quest is impossible.
pub fn claim_reward<I: RewardIssuer>(
    log: &mut QuestLog,
    quest_id: &str,
    recipient: &str,
    issuer: &mut I,
    now: i64,
) -> Result<RewardReceipt, ClaimError> {
    let Some(quest) = log.get_mut(quest_id) else {
        return Err(ClaimError::UnknownQuest);
    };
    if quest.claimed {
        return Err(ClaimError::AlreadyClaimed);
    }
    if !quest.completed {
        return Err(ClaimError::NotCompleted);
    }
    let receipt = issuer
        .issue_reward(recipient, quest.reward_lamports)
        .map_err(ClaimError::Issuance)?;
    quest.claimed = true;
    quest.last_updated = now;
    Ok(receipt)
}

fn daily_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn weekly_key(date: NaiveDate) -> String {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    monday.format("%Y-%m-%d").to_string()
}

/// Reset daily and weekly quests whose period has rolled over since the last
/// call. Keyed by calendar day and ISO week (Monday start), so calling this
/// any number of times within the same period changes nothing. Returns the
/// number of quests reset.
pub fn apply_period_resets(log: &mut QuestLog, now: DateTime<Utc>) -> usize {
    let today = now.date_naive();
    let timestamp = now.timestamp();
    let mut reset_count = 0;

    let day = daily_key(today);
    if log.last_daily_key.as_deref() != Some(day.as_str()) {
        for quest in log.quests.iter_mut().filter(|q| q.kind == QuestKind::Daily) {
            quest.reset(timestamp);
            reset_count += 1;
        }
        log.last_daily_key = Some(day);
    }

    let week = weekly_key(today);
    if log.last_weekly_key.as_deref() != Some(week.as_str()) {
        for quest in log.quests.iter_mut().filter(|q| q.kind == QuestKind::Weekly) {
            quest.reset(timestamp);
            reset_count += 1;
        }
        log.last_weekly_key = Some(week);
    }

    reset_count
}

/// Feed one gameplay signal into every quest it concerns.
pub fn route_signal(log: &mut QuestLog, signal: &QuestSignal, now: i64) {
    match signal {
        QuestSignal::GameStart => {
            record_progress(log, "daily_play_1", 1, now);
            record_progress(log, "daily_play_3", 1, now);
            record_progress(log, "weekly_play_20", 1, now);
        }
        QuestSignal::ScoreAchieved { score } => {
            raise_progress_to(log, "daily_score_10", *score, now);
            raise_progress_to(log, "achievement_score_50", *score, now);
            record_progress(log, "weekly_score_100", 1, now);
        }
        QuestSignal::GameEnd { .. } => {
            record_progress(log, "achievement_play_100", 1, now);
        }
        QuestSignal::HighScore { .. } => {
            record_progress(log, "daily_high_score", 1, now);
            record_progress(log, "achievement_first_win", 1, now);
        }
        QuestSignal::CosmeticPurchased { .. } => {
            record_progress(log, "weekly_cosmetic", 1, now);
        }
    }
}

/// Roll-up for the quest panel header.
pub fn quest_stats(log: &QuestLog) -> QuestStats {
    let mut stats = QuestStats {
        total: log.quests.len(),
        ..QuestStats::default()
    };
    for quest in &log.quests {
        if quest.claimed {
            stats.claimed += 1;
            stats.claimed_lamports += quest.reward_lamports;
        } else if quest.completed {
            stats.claimable_lamports += quest.reward_lamports;
        }
        if quest.completed {
            stats.completed += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::LocalTreasury;
    use chrono::TimeZone;

    const ADDR: &str = "So11111111111111111111111111111111111111112";

    fn accepted_log() -> QuestLog {
        let mut log = QuestLog::default();
        let ids: Vec<String> = log.quests.iter().map(|q| q.id.clone()).collect();
        for id in ids {
            accept_quest(&mut log, &id, 0);
        }
        log
    }

    #[test]
    fn test_accept_is_idempotent() {
        let mut log = QuestLog::default();
        assert!(accept_quest(&mut log, "daily_play_1", 10));
        assert!(accept_quest(&mut log, "daily_play_1", 20));
        assert!(!accept_quest(&mut log, "nope", 0));
        let quest = log.get("daily_play_1").unwrap();
        assert!(quest.accepted);
        // Second accept did not touch the record.
        assert_eq!(quest.last_updated, 10);
    }

    #[test]
    fn test_progress_ignored_before_accept() {
        let mut log = QuestLog::default();
        assert!(!record_progress(&mut log, "daily_play_1", 1, 0));
        assert_eq!(log.get("daily_play_1").unwrap().progress, 0);
    }

    #[test]
    fn test_progress_clamps_and_completes_on_crossing() {
        let mut log = accepted_log();
        assert!(!record_progress(&mut log, "daily_play_3", 2, 0));
        assert!(record_progress(&mut log, "daily_play_3", 5, 1));
        let quest = log.get("daily_play_3").unwrap();
        assert_eq!(quest.progress, 3);
        assert!(quest.completed);
        // Further progress after completion is ignored.
        assert!(!record_progress(&mut log, "daily_play_3", 1, 2));
        assert_eq!(log.get("daily_play_3").unwrap().progress, 3);
    }

    #[test]
    fn test_raise_progress_never_lowers() {
        let mut log = accepted_log();
        raise_progress_to(&mut log, "daily_score_10", 7, 0);
        raise_progress_to(&mut log, "daily_score_10", 4, 1);
        assert_eq!(log.get("daily_score_10").unwrap().progress, 7);
        assert!(raise_progress_to(&mut log, "daily_score_10", 12, 2));
        let quest = log.get("daily_score_10").unwrap();
        assert_eq!(quest.progress, 10);
        assert!(quest.completed);
    }

    #[test]
    fn test_claim_requires_completion() {
        let mut log = accepted_log();
        let mut treasury = LocalTreasury::new(1_000_000_000);
        assert_eq!(
            claim_reward(&mut log, "daily_play_1", ADDR, &mut treasury, 0),
            Err(ClaimError::NotCompleted)
        );
        assert_eq!(
            claim_reward(&mut log, "nope", ADDR, &mut treasury, 0),
            Err(ClaimError::UnknownQuest)
        );
    }

    #[test]
    fn test_claim_pays_once() {
        let mut log = accepted_log();
        let mut treasury = LocalTreasury::new(1_000_000_000);
        record_progress(&mut log, "daily_play_1", 1, 0);

        let receipt = claim_reward(&mut log, "daily_play_1", ADDR, &mut treasury, 1).unwrap();
        assert_eq!(receipt.lamports, 1_000_000);
        assert!(log.get("daily_play_1").unwrap().claimed);

        assert_eq!(
            claim_reward(&mut log, "daily_play_1", ADDR, &mut treasury, 2),
            Err(ClaimError::AlreadyClaimed)
        );
        assert_eq!(treasury.balance_lamports, 999_000_000);
    }

    #[test]
    fn test_failed_issuance_leaves_quest_claimable() {
        let mut log = accepted_log();
        let mut broke = LocalTreasury::new(0);
        record_progress(&mut log, "daily_play_1", 1, 0);

        let err = claim_reward(&mut log, "daily_play_1", ADDR, &mut broke, 1).unwrap_err();
        assert!(matches!(err, ClaimError::Issuance(_)));
        assert!(!log.get("daily_play_1").unwrap().claimed);

        // Retry against a funded treasury succeeds.
        let mut funded = LocalTreasury::new(1_000_000_000);
        assert!(claim_reward(&mut log, "daily_play_1", ADDR, &mut funded, 2).is_ok());
    }

    #[test]
    fn test_period_reset_is_idempotent_within_period() {
        let mut log = accepted_log();
        record_progress(&mut log, "daily_play_1", 1, 0);
        record_progress(&mut log, "weekly_play_20", 5, 0);
        raise_progress_to(&mut log, "achievement_score_50", 30, 0);

        let wednesday = Utc.with_ymd_and_hms(2026, 3, 11, 8, 0, 0).unwrap();
        let first = apply_period_resets(&mut log, wednesday);
        assert!(first > 0);
        assert_eq!(log.get("daily_play_1").unwrap().progress, 0);
        assert_eq!(log.get("weekly_play_20").unwrap().progress, 0);
        // Achievements survive resets.
        assert_eq!(log.get("achievement_score_50").unwrap().progress, 30);

        // Same day, later hour: nothing to do.
        let later = Utc.with_ymd_and_hms(2026, 3, 11, 23, 0, 0).unwrap();
        assert_eq!(apply_period_resets(&mut log, later), 0);
    }

    #[test]
    fn test_day_rollover_resets_daily_only() {
        let mut log = accepted_log();
        let tuesday = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        apply_period_resets(&mut log, tuesday);

        for id in ["daily_play_1", "daily_play_3", "weekly_play_20"] {
            accept_quest(&mut log, id, 0);
            record_progress(&mut log, id, 1, 0);
        }

        // Wednesday of the same ISO week: daily resets, weekly keeps going.
        let wednesday = Utc.with_ymd_and_hms(2026, 3, 11, 0, 30, 0).unwrap();
        apply_period_resets(&mut log, wednesday);
        assert_eq!(log.get("daily_play_1").unwrap().progress, 0);
        assert!(!log.get("daily_play_1").unwrap().accepted);
        assert_eq!(log.get("weekly_play_20").unwrap().progress, 1);

        // Following Monday: weekly resets too.
        let next_monday = Utc.with_ymd_and_hms(2026, 3, 16, 0, 30, 0).unwrap();
        apply_period_resets(&mut log, next_monday);
        assert_eq!(log.get("weekly_play_20").unwrap().progress, 0);
    }

    #[test]
    fn test_route_game_start_counts_plays() {
        let mut log = accepted_log();
        route_signal(&mut log, &QuestSignal::GameStart, 0);
        assert_eq!(log.get("daily_play_1").unwrap().progress, 1);
        assert!(log.get("daily_play_1").unwrap().completed);
        assert_eq!(log.get("daily_play_3").unwrap().progress, 1);
        assert_eq!(log.get("weekly_play_20").unwrap().progress, 1);
    }

    #[test]
    fn test_route_score_tracks_best_single_game() {
        let mut log = accepted_log();
        for score in 1..=4u32 {
            route_signal(&mut log, &QuestSignal::ScoreAchieved { score }, 0);
        }
        // Best single-game score, not the sum.
        assert_eq!(log.get("daily_score_10").unwrap().progress, 4);
        // Weekly total counts every point.
        assert_eq!(log.get("weekly_score_100").unwrap().progress, 4);
    }

    #[test]
    fn test_route_high_score_and_cosmetic() {
        let mut log = accepted_log();
        route_signal(&mut log, &QuestSignal::HighScore { score: 9 }, 0);
        assert!(log.get("daily_high_score").unwrap().completed);
        assert!(log.get("achievement_first_win").unwrap().completed);
        route_signal(
            &mut log,
            &QuestSignal::CosmeticPurchased {
                cosmetic_id: "bird_golden".to_string(),
            },
            0,
        );
        assert!(log.get("weekly_cosmetic").unwrap().completed);
    }

    #[test]
    fn test_stats_rollup() {
        let mut log = accepted_log();
        let mut treasury = LocalTreasury::new(1_000_000_000);
        record_progress(&mut log, "daily_play_1", 1, 0);
        record_progress(&mut log, "daily_play_3", 3, 0);
        claim_reward(&mut log, "daily_play_1", ADDR, &mut treasury, 1).unwrap();

        let stats = quest_stats(&log);
        assert_eq!(stats.total, log.quests.len());
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.claimed, 1);
        assert_eq!(stats.claimed_lamports, 1_000_000);
        assert_eq!(stats.claimable_lamports, 3_000_000);
    }
}
