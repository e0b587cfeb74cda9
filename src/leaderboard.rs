//! Append-only leaderboard with time-window queries.

use crate::identity::PlayerIdentity;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub address: String,
    pub name: String,
    pub score: u32,
    /// Unix seconds, UTC.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    All,
    Daily,
    Weekly,
    Monthly,
}

impl TimeFilter {
    /// Inclusive lower bound for entries matching this window at `now`.
    fn cutoff(&self, now: DateTime<Utc>) -> i64 {
        let midnight = |d: DateTime<Utc>| {
            Utc.with_ymd_and_hms(d.year(), d.month(), d.day(), 0, 0, 0)
                .single()
                .unwrap_or(d)
        };
        match self {
            TimeFilter::All => i64::MIN,
            TimeFilter::Daily => midnight(now).timestamp(),
            TimeFilter::Weekly => {
                let days_from_monday = now.weekday().num_days_from_monday() as i64;
                midnight(now - Duration::days(days_from_monday)).timestamp()
            }
            TimeFilter::Monthly => Utc
                .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
                .single()
                .map(|d| d.timestamp())
                .unwrap_or(i64::MIN),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Append a score. Entries are never rewritten or removed; ranking
    /// happens at query time. The caller is responsible for honoring the
    /// player's leaderboard privacy setting.
    pub fn submit(&mut self, identity: &PlayerIdentity, score: u32, now: DateTime<Utc>) {
        self.entries.push(LeaderboardEntry {
            id: Uuid::new_v4().to_string(),
            address: identity.address.clone(),
            name: identity.display_name.clone(),
            score,
            timestamp: now.timestamp(),
        });
    }

    /// Top `limit` entries within the time window, highest score first.
    /// Ties keep submission order.
    pub fn top(&self, limit: usize, filter: TimeFilter, now: DateTime<Utc>) -> Vec<&LeaderboardEntry> {
        let cutoff = filter.cutoff(now);
        let mut matching: Vec<&LeaderboardEntry> = self
            .entries
            .iter()
            .filter(|e| e.timestamp >= cutoff)
            .collect();
        matching.sort_by(|a, b| b.score.cmp(&a.score));
        matching.truncate(limit);
        matching
    }

    /// Best score ever submitted by `address`, if any.
    pub fn personal_best(&self, address: &str) -> Option<u32> {
        self.entries
            .iter()
            .filter(|e| e.address == address)
            .map(|e| e.score)
            .max()
    }
}
