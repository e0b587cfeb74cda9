//! Per-player profile keyed by wallet address.

use super::KeyValueStore;
use crate::leaderboard::Leaderboard;
use crate::quests::QuestLog;
use crate::settings::GameSettings;
use serde::{Deserialize, Serialize};

const LEADERBOARD_KEY: &str = "leaderboard";

/// Everything saved for one player. Missing fields fall back to defaults so
/// old save files keep loading as the profile grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub display_name: String,
    pub high_score: u32,
    pub games_played: u32,
    pub settings: GameSettings,
    pub owned_cosmetics: Vec<String>,
    pub equipped_bird: Option<String>,
    pub equipped_pipe: Option<String>,
    pub quest_log: QuestLog,
}

fn profile_key(address: &str) -> String {
    format!("profile_{}", address)
}

/// Load the profile for `address`. A missing or corrupt record yields a
/// fresh default profile with the full quest catalog.
pub fn load_profile<S: KeyValueStore>(store: &S, address: &str) -> PlayerProfile {
    store
        .get(&profile_key(address))
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn save_profile<S: KeyValueStore>(store: &mut S, address: &str, profile: &PlayerProfile) {
    if let Ok(json) = serde_json::to_string_pretty(profile) {
        store.set(&profile_key(address), &json);
    }
}

/// The leaderboard is shared across players, stored under a fixed key.
pub fn load_leaderboard<S: KeyValueStore>(store: &S) -> Leaderboard {
    store
        .get(LEADERBOARD_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn save_leaderboard<S: KeyValueStore>(store: &mut S, board: &Leaderboard) {
    if let Ok(json) = serde_json::to_string_pretty(board) {
        store.set(LEADERBOARD_KEY, &json);
    }
}
