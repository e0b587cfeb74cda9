//! Integration tests for profile and leaderboard persistence through the
//! key-value store abstraction.

use chrono::{TimeZone, Utc};
use solflap::identity::PlayerIdentity;
use solflap::leaderboard::TimeFilter;
use solflap::quests::{accept_quest, record_progress, QuestState};
use solflap::storage::profile::{
    load_leaderboard, load_profile, save_leaderboard, save_profile,
};
use solflap::storage::{KeyValueStore, MemoryStore};

const ADDRESS: &str = "So11111111111111111111111111111111111111112";
const OTHER_ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

#[test]
fn test_fresh_profile_has_full_quest_catalog() {
    let store = MemoryStore::new();
    let profile = load_profile(&store, ADDRESS);
    assert_eq!(profile.high_score, 0);
    assert_eq!(profile.games_played, 0);
    assert!(profile.quest_log.quests.len() >= 10);
    assert!(profile.owned_cosmetics.is_empty());
}

#[test]
fn test_quest_state_survives_save_and_load() {
    let mut store = MemoryStore::new();
    let mut profile = load_profile(&store, ADDRESS);

    accept_quest(&mut profile.quest_log, "daily_play_3", 100);
    record_progress(&mut profile.quest_log, "daily_play_3", 2, 101);
    profile.high_score = 17;
    profile.owned_cosmetics.push("bird_golden".to_string());
    save_profile(&mut store, ADDRESS, &profile);

    let back = load_profile(&store, ADDRESS);
    let quest = back.quest_log.get("daily_play_3").unwrap();
    assert_eq!(quest.state(), QuestState::Accepted);
    assert_eq!(quest.progress, 2);
    assert_eq!(back.high_score, 17);
    assert_eq!(back.owned_cosmetics, vec!["bird_golden".to_string()]);
}

#[test]
fn test_corrupt_record_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(&format!("profile_{}", ADDRESS), "garbage not json");
    let profile = load_profile(&store, ADDRESS);
    assert_eq!(profile.high_score, 0);
    assert!(!profile.quest_log.quests.is_empty());

    store.set("leaderboard", "[1,2,{");
    let board = load_leaderboard(&store);
    assert!(board.entries.is_empty());
}

#[test]
fn test_old_save_with_missing_fields_loads() {
    // A save written before newer fields existed.
    let mut store = MemoryStore::new();
    store.set(
        &format!("profile_{}", ADDRESS),
        r#"{"display_name": "Ace", "high_score": 12}"#,
    );
    let profile = load_profile(&store, ADDRESS);
    assert_eq!(profile.display_name, "Ace");
    assert_eq!(profile.high_score, 12);
    assert!(profile.settings.show_on_leaderboard);
    assert!(!profile.quest_log.quests.is_empty());
}

#[test]
fn test_profiles_keyed_by_address() {
    let mut store = MemoryStore::new();
    let mut profile = load_profile(&store, ADDRESS);
    profile.high_score = 50;
    save_profile(&mut store, ADDRESS, &profile);

    assert_eq!(load_profile(&store, OTHER_ADDRESS).high_score, 0);
    assert_eq!(load_profile(&store, ADDRESS).high_score, 50);
}

#[test]
fn test_leaderboard_roundtrip_preserves_rankings() {
    let mut store = MemoryStore::new();
    let mut board = load_leaderboard(&store);

    let ace = PlayerIdentity::new(ADDRESS, "Ace").unwrap();
    let rival = PlayerIdentity::new(OTHER_ADDRESS, "").unwrap();
    let today = Utc.with_ymd_and_hms(2026, 3, 11, 10, 0, 0).unwrap();
    let last_week = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();

    board.submit(&ace, 30, last_week);
    board.submit(&rival, 20, today);
    board.submit(&ace, 10, today);
    save_leaderboard(&mut store, &board);

    let back = load_leaderboard(&store);
    let all = back.top(10, TimeFilter::All, today);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].score, 30);

    let weekly = back.top(10, TimeFilter::Weekly, today);
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].score, 20);

    // The anonymous rival shows a shortened address as its name.
    assert!(weekly[0].name.contains(".."));
    assert_eq!(back.personal_best(ADDRESS), Some(30));
}
