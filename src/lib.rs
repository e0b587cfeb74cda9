//! SolFlap - Terminal Flappy Game with Wallet-Bound Quests
//!
//! This module exposes the simulation, quest tracking, and persistence logic
//! for testing and external use.

pub mod build_info;
pub mod core;
pub mod cosmetics;
pub mod identity;
pub mod leaderboard;
pub mod quests;
pub mod rewards;
pub mod settings;
pub mod storage;

// Terminal rendering, used by the binary
pub mod ui;
