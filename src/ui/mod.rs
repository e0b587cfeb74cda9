//! Terminal rendering, split per screen.

pub mod board_panel;
pub mod game_scene;
pub mod quest_panel;
pub mod shop_panel;

pub use board_panel::{next_filter, render_board};
pub use game_scene::render_game;
pub use quest_panel::render_quests;
pub use shop_panel::render_shop;
