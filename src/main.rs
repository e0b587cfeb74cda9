use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use solflap::core::{GamePhase, GameSession, QuestSignal, SimEvent};
use solflap::cosmetics::{self, CosmeticKind, CATALOG};
use solflap::identity::PlayerIdentity;
use solflap::leaderboard::{Leaderboard, TimeFilter};
use solflap::quests;
use solflap::rewards::{LocalTreasury, LAMPORTS_PER_SOL};
use solflap::storage::{
    profile::{load_leaderboard, load_profile, save_leaderboard, save_profile, PlayerProfile},
    JsonFileStore, KeyValueStore,
};
use solflap::{build_info, ui};
use std::io;
use std::time::{Duration, Instant};

/// Demo wallet used when SOLFLAP_WALLET is not set, so the game is playable
/// without connecting anything.
const DEMO_WALLET: &str = "So11111111111111111111111111111111111111112";

/// Starting balance for the offline reward treasury.
const TREASURY_START: u64 = 10 * LAMPORTS_PER_SOL;

/// Wall-clock length of one simulation frame (60 FPS).
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Upper bound on frames simulated in one catch-up burst after a stall.
const MAX_CATCH_UP_FRAMES: u32 = 5;

/// Gates the fixed timestep on elapsed wall time. `event::poll` returns
/// early whenever input is pending (key repeat floods it), so the loop
/// iteration rate says nothing about real time; only this clock decides how
/// many frames to simulate.
struct FrameClock {
    last: Instant,
}

impl FrameClock {
    fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Number of whole frame intervals elapsed since the last call, capped
    /// at [`MAX_CATCH_UP_FRAMES`]. A stall longer than the cap drops the
    /// backlog instead of fast-forwarding through it.
    fn due_frames(&mut self, now: Instant) -> u32 {
        let mut frames = 0;
        while frames < MAX_CATCH_UP_FRAMES && now.duration_since(self.last) >= FRAME_INTERVAL {
            self.last += FRAME_INTERVAL;
            frames += 1;
        }
        if frames == MAX_CATCH_UP_FRAMES {
            self.last = now;
        }
        frames
    }
}

#[derive(Clone, Copy)]
enum Panel {
    Game,
    Quests,
    Shop,
    Board,
}

impl Panel {
    fn next(self) -> Panel {
        match self {
            Panel::Game => Panel::Quests,
            Panel::Quests => Panel::Shop,
            Panel::Shop => Panel::Board,
            Panel::Board => Panel::Game,
        }
    }
}

struct App {
    identity: PlayerIdentity,
    session: GameSession,
    profile: PlayerProfile,
    leaderboard: Leaderboard,
    treasury: LocalTreasury,
    panel: Panel,
    selected_quest: usize,
    selected_item: usize,
    board_filter: TimeFilter,
    dirty: bool,
}

impl App {
    fn new(identity: PlayerIdentity, profile: PlayerProfile, leaderboard: Leaderboard) -> Self {
        let mut session = GameSession::new(identity.address.clone(), profile.settings.tuning());
        session.equipped_bird = profile.equipped_bird.clone();
        session.equipped_pipe = profile.equipped_pipe.clone();
        Self {
            identity,
            session,
            profile,
            leaderboard,
            treasury: LocalTreasury::new(TREASURY_START),
            panel: Panel::Game,
            selected_quest: 0,
            selected_item: 0,
            board_filter: TimeFilter::All,
            dirty: false,
        }
    }

    fn accept_selected(&mut self) {
        if let Some(quest) = self.profile.quest_log.quests.get(self.selected_quest) {
            let id = quest.id.clone();
            if quests::accept_quest(&mut self.profile.quest_log, &id, Utc::now().timestamp()) {
                self.dirty = true;
            }
        }
    }

    /// Claim the selected quest's reward. A refused claim leaves the quest
    /// and the save state untouched.
    fn claim_selected(&mut self) {
        if let Some(quest) = self.profile.quest_log.quests.get(self.selected_quest) {
            let id = quest.id.clone();
            let recipient = self.identity.address.clone();
            if quests::claim_reward(
                &mut self.profile.quest_log,
                &id,
                &recipient,
                &mut self.treasury,
                Utc::now().timestamp(),
            )
            .is_ok()
            {
                self.dirty = true;
            }
        }
    }

    /// Record a purchase of the selected shop item. Payment settles through
    /// the wallet outside this process; here the item becomes owned and the
    /// quest tracker hears about it.
    fn buy_selected(&mut self) {
        let Some(item) = CATALOG.get(self.selected_item) else {
            return;
        };
        if cosmetics::purchase(&mut self.profile.owned_cosmetics, item.id).is_ok() {
            quests::route_signal(
                &mut self.profile.quest_log,
                &QuestSignal::CosmeticPurchased {
                    cosmetic_id: item.id.to_string(),
                },
                Utc::now().timestamp(),
            );
            self.dirty = true;
        }
    }

    /// Equip the selected shop item if owned. Cosmetics only touch
    /// presentation state on the session.
    fn equip_selected(&mut self) {
        let Some(item) = CATALOG.get(self.selected_item) else {
            return;
        };
        if !cosmetics::is_owned(&self.profile.owned_cosmetics, item.id) {
            return;
        }
        let id = Some(item.id.to_string());
        match item.kind {
            CosmeticKind::Bird => {
                self.profile.equipped_bird = id.clone();
                self.session.equipped_bird = id;
            }
            CosmeticKind::Pipe => {
                self.profile.equipped_pipe = id.clone();
                self.session.equipped_pipe = id;
            }
            CosmeticKind::Background | CosmeticKind::Effect => {}
        }
        self.dirty = true;
    }

    /// Drain one frame's events into quest progress, the high score, and the
    /// leaderboard.
    fn handle_events(&mut self, events: Vec<SimEvent>, now: DateTime<Utc>) {
        for event in events {
            match event {
                SimEvent::ScoreChanged { .. } => {}
                SimEvent::GameOver { score, .. } => {
                    // A session left open across midnight picks up the new
                    // period here, before the end-of-game signals land.
                    quests::apply_period_resets(&mut self.profile.quest_log, now);
                    self.profile.games_played += 1;
                    if score > self.profile.high_score {
                        self.profile.high_score = score;
                        quests::route_signal(
                            &mut self.profile.quest_log,
                            &QuestSignal::HighScore { score },
                            now.timestamp(),
                        );
                    }
                    if self.profile.settings.show_on_leaderboard && score > 0 {
                        self.leaderboard.submit(&self.identity, score, now);
                    }
                    self.dirty = true;
                }
                SimEvent::Quest(signal) => {
                    quests::route_signal(&mut self.profile.quest_log, &signal, now.timestamp());
                }
            }
        }
    }

    fn save<S: KeyValueStore>(&mut self, store: &mut S) {
        save_profile(store, &self.identity.address, &self.profile);
        save_leaderboard(store, &self.leaderboard);
        self.dirty = false;
    }
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "solflap {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("SolFlap - Terminal Flappy Game with Wallet-Bound Quests\n");
                println!("Usage: solflap\n");
                println!("Environment:");
                println!("  SOLFLAP_WALLET  Wallet address to play as (base58)");
                println!("  SOLFLAP_NAME    Display name for the leaderboard");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'solflap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let address = std::env::var("SOLFLAP_WALLET").unwrap_or_else(|_| DEMO_WALLET.to_string());
    let name = std::env::var("SOLFLAP_NAME").unwrap_or_default();
    let identity = PlayerIdentity::new(address, name)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let mut store = JsonFileStore::new();
    let mut profile = load_profile(&store, &identity.address);
    if profile.display_name.is_empty() {
        profile.display_name = identity.display_name.clone();
    }
    quests::apply_period_resets(&mut profile.quest_log, Utc::now());
    let leaderboard = load_leaderboard(&store);

    let mut app = App::new(identity, profile, leaderboard);
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut store, &mut rng);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend, S: KeyValueStore, R: rand::Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &mut S,
    rng: &mut R,
) -> io::Result<()> {
    let mut clock = FrameClock::new(Instant::now());
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match app.panel {
                Panel::Game => {
                    ui::render_game(frame, area, &app.session, app.profile.high_score)
                }
                Panel::Quests => {
                    ui::render_quests(frame, area, &app.profile.quest_log, app.selected_quest)
                }
                Panel::Shop => ui::render_shop(
                    frame,
                    area,
                    &app.profile.owned_cosmetics,
                    app.profile.equipped_bird.as_deref(),
                    app.profile.equipped_pipe.as_deref(),
                    app.selected_item,
                ),
                Panel::Board => ui::render_board(
                    frame,
                    area,
                    &app.leaderboard,
                    app.board_filter,
                    &app.identity.address,
                    Utc::now(),
                ),
            }
        })?;

        // ~60fps: one simulated frame per poll window
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Tab {
                    app.panel = app.panel.next();
                    continue;
                }
                match app.panel {
                    Panel::Game => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                            match app.session.phase {
                                GamePhase::Ready | GamePhase::Over => {
                                    let events = app.session.start();
                                    app.handle_events(events, Utc::now());
                                }
                                GamePhase::Running => app.session.flap(),
                            }
                        }
                        KeyCode::Char('r') => {
                            let events = app.session.start();
                            app.handle_events(events, Utc::now());
                        }
                        _ => {}
                    },
                    Panel::Quests => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Up => {
                            app.selected_quest = app.selected_quest.saturating_sub(1);
                        }
                        KeyCode::Down => {
                            let last = app.profile.quest_log.quests.len().saturating_sub(1);
                            app.selected_quest = (app.selected_quest + 1).min(last);
                        }
                        KeyCode::Char('a') => app.accept_selected(),
                        KeyCode::Char('c') => app.claim_selected(),
                        _ => {}
                    },
                    Panel::Shop => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Up => {
                            app.selected_item = app.selected_item.saturating_sub(1);
                        }
                        KeyCode::Down => {
                            app.selected_item = (app.selected_item + 1).min(CATALOG.len() - 1);
                        }
                        KeyCode::Enter => app.buy_selected(),
                        KeyCode::Char('e') => app.equip_selected(),
                        _ => {}
                    },
                    Panel::Board => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('f') => {
                            app.board_filter = ui::next_filter(app.board_filter);
                        }
                        _ => {}
                    },
                }
            }
        }

        // The poll above returns early whenever input is pending; the clock
        // decides how much simulated time has actually passed.
        let due = clock.due_frames(Instant::now());
        if app.session.phase == GamePhase::Running {
            for _ in 0..due {
                let events = app.session.advance_frame(rng);
                app.handle_events(events, Utc::now());
                if app.session.phase != GamePhase::Running {
                    break;
                }
            }
        }

        if app.dirty && app.profile.settings.auto_save {
            app.save(store);
        }
    }

    app.save(store);
    Ok(())
}
