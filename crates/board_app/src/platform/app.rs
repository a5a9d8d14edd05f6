use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use board_core::{update, AppState, Msg};
use board_engine::FetchSettings;
use board_logging::board_info;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence::{load_preferences, FilePreferenceStore};
use super::ui;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);

    let state_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let store = FilePreferenceStore::new(state_dir);
    let (group_by, sort_by) = load_preferences(&store);
    board_info!("starting board, grouping {} sorting {}", group_by, sort_by);

    let mut state = AppState::with_preferences(group_by, sort_by);
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(msg_tx.clone(), FetchSettings::default(), Box::new(store));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let _ = msg_tx.send(Msg::BoardOpened);
    let result = event_loop(&mut terminal, &mut state, &mut runner, &msg_tx, &msg_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    runner: &mut EffectRunner,
    msg_tx: &mpsc::Sender<Msg>,
    msg_rx: &mpsc::Receiver<Msg>,
) -> Result<()> {
    terminal.draw(|frame| ui::render::render(frame, &state.view()))?;

    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(state), msg);
            *state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            terminal.draw(|frame| ui::render::render(frame, &state.view()))?;
        }

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('g') => {
                    let _ = msg_tx.send(Msg::GroupModeSelected(state.view().group_by.next()));
                }
                KeyCode::Char('s') => {
                    let _ = msg_tx.send(Msg::SortModeSelected(state.view().sort_by.next()));
                }
                _ => {}
            }
        }
    }
}
