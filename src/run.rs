use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::data::Dataset;
use crate::ui::app::App;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(dataset: Dataset) -> Result<()> {
    let mut app = App::new(dataset);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Rows available to the expense table: frame minus header, cards,
            // status bar, table borders, and the column header
            let content_height = f.area().height.saturating_sub(12) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_key(key, app);
        }
    }
    Ok(())
}

fn handle_key(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('?') => app.show_help = true,

        // Month selection
        KeyCode::Char('H') | KeyCode::Left => app.older_month(),
        KeyCode::Char('L') | KeyCode::Right => app.newer_month(),

        // Category selection
        KeyCode::Tab | KeyCode::Char('c') => app.next_category(),
        KeyCode::BackTab | KeyCode::Char('C') => app.prev_category(),
        KeyCode::Char('a') => app.clear_category(),

        // Expense table cursor
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.filtered.len();
            let page = app.visible_rows.max(1);
            scroll_down(&mut app.expense_index, &mut app.expense_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('G') => {
            let len = app.filtered.len();
            let page = app.visible_rows.max(1);
            scroll_to_bottom(&mut app.expense_index, &mut app.expense_scroll, len, page);
        }
        _ => {}
    }
}
