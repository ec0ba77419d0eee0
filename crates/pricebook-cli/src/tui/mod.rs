mod app;
mod ui;

pub(crate) use app::TuiView;

use anyhow::Result;
use app::Focus;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pricebook_runtime::{Action, Coordinator, Mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

pub(crate) fn run(mut coordinator: Coordinator<TuiView>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    coordinator.bootstrap()?;

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, coordinator.view());
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                should_quit = handle_key(&mut coordinator, key);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Map one key press to navigation or a coordinator action. Returns true
/// when the editor should quit.
///
/// Dispatch results are deliberately not propagated: validation failures
/// already land on the status line through the view.
fn handle_key(coordinator: &mut Coordinator<TuiView>, key: KeyEvent) -> bool {
    coordinator.view_mut().clear_status();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            KeyCode::Char('d') => {
                if coordinator.mode() == Mode::Editing {
                    let _ = coordinator.dispatch(Action::SubmitDelete);
                }
            }
            KeyCode::Char('k') => {
                let _ = coordinator.dispatch(Action::ClearAll);
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => match coordinator.mode() {
            Mode::Editing => {
                let _ = coordinator.dispatch(Action::Cancel);
                false
            }
            Mode::Idle => true,
        },
        KeyCode::Tab => {
            coordinator.view_mut().cycle_focus();
            false
        }
        KeyCode::Up => {
            coordinator.view_mut().select_previous();
            false
        }
        KeyCode::Down => {
            coordinator.view_mut().select_next();
            false
        }
        KeyCode::Backspace => {
            coordinator.view_mut().backspace();
            false
        }
        KeyCode::Enter => {
            if coordinator.view().focus() == Focus::List {
                edit_selected(coordinator);
            } else {
                let action = match coordinator.mode() {
                    Mode::Idle => Action::SubmitAdd,
                    Mode::Editing => Action::SubmitUpdate,
                };
                let _ = coordinator.dispatch(action);
            }
            false
        }
        KeyCode::Char(c) => {
            if coordinator.view().focus() == Focus::List {
                match c {
                    'e' => edit_selected(coordinator),
                    'j' => coordinator.view_mut().select_next(),
                    'k' => coordinator.view_mut().select_previous(),
                    'q' => return true,
                    _ => {}
                }
            } else {
                coordinator.view_mut().push_char(c);
            }
            false
        }
        _ => false,
    }
}

fn edit_selected(coordinator: &mut Coordinator<TuiView>) {
    if let Some(id) = coordinator.view().selected_id() {
        let _ = coordinator.dispatch(Action::Edit(id));
    }
}
