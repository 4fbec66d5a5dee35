use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod cli;
mod gesture;
mod models;
mod theme;
mod ticker;
mod ui;
mod watcher;

use app::App;
use gesture::key_swipe_translation;
use models::{LoginField, ProfileStore, Screen, SwipeDirection};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let store = ProfileStore::new(config.profile_path);
    let mut app = App::new(store);

    // Kept alive for the whole session; dropping it stops the watch.
    let _watcher = watcher::setup_profile_watcher(
        app.store().path().clone(),
        Arc::clone(&app.profile_needs_reload),
    );

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    if !config.disable_mouse {
        stdout().execute(EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    if !config.disable_mouse {
        let _ = stdout().execute(DisableMouseCapture);
    }
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // Apply elapsed breathing intervals and external profile edits
        // before drawing the frame.
        app.tick();
        app.reload_profile_if_needed();

        terminal.draw(|frame| ui::render(frame, app))?;

        // The 50ms poll doubles as the animation cadence: the breathing
        // circle redraws even while no input arrives.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(translation) = app.drag.on_mouse_event(mouse) {
                        app.handle_translation(translation);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle one key event. Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    // Global bindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return true;
    }
    match key.code {
        KeyCode::Left => {
            app.handle_translation(key_swipe_translation(SwipeDirection::Left));
            return false;
        }
        KeyCode::Right => {
            app.handle_translation(key_swipe_translation(SwipeDirection::Right));
            return false;
        }
        _ => {}
    }

    if app.screen == Screen::Login {
        handle_login_key(app, key);
        return false;
    }

    // Outside the login form, plain q quits too.
    matches!(key.code, KeyCode::Char('q'))
}

/// Keys on the login screen: field focus, the age wheel, text entry, and
/// the Continue action.
fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Store failures are not the core's concern; the commit still
            // moves the screen forward.
            let _ = app.commit_login();
        }
        KeyCode::Tab => app.form.focus = app.form.focus.next(),
        KeyCode::BackTab => app.form.focus = app.form.focus.prev(),
        KeyCode::Up => {
            if app.form.focus == LoginField::Age {
                app.form.age_up();
            } else {
                app.form.focus = app.form.focus.prev();
            }
        }
        KeyCode::Down => {
            if app.form.focus == LoginField::Age {
                app.form.age_down();
            } else {
                app.form.focus = app.form.focus.next();
            }
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.input_char(c),
        _ => {}
    }
}
