//! UI module for zen-tui
//!
//! Per-screen render functions plus the frame-level dispatch that splits
//! the terminal into the content area and the bottom hint bar.

mod helpers;
mod login;
mod title;
mod welcome;
mod zen;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Screen;
use crate::theme::{screen_background, MOONLIGHT, TEXT_MUTED};

pub use login::render_login_screen;
pub use title::render_title_screen;
pub use welcome::render_welcome_screen;
pub use zen::render_zen_screen;

/// Render one frame: the current screen plus the bottom bar.
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(frame.area());

    let content_area = main_layout[0];
    let bottom_bar_area = main_layout[1];

    match app.screen {
        Screen::Title => render_title_screen(content_area, frame),
        Screen::Login => render_login_screen(content_area, &app.form, frame),
        Screen::Welcome => render_welcome_screen(content_area, &app.profile, frame),
        Screen::Zen => {
            if let Some(session) = app.breath() {
                render_zen_screen(content_area, session, frame);
            } else {
                // Session mounts on the transition into Zen; an empty room
                // here means we are mid-transition for exactly one frame.
                frame.render_widget(
                    Block::default().style(Style::default().bg(screen_background(app.screen))),
                    content_area,
                );
            }
        }
    }

    render_bottom_bar(bottom_bar_area, app.screen, frame);
}

/// Bottom bar: position dots for the four screens plus key hints.
fn render_bottom_bar(area: Rect, screen: Screen, frame: &mut Frame) {
    let mut spans = vec![Span::raw(" ")];
    for s in Screen::ALL {
        let dot = if s == screen { "\u{25cf} " } else { "\u{25cb} " };
        let style = if s == screen {
            Style::default().fg(MOONLIGHT)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        spans.push(Span::styled(dot, style));
    }
    spans.push(Span::styled(
        format!(
            " {} | \u{2190}/\u{2192} or drag: swipe | Ctrl+C: quit",
            screen.label()
        ),
        Style::default().fg(TEXT_MUTED),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
