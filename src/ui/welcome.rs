//! Welcome screen rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::vertical_center;
use crate::models::UserProfile;
use crate::theme::{BG_NIGHT, MOONLIGHT, TEXT_PRIMARY, TEXT_SECONDARY};

/// Render the welcome screen, greeting the persisted user by name.
pub fn render_welcome_screen(area: Rect, profile: &UserProfile, frame: &mut Frame) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_NIGHT)), area);

    let greeting = if profile.name.is_empty() {
        "Welcome!".to_string()
    } else {
        format!("Welcome, {}!", profile.name)
    };

    let content = vec![
        Line::from(Span::styled(
            greeting,
            Style::default().fg(MOONLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enjoy your journey",
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Swipe left or right to move",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let height = content.len() as u16;
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(BG_NIGHT));
    frame.render_widget(paragraph, vertical_center(area, height));
}
