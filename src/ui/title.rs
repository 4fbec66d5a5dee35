//! Title screen rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::vertical_center;
use crate::theme::{BG_NIGHT, MOONLIGHT, TEXT_SECONDARY};

/// Render the title screen: app name over a hint to swipe onward.
pub fn render_title_screen(area: Rect, frame: &mut Frame) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_NIGHT)), area);

    let content = vec![
        Line::from(Span::styled(
            "*  .      .   *        .      *    .",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "B E I N G   P E A C E",
            Style::default().fg(MOONLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Swipe left to begin your journey",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            ".    *     .       .     *   .     *",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let height = content.len() as u16;
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(BG_NIGHT));
    frame.render_widget(paragraph, vertical_center(area, height));
}
