//! Zen room rendering
//!
//! Draws the breathing circle. The breath session supplies discrete target
//! keyframes at interval boundaries; this renderer eases scale and opacity
//! from the previous keyframe toward the target over the interval.

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::{ease_in_out, lerp, vertical_center};
use crate::app::BreathSession;
use crate::theme::{breath_color, BG_SAND};

/// Radius of the breathing circle (in rows) at scale 1.0.
const BASE_RADIUS: f32 = 5.0;

/// Render the zen room with the current breathing session.
pub fn render_zen_screen(area: Rect, session: &BreathSession, frame: &mut Frame) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_SAND)), area);

    let target = session.target();
    let previous = session.previous();
    let t = ease_in_out(session.progress());
    let scale = lerp(previous.scale, target.scale, t);
    let opacity = lerp(previous.opacity, target.opacity, t);

    let radius = BASE_RADIUS * scale;
    let color = breath_color(opacity);

    let mut content = circle_lines(radius, color);
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        target.label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let height = content.len() as u16;
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().bg(BG_SAND));
    frame.render_widget(paragraph, vertical_center(area, height));
}

/// Build a filled circle out of text rows. Terminal cells are roughly twice
/// as tall as wide, so the horizontal extent is doubled to look round.
fn circle_lines(radius: f32, color: Color) -> Vec<Line<'static>> {
    // Rows are laid out for the largest keyframe so the label below the
    // circle doesn't jump as the circle grows and shrinks.
    let max_rows = (BASE_RADIUS * 1.2).ceil() as i32;
    let r2 = radius * radius;
    let mut lines = Vec::new();

    for y in -max_rows..=max_rows {
        let mut row = String::new();
        let span = (max_rows * 2) + 1;
        for x in -span..=span {
            let fx = x as f32 / 2.0;
            let fy = y as f32;
            if fx * fx + fy * fy <= r2 {
                row.push('\u{2022}');
            } else {
                row.push(' ');
            }
        }
        lines.push(Line::from(Span::styled(row, Style::default().fg(color))));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn filled_cells(lines: &[Line<'_>]) -> usize {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.matches('\u{2022}').count())
            .sum()
    }

    #[test]
    fn test_circle_row_count_is_stable_across_scales() {
        let small = circle_lines(BASE_RADIUS * 0.8, Color::White);
        let large = circle_lines(BASE_RADIUS * 1.2, Color::White);
        assert_eq!(small.len(), large.len());
    }

    #[test]
    fn test_larger_scale_fills_more_cells() {
        let small = circle_lines(BASE_RADIUS * 0.8, Color::White);
        let large = circle_lines(BASE_RADIUS * 1.2, Color::White);
        assert!(filled_cells(&large) > filled_cells(&small));
    }
}
