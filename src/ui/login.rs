//! Login screen rendering
//!
//! Three fields over the blue-to-green gradient: name, an age wheel, and
//! phone number, with Continue as the commit action.

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::helpers::vertical_center;
use crate::models::form::{AGE_MAX, AGE_MIN};
use crate::models::{LoginField, LoginForm};
use crate::theme::{
    FIELD_FOCUS, GRADIENT_BOTTOM, GRADIENT_MID, GRADIENT_TOP, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Render the login screen with the current form state.
pub fn render_login_screen(area: Rect, form: &LoginForm, frame: &mut Frame) {
    render_gradient(area, frame);

    let mut content = vec![
        Line::from(Span::styled(
            "Login",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.push(text_field_line(
        LoginField::Name,
        &form.name,
        "Enter your name",
        form.focus,
    ));
    content.push(Line::from(""));
    content.push(age_wheel_line(form));
    content.push(Line::from(""));
    content.push(text_field_line(
        LoginField::Phone,
        &form.phone,
        "Enter your phone number",
        form.focus,
    ));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[ Continue ]",
        Style::default()
            .fg(FIELD_FOCUS)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::from(Span::styled(
        "Tab: next field   Enter: continue",
        Style::default().fg(TEXT_SECONDARY),
    )));

    let height = content.len() as u16;
    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, height));
}

/// Paint the background as three gradient bands.
fn render_gradient(area: Rect, frame: &mut Frame) {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (band, color) in bands
        .iter()
        .zip([GRADIENT_TOP, GRADIENT_MID, GRADIENT_BOTTOM])
    {
        frame.render_widget(Block::default().style(Style::default().bg(color)), *band);
    }
}

fn text_field_line(
    field: LoginField,
    value: &str,
    placeholder: &str,
    focus: LoginField,
) -> Line<'static> {
    let focused = focus == field;
    let (shown, value_style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(TEXT_SECONDARY))
    } else {
        (value.to_string(), Style::default().fg(TEXT_PRIMARY))
    };
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(FIELD_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    Line::from(vec![
        Span::styled(format!("{}{}: ", marker, field.label()), label_style),
        Span::styled(shown, value_style),
        Span::styled(if focused { "_" } else { " " }, label_style),
    ])
}

/// The age wheel: the selected age with its neighbors dimmed either side,
/// stepped with Up/Down while the field has focus.
fn age_wheel_line(form: &LoginForm) -> Line<'static> {
    let focused = form.focus == LoginField::Age;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(FIELD_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    let below = if form.age > AGE_MIN {
        format!("{} ", form.age - 1)
    } else {
        "   ".to_string()
    };
    let above = if form.age < AGE_MAX {
        format!(" {}", form.age + 1)
    } else {
        "   ".to_string()
    };

    Line::from(vec![
        Span::styled(
            format!("{}{}: ", marker, LoginField::Age.label()),
            label_style,
        ),
        Span::styled(below, Style::default().fg(TEXT_SECONDARY)),
        Span::styled(
            format!("[{}]", form.age),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(above, Style::default().fg(TEXT_SECONDARY)),
    ])
}
