//! Theme module for zen-tui
//!
//! Centralized color palette for the four screens: night sky for the title,
//! the blue-to-green login gradient, and warm sand for the zen room.

use ratatui::style::Color;

// ============================================================================
// Title & Welcome - Night Sky Palette
// ============================================================================

/// Title/Welcome background - deep indigo night (#141a2e)
pub const BG_NIGHT: Color = Color::Rgb(20, 26, 46);

/// Soft moonlight accent (#c9d4f5)
pub const MOONLIGHT: Color = Color::Rgb(201, 212, 245);

// ============================================================================
// Login - Blue to Green Gradient Steps
// ============================================================================

/// Top of the login gradient (#2563c8)
pub const GRADIENT_TOP: Color = Color::Rgb(37, 99, 200);

/// Middle of the login gradient (#2e8f96)
pub const GRADIENT_MID: Color = Color::Rgb(46, 143, 150);

/// Bottom of the login gradient (#3aa85f)
pub const GRADIENT_BOTTOM: Color = Color::Rgb(58, 168, 95);

/// Focused field highlight (#f2f6ff)
pub const FIELD_FOCUS: Color = Color::Rgb(242, 246, 255);

// ============================================================================
// Zen Room - Sand Palette
// ============================================================================

/// Zen room background - raked sand (#4a3f30)
pub const BG_SAND: Color = Color::Rgb(74, 63, 48);

/// Breathing circle at full opacity (#f5e6c8)
pub const SAND_LIGHT: Color = Color::Rgb(245, 230, 200);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for hints and the status bar (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Background color for the current screen.
pub fn screen_background(screen: crate::models::Screen) -> Color {
    use crate::models::Screen;
    match screen {
        Screen::Title | Screen::Welcome => BG_NIGHT,
        Screen::Login => GRADIENT_MID,
        Screen::Zen => BG_SAND,
    }
}

/// Breathing-circle color dimmed by the keyframe's opacity. The scale of
/// the dimming range is deliberately exaggerated so the 1.0 -> 0.95 swing
/// is visible on a terminal.
pub fn breath_color(opacity: f32) -> Color {
    let dim = opacity.clamp(0.0, 1.0).powi(4);
    let Color::Rgb(r, g, b) = SAND_LIGHT else {
        return SAND_LIGHT;
    };
    Color::Rgb(
        (f32::from(r) * dim) as u8,
        (f32::from(g) * dim) as u8,
        (f32::from(b) * dim) as u8,
    )
}
