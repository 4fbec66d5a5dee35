//! Data models for Zen TUI
//!
//! This module contains the core data structures:
//! - Screen enum and the swipe transition table
//! - Breathing oscillator phases and keyframes
//! - User profile and its file-backed store
//! - Login form input state

pub mod breath;
pub mod form;
pub mod profile;
pub mod screen;

// Re-exports for convenient access
pub use breath::{BreathOscillator, BreathPhase, Keyframe, BREATH_INTERVAL};
pub use form::{LoginField, LoginForm};
pub use profile::{ProfileStore, UserProfile};
pub use screen::{classify_swipe, Screen, SwipeDirection, SWIPE_THRESHOLD};
