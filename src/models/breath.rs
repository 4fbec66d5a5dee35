//! Breathing-cycle oscillator
//!
//! The Zen Room's only moving part: a two-phase oscillator that flips
//! between breathing in and breathing out every fixed interval. The
//! oscillator emits discrete target keyframes; smooth interpolation toward
//! them is the renderer's job (`ui::zen`).

use std::time::Duration;

/// Seconds between phase flips.
pub const BREATH_INTERVAL: Duration = Duration::from_secs(4);

/// Current half of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    In,
    Out,
}

impl BreathPhase {
    pub fn toggle(self) -> Self {
        match self {
            BreathPhase::In => BreathPhase::Out,
            BreathPhase::Out => BreathPhase::In,
        }
    }
}

/// Discrete animation target the renderer eases toward over one interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub scale: f32,
    pub opacity: f32,
    pub label: &'static str,
}

/// Keyframe for the inhale half of the cycle.
pub const KEYFRAME_IN: Keyframe = Keyframe {
    scale: 1.2,
    opacity: 1.0,
    label: "Breathe in",
};

/// Keyframe for the exhale half of the cycle.
pub const KEYFRAME_OUT: Keyframe = Keyframe {
    scale: 0.8,
    opacity: 0.95,
    label: "Breathe out",
};

/// Two-state oscillator driving the breathing guidance.
///
/// A fresh oscillator starts in `In` with its keyframe already applied, so
/// the screen shows a consistent starting pose before the first flip. Phase
/// never survives a remount; the owner constructs a new oscillator each time
/// the Zen screen mounts.
#[derive(Debug, Default)]
pub struct BreathOscillator {
    phase: BreathPhase,
}

impl BreathOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Target keyframe for the current phase.
    pub fn keyframe(&self) -> Keyframe {
        match self.phase {
            BreathPhase::In => KEYFRAME_IN,
            BreathPhase::Out => KEYFRAME_OUT,
        }
    }

    /// Keyframe the renderer is easing away from (the opposite phase's).
    pub fn previous_keyframe(&self) -> Keyframe {
        match self.phase {
            BreathPhase::In => KEYFRAME_OUT,
            BreathPhase::Out => KEYFRAME_IN,
        }
    }

    /// Advance one interval: flip the phase and return the new keyframe.
    pub fn flip(&mut self) -> Keyframe {
        self.phase = self.phase.toggle();
        self.keyframe()
    }
}
