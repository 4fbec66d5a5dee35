//! Application state and core logic for Zen TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! running session: the current screen, the login form, the persisted
//! profile, and the breathing session that exists only while the Zen
//! screen is mounted.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::gesture::DragTracker;
use crate::models::{
    classify_swipe, BreathOscillator, Keyframe, LoginForm, ProfileStore, Screen, SwipeDirection,
    UserProfile, BREATH_INTERVAL,
};
use crate::ticker::BreathTicker;

/// Breathing state owned by the Zen screen. Created on mount, dropped on
/// unmount; the drop cancels the ticker so no flip outlives the screen.
pub struct BreathSession {
    oscillator: BreathOscillator,
    ticker: BreathTicker,
    interval: Duration,
    last_flip: Instant,
}

impl BreathSession {
    fn new(interval: Duration) -> Self {
        Self {
            // Starts in phase In with its keyframe applied immediately,
            // before the first periodic flip.
            oscillator: BreathOscillator::new(),
            ticker: BreathTicker::start(interval),
            interval,
            last_flip: Instant::now(),
        }
    }

    /// Apply any interval boundaries that elapsed since the last poll.
    pub fn drain_ticks(&mut self) {
        let pending = self.ticker.pending_ticks();
        for _ in 0..pending {
            self.oscillator.flip();
            self.last_flip = Instant::now();
        }
    }

    pub fn oscillator(&self) -> &BreathOscillator {
        &self.oscillator
    }

    /// Keyframe the renderer is easing toward.
    pub fn target(&self) -> Keyframe {
        self.oscillator.keyframe()
    }

    /// Keyframe the renderer is easing away from.
    pub fn previous(&self) -> Keyframe {
        self.oscillator.previous_keyframe()
    }

    /// Fraction of the current interval already elapsed, clamped to 0..=1.
    pub fn progress(&self) -> f32 {
        let elapsed = self.last_flip.elapsed().as_secs_f32();
        (elapsed / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub form: LoginForm,
    pub profile: UserProfile,
    pub drag: DragTracker,
    pub profile_needs_reload: Arc<Mutex<bool>>,
    store: ProfileStore,
    breath: Option<BreathSession>,
    breath_interval: Duration,
}

impl App {
    pub fn new(store: ProfileStore) -> Self {
        Self::with_breath_interval(store, BREATH_INTERVAL)
    }

    /// Like `new`, with a custom flip interval (tests use short ones).
    pub fn with_breath_interval(store: ProfileStore, breath_interval: Duration) -> Self {
        let profile = store.load().unwrap_or_default();
        let form = LoginForm::from_profile(&profile);
        Self {
            screen: Screen::Title,
            form,
            profile,
            drag: DragTracker::new(),
            profile_needs_reload: Arc::new(Mutex::new(false)),
            store,
            breath: None,
            breath_interval,
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Feed a completed drag's horizontal translation. Translations at or
    /// below the swipe threshold are silently ignored.
    pub fn handle_translation(&mut self, translation: f32) {
        if let Some(direction) = classify_swipe(translation) {
            self.apply_swipe(direction);
        }
    }

    /// Apply a recognized swipe through the transition table.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        self.screen = self.screen.next(direction);
        self.drag.reset();
        self.sync_breath();
    }

    /// The Login screen's Continue action: persist the form fields and move
    /// to Welcome. This is button-triggered, not part of the swipe table,
    /// and lands on Welcome from any prior screen.
    pub fn commit_login(&mut self) -> io::Result<()> {
        self.profile = self.form.to_profile();
        self.screen = Screen::Welcome;
        self.drag.reset();
        self.sync_breath();
        self.store.save(&self.profile)
    }

    /// Mount or unmount the breathing session to match the current screen.
    fn sync_breath(&mut self) {
        match (self.screen, self.breath.is_some()) {
            (Screen::Zen, false) => {
                self.breath = Some(BreathSession::new(self.breath_interval));
            }
            (Screen::Zen, true) => {}
            // Dropping the session cancels its ticker.
            (_, _) => self.breath = None,
        }
    }

    pub fn breath(&self) -> Option<&BreathSession> {
        self.breath.as_ref()
    }

    /// Advance the breathing session past any elapsed interval boundaries.
    /// Called once per event-loop iteration.
    pub fn tick(&mut self) {
        if let Some(session) = self.breath.as_mut() {
            session.drain_ticks();
        }
    }

    /// Reload the profile from disk if the watcher flagged a change.
    pub fn reload_profile_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.profile_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            if let Ok(profile) = self.store.load() {
                self.profile = profile;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreathPhase;
    use std::path::PathBuf;

    fn temp_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let app = App::with_breath_interval(store, Duration::from_secs(60));
        (dir, app)
    }

    fn swipe_to_zen(app: &mut App) {
        app.apply_swipe(SwipeDirection::Left); // Title -> Login
        app.apply_swipe(SwipeDirection::Left); // Login -> Welcome
        app.apply_swipe(SwipeDirection::Left); // Welcome -> Zen
    }

    #[test]
    fn test_starts_on_title() {
        let (_dir, app) = temp_app();
        assert_eq!(app.screen, Screen::Title);
        assert!(app.breath().is_none());
    }

    #[test]
    fn test_sub_threshold_translation_never_changes_screen() {
        let (_dir, mut app) = temp_app();
        for translation in [-50.0, -12.0, 0.0, 12.0, 50.0] {
            app.handle_translation(translation);
            assert_eq!(app.screen, Screen::Title);
        }
    }

    #[test]
    fn test_swipe_walks_the_strip() {
        let (_dir, mut app) = temp_app();
        app.handle_translation(-80.0);
        assert_eq!(app.screen, Screen::Login);
        app.handle_translation(-80.0);
        assert_eq!(app.screen, Screen::Welcome);
        app.handle_translation(80.0);
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_commit_login_lands_on_welcome_and_persists() {
        let (_dir, mut app) = temp_app();
        app.apply_swipe(SwipeDirection::Left);
        assert_eq!(app.screen, Screen::Login);

        app.form.name = "Ann".to_string();
        app.form.age = 30;
        app.form.phone = "555".to_string();
        app.commit_login().unwrap();

        assert_eq!(app.screen, Screen::Welcome);
        assert_eq!(app.profile.name, "Ann");
        assert_eq!(app.profile.age, "30");
        assert_eq!(app.profile.phone, "555");

        // Persisted: a fresh load from the same path sees the fields.
        let reloaded = app.store().load().unwrap();
        assert_eq!(reloaded, app.profile);
    }

    #[test]
    fn test_commit_login_from_any_screen() {
        for walk in [0usize, 1, 2, 3] {
            let (_dir, mut app) = temp_app();
            for _ in 0..walk {
                app.apply_swipe(SwipeDirection::Left);
            }
            app.commit_login().unwrap();
            assert_eq!(app.screen, Screen::Welcome);
        }
    }

    #[test]
    fn test_zen_mounts_breath_session_in_phase_in() {
        let (_dir, mut app) = temp_app();
        swipe_to_zen(&mut app);
        assert_eq!(app.screen, Screen::Zen);

        let session = app.breath().unwrap();
        assert_eq!(session.oscillator().phase(), BreathPhase::In);
        assert_eq!(session.target().scale, 1.2);
        assert_eq!(session.target().opacity, 1.0);
    }

    #[test]
    fn test_leaving_zen_unmounts_breath_session() {
        let (_dir, mut app) = temp_app();
        swipe_to_zen(&mut app);
        app.apply_swipe(SwipeDirection::Right);
        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.breath().is_none());
    }

    #[test]
    fn test_remount_resets_phase_to_in() {
        let (_dir, mut app) = temp_app();
        swipe_to_zen(&mut app);

        // Force a flip, then leave and come back.
        if let Some(session) = app.breath.as_mut() {
            session.oscillator.flip();
            assert_eq!(session.oscillator.phase(), BreathPhase::Out);
        }
        app.apply_swipe(SwipeDirection::Left); // Zen -> Welcome
        app.apply_swipe(SwipeDirection::Left); // Welcome -> Zen

        let session = app.breath().unwrap();
        assert_eq!(session.oscillator().phase(), BreathPhase::In);
    }

    #[test]
    fn test_tick_flips_phase_per_elapsed_interval() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        let mut app = App::with_breath_interval(store, Duration::from_millis(50));
        swipe_to_zen(&mut app);

        std::thread::sleep(Duration::from_millis(65));
        app.tick();
        let session = app.breath().unwrap();
        assert_eq!(session.oscillator().phase(), BreathPhase::Out);
        assert_eq!(session.target().scale, 0.8);
        assert_eq!(session.target().opacity, 0.95);
    }

    #[test]
    fn test_missing_store_loads_empty_profile() {
        let store = ProfileStore::new(PathBuf::from("/nonexistent/zen/profile.json"));
        let app = App::new(store);
        assert_eq!(app.profile, UserProfile::default());
    }

    #[test]
    fn test_reload_profile_if_needed() {
        let (_dir, mut app) = temp_app();
        app.store()
            .save(&UserProfile {
                name: "Ann".to_string(),
                age: "30".to_string(),
                phone: "555".to_string(),
            })
            .unwrap();

        // Flag not set: nothing happens.
        app.reload_profile_if_needed();
        assert_eq!(app.profile.name, "");

        *app.profile_needs_reload.lock().unwrap() = true;
        app.reload_profile_if_needed();
        assert_eq!(app.profile.name, "Ann");
    }
}
