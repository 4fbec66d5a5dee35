//! Profile file watching.
//!
//! The Welcome screen greets the user by name, and the profile file may be
//! edited outside the app. A filesystem watcher flips a shared reload flag
//! that the event loop checks each iteration.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher for profile changes.
///
/// Returns `None` when the watcher cannot be created; the app still works,
/// it just won't pick up external edits.
pub fn setup_profile_watcher(
    profile_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_profile = profile_path
        .canonicalize()
        .unwrap_or_else(|_| profile_path.clone());
    let profile_filename = profile_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Compare by canonical path first, then by filename, since
                // editors often replace the file rather than write in place.
                let matches = event.paths.iter().any(|p| {
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_profile {
                            return true;
                        }
                    }
                    if let Some(ref expected_name) = profile_filename {
                        if let Some(event_name) = p.file_name() {
                            return event_name == expected_name;
                        }
                    }
                    false
                });

                if matches {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since file replacement breaks
            // watches on the file itself.
            if let Some(parent) = profile_path.parent() {
                let _ = watcher.watch(parent, RecursiveMode::NonRecursive);
            }
            Some(watcher)
        }
        Err(_) => None,
    }
}
