//! User profile persistence
//!
//! The three fields the Login screen collects, stored as a flat JSON
//! key-value document. The store is an explicit object injected into the
//! app rather than ambient global state, so tests can point it at a
//! temporary file.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted user fields. All plain text; no validation is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userName", default)]
    pub name: String,
    #[serde(rename = "userAge", default)]
    pub age: String,
    #[serde(rename = "userPhone", default)]
    pub phone: String,
}

/// File-backed profile store.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location: `<config dir>/zen-tui/profile.json`, falling
    /// back to the working directory when no config dir is resolvable.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zen-tui")
            .join("profile.json")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the profile, treating a missing file as the empty profile.
    pub fn load(&self) -> io::Result<UserProfile> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(UserProfile::default());
            }
            Err(e) => return Err(e),
        };
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the profile, creating parent directories as needed.
    pub fn save(&self, profile: &UserProfile) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_profile_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_load_missing_file_is_empty_profile() {
        let store = ProfileStore::new(PathBuf::from("/nonexistent/zen/profile.json"));
        let profile = store.load().unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn test_load_uses_storage_key_names() {
        let json = r#"{"userName": "Ann", "userAge": "30", "userPhone": "555"}"#;
        let (_file, path) = create_temp_profile_file(json);

        let profile = ProfileStore::new(path).load().unwrap();
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.age, "30");
        assert_eq!(profile.phone, "555");
    }

    #[test]
    fn test_load_missing_keys_default_to_empty() {
        let json = r#"{"userName": "Ann"}"#;
        let (_file, path) = create_temp_profile_file(json);

        let profile = ProfileStore::new(path).load().unwrap();
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.age, "");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn test_load_invalid_json() {
        let (_file, path) = create_temp_profile_file("{ invalid json }");

        let result = ProfileStore::new(path).load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("profile.json"));

        let profile = UserProfile {
            name: "Ann".to_string(),
            age: "30".to_string(),
            phone: "555".to_string(),
        };
        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), profile);
    }

    #[test]
    fn test_save_writes_storage_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        store
            .save(&UserProfile {
                name: "Ann".to_string(),
                age: "30".to_string(),
                phone: "555".to_string(),
            })
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("userName"));
        assert!(raw.contains("userAge"));
        assert!(raw.contains("userPhone"));
    }
}
