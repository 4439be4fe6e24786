//! State file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AdminError, Result};

use super::models::{StateFile, STATE_VERSION};

/// Handles reading and writing the local state file
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state from disk.
    /// Returns an empty state if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<StateFile> {
        if !self.path.exists() {
            debug!("State file {} not found, starting empty", self.path.display());
            return Ok(StateFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            AdminError::State(format!(
                "Failed to read state file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let state: StateFile = serde_json::from_str(&content).map_err(|e| {
            AdminError::State(format!(
                "Failed to parse state file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if state.version != STATE_VERSION {
            return Err(AdminError::State(format!(
                "Unsupported state file version {} in {} (expected {})",
                state.version,
                self.path.display(),
                STATE_VERSION
            )));
        }

        Ok(state)
    }

    /// Save the state to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, state: &StateFile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AdminError::State(format!(
                    "Failed to create state directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AdminError::State(format!("Failed to serialize state: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            AdminError::State(format!(
                "Failed to write temp state file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                AdminError::State(format!("Failed to set permissions on state file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            AdminError::State(format!(
                "Failed to rename temp state file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "Saved {} entries to {}",
            state.resources.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{EntityState, ResourceType};
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> StateStore {
        StateStore::new(dir.path().join("state.json"))
    }

    fn entry(id: &str) -> EntityState {
        EntityState {
            resource_type: ResourceType::OrganizationInvite,
            id: id.to_string(),
            attributes: serde_json::json!({ "id": id, "email": "a@example.com", "role": "user" })
                .as_object()
                .cloned()
                .unwrap(),
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let state = test_store(&dir).load().unwrap();
        assert!(state.resources.is_empty());
    }

    #[test]
    fn test_load_corrupt_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();
        let err = StateStore::new(path).load().unwrap_err().to_string();
        assert!(err.contains("Failed to parse state file"));
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"version": 99, "resources": {}}"#).unwrap();
        let err = StateStore::new(path).load().unwrap_err().to_string();
        assert!(err.contains("Unsupported state file version 99"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let store = StateStore::new(path.clone());
        store.save(&StateFile::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let mut state = StateFile::default();
        state.resources.insert("invite".to_string(), entry("invite_01"));
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert!(!dir.path().join("state.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&StateFile::default()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
