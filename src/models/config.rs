use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::session::EditorSecret;
use crate::utils::path::get_config_path;

/// Miljövariabel som går före lösenordet i settings.toml
pub const PASSWORD_ENV_VAR: &str = "LEXIKON_EDITOR_PASSWORD";

/// Applikationsinställningar som inte sparas i databas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Redigeringslösenord (klartext)
    pub editor_password: Option<String>,
    /// Egen sökväg till databasen
    pub database_path: Option<PathBuf>,
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            editor_password: None,
            database_path: None,
            dark_mode: false,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::load_from(&get_config_path())
    }

    /// Ladda från fil, standardvärden om filen saknas eller är trasig
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Kunde inte läsa inställningar {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Lösenordet från miljön, annars från filen
    pub fn editor_secret(&self) -> EditorSecret {
        let from_env = std::env::var(PASSWORD_ENV_VAR).ok();
        Self::resolve_secret(from_env, self.editor_password.clone())
    }

    fn resolve_secret(from_env: Option<String>, from_file: Option<String>) -> EditorSecret {
        let env = from_env.filter(|s| !s.is_empty());
        EditorSecret::new(env.or(from_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_settings_toml_roundtrip() {
        let settings = AppSettings {
            editor_password: Some("greek".into()),
            database_path: Some(PathBuf::from("/tmp/ord.db")),
            dark_mode: true,
            ..Default::default()
        };

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let loaded: AppSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: AppSettings = toml::from_str("dark_mode = true\n").unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.editor_password, None);
        assert_eq!(loaded.window_width, 1200.0);
    }

    #[test]
    fn test_load_missing_or_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = AppSettings::load_from(&dir.path().join("saknas.toml"));
        assert_eq!(missing, AppSettings::default());

        let corrupt = dir.path().join("trasig.toml");
        std::fs::write(&corrupt, "dark_mode = [").unwrap();
        assert_eq!(AppSettings::load_from(&corrupt), AppSettings::default());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = AppSettings {
            editor_password: Some("λόγος".into()),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_env_password_takes_precedence() {
        let secret = AppSettings::resolve_secret(Some("env".into()), Some("fil".into()));
        let mut session = crate::models::Session::new();
        assert!(session.sign_in_editor("env", &secret).is_ok());

        let secret = AppSettings::resolve_secret(Some(String::new()), Some("fil".into()));
        let mut session = crate::models::Session::new();
        assert!(session.sign_in_editor("fil", &secret).is_ok());

        assert!(!AppSettings::resolve_secret(None, None).is_configured());
    }
}
