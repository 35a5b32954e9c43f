use std::path::{Path, PathBuf};

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("se", "lexikon", "Lexikon")
}

/// Hämta databassökväg
pub fn get_database_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("words.db"))
        .unwrap_or_else(|| PathBuf::from("words.db"))
}

/// Hämta konfigurationssökväg
pub fn get_config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

/// Normalisera sökväg för visning
pub fn display_path(path: &Path) -> String {
    // Förkorta hemkatalogen till ~
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Hämta filändelse
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

/// Kontrollera om en fil är JSON
pub fn is_json_file(path: &Path) -> bool {
    matches!(get_extension(path).as_deref(), Some("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_file() {
        assert!(is_json_file(Path::new("export.json")));
        assert!(is_json_file(Path::new("EXPORT.JSON")));
        assert!(!is_json_file(Path::new("export.csv")));
        assert!(!is_json_file(Path::new("export")));
    }

    #[test]
    fn test_database_path_file_name() {
        assert_eq!(get_database_path().file_name().unwrap(), "words.db");
    }
}
