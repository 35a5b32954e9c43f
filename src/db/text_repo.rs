use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

use super::lock;
use crate::models::Text;
use crate::utils::error::{AppError, AppResult};

pub struct TextRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TextRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Hämta alla texter sorterade på namn
    pub fn find_all(&self) -> AppResult<Vec<Text>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, name FROM texts ORDER BY name, id")?;

        let texts = stmt
            .query_map([], Self::row_to_text)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(texts)
    }

    /// Hämta text via ID
    pub fn find_by_id(&self, id: i64) -> AppResult<Option<Text>> {
        let conn = lock(&self.conn)?;
        let text = conn
            .query_row("SELECT id, name FROM texts WHERE id = ?", [id], Self::row_to_text)
            .optional()?;

        Ok(text)
    }

    pub fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = lock(&self.conn)?;
        text_exists(&conn, id)
    }

    /// Skapa ny text, fel om namnet redan finns
    pub fn create(&self, name: &str) -> AppResult<i64> {
        let name = Text::normalize_name(name)?;

        let conn = lock(&self.conn)?;
        conn.execute("INSERT INTO texts (name) VALUES (?)", [&name])
            .map_err(|e| Self::map_unique(e, &name))?;

        let id = conn.last_insert_rowid();
        tracing::info!("Text '{}' skapad (id {})", name, id);

        Ok(id)
    }

    /// Byt namn på text. Samma namn som nu är en no-op.
    pub fn rename(&self, id: i64, new_name: &str) -> AppResult<()> {
        let new_name = Text::normalize_name(new_name)?;

        let conn = lock(&self.conn)?;
        let rows = conn
            .execute(
                "UPDATE texts SET name = ?1 WHERE id = ?2",
                params![new_name, id],
            )
            .map_err(|e| Self::map_unique(e, &new_name))?;

        if rows == 0 {
            return Err(AppError::not_found(format!("Text med ID {}", id)));
        }

        tracing::info!("Text {} bytte namn till '{}'", id, new_name);
        Ok(())
    }

    /// Räkna antal texter
    pub fn count(&self) -> AppResult<i64> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM texts", [], |row| row.get(0))?;
        Ok(count)
    }

    fn map_unique(err: rusqlite::Error, name: &str) -> AppError {
        if AppError::is_unique_violation(&err) {
            AppError::duplicate_name(name)
        } else {
            err.into()
        }
    }

    fn row_to_text(row: &Row) -> rusqlite::Result<Text> {
        Ok(Text {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

pub(crate) fn text_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM texts WHERE id = ?)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_create_and_find() {
        let db = setup_db();
        let repo = db.texts();

        let id = repo.create("Anabasis").unwrap();
        assert!(id > 0);

        let found = repo.find_by_id(id).unwrap();
        assert_eq!(found.map(|t| t.name), Some("Anabasis".into()));
        assert!(repo.exists(id).unwrap());
        assert!(repo.find_by_id(9999).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_name_fails_and_count_unchanged() {
        let db = setup_db();
        let repo = db.texts();
        let before = repo.count().unwrap();

        let err = repo.create("Text1").unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(ref n) if n == "Text1"));
        assert_eq!(repo.count().unwrap(), before);

        // Skiftlägeskänslig jämförelse
        assert!(repo.create("text1").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let db = setup_db();
        let repo = db.texts();

        assert!(matches!(repo.create(" Text1 "), Err(AppError::DuplicateName(ref n)) if n == "Text1"));

        let id = repo.create("  Ilias ").unwrap();
        assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "Ilias");

        repo.rename(id, "Odysseia  ").unwrap();
        assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "Odysseia");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let db = setup_db();
        assert!(matches!(db.texts().create("  "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rename() {
        let db = setup_db();
        let repo = db.texts();
        let id = repo.create("Ilias").unwrap();

        repo.rename(id, "Odysseia").unwrap();
        assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "Odysseia");

        let err = repo.rename(id, "Text2").unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "Odysseia");
    }

    #[test]
    fn test_rename_to_same_name_is_noop() {
        let db = setup_db();
        let repo = db.texts();
        let before = repo.find_all().unwrap();

        let id = before[0].id;
        let name = before[0].name.clone();
        repo.rename(id, &name).unwrap();

        assert_eq!(repo.find_all().unwrap(), before);
    }

    #[test]
    fn test_rename_missing_text() {
        let db = setup_db();
        assert!(matches!(
            db.texts().rename(9999, "Ny"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_find_all_sorted_by_name() {
        let db = setup_db();
        let repo = db.texts();
        repo.create("Anabasis").unwrap();
        repo.create("Zeta").unwrap();

        let names: Vec<String> = repo.find_all().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Anabasis", "Text1", "Text2", "Text3", "Text4", "Text5", "Zeta"]
        );
    }
}
