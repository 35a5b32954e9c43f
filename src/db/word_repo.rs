use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

use super::lock;
use super::text_repo::text_exists;
use crate::models::Word;
use crate::utils::error::{AppError, AppResult};

const WORD_COLUMNS: &str = "id, text_id, lemma, forms, translation, comments";

pub struct WordRepository {
    conn: Arc<Mutex<Connection>>,
}

impl WordRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Hämta alla ord i id-ordning (används av export)
    pub fn find_all(&self) -> AppResult<Vec<Word>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM words ORDER BY id", WORD_COLUMNS))?;

        let words = stmt
            .query_map([], Self::row_to_word)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(words)
    }

    /// Ord i en text, sorterade på lemma (id vid lika lemma).
    /// Med söktext behålls ord där lemma eller översättning innehåller
    /// texten, utan hänsyn till skiftläge.
    pub fn find_by_text(&self, text_id: i64, search: Option<&str>) -> AppResult<Vec<Word>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM words WHERE text_id = ? ORDER BY lemma, id",
            WORD_COLUMNS
        ))?;

        let words = stmt
            .query_map([text_id], Self::row_to_word)?
            .collect::<Result<Vec<_>, _>>()?;

        // SQLite LIKE viker bara ASCII, så filtreringen görs här
        let words = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => words.into_iter().filter(|w| w.matches_search(term)).collect(),
            None => words,
        };

        Ok(words)
    }

    /// Hämta ord via ID
    pub fn find_by_id(&self, id: i64) -> AppResult<Option<Word>> {
        let conn = lock(&self.conn)?;
        let word = conn
            .query_row(
                &format!("SELECT {} FROM words WHERE id = ?", WORD_COLUMNS),
                [id],
                Self::row_to_word,
            )
            .optional()?;

        Ok(word)
    }

    /// Skapa nytt ord i en befintlig text
    pub fn create(&self, word: &mut Word) -> AppResult<i64> {
        word.normalize();
        word.validate()?;
        let text_id = word
            .text_id
            .ok_or_else(|| AppError::validation("Ordet saknar text"))?;

        let conn = lock(&self.conn)?;
        if !text_exists(&conn, text_id)? {
            return Err(AppError::not_found(format!("Text med ID {}", text_id)));
        }

        conn.execute(
            "INSERT INTO words (text_id, lemma, forms, translation, comments)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                text_id,
                word.lemma,
                word.forms,
                word.translation,
                word.comments,
            ],
        )?;

        let id = conn.last_insert_rowid();
        word.id = Some(id);
        tracing::info!("Ord '{}' tillagt i text {} (id {})", word.lemma, text_id, id);

        Ok(id)
    }

    /// Skriv över lemma, former, översättning och kommentarer
    pub fn update(&self, word: &mut Word) -> AppResult<()> {
        let id = word
            .id
            .ok_or_else(|| AppError::validation("Ordet har inget ID"))?;
        word.normalize();
        word.validate()?;

        let conn = lock(&self.conn)?;
        let rows = conn.execute(
            "UPDATE words SET
                lemma = ?1, forms = ?2, translation = ?3, comments = ?4
             WHERE id = ?5",
            params![word.lemma, word.forms, word.translation, word.comments, id],
        )?;

        if rows == 0 {
            return Err(AppError::not_found(format!("Ord med ID {}", id)));
        }

        tracing::info!("Ord {} uppdaterat", id);
        Ok(())
    }

    /// Ta bort ord. Saknat ID är inget fel.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let conn = lock(&self.conn)?;
        let rows = conn.execute("DELETE FROM words WHERE id = ?", [id])?;

        if rows == 0 {
            tracing::debug!("Ord {} fanns inte, inget att ta bort", id);
        } else {
            tracing::info!("Ord {} borttaget", id);
        }

        Ok(())
    }

    /// Räkna antal ord
    pub fn count(&self) -> AppResult<i64> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count)
    }

    pub(crate) fn row_to_word(row: &Row) -> rusqlite::Result<Word> {
        Ok(Word {
            id: row.get(0)?,
            text_id: row.get(1)?,
            lemma: row.get(2)?,
            forms: row.get(3)?,
            translation: row.get(4)?,
            comments: row.get(5)?,
        })
    }
}
