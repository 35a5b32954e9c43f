//! Statistik över ordförrådet

use serde::Serialize;

use crate::db::Database;
use crate::utils::error::AppResult;

/// Antal ord i en text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextWordCount {
    pub text_id: i64,
    pub name: String,
    pub word_count: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VocabularyStats {
    /// Alla ord, även sådana utan giltig text
    pub total_words: i64,
    pub per_text: Vec<TextWordCount>,
}

pub struct StatsService<'a> {
    db: &'a Database,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Totalt antal ord plus antal per text (texter utan ord tas med)
    pub fn get_stats(&self) -> AppResult<VocabularyStats> {
        self.db.with_connection(|conn| {
            let total_words: i64 =
                conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;

            let mut stmt = conn.prepare(
                "SELECT t.id, t.name, COUNT(w.id)
                 FROM texts t
                 LEFT JOIN words w ON w.text_id = t.id
                 GROUP BY t.id, t.name
                 ORDER BY t.name, t.id",
            )?;

            let per_text = stmt
                .query_map([], |row| {
                    Ok(TextWordCount {
                        text_id: row.get(0)?,
                        name: row.get(1)?,
                        word_count: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(VocabularyStats {
                total_words,
                per_text,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Word;

    #[test]
    fn test_stats_include_empty_texts() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            conn.execute("DELETE FROM texts", [])?;
            Ok(())
        })
        .unwrap();

        let t1 = db.texts().create("text1").unwrap();
        let t2 = db.texts().create("text2").unwrap();
        let t3 = db.texts().create("text3").unwrap();
        db.words().create(&mut Word::new(t1, "λύω")).unwrap();
        db.words().create(&mut Word::new(t1, "γράφω")).unwrap();

        let stats = StatsService::new(&db).get_stats().unwrap();

        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.per_text.len(), 3);
        let counts: Vec<_> = stats.per_text.iter().map(|c| (c.text_id, c.word_count)).collect();
        assert_eq!(counts, vec![(t1, 2), (t2, 0), (t3, 0)]);
    }

    #[test]
    fn test_stats_on_fresh_database() {
        let db = Database::open_in_memory().unwrap();
        let stats = StatsService::new(&db).get_stats().unwrap();

        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.per_text.len(), 5);
        assert!(stats.per_text.iter().all(|c| c.word_count == 0));
    }
}
