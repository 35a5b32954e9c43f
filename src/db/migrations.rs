use rusqlite::Connection;
use tracing::{info, warn};

use super::schema::{CREATE_INDEXES, CREATE_TABLES, CREATE_WORDS_NEW, DEFAULT_TEXTS};
use crate::utils::error::AppResult;

/// Kolumner i målschemat som kopieras från en gammal words-tabell
const LEGACY_WORD_COLUMNS: &[&str] = &["id", "lemma", "forms", "translation", "comments"];

/// Kör schemainitiering och migrering. Säker att köra vid varje start.
pub fn run_migrations(conn: &Connection) -> AppResult<()> {
    init_schema(conn)?;
    migrate_legacy_words(conn)?;
    conn.execute_batch(CREATE_INDEXES)?;
    Ok(())
}

/// Skapa tabeller och lägg in standardtexter om inga texter finns
pub fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_TABLES)?;

    let text_count: i64 = conn.query_row("SELECT COUNT(*) FROM texts", [], |row| row.get(0))?;
    if text_count == 0 {
        insert_default_texts(conn)?;
    }

    Ok(())
}

fn insert_default_texts(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO texts (name) VALUES (?)")?;

    for name in DEFAULT_TEXTS {
        stmt.execute([*name])?;
    }

    info!("Lade till {} standardtexter", DEFAULT_TEXTS.len());
    Ok(())
}

/// Hämta kolumnnamn för en tabell (tom lista om tabellen saknas)
pub fn table_columns(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Gammal words-tabell utan text_id: bygg om den och koppla alla ord till
/// första texten. Returnerar antal migrerade rader (0 om inget behövdes).
pub fn migrate_legacy_words(conn: &Connection) -> AppResult<usize> {
    let columns = table_columns(conn, "words")?;
    if columns.is_empty() || columns.iter().any(|c| c == "text_id") {
        return Ok(0);
    }

    warn!("Gammal words-tabell utan text_id hittades, uppdaterar struktur");

    let first_text_id: Option<i64> =
        conn.query_row("SELECT MIN(id) FROM texts", [], |row| row.get(0))?;

    // Saknade kolumner i den gamla tabellen blir NULL
    let select_list = LEGACY_WORD_COLUMNS
        .iter()
        .map(|col| {
            if columns.iter().any(|c| c == col) {
                col.to_string()
            } else {
                "NULL".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(CREATE_WORDS_NEW)?;
    let migrated = tx.execute(
        &format!(
            "INSERT INTO words_new (id, lemma, forms, translation, comments, text_id)
             SELECT {}, ?1 FROM words",
            select_list
        ),
        [first_text_id],
    )?;
    tx.execute_batch(
        "DROP TABLE words;
         ALTER TABLE words_new RENAME TO words;",
    )?;
    tx.commit()?;

    info!(
        "Databasen uppdaterad: {} ord kopplade till text {:?}",
        migrated, first_text_id
    );
    Ok(migrated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn text_names(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM texts ORDER BY id")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    }

    #[test]
    fn test_initial_migration() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"texts".to_string()));
        assert!(tables.contains(&"words".to_string()));
        assert_eq!(text_names(&conn), DEFAULT_TEXTS);
    }

    #[test]
    fn test_idempotent_migration() {
        let conn = Connection::open_in_memory().unwrap();

        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        // Ingen dubbel seedning
        assert_eq!(text_names(&conn).len(), DEFAULT_TEXTS.len());
    }

    #[test]
    fn test_no_reseed_after_rename() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute("UPDATE texts SET name = 'Ilias' WHERE name = 'Text1'", [])
            .unwrap();

        run_migrations(&conn).unwrap();

        let names = text_names(&conn);
        assert_eq!(names.len(), DEFAULT_TEXTS.len());
        assert!(!names.contains(&"Text1".to_string()));
    }

    #[test]
    fn test_legacy_words_table_is_migrated() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                lemma TEXT NOT NULL,
                forms TEXT,
                translation TEXT,
                comments TEXT
            );
            INSERT INTO words (lemma, forms, translation, comments)
                VALUES ('test', 'f1, f2', 'prov', 'anm');",
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let columns = table_columns(&conn, "words").unwrap();
        assert!(columns.contains(&"text_id".to_string()));

        let first_text: i64 = conn
            .query_row("SELECT MIN(id) FROM texts", [], |row| row.get(0))
            .unwrap();
        let row: (i64, i64, String, String, String, String) = conn
            .query_row(
                "SELECT id, text_id, lemma, forms, translation, comments FROM words",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?)),
            )
            .unwrap();

        assert_eq!(row.0, 1);
        assert_eq!(row.1, first_text);
        assert_eq!(row.2, "test");
        assert_eq!(row.3, "f1, f2");
        assert_eq!(row.4, "prov");
        assert_eq!(row.5, "anm");
    }

    #[test]
    fn test_legacy_migration_tolerates_missing_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE words (id INTEGER PRIMARY KEY, lemma TEXT NOT NULL);
             INSERT INTO words (lemma) VALUES ('λόγος');",
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let (lemma, forms): (String, Option<String>) = conn
            .query_row("SELECT lemma, forms FROM words", [], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        assert_eq!(lemma, "λόγος");
        assert_eq!(forms, None);
    }

    #[test]
    fn test_legacy_migration_is_noop_when_current() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        assert_eq!(migrate_legacy_words(&conn).unwrap(), 0);
    }

    #[test]
    fn test_legacy_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.db");

        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE words (id INTEGER PRIMARY KEY AUTOINCREMENT, lemma TEXT NOT NULL,
                                     forms TEXT, translation TEXT, comments TEXT);
                 INSERT INTO words (lemma) VALUES ('ἄνθρωπος');
                 INSERT INTO words (lemma) VALUES ('θεός');",
            )
            .unwrap();
        }

        let db = crate::db::Database::open(&path).unwrap();
        db.migrate().unwrap();
        db.migrate().unwrap();

        let first = db.texts().find_all().unwrap()[0].id;
        let words = db.words().find_by_text(first, None).unwrap();
        assert_eq!(words.len(), 2);
    }
}
