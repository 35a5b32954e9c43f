/// SQL-schema för ordförrådet
/// Kompatibelt med äldre words.db-filer

pub const CREATE_TABLES: &str = r#"
-- Texter (en flik per text)
CREATE TABLE IF NOT EXISTS texts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

-- Ord
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text_id INTEGER,
    lemma TEXT NOT NULL,
    forms TEXT,
    translation TEXT,
    comments TEXT,
    FOREIGN KEY (text_id) REFERENCES texts(id)
);
"#;

/// Index skapas först när words har text_id (efter ev. migrering)
pub const CREATE_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_words_text ON words(text_id);
"#;

/// Ersättningstabell vid migrering av gammal words-tabell
pub const CREATE_WORDS_NEW: &str = r#"
CREATE TABLE words_new (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text_id INTEGER,
    lemma TEXT NOT NULL,
    forms TEXT,
    translation TEXT,
    comments TEXT,
    FOREIGN KEY (text_id) REFERENCES texts(id)
);
"#;

/// Standardtexter att skapa vid första start
pub const DEFAULT_TEXTS: &[&str] = &["Text1", "Text2", "Text3", "Text4", "Text5"];
