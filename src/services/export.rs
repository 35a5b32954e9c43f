//! Export-tjänst för att exportera ordförrådet (JSON, CSV)

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::db::Database;
use crate::models::{Text, Word};
use crate::utils::error::{AppError, AppResult};

/// Exportformat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// Ord som det ser ut i exportfilen, alla kolumner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: i64,
    #[serde(default)]
    pub text_id: Option<i64>,
    pub lemma: String,
    #[serde(default)]
    pub forms: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl WordRecord {
    pub fn to_word(&self) -> Word {
        Word {
            id: Some(self.id),
            text_id: self.text_id,
            lemma: self.lemma.clone(),
            forms: self.forms.clone(),
            translation: self.translation.clone(),
            comments: self.comments.clone(),
        }
    }

    fn from_word(word: &Word) -> Option<Self> {
        Some(Self {
            id: word.id?,
            text_id: word.text_id,
            lemma: word.lemma.clone(),
            forms: word.forms.clone(),
            translation: word.translation.clone(),
            comments: word.comments.clone(),
        })
    }
}

/// Hela exportdokumentet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "exportDate")]
    pub export_date: String,
    pub texts: Vec<Text>,
    pub words: Vec<WordRecord>,
}

/// Export-tjänst
pub struct ExportService<'a> {
    db: &'a Database,
}

impl<'a> ExportService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Generera filnamn för export
    pub fn generate_filename(format: ExportFormat) -> String {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        format!("lexikon_export_{}.{}", timestamp, format.extension())
    }

    /// Ögonblicksbild av båda tabellerna, id-ordning
    pub fn snapshot(&self) -> AppResult<ExportDocument> {
        let mut texts = self.db.texts().find_all()?;
        texts.sort_by_key(|t| t.id);

        let words = self
            .db
            .words()
            .find_all()?
            .iter()
            .filter_map(WordRecord::from_word)
            .collect();

        Ok(ExportDocument {
            export_date: Utc::now().to_rfc3339(),
            texts,
            words,
        })
    }

    pub fn export_json(&self) -> AppResult<String> {
        let document = self.snapshot()?;
        serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::other(format!("JSON serialisering misslyckades: {}", e)))
    }

    /// Ord med textnamn, id-ordning, med rubrikrad
    pub fn export_csv(&self) -> AppResult<String> {
        let rows = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT w.id, w.text_id, t.name, w.lemma, w.forms, w.translation, w.comments
                 FROM words w
                 LEFT JOIN texts t ON t.id = w.text_id
                 ORDER BY w.id",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(CsvRow {
                        id: row.get(0)?,
                        text_id: row.get(1)?,
                        text_name: row.get(2)?,
                        lemma: row.get(3)?,
                        forms: row.get(4)?,
                        translation: row.get(5)?,
                        comments: row.get(6)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        let mut csv = String::new();

        // Header
        csv.push_str("id,text_id,text_name,lemma,forms,translation,comments\n");

        // Rader
        for r in &rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                r.id,
                r.text_id.map(|id| id.to_string()).unwrap_or_default(),
                Self::csv_escape(r.text_name.as_deref().unwrap_or("")),
                Self::csv_escape(&r.lemma),
                Self::csv_escape(r.forms.as_deref().unwrap_or("")),
                Self::csv_escape(r.translation.as_deref().unwrap_or("")),
                Self::csv_escape(r.comments.as_deref().unwrap_or("")),
            ));
        }

        Ok(csv)
    }

    /// Exportera till fil
    pub fn export_to_file(&self, format: ExportFormat, path: &Path) -> Result<ExportResult> {
        let content = match format {
            ExportFormat::Json => self.export_json()?,
            ExportFormat::Csv => self.export_csv()?,
        };

        std::fs::write(path, &content).context("Kunde inte skriva fil")?;

        let result = ExportResult {
            format,
            row_count: self.db.words().count()? as usize,
            file_size: content.len(),
        };
        tracing::info!("{} till {:?}", result.summary(), path);

        Ok(result)
    }

    /// Escape CSV-värde
    fn csv_escape(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

struct CsvRow {
    id: i64,
    text_id: Option<i64>,
    text_name: Option<String>,
    lemma: String,
    forms: Option<String>,
    translation: Option<String>,
    comments: Option<String>,
}

/// Resultat av export
#[derive(Debug)]
pub struct ExportResult {
    pub format: ExportFormat,
    pub row_count: usize,
    pub file_size: usize,
}

impl ExportResult {
    pub fn summary(&self) -> String {
        format!(
            "{} exporterad: {} ord, {} bytes",
            self.format.display_name(),
            self.row_count,
            self.file_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let texts = db.texts().find_all().unwrap();
        db.words()
            .create(&mut Word::new(texts[0].id, "λύω").with_translation("to free, loosen"))
            .unwrap();
        db.words()
            .create(&mut Word::new(texts[1].id, "γράφω").with_comments("säger \"skriva\""))
            .unwrap();
        db
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(ExportService::csv_escape("hello"), "hello");
        assert_eq!(ExportService::csv_escape("hello,world"), "\"hello,world\"");
        assert_eq!(
            ExportService::csv_escape("say \"hello\""),
            "\"say \"\"hello\"\"\""
        );
        assert_eq!(ExportService::csv_escape("rad1\nrad2"), "\"rad1\nrad2\"");
    }

    #[test]
    fn test_generate_filename() {
        let filename = ExportService::generate_filename(ExportFormat::Json);
        assert!(filename.starts_with("lexikon_export_"));
        assert!(filename.ends_with(".json"));

        let filename = ExportService::generate_filename(ExportFormat::Csv);
        assert!(filename.ends_with(".csv"));
    }

    #[test]
    fn test_export_json_structure() {
        let db = seeded_db();
        let json = ExportService::new(&db).export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["exportDate"].is_string());
        assert_eq!(value["texts"].as_array().unwrap().len(), 5);
        assert_eq!(value["words"].as_array().unwrap().len(), 2);
        assert_eq!(value["words"][0]["lemma"], "λύω");
        assert_eq!(value["words"][0]["text_id"], 1);
        assert!(value["words"][0]["forms"].is_null());

        let text_ids: Vec<i64> = value["texts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(text_ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_export_csv() {
        let db = seeded_db();
        let csv = ExportService::new(&db).export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "id,text_id,text_name,lemma,forms,translation,comments");
        assert_eq!(lines[1], "1,1,Text1,λύω,,\"to free, loosen\",");
        assert_eq!(lines[2], "2,2,Text2,γράφω,,,\"säger \"\"skriva\"\"\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_to_file() {
        let db = seeded_db();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ord.csv");

        let result = ExportService::new(&db)
            .export_to_file(ExportFormat::Csv, &path)
            .unwrap();

        assert_eq!(result.row_count, 2);
        assert_eq!(result.file_size as u64, std::fs::metadata(&path).unwrap().len());
        assert!(result.summary().starts_with("CSV exporterad"));
    }
}
