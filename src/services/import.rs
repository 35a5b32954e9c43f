//! Import-tjänst: ersätter all data med innehållet i en JSON-export

use std::path::Path;

use rusqlite::params;

use crate::db::Database;
use crate::models::Text;
use crate::services::export::ExportDocument;
use crate::utils::error::{AppError, AppResult};

/// Förhandsgranskning av en importfil
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreview {
    pub export_date: String,
    pub text_count: usize,
    pub word_count: usize,
}

/// Resultat av en import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub texts_imported: usize,
    pub words_imported: usize,
}

impl ImportResult {
    pub fn summary(&self) -> String {
        format!(
            "Import klar: {} texter, {} ord",
            self.texts_imported, self.words_imported
        )
    }
}

pub struct ImportService<'a> {
    db: &'a Database,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Tolka och validera ett exportdokument utan att skriva något.
    /// Textnamn trimmas som vid `TextRepository::create`.
    pub fn parse(document: &str) -> AppResult<ExportDocument> {
        let mut doc: ExportDocument =
            serde_json::from_str(document).map_err(|e| AppError::import("Ogiltigt importdokument", e))?;

        for text in &mut doc.texts {
            text.name = Text::normalize_name(&text.name)
                .map_err(|e| AppError::import(format!("Text {}", text.id), e))?;
        }

        for word in &doc.words {
            word.to_word()
                .validate()
                .map_err(|e| AppError::import(format!("Ord {}", word.id), e))?;
        }

        Ok(doc)
    }

    pub fn preview(&self, document: &str) -> AppResult<ImportPreview> {
        let doc = Self::parse(document)?;
        Ok(ImportPreview {
            export_date: doc.export_date,
            text_count: doc.texts.len(),
            word_count: doc.words.len(),
        })
    }

    /// Läs fil och importera
    pub fn import_file(&self, path: &Path) -> AppResult<ImportResult> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::import(format!("Kunde inte läsa {:?}", path), e))?;
        self.import_json(&content)
    }

    /// Ersätt alla ord och texter. Allt sker i en transaktion, så ett fel
    /// lämnar befintlig data orörd.
    pub fn import_json(&self, document: &str) -> AppResult<ImportResult> {
        let doc = Self::parse(document)?;

        let result = self.db.with_connection_mut(|conn| {
            let tx = conn.transaction()?;

            tx.execute("DELETE FROM words", [])?;
            tx.execute("DELETE FROM texts", [])?;

            {
                let mut insert_text = tx.prepare("INSERT INTO texts (id, name) VALUES (?1, ?2)")?;
                for text in &doc.texts {
                    insert_text
                        .execute(params![text.id, text.name])
                        .map_err(|e| AppError::import(format!("Text {} kunde inte sparas", text.id), e))?;
                }

                let mut insert_word = tx.prepare(
                    "INSERT INTO words (id, text_id, lemma, forms, translation, comments)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                )?;
                for word in &doc.words {
                    insert_word
                        .execute(params![
                            word.id,
                            word.text_id,
                            word.lemma,
                            word.forms,
                            word.translation,
                            word.comments,
                        ])
                        .map_err(|e| AppError::import(format!("Ord {} kunde inte sparas", word.id), e))?;
                }
            }

            tx.commit()?;

            Ok(ImportResult {
                texts_imported: doc.texts.len(),
                words_imported: doc.words.len(),
            })
        });

        match &result {
            Ok(r) => tracing::info!("{}", r.summary()),
            Err(e) => tracing::error!("Import avbruten, ingen data ändrad: {}", e),
        }

        result
    }
}
