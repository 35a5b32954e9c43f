use egui::{self, RichText};

use crate::db::Database;
use crate::ui::{
    state::{AppState, WordFormData},
    theme::{Colors, Icons},
};
use crate::utils::error::{AppError, AppResult};

pub struct WordFormModal {
    form_data: WordFormData,
    error_message: Option<String>,
    /// (ord som redigeras, text för nytt ord) som formuläret laddats för
    loaded_for: Option<(Option<i64>, Option<i64>)>,
}

impl WordFormModal {
    pub fn new() -> Self {
        Self {
            form_data: WordFormData::default(),
            error_message: None,
            loaded_for: None,
        }
    }

    /// Töm formuläret när det är stängt, läs om när målet byts
    pub fn sync(&mut self, state: &AppState, db: &Database) -> AppResult<()> {
        if !state.show_word_form {
            self.reset();
            return Ok(());
        }

        let target = (state.editing_word_id, state.word_form_text_id);
        if self.loaded_for == Some(target) {
            return Ok(());
        }

        self.form_data = match target {
            (Some(word_id), _) => {
                let word = db
                    .words()
                    .find_by_id(word_id)?
                    .ok_or_else(|| AppError::not_found(format!("Ord med ID {}", word_id)))?;
                WordFormData::from_word(&word)
            }
            (None, Some(text_id)) => {
                if !db.texts().exists(text_id)? {
                    return Err(AppError::not_found(format!("Text med ID {}", text_id)));
                }
                WordFormData::default()
            }
            (None, None) => return Err(AppError::validation("Ingen text vald")),
        };
        self.error_message = None;
        self.loaded_for = Some(target);
        Ok(())
    }

    /// Visar modalen och returnerar true om den ska stängas
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, db: &Database) -> bool {
        if let Err(e) = self.sync(state, db) {
            state.show_error(&format!("Kunde inte öppna ordet: {}", e));
            self.reset();
            return true;
        }

        if !state.show_word_form {
            return false;
        }

        let mut should_close = false;

        let title = if state.editing_word_id.is_some() {
            "Redigera ord"
        } else {
            "Lägg till ord"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(460.0);

                egui::Grid::new("word_form_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Lemma*:");
                        ui.add(egui::TextEdit::singleline(&mut self.form_data.lemma).hint_text("λύω"));
                        ui.end_row();

                        ui.label("Huvudformer:");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.form_data.forms)
                                .hint_text("λύω, λύσω, ἔλυσα, λέλυκα...")
                                .desired_rows(2),
                        );
                        ui.end_row();

                        ui.label("Översättning:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form_data.translation)
                                .hint_text("lösa, befria"),
                        );
                        ui.end_row();

                        ui.label("Kommentarer:");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.form_data.comments)
                                .hint_text("Mina anteckningar...")
                                .desired_rows(3),
                        );
                        ui.end_row();
                    });

                // Felmeddelande
                if let Some(ref error) = self.error_message {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(Colors::ERROR));
                }

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Avbryt").clicked() {
                        self.reset();
                        should_close = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("{} Spara", Icons::SAVE)).clicked() {
                            match self.save(state, db) {
                                Ok(lemma) => {
                                    self.reset();
                                    should_close = true;
                                    state.mark_data_changed();
                                    state.show_success(&format!("Ordet '{}' sparat", lemma));
                                }
                                Err(e) => {
                                    self.error_message = Some(e.to_string());
                                }
                            }
                        }
                    });
                });
            });

        should_close
    }

    /// Spara och returnera lemmat
    fn save(&self, state: &AppState, db: &Database) -> AppResult<String> {
        state.session.require_editor()?;

        if let Some(word_id) = state.editing_word_id {
            let mut word = self.form_data.to_word(Some(word_id), None);
            db.words().update(&mut word)?;
            Ok(word.lemma)
        } else {
            let text_id = state
                .word_form_text_id
                .ok_or_else(|| AppError::validation("Ingen text vald"))?;
            let mut word = self.form_data.to_word(None, Some(text_id));
            db.words().create(&mut word)?;
            Ok(word.lemma)
        }
    }

    fn reset(&mut self) {
        self.form_data.clear();
        self.error_message = None;
        self.loaded_for = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Word;

    fn setup() -> (Database, i64, i64) {
        let db = Database::open_in_memory().unwrap();
        let text_id = db.texts().find_all().unwrap()[0].id;
        let word_id = db
            .words()
            .create(&mut Word::new(text_id, "λύω").with_translation("to free"))
            .unwrap();
        (db, text_id, word_id)
    }

    #[test]
    fn test_new_word_after_cancelled_edit_starts_empty() {
        let (db, text_id, word_id) = setup();
        let mut state = AppState::new();
        let mut modal = WordFormModal::new();

        state.open_edit_word_form(word_id);
        modal.sync(&state, &db).unwrap();
        assert_eq!(modal.form_data.lemma, "λύω");

        // Escape stänger bara flaggan i AppState
        state.close_word_form();
        modal.sync(&state, &db).unwrap();

        state.open_new_word_form(text_id);
        modal.sync(&state, &db).unwrap();
        assert_eq!(modal.form_data, WordFormData::default());
    }

    #[test]
    fn test_reopened_edit_discards_unsaved_changes() {
        let (db, _, word_id) = setup();
        let mut state = AppState::new();
        let mut modal = WordFormModal::new();

        state.open_edit_word_form(word_id);
        modal.sync(&state, &db).unwrap();
        modal.form_data.lemma = "ändrat".into();

        state.close_word_form();
        modal.sync(&state, &db).unwrap();
        state.open_edit_word_form(word_id);
        modal.sync(&state, &db).unwrap();

        assert_eq!(modal.form_data.lemma, "λύω");
        assert_eq!(modal.form_data.translation, "to free");
    }

    #[test]
    fn test_switching_target_while_open_reloads() {
        let (db, text_id, word_id) = setup();
        let mut state = AppState::new();
        let mut modal = WordFormModal::new();

        state.open_edit_word_form(word_id);
        modal.sync(&state, &db).unwrap();
        state.open_new_word_form(text_id);
        modal.sync(&state, &db).unwrap();

        assert!(modal.form_data.lemma.is_empty());
    }

    #[test]
    fn test_missing_word_or_text_is_an_error() {
        let (db, _, _) = setup();
        let mut state = AppState::new();
        let mut modal = WordFormModal::new();

        state.open_edit_word_form(999);
        assert!(matches!(modal.sync(&state, &db), Err(AppError::NotFound(_))));

        state.open_new_word_form(999);
        assert!(matches!(modal.sync(&state, &db), Err(AppError::NotFound(_))));
    }
}
