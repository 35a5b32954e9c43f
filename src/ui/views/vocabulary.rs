use std::collections::HashMap;

use egui::{self, RichText};

use crate::db::Database;
use crate::models::{Text, Word};
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{lemma_text, Colors, Icons},
};

enum WordAction {
    Edit(i64),
    Delete(i64, String),
}

/// Flikar per text med sökning och ordlista
pub struct VocabularyView {
    texts: Vec<Text>,
    words: Vec<Word>,
    /// Söktext per text, behålls när man byter flik
    search_queries: HashMap<i64, String>,
    /// (text, söktext) som `words` laddades för
    loaded_for: Option<(i64, String)>,
    needs_refresh: bool,
}

impl VocabularyView {
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            words: Vec::new(),
            search_queries: HashMap::new(),
            loaded_for: None,
            needs_refresh: true,
        }
    }

    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    fn refresh_texts(&mut self, state: &mut AppState, db: &Database) {
        match db.texts().find_all() {
            Ok(texts) => self.texts = texts,
            Err(e) => {
                tracing::error!("Kunde inte läsa texter: {}", e);
                state.show_error("Kunde inte läsa texter");
            }
        }

        // Vald text måste finnas, annars välj första
        let selected_exists = state
            .selected_text_id
            .is_some_and(|id| self.texts.iter().any(|t| t.id == id));
        if !selected_exists {
            state.selected_text_id = self.texts.first().map(|t| t.id);
        }

        self.loaded_for = None;
    }

    fn refresh_words(&mut self, text_id: i64, db: &Database) {
        let query = self.search_queries.get(&text_id).cloned().unwrap_or_default();
        let key = (text_id, query);
        if self.loaded_for.as_ref() == Some(&key) {
            return;
        }

        let search = Some(key.1.as_str()).filter(|q| !q.trim().is_empty());
        match db.words().find_by_text(text_id, search) {
            Ok(words) => self.words = words,
            Err(e) => {
                tracing::error!("Kunde inte läsa ord för text {}: {}", text_id, e);
                self.words.clear();
            }
        }
        self.loaded_for = Some(key);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, db: &Database) {
        if self.needs_refresh {
            self.refresh_texts(state, db);
            self.needs_refresh = false;
        }

        ui.heading(format!("{} Ordförråd", Icons::BOOK));
        ui.add_space(8.0);

        // Flikar
        ui.horizontal_wrapped(|ui| {
            for text in &self.texts {
                let selected = state.selected_text_id == Some(text.id);
                if ui.selectable_label(selected, &text.name).clicked() {
                    state.selected_text_id = Some(text.id);
                }
            }
        });

        ui.separator();

        let Some(text_id) = state.selected_text_id else {
            ui.label(RichText::new("Det finns inga texter").color(Colors::TEXT_MUTED));
            return;
        };

        // Sökning och nytt ord
        ui.horizontal(|ui| {
            ui.label(Icons::SEARCH);
            let query = self.search_queries.entry(text_id).or_default();
            let response = ui.add(
                egui::TextEdit::singleline(query)
                    .hint_text("Sök lemma eller översättning...")
                    .desired_width(260.0),
            );
            if state.focus_search {
                response.request_focus();
                state.focus_search = false;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.can_edit() {
                    if ui.button(format!("{} Lägg till ord", Icons::ADD)).clicked() {
                        state.open_new_word_form(text_id);
                    }
                } else {
                    ui.label(
                        RichText::new(format!("{} Visningsläge, ändringar är låsta", Icons::LOCK))
                            .color(Colors::INFO),
                    );
                }
            });
        });

        self.refresh_words(text_id, db);

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("{} ord", self.words.len()))
                .small()
                .color(Colors::TEXT_MUTED),
        );
        ui.add_space(4.0);

        let can_edit = state.can_edit();
        let mut action = None;

        egui::ScrollArea::vertical()
            .id_salt("word_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.words.is_empty() {
                    ui.label(RichText::new("Inga ord").color(Colors::TEXT_MUTED));
                }

                for word in &self.words {
                    let Some(id) = word.id else { continue };

                    egui::CollapsingHeader::new(lemma_text(word.headline()))
                        .id_salt(("word", id))
                        .show(ui, |ui| {
                            Self::word_details(ui, word);

                            if can_edit {
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    if ui.button(format!("{} Redigera", Icons::EDIT)).clicked() {
                                        action = Some(WordAction::Edit(id));
                                    }
                                    if ui
                                        .button(RichText::new(format!("{} Radera", Icons::DELETE)).color(Colors::ERROR))
                                        .clicked()
                                    {
                                        action = Some(WordAction::Delete(id, word.lemma.clone()));
                                    }
                                });
                            }
                        });
                }
            });

        match action {
            Some(WordAction::Edit(id)) => state.open_edit_word_form(id),
            Some(WordAction::Delete(id, lemma)) => {
                state.show_confirm(
                    &format!("Vill du radera '{}'?", lemma),
                    ConfirmAction::DeleteWord(id),
                );
            }
            None => {}
        }
    }

    fn word_details(ui: &mut egui::Ui, word: &Word) {
        egui::Grid::new(("word_details", word.id))
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Huvudformer:").color(Colors::TEXT_MUTED));
                ui.label(lemma_text(word.forms.as_deref().unwrap_or("-")));
                ui.end_row();

                ui.label(RichText::new("Översättning:").color(Colors::TEXT_MUTED));
                ui.label(word.translation.as_deref().unwrap_or("-"));
                ui.end_row();

                if let Some(ref comments) = word.comments {
                    ui.label(RichText::new("Kommentarer:").color(Colors::TEXT_MUTED));
                    ui.label(comments);
                    ui.end_row();
                }
            });
    }
}
