use egui::{self, RichText};

use crate::db::Database;
use crate::models::SessionMode;
use crate::services::{StatsService, TextWordCount};
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
};

/// Sidopanel med sessionsläge och texthantering
pub struct SidebarView {
    /// Texter med antal ord, sorterade som `TextRepository::find_all`
    texts: Vec<TextWordCount>,
    needs_refresh: bool,
}

impl SidebarView {
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            needs_refresh: true,
        }
    }

    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, db: &Database) {
        if self.needs_refresh {
            match StatsService::new(db).get_stats() {
                Ok(stats) => self.texts = stats.per_text,
                Err(e) => tracing::error!("Kunde inte läsa texter: {}", e),
            }
            self.needs_refresh = false;
        }

        ui.add_space(8.0);

        // Läge
        let mode = state.session.mode();
        let (color, icon) = match mode {
            SessionMode::Editor => (Colors::EDITOR_MODE, Icons::EDIT),
            _ => (Colors::VIEWER_MODE, Icons::EYE),
        };
        ui.label(RichText::new(format!("{} {}", icon, mode.label())).strong().color(color));

        ui.add_space(8.0);

        if mode == SessionMode::Viewer && ui.button(format!("{} Logga in med lösenord", Icons::KEY)).clicked() {
            state.sign_out();
            return;
        }

        if ui.button(format!("{} Logga ut", Icons::LOGOUT)).clicked() {
            state.sign_out();
            return;
        }

        ui.add_space(12.0);
        ui.separator();

        ui.heading(format!("{} Texter", Icons::FOLDER));
        ui.add_space(4.0);

        let can_edit = state.can_edit();
        let mut rename_id = None;

        egui::ScrollArea::vertical().id_salt("sidebar_texts").show(ui, |ui| {
            for text in &self.texts {
                ui.horizontal(|ui| {
                    let selected = state.selected_text_id == Some(text.text_id);
                    let label = format!("{} ({})", text.name, text.word_count);
                    if ui.selectable_label(selected, label).clicked() {
                        state.selected_text_id = Some(text.text_id);
                    }

                    if can_edit && ui.small_button(Icons::EDIT).on_hover_text("Byt namn").clicked() {
                        rename_id = Some(text.text_id);
                    }
                });
            }
        });

        if let Some(id) = rename_id {
            state.open_rename_text_form(id);
        }

        if can_edit {
            ui.add_space(8.0);
            if ui.button(format!("{} Lägg till text", Icons::ADD)).clicked() {
                state.open_add_text_form();
            }
        }
    }
}
