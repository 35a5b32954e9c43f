use egui::{self, RichText};

use crate::db::Database;
use crate::services::ImportService;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::error::AppResult;

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// Visar bekräftelsedialog och returnerar true om åtgärden bekräftades
    pub fn show(ctx: &egui::Context, state: &mut AppState, db: &Database) -> Option<bool> {
        if !state.show_confirm_dialog {
            return None;
        }

        let icon = match state.confirm_dialog_action {
            Some(ConfirmAction::ImportJson(_)) => Icons::IMPORT,
            _ => Icons::DELETE,
        };

        let mut result = None;

        egui::Window::new("Bekräfta")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(icon).size(32.0).color(Colors::WARNING));
                    ui.add_space(8.0);
                    ui.label(&state.confirm_dialog_message);
                });

                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Avbryt").clicked() {
                        state.close_confirm();
                        result = Some(false);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = ui.button(RichText::new("Bekräfta").color(Colors::ERROR));

                        if confirm_button.clicked() {
                            if let Some(action) = state.confirm_dialog_action.take() {
                                Self::execute_action(action, state, db);
                            }
                            state.close_confirm();
                            result = Some(true);
                        }
                    });
                });
            });

        result
    }

    fn execute_action(action: ConfirmAction, state: &mut AppState, db: &Database) {
        match Self::run(&action, state, db) {
            Ok(message) => {
                state.mark_data_changed();
                state.show_success(&message);
            }
            Err(e) => {
                tracing::warn!("Åtgärden {:?} misslyckades: {}", action, e);
                state.show_error(&format!("Misslyckades: {}", e));
            }
        }
    }

    fn run(action: &ConfirmAction, state: &AppState, db: &Database) -> AppResult<String> {
        state.session.require_editor()?;

        match action {
            ConfirmAction::DeleteWord(id) => {
                db.words().delete(*id)?;
                Ok("Ordet raderat".to_string())
            }
            ConfirmAction::ImportJson(path) => {
                let result = ImportService::new(db).import_file(path)?;
                Ok(result.summary())
            }
        }
    }
}
