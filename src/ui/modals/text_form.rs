use egui::{self, RichText};

use crate::db::Database;
use crate::ui::{
    state::{AppState, TextFormMode},
    theme::{Colors, Icons},
};
use crate::utils::error::{AppError, AppResult};

/// Formulär för att lägga till eller byta namn på en text
pub struct TextFormModal {
    name: String,
    error_message: Option<String>,
    loaded_for: Option<TextFormMode>,
}

impl TextFormModal {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            error_message: None,
            loaded_for: None,
        }
    }

    /// Töm formuläret när det är stängt, läs in namnet när läget byts
    pub fn sync(&mut self, state: &AppState, db: &Database) -> AppResult<()> {
        if !state.show_text_form {
            self.reset();
            return Ok(());
        }

        let mode = state.text_form_mode;
        if self.loaded_for == Some(mode) {
            return Ok(());
        }

        self.name = match mode {
            TextFormMode::Add => String::new(),
            TextFormMode::Rename(id) => {
                db.texts()
                    .find_by_id(id)?
                    .ok_or_else(|| AppError::not_found(format!("Text med ID {}", id)))?
                    .name
            }
        };
        self.error_message = None;
        self.loaded_for = Some(mode);
        Ok(())
    }

    /// Visar modalen och returnerar true om den ska stängas
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState, db: &Database) -> bool {
        if let Err(e) = self.sync(state, db) {
            state.show_error(&format!("Kunde inte öppna texten: {}", e));
            self.reset();
            return true;
        }

        if !state.show_text_form {
            return false;
        }

        let mode = state.text_form_mode;
        let mut should_close = false;

        let title = match mode {
            TextFormMode::Add => "Lägg till text",
            TextFormMode::Rename(_) => "Byt namn på text",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                ui.horizontal(|ui| {
                    ui.label("Namn:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.name)
                            .hint_text("Text6")
                            .desired_width(220.0),
                    );
                    response.request_focus();
                });

                if let Some(ref error) = self.error_message {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(Colors::ERROR));
                }

                ui.add_space(16.0);

                let submitted = ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("Avbryt").clicked() {
                        self.reset();
                        should_close = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("{} Spara", Icons::SAVE)).clicked() || submitted {
                            match self.save(mode, state, db) {
                                Ok(message) => {
                                    self.reset();
                                    should_close = true;
                                    state.mark_data_changed();
                                    state.show_success(&message);
                                }
                                Err(AppError::DuplicateName(name)) => {
                                    self.error_message =
                                        Some(format!("En text med namnet '{}' finns redan", name));
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

    fn save(&self, mode: TextFormMode, state: &mut AppState, db: &Database) -> AppResult<String> {
        state.session.require_editor()?;

        match mode {
            TextFormMode::Add => {
                let id = db.texts().create(&self.name)?;
                state.selected_text_id = Some(id);
                Ok(format!("Texten '{}' tillagd", self.name.trim()))
            }
            TextFormMode::Rename(id) => {
                db.texts().rename(id, &self.name)?;
                Ok(format!("Bytte namn till '{}'", self.name.trim()))
            }
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.error_message = None;
        self.loaded_for = None;
    }
}
