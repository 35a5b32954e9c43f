use egui::{self, RichText};

use crate::models::EditorSecret;
use crate::ui::{
    state::AppState,
    theme::{Colors, Icons},
    View,
};

/// Inloggningsskärm: redigeringsläge med lösenord eller bara visning
pub struct LoginView {
    password: String,
    error_message: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            password: String::new(),
            error_message: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, secret: &EditorSecret) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);

            ui.label(RichText::new(Icons::BOOK).size(48.0));
            ui.heading("Lexikon");
            ui.label(RichText::new("Grekiskt ordförråd").color(Colors::TEXT_MUTED));

            ui.add_space(24.0);

            egui::Frame::none()
                .fill(ui.visuals().extreme_bg_color)
                .rounding(8.0)
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.set_max_width(320.0);

                    ui.label(format!("{} Lösenord för redigering", Icons::KEY));
                    ui.add_space(4.0);
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .password(true)
                            .desired_width(280.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if !secret.is_configured() {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new("Inget lösenord är konfigurerat, endast visning är möjlig")
                                .small()
                                .color(Colors::WARNING),
                        );
                    }

                    if let Some(ref error) = self.error_message {
                        ui.add_space(8.0);
                        ui.label(RichText::new(error).color(Colors::ERROR));
                    }

                    ui.add_space(12.0);

                    if ui.button(format!("{} Gå in i redigeringsläge", Icons::EDIT)).clicked() || submitted {
                        self.try_sign_in(state, secret);
                    }

                    ui.add_space(4.0);

                    if ui.button(format!("{} Endast visning", Icons::EYE)).clicked() {
                        state.session.browse_only();
                        self.reset();
                        state.navigate(View::Vocabulary);
                    }
                });
        });
    }

    fn try_sign_in(&mut self, state: &mut AppState, secret: &EditorSecret) {
        match state.session.sign_in_editor(&self.password, secret) {
            Ok(()) => {
                self.reset();
                state.navigate(View::Vocabulary);
                state.show_success("Redigeringsläge aktiverat");
            }
            Err(e) => {
                // Lösenordet rensas efter misslyckat försök
                self.password.clear();
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.password.clear();
        self.error_message = None;
    }
}
