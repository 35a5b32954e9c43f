//! Huvudapplikation för Lexikon

use eframe::egui;

use lexikon_desktop::models::{AppSettings, EditorSecret, SessionMode};
use lexikon_desktop::ui::{
    modals::{ConfirmDialog, TextFormModal, WordFormModal},
    shortcuts::{ShortcutAction, ShortcutManager},
    theme::{configure_style, Colors},
    views::{LoginView, OverviewView, SidebarView, VocabularyView},
    AppState, StatusType, View,
};
use lexikon_desktop::Database;

/// Huvudapplikation
pub struct LexikonApp {
    db: Database,
    state: AppState,
    app_settings: AppSettings,
    secret: EditorSecret,

    // Vyer
    login: LoginView,
    sidebar: SidebarView,
    vocabulary: VocabularyView,
    overview: OverviewView,

    // Modals
    word_form_modal: WordFormModal,
    text_form_modal: TextFormModal,

    // Intern
    style_initialized: bool,
}

impl LexikonApp {
    pub fn new(db: Database, app_settings: AppSettings) -> Self {
        let secret = app_settings.editor_secret();
        if !secret.is_configured() {
            tracing::warn!("Inget redigeringslösenord konfigurerat, endast visning är möjlig");
        }

        let mut state = AppState::new();
        state.dark_mode = app_settings.dark_mode;

        Self {
            db,
            state,
            app_settings,
            secret,
            login: LoginView::new(),
            sidebar: SidebarView::new(),
            vocabulary: VocabularyView::new(),
            overview: OverviewView::new(),
            word_form_modal: WordFormModal::new(),
            text_form_modal: TextFormModal::new(),
            style_initialized: false,
        }
    }

    /// Läs om allt som visar data
    fn refresh_views(&mut self) {
        self.sidebar.mark_needs_refresh();
        self.vocabulary.mark_needs_refresh();
        self.overview.mark_needs_refresh();
    }

    fn navigate_to(&mut self, view: View) {
        if self.state.current_view != view {
            self.state.navigate(view);
            self.refresh_views();
        }
    }

    /// Kolla om någon modal är öppen
    fn any_modal_open(&self) -> bool {
        self.state.show_word_form || self.state.show_text_form || self.state.show_confirm_dialog
    }

    /// Stäng översta modalen
    fn close_topmost_modal(&mut self) {
        if self.state.show_confirm_dialog {
            self.state.close_confirm();
        } else if self.state.show_word_form {
            self.state.close_word_form();
        } else if self.state.show_text_form {
            self.state.close_text_form();
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.state.dark_mode = !self.state.dark_mode;
        configure_style(ctx, self.state.dark_mode);

        self.app_settings.dark_mode = self.state.dark_mode;
        if let Err(e) = self.app_settings.save() {
            tracing::warn!("Kunde inte spara inställningar: {:#}", e);
        }
    }

    /// Hantera en genvägsåtgärd
    fn handle_shortcut_action(&mut self, action: ShortcutAction, ctx: &egui::Context) {
        // Om modal är öppen: tillåt bara CloseModal
        if self.any_modal_open() {
            if action == ShortcutAction::CloseModal {
                self.close_topmost_modal();
            }
            return;
        }

        match action {
            ShortcutAction::FocusSearch => {
                if self.state.session.is_authenticated() {
                    self.navigate_to(View::Vocabulary);
                    self.state.focus_search = true;
                }
            }
            ShortcutAction::NewWord => {
                if self.state.can_edit() {
                    if let Some(text_id) = self.state.selected_text_id {
                        self.state.open_new_word_form(text_id);
                    }
                }
            }
            ShortcutAction::ToggleDarkMode => self.toggle_dark_mode(ctx),
            ShortcutAction::CloseModal => {}
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Lexikon");
                ui.separator();

                let nav_items = [
                    (View::Vocabulary, "📖 Ordförråd", Some(ShortcutAction::FocusSearch)),
                    (View::Overview, "📊 Översikt", None),
                ];

                let mut target = None;
                for (view, label, shortcut) in nav_items {
                    let mut response = ui.selectable_label(self.state.current_view == view, label);
                    if let Some(hint) = shortcut.and_then(ShortcutManager::hint) {
                        response = response.on_hover_text(hint);
                    }
                    if response.clicked() {
                        target = Some(view);
                    }
                }

                let mut toggle = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_icon = if self.state.dark_mode { "🌙" } else { "☀" };
                    if ui
                        .button(mode_icon)
                        .on_hover_text(ShortcutManager::hint(ShortcutAction::ToggleDarkMode).unwrap_or_default())
                        .clicked()
                    {
                        toggle = true;
                    }

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .small()
                            .weak(),
                    );

                    let mode = self.state.session.mode();
                    let color = if mode == SessionMode::Editor {
                        Colors::EDITOR_MODE
                    } else {
                        Colors::VIEWER_MODE
                    };
                    ui.separator();
                    ui.label(egui::RichText::new(mode.label()).small().strong().color(color));
                });

                if let Some(view) = target {
                    self.navigate_to(view);
                }
                if toggle {
                    self.toggle_dark_mode(ui.ctx());
                }
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        if let Some(ref status) = self.state.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                let color = match status.status_type {
                    StatusType::Success => Colors::SUCCESS,
                    StatusType::Error => Colors::ERROR,
                    StatusType::Warning => Colors::WARNING,
                    StatusType::Info => Colors::INFO,
                };
                ui.colored_label(color, &status.text);
            });
        }
    }

    /// Formulären anropas varje frame så att de töms när de stängts
    fn show_modals(&mut self, ctx: &egui::Context) {
        if self.word_form_modal.show(ctx, &mut self.state, &self.db) {
            self.state.close_word_form();
        }

        if self.text_form_modal.show(ctx, &mut self.state, &self.db) {
            self.state.close_text_form();
        }

        if self.state.show_confirm_dialog {
            ConfirmDialog::show(ctx, &mut self.state, &self.db);
        }
    }
}

impl eframe::App for LexikonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            configure_style(ctx, self.state.dark_mode);
            self.style_initialized = true;
        }

        // Rensa gamla statusmeddelanden
        self.state.clear_old_status();

        if self.state.take_data_changed() {
            self.refresh_views();
        }

        if let Some(action) = ShortcutManager::check(ctx) {
            self.handle_shortcut_action(action, ctx);
        }

        // Inloggning: ingen topbar eller sidopanel
        if !self.state.session.is_authenticated() || self.state.current_view == View::Login {
            if self.state.current_view != View::Login {
                self.state.navigate(View::Login);
            }
            self.show_status_bar(ctx);
            egui::CentralPanel::default().show(ctx, |ui| {
                self.login.show(ui, &mut self.state, &self.secret);
            });
            if self.state.current_view != View::Login {
                self.refresh_views();
            }
            return;
        }

        self.show_top_panel(ctx);
        self.show_status_bar(ctx);

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.sidebar.show(ui, &mut self.state, &self.db);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_view {
            View::Vocabulary => self.vocabulary.show(ui, &mut self.state, &self.db),
            View::Overview => self.overview.show(ui, &mut self.state, &self.db),
            View::Login => {}
        });

        self.show_modals(ctx);
    }
}
