use egui::{self, Color32, RichText};

use crate::db::Database;
use crate::services::{ExportFormat, ExportService, ImportService, StatsService, VocabularyStats};
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::error::AppError;
use crate::utils::path::{display_path, is_json_file};

/// Översikt: statistik, export och import
pub struct OverviewView {
    stats: VocabularyStats,
    last_export: Option<String>,
    needs_refresh: bool,
}

impl OverviewView {
    pub fn new() -> Self {
        Self {
            stats: VocabularyStats::default(),
            last_export: None,
            needs_refresh: true,
        }
    }

    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, db: &Database) {
        if self.needs_refresh {
            match StatsService::new(db).get_stats() {
                Ok(stats) => self.stats = stats,
                Err(e) => {
                    tracing::error!("Kunde inte räkna statistik: {}", e);
                    state.show_error("Kunde inte läsa statistik");
                }
            }
            self.needs_refresh = false;
        }

        ui.heading(format!("{} Översikt", Icons::DASHBOARD));
        ui.add_space(16.0);

        egui::ScrollArea::vertical().id_salt("overview").show(ui, |ui| {
            ui.horizontal(|ui| {
                stat_card(ui, Icons::BOOK, "Ord totalt", &self.stats.total_words.to_string(), Colors::PRIMARY);
                ui.add_space(8.0);
                stat_card(
                    ui,
                    Icons::FOLDER,
                    "Texter",
                    &self.stats.per_text.len().to_string(),
                    Colors::SUCCESS,
                );
            });

            ui.add_space(16.0);
            ui.heading("Ord per text");
            ui.add_space(8.0);

            egui::Grid::new("per_text_stats")
                .num_columns(2)
                .striped(true)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for count in &self.stats.per_text {
                        ui.label(&count.name);
                        ui.label(RichText::new(count.word_count.to_string()).strong());
                        ui.end_row();
                    }
                });

            ui.add_space(24.0);
            ui.separator();
            self.show_export(ui, state, db);

            ui.add_space(24.0);
            ui.separator();
            Self::show_import(ui, state, db);
        });
    }

    fn show_export(&mut self, ui: &mut egui::Ui, state: &mut AppState, db: &Database) {
        ui.heading(format!("{} Exportera", Icons::EXPORT));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for format in [ExportFormat::Json, ExportFormat::Csv] {
                if ui.button(format!("Ladda ner {}", format.display_name())).clicked() {
                    self.do_export(format, state, db);
                }
            }
        });

        if let Some(ref msg) = self.last_export {
            ui.add_space(4.0);
            ui.label(RichText::new(msg).small().color(Colors::TEXT_MUTED));
        }
    }

    fn do_export(&mut self, format: ExportFormat, state: &mut AppState, db: &Database) {
        let filename = ExportService::generate_filename(format);

        let file_dialog = rfd::FileDialog::new()
            .set_file_name(&filename)
            .add_filter(format.display_name(), &[format.extension()]);

        if let Some(path) = file_dialog.save_file() {
            match ExportService::new(db).export_to_file(format, &path) {
                Ok(result) => {
                    let msg = format!("{} sparad till {}", result.summary(), display_path(&path));
                    self.last_export = Some(msg.clone());
                    state.show_success(&msg);
                }
                Err(e) => {
                    tracing::error!("Export misslyckades: {:#}", e);
                    state.show_error(&format!("Export misslyckades: {}", e));
                }
            }
        }
    }

    fn show_import(ui: &mut egui::Ui, state: &mut AppState, db: &Database) {
        ui.heading(format!("{} Importera", Icons::IMPORT));
        ui.add_space(8.0);

        if !state.can_edit() {
            ui.label(
                RichText::new(format!("{} Import kräver redigeringsläge", Icons::LOCK)).color(Colors::INFO),
            );
            return;
        }

        ui.label(
            RichText::new("Importen ersätter alla texter och ord med filens innehåll.")
                .small()
                .color(Colors::WARNING),
        );
        ui.add_space(4.0);

        if ui.button(format!("{} Välj JSON-fil...", Icons::IMPORT)).clicked() {
            if let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                if !is_json_file(&path) {
                    state.show_error("Välj en JSON-fil");
                    return;
                }

                // Förhandsgranska innan något skrivs
                let preview = std::fs::read_to_string(&path)
                    .map_err(AppError::from)
                    .and_then(|content| ImportService::new(db).preview(&content));

                match preview {
                    Ok(preview) => {
                        let message = format!(
                            "Ersätta all data med {} texter och {} ord (exporterad {})?",
                            preview.text_count, preview.word_count, preview.export_date
                        );
                        state.show_confirm(&message, ConfirmAction::ImportJson(path));
                    }
                    Err(e) => {
                        tracing::warn!("Ogiltig importfil {:?}: {}", path, e);
                        state.show_error(&format!("Ogiltig importfil: {}", e));
                    }
                }
            }
        }
    }
}

fn stat_card(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, color: Color32) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(24.0));
                    ui.label(RichText::new(label).color(Colors::TEXT_MUTED));
                });
                ui.add_space(8.0);
                ui.label(RichText::new(value).size(28.0).strong().color(color));
            });
        });
}
