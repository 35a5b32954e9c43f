//! Lexikon Desktop - Entry Point
//!
//! Ordförråd för grekiska texter.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Context;
use app::LexikonApp;
use eframe::egui;

use lexikon_desktop::models::AppSettings;
use lexikon_desktop::utils::path::get_database_path;
use lexikon_desktop::Database;

fn main() -> anyhow::Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar Lexikon v{}", env!("CARGO_PKG_VERSION"));

    let app_settings = AppSettings::load();

    // Öppna databas
    let db_path = app_settings.database_path.clone().unwrap_or_else(get_database_path);
    tracing::info!("Öppnar databas: {:?}", db_path);
    let db = Database::open(&db_path).with_context(|| format!("Kunde inte öppna databas {:?}", db_path))?;
    db.migrate().context("Migrering misslyckades")?;

    // Fönsterinställningar
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Lexikon - Grekiskt ordförråd v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([app_settings.window_width, app_settings.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_app_id("lexikon"),
        ..Default::default()
    };

    // Starta applikationen
    eframe::run_native(
        "Lexikon",
        options,
        Box::new(move |_cc| Ok(Box::new(LexikonApp::new(db, app_settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Fönstret kunde inte startas: {}", e))
}
