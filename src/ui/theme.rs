use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};

/// Konfigurera applikationens utseende. Grekisk text läses bättre lite större.
pub fn configure_style(ctx: &egui::Context, dark_mode: bool) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional)),
        (TextStyle::Name("lemma".into()), FontId::new(19.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(12.5, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.window_margin = egui::Margin::same(14.0);

    style.visuals = if dark_mode { dark_visuals() } else { parchment_visuals() };

    ctx.set_style(style);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(28, 27, 31);
    visuals.window_fill = Color32::from_rgb(38, 36, 42);
    visuals.extreme_bg_color = Color32::from_rgb(18, 17, 21);
    visuals.selection.bg_fill = Color32::from_rgb(120, 90, 40);

    visuals
}

/// Ljust tema i pergamentton
fn parchment_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Color32::from_rgb(250, 246, 236);
    visuals.window_fill = Color32::from_rgb(255, 252, 244);
    visuals.extreme_bg_color = Color32::from_rgb(242, 236, 222);
    visuals.faint_bg_color = Color32::from_rgb(244, 239, 226);
    visuals.selection.bg_fill = Color32::from_rgb(230, 205, 150);
    visuals.hyperlink_color = Color32::from_rgb(140, 80, 20);

    visuals
}

/// Stil för lemma-rubriker
pub fn lemma_text(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text)
        .text_style(TextStyle::Name("lemma".into()))
        .strong()
}

/// Färgpalett för applikationen
pub struct Colors;

impl Colors {
    // Primär
    pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);

    // Framgång
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

    // Varning
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

    // Fel
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

    // Info
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);

    // Text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);

    // Lägen
    pub const EDITOR_MODE: Color32 = Color32::from_rgb(34, 197, 94);
    pub const VIEWER_MODE: Color32 = Color32::from_rgb(239, 68, 68);
}

/// Ikoner (Unicode)
pub struct Icons;

impl Icons {
    pub const BOOK: &'static str = "📖";
    pub const FOLDER: &'static str = "📁";
    pub const SEARCH: &'static str = "🔍";
    pub const ADD: &'static str = "➕";
    pub const EDIT: &'static str = "✏";
    pub const DELETE: &'static str = "🗑";
    pub const SAVE: &'static str = "💾";
    pub const LOCK: &'static str = "🔒";
    pub const KEY: &'static str = "🔑";
    pub const EYE: &'static str = "👁";
    pub const DASHBOARD: &'static str = "📊";
    pub const IMPORT: &'static str = "📥";
    pub const EXPORT: &'static str = "📤";
    pub const LOGOUT: &'static str = "⏏";
}
