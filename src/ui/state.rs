use std::path::PathBuf;

use crate::models::{Session, Word};

/// Aktuell vy i applikationen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Vocabulary,
    Overview,
}

/// Vad textformuläret gör
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormMode {
    #[default]
    Add,
    Rename(i64),
}

/// Centraliserat applikationstillstånd
#[derive(Debug, Default)]
pub struct AppState {
    /// Aktuell vy
    pub current_view: View,

    /// Redigerings-/visningsläge för fönstret
    pub session: Session,

    /// Vald text (flik)
    pub selected_text_id: Option<i64>,

    /// Visar ordformulär
    pub show_word_form: bool,

    /// Ord som redigeras (None = nytt ord)
    pub editing_word_id: Option<i64>,

    /// Text som ett nytt ord läggs till i
    pub word_form_text_id: Option<i64>,

    /// Visar textformulär (lägg till / byt namn)
    pub show_text_form: bool,
    pub text_form_mode: TextFormMode,

    /// Visar bekräftelsedialog
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    pub confirm_dialog_action: Option<ConfirmAction>,

    /// Statusmeddelande
    pub status_message: Option<StatusMessage>,

    /// Fokusera sökfältet nästa frame
    pub focus_search: bool,

    /// Dark mode
    pub dark_mode: bool,

    /// Data har ändrats, vyerna ska läsa om
    pub data_changed: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigera till vy
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn can_edit(&self) -> bool {
        self.session.can_edit()
    }

    /// Logga ut och stäng allt som kräver inloggning
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.close_word_form();
        self.close_text_form();
        self.close_confirm();
        self.current_view = View::Login;
    }

    /// Markera att data ändrats så att vyerna läser om
    pub fn mark_data_changed(&mut self) {
        self.data_changed = true;
    }

    /// Läs och nollställ ändringsflaggan
    pub fn take_data_changed(&mut self) -> bool {
        std::mem::take(&mut self.data_changed)
    }

    /// Öppna ordformulär för nytt ord
    pub fn open_new_word_form(&mut self, text_id: i64) {
        self.editing_word_id = None;
        self.word_form_text_id = Some(text_id);
        self.show_word_form = true;
    }

    /// Öppna ordformulär för redigering
    pub fn open_edit_word_form(&mut self, word_id: i64) {
        self.editing_word_id = Some(word_id);
        self.word_form_text_id = None;
        self.show_word_form = true;
    }

    /// Stäng ordformulär
    pub fn close_word_form(&mut self) {
        self.show_word_form = false;
        self.editing_word_id = None;
        self.word_form_text_id = None;
    }

    pub fn open_add_text_form(&mut self) {
        self.text_form_mode = TextFormMode::Add;
        self.show_text_form = true;
    }

    pub fn open_rename_text_form(&mut self, text_id: i64) {
        self.text_form_mode = TextFormMode::Rename(text_id);
        self.show_text_form = true;
    }

    pub fn close_text_form(&mut self) {
        self.show_text_form = false;
        self.text_form_mode = TextFormMode::Add;
    }

    /// Visa bekräftelsedialog
    pub fn show_confirm(&mut self, message: &str, action: ConfirmAction) {
        self.confirm_dialog_message = message.to_string();
        self.confirm_dialog_action = Some(action);
        self.show_confirm_dialog = true;
    }

    /// Stäng bekräftelsedialog
    pub fn close_confirm(&mut self) {
        self.show_confirm_dialog = false;
        self.confirm_dialog_action = None;
    }

    /// Visa statusmeddelande
    pub fn show_status(&mut self, message: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            status_type,
            created_at: std::time::Instant::now(),
        });
    }

    /// Visa framgångsmeddelande
    pub fn show_success(&mut self, message: &str) {
        self.show_status(message, StatusType::Success);
    }

    /// Visa felmeddelande
    pub fn show_error(&mut self, message: &str) {
        self.show_status(message, StatusType::Error);
    }

    /// Rensa statusmeddelande om det är för gammalt
    pub fn clear_old_status(&mut self) {
        if let Some(ref status) = self.status_message {
            if status.created_at.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }
}

/// Typ av bekräftelseåtgärd
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteWord(i64),
    ImportJson(PathBuf),
}

/// Statusmeddelande
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub status_type: StatusType,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Error,
    Info,
    Warning,
}

/// Formulärdata för ord
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFormData {
    pub lemma: String,
    pub forms: String,
    pub translation: String,
    pub comments: String,
}

impl WordFormData {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn from_word(word: &Word) -> Self {
        Self {
            lemma: word.lemma.clone(),
            forms: word.forms.clone().unwrap_or_default(),
            translation: word.translation.clone().unwrap_or_default(),
            comments: word.comments.clone().unwrap_or_default(),
        }
    }

    /// Alla fyra fält skickas alltid, även oförändrade
    pub fn to_word(&self, id: Option<i64>, text_id: Option<i64>) -> Word {
        let mut word = Word {
            id,
            text_id,
            lemma: self.lemma.clone(),
            forms: Some(self.forms.clone()),
            translation: Some(self.translation.clone()),
            comments: Some(self.comments.clone()),
        };
        word.normalize();
        word
    }
}
