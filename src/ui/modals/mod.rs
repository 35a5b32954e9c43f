pub mod word_form;
pub mod text_form;
pub mod confirm_dialog;

pub use word_form::WordFormModal;
pub use text_form::TextFormModal;
pub use confirm_dialog::ConfirmDialog;
