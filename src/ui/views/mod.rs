pub mod login;
pub mod overview;
pub mod sidebar;
pub mod vocabulary;

pub use login::LoginView;
pub use overview::OverviewView;
pub use sidebar::SidebarView;
pub use vocabulary::VocabularyView;
