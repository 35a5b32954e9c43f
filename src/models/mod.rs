pub mod text;
pub mod word;
pub mod session;
pub mod config;

pub use text::*;
pub use word::*;
pub use session::*;
pub use config::*;
