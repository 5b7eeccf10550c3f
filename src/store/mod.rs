// In-memory stores owned by the application and passed to panel controllers

mod themes;
mod tokens;

pub use themes::{SaveOutcome, Selection, ThemeStore};
pub use tokens::TokenStore;
