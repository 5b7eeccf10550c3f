// Data model: themes, color tokens and typed configuration families

mod config;
mod theme;
mod tokens;

pub use config::*;
pub use theme::*;
pub use tokens::*;
