// Static catalogs: reference tokens, UI components and CLI commands

pub mod commands;
pub mod components;
pub mod reference;
