// White Label Studio - design token and theme editor

#![warn(clippy::all)]

pub mod app;
pub mod catalog;
pub mod controllers;
pub mod error;
pub mod file_ops;
pub mod logging;
pub mod model;
pub mod preview;
pub mod serialize;
pub mod settings;
pub mod store;
pub mod theme;
pub mod types;
