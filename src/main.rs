// White Label Studio - design token and theme editor with native GUI

#![warn(clippy::all)]
#![windows_subsystem = "windows"]

use iced::{application, Font, Settings, Size};
use white_label_studio::app::Studio;
use white_label_studio::logging::init_logging;
use white_label_studio::theme::{self, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting White Label Studio");

    application("White Label Studio", Studio::update, Studio::view)
        .theme(Studio::theme)
        .subscription(Studio::subscription)
        .settings(Settings {
            default_font: Font::DEFAULT,
            default_text_size: theme::FONT_MD.into(),
            antialiasing: true,
            ..Settings::default()
        })
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run_with(Studio::new)
}
