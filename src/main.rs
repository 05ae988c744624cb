//! Swell - an expanding slider demo built with iced

mod app;
mod settings;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .antialiasing(true)
        .run()
}
