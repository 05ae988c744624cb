//! Demo application shell
//!
//! Hosts a single expanding slider centered in the window and logs every
//! value it reports.

use iced::widget::container;
use iced::{Element, Fill, Theme};

use crate::settings::Settings;
use crate::ui::theme;
use crate::ui::widgets::ExpandingSlider;

/// Messages emitted by the demo screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The slider reported a new progress value.
    ProgressChanged(f32),
}

/// Demo application state.
pub struct App {
    settings: Settings,
    progress: f32,
}

impl App {
    /// Slider position when the demo starts.
    const INITIAL_PROGRESS: f32 = 0.5;

    /// Create the demo, loading settings and writing the defaults on the
    /// first run so there is a file to edit.
    pub fn new() -> Self {
        let settings = Settings::load();

        if Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {e}");
            }
        }

        Self {
            settings,
            progress: Self::INITIAL_PROGRESS,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ProgressChanged(progress) => {
                self.progress = progress;
                tracing::info!("slider progress: {progress:.3}");
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let slider = ExpandingSlider::new(self.progress, Message::ProgressChanged)
            .tracking(self.settings.slider.tracking_mode)
            .expansion(self.settings.slider.expansion_mode)
            .tint(theme::label(&self.theme()));

        container(slider).center(Fill).into()
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Swell".to_string()
    }
}
