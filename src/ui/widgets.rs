//! Reusable UI widgets - composable components without business logic
//!
//! Widgets implement `iced::advanced::Widget` directly and must not depend
//! on application state; they report interactions through generic message
//! constructors supplied by the caller.

pub mod expanding_slider;

pub use expanding_slider::{ExpandingSlider, ExpansionMode, TrackingMode};
