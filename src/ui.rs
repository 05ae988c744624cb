//! UI module for the slider demo
//!
//! # Architecture
//!
//! - **gesture**: pointer gesture recognition state machines
//! - **animation**: transition helpers built on `iced_anim`
//! - **widgets**: custom `Widget` implementations
//! - **theme**: color helpers shared by the demo and the widgets

pub mod animation;
pub mod gesture;
pub mod theme;
pub mod widgets;
