//! Animation helpers built on `iced_anim`.

mod expansion;

pub use expansion::ExpansionAnimation;
