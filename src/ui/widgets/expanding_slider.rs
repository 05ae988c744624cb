//! Expanding slider widget
//!
//! A pill-shaped progress slider that swells while it is being touched,
//! in the manner of the scrubbers in modern mobile media players. The
//! track grows from 7 to 12 logical pixels and the fill fades up to full
//! opacity while a contact is active, then settles back once it ends.
//!
//! Two gesture recognizers observe the surface at once: a press recognizer
//! drives the expansion the moment a contact lands, and a drag recognizer
//! maps pointer positions onto the slider value. Recognition is
//! simultaneous, so expanding and scrubbing happen within the same contact.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Color, Element, Event, Length, Pixels, Rectangle, Size, Theme};
use serde::{Deserialize, Serialize};

use crate::ui::animation::ExpansionAnimation;
use crate::ui::gesture::{self, DragRecognizer, PressRecognizer};
use crate::ui::theme;

/// How a drag maps the pointer position onto the slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Preserve the grab offset between the pointer and the fill edge.
    #[default]
    Offset,
    /// Map the pointer position directly onto the fill edge.
    Absolute,
}

/// What makes the slider swell to its expanded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionMode {
    /// Expand the moment a contact lands on the slider.
    #[default]
    OnTouch,
    /// Expand only once the contact has travelled far enough to count as
    /// a deliberate drag.
    OnDrag,
}

/// Track height while expanded.
const EXPANDED_TRACK_HEIGHT: f32 = 12.0;

/// Track height while collapsed.
const COLLAPSED_TRACK_HEIGHT: f32 = 7.0;

/// Fill opacity while collapsed; expanded is fully opaque.
const COLLAPSED_FILL_ALPHA: f32 = 0.5;

/// Horizontal travel after which `ExpansionMode::OnDrag` engages.
const DRAG_EXPANSION_THRESHOLD: f32 = 4.0;

/// Expanding slider widget.
pub struct ExpandingSlider<'a, Message> {
    progress: f32,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    tracking: TrackingMode,
    expansion: ExpansionMode,
    tint: Option<Color>,
    track_color: Option<Color>,
    width: Length,
    height: f32,
}

impl<'a, Message> ExpandingSlider<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_WIDTH: f32 = 330.0;
    pub const DEFAULT_HEIGHT: f32 = 12.0;

    /// Creates a new expanding slider showing `progress` and reporting
    /// gesture-driven changes through `on_change`.
    ///
    /// The progress is clamped to `0.0..=1.0`.
    pub fn new<F>(progress: f32, on_change: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        Self {
            progress: progress.clamp(0.0, 1.0),
            on_change: Box::new(on_change),
            tracking: TrackingMode::default(),
            expansion: ExpansionMode::default(),
            tint: None,
            track_color: None,
            width: Length::Fixed(Self::DEFAULT_WIDTH),
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// Sets how drags map onto the slider value.
    pub fn tracking(mut self, mode: TrackingMode) -> Self {
        self.tracking = mode;
        self
    }

    /// Sets what makes the slider expand.
    pub fn expansion(mut self, mode: ExpansionMode) -> Self {
        self.expansion = mode;
        self
    }

    /// Sets the fill color. Defaults to the theme's label color.
    pub fn tint(mut self, tint: impl Into<Color>) -> Self {
        self.tint = Some(tint.into());
        self
    }

    /// Sets the track color. Defaults to a subdued theme fill.
    pub fn track_color(mut self, color: impl Into<Color>) -> Self {
        self.track_color = Some(color.into());
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }
}

/// Per-instance interaction state kept in the widget tree.
#[derive(Debug, Default)]
struct State {
    drag: DragRecognizer,
    press: PressRecognizer,
    expanded: bool,
    animation: ExpansionAnimation,
    /// Gesture-derived fill width, valid while the drag is active.
    fill_width: f32,
    /// Last observed pointer x, so release and cancel can resample it.
    last_x: f32,
}

impl State {
    fn is_interacting(&self) -> bool {
        self.drag.is_active() || self.press.is_active()
    }

    /// A contact landed at `x`. Returns the progress implied by the
    /// touch-down position, so the very first sample already reflects it.
    fn contact_began(
        &mut self,
        x: f32,
        width: f32,
        tracking: TrackingMode,
        expansion: ExpansionMode,
        progress: f32,
    ) -> f32 {
        self.press.press();
        if gesture::allows_simultaneous_recognition() || !self.press.is_active() {
            self.drag.begin(x, width * progress);
        }
        self.track(x, width, tracking, expansion)
    }

    /// The contact moved to `x` while held down.
    fn contact_moved(
        &mut self,
        x: f32,
        width: f32,
        tracking: TrackingMode,
        expansion: ExpansionMode,
    ) -> Option<f32> {
        if !self.drag.is_active() {
            return None;
        }
        self.drag.drag_to(x);
        Some(self.track(x, width, tracking, expansion))
    }

    /// The contact lifted; resamples the last known position.
    fn contact_ended(
        &mut self,
        width: f32,
        tracking: TrackingMode,
        expansion: ExpansionMode,
    ) -> f32 {
        self.drag.end();
        self.press.release();
        self.track(self.last_x, width, tracking, expansion)
    }

    /// The contact was taken away; collapses like a normal end.
    fn contact_cancelled(
        &mut self,
        width: f32,
        tracking: TrackingMode,
        expansion: ExpansionMode,
    ) -> f32 {
        self.drag.cancel();
        self.press.cancel();
        self.track(self.last_x, width, tracking, expansion)
    }

    /// Recomputes fill width, progress, and the expansion target. Runs on
    /// every contact event so even terminal phases resample the position.
    fn track(
        &mut self,
        x: f32,
        width: f32,
        tracking: TrackingMode,
        expansion: ExpansionMode,
    ) -> f32 {
        self.last_x = x;
        let offset = match tracking {
            TrackingMode::Offset => self.drag.initial_offset(),
            TrackingMode::Absolute => 0.0,
        };
        self.fill_width = gesture::fill_width(x, offset);
        self.sync_expansion(expansion);
        gesture::progress_for_width(self.fill_width, width)
    }

    fn expansion_target(&self, mode: ExpansionMode) -> bool {
        match mode {
            ExpansionMode::OnTouch => self.press.is_active() || self.drag.is_active(),
            ExpansionMode::OnDrag => {
                self.drag.is_active() && self.drag.travel() >= DRAG_EXPANSION_THRESHOLD
            }
        }
    }

    fn sync_expansion(&mut self, mode: ExpansionMode) {
        let target = self.expansion_target(mode);
        if target != self.expanded {
            self.expanded = target;
            if target {
                self.animation.expand();
            } else {
                self.animation.collapse();
            }
        }
    }
}

/// Track height for an expansion factor.
fn track_height(factor: f32) -> f32 {
    COLLAPSED_TRACK_HEIGHT + (EXPANDED_TRACK_HEIGHT - COLLAPSED_TRACK_HEIGHT) * factor
}

/// Fill opacity for an expansion factor.
fn fill_alpha(factor: f32) -> f32 {
    COLLAPSED_FILL_ALPHA + (1.0 - COLLAPSED_FILL_ALPHA) * factor
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for ExpandingSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(cursor_position) = cursor.position_over(bounds) {
                    let x = cursor_position.x - bounds.x;
                    let new_progress =
                        state.contact_began(x, bounds.width, self.tracking, self.expansion, self.progress);
                    self.progress = new_progress;
                    shell.publish((self.on_change)(new_progress));
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.drag.is_active() {
                    if let Some(pos) = cursor.land().position() {
                        let x = pos.x - bounds.x;
                        if let Some(new_progress) =
                            state.contact_moved(x, bounds.width, self.tracking, self.expansion)
                        {
                            self.progress = new_progress;
                            shell.publish((self.on_change)(new_progress));
                        }
                    }
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.is_interacting() {
                    let new_progress =
                        state.contact_ended(bounds.width, self.tracking, self.expansion);
                    self.progress = new_progress;
                    shell.publish((self.on_change)(new_progress));
                    shell.request_redraw();
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_interacting() {
                    let new_progress =
                        state.contact_cancelled(bounds.width, self.tracking, self.expansion);
                    self.progress = new_progress;
                    shell.publish((self.on_change)(new_progress));
                    shell.request_redraw();
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.animation.tick(*now);
                if state.animation.is_animating() {
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let factor = state.animation.factor();
        let height = track_height(factor);

        // The track keeps its full width and swells around the vertical
        // center of the widget bounds.
        let track = Rectangle {
            x: bounds.x,
            y: bounds.y + (bounds.height - height) / 2.0,
            width: bounds.width,
            height,
        };

        let border = Border {
            radius: (height / 2.0).into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds: track,
                border,
                ..renderer::Quad::default()
            },
            self.track_color.unwrap_or_else(|| theme::track_fill(theme)),
        );

        // While a drag is active the fill follows the gesture; otherwise it
        // re-derives from the progress value, which keeps it consistent
        // after the host lays the widget out at a new size.
        let fill_width = if state.drag.is_active() {
            state.fill_width.clamp(0.0, bounds.width)
        } else {
            bounds.width * self.progress
        };

        if fill_width > 0.0 {
            let tint = self.tint.unwrap_or_else(|| theme::label(theme));
            let alpha = fill_alpha(factor);

            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        width: fill_width,
                        ..track
                    },
                    border,
                    ..renderer::Quad::default()
                },
                Color {
                    a: tint.a * alpha,
                    ..tint
                },
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.drag.is_active() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<ExpandingSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: ExpandingSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gesture::Phase;

    const WIDTH: f32 = 330.0;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn absolute_drag_follows_the_pointer() {
        let mut state = State::default();

        // Touch-down already moves the fill edge under the pointer.
        let p0 = state.contact_began(
            100.0,
            WIDTH,
            TrackingMode::Absolute,
            ExpansionMode::OnTouch,
            0.5,
        );
        assert_close(p0, 100.0 / 330.0);
        assert!(state.expanded);

        let p1 = state
            .contact_moved(200.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch)
            .unwrap();
        assert_close(p1, 200.0 / 330.0);
        assert!(state.expanded);

        let p2 = state.contact_ended(WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch);
        assert_close(p2, 200.0 / 330.0);
        assert!(!state.expanded);
    }

    #[test]
    fn offset_drag_preserves_the_grab_point() {
        let mut state = State::default();

        // Fill currently ends at 165 (progress 0.5); the contact lands 15
        // past that edge, so the touch-down sample leaves progress alone.
        let p0 = state.contact_began(
            180.0,
            WIDTH,
            TrackingMode::Offset,
            ExpansionMode::OnTouch,
            0.5,
        );
        assert_close(state.drag.initial_offset(), 15.0);
        assert_close(p0, 0.5);

        let p1 = state
            .contact_moved(250.0, WIDTH, TrackingMode::Offset, ExpansionMode::OnTouch)
            .unwrap();
        assert_close(p1, 235.0 / 330.0);
    }

    #[test]
    fn progress_stays_clamped_outside_the_track() {
        let mut state = State::default();
        state.contact_began(
            10.0,
            WIDTH,
            TrackingMode::Absolute,
            ExpansionMode::OnTouch,
            0.0,
        );

        let high = state
            .contact_moved(9999.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch)
            .unwrap();
        assert_close(high, 1.0);

        let low = state
            .contact_moved(-9999.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch)
            .unwrap();
        assert_close(low, 0.0);
    }

    #[test]
    fn press_without_movement_toggles_expansion_only() {
        let mut state = State::default();

        let p0 = state.contact_began(
            50.0,
            WIDTH,
            TrackingMode::Offset,
            ExpansionMode::OnTouch,
            0.5,
        );
        assert!(state.expanded);
        assert_close(p0, 0.5);

        let p1 = state.contact_ended(WIDTH, TrackingMode::Offset, ExpansionMode::OnTouch);
        assert!(!state.expanded);
        assert_close(p1, 0.5);
    }

    #[test]
    fn on_drag_expansion_waits_for_travel() {
        let mut state = State::default();

        state.contact_began(
            100.0,
            WIDTH,
            TrackingMode::Absolute,
            ExpansionMode::OnDrag,
            0.0,
        );
        assert!(!state.expanded);

        state.contact_moved(102.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnDrag);
        assert!(!state.expanded);

        state.contact_moved(105.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnDrag);
        assert!(state.expanded);

        state.contact_ended(WIDTH, TrackingMode::Absolute, ExpansionMode::OnDrag);
        assert!(!state.expanded);
    }

    #[test]
    fn cancelled_contact_collapses_like_a_release() {
        let mut state = State::default();

        state.contact_began(
            100.0,
            WIDTH,
            TrackingMode::Absolute,
            ExpansionMode::OnTouch,
            0.0,
        );
        state.contact_moved(150.0, WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch);

        let p = state.contact_cancelled(WIDTH, TrackingMode::Absolute, ExpansionMode::OnTouch);
        assert_close(p, 150.0 / 330.0);
        assert!(!state.expanded);
        assert_eq!(state.drag.phase(), Phase::Cancelled);
    }

    #[test]
    fn constructor_clamps_out_of_range_progress() {
        let over = ExpandingSlider::<()>::new(1.5, |_| ());
        assert_close(over.progress, 1.0);

        let under = ExpandingSlider::<()>::new(-0.5, |_| ());
        assert_close(under.progress, 0.0);
    }

    #[test]
    fn track_geometry_follows_the_expansion_factor() {
        assert_close(track_height(0.0), 7.0);
        assert_close(track_height(1.0), 12.0);
        assert_close(fill_alpha(0.0), 0.5);
        assert_close(fill_alpha(1.0), 1.0);
    }
}
