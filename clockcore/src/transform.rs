//! Window transform — drag to move, scroll to scale
//!
//! Pointer coordinates are window-local, as delivered by egui. Because the
//! window follows the pointer, a fixed press point already yields the
//! movement since the last window move; see [`DragAnchor`].
//!
//! No bounds are applied here: scale may go negative and the window may be
//! dragged off-screen. Renderers use [`WindowTransform::render_scale`].

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Scroll units per whole step of scale.
pub const SCROLL_UNITS_PER_SCALE: f32 = 100.0;

/// Smallest scale the face is ever drawn at.
pub const MIN_RENDER_SCALE: f32 = 0.05;

/// Which point a drag measures its delta against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragAnchor {
    /// The press point, never re-captured during the gesture.
    #[default]
    PressPoint,
    /// The previous drag event.
    LastEvent,
}

/// Position and content transform of the clock window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTransform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    anchor_mode: DragAnchor,
    anchor: Option<Pos2>,
}

impl Default for WindowTransform {
    fn default() -> Self {
        Self::new(Pos2::ZERO)
    }
}

impl WindowTransform {
    pub fn new(position: Pos2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            anchor_mode: DragAnchor::PressPoint,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor_mode: DragAnchor) -> Self {
        self.anchor_mode = anchor_mode;
        self
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Whether a press has been recorded and not yet released.
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.anchor = Some(Pos2::new(x, y));
    }

    /// Move the window by the pointer's offset from the anchor.
    ///
    /// Returns the new window position, or `None` if no press was recorded.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32) -> Option<Pos2> {
        let anchor = self.anchor?;
        self.x += x - anchor.x;
        self.y += y - anchor.y;
        if self.anchor_mode == DragAnchor::LastEvent {
            self.anchor = Some(Pos2::new(x, y));
        }
        Some(self.position())
    }

    pub fn on_pointer_up(&mut self) {
        self.anchor = None;
    }

    /// Grow (or shrink) the content and shift it by the scroll delta.
    ///
    /// Returns the window size that fits the new content for a dial of
    /// `base_radius`.
    pub fn on_scroll(&mut self, delta_y: f32, base_radius: f32) -> Vec2 {
        let step = delta_y / SCROLL_UNITS_PER_SCALE;
        self.scale_x += step;
        self.scale_y += step;
        self.translate_x += delta_y;
        self.translate_y += delta_y;
        self.fit_to_content(base_radius)
    }

    /// Scale actually used for drawing.
    pub fn render_scale(&self) -> Vec2 {
        Vec2::new(
            self.scale_x.abs().max(MIN_RENDER_SCALE),
            self.scale_y.abs().max(MIN_RENDER_SCALE),
        )
    }

    /// Bounds of the dial after scaling about its center and translating.
    pub fn content_rect(&self, base_radius: f32) -> Rect {
        let scale = self.render_scale();
        let center = Pos2::new(
            base_radius + self.translate_x,
            base_radius + self.translate_y,
        );
        Rect::from_center_size(center, Vec2::new(scale.x, scale.y) * 2.0 * base_radius)
    }

    /// Window size reaching the far corner of the content.
    pub fn fit_to_content(&self, base_radius: f32) -> Vec2 {
        let max = self.content_rect(base_radius).max;
        Vec2::new(max.x.max(1.0), max.y.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_by_pointer_offset() {
        let mut t = WindowTransform::new(Pos2::new(100.0, 200.0));
        t.on_pointer_down(10.0, 10.0);
        let pos = t.on_pointer_drag(15.0, 18.0).unwrap();
        assert_eq!(pos, Pos2::new(105.0, 208.0));
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut t = WindowTransform::default();
        assert!(t.on_pointer_drag(50.0, 50.0).is_none());
        assert_eq!(t.position(), Pos2::ZERO);
    }

    #[test]
    fn test_press_point_is_not_reanchored() {
        let mut t = WindowTransform::default();
        t.on_pointer_down(10.0, 10.0);
        t.on_pointer_drag(15.0, 18.0);
        t.on_pointer_drag(15.0, 18.0);
        assert_eq!(t.position(), Pos2::new(10.0, 16.0));
    }

    #[test]
    fn test_last_event_anchor_does_not_compound() {
        let mut t = WindowTransform::default().with_anchor(DragAnchor::LastEvent);
        t.on_pointer_down(10.0, 10.0);
        t.on_pointer_drag(15.0, 18.0);
        t.on_pointer_drag(15.0, 18.0);
        assert_eq!(t.position(), Pos2::new(5.0, 8.0));
        t.on_pointer_drag(20.0, 20.0);
        assert_eq!(t.position(), Pos2::new(10.0, 10.0));
    }

    #[test]
    fn test_release_ends_gesture() {
        let mut t = WindowTransform::default();
        t.on_pointer_down(0.0, 0.0);
        assert!(t.is_dragging());
        t.on_pointer_up();
        assert!(!t.is_dragging());
        assert!(t.on_pointer_drag(5.0, 5.0).is_none());
    }

    #[test]
    fn test_scroll_scales_and_translates() {
        let mut t = WindowTransform::default();
        t.on_scroll(100.0, 350.0);
        assert_eq!(t.scale_x, 2.0);
        assert_eq!(t.scale_y, 2.0);
        assert_eq!(t.translate_x, 100.0);
        assert_eq!(t.translate_y, 100.0);
    }

    #[test]
    fn test_scroll_returns_fitted_size() {
        let mut t = WindowTransform::default();
        assert_eq!(t.fit_to_content(350.0), Vec2::new(700.0, 700.0));
        let size = t.on_scroll(100.0, 350.0);
        // center 450, half-extent 700
        assert_eq!(size, Vec2::new(1150.0, 1150.0));
    }

    #[test]
    fn test_scale_is_unbounded_in_model() {
        let mut t = WindowTransform::default();
        t.on_scroll(-300.0, 350.0);
        assert_eq!(t.scale_x, -2.0);
        assert_eq!(t.render_scale(), Vec2::new(2.0, 2.0));
        t.on_scroll(200.0, 350.0);
        assert_eq!(t.scale_x, 0.0);
        assert_eq!(t.render_scale().x, MIN_RENDER_SCALE);
    }

    #[test]
    fn test_fit_never_collapses() {
        let mut t = WindowTransform::default();
        let size = t.on_scroll(-1000.0, 350.0);
        assert!(size.x >= 1.0 && size.y >= 1.0);
    }

    #[test]
    fn test_anchor_parses_from_snake_case() {
        let a: DragAnchor = serde_json::from_str("\"last_event\"").unwrap();
        assert_eq!(a, DragAnchor::LastEvent);
    }
}
