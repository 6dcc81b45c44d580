//! Dial geometry
//!
//! Proportions are fractions of the dial radius. Stroke widths that were
//! absolute on the unscaled face are multiplied by the current scale.
//! Everything here produces plain `egui::Shape`s; nothing touches a
//! `Painter` so the layout can be checked without a window.

use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

use crate::clockwork::ClockAngles;
use crate::theme::ClockColors;

pub const HOUR_TICKS: usize = 12;
pub const MINUTE_TICKS: usize = 60;
pub const HOUR_TICK_WIDTH: f32 = 6.0;
pub const MINUTE_TICK_WIDTH: f32 = 1.0;

/// Gradient stops of the dial fill, as (fraction of radius, color).
const GRADIENT_INNER: f32 = 0.92;
const GRADIENT_OUTER: f32 = 0.98;

/// Number of rings used to approximate the radial gradient.
const GRADIENT_BANDS: usize = 12;

const TICK_START: f32 = 0.12;
const TICK_END: f32 = 0.2;

const HOUR_HAND_LENGTH: f32 = 0.5;
const MINUTE_HAND_LENGTH: f32 = 0.75;
const SECOND_HAND_LENGTH: f32 = 0.7;
const HAND_BASE_HALF_WIDTH: f32 = 0.05;
const HAND_TIP_HALF_WIDTH: f32 = 0.03;
const HAND_TAIL: f32 = 0.15;
const SECOND_HAND_WIDTH: f32 = 0.02;
const SECOND_TIP_RADIUS: f32 = 0.07;
const CENTER_DOT_RADIUS: f32 = 0.03;

/// Rotate `point` clockwise about `center` (screen coordinates, y down).
pub fn rotate_about(center: Pos2, point: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - center;
    Pos2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Fill color at `t` (fraction of the radius) of the dial's radial gradient.
pub fn gradient_color(t: f32) -> Color32 {
    if t <= GRADIENT_INNER {
        return ClockColors::WHITE;
    }
    if t >= GRADIENT_OUTER {
        return ClockColors::BLACK;
    }
    let k = (t - GRADIENT_INNER) / (GRADIENT_OUTER - GRADIENT_INNER);
    let v = (255.0 * (1.0 - k)).round() as u8;
    Color32::from_rgb(v, v, v)
}

/// A dial placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub center: Pos2,
    pub radius: f32,
    /// Current radius over the unscaled radius.
    pub scale: f32,
}

impl Dial {
    pub fn new(center: Pos2, radius: f32, base_radius: f32) -> Self {
        Self {
            center,
            radius,
            scale: radius / base_radius,
        }
    }

    /// Fit the dial to a content rectangle as produced by
    /// [`crate::transform::WindowTransform::content_rect`].
    pub fn from_content(rect: Rect, base_radius: f32) -> Self {
        Self::new(rect.center(), rect.width().min(rect.height()) / 2.0, base_radius)
    }

    /// Point `distance` (fraction of the radius) straight above the center.
    fn above_center(&self, distance: f32) -> Pos2 {
        self.center - Vec2::new(0.0, distance * self.radius)
    }

    /// Concentric filled circles, outermost first.
    pub fn face(&self) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(GRADIENT_BANDS + 2);
        shapes.push(Shape::circle_filled(self.center, self.radius, ClockColors::BLACK));
        for i in 0..GRADIENT_BANDS {
            let t = GRADIENT_OUTER
                - (GRADIENT_OUTER - GRADIENT_INNER) * (i as f32 / GRADIENT_BANDS as f32);
            shapes.push(Shape::circle_filled(self.center, t * self.radius, gradient_color(t)));
        }
        shapes.push(Shape::circle_filled(
            self.center,
            GRADIENT_INNER * self.radius,
            ClockColors::WHITE,
        ));
        shapes
    }

    /// One tick mark per `360 / count` degrees.
    pub fn ticks(&self, count: usize, width: f32) -> Vec<Shape> {
        let start = self.center + Vec2::new(0.0, (TICK_START - 1.0) * self.radius);
        let end = self.center
            + Vec2::new(0.0, (TICK_END - 1.0) * self.radius + 2.0 * width * self.scale);
        let stroke = Stroke::new(width * self.scale, ClockColors::BLACK);
        (0..count)
            .map(|n| {
                let deg = 360.0 / count as f32 * n as f32;
                Shape::line_segment(
                    [
                        rotate_about(self.center, start, deg),
                        rotate_about(self.center, end, deg),
                    ],
                    stroke,
                )
            })
            .collect()
    }

    /// Tapered hand outline reaching `length` from the center.
    pub fn tapered_hand(&self, length: f32, degrees: f32) -> Vec<Pos2> {
        let r = self.radius;
        let c = self.center;
        let base_y = c.y + HAND_TAIL * r;
        let tip_y = c.y - length * r;
        [
            Pos2::new(c.x - HAND_BASE_HALF_WIDTH * r, base_y),
            Pos2::new(c.x - HAND_TIP_HALF_WIDTH * r, tip_y),
            Pos2::new(c.x + HAND_TIP_HALF_WIDTH * r, tip_y),
            Pos2::new(c.x + HAND_BASE_HALF_WIDTH * r, base_y),
        ]
        .into_iter()
        .map(|p| rotate_about(c, p, degrees))
        .collect()
    }

    fn second_hand(&self, degrees: f32) -> Vec<Shape> {
        let tip = rotate_about(self.center, self.above_center(SECOND_HAND_LENGTH), degrees);
        let tail = rotate_about(self.center, self.above_center(-HAND_TAIL), degrees);
        vec![
            Shape::line_segment(
                [tip, tail],
                Stroke::new(SECOND_HAND_WIDTH * self.radius, ClockColors::RED),
            ),
            Shape::circle_filled(tip, SECOND_TIP_RADIUS * self.radius, ClockColors::RED),
            Shape::circle_filled(self.center, CENTER_DOT_RADIUS * self.radius, ClockColors::RED),
        ]
    }

    /// Three hands, drawn hour, minute, then second.
    pub fn hands(&self, angles: &ClockAngles) -> Vec<Shape> {
        let mut shapes = vec![
            Shape::convex_polygon(
                self.tapered_hand(HOUR_HAND_LENGTH, angles.hour_deg as f32),
                ClockColors::BLACK,
                Stroke::NONE,
            ),
            Shape::convex_polygon(
                self.tapered_hand(MINUTE_HAND_LENGTH, angles.minute_deg as f32),
                ClockColors::BLACK,
                Stroke::NONE,
            ),
        ];
        shapes.extend(self.second_hand(angles.second_deg as f32));
        shapes
    }

    /// Full dial in paint order, excluding the digital readout.
    pub fn shapes(&self, angles: &ClockAngles) -> Vec<Shape> {
        let mut shapes = self.face();
        shapes.extend(self.ticks(MINUTE_TICKS, MINUTE_TICK_WIDTH));
        shapes.extend(self.ticks(HOUR_TICKS, HOUR_TICK_WIDTH));
        shapes.extend(self.hands(angles));
        shapes
    }
}
