//! Digital time readout drawn over the dial

use std::fmt::Write;

use chrono::{NaiveTime, Timelike};
use egui::{Pos2, Vec2};

/// 12-hour clock with seconds, e.g. `06:30:00 PM`.
pub const DEFAULT_FORMAT: &str = "%I:%M:%S %p";

/// Vertical distance of the readout from the center, as a fraction of the
/// dial radius.
const READOUT_OFFSET: f32 = 0.4;

/// Padding around the readout text, in unscaled points.
const READOUT_PADDING_Y: f32 = 10.0;

/// Render `now` with `format`, or `None` if the pattern needs fields a
/// time of day does not have (dates, time zones) or is malformed.
fn try_format(now: &NaiveTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(format)).ok()?;
    Some(out)
}

/// Whether `format` renders for a time of day.
pub fn is_valid_format(format: &str) -> bool {
    try_format(&NaiveTime::default(), format).is_some()
}

/// Format `now`; patterns that cannot render fall back to [`DEFAULT_FORMAT`].
pub fn format_time(now: &NaiveTime, format: &str) -> String {
    try_format(now, format).unwrap_or_else(|| {
        log::warn!("readout format {:?} does not render, using default", format);
        now.format(DEFAULT_FORMAT).to_string()
    })
}

/// Whether the hands sweep through the lower half of the dial, where the
/// readout normally sits.
pub fn hands_cover_lower_half(now: &NaiveTime) -> bool {
    (28..=33).contains(&now.minute()) || (2..=3).contains(&(now.hour() % 12))
}

/// Signed vertical offset of the readout from the dial center, in units of
/// the dial radius: below the center unless the hands are there.
pub fn offset_fraction(now: &NaiveTime) -> f32 {
    if hands_cover_lower_half(now) {
        -READOUT_OFFSET
    } else {
        READOUT_OFFSET
    }
}

/// Readout text and placement for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub text: String,
    pub offset_fraction: f32,
}

impl Readout {
    pub fn at(now: &NaiveTime, format: &str) -> Self {
        Self {
            text: format_time(now, format),
            offset_fraction: offset_fraction(now),
        }
    }

    /// Top-left corner of text measuring `text_size`: centered horizontally,
    /// top edge half a padded line below the offset line.
    pub fn top_left(&self, center: Pos2, radius: f32, scale: f32, text_size: Vec2) -> Pos2 {
        let line_y = center.y + self.offset_fraction * radius;
        let box_height = text_size.y + READOUT_PADDING_Y * scale;
        Pos2::new(center.x - text_size.x / 2.0, line_y + box_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(format_time(&hms(18, 30, 5), DEFAULT_FORMAT), "06:30:05 PM");
        assert_eq!(format_time(&hms(0, 0, 0), DEFAULT_FORMAT), "12:00:00 AM");
    }

    #[test]
    fn test_readout_below_center_by_default() {
        assert_eq!(offset_fraction(&hms(10, 10, 0)), 0.4);
        assert_eq!(offset_fraction(&hms(4, 45, 0)), 0.4);
    }

    #[test]
    fn test_readout_moves_up_for_minute_hand() {
        assert_eq!(offset_fraction(&hms(10, 28, 0)), -0.4);
        assert_eq!(offset_fraction(&hms(10, 33, 59)), -0.4);
        assert_eq!(offset_fraction(&hms(10, 34, 0)), 0.4);
    }

    #[test]
    fn test_readout_moves_up_for_hour_hand() {
        assert_eq!(offset_fraction(&hms(2, 0, 0)), -0.4);
        assert_eq!(offset_fraction(&hms(15, 59, 0)), -0.4);
        assert_eq!(offset_fraction(&hms(16, 0, 0)), 0.4);
    }

    #[test]
    fn test_format_validation() {
        assert!(is_valid_format(DEFAULT_FORMAT));
        assert!(is_valid_format("%H:%M"));
        assert!(!is_valid_format("%Q"));
    }

    #[test]
    fn test_date_and_zone_formats_rejected() {
        for f in ["%Y-%m-%d %H:%M", "%A", "%d", "%Z", "%z"] {
            assert!(!is_valid_format(f), "{f} should not render for a time of day");
        }
    }

    #[test]
    fn test_unrenderable_format_falls_back() {
        assert_eq!(format_time(&hms(10, 0, 0), "%Y-%m-%d %H:%M"), "10:00:00 AM");
        let r = Readout::at(&hms(22, 1, 2), "%Z");
        assert_eq!(r.text, "10:01:02 PM");
    }

    #[test]
    fn test_text_sits_below_offset_line() {
        let r = Readout::at(&hms(10, 10, 0), DEFAULT_FORMAT);
        let pos = r.top_left(Pos2::new(350.0, 350.0), 350.0, 1.0, Vec2::new(200.0, 40.0));
        // offset line at 350 + 140, padded box 50 high
        assert!((pos - Pos2::new(250.0, 515.0)).length() < 1e-3);
    }

    #[test]
    fn test_text_placement_scales() {
        let r = Readout::at(&hms(2, 30, 0), DEFAULT_FORMAT);
        let pos = r.top_left(Pos2::new(700.0, 700.0), 700.0, 2.0, Vec2::new(400.0, 80.0));
        // offset line at 700 - 280, padded box 100 high
        assert!((pos - Pos2::new(500.0, 470.0)).length() < 1e-3);
    }

    #[test]
    fn test_readout_at() {
        let r = Readout::at(&hms(14, 5, 9), "%H:%M:%S");
        assert_eq!(r.text, "14:05:09");
        assert_eq!(r.offset_fraction, -0.4);
    }
}
