//! clockcore — clockwork, window transform and dial geometry for deskclock

pub mod clockwork;
pub mod config;
pub mod dial;
pub mod logging;
pub mod readout;
pub mod theme;
pub mod ticker;
pub mod transform;

pub use clockwork::{angles, ClockAngles, Clockwork};
pub use config::ClockConfig;
pub use theme::ClockTheme;
pub use ticker::Ticker;
pub use transform::WindowTransform;
