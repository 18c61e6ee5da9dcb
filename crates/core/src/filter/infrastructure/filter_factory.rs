use crate::filter::domain::frame_filter::FrameFilter;
use crate::shared::color::Color;
use crate::shared::constants::{DEFAULT_CROSSHAIR_COLOR, DEFAULT_THICKNESS};

use super::crosshair_filter::CrosshairFilter;

/// Builds a crosshair filter with explicit configuration.
pub fn create_filter(color: Color, thickness: u32) -> Box<dyn FrameFilter> {
    log::debug!(
        "Creating crosshair filter (color={:?}, thickness={})",
        color,
        thickness
    );
    Box::new(CrosshairFilter::new(color, thickness))
}

/// Load-time discovery hook: a host calls this once after loading the
/// filter module and keeps the returned filter for the life of the stream,
/// invoking [`FrameFilter::process`] once per frame. No global state is
/// registered.
pub fn init_filter() -> Box<dyn FrameFilter> {
    create_filter(DEFAULT_CROSSHAIR_COLOR, DEFAULT_THICKNESS)
}
