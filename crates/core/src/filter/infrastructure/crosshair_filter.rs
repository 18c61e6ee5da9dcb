use crate::filter::domain::frame_filter::FrameFilter;
use crate::shared::color::Color;
use crate::shared::constants::{DEFAULT_CROSSHAIR_COLOR, DEFAULT_THICKNESS, FRAME_CHANNELS};
use crate::shared::frame::{Frame, InvalidImage};

use super::raster;

/// Overlays a large centered crosshair on each frame.
///
/// Segment endpoints derive from the frame size by integer division, so the
/// center is `(w / 2, h / 2)` with truncation on odd dimensions:
/// - horizontal: `(w / 4, h / 2)` to `(3 * w / 4, h / 2)`
/// - vertical: `(w / 2, h / 4)` to `(w / 2, 3 * h / 4)`
///
/// On 1-pixel-wide or -tall frames the segments collapse to points; that is
/// not an error. Requires 3-channel frames because the stroke color carries
/// three channels.
pub struct CrosshairFilter {
    color: Color,
    thickness: u32,
}

impl CrosshairFilter {
    pub fn new(color: Color, thickness: u32) -> Self {
        Self { color, thickness }
    }
}

impl Default for CrosshairFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CROSSHAIR_COLOR, DEFAULT_THICKNESS)
    }
}

impl FrameFilter for CrosshairFilter {
    fn process(&self, frame: &mut Frame) -> Result<(), InvalidImage> {
        if frame.channels() != FRAME_CHANNELS {
            return Err(InvalidImage::ChannelCount {
                got: frame.channels(),
                required: FRAME_CHANNELS,
            });
        }

        let w = i64::from(frame.width());
        let h = i64::from(frame.height());
        let (w2, h2) = (w / 2, h / 2);

        raster::draw_line(frame, w / 4, h2, 3 * w / 4, h2, self.color, self.thickness);
        raster::draw_line(frame, w2, h / 4, w2, 3 * h / 4, self.color, self.thickness);
        Ok(())
    }
}
