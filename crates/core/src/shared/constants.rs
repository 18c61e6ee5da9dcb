use crate::shared::color::Color;

pub const DEFAULT_CROSSHAIR_COLOR: Color = Color(0xFF, 0, 0);

/// Stroke width in pixels for overlay lines.
pub const DEFAULT_THICKNESS: u32 = 3;

/// Channel count the shipped filters and the CLI host convention assume.
pub const FRAME_CHANNELS: u8 = 3;
