use std::path::Path;

use crate::shared::frame::Frame;

/// Domain interface for loading a single image file as a frame.
pub trait ImageReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
