use ndarray::{ArrayView3, ArrayViewMut3};
use thiserror::Error;

/// The pixel buffer the host handed over is not a frame a filter can
/// operate on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidImage {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("image must have at least one channel")]
    ZeroChannels,
    #[error(
        "pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}x{channels}"
    )]
    BufferLength {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
    #[error("unsupported channel count {got}, filter requires {required}")]
    ChannelCount { got: u8, required: u8 },
}

/// A single video/image frame: contiguous interleaved bytes in row-major
/// order.
///
/// Channel order is whatever the host's capture path produces; the library
/// never reorders bytes, it only writes [`Color`](crate::shared::color::Color)
/// channels positionally. Construction is the validation boundary: a `Frame`
/// that exists is shape-consistent, so per-frame processing never re-checks
/// dimensions.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self, InvalidImage> {
        if width == 0 || height == 0 {
            return Err(InvalidImage::ZeroDimension { width, height });
        }
        if channels == 0 {
            return Err(InvalidImage::ZeroChannels);
        }
        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(InvalidImage::BufferLength {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3).unwrap();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data(), &data[..]);
    }

    #[rstest]
    #[case::zero_width(0, 10)]
    #[case::zero_height(10, 0)]
    #[case::both_zero(0, 0)]
    fn test_zero_dimension_is_invalid(#[case] width: u32, #[case] height: u32) {
        let err = Frame::new(vec![], width, height, 3).unwrap_err();
        assert_eq!(err, InvalidImage::ZeroDimension { width, height });
    }

    #[test]
    fn test_zero_channels_is_invalid() {
        let err = Frame::new(vec![], 2, 2, 0).unwrap_err();
        assert_eq!(err, InvalidImage::ZeroChannels);
    }

    #[test]
    fn test_mismatched_buffer_length_is_invalid() {
        let err = Frame::new(vec![0u8; 10], 2, 2, 3).unwrap_err();
        assert_eq!(
            err,
            InvalidImage::BufferLength {
                width: 2,
                height: 2,
                channels: 3,
                expected: 12,
                actual: 10,
            }
        );
    }

    #[test]
    fn test_single_pixel_frame_is_valid() {
        let frame = Frame::new(vec![0u8; 3], 1, 1, 3).unwrap();
        assert_eq!(frame.width(), 1);
        assert_eq!(frame.height(), 1);
    }

    #[test]
    fn test_data_mut_allows_modification() {
        let data = vec![0u8; 6]; // 2x1x3
        let mut frame = Frame::new(data, 2, 1, 3).unwrap();
        frame.data_mut()[0] = 255;
        assert_eq!(frame.data()[0], 255);
    }

    #[test]
    fn test_clone_is_independent() {
        let data = vec![100u8; 12];
        let frame = Frame::new(data, 2, 2, 3).unwrap();
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let data = vec![0u8; 24]; // 2x4x3
        let frame = Frame::new(data, 4, 2, 3).unwrap();
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let data = vec![0u8; 12]; // 2x2x3
        let mut frame = Frame::new(data, 2, 2, 3).unwrap();
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128; // row=0, col=1, third channel
        }
        assert_eq!(frame.as_ndarray()[[0, 1, 2]], 128);
    }
}
