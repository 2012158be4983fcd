//! Image frames and their conversion to images.
//!
//! A [`Frame`] is either native,
//! holding its samples as plain integers,
//! or encapsulated,
//! holding a compressed bitstream which has to be decoded by an image codec.

use image::{DynamicImage, ImageBuffer, Luma};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::debug;

/// An error which may occur when accessing or rendering a frame.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum FrameError {
    #[snafu(display("Expected {} frame, but frame is {}", expected, got))]
    WrongFrameVariant {
        expected: &'static str,
        got: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Invalid frame geometry: {} samples do not fit {} rows by {} columns",
        samples,
        rows,
        cols
    ))]
    InvalidFrameGeometry {
        rows: u32,
        cols: u32,
        samples: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode encapsulated frame"))]
    DecodeEncapsulated {
        source: image::ImageError,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid buffer when constructing image"))]
    BuildImage { backtrace: Backtrace },
}

pub type Result<T, E = FrameError> = std::result::Result<T, E>;

/// A frame of native pixel data.
///
/// Samples are interleaved:
/// each pixel is made of [`samples_per_pixel`](NativeFrame::samples_per_pixel)
/// consecutive values, and pixels are laid out row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeFrame {
    /// the sample values
    pub data: Vec<i64>,
    /// the number of rows (image height)
    pub rows: u32,
    /// the number of columns (image width)
    pub cols: u32,
    /// the number of bits allocated per sample
    pub bits_per_sample: u16,
    /// the smallest sample value, if known in advance
    pub min: Option<i64>,
    /// the largest sample value, if known in advance
    pub max: Option<i64>,
}

impl NativeFrame {
    /// Create a native frame without any value range hints.
    pub fn new(data: Vec<i64>, rows: u32, cols: u32, bits_per_sample: u16) -> Self {
        NativeFrame {
            data,
            rows,
            cols,
            bits_per_sample,
            min: None,
            max: None,
        }
    }

    /// Create a native frame with the given value range hints.
    ///
    /// The hints are kept as metadata;
    /// rendering always derives the range from the samples themselves.
    pub fn with_hints(
        data: Vec<i64>,
        rows: u32,
        cols: u32,
        bits_per_sample: u16,
        min: i64,
        max: i64,
    ) -> Self {
        NativeFrame {
            min: Some(min),
            max: Some(max),
            ..NativeFrame::new(data, rows, cols, bits_per_sample)
        }
    }

    /// Obtain the number of samples per pixel,
    /// which is the number of samples divided by the number of pixels.
    ///
    /// Fails if the frame has no pixels or no samples,
    /// or if the samples cannot be evenly split into pixels.
    pub fn samples_per_pixel(&self) -> Result<usize> {
        let pixels = (self.rows as usize)
            .checked_mul(self.cols as usize)
            .filter(|&pixels| pixels > 0)
            .context(InvalidFrameGeometrySnafu {
                rows: self.rows,
                cols: self.cols,
                samples: self.data.len(),
            })?;

        ensure!(
            !self.data.is_empty() && self.data.len() % pixels == 0,
            InvalidFrameGeometrySnafu {
                rows: self.rows,
                cols: self.cols,
                samples: self.data.len(),
            }
        );

        Ok(self.data.len() / pixels)
    }

    /// Determine the minimum and maximum values
    /// of the first sample of each pixel.
    fn sampled_range(&self, step: usize) -> (i64, i64) {
        let first = self.data[0];
        self.data
            .iter()
            .step_by(step)
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
    }

    /// Render the frame into a 16-bit grayscale image
    /// with `cols` as width and `rows` as height.
    ///
    /// Only the first sample of each pixel is considered.
    /// Values are normalized to the frame's own range and inverted,
    /// so that the smallest value becomes white (65535)
    /// and the largest value becomes black (0).
    /// When all values are equal, every pixel is white.
    ///
    /// Pixels are placed in row-major order:
    /// the `p`-th pixel lands at column `p % cols` of row `p / cols`.
    pub fn to_gray16(&self) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>> {
        let step = self.samples_per_pixel()?;
        let (min, max) = self.sampled_range(step);

        let intensities: Vec<u16> = if max == min {
            debug!(
                "Frame has constant value {}, rendering {}x{} white pixels",
                min, self.cols, self.rows
            );
            vec![u16::MAX; self.data.len() / step]
        } else {
            let (min, range) = (min as f64, max as f64 - min as f64);
            self.data
                .iter()
                .step_by(step)
                .map(|&v| {
                    let ratio = (v as f64 - min) / range;
                    (f64::from(u16::MAX) * (1. - ratio)).round() as u16
                })
                .collect()
        };

        // row-major buffer: pixel p is at (p % cols, p / cols)
        ImageBuffer::from_raw(self.cols, self.rows, intensities).context(BuildImageSnafu)
    }
}

/// A frame of encapsulated pixel data,
/// such as a JPEG or PNG bitstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncapsulatedFrame {
    /// the compressed bitstream
    pub data: Vec<u8>,
}

impl EncapsulatedFrame {
    pub fn new(data: Vec<u8>) -> Self {
        EncapsulatedFrame { data }
    }
}

/// A single image frame, native or encapsulated.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Native(NativeFrame),
    Encapsulated(EncapsulatedFrame),
}

impl Frame {
    fn variant_name(&self) -> &'static str {
        match self {
            Frame::Native(_) => "native",
            Frame::Encapsulated(_) => "encapsulated",
        }
    }

    /// Check whether this frame holds encapsulated pixel data.
    pub fn is_encapsulated(&self) -> bool {
        matches!(self, Frame::Encapsulated(_))
    }

    /// Obtain the native frame,
    /// or fail if the frame is encapsulated.
    pub fn as_native(&self) -> Result<&NativeFrame> {
        match self {
            Frame::Native(frame) => Ok(frame),
            _ => WrongFrameVariantSnafu {
                expected: "native",
                got: self.variant_name(),
            }
            .fail(),
        }
    }

    /// Obtain the encapsulated frame,
    /// or fail if the frame is native.
    pub fn as_encapsulated(&self) -> Result<&EncapsulatedFrame> {
        match self {
            Frame::Encapsulated(frame) => Ok(frame),
            _ => WrongFrameVariantSnafu {
                expected: "encapsulated",
                got: self.variant_name(),
            }
            .fail(),
        }
    }

    /// Take the native frame out,
    /// or fail if the frame is encapsulated.
    pub fn into_native(self) -> Result<NativeFrame> {
        match self {
            Frame::Native(frame) => Ok(frame),
            Frame::Encapsulated(_) => WrongFrameVariantSnafu {
                expected: "native",
                got: "encapsulated",
            }
            .fail(),
        }
    }

    /// Render the frame into an image.
    ///
    /// Native frames become 16-bit grayscale images
    /// (see [`NativeFrame::to_gray16`]),
    /// whereas encapsulated frames are decoded
    /// by the image codec matching their content.
    pub fn render_image(&self) -> Result<DynamicImage> {
        match self {
            Frame::Native(frame) => frame.to_gray16().map(DynamicImage::ImageLuma16),
            Frame::Encapsulated(frame) => {
                image::load_from_memory(&frame.data).context(DecodeEncapsulatedSnafu)
            }
        }
    }
}

impl From<NativeFrame> for Frame {
    fn from(frame: NativeFrame) -> Self {
        Frame::Native(frame)
    }
}

impl From<EncapsulatedFrame> for Frame {
    fn from(frame: EncapsulatedFrame) -> Self {
        Frame::Encapsulated(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use rstest::rstest;
    use std::io::Cursor;

    fn intensities(frame: &NativeFrame) -> Vec<u16> {
        frame.to_gray16().unwrap().into_raw()
    }

    #[rstest]
    #[case(vec![0, 10, 20, 30], vec![65535, 43690, 21845, 0])]
    #[case(vec![30, 20, 10, 0], vec![0, 21845, 43690, 65535])]
    #[case(vec![-100, 0, 100, 0], vec![65535, 32768, 0, 32768])]
    // only the first sample of each pixel counts
    #[case(vec![0, 99, 10, -99, 20, 99, 30, -99], vec![65535, 43690, 21845, 0])]
    fn inverted_normalization(#[case] data: Vec<i64>, #[case] expected: Vec<u16>) {
        let frame = NativeFrame::new(data, 2, 2, 8);
        assert_eq!(intensities(&frame), expected);
    }

    #[test]
    fn extreme_sample_values() {
        let frame = NativeFrame::new(vec![i64::MIN, i64::MAX], 1, 2, 64);
        assert_eq!(intensities(&frame), vec![65535, 0]);

        let frame = NativeFrame::new(vec![i64::MAX, 0, i64::MIN], 1, 3, 64);
        assert_eq!(intensities(&frame), vec![0, 32768, 65535]);
    }

    #[test]
    fn intensity_does_not_increase_with_value() {
        let data: Vec<i64> = vec![7, -3, 250, 0, 12, 12, 90, 1000, -40];
        let frame = NativeFrame::new(data.clone(), 3, 3, 16);
        let out = intensities(&frame);

        let mut pairs: Vec<(i64, u16)> = data.into_iter().zip(out).collect();
        pairs.sort();
        assert!(pairs.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(pairs.first().map(|p| p.1), Some(u16::MAX));
        assert_eq!(pairs.last().map(|p| p.1), Some(0));
    }

    #[rstest]
    #[case(vec![5, 5, 5, 5], 2, 2)]
    #[case(vec![-1; 6], 3, 2)]
    #[case(vec![0], 1, 1)]
    fn constant_frame_is_white(#[case] data: Vec<i64>, #[case] rows: u32, #[case] cols: u32) {
        let frame = NativeFrame::new(data, rows, cols, 8);
        let image = frame.to_gray16().unwrap();
        assert_eq!(image.dimensions(), (cols, rows));
        assert!(image.pixels().all(|p| p.0[0] == u16::MAX));
    }

    #[test]
    fn pixels_are_placed_row_major() {
        // 2 rows, 3 columns
        let frame = NativeFrame::new(vec![0, 10, 20, 30, 40, 50], 2, 3, 8);
        let image = frame.to_gray16().unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get_pixel(0, 0).0[0], 65535);
        assert_eq!(image.get_pixel(2, 0).0[0], 39321);
        assert_eq!(image.get_pixel(0, 1).0[0], 26214);
        assert_eq!(image.get_pixel(2, 1).0[0], 0);

        // 3 rows, 2 columns
        let frame = NativeFrame::new(vec![0, 10, 20, 30, 40, 50], 3, 2, 8);
        let image = frame.to_gray16().unwrap();
        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(image.get_pixel(0, 1).0[0], 39321);
        assert_eq!(image.get_pixel(1, 2).0[0], 0);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], 0, 2)]
    #[case(vec![1, 2, 3, 4], 2, 0)]
    #[case(vec![1, 2, 3, 4, 5], 2, 2)]
    #[case(vec![1, 2, 3], 2, 2)]
    #[case(vec![], 2, 2)]
    fn invalid_geometry(#[case] data: Vec<i64>, #[case] rows: u32, #[case] cols: u32) {
        let frame = NativeFrame::new(data, rows, cols, 8);
        assert!(matches!(
            frame.samples_per_pixel(),
            Err(FrameError::InvalidFrameGeometry { .. })
        ));
        assert!(matches!(
            Frame::from(frame).render_image(),
            Err(FrameError::InvalidFrameGeometry { .. })
        ));
    }

    #[test]
    fn samples_per_pixel_is_the_step() {
        let frame = NativeFrame::new(vec![0; 12], 2, 2, 8);
        assert_eq!(frame.samples_per_pixel().unwrap(), 3);
    }

    #[test]
    fn hints_are_kept() {
        let frame = NativeFrame::with_hints(vec![1, 2], 1, 2, 16, 0, 4095);
        assert_eq!(frame.min, Some(0));
        assert_eq!(frame.max, Some(4095));
        // rendering still uses the actual range
        assert_eq!(intensities(&frame), vec![65535, 0]);
    }

    #[test]
    fn variant_accessors() {
        let native = Frame::from(NativeFrame::new(vec![0, 1], 1, 2, 8));
        assert!(!native.is_encapsulated());
        assert!(native.as_native().is_ok());
        assert!(matches!(
            native.as_encapsulated(),
            Err(FrameError::WrongFrameVariant {
                expected: "encapsulated",
                got: "native",
                ..
            })
        ));

        let encapsulated = Frame::from(EncapsulatedFrame::new(vec![0xFF, 0xD8]));
        assert!(encapsulated.is_encapsulated());
        assert_eq!(
            encapsulated.as_encapsulated().unwrap().data,
            vec![0xFF, 0xD8]
        );
        let err = encapsulated.as_native().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected native frame, but frame is encapsulated"
        );
        assert!(matches!(
            encapsulated.into_native(),
            Err(FrameError::WrongFrameVariant { .. })
        ));
    }

    #[test]
    fn native_frame_renders_to_luma16() {
        let frame = Frame::from(NativeFrame::new(vec![0, 10, 20, 30], 2, 2, 8));
        let image = frame.render_image().unwrap();
        let gray = image.as_luma16().expect("should be a 16-bit grayscale image");
        assert_eq!(gray.as_raw(), &vec![65535, 43690, 21845, 0]);
    }

    #[test]
    fn encapsulated_frame_is_decoded() {
        let source = DynamicImage::ImageLuma8(
            ImageBuffer::from_raw(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap(),
        );
        let mut png = Cursor::new(Vec::new());
        source.write_to(&mut png, ImageFormat::Png).unwrap();

        let frame = Frame::from(EncapsulatedFrame::new(png.into_inner()));
        let image = frame.render_image().unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.to_luma8().into_raw(), vec![0, 50, 100, 150, 200, 250]);

        let garbage = Frame::from(EncapsulatedFrame::new(vec![1, 2, 3, 4]));
        assert!(matches!(
            garbage.render_image(),
            Err(FrameError::DecodeEncapsulated { .. })
        ));
    }
}
