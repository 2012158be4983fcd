//! This crate contains the DICOM image frame abstraction
//! and is responsible for turning frames of pixel data
//! into [`DynamicImage`](image::DynamicImage)s.
//!
//! - [`frame`] holds the [`Frame`] type,
//!   either [native](NativeFrame) or [encapsulated](EncapsulatedFrame),
//!   and the grayscale rendering of native frames.
//! - [`PixelDecoder`] extracts native frames
//!   from the _Pixel Data_ of an in-memory data set.
//!
//! # Examples
//!
//! ```
//! use dcmtree_pixeldata::{Frame, NativeFrame};
//!
//! let frame = Frame::from(NativeFrame::new(vec![0, 10, 20, 30], 2, 2, 8));
//! let image = frame.render_image()?;
//! assert_eq!((image.width(), image.height()), (2, 2));
//! # Ok::<(), dcmtree_pixeldata::FrameError>(())
//! ```
//!
//! Frames can also be decoded from a data set:
//!
//! ```no_run
//! # use dcmtree_object::DataSet;
//! use dcmtree_pixeldata::PixelDecoder;
//! # fn foo(obj: &DataSet) -> Result<(), Box<dyn std::error::Error>> {
//! for (i, frame) in obj.decode_native_frames()?.into_iter().enumerate() {
//!     frame.to_gray16()?.save(format!("frame-{}.png", i))?;
//! }
//! # Ok(())
//! # }
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmtree_core::value::CastValueError;
use dcmtree_core::Endianness;
use dcmtree_object::{AccessError, DataSet, TransferSyntaxError};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::convert::TryFrom;
use tracing::{debug, warn};

pub mod attribute;
pub mod frame;

pub use crate::attribute::PixelRepresentation;
pub use crate::frame::{EncapsulatedFrame, Frame, FrameError, NativeFrame};

/// An error which may occur when decoding the pixel data of a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute {
        name: &'static str,
        #[snafu(backtrace)]
        source: AccessError,
    },

    #[snafu(display("Could not get attribute `{}`", name))]
    CastValue {
        name: &'static str,
        source: CastValueError,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidAttributeValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not resolve transfer syntax"))]
    ResolveTransferSyntax {
        #[snafu(backtrace)]
        source: TransferSyntaxError,
    },

    #[snafu(display("Unsupported transfer syntax `{}` for native pixel data", uid))]
    UnsupportedTransferSyntax {
        uid: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Unsupported BitsAllocated {}", bits_allocated))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Invalid pixel data: expected {} bytes, but got {}",
        expected,
        got
    ))]
    InvalidPixelData {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Trait for data sets whose pixel data can be decoded into frames.
pub trait PixelDecoder {
    /// Decode the native pixel data into one frame per image frame.
    ///
    /// Samples are read in the byte order of the data set's transfer syntax,
    /// as signed or unsigned integers according to _Pixel Representation_.
    /// Data sets with encapsulated pixel data are rejected.
    fn decode_native_frames(&self) -> Result<Vec<NativeFrame>>;
}

impl PixelDecoder for DataSet {
    fn decode_native_frames(&self) -> Result<Vec<NativeFrame>> {
        let ts = self.transfer_syntax().context(ResolveTransferSyntaxSnafu)?;
        ensure!(
            !ts.is_encapsulated_pixel_data() && !ts.is_unsupported(),
            UnsupportedTransferSyntaxSnafu { uid: ts.uid() }
        );

        let rows = attribute::rows(self)?;
        let cols = attribute::cols(self)?;
        let samples_per_pixel = attribute::samples_per_pixel(self)?;
        let bits_allocated = attribute::bits_allocated(self)?;
        let pixel_representation = attribute::pixel_representation(self)?;
        let number_of_frames = attribute::number_of_frames(self)?;
        let data = attribute::pixel_data(self)?;

        ensure!(
            matches!(bits_allocated, 8 | 16 | 32),
            UnsupportedBitsAllocatedSnafu { bits_allocated }
        );

        let frame_size = (rows as usize)
            .checked_mul(cols as usize)
            .and_then(|n| n.checked_mul(samples_per_pixel as usize))
            .and_then(|n| n.checked_mul((bits_allocated / 8) as usize))
            .context(InvalidAttributeValueSnafu {
                name: "Rows",
                value: rows.to_string(),
            })?;
        let expected = usize::try_from(number_of_frames)
            .ok()
            .and_then(|n| n.checked_mul(frame_size))
            .context(InvalidAttributeValueSnafu {
                name: "NumberOfFrames",
                value: number_of_frames.to_string(),
            })?;
        ensure!(
            frame_size > 0 && data.len() >= expected,
            InvalidPixelDataSnafu {
                expected,
                got: data.len(),
            }
        );
        if data.len() > expected {
            warn!(
                "Ignoring {} trailing bytes of pixel data",
                data.len() - expected
            );
        }

        debug!(
            "Decoding {} frame(s) of {}x{}x{} samples, {} bits ({:?}) in {}",
            number_of_frames,
            cols,
            rows,
            samples_per_pixel,
            bits_allocated,
            pixel_representation,
            ts.name()
        );

        let signed = pixel_representation == PixelRepresentation::Signed;
        let frames = data[..expected]
            .chunks_exact(frame_size)
            .map(|chunk| {
                let samples = match ts.endianness() {
                    Endianness::Little => {
                        read_samples::<LittleEndian>(chunk, bits_allocated, signed)
                    }
                    Endianness::Big => read_samples::<BigEndian>(chunk, bits_allocated, signed),
                };
                NativeFrame::new(samples, rows.into(), cols.into(), bits_allocated)
            })
            .collect();

        Ok(frames)
    }
}

/// Read integer samples of 8, 16 or 32 bits.
fn read_samples<O: ByteOrder>(bytes: &[u8], bits_allocated: u16, signed: bool) -> Vec<i64> {
    match (bits_allocated, signed) {
        (8, false) => bytes.iter().map(|&b| i64::from(b)).collect(),
        (8, true) => bytes.iter().map(|&b| i64::from(b as i8)).collect(),
        (16, false) => bytes
            .chunks_exact(2)
            .map(|c| i64::from(O::read_u16(c)))
            .collect(),
        (16, true) => bytes
            .chunks_exact(2)
            .map(|c| i64::from(O::read_i16(c)))
            .collect(),
        (_, false) => bytes
            .chunks_exact(4)
            .map(|c| i64::from(O::read_u32(c)))
            .collect(),
        (_, true) => bytes
            .chunks_exact(4)
            .map(|c| i64::from(O::read_i32(c)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_samples_in_byte_order() {
        let bytes = [0x01, 0x02, 0xFF, 0xFE];
        assert_eq!(
            read_samples::<LittleEndian>(&bytes, 16, false),
            vec![0x0201, 0xFEFF]
        );
        assert_eq!(
            read_samples::<BigEndian>(&bytes, 16, false),
            vec![0x0102, 0xFFFE]
        );
        assert_eq!(read_samples::<BigEndian>(&bytes, 16, true), vec![0x0102, -2]);
        assert_eq!(
            read_samples::<LittleEndian>(&bytes, 8, true),
            vec![1, 2, -1, -2]
        );
        assert_eq!(
            read_samples::<LittleEndian>(&bytes, 32, false),
            vec![0xFEFF_0201]
        );
        assert_eq!(
            read_samples::<LittleEndian>(&bytes, 32, true),
            vec![i64::from(0xFEFF_0201_u32 as i32)]
        );
    }
}
