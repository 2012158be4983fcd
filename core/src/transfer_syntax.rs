//! Module containing the DICOM transfer syntax specifier
//! and the trait for indexing transfer syntaxes by UID.
//!
//! A transfer syntax tells how a data set was serialized:
//! its byte order, whether value representations are explicit,
//! and whether pixel data is stored as encapsulated fragments.
//! Concrete specifiers are collected in a registry,
//! which is provided by a separate crate.

use byteordered::Endianness;

/// Description of the capabilities required
/// to handle data in a given transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Codec {
    /// No codec is required:
    /// pixel data is stored in native form.
    None,
    /// Pixel data is encapsulated,
    /// meaning that each frame is held in a compressed bitstream
    /// which has to be decoded before use.
    EncapsulatedPixelData,
    /// The whole data set is encoded in a way
    /// which cannot be handled by this library (e.g. deflated).
    Unsupported,
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements.
    codec: Codec,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    ///
    /// Note that only transfer syntax implementors are expected to construct
    /// TS descriptors from scratch.
    /// For a practical usage of transfer syntaxes,
    /// one should look up an existing transfer syntax registry by UID.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Create a new descriptor
    /// for a transfer syntax in explicit VR little endian
    /// with encapsulated pixel data.
    pub const fn new_encapsulated(uid: &'static str, name: &'static str) -> Self {
        Self::new(
            uid,
            name,
            Endianness::Little,
            true,
            Codec::EncapsulatedPixelData,
        )
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Check whether value representations are explicitly encoded
    /// in data sets of this transfer syntax.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain a reference to the underlying codec requirements.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Check whether pixel data is encapsulated in this transfer syntax.
    pub const fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(self.codec, Codec::EncapsulatedPixelData)
    }

    /// Check whether data sets in this transfer syntax
    /// cannot be handled by this library.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.codec, Codec::Unsupported)
    }
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be fully supported,
/// partially supported, or not supported. Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing null characters (`\0`) or spaces in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

impl TransferSyntaxIndex for [TransferSyntax] {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        let uid = trim_uid(uid);
        self.iter().find(|ts| ts.uid() == uid)
    }
}

/// Remove trailing padding from a unique identifier,
/// namely null characters and spaces.
#[inline]
pub fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(|c: char| c == '\0' || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.2",
        "Explicit VR Big Endian",
        Endianness::Big,
        true,
        Codec::None,
    );

    const JPEG_BASELINE: TransferSyntax =
        TransferSyntax::new_encapsulated("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");

    #[test]
    fn descriptor_properties() {
        assert_eq!(EXPLICIT_VR_BIG_ENDIAN.uid(), "1.2.840.10008.1.2.2");
        assert_eq!(EXPLICIT_VR_BIG_ENDIAN.endianness(), Endianness::Big);
        assert!(EXPLICIT_VR_BIG_ENDIAN.explicit_vr());
        assert!(!EXPLICIT_VR_BIG_ENDIAN.is_encapsulated_pixel_data());

        assert_eq!(JPEG_BASELINE.endianness(), Endianness::Little);
        assert!(JPEG_BASELINE.is_encapsulated_pixel_data());
        assert!(!JPEG_BASELINE.is_unsupported());
    }

    #[test]
    fn slice_index_ignores_padding() {
        let index = [EXPLICIT_VR_BIG_ENDIAN, JPEG_BASELINE];
        let index: &[TransferSyntax] = &index;
        assert_eq!(
            TransferSyntaxIndex::get(index, "1.2.840.10008.1.2.4.50\0").map(|ts| ts.name()),
            Some("JPEG Baseline (Process 1)")
        );
        assert_eq!(
            TransferSyntaxIndex::get(index, "1.2.840.10008.1.2.2 ").map(|ts| ts.uid()),
            Some("1.2.840.10008.1.2.2")
        );
        assert!(TransferSyntaxIndex::get(index, "1.2.3.4").is_none());
    }

    #[test]
    fn trim_uid_keeps_inner_content() {
        assert_eq!(trim_uid("1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
        assert_eq!(trim_uid("1.2.840.10008.1.2"), "1.2.840.10008.1.2");
        assert_eq!(trim_uid(""), "");
    }
}
