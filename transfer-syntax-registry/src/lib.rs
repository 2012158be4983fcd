#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax
//! into the respective transfer syntax specifier.
//! The registry is populated with every transfer syntax in [`entries`]
//! upon first use,
//! and is reachable through the unit type [`TransferSyntaxRegistry`],
//! which implements [`TransferSyntaxIndex`].
//!
//! ```
//! use dcmtree_core::TransferSyntaxIndex;
//! use dcmtree_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! assert!(ts.explicit_vr());
//! ```

pub mod entries;

use byteordered::Endianness;
use dcmtree_core::transfer_syntax::{trim_uid, Codec, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Main implementation of a registry of DICOM transfer syntaxes.
///
/// Consumers would generally use [`TransferSyntaxRegistry`] instead.
pub struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistryImpl")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistryImpl {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// Obtain a DICOM transfer syntax by its UID,
    /// ignoring trailing null characters and spaces.
    fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        self.m.get(trim_uid(uid.as_ref()))
    }

    /// Register the given transfer syntax (TS) to the system.
    ///
    /// It can override another TS with the same UID,
    /// in the only case that the previously registered TS
    /// did not support reading the data set at all.
    /// Otherwise this function returns `false` and no changes are made.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            Entry::Occupied(mut e) => {
                let replace = match (e.get().codec(), ts.codec()) {
                    (Codec::Unsupported, Codec::None)
                    | (Codec::Unsupported, Codec::EncapsulatedPixelData) => true,
                    (current, proposed) => {
                        tracing::warn!(
                            "Transfer syntax {} already registered as {:?}, ignoring {:?}",
                            ts.uid(),
                            current,
                            proposed,
                        );
                        false
                    }
                };

                if replace {
                    e.insert(ts);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistryImpl {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        Self::get(self, uid)
    }
}

/// Zero-sized representative of the main transfer syntax registry.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        get_registry().iter()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        for ts in initialize_codecs() {
            registry.register(ts);
        }
        tracing::debug!("Transfer syntax registry initialized with {} entries", registry.m.len());
        registry
    };
}

/// Retrieve the default transfer syntax.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve a reference to the global codec registry.
#[inline]
pub fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}

fn initialize_codecs() -> Vec<TransferSyntax> {
    use crate::entries::*;

    vec![
        // the three base transfer syntaxes
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        // encapsulated pixel data
        ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
        RLE_LOSSLESS,
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION,
        JPIP_REFERENCED,
        MPEG2_MAIN_PROFILE_MAIN_LEVEL,
        MPEG2_MAIN_PROFILE_HIGH_LEVEL,
        MPEG4_AVC_H264_HIGH_PROFILE,
        MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE,
        MPEG4_AVC_H264_HIGH_PROFILE_FOR_2D_VIDEO,
        MPEG4_AVC_H264_HIGH_PROFILE_FOR_3D_VIDEO,
        MPEG4_AVC_H264_STEREO_HIGH_PROFILE,
        HEVC_H265_MAIN_PROFILE,
        HEVC_H265_MAIN_10_PROFILE,
        JPEG_XL_LOSSLESS,
        JPEG_XL_RECOMPRESSION,
        JPEG_XL,
        // known but not supported
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        JPIP_REFERENCED_DEFLATE,
    ]
}

/// create a TS with encapsulated pixel data
pub(crate) const fn create_ts_stub(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax::new(
        uid,
        name,
        Endianness::Little,
        true,
        Codec::EncapsulatedPixelData,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_unsupported_only() {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        assert!(registry.register(entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN));

        // a supported descriptor with the same UID takes over
        let inflated = TransferSyntax::new(
            "1.2.840.10008.1.2.1.99",
            "Deflated Explicit VR Little Endian",
            Endianness::Little,
            true,
            Codec::None,
        );
        assert!(registry.register(inflated));
        assert_eq!(
            registry.get("1.2.840.10008.1.2.1.99").map(|ts| ts.codec()),
            Some(Codec::None)
        );

        // but the base transfer syntaxes stay as they are
        assert!(registry.register(entries::EXPLICIT_VR_LITTLE_ENDIAN));
        assert!(!registry.register(create_ts_stub(
            "1.2.840.10008.1.2.1",
            "Explicit VR Little Endian"
        )));
        assert_eq!(
            registry.get("1.2.840.10008.1.2.1").map(|ts| ts.codec()),
            Some(Codec::None)
        );
    }

    #[test]
    fn default_is_implicit_vr_little_endian() {
        let ts = default();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2");
        assert!(!ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);
    }
}
