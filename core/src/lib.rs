#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM tree toolkit,
//! containing the concepts and data structures
//! shared by every other crate in the workspace.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for DICOM element headers,
//!   including common definitions for DICOM tags and value representations.
//! - [`value`] holds definitions for values in DICOM elements,
//!   with the awareness of multiplicity
//!   and the possible presence of sequences.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate a tag to a human readable attribute name.
//! - [`transfer_syntax`] describes transfer syntax specifiers
//!   and the index trait through which they are looked up by UID.

pub mod dictionary;
pub mod header;
pub mod transfer_syntax;
pub mod value;

pub use dictionary::{DataDictionary, DataDictionaryEntry, StubDataDictionary};
pub use header::{DataElement, DataElementHeader, Length, RawVR, Tag, VR};
pub use transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
pub use value::{PrimitiveValue, Value as DicomValue};

// re-export crates that are part of the public API
pub use byteordered::Endianness;
pub use smallvec;
