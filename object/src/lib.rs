#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction
//! for inspecting in-memory DICOM data sets.
//!
//! A data set is an ordered list of elements,
//! in which some of them can hold sequences of nested data sets.
//! Data sets are produced by a decoder elsewhere
//! and are only read from this point onwards.
//!
//! - [`mem`] holds the tree model ([`DataSet`], [`SequenceItem`], [`InMemElement`])
//!   and its look-up operations.
//! - [`flat`] implements the depth-first flattening of the tree,
//!   which powers nested look-ups and textual dumps.
//!
//! # Examples
//!
//! Fetch an attribute at the top level or at any depth:
//!
//! ```
//! # use dcmtree_object::DataSet;
//! use dcmtree_dictionary_std::tags;
//! # fn foo(obj: &DataSet) -> Result<(), Box<dyn std::error::Error>> {
//! let modality = obj.element(tags::MODALITY)?.to_str()?;
//! let referenced = obj.element_nested(tags::REFERENCED_SOP_INSTANCE_UID)?.to_str()?;
//! # Ok(())
//! # }
//! ```
//!
//! Resolve the data set's transfer syntax:
//!
//! ```
//! # use dcmtree_core::{DataElement, PrimitiveValue, VR, Endianness};
//! # use dcmtree_dictionary_std::tags;
//! # use dcmtree_object::DataSet;
//! let obj = DataSet::from_elements(vec![DataElement::new(
//!     tags::TRANSFER_SYNTAX_UID,
//!     VR::UI,
//!     PrimitiveValue::from("1.2.840.10008.1.2.1\0"),
//! )]);
//! let ts = obj.transfer_syntax()?;
//! assert_eq!(ts.endianness(), Endianness::Little);
//! assert!(ts.explicit_vr());
//! # Ok::<(), dcmtree_object::TransferSyntaxError>(())
//! ```
pub mod flat;
pub mod mem;

pub use crate::flat::{FlatElements, FlatElementsWithDepth};
pub use crate::mem::{DataSet, InMemElement, SequenceItem};
pub use dcmtree_core::{DataElement, Length, PrimitiveValue, Tag, VR};
pub use dcmtree_dictionary_std::StandardDataDictionary;

use dcmtree_core::value::ValueType;
use snafu::{Backtrace, Snafu};

/// An error which may occur when looking up a data set's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    ElementNotFound { tag: Tag, backtrace: Backtrace },
}

/// An error which may occur when resolving a data set's transfer syntax.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum TransferSyntaxError {
    #[snafu(display("Missing transfer syntax UID element"))]
    MissingTransferSyntax {
        #[snafu(backtrace)]
        source: AccessError,
    },
    #[snafu(display("Transfer syntax UID should be a string, found {}", value_type))]
    UnexpectedValueType {
        value_type: ValueType,
        backtrace: Backtrace,
    },
    #[snafu(display("Transfer syntax UID should have exactly one value, found {}", count))]
    UnexpectedValueArity { count: u32, backtrace: Backtrace },
    #[snafu(display("Unrecognized transfer syntax `{}`", uid))]
    UnrecognizedTransferSyntax { uid: String, backtrace: Backtrace },
}

/// Alias for a result with an access error.
pub type Result<T, E = AccessError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_send_and_sync() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<AccessError>();
        is_send_sync::<TransferSyntaxError>();
    }

    #[test]
    fn access_error_display() {
        let err = DataSet::new_empty()
            .element(Tag(0x0010, 0x0010))
            .unwrap_err();
        assert_eq!(err.to_string(), "No such data element with tag (0010,0010)");
    }
}
