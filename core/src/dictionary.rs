//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary translates an attribute tag
//! into a human readable keyword and its typical value representation.
//! The standard dictionary lives in a separate crate;
//! this module only holds the common abstractions
//! plus a [stub dictionary](StubDataDictionary) which knows no attributes.

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// Type trait for a dictionary of DICOM attributes.
///
/// Attribute dictionaries provide the means to convert a tag to an alias
/// and vice versa,
/// as well as a form of retrieving additional information about the attribute.
///
/// The methods herein have no generic parameters,
/// so as to enable being used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are usually case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The attribute tag.
    fn tag(&self) -> Tag;
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;
    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag
    pub tag: Tag,
    /// The alias of the attribute, with no spaces, usually UpperCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl DataDictionaryEntry for DataDictionaryEntryRef<'_> {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// An empty attribute dictionary.
///
/// Every look-up fails,
/// which makes for unnamed attributes wherever it is used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

impl<D> DataDictionary for &D
where
    D: DataDictionary,
{
    type Entry = D::Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_dictionary_knows_nothing() {
        let dict = StubDataDictionary;
        assert_eq!(dict.by_tag(Tag(0x0010, 0x0010)), None);
        assert_eq!(dict.by_name("PatientName"), None);
        // also through a reference
        assert_eq!((&dict).by_tag(Tag(0x7FE0, 0x0010)), None);
    }

    #[test]
    fn entry_ref_accessors() {
        let entry = DataDictionaryEntryRef {
            tag: Tag(0x0028, 0x0010),
            alias: "Rows",
            vr: VR::US,
        };
        assert_eq!(DataDictionaryEntry::tag(&entry), Tag(0x0028, 0x0010));
        assert_eq!(entry.alias(), "Rows");
        assert_eq!(DataDictionaryEntry::vr(&entry), VR::US);
    }
}
