//! This module contains the implementation for an in-memory DICOM data set.
//!
//! A [`DataSet`] is an ordered list of data elements.
//! Elements holding a data set sequence contain [`SequenceItem`]s,
//! which in turn are ordered lists of elements,
//! thus forming a tree of arbitrary depth.
//!
//! The order in which elements were encountered is kept as is:
//! no sorting by tag takes place,
//! and the same tag may appear more than once.
//! Look-ups yield the first match.
//!
//! ```
//! # use dcmtree_core::{DataElement, Length, PrimitiveValue, Tag, VR};
//! # use dcmtree_core::value::Value;
//! # use dcmtree_object::{DataSet, SequenceItem};
//! let obj = DataSet::from_elements(vec![
//!     DataElement::new(Tag(0x0008, 0x0060), VR::CS, PrimitiveValue::from("MR")),
//!     DataElement::new(
//!         Tag(0x0008, 0x1140),
//!         VR::SQ,
//!         Value::new_sequence(
//!             vec![SequenceItem::new(vec![DataElement::new(
//!                 Tag(0x0008, 0x1155),
//!                 VR::UI,
//!                 PrimitiveValue::from("1.2.3.4"),
//!             )])],
//!             Length::UNDEFINED,
//!         ),
//!     ),
//! ]);
//!
//! // shallow look-up only sees the top level
//! assert!(obj.element(Tag(0x0008, 0x1155)).is_err());
//! // nested look-up descends into sequence items
//! assert_eq!(obj.element_nested(Tag(0x0008, 0x1155))?.to_str()?, "1.2.3.4");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use dcmtree_core::header::{DataElement, HasLength, Header, Length, Tag};
use dcmtree_core::transfer_syntax::{trim_uid, TransferSyntax, TransferSyntaxIndex};
use dcmtree_core::value::{PrimitiveValue, Value};
use dcmtree_dictionary_std::tags;
use dcmtree_transfer_syntax_registry::get_registry;
use serde::Serialize;
use snafu::{OptionExt, ResultExt};
use std::iter::FromIterator;

use crate::flat::{FlatElements, FlatElementsWithDepth};
use crate::{
    AccessError, ElementNotFoundSnafu, MissingTransferSyntaxSnafu, TransferSyntaxError,
    UnexpectedValueAritySnafu, UnexpectedValueTypeSnafu, UnrecognizedTransferSyntaxSnafu,
};

/// A full in-memory DICOM data element.
pub type InMemElement = DataElement<SequenceItem>;

type Result<T, E = AccessError> = std::result::Result<T, E>;

/// An in-memory DICOM data set,
/// holding its elements in their original order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DataSet {
    /// the element list
    elements: Vec<InMemElement>,
}

/// An item of a data set sequence:
/// a nested list of elements plus the item's declared length.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceItem {
    /// the element list
    elements: Vec<InMemElement>,
    /// the declared item length, possibly undefined
    length: Length,
}

impl PartialEq for SequenceItem {
    // undefined lengths are considered equal here
    fn eq(&self, other: &Self) -> bool {
        self.length.inner_eq(other.length) && self.elements == other.elements
    }
}

impl HasLength for SequenceItem {
    fn length(&self) -> Length {
        self.length
    }
}

impl DataSet {
    /// Create an empty data set.
    pub fn new_empty() -> Self {
        DataSet::default()
    }

    /// Create a data set from a list of elements, keeping their order.
    pub fn from_elements(elements: Vec<InMemElement>) -> Self {
        DataSet { elements }
    }

    /// Obtain the number of elements at the top level of the data set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the top level elements of the data set, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, InMemElement> {
        self.elements.iter()
    }

    /// Obtain the top level elements as a slice.
    pub fn elements(&self) -> &[InMemElement] {
        &self.elements
    }

    /// Retrieve the first element at the top level with the given tag.
    ///
    /// Elements inside sequence items are not considered.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement> {
        find_shallow(&self.elements, tag)
    }

    /// Retrieve the first element with the given tag
    /// at any depth of the data set,
    /// following the order of [`flat_iter`](DataSet::flat_iter).
    pub fn element_nested(&self, tag: Tag) -> Result<&InMemElement> {
        find_nested(&self.elements, tag)
    }

    /// Obtain an iterator over every element of the data set,
    /// including those nested in sequence items,
    /// in depth-first pre-order.
    pub fn flat_iter(&self) -> FlatElements<'_> {
        FlatElements::new(&self.elements)
    }

    /// Obtain an iterator over every element of the data set
    /// paired with its nesting depth,
    /// in the same order as [`flat_iter`](DataSet::flat_iter).
    ///
    /// Top level elements have depth 0.
    pub fn flat_iter_with_depth(&self) -> FlatElementsWithDepth<'_> {
        FlatElementsWithDepth::new(&self.elements)
    }

    /// Resolve the transfer syntax declared in this data set
    /// using the built-in transfer syntax registry.
    ///
    /// See [`transfer_syntax_with`](DataSet::transfer_syntax_with).
    pub fn transfer_syntax(&self) -> Result<&'static TransferSyntax, TransferSyntaxError> {
        self.transfer_syntax_with(get_registry())
    }

    /// Resolve the transfer syntax declared in this data set
    /// through the given transfer syntax index.
    ///
    /// The _Transfer Syntax UID_ element is looked up at the top level,
    /// and must hold exactly one string.
    /// Trailing padding in the UID is ignored.
    pub fn transfer_syntax_with<'r, R>(
        &self,
        index: &'r R,
    ) -> Result<&'r TransferSyntax, TransferSyntaxError>
    where
        R: TransferSyntaxIndex + ?Sized,
    {
        let elem = self
            .element(tags::TRANSFER_SYNTAX_UID)
            .context(MissingTransferSyntaxSnafu)?;

        let uid = match elem.value() {
            Value::Primitive(PrimitiveValue::Strs(uids)) if uids.len() == 1 => &uids[0],
            Value::Primitive(PrimitiveValue::Strs(uids)) => {
                return UnexpectedValueAritySnafu {
                    count: uids.len() as u32,
                }
                .fail()
            }
            Value::Primitive(PrimitiveValue::Empty) => {
                return UnexpectedValueAritySnafu { count: 0_u32 }.fail()
            }
            value => {
                return UnexpectedValueTypeSnafu {
                    value_type: value.value_type(),
                }
                .fail()
            }
        };

        let uid = trim_uid(uid);
        index
            .get(uid)
            .context(UnrecognizedTransferSyntaxSnafu { uid })
    }
}

impl SequenceItem {
    /// Create a sequence item from a list of elements,
    /// with an undefined item length.
    pub fn new(elements: Vec<InMemElement>) -> Self {
        SequenceItem {
            elements,
            length: Length::UNDEFINED,
        }
    }

    /// Create a sequence item from a list of elements
    /// and its declared item length.
    pub fn new_with_len(elements: Vec<InMemElement>, length: Length) -> Self {
        SequenceItem { elements, length }
    }

    /// Obtain the number of elements directly in this item.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the item has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements directly in this item, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, InMemElement> {
        self.elements.iter()
    }

    /// Obtain the item's elements as a slice.
    pub fn elements(&self) -> &[InMemElement] {
        &self.elements
    }

    /// Retrieve the first element directly in this item with the given tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement> {
        find_shallow(&self.elements, tag)
    }

    /// Retrieve the first element with the given tag
    /// at any depth under this item.
    pub fn element_nested(&self, tag: Tag) -> Result<&InMemElement> {
        find_nested(&self.elements, tag)
    }

    /// Obtain an iterator over every element under this item,
    /// in depth-first pre-order.
    pub fn flat_iter(&self) -> FlatElements<'_> {
        FlatElements::new(&self.elements)
    }

    /// Obtain an iterator over every element under this item
    /// paired with its depth relative to the item.
    pub fn flat_iter_with_depth(&self) -> FlatElementsWithDepth<'_> {
        FlatElementsWithDepth::new(&self.elements)
    }
}

fn find_shallow(elements: &[InMemElement], tag: Tag) -> Result<&InMemElement> {
    elements
        .iter()
        .find(|e| e.tag() == tag)
        .context(ElementNotFoundSnafu { tag })
}

fn find_nested(elements: &[InMemElement], tag: Tag) -> Result<&InMemElement> {
    FlatElements::new(elements)
        .find(|e| e.tag() == tag)
        .context(ElementNotFoundSnafu { tag })
}

impl FromIterator<InMemElement> for DataSet {
    fn from_iter<T: IntoIterator<Item = InMemElement>>(iter: T) -> Self {
        DataSet {
            elements: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<InMemElement> for SequenceItem {
    fn from_iter<T: IntoIterator<Item = InMemElement>>(iter: T) -> Self {
        SequenceItem::new(iter.into_iter().collect())
    }
}

impl From<Vec<InMemElement>> for DataSet {
    fn from(elements: Vec<InMemElement>) -> Self {
        DataSet::from_elements(elements)
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a InMemElement;
    type IntoIter = std::slice::Iter<'a, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for DataSet {
    type Item = InMemElement;
    type IntoIter = std::vec::IntoIter<InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceItem {
    type Item = &'a InMemElement;
    type IntoIter = std::slice::Iter<'a, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtree_core::dicom_value;
    use dcmtree_core::header::VR;
    use dcmtree_core::value::ValueType;
    use dcmtree_core::Endianness;

    fn ts_element(value: PrimitiveValue) -> InMemElement {
        DataElement::new(tags::TRANSFER_SYNTAX_UID, VR::UI, value)
    }

    fn sequence(tag: Tag, items: Vec<SequenceItem>) -> InMemElement {
        DataElement::new(tag, VR::SQ, Value::new_sequence(items, Length::UNDEFINED))
    }

    fn cs(tag: Tag, value: &str) -> InMemElement {
        DataElement::new(tag, VR::CS, PrimitiveValue::from(value))
    }

    #[test]
    fn inmem_object_compare() {
        let obj1 = DataSet::new_empty();
        let obj2 = DataSet::new_empty();
        assert_eq!(obj1, obj2);
        let empty_patient_name: InMemElement = DataElement::empty(Tag(0x0010, 0x0010), VR::PN);
        let obj1 = DataSet::from(vec![empty_patient_name.clone()]);
        assert_ne!(obj1, obj2);
        let obj2: DataSet = std::iter::once(empty_patient_name).collect();
        assert_eq!(obj1, obj2);
    }

    #[test]
    fn data_set_with_sequences_equals_its_clone() {
        let obj = DataSet::from(vec![
            cs(Tag(0x0008, 0x0060), "OT"),
            sequence(
                Tag(0x0008, 0x1115),
                vec![SequenceItem::new(vec![sequence(
                    Tag(0x0008, 0x1140),
                    vec![SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "MR")])],
                )])],
            ),
        ]);
        assert_eq!(obj, obj.clone());

        let other = DataSet::from(vec![
            cs(Tag(0x0008, 0x0060), "OT"),
            sequence(
                Tag(0x0008, 0x1115),
                vec![SequenceItem::new(vec![sequence(
                    Tag(0x0008, 0x1140),
                    vec![SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "CT")])],
                )])],
            ),
        ]);
        assert_ne!(obj, other);
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let obj: DataSet = vec![
            cs(Tag(0x0010, 0x0040), "F"),
            cs(Tag(0x0008, 0x0060), "CT"),
            cs(Tag(0x0008, 0x0060), "MR"),
        ]
        .into_iter()
        .collect();

        assert_eq!(obj.len(), 3);
        let tags: Vec<_> = obj.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![Tag(0x0010, 0x0040), Tag(0x0008, 0x0060), Tag(0x0008, 0x0060)]
        );

        // first match wins
        assert_eq!(obj.element(Tag(0x0008, 0x0060)).unwrap().to_str().unwrap(), "CT");

        // order also survives a clone
        let copy = obj.clone();
        let copy_tags: Vec<_> = copy.into_iter().map(|e| e.tag()).collect();
        assert_eq!(copy_tags, tags);
    }

    #[test]
    fn shallow_lookup_does_not_descend() {
        let obj = DataSet::from(vec![sequence(
            Tag(0x0008, 0x1115),
            vec![SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "US")])],
        )]);

        let err = obj.element(Tag(0x0008, 0x0060)).unwrap_err();
        assert!(matches!(
            err,
            AccessError::ElementNotFound { tag, .. } if tag == Tag(0x0008, 0x0060)
        ));
        assert_eq!(
            obj.element_nested(Tag(0x0008, 0x0060))
                .unwrap()
                .to_str()
                .unwrap(),
            "US"
        );
    }

    #[test]
    fn nested_lookup_returns_first_in_pre_order() {
        // (0008,0060) appears deep in the first sequence
        // and again at the top level after it
        let obj = DataSet::from(vec![
            sequence(
                Tag(0x0008, 0x1115),
                vec![
                    SequenceItem::new(vec![sequence(
                        Tag(0x0008, 0x1140),
                        vec![SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "DEEP")])],
                    )]),
                    SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "SECOND ITEM")]),
                ],
            ),
            cs(Tag(0x0008, 0x0060), "TOP"),
        ]);

        assert_eq!(
            obj.element_nested(Tag(0x0008, 0x0060))
                .unwrap()
                .to_str()
                .unwrap(),
            "DEEP"
        );
        // the shallow look-up skips the nested ones
        assert_eq!(obj.element(Tag(0x0008, 0x0060)).unwrap().to_str().unwrap(), "TOP");

        // items provide the same look-ups, scoped to themselves
        let items = obj.element(Tag(0x0008, 0x1115)).unwrap().items().unwrap();
        assert_eq!(
            items[1]
                .element(Tag(0x0008, 0x0060))
                .unwrap()
                .to_str()
                .unwrap(),
            "SECOND ITEM"
        );
        assert!(items[0].element(Tag(0x0008, 0x0060)).is_err());
        assert_eq!(
            items[0]
                .element_nested(Tag(0x0008, 0x0060))
                .unwrap()
                .to_str()
                .unwrap(),
            "DEEP"
        );
    }

    #[test]
    fn lookup_in_empty_data_set() {
        let obj = DataSet::new_empty();
        assert!(obj.is_empty());
        assert!(obj.element(Tag(0x0010, 0x0010)).is_err());
        assert!(obj.element_nested(Tag(0x0010, 0x0010)).is_err());
        assert_eq!(obj.flat_iter().count(), 0);
    }

    #[test]
    fn resolves_explicit_vr_little_endian() {
        let obj = DataSet::from(vec![ts_element(PrimitiveValue::from(
            "1.2.840.10008.1.2.1\0",
        ))]);
        let ts = obj.transfer_syntax().unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.1");
        assert_eq!(ts.endianness(), Endianness::Little);
        assert!(ts.explicit_vr());
    }

    #[test]
    fn resolves_through_custom_index() {
        const ONLY_BIG_ENDIAN: [TransferSyntax; 1] = [TransferSyntax::new(
            "1.2.840.10008.1.2.2",
            "Explicit VR Big Endian",
            Endianness::Big,
            true,
            dcmtree_core::transfer_syntax::Codec::None,
        )];
        let index: &[TransferSyntax] = &ONLY_BIG_ENDIAN;

        let obj = DataSet::from(vec![ts_element(PrimitiveValue::from("1.2.840.10008.1.2.2"))]);
        let ts = obj.transfer_syntax_with(index).unwrap();
        assert_eq!(ts.endianness(), Endianness::Big);

        let obj = DataSet::from(vec![ts_element(PrimitiveValue::from("1.2.840.10008.1.2.1"))]);
        assert!(matches!(
            obj.transfer_syntax_with(index),
            Err(TransferSyntaxError::UnrecognizedTransferSyntax { uid, .. })
                if uid == "1.2.840.10008.1.2.1"
        ));
    }

    #[test]
    fn transfer_syntax_must_be_top_level() {
        // nested inside a sequence item does not count
        let obj = DataSet::from(vec![sequence(
            Tag(0x0040, 0x0275),
            vec![SequenceItem::new(vec![ts_element(PrimitiveValue::from(
                "1.2.840.10008.1.2.1",
            ))])],
        )]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::MissingTransferSyntax {
                source: AccessError::ElementNotFound { tag, .. },
            }) if tag == tags::TRANSFER_SYNTAX_UID
        ));
        assert!(matches!(
            DataSet::new_empty().transfer_syntax(),
            Err(TransferSyntaxError::MissingTransferSyntax {
                source: AccessError::ElementNotFound { tag, .. },
            }) if tag == tags::TRANSFER_SYNTAX_UID
        ));
    }

    #[test]
    fn transfer_syntax_value_arity() {
        let obj = DataSet::from(vec![ts_element(dicom_value!(
            Strs,
            ["1.2.840.10008.1.2.1", "1.2.840.10008.1.2"]
        ))]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::UnexpectedValueArity { count: 2, .. })
        ));

        let obj = DataSet::from(vec![ts_element(PrimitiveValue::Empty)]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::UnexpectedValueArity { count: 0, .. })
        ));

        let obj = DataSet::from(vec![ts_element(PrimitiveValue::Strs(Default::default()))]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::UnexpectedValueArity { count: 0, .. })
        ));
    }

    #[test]
    fn transfer_syntax_value_type() {
        let obj = DataSet::from(vec![ts_element(dicom_value!(Ints, [1, 2]))]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::UnexpectedValueType {
                value_type: ValueType::Ints,
                ..
            })
        ));

        let obj = DataSet::from(vec![sequence(tags::TRANSFER_SYNTAX_UID, vec![])]);
        assert!(matches!(
            obj.transfer_syntax(),
            Err(TransferSyntaxError::UnexpectedValueType {
                value_type: ValueType::DataSetSequence,
                ..
            })
        ));
    }

    #[test]
    fn unrecognized_transfer_syntax() {
        let obj = DataSet::from(vec![ts_element(PrimitiveValue::from("1.2.3.4.5.6"))]);
        let err = obj.transfer_syntax().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unrecognized transfer syntax `1.2.3.4.5.6`"
        );
    }

    #[test]
    fn sequence_item_equality_ignores_undefined_length() {
        let a = SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "OT")]);
        let b = SequenceItem::new(vec![cs(Tag(0x0008, 0x0060), "OT")]);
        assert_eq!(a, b);
        let c = SequenceItem::new_with_len(vec![cs(Tag(0x0008, 0x0060), "OT")], Length(10));
        assert_ne!(a, c);
        assert!(c.length().is_defined());
    }
}
