//! This modules contains an assortment of types required for interpreting DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute tag, the
//! element header, and element composite types.

use crate::value::{CastValueError, PrimitiveValue, Value};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// It is named `length` to make it distinct from the conventional method
    /// signature `len(&self) -> usize` for the number of elements of a
    /// collection.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or specific primitive
    /// values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE000)
    }
}

/// Stub type representing a non-existing DICOM object.
///
/// This type implements `HasLength`, but cannot be instantiated.
/// This makes it so that `Value<EmptyObject>` is sure to be either a primitive
/// value or a sequence with no items.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
pub enum EmptyObject {}

impl HasLength for EmptyObject {
    fn length(&self) -> Length {
        match *self {}
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// This type is capable of representing any data element fully in memory,
/// whether it be a primitive value
/// or a nested data set (where each item contains an object of type `I`).
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DataElement<I = EmptyObject> {
    header: DataElementHeader,
    value: Value<I>,
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> HasLength for &DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        (**self).length()
    }
}

impl<I> Header for &DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader::new(tag, vr, Length(0)),
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Create a data element from a full header,
    /// as produced by a decoder which kept the VR exactly as encoded.
    ///
    /// This method will not check
    /// whether the length accurately represents the given value's byte length,
    /// nor whether the value representation is compatible with the value.
    pub fn from_parts<T>(header: DataElementHeader, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header,
            value: value.into(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the value representation as it was originally encoded.
    pub fn raw_vr(&self) -> RawVR {
        self.header.raw_vr
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Retrieve the items of a data set sequence,
    /// or `None` if the element holds a primitive value.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    /// Check whether this element holds a data set sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self.value, Value::Sequence(_))
    }

    /// Retrieve the element's value as a single clean string,
    /// with no trailing whitespace.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_str()
    }

    /// Get the inner sequence of string values.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        self.value.strings()
    }

    /// Get a single integer value.
    ///
    /// If it contains multiple values,
    /// only the first one is returned.
    /// An error is returned if the variant is not compatible.
    pub fn int(&self) -> Result<i64, CastValueError> {
        self.value.int()
    }

    /// Get the raw bytes of a byte blob value.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        self.value.bytes()
    }
}

impl<I> DataElement<I>
where
    I: HasLength,
{
    /// Create a data element from the given parts,
    /// where the length is inferred from the value's byte length
    /// and the raw VR is the same as the normalized one.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        DataElement {
            header: DataElementHeader::new(tag, vr, value.length()),
            value,
        }
    }

    /// Create a data element from the given parts,
    /// with an explicitly declared value length.
    pub fn new_with_len<T>(tag: Tag, vr: VR, length: Length, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header: DataElementHeader::new(tag, vr, length),
            value: value.into(),
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
///
/// The value representation as originally encoded is also kept,
/// since it may differ from the normalized form
/// (e.g. an unknown code read from the wire,
/// or a VR inferred from a dictionary in implicit VR encodings).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Value Representation as originally encoded
    pub raw_vr: RawVR,
    /// Element length
    pub len: Length,
}

impl PartialEq for DataElementHeader {
    /// Two undefined lengths are considered equal here,
    /// unlike the `PartialEq` implementation of [`Length`].
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.vr == other.vr
            && self.raw_vr == other.raw_vr
            && self.len.inner_eq(other.len)
    }
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// The raw VR is taken to be the same as `vr`.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            raw_vr: RawVR::from(vr),
            len,
        }
    }

    /// Create a new data element header
    /// with a raw VR distinct from the normalized one.
    #[inline]
    pub fn with_raw_vr<T: Into<Tag>>(
        tag: T,
        vr: VR,
        raw_vr: RawVR,
        len: Length,
    ) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            raw_vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd, Serialize)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// The value representation of an element exactly as it was encoded.
///
/// Unlike [`VR`], this type admits any pair of bytes,
/// so that unrecognized or non-conformant codes survive decoding.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct RawVR(pub [u8; 2]);

impl RawVR {
    /// Interpret the raw code as a known value representation, if possible.
    pub fn to_vr(self) -> Option<VR> {
        VR::from_binary(self.0)
    }
}

impl From<VR> for RawVR {
    #[inline]
    fn from(vr: VR) -> Self {
        RawVR(vr.to_bytes())
    }
}

impl fmt::Display for RawVR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &b in &self.0 {
            let c = if b.is_ascii_graphic() { b as char } else { '?' };
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

impl Serialize for RawVR {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group number, then by element number.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that numeric comparisons
/// do not function the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dcmtree_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
///
/// Comparing between at least one undefined length is always `false`.
///
/// ```
/// # use dcmtree_core::Length;
/// assert!(Length::defined(16) < Length::defined(64));
/// assert!(!(Length::UNDEFINED < Length::defined(64)));
/// assert!(!(Length::UNDEFINED > Length::defined(64)));
/// ```
#[derive(Clone, Copy, Serialize)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panic
    ///
    /// This function will panic if `len` represents an undefined length.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally specified as another length.
    /// Unlike the implemented `PartialEq`, two undefined lengths are
    /// considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;

    #[test]
    fn to_clean_string() {
        let element: DataElement = DataElement::new(
            Tag(0x0028, 0x3002),
            VR::US,
            dicom_value!(Ints, [256, 0, 16]),
        );
        assert_eq!(element.to_str().unwrap(), "256\\0\\16");
    }

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_total_order_is_group_then_element() {
        let mut tags = vec![
            Tag(0x0010, 0x0010),
            Tag(0x0002, 0x0010),
            Tag(0x0008, 0x0018),
            Tag(0x0002, 0x0001),
        ];
        tags.sort();
        assert_eq!(
            tags,
            vec![
                Tag(0x0002, 0x0001),
                Tag(0x0002, 0x0010),
                Tag(0x0008, 0x0018),
                Tag(0x0010, 0x0010),
            ]
        );
        assert_eq!(Tag(0x0001, 0xFFFF).cmp(&Tag(0x0002, 0x0000)), Ordering::Less);
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
        assert_eq!(Tag(0x0002, 0x0010).to_string(), "(0002,0010)");
    }

    #[test]
    fn raw_vr_may_differ_from_normalized_vr() {
        let header = DataElementHeader::with_raw_vr(
            Tag(0x0009, 0x1001),
            VR::UN,
            RawVR(*b"XX"),
            Length(4),
        );
        assert_eq!(header.vr(), VR::UN);
        assert_eq!(header.raw_vr.to_string(), "XX");
        assert_eq!(header.raw_vr.to_vr(), None);

        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8));
        assert_eq!(header.raw_vr, RawVR(*b"PN"));
        assert_eq!(header.raw_vr.to_vr(), Some(VR::PN));
    }

    #[test]
    fn header_equality_accepts_undefined_lengths() {
        let header = DataElementHeader::new(Tag(0x0008, 0x1140), VR::SQ, Length::UNDEFINED);
        assert_eq!(header, header);
        assert_ne!(
            header,
            DataElementHeader::new(Tag(0x0008, 0x1140), VR::SQ, Length(0))
        );
        assert_ne!(
            header,
            DataElementHeader::with_raw_vr(
                Tag(0x0008, 0x1140),
                VR::SQ,
                RawVR(*b"UN"),
                Length::UNDEFINED
            )
        );
    }

    #[test]
    fn vr_from_str() {
        assert_eq!("SQ".parse::<VR>(), Ok(VR::SQ));
        assert_eq!(VR::from_str("UI"), Ok(VR::UI));
        assert!(VR::from_str("ui").is_err());
        assert!(VR::from_str("XX").is_err());
    }

    #[test]
    fn raw_vr_replaces_unprintable_bytes() {
        assert_eq!(RawVR([0x00, b'B']).to_string(), "?B");
    }

    #[test]
    fn length_undefined_semantics() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(20).get(), Some(20));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
        assert_eq!(Length(20).to_string(), "20");
    }

    #[test]
    fn create_data_element_from_primitive() {
        let data_element: DataElement = DataElement::new(
            Tag(0x0028, 0x0010),
            VR::US,
            PrimitiveValue::from(512_i64),
        );

        assert_eq!(data_element.int().unwrap(), 512);
        assert!(!data_element.is_sequence());
        assert_eq!(data_element.raw_vr(), RawVR(*b"US"));
    }

    #[test]
    fn header_serializes_field_for_field() {
        let header = DataElementHeader::new(Tag(0x0002, 0x0010), VR::UI, Length(20));
        let json = serde_json::to_value(header).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": [2, 16],
                "vr": "UI",
                "raw_vr": "UI",
                "len": 20,
            })
        );
    }
}
