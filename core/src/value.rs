//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! A value is a closed union of exactly two shapes:
//! a primitive list of scalars ([`PrimitiveValue`])
//! or a sequence of nested data set items ([`DataSetSequence`]).

use crate::header::{HasLength, Length};
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// See the macro [`dicom_value!`] for a more intuitive means
/// of constructing these values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-length values.
    Empty,
    /// A sequence of strings.
    /// Used for textual value representations (AE, CS, UI, PN, ...).
    Strs(C<String>),
    /// A sequence of signed integers.
    /// Used for binary integer value representations (US, SS, UL, SL, ...)
    /// and for IS after parsing.
    Ints(C<i64>),
    /// A sequence of floating point numbers.
    /// Used for FL, FD, and DS after parsing.
    Floats(C<f64>),
    /// An opaque blob of bytes.
    /// Used for OB, OW, UN and other binary value representations.
    Bytes(C<u8>),
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the `DataSetSequence` entry.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// A sequence of strings.
    Strs,
    /// A sequence of signed integers.
    Ints,
    /// A sequence of floating point numbers.
    Floats,
    /// A byte blob.
    Bytes,
    /// A data set sequence.
    DataSetSequence,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueType::Empty => "empty",
            ValueType::Strs => "strings",
            ValueType::Ints => "integers",
            ValueType::Floats => "floats",
            ValueType::Bytes => "bytes",
            ValueType::DataSetSequence => "data set sequence",
        };
        f.write_str(name)
    }
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
///
/// This error is raised whenever it is not possible to retrieve the requested
/// value, either because the inner representation is not compatible with the
/// requested value type, or a conversion would be required.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// Construct a DICOM primitive value.
///
/// ```
/// # use dcmtree_core::dicom_value;
/// # use dcmtree_core::value::PrimitiveValue;
/// let value = dicom_value!(Strs, ["1.2.840.10008.1.2.1"]);
/// assert_eq!(value.multiplicity(), 1);
/// let value = dicom_value!(Ints, [512, 512]);
/// assert_eq!(value.multiplicity(), 2);
/// ```
#[macro_export]
macro_rules! dicom_value {
    () => {
        $crate::value::PrimitiveValue::Empty
    };
    ($typ: ident, [ $($elem: expr),* $(,)? ]) => {
        {
            use $crate::smallvec::smallvec; // import smallvec macro
            $crate::value::PrimitiveValue :: $typ (smallvec![$($elem.into(),)*])
        }
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::PrimitiveValue :: $typ ($crate::value::C::from_elem($elem.into(), 1))
    };
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Strs(C::from_elem(value, 1))
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Strs(C::from_elem(value.to_owned(), 1))
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        PrimitiveValue::Ints(C::from_elem(value, 1))
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Floats(C::from_elem(value, 1))
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::Bytes(C::from_vec(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::Bytes(C::from_slice(value))
    }
}

impl PrimitiveValue {
    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Ints(_) => ValueType::Ints,
            PrimitiveValue::Floats(_) => ValueType::Floats,
            PrimitiveValue::Bytes(_) => ValueType::Bytes,
        }
    }

    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    ///
    /// A byte blob always counts as a single value.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Strs(c) => c.len() as u32,
            Ints(c) => c.len() as u32,
            Floats(c) => c.len() as u32,
            Bytes(_) => 1,
        }
    }

    /// Determine the length of the value
    /// as if it were encoded with strings separated by a backslash
    /// and binary numbers at their widest width.
    pub fn calculate_byte_len(&self) -> usize {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Strs(c) if c.is_empty() => 0,
            Strs(c) => {
                c.iter()
                    .map(|s| ((s.as_bytes().len() + 1) & !1) + 1)
                    .sum::<usize>()
                    - 1
            }
            Ints(c) => c.len() * 8,
            Floats(c) => c.len() * 8,
            Bytes(c) => c.len(),
        }
    }

    /// Get a single string value. If it contains multiple strings,
    /// only the first one is returned.
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Strs(c) if !c.is_empty() => Ok(&c[0]),
            PrimitiveValue::Strs(_) => Err(CastValueError {
                requested: "string",
                got: ValueType::Empty,
            }),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values.
    /// An error is returned if the variant is not compatible.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            PrimitiveValue::Strs(c) => Ok(c),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    /// Get a single integer. If it contains multiple values,
    /// only the first one is returned.
    /// An error is returned if the variant is not compatible.
    pub fn int(&self) -> Result<i64, CastValueError> {
        match self {
            PrimitiveValue::Ints(c) if !c.is_empty() => Ok(c[0]),
            PrimitiveValue::Ints(_) => Err(CastValueError {
                requested: "int",
                got: ValueType::Empty,
            }),
            value => Err(CastValueError {
                requested: "int",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of integers without copying.
    /// An error is returned if the variant is not compatible.
    pub fn ints(&self) -> Result<&[i64], CastValueError> {
        match self {
            PrimitiveValue::Ints(c) => Ok(c),
            value => Err(CastValueError {
                requested: "ints",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of floating point numbers without copying.
    /// An error is returned if the variant is not compatible.
    pub fn floats(&self) -> Result<&[f64], CastValueError> {
        match self {
            PrimitiveValue::Floats(c) => Ok(c),
            value => Err(CastValueError {
                requested: "floats",
                got: value.value_type(),
            }),
        }
    }

    /// Get the raw bytes of a byte blob.
    /// An error is returned if the variant is not compatible.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            PrimitiveValue::Bytes(c) => Ok(c),
            value => Err(CastValueError {
                requested: "bytes",
                got: value.value_type(),
            }),
        }
    }

    /// Convert the primitive value into a single string,
    /// with multiple values separated by a backslash (`\`).
    /// Trailing whitespace and null characters are removed
    /// from each string component.
    ///
    /// Byte blobs are rendered as backslash separated decimal numbers.
    pub fn to_str(&self) -> Cow<str> {
        fn join<T: fmt::Display>(items: &[T]) -> String {
            items
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\\")
        }

        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Strs(c) if c.len() == 1 => {
                Cow::from(c[0].trim_end_matches(whitespace_or_null))
            }
            PrimitiveValue::Strs(c) => Cow::from(
                c.iter()
                    .map(|s| s.trim_end_matches(whitespace_or_null))
                    .collect::<Vec<_>>()
                    .join("\\"),
            ),
            PrimitiveValue::Ints(c) => Cow::from(join(c)),
            PrimitiveValue::Floats(c) => Cow::from(join(c)),
            PrimitiveValue::Bytes(c) => Cow::from(join(c)),
        }
    }
}

impl HasLength for PrimitiveValue {
    fn length(&self) -> Length {
        length_from_byte_len(self.calculate_byte_len())
    }
}

/// Lengths which do not fit in the 32-bit length field,
/// or which collide with the undefined length, become undefined.
#[inline]
fn length_from_byte_len(len: usize) -> Length {
    u32::try_from(len)
        .ok()
        .map_or(Length::UNDEFINED, Length::new)
}

#[inline]
fn whitespace_or_null(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

/// A sequence of complex data set items of type `I`.
#[derive(Debug, Clone, Serialize)]
pub struct DataSetSequence<I> {
    /// The item sequence.
    items: C<I>,
    /// The sequence length in bytes.
    ///
    /// The value may be [`UNDEFINED`](Length::UNDEFINED)
    /// if the length is implicitly defined,
    /// otherwise it should match the full byte length
    /// of all items plus item headers.
    length: Length,
}

impl<I> PartialEq<DataSetSequence<I>> for DataSetSequence<I>
where
    I: PartialEq,
{
    /// This implementation only checks for item equality,
    /// disregarding the byte length.
    #[inline]
    fn eq(&self, other: &DataSetSequence<I>) -> bool {
        self.items() == other.items()
    }
}

impl<I> DataSetSequence<I> {
    /// Construct a DICOM data sequence
    /// using a sequence of items and a length.
    #[inline]
    pub fn new(items: impl Into<C<I>>, length: Length) -> Self {
        DataSetSequence {
            items: items.into(),
            length,
        }
    }

    /// Construct an empty DICOM data sequence,
    /// with undefined length.
    #[inline]
    pub fn empty() -> Self {
        DataSetSequence {
            items: Default::default(),
            length: Length::UNDEFINED,
        }
    }

    /// Gets a reference to the items of a sequence.
    #[inline]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Obtain the number of items in the sequence.
    #[inline]
    pub fn multiplicity(&self) -> u32 {
        self.items.len() as u32
    }

    /// Retrieve the sequence of items,
    /// discarding the recorded length information.
    #[inline]
    pub fn into_items(self) -> C<I> {
        self.items
    }
}

impl<I> HasLength for DataSetSequence<I> {
    #[inline]
    fn length(&self) -> Length {
        self.length
    }
}

impl<I, T> From<Vec<T>> for DataSetSequence<I>
where
    T: Into<I>,
{
    /// Converts a vector of items
    /// into a data set sequence with an undefined length.
    #[inline]
    fn from(items: Vec<T>) -> Self {
        DataSetSequence {
            items: items.into_iter().map(|item| item.into()).collect(),
            length: Length::UNDEFINED,
        }
    }
}

/// Representation of a full DICOM value, which may be either primitive or
/// a sequence of nested data set items.
///
/// `I` is the complex type for nested data set items, which should usually
/// implement [`HasLength`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value<I = crate::header::EmptyObject> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence(DataSetSequence<I>),
}

impl<I> Value<I> {
    /// Construct a DICOM data set sequence value
    /// from a list of items and length.
    #[inline]
    pub fn new_sequence<T>(items: T, length: Length) -> Self
    where
        T: Into<C<I>>,
    {
        Value::Sequence(DataSetSequence::new(items, length))
    }

    /// Obtain the number of individual values.
    /// In a primitive, this is the number of individual elements in the value.
    /// In a sequence, this is the number of items.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(v) => v.multiplicity(),
        }
    }

    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence(_) => ValueType::DataSetSequence,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            Value::Sequence(_) => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence(v) => Some(v.items()),
            Value::Primitive(_) => None,
        }
    }

    /// Retrieves the primitive value.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            Value::Sequence(_) => None,
        }
    }

    /// Retrieves the data set items,
    /// discarding the recorded length information.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence(v) => Some(v.into_items()),
            Value::Primitive(_) => None,
        }
    }

    /// Convert the primitive value into a single clean string.
    ///
    /// Returns an error if the value is a sequence.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.primitive()
            .map(PrimitiveValue::to_str)
            .ok_or(CastValueError {
                requested: "string",
                got: ValueType::DataSetSequence,
            })
    }

    /// Get the inner sequence of string values.
    ///
    /// Returns an error if the value is not a list of strings.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            Value::Primitive(v) => v.strings(),
            Value::Sequence(_) => Err(CastValueError {
                requested: "strings",
                got: ValueType::DataSetSequence,
            }),
        }
    }

    /// Get a single integer value.
    ///
    /// Returns an error if the value is not a list of integers.
    pub fn int(&self) -> Result<i64, CastValueError> {
        match self {
            Value::Primitive(v) => v.int(),
            Value::Sequence(_) => Err(CastValueError {
                requested: "int",
                got: ValueType::DataSetSequence,
            }),
        }
    }

    /// Get the raw bytes of a byte blob value.
    ///
    /// Returns an error if the value is not a byte blob.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            Value::Primitive(v) => v.bytes(),
            Value::Sequence(_) => Err(CastValueError {
                requested: "bytes",
                got: ValueType::DataSetSequence,
            }),
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<DataSetSequence<I>> for Value<I> {
    fn from(v: DataSetSequence<I>) -> Self {
        Value::Sequence(v)
    }
}

impl<I> HasLength for Value<I> {
    fn length(&self) -> Length {
        match self {
            Value::Primitive(v) => v.length(),
            Value::Sequence(v) => v.length(),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}
