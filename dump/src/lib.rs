#![allow(clippy::derive_partial_eq_without_eq)]
//! DICOM data dumping library
//!
//! This is a helper library
//! for dumping the contents of in-memory DICOM data sets
//! in a human readable way.
//!
//! Every element of the data set is printed as a block,
//! including the elements nested in sequence items,
//! in the order of a depth-first traversal.
//! Nested blocks are indented one level deeper than their sequence.
//!
//! ```text
//! [
//!   Tag: (0002,0010)
//!   Tag Name: TransferSyntaxUID
//!   VR: UI
//!   VR Raw: UI
//!   VL: 20
//!   Value: ["1.2.840.10008.1.2.1"]
//! ]
//!
//! ```
//!
//! # Examples
//!
//! A quick and easy way to dump the contents of a data set
//! is via [`dump_object`]
//! (or [`dump_object_to`] to print to an arbitrary writer).
//!
//! ```
//! use dcmtree_object::DataSet;
//! use dcmtree_dump::dump_object;
//!
//! let obj = DataSet::new_empty();
//! dump_object(&obj)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! See the [`DumpOptions`] builder for additional dumping options.
//!
//! ```
//! use dcmtree_object::DataSet;
//! use dcmtree_dump::{ColorMode, DumpOptions};
//!
//! let obj = DataSet::new_empty();
//! let mut out = Vec::new();
//! DumpOptions::new()
//!     // four spaces per nesting level
//!     .indent_width(4)
//!     .color_mode(ColorMode::Never)
//!     .dump_object_to(&mut out, &obj)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dcmtree_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmtree_core::header::Header;
use dcmtree_core::value::{PrimitiveValue, Value as DicomValue};
use dcmtree_object::mem::{DataSet, InMemElement};
use dcmtree_object::StandardDataDictionary;
use owo_colors::*;
use std::fmt::{self, Display, Formatter};
use std::io::{stdout, Result as IoResult, Write};
use std::str::FromStr;

/// Options and flags to configure how to dump a DICOM data set.
///
/// This is a builder which exposes the various options available
/// for printing the contents of the data set in a readable way.
///
/// Once set up,
/// the [`dump_object`] or [`dump_object_to`] methods can be used
/// to finalize the dumping process.
///
/// [`dump_object`]: DumpOptions::dump_object
/// [`dump_object_to`]: DumpOptions::dump_object_to
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions {
    /// whether to produce colored output
    pub color: ColorMode,
    /// the number of spaces per nesting level
    pub indent_width: u32,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            color: ColorMode::default(),
            indent_width: 2,
        }
    }
}

impl DumpOptions {
    /// Create a new set of dump options with the default values:
    /// automatic coloring and an indentation of 2 spaces per level.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the output color mode.
    pub fn color_mode(&mut self, color: ColorMode) -> &mut Self {
        self.color = color;
        self
    }

    /// Set the number of spaces to indent each nesting level with.
    pub fn indent_width(&mut self, indent_width: u32) -> &mut Self {
        self.indent_width = indent_width;
        self
    }

    /// Dump the contents of a DICOM data set to standard output.
    #[inline]
    pub fn dump_object(&self, obj: &DataSet) -> IoResult<()> {
        self.dump_object_impl(stdout(), obj, &StandardDataDictionary, true)
    }

    /// Dump the contents of a DICOM data set to the given writer.
    #[inline]
    pub fn dump_object_to(&self, to: impl Write, obj: &DataSet) -> IoResult<()> {
        self.dump_object_impl(to, obj, &StandardDataDictionary, false)
    }

    /// Dump the contents of a DICOM data set to the given writer,
    /// resolving attribute names with the given data dictionary.
    #[inline]
    pub fn dump_object_with_dict_to<D>(
        &self,
        to: impl Write,
        obj: &DataSet,
        dict: &D,
    ) -> IoResult<()>
    where
        D: DataDictionary,
    {
        self.dump_object_impl(to, obj, dict, false)
    }

    fn dump_object_impl<D>(
        &self,
        mut to: impl Write,
        obj: &DataSet,
        dict: &D,
        to_stdout: bool,
    ) -> IoResult<()>
    where
        D: DataDictionary,
    {
        match (self.color, to_stdout) {
            (ColorMode::Never, _) => owo_colors::set_override(false),
            (ColorMode::Always, _) => owo_colors::set_override(true),
            (ColorMode::Auto, false) => owo_colors::set_override(false),
            (ColorMode::Auto, true) => owo_colors::unset_override(),
        }

        for (depth, elem) in obj.flat_iter_with_depth() {
            dump_element(&mut to, elem, depth * self.indent_width, dict)?;
        }

        Ok(())
    }
}

/// Enumeration of output coloring modes.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Produce colored output if supported by the destination
    /// (namely, if the destination is a terminal).
    /// When calling [`dump_object_to`](DumpOptions::dump_object_to),
    /// the output will not be colored.
    ///
    /// This is the default behavior.
    #[default]
    Auto,
    /// Never produce colored output.
    Never,
    /// Always produce colored output.
    Always,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Never => f.write_str("never"),
            ColorMode::Auto => f.write_str("auto"),
            ColorMode::Always => f.write_str("always"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ColorModeError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            _ => Err(ColorModeError),
        }
    }
}

/// The error raised when providing an invalid color mode.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ColorModeError;

impl Display for ColorModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid color mode")
    }
}

impl std::error::Error for ColorModeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DumpValue<T>
where
    T: ToString,
{
    TagNum(T),
    Alias(T),
    Num(T),
    Str(T),
    Invalid(T),
    Nothing,
}

impl<T> fmt::Display for DumpValue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DumpValue::TagNum(v) => {
                write!(f, "{}", v.if_supports_color(Stream::Stdout, |v| v.dimmed()))
            }
            DumpValue::Alias(v) => {
                write!(f, "{}", v.if_supports_color(Stream::Stdout, |v| v.bold()))
            }
            DumpValue::Num(v) => {
                write!(f, "{}", v.if_supports_color(Stream::Stdout, |v| v.cyan()))
            }
            DumpValue::Str(v) => {
                write!(f, "{}", v.if_supports_color(Stream::Stdout, |v| v.yellow()))
            }
            DumpValue::Invalid(v) => {
                write!(f, "{}", v.if_supports_color(Stream::Stdout, |v| v.red()))
            }
            DumpValue::Nothing => write!(
                f,
                "{}",
                "(no value)".if_supports_color(Stream::Stdout, |v| v.italic())
            ),
        }
    }
}

/// Dump the contents of a DICOM data set to stdout.
pub fn dump_object(obj: &DataSet) -> IoResult<()> {
    DumpOptions::new().dump_object(obj)
}

/// Dump the contents of a DICOM data set to the given writer.
pub fn dump_object_to(to: impl Write, obj: &DataSet) -> IoResult<()> {
    DumpOptions::new().dump_object_to(to, obj)
}

/// Render the contents of a DICOM data set into a string,
/// without colors.
pub fn to_string(obj: &DataSet) -> String {
    let mut out = Vec::new();
    let _ = DumpOptions::new()
        .color_mode(ColorMode::Never)
        .dump_object_to(&mut out, obj);
    String::from_utf8_lossy(&out).into_owned()
}

#[inline]
fn whitespace_or_null(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

/// Dump a single element as a block,
/// indented by the given number of spaces.
///
/// The elements of sequence items are not dumped here:
/// it is up to the caller to visit them.
pub fn dump_element<W, D>(to: &mut W, elem: &InMemElement, indent: u32, dict: &D) -> IoResult<()>
where
    W: ?Sized + Write,
    D: DataDictionary,
{
    let indent = " ".repeat(indent as usize);
    let tag_alias = dict
        .by_tag(elem.tag())
        .map(DataDictionaryEntry::alias)
        .unwrap_or("");
    let raw_vr = elem.raw_vr();
    let raw_vr = if raw_vr.to_vr().is_some() {
        DumpValue::Str(raw_vr)
    } else {
        DumpValue::Invalid(raw_vr)
    };

    writeln!(to, "{}[", indent)?;
    writeln!(to, "{}  Tag: {}", indent, DumpValue::TagNum(elem.tag()))?;
    writeln!(to, "{}  Tag Name: {}", indent, DumpValue::Alias(tag_alias))?;
    writeln!(to, "{}  VR: {}", indent, elem.vr())?;
    writeln!(to, "{}  VR Raw: {}", indent, raw_vr)?;
    writeln!(to, "{}  VL: {}", indent, elem.header().len)?;
    writeln!(to, "{}  Value: {}", indent, value_summary(elem.value()))?;
    writeln!(to, "{}]", indent)?;
    writeln!(to)?;

    Ok(())
}

fn value_summary<I>(value: &DicomValue<I>) -> DumpValue<String> {
    use PrimitiveValue::*;

    match value {
        DicomValue::Sequence(seq) => {
            let n = seq.multiplicity();
            DumpValue::Num(format!("({} Item{})", n, if n == 1 { "" } else { "s" }))
        }
        DicomValue::Primitive(Empty) => DumpValue::Nothing,
        DicomValue::Primitive(Strs(values)) => DumpValue::Str(format_value_list(
            values
                .iter()
                .map(|s| s.trim_end_matches(whitespace_or_null)),
            true,
        )),
        DicomValue::Primitive(Ints(values)) => DumpValue::Num(format_value_list(values, false)),
        DicomValue::Primitive(Floats(values)) => DumpValue::Num(format_value_list(values, false)),
        DicomValue::Primitive(Bytes(values)) => {
            DumpValue::Num(format!("[{} bytes]", values.len()))
        }
    }
}

fn format_value_list<I>(values: I, quoted: bool) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut pieces = String::from("[");
    for (i, piece) in values.into_iter().enumerate() {
        let mut piece = piece.to_string();
        // sanitize value piece
        piece = piece
            .replace('\n', "␊")
            .replace('\r', "␍")
            .replace('\0', "␀")
            .replace(|c: char| c.is_control(), "�");

        if i > 0 {
            pieces.push_str(", ");
        }

        if quoted {
            piece = piece.replace('\"', "\\\"");
            pieces.push('"');
        }
        pieces.push_str(&piece);
        if quoted {
            pieces.push('"');
        }
    }
    pieces.push(']');
    pieces
}
