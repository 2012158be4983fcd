//! Utility module for fetching key attributes from a DICOM data set.

use crate::{
    CastValueSnafu, DecodeError, InvalidAttributeValueSnafu, MissingAttributeSnafu, Result,
};
use dcmtree_core::Tag;
use dcmtree_dictionary_std::tags;
use dcmtree_object::{AccessError, DataSet};
use snafu::{ensure, OptionExt, ResultExt};
use std::convert::TryFrom;

/// Get the Columns from the data set
pub fn cols(obj: &DataSet) -> Result<u16> {
    retrieve_required_u16(obj, tags::COLUMNS, "Columns")
}

/// Get the Rows from the data set
pub fn rows(obj: &DataSet) -> Result<u16> {
    retrieve_required_u16(obj, tags::ROWS, "Rows")
}

/// Get the SamplesPerPixel from the data set
pub fn samples_per_pixel(obj: &DataSet) -> Result<u16> {
    retrieve_required_u16(obj, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")
}

/// Get the BitsAllocated from the data set
pub fn bits_allocated(obj: &DataSet) -> Result<u16> {
    retrieve_required_u16(obj, tags::BITS_ALLOCATED, "BitsAllocated")
}

/// Get the bytes of the PixelData element from the data set
pub fn pixel_data(obj: &DataSet) -> Result<&[u8]> {
    obj.element(tags::PIXEL_DATA)
        .context(MissingAttributeSnafu { name: "PixelData" })?
        .bytes()
        .context(CastValueSnafu { name: "PixelData" })
}

/// Get the NumberOfFrames from the data set,
/// returning 1 if it is not present
pub fn number_of_frames(obj: &DataSet) -> Result<u32> {
    let name = "NumberOfFrames";
    let elem = match obj.element(tags::NUMBER_OF_FRAMES) {
        Ok(e) => e,
        Err(AccessError::ElementNotFound { .. }) => return Ok(1),
        Err(e) => return Err(e).context(MissingAttributeSnafu { name }),
    };

    // integer string in the standard, but may have been decoded as a number
    let integer = elem
        .int()
        .or_else(|e| {
            elem.to_str()
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .ok_or(e)
        })
        .context(CastValueSnafu { name })?;

    ensure!(
        integer > 0,
        InvalidAttributeValueSnafu {
            name,
            value: integer.to_string(),
        }
    );

    u32::try_from(integer).ok().context(InvalidAttributeValueSnafu {
        name,
        value: integer.to_string(),
    })
}

/// An interpreted representation of the DICOM _Pixel Representation_ attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum PixelRepresentation {
    /// unsigned pixel data sample values
    Unsigned,
    /// signed pixel data sample values
    Signed,
}

/// Get the PixelRepresentation from the data set
pub fn pixel_representation(obj: &DataSet) -> Result<PixelRepresentation> {
    let p = retrieve_required_u16(obj, tags::PIXEL_REPRESENTATION, "PixelRepresentation")?;

    match p {
        0 => Ok(PixelRepresentation::Unsigned),
        1 => Ok(PixelRepresentation::Signed),
        _ => InvalidAttributeValueSnafu {
            name: "PixelRepresentation",
            value: p.to_string(),
        }
        .fail(),
    }
}

#[inline]
fn retrieve_required_u16(obj: &DataSet, tag: Tag, name: &'static str) -> Result<u16, DecodeError> {
    let value = obj
        .element(tag)
        .context(MissingAttributeSnafu { name })?
        .int()
        .context(CastValueSnafu { name })?;

    u16::try_from(value).ok().context(InvalidAttributeValueSnafu {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtree_core::{dicom_value, DataElement, PrimitiveValue, VR};

    #[test]
    fn number_of_frames_defaults_to_one() {
        let obj = DataSet::new_empty();
        assert_eq!(number_of_frames(&obj).unwrap(), 1);
    }

    #[test]
    fn number_of_frames_from_integer_string() {
        let obj = DataSet::from_elements(vec![DataElement::new(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            dicom_value!(Strs, ["12 "]),
        )]);
        assert_eq!(number_of_frames(&obj).unwrap(), 12);

        let obj = DataSet::from_elements(vec![DataElement::new(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            PrimitiveValue::from(0_i64),
        )]);
        assert!(matches!(
            number_of_frames(&obj),
            Err(DecodeError::InvalidAttributeValue { name: "NumberOfFrames", .. })
        ));
    }

    #[test]
    fn required_attributes() {
        let obj = DataSet::from_elements(vec![
            DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(512_i64)),
            DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(70_000_i64)),
            DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, PrimitiveValue::from(1_i64)),
            DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from("16")),
        ]);

        assert_eq!(rows(&obj).unwrap(), 512);
        assert!(matches!(
            cols(&obj),
            Err(DecodeError::InvalidAttributeValue { name: "Columns", .. })
        ));
        assert_eq!(
            pixel_representation(&obj).unwrap(),
            PixelRepresentation::Signed
        );
        assert!(matches!(
            bits_allocated(&obj),
            Err(DecodeError::CastValue { name: "BitsAllocated", .. })
        ));
        assert!(matches!(
            samples_per_pixel(&obj),
            Err(DecodeError::MissingAttribute { name: "SamplesPerPixel", .. })
        ));
        assert!(matches!(
            pixel_data(&obj),
            Err(DecodeError::MissingAttribute { name: "PixelData", .. })
        ));
    }
}
