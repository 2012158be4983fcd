//! Data element tag declarations
//!
//! Each constant maps an attribute keyword to its DICOM tag,
//! so that no dictionary look-up is needed at run time.
//! The same records make up the entries of the
//! [standard data dictionary](crate::StandardDataDictionary).

use dcmtree_core::dictionary::DataDictionaryEntryRef;
use dcmtree_core::{Tag, VR};

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// SourceImageSequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// DerivationCodeSequence (0008,9215) SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// ModalityLUTSequence (0028,3000) SQ
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUTDescriptor (0028,3002) US
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTData (0028,3006) US
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// IconImageSequence (0088,0200) SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// ExtendedOffsetTable (7FE0,0001) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData (7FE0,0008) OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Item (FFFE,E000) UN
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: VR::CS },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VR::UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: VR::DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: VR::DA },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: VR::DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: VR::DA },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: VR::TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: VR::TM },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: VR::TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: VR::TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VR::SH },
    E { tag: MODALITY, alias: "Modality", vr: VR::CS },
    E { tag: CONVERSION_TYPE, alias: "ConversionType", vr: VR::CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: VR::LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: CODE_VALUE, alias: "CodeValue", vr: VR::SH },
    E { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: CODE_MEANING, alias: "CodeMeaning", vr: VR::LO },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VR::LO },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: DERIVATION_CODE_SEQUENCE, alias: "DerivationCodeSequence", vr: VR::SQ },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: VR::PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: VR::LO },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VR::DA },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: VR::CS },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: VR::AS },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: VR::DS },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: VR::DS },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS },
    E { tag: KVP, alias: "KVP", vr: VR::DS },
    E { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: VR::LO },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: VR::LO },
    E { tag: PATIENT_POSITION, alias: "PatientPosition", vr: VR::CS },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: VR::SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS },
    E { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: VR::CS },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: SLICE_LOCATION, alias: "SliceLocation", vr: VR::DS },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VR::US },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS },
    E { tag: ROWS, alias: "Rows", vr: VR::US },
    E { tag: COLUMNS, alias: "Columns", vr: VR::US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: VR::US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: VR::US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: VR::US },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: VR::US },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VR::DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VR::DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS },
    E { tag: RESCALE_TYPE, alias: "RescaleType", vr: VR::LO },
    E { tag: MODALITY_LUT_SEQUENCE, alias: "ModalityLUTSequence", vr: VR::SQ },
    E { tag: LUT_DESCRIPTOR, alias: "LUTDescriptor", vr: VR::US },
    E { tag: LUT_DATA, alias: "LUTData", vr: VR::US },
    E { tag: VOILUT_SEQUENCE, alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: VR::SQ },
    E { tag: RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: VR::SQ },
    E { tag: EXTENDED_OFFSET_TABLE, alias: "ExtendedOffsetTable", vr: VR::OV },
    E { tag: EXTENDED_OFFSET_TABLE_LENGTHS, alias: "ExtendedOffsetTableLengths", vr: VR::OV },
    E { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VR::OF },
    E { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VR::OD },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: VR::OB },
    E { tag: ITEM, alias: "Item", vr: VR::UN },
    E { tag: ITEM_DELIMITATION_ITEM, alias: "ItemDelimitationItem", vr: VR::UN },
    E { tag: SEQUENCE_DELIMITATION_ITEM, alias: "SequenceDelimitationItem", vr: VR::UN },
];
