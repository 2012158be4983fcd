//! This crate implements a standard DICOM data dictionary and constants.
//!
//! ## Run-time dictionary
//!
//! [`StandardDataDictionary`] translates tags into attribute keywords
//! and their typical value representations.
//! It is provided as a singleton behind a unit type,
//! and the index is built upon first use.
//! The records are collected from [DICOM PS3.6],
//! covering the attributes most commonly found in imaging objects.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The [`tags`] module contains constant declarations
//! which map an attribute alias to a DICOM tag at compile time,
//! thus without incurring a look-up cost.
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
