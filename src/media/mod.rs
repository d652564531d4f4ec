// SPDX-License-Identifier: MPL-2.0
//! Binary decoding of JPEG/EXIF geotags.
//!
//! - [`byte_reader`]: bounds-checked, endian-aware reads over a byte slice
//! - [`jpeg`]: marker walk to the EXIF APP1 segment
//! - [`tiff`]: TIFF header, IFD0 and GPS IFD decoding
//! - [`gps`]: the composed extractor

pub mod byte_reader;
pub mod gps;
pub mod jpeg;
pub mod tiff;

// Re-export commonly used types
pub use gps::{extract_gps, read_gps_coordinates, ExtractorConfig, GpsExtractor};
