// SPDX-License-Identifier: MPL-2.0
//! `geotag_lens` reads the GPS position embedded in a photo's EXIF metadata.
//!
//! It walks the raw JPEG marker structure, decodes the TIFF header and the
//! GPS Info IFD with bounds-checked reads, and converts the stored
//! degrees/minutes/seconds rationals to signed decimal degrees. Photos
//! without a usable geotag yield `None`; only failing to read a file is an
//! error.
//!
//! ```
//! use geotag_lens::extract_gps;
//!
//! let photo: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];
//! assert!(extract_gps(photo).is_none());
//! ```

#![doc(html_root_url = "https://docs.rs/geotag_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;

pub use domain::metadata::GpsCoordinates;
pub use error::{Error, ParseError, Result};
pub use media::gps::{extract_gps, read_gps_coordinates, ExtractorConfig, GpsExtractor};
