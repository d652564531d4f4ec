// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that callers depend on instead of
//! concrete decoders. These traits use only domain types.
//!
//! # Available Ports
//!
//! - [`geotag`]: Reading GPS coordinates from image bytes

pub mod geotag;

// Re-export main types for convenience
pub use geotag::GeotagReader;
