// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides pure domain types for photo geotags:
//! - [`Rational`]: EXIF unsigned rational
//! - [`DmsCoordinate`]: one axis in degrees/minutes/seconds plus hemisphere
//! - [`GpsCoordinates`]: signed decimal degrees
//!
//! Decoding these from raw bytes lives in [`crate::media`].

mod types;

pub use types::{DmsCoordinate, GpsCoordinates, Rational};
