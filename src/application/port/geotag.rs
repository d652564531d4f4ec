// SPDX-License-Identifier: MPL-2.0
//! Geotag reading port definition.
//!
//! Callers that pre-fill a location from a photo depend on [`GeotagReader`]
//! rather than on a concrete decoder, so they can fall back to another
//! location source (or a test double) without touching parsing code.

use crate::domain::metadata::GpsCoordinates;

// =============================================================================
// GeotagReader
// =============================================================================

/// Reads GPS coordinates embedded in image bytes.
///
/// # Example
///
/// ```
/// use geotag_lens::application::port::GeotagReader;
/// use geotag_lens::media::gps::GpsExtractor;
///
/// fn location_label(reader: &dyn GeotagReader, photo: &[u8]) -> String {
///     reader
///         .read_geotag(photo)
///         .map_or_else(|| "Location unknown".to_string(), |c| c.short_label())
/// }
///
/// assert_eq!(location_label(&GpsExtractor::default(), b""), "Location unknown");
/// ```
pub trait GeotagReader: Send + Sync {
    /// Returns the geotag, or `None` if the image carries no usable one.
    fn read_geotag(&self, data: &[u8]) -> Option<GpsCoordinates>;

    /// Returns `true` if the image carries a usable geotag.
    fn has_geotag(&self, data: &[u8]) -> bool {
        self.read_geotag(data).is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
