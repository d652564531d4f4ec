// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for geotag metadata with no external dependencies.

// =============================================================================
// Rational
// =============================================================================

/// An unsigned EXIF rational (numerator / denominator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    #[must_use]
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the value as a float. A zero denominator yields NaN or infinity.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Returns the value as a float, or `None` if the denominator is zero.
    #[must_use]
    pub fn checked_to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.to_f64())
    }
}

// =============================================================================
// DmsCoordinate
// =============================================================================

/// One axis of a geotag in degrees, minutes and seconds.
///
/// `reference` is the hemisphere character from the GPS IFD: `N`/`S` for
/// latitude, `E`/`W` for longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsCoordinate {
    pub degrees: Rational,
    pub minutes: Rational,
    pub seconds: Rational,
    pub reference: char,
}

impl DmsCoordinate {
    #[must_use]
    pub fn new(components: [Rational; 3], reference: char) -> Self {
        let [degrees, minutes, seconds] = components;
        Self {
            degrees,
            minutes,
            seconds,
            reference,
        }
    }

    /// Returns `true` for the southern and western hemispheres.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        matches!(self.reference, 'S' | 'W')
    }

    /// Converts to signed decimal degrees.
    ///
    /// Zero denominators propagate as NaN or infinity; use
    /// [`DmsCoordinate::checked_to_decimal`] to reject them.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        self.signed(
            self.degrees.to_f64() + self.minutes.to_f64() / 60.0 + self.seconds.to_f64() / 3600.0,
        )
    }

    /// Converts to signed decimal degrees, returning `None` if any
    /// component has a zero denominator.
    #[must_use]
    pub fn checked_to_decimal(&self) -> Option<f64> {
        let degrees = self.degrees.checked_to_f64()?;
        let minutes = self.minutes.checked_to_f64()?;
        let seconds = self.seconds.checked_to_f64()?;
        Some(self.signed(degrees + minutes / 60.0 + seconds / 3600.0))
    }

    fn signed(&self, value: f64) -> f64 {
        if self.is_negative() {
            -value
        } else {
            value
        }
    }
}

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// This type represents geographic coordinates using the WGS84 coordinate
/// system (latitude and longitude in decimal degrees).
///
/// # Example
///
/// ```
/// use geotag_lens::domain::metadata::GpsCoordinates;
///
/// let coords = GpsCoordinates::new(48.8566, 2.3522); // Paris
/// assert!(coords.is_valid());
/// assert_eq!(coords.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates new GPS coordinates.
    ///
    /// Values outside valid ranges will be clamped:
    /// - Latitude: -90.0 to 90.0
    /// - Longitude: -180.0 to 180.0
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Creates new GPS coordinates, rejecting non-finite or out-of-range values.
    #[must_use]
    pub fn try_new(latitude: f64, longitude: f64) -> Option<Self> {
        let in_range = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        in_range.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether these coordinates are valid (not NaN or infinite).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns whether this is the null island (0,0) which often indicates
    /// missing or default GPS data.
    #[must_use]
    pub fn is_null_island(&self) -> bool {
        self.latitude.abs() < f64::EPSILON && self.longitude.abs() < f64::EPSILON
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with_precision(6)
    }

    /// Same as [`GpsCoordinates::format`] with a custom number of decimals.
    #[must_use]
    pub fn format_with_precision(&self, precision: usize) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.prec$}° {}, {:.prec$}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
            prec = precision
        )
    }

    /// Short signed label used when no address is known for the location.
    ///
    /// Format: "Lat: 37.7907, Lon: -122.4194"
    #[must_use]
    pub fn short_label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }

    /// Generates a URL to view these coordinates on a map.
    ///
    /// Returns a Google Maps URL for the location.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

impl Default for GpsCoordinates {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
