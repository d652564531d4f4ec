// SPDX-License-Identifier: MPL-2.0
//! GPS coordinate extraction from JPEG EXIF data.
//!
//! Composes the marker walk ([`crate::media::jpeg`]), the TIFF/IFD decoder
//! ([`crate::media::tiff`]) and the DMS conversion
//! ([`crate::domain::metadata`]) into a single best-effort call.
//!
//! Format problems never surface as errors: a photo without a usable
//! geotag simply yields `None`. Only failing to obtain the bytes (reading
//! a file) is reported as [`Error::Io`].

use crate::application::port::GeotagReader;
use crate::config::{Config, DEFAULT_MAX_SEGMENTS, DEFAULT_REJECT_NULL_ISLAND};
use crate::domain::metadata::GpsCoordinates;
use crate::error::{Error, ParseError, Result};
use crate::media::byte_reader::OutOfBounds;
use crate::media::{jpeg, tiff};
use std::fs;
use std::path::Path;

/// Tunable limits for [`GpsExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Maximum JPEG segments visited before giving up.
    pub max_segments: usize,
    /// Report an exact (0, 0) fix as absent.
    pub reject_null_island: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            reject_null_island: DEFAULT_REJECT_NULL_ISLAND,
        }
    }
}

impl From<&Config> for ExtractorConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_segments: config.max_segments(),
            reject_null_island: config.reject_null_island(),
        }
    }
}

/// Reads geotags from in-memory JPEG bytes.
///
/// The extractor holds no state besides its configuration; every call is
/// independent, so one instance can be shared freely across threads.
///
/// # Example
///
/// ```
/// use geotag_lens::media::gps::GpsExtractor;
///
/// let extractor = GpsExtractor::default();
/// assert!(extractor.extract(b"not a jpeg").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GpsExtractor {
    config: ExtractorConfig,
}

impl GpsExtractor {
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// Decodes the geotag, reporting why it is absent or unusable.
    pub fn inspect(&self, data: &[u8]) -> std::result::Result<GpsCoordinates, ParseError> {
        let segment = jpeg::find_exif_segment(data, self.config.max_segments)?;
        let tiff_data = data.get(segment.tiff_offset..).ok_or(OutOfBounds {
            offset: segment.tiff_offset,
            len: 0,
            available: data.len(),
        })?;

        let (latitude, longitude) = tiff::decode_gps(tiff_data)?;
        let latitude = latitude
            .checked_to_decimal()
            .ok_or(ParseError::ZeroDenominator)?;
        let longitude = longitude
            .checked_to_decimal()
            .ok_or(ParseError::ZeroDenominator)?;

        let coords = GpsCoordinates::try_new(latitude, longitude).ok_or(
            ParseError::CoordinateOutOfRange {
                latitude,
                longitude,
            },
        )?;

        if self.config.reject_null_island && coords.is_null_island() {
            return Err(ParseError::NullIsland);
        }

        Ok(coords)
    }

    /// Returns the geotag, or `None` when the bytes carry no usable one.
    #[must_use]
    pub fn extract(&self, data: &[u8]) -> Option<GpsCoordinates> {
        match self.inspect(data) {
            Ok(coords) => {
                tracing::debug!(
                    latitude = coords.latitude(),
                    longitude = coords.longitude(),
                    "geotag found"
                );
                Some(coords)
            }
            Err(reason) => {
                tracing::debug!(%reason, "no usable geotag");
                None
            }
        }
    }

    /// Reads a whole file and extracts its geotag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read. A readable file
    /// without a geotag is `Ok(None)`.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<GpsCoordinates>> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| io_error(path, &e))?;
        Ok(self.extract(&data))
    }

    /// Async variant of [`GpsExtractor::read_file`]; only the read is
    /// asynchronous, the parse runs to completion in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub async fn read_file_async<P: AsRef<Path>>(&self, path: P) -> Result<Option<GpsCoordinates>> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| io_error(path, &e))?;
        Ok(self.extract(&data))
    }
}

impl GeotagReader for GpsExtractor {
    fn read_geotag(&self, data: &[u8]) -> Option<GpsCoordinates> {
        self.extract(data)
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> Error {
    Error::Io(format!("Failed to read {}: {err}", path.display()))
}

/// Extracts a geotag from JPEG bytes with default settings.
#[must_use]
pub fn extract_gps(data: &[u8]) -> Option<GpsCoordinates> {
    GpsExtractor::default().extract(data)
}

/// Reads a JPEG file asynchronously and extracts its geotag with default settings.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub async fn read_gps_coordinates<P: AsRef<Path>>(path: P) -> Result<Option<GpsCoordinates>> {
    GpsExtractor::default().read_file_async(path).await
}
