// SPDX-License-Identifier: MPL-2.0
use crate::media::byte_reader::OutOfBounds;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a byte buffer yields no usable geotag.
///
/// None of these are surfaced by [`crate::media::gps::extract_gps`]; they all
/// collapse to `None` there. [`crate::media::gps::GpsExtractor::inspect`]
/// returns them for callers that want to know why a photo was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The buffer does not start with the JPEG Start-Of-Image marker.
    NotJpeg,

    /// The marker walk ended without finding an APP1 "Exif" segment.
    NoExifSegment,

    /// A byte where a marker prefix (0xFF) was expected.
    InvalidMarker { offset: usize, byte: u8 },

    /// A segment declared a length too small to cover its own length field.
    InvalidSegmentLength { offset: usize, length: u16 },

    /// The marker walk visited more segments than allowed.
    SegmentLimitExceeded(usize),

    /// The TIFF header byte-order mark is neither "II" nor "MM".
    InvalidByteOrder(u16),

    /// The TIFF magic number is not 42.
    InvalidTiffMagic(u16),

    /// An IFD offset points inside the 8-byte TIFF header.
    InvalidIfdOffset(u32),

    /// IFD0 has no GPS Info IFD pointer.
    NoGpsIfd,

    /// The GPS IFD lacks one of the latitude/longitude tags.
    MissingGpsTag(&'static str),

    /// A DMS tag holds fewer than three rationals.
    InvalidRationalCount { tag: u16, count: u32 },

    /// A DMS rational has a zero denominator.
    ZeroDenominator,

    /// The decoded coordinates are not finite or outside the valid range.
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    /// The geotag is exactly (0, 0) and null island fixes are rejected.
    NullIsland,

    /// A read went past the end of the buffer.
    OutOfBounds(OutOfBounds),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotJpeg => write!(f, "Not a JPEG file"),
            ParseError::NoExifSegment => write!(f, "No EXIF segment found"),
            ParseError::InvalidMarker { offset, byte } => {
                write!(f, "Invalid marker byte 0x{byte:02X} at offset {offset}")
            }
            ParseError::InvalidSegmentLength { offset, length } => {
                write!(f, "Invalid segment length {length} at offset {offset}")
            }
            ParseError::SegmentLimitExceeded(limit) => {
                write!(f, "More than {limit} JPEG segments before EXIF data")
            }
            ParseError::InvalidByteOrder(mark) => {
                write!(f, "Invalid TIFF byte order mark 0x{mark:04X}")
            }
            ParseError::InvalidTiffMagic(magic) => {
                write!(f, "Invalid TIFF magic number 0x{magic:04X}")
            }
            ParseError::InvalidIfdOffset(offset) => write!(f, "Invalid IFD offset {offset}"),
            ParseError::NoGpsIfd => write!(f, "No GPS IFD found"),
            ParseError::MissingGpsTag(tag) => write!(f, "GPS tag missing: {tag}"),
            ParseError::InvalidRationalCount { tag, count } => {
                write!(f, "GPS tag 0x{tag:04X} holds {count} rationals, expected 3")
            }
            ParseError::ZeroDenominator => write!(f, "GPS rational with zero denominator"),
            ParseError::CoordinateOutOfRange {
                latitude,
                longitude,
            } => write!(f, "GPS coordinates out of range: {latitude}, {longitude}"),
            ParseError::NullIsland => write!(f, "GPS coordinates are exactly (0, 0)"),
            ParseError::OutOfBounds(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<OutOfBounds> for ParseError {
    fn from(err: OutOfBounds) -> Self {
        ParseError::OutOfBounds(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
