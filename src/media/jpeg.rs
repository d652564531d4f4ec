// SPDX-License-Identifier: MPL-2.0
//! JPEG marker walk that locates the EXIF APP1 segment.
//!
//! A JPEG file is a sequence of `FF xx` markers. Most carry a big-endian
//! length that includes the length field itself but not the marker. EXIF
//! metadata lives in an APP1 (`FF E1`) segment whose payload starts with
//! `"Exif\0\0"`, followed by a TIFF header.

use crate::error::ParseError;
use crate::media::byte_reader::{ByteOrder, ByteReader};

/// JPEG Start-Of-Image marker.
pub const SOI: u16 = 0xFFD8;

/// ASCII "Exif" read as a big-endian u32.
pub const EXIF_SIGNATURE: u32 = 0x4578_6966;

/// Distance from an APP1 marker to the TIFF header it carries
/// (marker, length, "Exif", two padding bytes).
pub const TIFF_HEADER_OFFSET: usize = 10;

const MARKER_PREFIX: u8 = 0xFF;
const APP1: u8 = 0xE1;
const SOS: u8 = 0xDA;
const EOI: u8 = 0xD9;
const TEM: u8 = 0x01;

/// Location of the EXIF payload inside a JPEG buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifSegment {
    /// Offset of the `FF E1` marker.
    pub marker_offset: usize,
    /// Declared segment length (length field included).
    pub length: u16,
    /// Offset of the TIFF header ("II"/"MM").
    pub tiff_offset: usize,
}

/// Returns `true` if the buffer starts with the JPEG SOI marker.
#[must_use]
pub fn is_jpeg(data: &[u8]) -> bool {
    ByteReader::new(data, ByteOrder::BigEndian).u16_at(0) == Ok(SOI)
}

/// Walks the JPEG marker structure and returns the first EXIF APP1 segment.
///
/// At most `max_segments` length-carrying segments are visited. Every
/// segment advances the walk by at least four bytes, so the scan always
/// terminates.
pub fn find_exif_segment(data: &[u8], max_segments: usize) -> Result<ExifSegment, ParseError> {
    if !is_jpeg(data) {
        return Err(ParseError::NotJpeg);
    }

    let reader = ByteReader::new(data, ByteOrder::BigEndian);
    let mut offset = 2;
    let mut segments = 0;

    while offset < reader.len() {
        let prefix = reader.u8_at(offset)?;
        if prefix != MARKER_PREFIX {
            return Err(ParseError::InvalidMarker {
                offset,
                byte: prefix,
            });
        }

        // A lone trailing 0xFF ends the file.
        let Ok(code) = reader.u8_at(offset + 1) else {
            break;
        };

        match code {
            // Fill byte before a marker
            MARKER_PREFIX => {
                offset += 1;
                continue;
            }
            // Metadata segments all precede the scan data
            SOS | EOI => {
                tracing::trace!(offset, code, "reached image data without EXIF segment");
                return Err(ParseError::NoExifSegment);
            }
            // Standalone markers carry no length
            0x00 | TEM | 0xD0..=0xD8 => {
                offset += 2;
                continue;
            }
            _ => {}
        }

        segments += 1;
        if segments > max_segments {
            return Err(ParseError::SegmentLimitExceeded(max_segments));
        }

        let length = reader.u16_at(offset + 2)?;
        if length < 2 {
            return Err(ParseError::InvalidSegmentLength { offset, length });
        }

        if code == APP1 && reader.u32_at(offset + 4) == Ok(EXIF_SIGNATURE) {
            tracing::trace!(offset, length, "found EXIF APP1 segment");
            return Ok(ExifSegment {
                marker_offset: offset,
                length,
                tiff_offset: offset + TIFF_HEADER_OFFSET,
            });
        }

        tracing::trace!(offset, code, length, "skipping JPEG segment");
        offset += 2 + usize::from(length);
    }

    Err(ParseError::NoExifSegment)
}
