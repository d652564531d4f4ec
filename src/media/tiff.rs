// SPDX-License-Identifier: MPL-2.0
//! TIFF header and IFD decoding for the EXIF GPS sub-directory.
//!
//! All offsets inside an EXIF payload are relative to the start of its TIFF
//! header, so every function here takes a [`ByteReader`] positioned at that
//! header (offset 0 = the "II"/"MM" mark).

use crate::domain::metadata::{DmsCoordinate, Rational};
use crate::error::ParseError;
use crate::media::byte_reader::{ByteOrder, ByteReader, OutOfBounds};

pub const TIFF_MAGIC: u16 = 0x002A;
pub const TIFF_HEADER_LEN: u32 = 8;
pub const IFD_ENTRY_LEN: usize = 12;

pub const TAG_GPS_IFD_POINTER: u16 = 0x8825;
pub const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
pub const TAG_GPS_LATITUDE: u16 = 0x0002;
pub const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
pub const TAG_GPS_LONGITUDE: u16 = 0x0004;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: ByteOrder,
    pub first_ifd_offset: u32,
}

/// One 12-byte directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    /// The value field as stored, before byte-order interpretation.
    pub raw_value: [u8; 4],
    /// The value field read as a u32 (an offset for values over 4 bytes).
    pub value_offset: u32,
}

impl IfdEntry {
    /// First byte of an inline value, e.g. the letter of a GPS reference.
    #[must_use]
    pub fn inline_char(&self) -> char {
        char::from(self.raw_value[0])
    }
}

/// An image file directory: a u16 entry count followed by the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ifd {
    pub offset: usize,
    pub entry_count: u16,
}

impl Ifd {
    pub fn read(reader: &ByteReader<'_>, offset: usize) -> Result<Self, OutOfBounds> {
        Ok(Self {
            offset,
            entry_count: reader.u16_at(offset)?,
        })
    }

    pub fn entry(&self, reader: &ByteReader<'_>, index: u16) -> Result<IfdEntry, OutOfBounds> {
        let base = self.offset + 2 + usize::from(index) * IFD_ENTRY_LEN;
        let raw = reader.bytes(base + 8, 4)?;
        Ok(IfdEntry {
            tag: reader.u16_at(base)?,
            field_type: reader.u16_at(base + 2)?,
            count: reader.u32_at(base + 4)?,
            raw_value: [raw[0], raw[1], raw[2], raw[3]],
            value_offset: reader.u32_at(base + 8)?,
        })
    }

    /// Entries in file order. Each one is read lazily, so a directory
    /// truncated after the entry a caller needs still yields that entry.
    pub fn entries<'a>(
        &self,
        reader: ByteReader<'a>,
    ) -> impl Iterator<Item = Result<IfdEntry, OutOfBounds>> + 'a {
        let ifd = *self;
        (0..ifd.entry_count).map(move |index| ifd.entry(&reader, index))
    }
}

/// Reads and validates the 8-byte TIFF header.
pub fn read_tiff_header(tiff: &[u8]) -> Result<TiffHeader, ParseError> {
    let reader = ByteReader::new(tiff, ByteOrder::BigEndian);
    let mark = reader.u16_at(0)?;
    let byte_order = ByteOrder::from_mark(mark).ok_or(ParseError::InvalidByteOrder(mark))?;

    let reader = reader.with_order(byte_order);
    let magic = reader.u16_at(2)?;
    if magic != TIFF_MAGIC {
        return Err(ParseError::InvalidTiffMagic(magic));
    }

    let first_ifd_offset = reader.u32_at(4)?;
    if first_ifd_offset < TIFF_HEADER_LEN {
        return Err(ParseError::InvalidIfdOffset(first_ifd_offset));
    }

    Ok(TiffHeader {
        byte_order,
        first_ifd_offset,
    })
}

/// Returns the GPS IFD offset stored in IFD0.
pub fn find_gps_ifd(reader: &ByteReader<'_>, ifd0_offset: u32) -> Result<u32, ParseError> {
    let ifd0 = Ifd::read(reader, ifd0_offset as usize)?;
    for entry in ifd0.entries(*reader) {
        let entry = entry?;
        if entry.tag == TAG_GPS_IFD_POINTER {
            if entry.value_offset < TIFF_HEADER_LEN {
                return Err(ParseError::InvalidIfdOffset(entry.value_offset));
            }
            return Ok(entry.value_offset);
        }
    }
    Err(ParseError::NoGpsIfd)
}

/// Raw latitude/longitude tags collected from the GPS IFD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpsTags {
    pub latitude_ref: Option<char>,
    pub latitude: Option<[Rational; 3]>,
    pub longitude_ref: Option<char>,
    pub longitude: Option<[Rational; 3]>,
}

impl GpsTags {
    /// Returns `true` once both axes and both references are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.latitude_ref.is_some()
            && self.latitude.is_some()
            && self.longitude_ref.is_some()
            && self.longitude.is_some()
    }

    /// Pairs each axis with its reference, failing on the first missing tag.
    pub fn into_dms(self) -> Result<(DmsCoordinate, DmsCoordinate), ParseError> {
        let latitude = self
            .latitude
            .ok_or(ParseError::MissingGpsTag("GPSLatitude"))?;
        let latitude_ref = self
            .latitude_ref
            .ok_or(ParseError::MissingGpsTag("GPSLatitudeRef"))?;
        let longitude = self
            .longitude
            .ok_or(ParseError::MissingGpsTag("GPSLongitude"))?;
        let longitude_ref = self
            .longitude_ref
            .ok_or(ParseError::MissingGpsTag("GPSLongitudeRef"))?;

        Ok((
            DmsCoordinate::new(latitude, latitude_ref),
            DmsCoordinate::new(longitude, longitude_ref),
        ))
    }
}

/// Scans the GPS IFD for the four position tags. Other tags are ignored and
/// a repeated tag replaces the earlier value.
///
/// A directory whose declared count runs past the end of the data keeps the
/// tags read so far, provided all four were found.
pub fn read_gps_tags(reader: &ByteReader<'_>, gps_offset: u32) -> Result<GpsTags, ParseError> {
    let gps_ifd = Ifd::read(reader, gps_offset as usize)?;
    let mut tags = GpsTags::default();

    for entry in gps_ifd.entries(*reader) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if tags.is_complete() => {
                tracing::debug!(%err, "GPS IFD truncated after position tags");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        match entry.tag {
            TAG_GPS_LATITUDE_REF => tags.latitude_ref = Some(entry.inline_char()),
            TAG_GPS_LATITUDE => tags.latitude = Some(read_dms_components(reader, &entry)?),
            TAG_GPS_LONGITUDE_REF => tags.longitude_ref = Some(entry.inline_char()),
            TAG_GPS_LONGITUDE => tags.longitude = Some(read_dms_components(reader, &entry)?),
            _ => {}
        }
    }

    Ok(tags)
}

/// Reads degrees, minutes and seconds from a rational array tag.
fn read_dms_components(
    reader: &ByteReader<'_>,
    entry: &IfdEntry,
) -> Result<[Rational; 3], ParseError> {
    if entry.count < 3 {
        return Err(ParseError::InvalidRationalCount {
            tag: entry.tag,
            count: entry.count,
        });
    }

    let base = entry.value_offset as usize;
    Ok([
        reader.rational_at(base)?,
        reader.rational_at(base + 8)?,
        reader.rational_at(base + 16)?,
    ])
}

/// Decodes the latitude and longitude axes from a TIFF payload.
pub fn decode_gps(tiff: &[u8]) -> Result<(DmsCoordinate, DmsCoordinate), ParseError> {
    let header = read_tiff_header(tiff)?;
    let reader = ByteReader::new(tiff, header.byte_order);
    let gps_offset = find_gps_ifd(&reader, header.first_ifd_offset)?;
    read_gps_tags(&reader, gps_offset)?.into_dms()
}
