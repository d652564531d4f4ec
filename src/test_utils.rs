// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and synthetic geotagged JPEGs.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

use crate::media::byte_reader::ByteOrder;
use crate::media::tiff::{
    TAG_GPS_IFD_POINTER, TAG_GPS_LATITUDE, TAG_GPS_LATITUDE_REF, TAG_GPS_LONGITUDE,
};
use std::collections::HashMap;

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Tolerance for decimal degree comparisons.
pub const DEGREE_EPSILON: f64 = 1e-4;

const TYPE_BYTE: u16 = 1;
const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_VERSION_ID: u16 = 0x0000;

/// Logical geotag content, independent of byte order.
#[derive(Debug, Clone, Copy)]
pub struct GpsFixture {
    pub latitude: [(u32, u32); 3],
    pub latitude_ref: u8,
    pub longitude: [(u32, u32); 3],
    pub longitude_ref: u8,
}

impl GpsFixture {
    /// 37°47'26.4" N, 122°25'9.8" W
    pub fn san_francisco() -> Self {
        Self {
            latitude: [(37, 1), (47, 1), (264, 10)],
            latitude_ref: b'N',
            longitude: [(122, 1), (25, 1), (98, 10)],
            longitude_ref: b'W',
        }
    }

    /// 3°0'0" N, 0°0'0" E
    pub fn gulf_of_guinea() -> Self {
        Self {
            latitude: [(3, 1), (0, 1), (0, 1)],
            latitude_ref: b'N',
            longitude: [(0, 1), (0, 1), (0, 1)],
            longitude_ref: b'E',
        }
    }
}

/// Builds a TIFF payload: header, IFD0, GPS IFD, then the latitude and
/// longitude rationals (and a repeated latitude, if any), so the final byte
/// always belongs to a required value.
#[derive(Debug, Clone)]
pub struct TiffBuilder {
    order: ByteOrder,
    fixture: GpsFixture,
    with_gps_pointer: bool,
    gps_pointer: Option<u32>,
    omitted: Vec<u16>,
    counts: HashMap<u16, u32>,
    offsets: HashMap<u16, u32>,
    gps_entry_count: Option<u16>,
    repeated_latitude: Option<(u8, [(u32, u32); 3])>,
}

impl TiffBuilder {
    pub fn new(order: ByteOrder, fixture: GpsFixture) -> Self {
        Self {
            order,
            fixture,
            with_gps_pointer: true,
            gps_pointer: None,
            omitted: Vec::new(),
            counts: HashMap::new(),
            offsets: HashMap::new(),
            gps_entry_count: None,
            repeated_latitude: None,
        }
    }

    pub fn without_gps_pointer(mut self) -> Self {
        self.with_gps_pointer = false;
        self
    }

    pub fn gps_pointer(mut self, offset: u32) -> Self {
        self.gps_pointer = Some(offset);
        self
    }

    pub fn omit_tag(mut self, tag: u16) -> Self {
        self.omitted.push(tag);
        self
    }

    pub fn rational_count(mut self, tag: u16, count: u32) -> Self {
        self.counts.insert(tag, count);
        self
    }

    pub fn value_offset(mut self, tag: u16, offset: u32) -> Self {
        self.offsets.insert(tag, offset);
        self
    }

    /// Declares `count` GPS entries regardless of how many are written.
    pub fn gps_entry_count(mut self, count: u16) -> Self {
        self.gps_entry_count = Some(count);
        self
    }

    /// Appends a second latitude reference and latitude after the regular tags.
    pub fn repeat_latitude(mut self, reference: u8, latitude: [(u32, u32); 3]) -> Self {
        self.repeated_latitude = Some((reference, latitude));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let ifd0_entries = if self.with_gps_pointer { 2 } else { 1 };
        let ifd0_offset = 8u32;
        let gps_offset = ifd0_offset + ifd_len(ifd0_entries);

        let gps_tags: Vec<u16> = (0..=4u16)
            .filter(|tag| !self.omitted.contains(tag))
            .collect();
        let repeated_entries = if self.repeated_latitude.is_some() { 2 } else { 0 };
        let gps_entries = gps_tags.len() + repeated_entries;
        let latitude_offset = gps_offset + ifd_len(gps_entries);
        let longitude_offset = latitude_offset + 24;
        let repeated_offset = longitude_offset + 24;

        let mut out = Vec::new();
        match self.order {
            ByteOrder::LittleEndian => out.extend_from_slice(b"II"),
            ByteOrder::BigEndian => out.extend_from_slice(b"MM"),
        }
        self.put_u16(&mut out, 0x002A);
        self.put_u32(&mut out, ifd0_offset);

        self.put_u16(&mut out, ifd0_entries as u16);
        let mut orientation = [0u8; 4];
        orientation[..2].copy_from_slice(&self.u16_bytes(1));
        self.put_entry(&mut out, TAG_ORIENTATION, TYPE_SHORT, 1, orientation);
        if self.with_gps_pointer {
            let pointer = self.gps_pointer.unwrap_or(gps_offset);
            self.put_entry(&mut out, TAG_GPS_IFD_POINTER, TYPE_LONG, 1, self.u32_bytes(pointer));
        }
        self.put_u32(&mut out, 0);

        let declared = self.gps_entry_count.unwrap_or(gps_entries as u16);
        self.put_u16(&mut out, declared);
        for tag in &gps_tags {
            match *tag {
                TAG_GPS_VERSION_ID => {
                    self.put_entry(&mut out, TAG_GPS_VERSION_ID, TYPE_BYTE, 4, [2, 2, 0, 0]);
                }
                TAG_GPS_LATITUDE | TAG_GPS_LONGITUDE => {
                    let default_offset = if *tag == TAG_GPS_LATITUDE {
                        latitude_offset
                    } else {
                        longitude_offset
                    };
                    let count = self.counts.get(tag).copied().unwrap_or(3);
                    let offset = self.offsets.get(tag).copied().unwrap_or(default_offset);
                    self.put_entry(&mut out, *tag, TYPE_RATIONAL, count, self.u32_bytes(offset));
                }
                reference => {
                    let letter = if reference == 1 {
                        self.fixture.latitude_ref
                    } else {
                        self.fixture.longitude_ref
                    };
                    self.put_entry(&mut out, reference, TYPE_ASCII, 2, [letter, 0, 0, 0]);
                }
            }
        }
        if let Some((reference, _)) = self.repeated_latitude {
            self.put_entry(&mut out, TAG_GPS_LATITUDE_REF, TYPE_ASCII, 2, [reference, 0, 0, 0]);
            let offset = self.u32_bytes(repeated_offset);
            self.put_entry(&mut out, TAG_GPS_LATITUDE, TYPE_RATIONAL, 3, offset);
        }
        self.put_u32(&mut out, 0);

        let repeated = self.repeated_latitude.iter().flat_map(|(_, dms)| dms.iter());
        for (numerator, denominator) in self
            .fixture
            .latitude
            .iter()
            .chain(self.fixture.longitude.iter())
            .chain(repeated)
        {
            self.put_u32(&mut out, *numerator);
            self.put_u32(&mut out, *denominator);
        }

        out
    }

    fn put_entry(&self, out: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, value: [u8; 4]) {
        self.put_u16(out, tag);
        self.put_u16(out, field_type);
        self.put_u32(out, count);
        out.extend_from_slice(&value);
    }

    fn u16_bytes(&self, value: u16) -> [u8; 2] {
        match self.order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }

    fn u32_bytes(&self, value: u32) -> [u8; 4] {
        match self.order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }

    fn put_u16(&self, out: &mut Vec<u8>, value: u16) {
        out.extend_from_slice(&self.u16_bytes(value));
    }

    fn put_u32(&self, out: &mut Vec<u8>, value: u32) {
        out.extend_from_slice(&self.u32_bytes(value));
    }
}

fn ifd_len(entries: usize) -> u32 {
    (2 + entries * 12 + 4) as u32
}

/// Wraps a TIFF payload in a minimal JFIF file: SOI, APP0, APP1 Exif,
/// a quantization table, a scan and EOI.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut exif_payload = b"Exif\0\0".to_vec();
    exif_payload.extend_from_slice(tiff);

    let mut out = vec![0xFF, 0xD8];
    out.extend_from_slice(&segment(0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0"));
    out.extend_from_slice(&segment(0xE1, &exif_payload));
    out.extend_from_slice(&segment(0xDB, &[0u8; 65]));
    out.extend_from_slice(&segment(0xDA, &[0u8; 10]));
    out.extend_from_slice(&[0x12, 0x34, 0x56, 0xFF, 0x00, 0x78]);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// A JFIF file with no APP1 segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    jpeg_with_segments(&[])
}

/// SOI, APP0, the given extra segments, then scan data and EOI.
pub fn jpeg_with_segments(extra: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    out.extend_from_slice(&segment(0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0"));
    for s in extra {
        out.extend_from_slice(s);
    }
    out.extend_from_slice(&segment(0xDA, &[0u8; 10]));
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// A marker segment with a correct big-endian length.
pub fn segment(code: u8, payload: &[u8]) -> Vec<u8> {
    let length = u16::try_from(payload.len() + 2).expect("payload fits in a segment");
    let mut out = vec![0xFF, code];
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// A complete geotagged JPEG for the given byte order.
pub fn geotagged_jpeg(order: ByteOrder, fixture: GpsFixture) -> Vec<u8> {
    jpeg_with_exif(&TiffBuilder::new(order, fixture).build())
}
