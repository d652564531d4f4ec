// SPDX-License-Identifier: MPL-2.0
//! Bounds-checked reads over an in-memory byte buffer.
//!
//! Every EXIF structure is addressed by integer offsets taken from the file
//! itself, so any of them may point past the end of the data. [`ByteReader`]
//! turns each such read into an explicit [`OutOfBounds`] error instead of a
//! panic or a silently wrong value.

use crate::domain::metadata::Rational;
use std::fmt;

/// Byte order of multi-byte integers inside a TIFF structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// "II" (Intel) order.
    LittleEndian,
    /// "MM" (Motorola) order, also used by all JPEG marker fields.
    BigEndian,
}

impl ByteOrder {
    /// Decodes a TIFF byte-order mark.
    ///
    /// The mark is symmetric ("II" or "MM"), so it can be read in either order.
    #[must_use]
    pub fn from_mark(mark: u16) -> Option<Self> {
        match mark {
            0x4949 => Some(ByteOrder::LittleEndian),
            0x4D4D => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }
}

/// A read that would extend past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Requested start offset.
    pub offset: usize,
    /// Requested number of bytes.
    pub len: usize,
    /// Size of the buffer that was read.
    pub available: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read of {} bytes at offset {} exceeds buffer of {} bytes",
            self.len, self.offset, self.available
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Offset-addressed reader over a borrowed byte slice.
///
/// # Example
///
/// ```
/// use geotag_lens::media::byte_reader::{ByteOrder, ByteReader};
///
/// let data = [0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
/// let reader = ByteReader::new(&data, ByteOrder::LittleEndian);
/// assert_eq!(reader.u16_at(0), Ok(42));
/// assert_eq!(reader.u32_at(2), Ok(8));
/// assert!(reader.u32_at(4).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    order: ByteOrder,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self { data, order }
    }

    /// Returns a reader over the same bytes using a different byte order.
    #[must_use]
    pub fn with_order(self, order: ByteOrder) -> Self {
        Self { order, ..self }
    }

    #[must_use]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `len` bytes starting at `offset`.
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], OutOfBounds> {
        let oob = OutOfBounds {
            offset,
            len,
            available: self.data.len(),
        };
        let end = offset.checked_add(len).ok_or(oob)?;
        self.data.get(offset..end).ok_or(oob)
    }

    pub fn u8_at(&self, offset: usize) -> Result<u8, OutOfBounds> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn u16_at(&self, offset: usize) -> Result<u16, OutOfBounds> {
        let raw = self.bytes(offset, 2)?;
        let raw = [raw[0], raw[1]];
        Ok(match self.order {
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
        })
    }

    pub fn u32_at(&self, offset: usize) -> Result<u32, OutOfBounds> {
        let raw = self.bytes(offset, 4)?;
        let raw = [raw[0], raw[1], raw[2], raw[3]];
        Ok(match self.order {
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
        })
    }

    /// Reads an unsigned rational: numerator then denominator, 4 bytes each.
    pub fn rational_at(&self, offset: usize) -> Result<Rational, OutOfBounds> {
        let numerator = self.u32_at(offset)?;
        let denominator = self.u32_at(offset.checked_add(4).ok_or(OutOfBounds {
            offset,
            len: 8,
            available: self.data.len(),
        })?)?;
        Ok(Rational::new(numerator, denominator))
    }
}
