// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scanning**: Bounds on the JPEG marker walk
//! - **Output**: Coordinate display settings

// ==========================================================================
// Scanning Defaults
// ==========================================================================

/// Default maximum number of JPEG segments visited before the EXIF segment.
pub const DEFAULT_MAX_SEGMENTS: usize = 256;

/// Minimum allowed segment limit.
pub const MIN_MAX_SEGMENTS: usize = 1;

/// Maximum allowed segment limit.
pub const MAX_MAX_SEGMENTS: usize = 4096;

/// Whether an exact (0, 0) geotag is reported as absent by default.
pub const DEFAULT_REJECT_NULL_ISLAND: bool = false;

// ==========================================================================
// Output Defaults
// ==========================================================================

/// Default number of decimals when printing coordinates.
pub const DEFAULT_PRECISION: usize = 6;

/// Minimum number of decimals.
pub const MIN_PRECISION: usize = 0;

/// Maximum number of decimals.
pub const MAX_PRECISION: usize = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Segment limit validation
    assert!(MIN_MAX_SEGMENTS > 0);
    assert!(MAX_MAX_SEGMENTS >= MIN_MAX_SEGMENTS);
    assert!(DEFAULT_MAX_SEGMENTS >= MIN_MAX_SEGMENTS);
    assert!(DEFAULT_MAX_SEGMENTS <= MAX_MAX_SEGMENTS);

    // Precision validation (the lower bound is zero)
    assert!(DEFAULT_PRECISION <= MAX_PRECISION);
};
