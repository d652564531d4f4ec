// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core geotag types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and conversion rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`metadata`]: Geotag types ([`Rational`](metadata::Rational),
//!   [`DmsCoordinate`](metadata::DmsCoordinate), [`GpsCoordinates`](metadata::GpsCoordinates))

pub mod metadata;
