// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports used by callers of the extractor.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The media layer implements application layer ports

pub mod port;
