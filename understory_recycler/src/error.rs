// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported by [`Recycler::initialize`](crate::Recycler::initialize).

use core::fmt;

/// A fatal problem with the host's geometry or element factory.
///
/// Initialization stops at the first error and leaves the engine
/// uninitialized; frame ticks are no-ops until a later
/// [`initialize`](crate::Recycler::initialize) succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The host has no item template to measure.
    MissingItemTemplate,
    /// The host has no viewport to measure.
    MissingViewport,
    /// The item extent along the scroll axis (margins included) is zero,
    /// negative, or not finite.
    InvalidItemExtent,
    /// The element factory could not produce an element for `slot`.
    ElementCreationFailed {
        /// Pool slot that was being filled.
        slot: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingItemTemplate => f.write_str("no item template to measure"),
            Self::MissingViewport => f.write_str("no viewport to measure"),
            Self::InvalidItemExtent => {
                f.write_str("item extent along the scroll axis must be positive and finite")
            }
            Self::ElementCreationFailed { slot } => {
                write!(f, "element factory failed to create an element for slot {slot}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
